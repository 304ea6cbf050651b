//! Interactive read loop.

use super::handlers::{handle_line, Outcome};
use crate::repositories::ContactRepository;
use crate::services::{Clock, ContactService};
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GOODBYE: &str = "Goodbye!";

/// Read commands from `input` until `exit`/`close` or end of input.
///
/// Replies go to `output`, one per command, each after `prompt`.
pub fn run<R, C, I, O>(
    service: &mut ContactService<R, C>,
    prompt: &str,
    mut input: I,
    mut output: O,
) -> io::Result<()>
where
    R: ContactRepository,
    C: Clock,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("End of input");
            writeln!(output)?;
            break;
        }

        match handle_line(service, &line) {
            Some(Outcome::Reply(text)) => writeln!(output, "{}", text)?,
            Some(Outcome::Exit) => break,
            None => {}
        }
    }

    writeln!(output, "{}", GOODBYE)?;
    output.flush()
}
