//! Command handlers.
//!
//! Each handler runs one command against the contact service and turns the
//! result into the single line (or block) of text shown to the user. Errors
//! never escape: every failure becomes a message.

use super::parser::Command;
use crate::error::{CommandError, CommandResult};
use crate::repositories::ContactRepository;
use crate::services::{AddOutcome, Clock, ContactService};

/// What the interpreter should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Reply(String),
    /// Stop reading input
    Exit,
}

/// Render a failed command as a user-facing message.
pub fn render_error(err: &CommandError) -> String {
    tracing::warn!(error = ?err, "Command failed");
    err.to_string()
}

/// Parse and run one input line.
///
/// Returns `None` for blank lines.
pub fn handle_line<R, C>(service: &mut ContactService<R, C>, line: &str) -> Option<Outcome>
where
    R: ContactRepository,
    C: Clock,
{
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return None,
        Err(err) => return Some(Outcome::Reply(render_error(&err))),
    };

    tracing::debug!(?command, "Dispatching command");

    let outcome = match execute(service, command) {
        Ok(outcome) => outcome,
        Err(err) => Outcome::Reply(render_error(&err)),
    };
    Some(outcome)
}

/// Run a parsed command.
pub fn execute<R, C>(service: &mut ContactService<R, C>, command: Command) -> CommandResult<Outcome>
where
    R: ContactRepository,
    C: Clock,
{
    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => match service.add_contact(&name, &phone)? {
            AddOutcome::Added => "Contact added.".to_string(),
            AddOutcome::Updated => "Contact updated.".to_string(),
        },
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => {
            // A missing old phone is not reported separately
            service.change_phone(&name, &old_phone, &new_phone)?;
            "Contact's phone changed.".to_string()
        }
        Command::Phone { name } => service
            .phones(&name)?
            .iter()
            .map(|phone| phone.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        Command::FindPhone { name, phone } => match service.find_phone(&name, &phone)? {
            Some(found) => found.to_string(),
            None => format!("Phone {} not found for {}.", phone, name),
        },
        Command::RemovePhone { name, phone } => match service.remove_phone(&name, &phone)? {
            Some(_) => "Phone removed.".to_string(),
            None => format!("Phone {} not found for {}.", phone, name),
        },
        Command::Delete { name } => match service.delete_contact(&name) {
            Some(_) => "Contact deleted.".to_string(),
            None => format!("Contact {} is not stored, nothing to delete.", name),
        },
        Command::All => {
            let lines: Vec<String> = service.all_contacts().map(|r| r.describe()).collect();
            if lines.is_empty() {
                "Contacts not found".to_string()
            } else {
                lines.join("\n")
            }
        }
        Command::AddBirthday { name, date } => {
            let birthday = service.set_birthday(&name, &date)?;
            format!("Birthday {} added to {}", birthday, name)
        }
        Command::ShowBirthday { name } => match service.birthday(&name)? {
            Some(birthday) => birthday.to_string(),
            None => "User didn't add birthday".to_string(),
        },
        Command::Birthdays => {
            let reminders = service.upcoming_birthdays();
            if reminders.is_empty() {
                "No upcoming birthdays for the week ahead".to_string()
            } else {
                reminders
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        Command::Exit => return Ok(Outcome::Exit),
        Command::Unknown(word) => {
            tracing::info!(command = %word, "Unknown command");
            "Invalid command.".to_string()
        }
    };

    Ok(Outcome::Reply(reply))
}
