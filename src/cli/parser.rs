//! Command line tokenizer.

use crate::error::{CommandError, CommandResult};

/// A parsed command with its arguments.
///
/// Extra trailing arguments are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    FindPhone { name: String, phone: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
    Unknown(String),
}

/// Take exactly `N` leading arguments or report how many were expected.
fn take<const N: usize>(command: &str, args: &[&str]) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments {
            command: command.to_string(),
            expected: N,
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line. The command word is matched
    /// case-insensitively; arguments are kept as typed.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let word = word.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match word.as_str() {
            "hello" => Self::Hello,
            "add" => {
                let [name, phone] = take::<2>(&word, &args)?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, old_phone, new_phone] = take::<3>(&word, &args)?;
                Self::Change {
                    name,
                    old_phone,
                    new_phone,
                }
            }
            "phone" => {
                let [name] = take::<1>(&word, &args)?;
                Self::Phone { name }
            }
            "find-phone" => {
                let [name, phone] = take::<2>(&word, &args)?;
                Self::FindPhone { name, phone }
            }
            "remove-phone" => {
                let [name, phone] = take::<2>(&word, &args)?;
                Self::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = take::<1>(&word, &args)?;
                Self::Delete { name }
            }
            "all" => Self::All,
            "add-birthday" => {
                let [name, date] = take::<2>(&word, &args)?;
                Self::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take::<1>(&word, &args)?;
                Self::ShowBirthday { name }
            }
            "birthdays" => Self::Birthdays,
            "exit" | "close" => Self::Exit,
            _ => Self::Unknown(word),
        };

        Ok(Some(command))
    }
}
