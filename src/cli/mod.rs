//! Line-oriented command interpreter.
//!
//! - **parser**: splits a line into a [`Command`]
//! - **handlers**: runs commands and renders replies and errors
//! - **repl**: the prompt/read/print loop

pub mod handlers;
pub mod parser;
pub mod repl;

pub use handlers::{execute, handle_line, render_error, Outcome};
pub use parser::Command;
pub use repl::run;
