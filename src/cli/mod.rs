//! Interactive command-line front end
//!
//! `command` is the pure layer that applies actions to a `Session`; `shell`
//! drives it from a line-based terminal transcript.

pub mod command;
pub mod menu;
pub mod prompt;
pub mod session;
pub mod shell;

pub use command::{execute, Command, Outcome};
pub use session::Session;
pub use shell::Shell;
