//! Command dispatch: bridges CLI args -> snapshot selectors -> output formatting.

pub mod check;
pub mod config_cmd;
pub mod entities;
pub mod init;
pub mod status;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a snapshot-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Status(args) => status::handle(&args, settings),
        Command::List(args) => entities::list(&args, settings),
        Command::Get(args) => entities::get(&args, settings),
        Command::Selected(args) => entities::selected(&args, settings),
        Command::Check(args) => check::handle(&args, settings),
        Command::Init(args) => init::handle(&args, settings),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
