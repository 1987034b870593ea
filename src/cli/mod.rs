use anyhow::Result;

mod args;
mod exit_status;

pub use args::{Arguments, Command, EvalArgs};
pub use exit_status::ExitStatus;

use crate::evaluator::calculate;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Eval(cmd)) => {
            // Same contract as the MCP tool: failures become a formatted
            // message, not a non-zero exit.
            println!("{}", calculate(&cmd.expression));
            Ok(ExitStatus::Success)
        }
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run_cli()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
