use std::process::ExitCode;

use clap::Parser;

use calcmcp::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is reserved for MCP message framing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Arguments::parse();

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = calcmcp::mcp::run_server() {
            tracing::error!(error = %err, "failed to start calculator MCP server");
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match calcmcp::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
