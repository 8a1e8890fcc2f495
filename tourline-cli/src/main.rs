//! Entry point for the `tourline` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use tourline_cli::CliError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match tourline_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => report(&err),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report(err: &CliError) -> ExitCode {
    eprintln!("tourline: {err}");
    ExitCode::FAILURE
}
