mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, rejected) = match env_level.as_deref().map(str::trim) {
        _ if cli.verbose => (tracing::Level::DEBUG, None),
        None | Some("") => (DEFAULT_LOG_LEVEL, None),
        Some(raw) => match parse_log_level(raw) {
            Some(level) => (level, None),
            None => (DEFAULT_LOG_LEVEL, Some(raw)),
        },
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");
    if let Some(raw) = rejected {
        log::warn!("Ignoring invalid `LOG_LEVEL` value `{raw}`.");
    }
}

/// Any `tracing` level name in any case, or `verbose` for `debug`.
fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    if raw.eq_ignore_ascii_case("verbose") {
        return Some(tracing::Level::DEBUG);
    }
    raw.parse().ok()
}
