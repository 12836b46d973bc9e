use std::process::ExitCode;

use mailbox_chess::config::GameConfig;
use mailbox_chess::frontend::terminal::run_stdio_loop;

fn main() -> ExitCode {
    env_logger::init();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    log::info!("starting session with {config:?}");

    if let Err(err) = run_stdio_loop(config) {
        eprintln!("terminal error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
