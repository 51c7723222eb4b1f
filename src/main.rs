use clap::Parser;
use pondus::app::{settle, App};
use pondus::cli::{run_poll_command, Cli, Command};
use pondus::util::logging::{self, LogTarget};
use pondus::{error, Result};
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", error::user_friendly_message(&e));
        std::process::exit(error::exit_code(&e));
    }
}

async fn run(mut cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    config.validate()?;

    match cli.command.take() {
        Some(Command::Poll { action }) => {
            logging::init(&LogTarget::Stderr)?;
            let storage = cli.poll_storage()?;
            let output = run_poll_command(action, &storage, &config)?;
            println!("{}", output);
            Ok(())
        }
        Some(Command::Tui) | None => {
            logging::init(&LogTarget::File(logging::log_file_path()?))?;
            info!(user = %config.user, "starting card");

            let mut app = App::new(&config)?;
            app.init()?;
            let result = app.run().await;
            let restored = app.restore();
            settle(result, restored)
        }
    }
}
