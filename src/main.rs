// file: src/main.rs
// version: 2.0.0
// guid: 4e47ebaa-ad85-4977-96fa-221eedaeba0a

//! Buildbot update step - Main entry point

use buildbot_update::{
    config::ArgBuilderFactory, launcher::ProcessLauncher, logging::logger, update::Updater,
    UpdateError,
};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = logger::init_logger() {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }

    let updater = Updater::new(ArgBuilderFactory::new(), ProcessLauncher::new());

    let code = match updater.run(std::env::args_os().collect()).await {
        Ok(code) => code,
        Err(UpdateError::Argument(e)) => {
            // clap renders usage errors, --help and --version itself
            let _ = e.print();
            e.exit_code()
        }
        Err(e) => {
            error!("{}", e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
