use std::process::ExitCode;

use calc_server::{serve, ServerConfig};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "calc_server",
    version,
    about = "Serve arithmetic evaluation over HTTP",
    long_about = "Serves POST /api/v1/calculate with a JSON body {\"expression\": \"...\"}.\n\n\
        The port defaults to $PORT, or 8080 when unset."
)]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match serve(&cli.config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
