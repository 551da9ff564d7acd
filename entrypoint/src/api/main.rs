use clap::Parser;
use common::Config;
use head_server::{StartupError, logger::configure_logger, serve};
use mimalloc::MiMalloc;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), StartupError> {
    configure_logger();

    let config = Config::parse();

    info!("Starting head server on {}:{}", config.bind, config.port);

    serve(config).await
}
