use dotenv::dotenv;
use taskboard::commands::Cli;
use taskboard::libs::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init();
    Cli::menu().await
}
