use dotenv::dotenv;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenv().ok();

    if let Err(e) = ygo_deck_server::start_server().await {
        error!("{e}");
        std::process::exit(1);
    }
}
