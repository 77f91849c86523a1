use dotenv::dotenv;
use tracing::{info, warn};

use homefix_backend::app::app::App;
use homefix_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Load .env before the logger comes up so log-level variables apply.
    let dotenv_result = dotenv();

    // Guards must stay alive for the lifetime of the process, otherwise the
    // rolling file writers flush and close early.
    let _logger = Logger::new();

    info!("🚀 Starting 3 Boys Handyman backend");

    match dotenv_result {
        Ok(path) => info!("✅ Loaded environment from {}", path.display()),
        Err(e) => warn!("⚠️ No .env file loaded: {} (using system environment)", e),
    }

    let app = App::new();
    app.start().await;
}
