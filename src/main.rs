mod config;
mod console;
mod database;
mod models;
mod seeds;
mod services;
mod utils;

use dotenv::dotenv;

use config::AppConfig;
use console::AdminConsole;
use database::MongoDB;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::load();

    log::info!("🚀 Starting Leaderboard Admin Console...");

    // A missing or unreachable database drops the console into the
    // unconfigured view instead of aborting
    let db = if config.is_configured() {
        // is_configured() implies the URI is present
        let uri = config.mongodb_uri.as_deref().unwrap_or_default();
        match MongoDB::new(uri).await {
            Ok(db) => {
                log::info!("✅ MongoDB connected successfully");
                seeds::admin_list_seed::seed_admin_list(&db, &config).await;
                Some(db)
            }
            Err(e) => {
                log::error!("❌ Failed to connect to MongoDB: {}", e);
                None
            }
        }
    } else {
        log::error!("❌ MONGODB_URI not set!");
        None
    };

    let mut console = AdminConsole::new(config, db);
    console.run().await;
}
