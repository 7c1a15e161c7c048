use inkwell::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
