pub mod analysis;
pub mod commands;
pub mod models;
pub mod server;

use commands::settings::Settings;

pub async fn run() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    server::serve(settings).await
}
