// ABOUTME: Entry point for openchat — a demo chat app over pluggable LLM backends.
// ABOUTME: Snapshots config and environment, resolves CLI args, runs the app.

use openchat::app::App;
use openchat::config::{env_settings_map, Config};
use openchat::options::AppOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load local .env before snapshotting the environment.
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    let env = env_settings_map();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = AppOptions::resolve(&config.settings_map(), &env, &args);
    App::new(options).run().await
}
