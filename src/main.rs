use dotenvy::dotenv;
use restaurant_manager::{
    cli::{self, StdConsole},
    config,
    core::ManagementService,
    errors::Result,
    store::JsonFileStore,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Load .env file so RUST_LOG can be set there
    dotenv().ok(); // Make it non-fatal, env vars can be set externally

    // 2. Initialize tracing on stderr, quiet by default so logs stay out of the tables
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 3. Load the application configuration (config.toml is optional)
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;
    info!("Using data directory {}", app_config.storage.data_dir.display());

    // 4. Load menu, transactions and admins once
    let store = JsonFileStore::new(app_config.storage);
    let mut service = ManagementService::load(store)
        .inspect(|_| info!("Data loaded successfully."))
        .inspect_err(|e| error!("Failed to load data: {}", e))?;

    // 5. Run the interactive loop
    let mut console = StdConsole::stdio();
    cli::run(&mut service, &mut console)
}
