//! Guildhall Engine - Main entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guildhall_engine::{
    api,
    infrastructure::{
        persistence::JsonRosterStore, ports::RosterStore, templates::TemplateRenderer,
    },
    use_cases::RosterUseCases,
    App, AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root when running from `crates/engine`.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guildhall_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Guildhall Engine");

    let config = AppConfig::from_env();
    tracing::info!(
        roster = %config.roster_path.display(),
        templates = %config.templates_dir.display(),
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    // Roster is read once; every mutation writes it back in full.
    let store: Arc<dyn RosterStore> = Arc::new(JsonRosterStore::new(&config.roster_path));
    let roster = RosterUseCases::load(store).await;

    let app = Arc::new(App::new(roster, TemplateRenderer::new(&config.templates_dir)));

    let router = api::router(app, &config.static_dir).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
