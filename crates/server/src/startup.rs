use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use configs::{AppConfig, RepositoryBackend};
use service::menu::{
    domain::MenuInfo,
    repo::{
        in_memory::InMemoryMenuRepository, json_file::JsonFileMenuRepository,
        seaorm::SeaOrmMenuRepository,
    },
    repository::MenuRepository,
    MenuService,
};

use crate::auth::{BasicAuthConfig, ServerState};
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the single active repository for this process. This is the only
/// place a concrete backend is instantiated; an unknown selector never gets
/// this far because config deserialization already rejected it.
async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn MenuRepository>> {
    let repo: Arc<dyn MenuRepository> = match cfg.repository.backend {
        RepositoryBackend::InMemory => Arc::new(InMemoryMenuRepository::with_default_menu()),
        RepositoryBackend::Json => {
            Arc::new(JsonFileMenuRepository::load(cfg.repository.json_path.as_str()).await?)
        }
        RepositoryBackend::Database => {
            let db = models::db::connect().await?;
            Arc::new(SeaOrmMenuRepository::new(db))
        }
    };
    Ok(repo)
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    // Fail fast on missing or invalid configuration
    let cfg = AppConfig::load_and_validate()?;
    info!(backend = ?cfg.repository.backend, "selected menu repository backend");

    let repo = build_repository(&cfg).await?;
    let service = Arc::new(MenuService::new(repo));

    let menu = MenuInfo {
        name: cfg.menu.name.clone(),
        version: cfg.menu.version,
        created_on: cfg.menu.created_on.clone(),
    };

    // Startup diagnostic: print the configured menu
    service.print_summary(&menu).await?;

    let state = ServerState {
        service,
        auth: BasicAuthConfig {
            username: cfg.auth.username.clone(),
            password: cfg.auth.password.clone(),
        },
    };

    let app: Router = routes::build_router(build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting pizza menu server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
