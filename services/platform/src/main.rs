use sea_orm::Database;
use tracing::info;

use campus_core::config::Config;
use campus_core::tracing::init_tracing;

use campus_platform::config::PlatformConfig;
use campus_platform::infra::storage::LocalDiskStorage;
use campus_platform::router::build_router;
use campus_platform::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = PlatformConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        storage: LocalDiskStorage::new(&config.upload_root),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.platform_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!(upload_root = %config.upload_root, "platform service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
