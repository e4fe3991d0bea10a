pub mod extract;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    audio::AudioController, folder::FolderController, health, media, translate::TranslateController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::request_id::request_id_middleware;
use crate::infrastructure::storage::FileStore;

/// Build the application router with all routes configured
pub fn create_router(
    pool: Arc<DbPool>,
    file_store: Arc<FileStore>,
    folder_controller: Arc<FolderController>,
    audio_controller: Arc<AudioController>,
    translate_controller: Arc<TranslateController>,
) -> Router {
    // Folder routes
    let folder_routes = Router::new()
        .route("/get-folders", get(FolderController::list_folders))
        .route("/create-folder", post(FolderController::create_folder))
        .route("/edit-folder/:id", put(FolderController::rename_folder))
        .route("/delete-folder/:id", delete(FolderController::delete_folder))
        .with_state(folder_controller);

    // Audio routes
    let audio_routes = Router::new()
        .route("/save-audio", post(AudioController::save_audio))
        .route("/edit-audio/:id", put(AudioController::rename_audio))
        .route("/delete-audio/:id", delete(AudioController::delete_audio))
        .route("/move-audio", post(AudioController::move_audio))
        .with_state(audio_controller);

    // Translation routes
    let translate_routes = Router::new()
        .route("/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    // Stored audio files
    let media_routes = Router::new()
        .route("/audio/:filename", get(media::serve_audio))
        .with_state(file_store.clone());

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state((pool, file_store))
        .merge(folder_routes)
        .merge(audio_routes)
        .merge(translate_routes)
        .merge(media_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Serve the router on the configured address until shutdown
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
