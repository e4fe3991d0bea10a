use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use scriptcast_backend::controllers::{
    audio::AudioController, folder::FolderController, translate::TranslateController,
};
use scriptcast_backend::domain::{
    audio::AudioService, folder::FolderService, translation::TranslationService,
};
use scriptcast_backend::infrastructure::config::{Config, LogFormat, TranslationProvider, TtsProvider};
use scriptcast_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use scriptcast_backend::infrastructure::http::{create_router, start_http_server};
use scriptcast_backend::infrastructure::repositories::{
    AudioRepository, FolderRepository, GoogleTranslationRepository, GoogleTtsRepository,
    OpenAiTranslationRepository, OpenAiTtsRepository, PollyTtsRepository, TranslationRepository,
    TtsRepository,
};
use scriptcast_backend::infrastructure::storage::FileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting ScriptCast Backend on {}:{}",
        config.host,
        config.port
    );
    if config.is_development() {
        tracing::debug!(
            audio_dir = %config.audio_dir,
            translation_provider = ?config.translation_provider,
            tts_provider = ?config.tts_provider,
            timeout_secs = config.collaborator_timeout_secs,
            cache_enabled = config.translation_cache_enabled,
            "Loaded configuration"
        );
    }

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // Audio file store
    let file_store = Arc::new(FileStore::new(&config.audio_dir).await?);
    tracing::info!(root = %file_store.root().display(), "Audio file store ready");

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate collaborators
    let timeout = config.collaborator_timeout();
    let openai_client = config.openai_api_key.as_ref().map(|key| {
        Arc::new(async_openai::Client::with_config(
            async_openai::config::OpenAIConfig::new().with_api_key(key),
        ))
    });

    let translator: Arc<dyn TranslationRepository> = match (config.translation_provider, &openai_client) {
        (TranslationProvider::OpenAi, Some(client)) => Arc::new(OpenAiTranslationRepository::new(
            client.clone(),
            config.openai_translation_model.clone(),
        )),
        (TranslationProvider::OpenAi, None) => {
            return Err("OPENAI_API_KEY is required for the OpenAI translation provider".into())
        }
        (TranslationProvider::Google, _) => Arc::new(GoogleTranslationRepository::new(timeout)?),
    };

    let tts_repo: Arc<dyn TtsRepository> = match (config.tts_provider, &openai_client) {
        (TtsProvider::OpenAi, Some(client)) => Arc::new(OpenAiTtsRepository::new(
            client.clone(),
            config.openai_tts_model.clone(),
            config.openai_tts_voice.clone(),
        )),
        (TtsProvider::OpenAi, None) => {
            return Err("OPENAI_API_KEY is required for the OpenAI TTS provider".into())
        }
        (TtsProvider::Polly, _) => {
            tracing::info!("Initializing AWS Polly client with region: {}", config.aws_region);
            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            Arc::new(PollyTtsRepository::new(Arc::new(aws_sdk_polly::Client::new(&aws_config))))
        }
        (TtsProvider::Google, _) => Arc::new(GoogleTtsRepository::new(timeout)?),
    };
    tracing::info!(
        translation_provider = ?config.translation_provider,
        tts_provider = ?config.tts_provider,
        "Collaborators initialized"
    );

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // 2. Instantiate repositories (inject db pool)
    let folder_repo = Arc::new(FolderRepository::new(pool.clone()));
    let audio_repo = Arc::new(AudioRepository::new(pool.clone()));

    // 3. Instantiate services (inject repositories and collaborators)
    let folder_service = Arc::new(FolderService::new(
        folder_repo.clone(),
        audio_repo.clone(),
        file_store.clone(),
    ));
    let audio_service = Arc::new(AudioService::new(
        audio_repo,
        folder_repo,
        file_store.clone(),
    ));
    let translation_service = Arc::new(TranslationService::new(
        translator,
        tts_repo,
        file_store.clone(),
        timeout,
        config.translation_cache_enabled,
    ));

    // 4. Instantiate controllers (inject services)
    let folder_controller = Arc::new(FolderController::new(folder_service));
    let audio_controller = Arc::new(AudioController::new(audio_service));
    let translate_controller = Arc::new(TranslateController::new(translation_service));

    let app = create_router(
        pool,
        file_store,
        folder_controller,
        audio_controller,
        translate_controller,
    );

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "scriptcast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "scriptcast_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
