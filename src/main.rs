use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use config::{Config, Environment as EnvironmentSource, File};
use tokio::net::TcpListener;

use medscan::application::ports::{ImageStore, MedicineStore, UserRepository};
use medscan::application::services::{ExtractionService, SummarizationService};
use medscan::infrastructure::dataset::MedicineCatalog;
use medscan::infrastructure::observability::{init_tracing, TracingConfig};
use medscan::infrastructure::ocr::TesseractOcrEngine;
use medscan::infrastructure::persistence::MongoUserRepository;
use medscan::infrastructure::storage::LocalImageStore;
use medscan::infrastructure::summarization::HfInferenceClient;
use medscan::infrastructure::text_processing::FixedSizeChunker;
use medscan::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
        .build()?;
    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    // Datasets are loaded once here and held read-only for the process
    // lifetime; a missing or corrupt file fails startup.
    let medicine_store: Arc<dyn MedicineStore> =
        Arc::new(MedicineCatalog::from_json_file(&settings.dataset.json_path)?);
    let medicine_dataset: Arc<dyn MedicineStore> =
        Arc::new(MedicineCatalog::from_csv_file(&settings.dataset.csv_path)?);

    let chunker = Arc::new(FixedSizeChunker::new(settings.summarizer.max_chunk_length));
    let model = Arc::new(HfInferenceClient::new(
        &settings.summarizer.api_url,
        &settings.summarizer.model,
        &settings.summarizer.api_key,
    ));
    let ocr_engine = Arc::new(TesseractOcrEngine::new(
        &settings.ocr.binary_path,
        &settings.ocr.language,
    ));

    let summarization_service = Arc::new(SummarizationService::new(
        Arc::clone(&model),
        Arc::clone(&chunker),
        settings.summarizer.min_summarizable_chars,
    ));
    let extraction_service = Arc::new(ExtractionService::new(
        Arc::clone(&ocr_engine),
        Arc::clone(&summarization_service),
        settings.summarizer.default_length_percent,
    ));

    let mongo_client = mongodb::Client::with_uri_str(&settings.database.uri).await?;
    let user_repository: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(
        mongo_client.database(&settings.database.name),
    ));
    let image_store: Arc<dyn ImageStore> = Arc::new(LocalImageStore::new(PathBuf::from(
        &settings.uploads.directory,
    ))?);

    let state = AppState {
        extraction_service,
        summarization_service,
        medicine_store,
        medicine_dataset,
        user_repository,
        image_store,
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
