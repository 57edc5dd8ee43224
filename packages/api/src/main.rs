use lambda_http::Error;
use std::env::set_var;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::config::{Config, StorageBackend};
use api::create_app;
use api::state::AppState;
use shared::repositories::game_repository::{DynamoDbGameRepository, GameRepository};
use shared::repositories::in_memory_game_repository::InMemoryGameRepository;
use shared::services::game_service::GameService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!("Starting with {:?} config", config.env);

    // Set up services
    let repository: Arc<dyn GameRepository + Send + Sync> = match &config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory game storage");
            Arc::new(InMemoryGameRepository::new())
        }
        StorageBackend::DynamoDb { table_name } => {
            info!("Using DynamoDB game storage on table {}", table_name);
            let aws_config = aws_config::load_from_env().await;
            let client = aws_sdk_dynamodb::Client::new(&aws_config);
            Arc::new(DynamoDbGameRepository::new(client, table_name))
        }
    };
    let game_service = Arc::new(GameService::new(repository));

    let app = create_app(AppState { game_service });

    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
        info!("Running as a Lambda function");
        return lambda_http::run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
