pub mod handlers;

use axum::Router;
use axum::routing::{get, post};
use handlers::{analyze, health};
use lambda_http::{run, tracing, Error};
use lib::config::AnalysisConfig;
use lib::env_keys::AWS_LAMBDA_RUNTIME_API;
use lib::service::CommonService;
use std::env::set_var;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;


pub fn build_router(service: CommonService) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/analyze", post(analyze))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}


#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = AnalysisConfig::from_env()?;
    tracing::info!(
        service = %config.service_name,
        use_models = config.use_models,
        sentiment_model = ?config.sentiment_model_id,
        emotion_model = ?config.emotion_model_id,
        "Configuration loaded"
    );

    let sdk_config = aws_config::load_from_env().await;
    let service = CommonService::from_config(&config, &sdk_config).await;
    let app = build_router(service);

    if std::env::var(AWS_LAMBDA_RUNTIME_API).is_ok() {
        set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");
        return run(app).await;
    }

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}
