pub mod common_structs;
pub mod heuristic_service;
pub mod bedrock_service;
pub mod model_service;
pub mod classifier_service;
pub mod suggestion_catalog;
pub mod analysis_service;

use std::sync::Arc;
use aws_config::SdkConfig;
use tracing::info;

use crate::config::AnalysisConfig;
use analysis_service::AnalysisService;
use model_service::ModelCapabilities;
use suggestion_catalog::SuggestionCatalog;


/// Everything a request handler needs, built once at startup.
#[derive(Debug, Clone)]
pub struct CommonService {
    pub service_name: String,
    pub analysis: AnalysisService,
}

impl CommonService {
    pub fn new(service_name: &str, analysis: AnalysisService) -> Self {
        Self {
            service_name: service_name.to_owned(),
            analysis,
        }
    }

    pub async fn from_config(config: &AnalysisConfig, sdk_config: &SdkConfig) -> Self {
        let capabilities = ModelCapabilities::detect(config, sdk_config).await;
        info!(
            model_capable = capabilities.model_capable(),
            emotion_model = capabilities.model_capable() && capabilities.has_emotion_model(),
            "Capabilities resolved"
        );

        let analysis = AnalysisService::new(capabilities, Arc::new(SuggestionCatalog::embedded()));
        Self::new(&config.service_name, analysis)
    }
}
