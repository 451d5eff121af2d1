use std::sync::Arc;
use tracing::debug;

use super::classifier_service::{EmotionClassifier, KeywordClassifier, ModelClassifier, SentimentClassifier};
use super::common_structs::{AnalysisResult, EmotionCategory, EmotionScores, SentimentResult, TopEmotion};
use super::model_service::ModelCapabilities;
use super::suggestion_catalog::SuggestionCatalog;


/// Turns one piece of user text into sentiment, emotion scores and the
/// matching suggestions.
///
/// The sentiment and emotion sources are chosen once, here, from the
/// capabilities. The emotion model is only used when the sentiment model
/// loaded too, so a response reporting `use_transformers: false` always
/// carries lexicon scores.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    model_capable: bool,
    sentiment: Arc<dyn SentimentClassifier>,
    emotion: Arc<dyn EmotionClassifier>,
    catalog: Arc<SuggestionCatalog>,
}

impl AnalysisService {
    pub fn new(capabilities: ModelCapabilities, catalog: Arc<SuggestionCatalog>) -> Self {
        let model_capable = capabilities.model_capable();
        let emotion_model = model_capable && capabilities.has_emotion_model();
        let model = ModelClassifier::new(capabilities);

        let sentiment: Arc<dyn SentimentClassifier> = if model_capable {
            Arc::new(model.clone())
        } else {
            Arc::new(KeywordClassifier)
        };
        let emotion: Arc<dyn EmotionClassifier> = if emotion_model {
            Arc::new(model)
        } else {
            Arc::new(KeywordClassifier)
        };

        Self { model_capable, sentiment, emotion, catalog }
    }

    pub fn heuristic_only() -> Self {
        Self::new(ModelCapabilities::none(), Arc::new(SuggestionCatalog::embedded()))
    }

    pub fn model_capable(&self) -> bool {
        self.model_capable
    }

    pub async fn analyze(&self, text: &str, preset_emotion: Option<&str>) -> AnalysisResult {
        let sentiment = self.sentiment.sentiment(text).await;

        if let Some(preset) = preset_emotion.and_then(EmotionCategory::parse) {
            debug!(emotion = %preset, "Using preset emotion");
            return self.build_result(
                text,
                sentiment,
                EmotionScores::one_hot(preset),
                TopEmotion { emotion: preset, score: 1.0 },
            );
        }

        let emotion_scores = self.emotion.emotion_scores(text).await;
        let top_emotion = emotion_scores.top();
        self.build_result(text, sentiment, emotion_scores, top_emotion)
    }

    fn build_result(&self, text: &str, sentiment: SentimentResult, emotion_scores: EmotionScores, top_emotion: TopEmotion) -> AnalysisResult {
        debug!(
            text_length = text.chars().count(),
            sentiment = %sentiment.label,
            top_emotion = %top_emotion.emotion,
            "Analysis complete"
        );

        AnalysisResult {
            text: text.to_owned(),
            model_capable: self.model_capable,
            sentiment,
            emotion_scores,
            top_emotion,
            suggestions: self.catalog.lookup(top_emotion.emotion).to_owned(),
        }
    }
}
