use std::fmt::Debug;
use async_trait::async_trait;
use tracing::warn;

use super::common_structs::{EmotionScores, SentimentResult};
use super::heuristic_service::{keyword_sentiment, lexicon_emotion};
use super::model_service::ModelCapabilities;


/// Sentiment source that always produces a result.
#[async_trait]
pub trait SentimentClassifier: Debug + Send + Sync {
    async fn sentiment(&self, text: &str) -> SentimentResult;
}

/// Emotion source that always produces a complete distribution.
#[async_trait]
pub trait EmotionClassifier: Debug + Send + Sync {
    async fn emotion_scores(&self, text: &str) -> EmotionScores;
}


/// Keyword heuristics only.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

#[async_trait]
impl SentimentClassifier for KeywordClassifier {
    async fn sentiment(&self, text: &str) -> SentimentResult {
        keyword_sentiment(text)
    }
}

#[async_trait]
impl EmotionClassifier for KeywordClassifier {
    async fn emotion_scores(&self, text: &str) -> EmotionScores {
        lexicon_emotion(text)
    }
}


/// Asks the model first; a failed call degrades that one request to the
/// keyword heuristics.
#[derive(Debug, Clone)]
pub struct ModelClassifier {
    capabilities: ModelCapabilities,
}

impl ModelClassifier {
    pub fn new(capabilities: ModelCapabilities) -> Self {
        Self { capabilities }
    }
}

#[async_trait]
impl SentimentClassifier for ModelClassifier {
    async fn sentiment(&self, text: &str) -> SentimentResult {
        match self.capabilities.sentiment(text).await {
            Ok(sentiment) => sentiment,
            Err(error) => {
                warn!(%error, "Sentiment model failed, using keyword heuristic");
                keyword_sentiment(text)
            },
        }
    }
}

#[async_trait]
impl EmotionClassifier for ModelClassifier {
    async fn emotion_scores(&self, text: &str) -> EmotionScores {
        match self.capabilities.emotion(text).await {
            Ok(scores) => scores,
            Err(error) => {
                warn!(%error, "Emotion model failed, using lexicon");
                lexicon_emotion(text)
            },
        }
    }
}
