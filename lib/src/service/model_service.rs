use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use aws_config::SdkConfig;
use tracing::{info, warn};

use crate::config::{AnalysisConfig, MAX_MODEL_INPUT_CHARS};
use crate::error::ClassifyError;
use crate::utilities::{sanitize_score, truncate_chars};
use super::bedrock_service::BedrockService;
use super::common_structs::{EmotionCategory, EmotionScores, RawEmotionScore, SentimentResult};


const WARMUP_TEXT: &str = "I feel fine today.";


#[async_trait]
pub trait SentimentModel: Send + Sync {
    async fn classify_sentiment(&self, text: &str) -> Result<SentimentResult, ClassifyError>;
}

#[async_trait]
pub trait EmotionModel: Send + Sync {
    async fn classify_emotion(&self, text: &str) -> Result<Vec<RawEmotionScore>, ClassifyError>;
}


/// The optional model capabilities, resolved once at startup and read-only
/// afterwards.
///
/// Either slot may be empty independently. Every call truncates its input
/// to [`MAX_MODEL_INPUT_CHARS`] and runs under `timeout`.
#[derive(Clone)]
pub struct ModelCapabilities {
    sentiment: Option<Arc<dyn SentimentModel>>,
    emotion: Option<Arc<dyn EmotionModel>>,
    timeout: Duration,
}

impl fmt::Debug for ModelCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelCapabilities")
            .field("sentiment", &self.sentiment.is_some())
            .field("emotion", &self.emotion.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ModelCapabilities {
    pub fn new(
        sentiment: Option<Arc<dyn SentimentModel>>,
        emotion: Option<Arc<dyn EmotionModel>>,
        timeout: Duration,
    ) -> Self {
        Self { sentiment, emotion, timeout }
    }

    pub fn none() -> Self {
        Self::new(None, None, Duration::ZERO)
    }

    /// Builds Bedrock-backed candidates from `config` and keeps those that
    /// answer a warm-up request.
    pub async fn detect(config: &AnalysisConfig, sdk_config: &SdkConfig) -> Self {
        if !config.use_models {
            info!("Model capabilities disabled by configuration, using heuristics only");
            return Self::none();
        }

        let client = aws_sdk_bedrockruntime::Client::new(sdk_config);

        let sentiment = config.sentiment_model_id.as_deref().map(|model_id| {
            Arc::new(BedrockService::new(&client, model_id)) as Arc<dyn SentimentModel>
        });
        let emotion = config.emotion_model_id.as_deref().map(|model_id| {
            Arc::new(BedrockService::new(&client, model_id)) as Arc<dyn EmotionModel>
        });

        Self::from_candidates(sentiment, emotion, config.model_timeout).await
    }

    /// Checks each candidate concurrently with a warm-up call; one that
    /// fails is dropped for the lifetime of the returned value.
    pub async fn from_candidates(
        sentiment: Option<Arc<dyn SentimentModel>>,
        emotion: Option<Arc<dyn EmotionModel>>,
        timeout: Duration,
    ) -> Self {
        let (sentiment, emotion) = tokio::join!(
            check_sentiment(sentiment, timeout),
            check_emotion(emotion, timeout),
        );
        Self::new(sentiment, emotion, timeout)
    }

    /// Reported to clients as `use_transformers`. Only the sentiment slot
    /// counts.
    pub fn model_capable(&self) -> bool {
        self.sentiment.is_some()
    }

    pub fn has_emotion_model(&self) -> bool {
        self.emotion.is_some()
    }

    pub async fn sentiment(&self, text: &str) -> Result<SentimentResult, ClassifyError> {
        let model = self.sentiment.as_ref().ok_or(ClassifyError::Unavailable)?;
        let input = truncate_chars(text, MAX_MODEL_INPUT_CHARS);

        let mut result = tokio::time::timeout(self.timeout, model.classify_sentiment(input))
            .await
            .map_err(|_| ClassifyError::Timeout(self.timeout))??;
        result.score = sanitize_score(result.score);
        Ok(result)
    }

    pub async fn emotion(&self, text: &str) -> Result<EmotionScores, ClassifyError> {
        let model = self.emotion.as_ref().ok_or(ClassifyError::Unavailable)?;
        let input = truncate_chars(text, MAX_MODEL_INPUT_CHARS);

        let raw_scores = tokio::time::timeout(self.timeout, model.classify_emotion(input))
            .await
            .map_err(|_| ClassifyError::Timeout(self.timeout))??;
        Ok(map_raw_emotion_scores(&raw_scores))
    }
}


async fn check_sentiment(model: Option<Arc<dyn SentimentModel>>, timeout: Duration) -> Option<Arc<dyn SentimentModel>> {
    let Some(model) = model else {
        info!("No sentiment model configured");
        return None;
    };

    let candidate = ModelCapabilities::new(Some(model.clone()), None, timeout);
    match candidate.sentiment(WARMUP_TEXT).await {
        Ok(_) => {
            info!("Sentiment model capability loaded");
            Some(model)
        },
        Err(error) => {
            warn!(%error, "Sentiment model capability unavailable");
            None
        },
    }
}

async fn check_emotion(model: Option<Arc<dyn EmotionModel>>, timeout: Duration) -> Option<Arc<dyn EmotionModel>> {
    let Some(model) = model else {
        info!("No emotion model configured");
        return None;
    };

    let candidate = ModelCapabilities::new(None, Some(model.clone()), timeout);
    match candidate.emotion(WARMUP_TEXT).await {
        Ok(_) => {
            info!("Emotion model capability loaded");
            Some(model)
        },
        Err(error) => {
            warn!(%error, "Emotion model capability unavailable");
            None
        },
    }
}


/// Maps model labels onto categories: a label belongs to every category
/// whose name it contains (case-insensitive). Several labels on one
/// category keep the highest score; categories without a label stay 0.0.
pub fn map_raw_emotion_scores(raw_scores: &[RawEmotionScore]) -> EmotionScores {
    let mut scores = EmotionScores::default();
    for raw in raw_scores {
        let label = raw.label.to_lowercase();
        let score = sanitize_score(raw.score);
        for category in EmotionCategory::ALL {
            if label.contains(category.as_str()) && score > scores.get(category) {
                scores.set(category, score);
            }
        }
    }
    scores
}




#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use super::mocks::{Behavior, MockEmotion, MockSentiment};
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(200);

    fn raw(label: &str, score: f64) -> RawEmotionScore {
        RawEmotionScore { label: label.to_owned(), score }
    }

    #[test]
    fn maps_labels_by_containment() {
        let scores = map_raw_emotion_scores(&[
            raw("SADNESS", 0.7),
            raw("joy", 0.9),
            raw("neutral", 0.2),
            raw("surprise", 0.1),
        ]);
        assert_eq!(scores.sad, 0.7);
        assert_eq!(scores.neutral, 0.2);
        assert_eq!(scores.surprise, 0.1);
        // "joy" contains no category name
        assert_eq!(scores.happy, 0.0);
        assert_eq!(scores.angry, 0.0);
    }

    #[test]
    fn keeps_maximum_per_category() {
        let scores = map_raw_emotion_scores(&[raw("sad", 0.3), raw("very_sad", 0.8), raw("sad-ish", 0.5)]);
        assert_eq!(scores.sad, 0.8);
    }

    #[test]
    fn clamps_model_scores() {
        let scores = map_raw_emotion_scores(&[raw("angry", 3.0), raw("anxious", f64::NAN)]);
        assert_eq!(scores.angry, 1.0);
        assert_eq!(scores.anxious, 0.0);
    }

    #[tokio::test]
    async fn empty_slots_are_unavailable() {
        let capabilities = ModelCapabilities::none();
        assert!(!capabilities.model_capable());
        assert!(matches!(capabilities.sentiment("hi").await, Err(ClassifyError::Unavailable)));
        assert!(matches!(capabilities.emotion("hi").await, Err(ClassifyError::Unavailable)));
    }

    #[tokio::test]
    async fn input_is_truncated_before_the_model() {
        let model = Arc::new(MockSentiment::new("POSITIVE", 0.99, Behavior::Answer));
        let capabilities = ModelCapabilities::new(Some(model.clone()), None, TIMEOUT);

        let text = "x".repeat(MAX_MODEL_INPUT_CHARS + 250);
        let result = capabilities.sentiment(&text).await.unwrap();

        assert_eq!(result, SentimentResult::new("POSITIVE", 0.99));
        let seen = model.last_input.lock().unwrap().clone().unwrap();
        assert_eq!(seen.chars().count(), MAX_MODEL_INPUT_CHARS);
    }

    #[tokio::test]
    async fn slow_model_times_out() {
        let model = Arc::new(MockSentiment::new("POSITIVE", 0.9, Behavior::Sleep(Duration::from_secs(5))));
        let capabilities = ModelCapabilities::new(Some(model), None, Duration::from_millis(20));
        assert!(matches!(capabilities.sentiment("hi").await, Err(ClassifyError::Timeout(_))));
    }

    #[tokio::test]
    async fn startup_check_keeps_only_working_candidates() {
        let sentiment = Arc::new(MockSentiment::new("POSITIVE", 0.9, Behavior::Answer));
        let emotion = Arc::new(MockEmotion::new(&[("sad", 0.5)], Behavior::Fail));

        let capabilities = ModelCapabilities::from_candidates(Some(sentiment.clone()), Some(emotion.clone()), TIMEOUT).await;

        assert!(capabilities.model_capable());
        assert!(!capabilities.has_emotion_model());
        assert_eq!(sentiment.calls.load(Ordering::SeqCst), 1);
        assert_eq!(emotion.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn startup_checks_run_concurrently() {
        let delay = Duration::from_millis(300);
        let sentiment = Arc::new(MockSentiment::new("POSITIVE", 0.9, Behavior::Sleep(delay)));
        let emotion = Arc::new(MockEmotion::new(&[("sad", 0.5)], Behavior::Sleep(delay)));

        let started = std::time::Instant::now();
        let capabilities = ModelCapabilities::from_candidates(Some(sentiment), Some(emotion), Duration::from_secs(1)).await;
        let elapsed = started.elapsed();

        assert!(capabilities.model_capable());
        assert!(capabilities.has_emotion_model());
        // one after the other would take at least 2 * delay
        assert!(elapsed < delay * 2, "startup checks took {:?}", elapsed);
    }

    #[tokio::test]
    async fn emotion_alone_does_not_make_model_capable() {
        let emotion = Arc::new(MockEmotion::new(&[("sad", 0.5)], Behavior::Answer));
        let capabilities = ModelCapabilities::from_candidates(None, Some(emotion), TIMEOUT).await;

        assert!(!capabilities.model_capable());
        assert!(capabilities.has_emotion_model());
        assert_eq!(capabilities.emotion("so sad").await.unwrap().sad, 0.5);
    }

    #[tokio::test]
    async fn disabled_config_skips_model_checks() {
        let sdk_config = SdkConfig::builder().build();
        let capabilities = ModelCapabilities::detect(&AnalysisConfig::heuristic_only(), &sdk_config).await;
        assert!(!capabilities.model_capable());
        assert!(!capabilities.has_emotion_model());
    }
}
