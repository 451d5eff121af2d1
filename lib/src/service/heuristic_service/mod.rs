//! Deterministic keyword scorers. Always available, used whenever a model
//! capability is missing or fails.

pub mod emotion_lexicon;
pub mod sentiment_keywords;

pub use emotion_lexicon::lexicon_emotion;
pub use sentiment_keywords::keyword_sentiment;
