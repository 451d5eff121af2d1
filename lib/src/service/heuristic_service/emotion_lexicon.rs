use crate::service::common_structs::{EmotionCategory, EmotionScores};
use crate::utilities::count_present;


// Fragments, not whole words: "irritat" covers irritated and irritating.
fn keywords(category: EmotionCategory) -> &'static [&'static str] {
    match category {
        EmotionCategory::Happy => &["happy", "joy", "glad", "pleased", "delighted", "excited", "cheer"],
        EmotionCategory::Sad => &["sad", "unhappy", "depressed", "down", "sorrow", "miserable"],
        EmotionCategory::Angry => &["angry", "mad", "furious", "irritat", "annoy", "rage"],
        EmotionCategory::Anxious => &["anxious", "nervous", "worried", "panic", "scared", "fear"],
        EmotionCategory::Neutral => &["okay", "fine", "neutral", "alright"],
        EmotionCategory::Surprise => &["surpris", "wow", "shock", "astonish"],
    }
}

/// Keyword-frequency emotion distribution.
///
/// The result always sums to 1.0: hits are normalised by the total, and
/// text without any hit is entirely `neutral`.
pub fn lexicon_emotion(text: &str) -> EmotionScores {
    let text_low = text.to_lowercase();

    let mut counts = EmotionScores::default();
    for category in EmotionCategory::ALL {
        counts.set(category, count_present(&text_low, keywords(category)) as f64);
    }

    let total = counts.total();
    if total == 0.0 {
        return EmotionScores::one_hot(EmotionCategory::Neutral);
    }

    let mut scores = EmotionScores::default();
    for (category, count) in counts.iter() {
        scores.set(category, count / total);
    }
    scores
}
