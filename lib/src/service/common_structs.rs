use std::fmt;
use serde::{Deserialize, Serialize};


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Happy,
    Sad,
    Angry,
    Anxious,
    Neutral,
    Surprise,
}

impl EmotionCategory {
    /// Canonical order, also the tie-break order for the top emotion.
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Happy,
        EmotionCategory::Sad,
        EmotionCategory::Angry,
        EmotionCategory::Anxious,
        EmotionCategory::Neutral,
        EmotionCategory::Surprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Happy => "happy",
            EmotionCategory::Sad => "sad",
            EmotionCategory::Angry => "angry",
            EmotionCategory::Anxious => "anxious",
            EmotionCategory::Neutral => "neutral",
            EmotionCategory::Surprise => "surprise",
        }
    }

    /// Case-insensitive lookup, `None` for anything outside the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Score per emotion category. Serializes as an object keyed by category
/// name, in canonical order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct EmotionScores {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub anxious: f64,
    pub neutral: f64,
    pub surprise: f64,
}

impl EmotionScores {
    pub fn one_hot(category: EmotionCategory) -> Self {
        let mut scores = Self::default();
        scores.set(category, 1.0);
        scores
    }

    pub fn get(&self, category: EmotionCategory) -> f64 {
        match category {
            EmotionCategory::Happy => self.happy,
            EmotionCategory::Sad => self.sad,
            EmotionCategory::Angry => self.angry,
            EmotionCategory::Anxious => self.anxious,
            EmotionCategory::Neutral => self.neutral,
            EmotionCategory::Surprise => self.surprise,
        }
    }

    pub fn set(&mut self, category: EmotionCategory, score: f64) {
        let slot = match category {
            EmotionCategory::Happy => &mut self.happy,
            EmotionCategory::Sad => &mut self.sad,
            EmotionCategory::Angry => &mut self.angry,
            EmotionCategory::Anxious => &mut self.anxious,
            EmotionCategory::Neutral => &mut self.neutral,
            EmotionCategory::Surprise => &mut self.surprise,
        };
        *slot = score;
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f64)> + '_ {
        EmotionCategory::ALL.into_iter().map(|category| (category, self.get(category)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, score)| score).sum()
    }

    /// Highest scoring category; exact ties go to the earlier category in
    /// canonical order.
    pub fn top(&self) -> TopEmotion {
        let mut top = TopEmotion { emotion: EmotionCategory::ALL[0], score: self.get(EmotionCategory::ALL[0]) };
        for (category, score) in self.iter().skip(1) {
            if score > top.score {
                top = TopEmotion { emotion: category, score };
            }
        }
        top
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TopEmotion {
    pub emotion: EmotionCategory,
    pub score: f64,
}


/// Polarity label plus a confidence in [0, 1].
///
/// Heuristic labels are `positive`, `negative` or `neutral`; a model may
/// report its own label text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SentimentResult {
    pub label: String,
    pub score: f64,
}

impl SentimentResult {
    pub const POSITIVE: &'static str = "positive";
    pub const NEGATIVE: &'static str = "negative";
    pub const NEUTRAL: &'static str = "neutral";

    pub fn new(label: &str, score: f64) -> Self {
        Self {
            label: label.to_owned(),
            score,
        }
    }
}


/// One label/score pair as reported by an emotion model, before it is
/// mapped onto [`EmotionCategory`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RawEmotionScore {
    pub label: String,
    pub score: f64,
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SuggestionEntry {
    pub description: String,
    pub exercises: Vec<String>,
}

impl SuggestionEntry {
    pub fn new(description: &str, exercises: &[&str]) -> Self {
        Self {
            description: description.to_owned(),
            exercises: exercises.iter().map(|exercise| exercise.to_string()).collect(),
        }
    }
}


#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub text: String,
    #[serde(rename = "use_transformers")]
    pub model_capable: bool,
    pub sentiment: SentimentResult,
    pub emotion_scores: EmotionScores,
    pub top_emotion: TopEmotion,
    pub suggestions: SuggestionEntry,
}
