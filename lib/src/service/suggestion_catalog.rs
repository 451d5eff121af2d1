use std::collections::HashMap;

use super::common_structs::{EmotionCategory, SuggestionEntry};


const FALLBACK_DESCRIPTION: &str = "Try breathing exercises or a short walk.";
const FALLBACK_EXERCISES: &[&str] = &["Take 5 deep breaths."];


/// Read-only description and coping exercises per emotion category.
#[derive(Debug, Clone)]
pub struct SuggestionCatalog {
    entries: HashMap<EmotionCategory, SuggestionEntry>,
    fallback: SuggestionEntry,
}

impl SuggestionCatalog {
    pub fn new(entries: HashMap<EmotionCategory, SuggestionEntry>, fallback: SuggestionEntry) -> Self {
        Self { entries, fallback }
    }

    /// The built-in catalog with one entry for every category.
    pub fn embedded() -> Self {
        let entries = EmotionCategory::ALL
            .into_iter()
            .map(|category| (category, embedded_entry(category)))
            .collect();
        Self::new(entries, SuggestionEntry::new(FALLBACK_DESCRIPTION, FALLBACK_EXERCISES))
    }

    pub fn get(&self, category: EmotionCategory) -> Option<&SuggestionEntry> {
        self.entries.get(&category)
    }

    /// Entry for `category`, or the generic entry when it has none.
    pub fn lookup(&self, category: EmotionCategory) -> &SuggestionEntry {
        self.get(category).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &SuggestionEntry {
        &self.fallback
    }
}


fn embedded_entry(category: EmotionCategory) -> SuggestionEntry {
    match category {
        EmotionCategory::Happy => SuggestionEntry::new(
            "It sounds like you're experiencing positive emotions. Feeling happy or uplifted \
            can be a sign of emotional balance, meaningful connections, personal progress, or relief \
            after stress. Recognizing moments of happiness is important for building resilience.",
            &[
                "Practice gratitude: Write down 3 things that made you feel good today.",
                "Share your positive feelings with someone close to you.",
                "Try a 2-minute mindful breathing exercise to stay grounded in the moment.",
            ],
        ),
        EmotionCategory::Sad => SuggestionEntry::new(
            "Sadness is a natural emotional response to loss, disappointment, or emotional overwhelm. \
            It's okay to feel this way, and acknowledging it is the first step toward healing. \
            You don't need to rush the feeling; sitting with it mindfully can be grounding.",
            &[
                "5-4-3-2-1 grounding exercise: Identify 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
                "Do a 10-minute journaling exercise about what is weighing on your mind.",
                "Try a slow walk while paying attention to your breathing.",
            ],
        ),
        EmotionCategory::Angry => SuggestionEntry::new(
            "Anger often arises from feeling misunderstood, disrespected, or out of control. \
            It's a powerful emotion, but with awareness and safe release techniques, it can be managed \
            in a healthy and constructive way.",
            &[
                "Progressive muscle relaxation: Tense and release each muscle group slowly.",
                "Box breathing: Inhale 4 seconds, hold 4 seconds, exhale 4 seconds, hold 4 seconds.",
                "Write down what's making you angry and identify the triggers.",
            ],
        ),
        EmotionCategory::Anxious => SuggestionEntry::new(
            "Anxiety can appear when your mind is expecting danger, uncertainty, or stress. \
            It doesn't mean something is wrong with you; it means your body is trying to protect you. \
            Grounding techniques can help calm your system.",
            &[
                "Try the 4-4-8 breathing technique: Inhale 4s, hold 4s, exhale 8s.",
                "5-minute mindfulness: Focus only on your breath or a single sound.",
                "Write your worries and ask: 'Which of these are in my control?'",
            ],
        ),
        EmotionCategory::Neutral => SuggestionEntry::new(
            "You seem to be in a steady emotional state. Feeling neutral can mean you are balanced, \
            calm, or simply not strongly affected by recent events. It's a healthy baseline emotion.",
            &[
                "Do a short stretch routine for relaxation.",
                "Take a 2-minute mindful pause to check in with your body.",
                "Drink a glass of water & take 5 slow breaths.",
            ],
        ),
        EmotionCategory::Surprise => SuggestionEntry::new(
            "Surprise is triggered by something unexpected, positive or negative. \
            Your mind may need a moment to adjust to new information. This feeling usually fades quickly.",
            &[
                "Pause and take 3 slow breaths to stabilize your mind.",
                "Reflect briefly on what caused the surprise and how it affects you.",
                "Write one sentence about what you want to do next.",
            ],
        ),
    }
}
