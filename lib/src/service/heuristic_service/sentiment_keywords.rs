use crate::service::common_structs::SentimentResult;
use crate::utilities::count_present;


const POSITIVE_KEYWORDS: &[&str] = &["good", "great", "happy", "well", "better", "love", "like", "progress", "relieved"];
const NEGATIVE_KEYWORDS: &[&str] = &["sad", "bad", "angry", "depress", "upset", "anxious", "worry", "stress", "hurt"];

const BASE_CONFIDENCE: f64 = 0.6;
const CONFIDENCE_RANGE: f64 = 0.4;
const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Polarity from positive/negative keyword counts.
///
/// The score is a heuristic confidence, not a calibrated probability. A
/// winning side lands strictly inside (0.6, 1.0) and grows with its
/// margin; a tie, including no hits at all, is `neutral` at exactly 0.5.
pub fn keyword_sentiment(text: &str) -> SentimentResult {
    let text_low = text.to_lowercase();
    let positive = count_present(&text_low, POSITIVE_KEYWORDS) as f64;
    let negative = count_present(&text_low, NEGATIVE_KEYWORDS) as f64;

    // +1 keeps the ratio below 1 and the denominator above 0
    let denominator = positive + negative + 1.0;

    if positive > negative {
        SentimentResult::new(SentimentResult::POSITIVE, BASE_CONFIDENCE + (positive / denominator) * CONFIDENCE_RANGE)
    } else if negative > positive {
        SentimentResult::new(SentimentResult::NEGATIVE, BASE_CONFIDENCE + (negative / denominator) * CONFIDENCE_RANGE)
    } else {
        SentimentResult::new(SentimentResult::NEUTRAL, NEUTRAL_CONFIDENCE)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_positive_hits() {
        let result = keyword_sentiment("I feel great and happy, things are getting better");
        assert_eq!(result.label, "positive");
        assert!((result.score - 0.9).abs() < 1e-9);
        assert!(result.score > 0.6 && result.score < 1.0);
    }

    #[test]
    fn negative_side_is_symmetric() {
        // sad, stress / good
        let result = keyword_sentiment("so sad and stressed, nothing good");
        assert_eq!(result.label, "negative");
        assert!((result.score - (0.6 + 2.0 / 4.0 * 0.4)).abs() < 1e-9);
    }

    #[test]
    fn no_hits_is_neutral_half() {
        let result = keyword_sentiment("the meeting is at noon");
        assert_eq!(result, SentimentResult::new("neutral", 0.5));
        assert_eq!(keyword_sentiment(""), SentimentResult::new("neutral", 0.5));
    }

    #[test]
    fn tie_is_neutral() {
        let result = keyword_sentiment("good day, bad night");
        assert_eq!(result.label, "neutral");
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn confidence_grows_with_margin() {
        let one = keyword_sentiment("good");
        let two = keyword_sentiment("good and great");
        assert!(two.score > one.score);
    }
}
