// Unicode scalar values, never splits a character
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

// Number of fragments present in the (already lower-cased) text.
// Each fragment counts once however often it occurs.
pub fn count_present(text_low: &str, fragments: &[&str]) -> usize {
    fragments.iter().filter(|fragment| text_low.contains(*fragment)).count()
}

// Model scores are confidences; anything outside [0, 1] is pulled back in.
pub fn sanitize_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
