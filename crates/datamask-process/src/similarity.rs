//! Similarity-gated synthetic values.
//!
//! A supplier is invoked until its candidate is at least `threshold` similar
//! (Jaro-Winkler) to the original, or the attempt budget runs out.

use rapidfuzz::distance::jaro_winkler;
use tracing::warn;

use crate::errors::ProcessError;

/// Attempt budget of the similarity gate.
pub const DEFAULT_ATTEMPTS: u32 = 100;

/// Threshold for short, nominal identifiers (first/last name, state, username).
pub const NOMINAL_THRESHOLD: f64 = 0.4;

/// Threshold for longer or structured strings (address, city, email, phone, zip).
pub const STRUCTURED_THRESHOLD: f64 = 0.5;

/// Jaro-Winkler similarity in `[0, 1]` over Unicode scalar values.
///
/// Plain Winkler boost: prefix scale 0.1 over at most four characters, with no
/// long-string adjustment.
pub fn similarity(original: &str, candidate: &str) -> f64 {
    jaro_winkler::similarity(original.chars(), candidate.chars())
}

/// Return the first supplied candidate scoring `>= threshold` against `input`.
///
/// Fails with [`ProcessError::SimilarityExhausted`] after exactly `attempts`
/// rejected candidates (a zero budget is treated as one attempt).
pub fn generate_similar<F>(
    input: &str,
    threshold: f64,
    attempts: u32,
    mut supplier: F,
) -> Result<String, ProcessError>
where
    F: FnMut() -> String,
{
    let attempts = attempts.max(1);
    let mut last_score = 0.0;
    let mut last_candidate = String::new();

    for _ in 0..attempts {
        let candidate = supplier();
        let score = similarity(input, &candidate);
        if score >= threshold {
            return Ok(candidate);
        }
        last_score = score;
        last_candidate = candidate;
    }

    warn!(
        event = "similarity_exhausted",
        attempts,
        threshold,
        score = last_score,
        "no candidate reached the similarity threshold"
    );
    Err(ProcessError::SimilarityExhausted {
        score: last_score,
        threshold,
        attempts,
        input: input.to_string(),
        candidate: last_candidate,
    })
}
