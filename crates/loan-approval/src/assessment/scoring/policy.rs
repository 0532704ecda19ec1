/// Score every profile starts from before adjustments.
pub const BASE_SCORE: f64 = 0.5;

/// Probabilities at or above this value are approved.
pub const APPROVAL_THRESHOLD: f64 = 0.5;

/// Clamp a raw score into `[0, 1]` and round it to two decimals.
pub(crate) fn to_probability(raw_score: f64) -> f64 {
    let clamped = raw_score.clamp(0.0, 1.0);
    (clamped * 100.0).round() / 100.0
}

/// Decide on the published (rounded) probability so the two output fields never disagree.
pub(crate) fn is_approved(probability: f64) -> bool {
    probability >= APPROVAL_THRESHOLD
}
