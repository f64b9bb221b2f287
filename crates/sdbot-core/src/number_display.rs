//! Numeric display helpers for card field values.

/// Rounds to three decimal places, half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Renders a duration in seconds as a card field value, e.g. `1.235s`.
///
/// Whole values render without a decimal point (`0s`, `2s`).
pub fn seconds_label(value: f64) -> String {
    format!("{}s", round3(value))
}
