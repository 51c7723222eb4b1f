//! Formatting helpers for labels shown to the user

/// Share in `[0, 1]` rounded to the nearest whole percent
///
/// # Examples
/// ```
/// use pondus::util::format::round_percent;
///
/// assert_eq!(round_percent(10.0 / 30.0), 33);
/// assert_eq!(round_percent(20.0 / 30.0), 67);
/// assert_eq!(round_percent(0.0), 0);
/// ```
pub fn round_percent(share: f64) -> u8 {
    if !share.is_finite() {
        return 0;
    }
    (share.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Gauge label for a share, e.g. `"67%"`
pub fn format_percent(share: f64) -> String {
    format!("{}%", round_percent(share))
}
