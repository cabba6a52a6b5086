//! Duration utilities: millisecond conversions and rounding.

const MS_PER_HOUR: i64 = 3_600_000;

/// Round half away from zero to two decimals.
///
/// Only used on sums of values that already have two decimals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Milliseconds → hours, rounded half away from zero to two decimals.
///
/// Rounds on the integer milliseconds, so 522 000 ms (0.145 h) gives 0.15.
pub fn ms_to_hours(ms: i64) -> f64 {
    let half = MS_PER_HOUR / 2;
    let hundredths = (ms.unsigned_abs() as i128 * 100 + half as i128) / MS_PER_HOUR as i128;
    let hundredths = hundredths as f64 / 100.0;
    if ms < 0 { -hundredths } else { hundredths }
}

/// Split milliseconds into whole (hours, minutes), flooring seconds away.
pub fn ms_to_hours_minutes(ms: i64) -> (i64, i64) {
    let minutes = ms.div_euclid(1000).div_euclid(60);
    (minutes.div_euclid(60), minutes.rem_euclid(60))
}
