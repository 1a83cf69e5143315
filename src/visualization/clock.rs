pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Human-readable simulated time: seconds below a day, days below a year,
/// years after that.
pub fn format_elapsed(seconds: f64) -> String {
    if seconds < SECONDS_PER_DAY {
        format!("{:.2} s", seconds)
    } else if seconds < SECONDS_PER_YEAR {
        format!("{:.2} days", seconds / SECONDS_PER_DAY)
    } else {
        format!("{:.2} years", seconds / SECONDS_PER_YEAR)
    }
}
