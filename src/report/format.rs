const BYTES_PER_GB: f64 = 1_073_741_824.0;
const BYTES_PER_MB: f64 = 1_048_576.0;

pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GB)
}

pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Percentages pass through unclamped.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

pub fn format_mhz(mhz: f64) -> String {
    format!("{:.1} MHz", mhz)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Whole hours and whole minutes, e.g. 5400 → "1 hour 30 minutes".
pub fn format_hours_minutes(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!(
        "{} {} {} {}",
        hours,
        plural(hours, "hour"),
        minutes,
        plural(minutes, "minute")
    )
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gigabytes_two_decimals() {
        assert_eq!(format_gb(8_589_934_592), "8.00 GB");
        assert_eq!(format_gb(0), "0.00 GB");
        assert_eq!(format_gb(1_610_612_736), "1.50 GB");
    }

    #[test]
    fn megabytes_two_decimals() {
        assert_eq!(format_mb(1_048_576), "1.00 MB");
        assert_eq!(format_mb(524_288), "0.50 MB");
    }

    #[test]
    fn percent_is_not_clamped() {
        assert_eq!(format_percent(42.27), "42.3%");
        assert_eq!(format_percent(104.0), "104.0%");
        assert_eq!(format_percent(-3.0), "-3.0%");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_hours_minutes(5400), "1 hour 30 minutes");
        assert_eq!(format_hours_minutes(7260), "2 hours 1 minute");
        assert_eq!(format_hours_minutes(59), "0 hours 0 minutes");
        assert_eq!(format_hours_minutes(3600), "1 hour 0 minutes");
    }

    #[test]
    fn frequency_and_flags() {
        assert_eq!(format_mhz(2400.0), "2400.0 MHz");
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
