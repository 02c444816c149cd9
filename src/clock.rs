//! Clock readout formatting.

/// Formats a number of seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours; anything past 99 minutes simply
/// widens the minutes field.
///
/// ```rust
/// use bubbletea_pomodoro::clock::format;
///
/// assert_eq!(format(90), "01:30");
/// assert_eq!(format(1500), "25:00");
/// ```
pub fn format(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_both_fields() {
        assert_eq!(format(90), "01:30");
        assert_eq!(format(0), "00:00");
        assert_eq!(format(65), "01:05");
        assert_eq!(format(9), "00:09");
    }

    #[test]
    fn test_format_mode_durations() {
        assert_eq!(format(1500), "25:00");
        assert_eq!(format(300), "05:00");
        assert_eq!(format(900), "15:00");
        assert_eq!(format(1499), "24:59");
    }

    #[test]
    fn test_format_does_not_roll_into_hours() {
        assert_eq!(format(3600), "60:00");
        assert_eq!(format(6000), "100:00");
    }
}
