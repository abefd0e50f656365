//! Display formatting helpers for file sizes and message timestamps

use chrono::{DateTime, Local, Utc};

/// Formats a byte count the way the staged-file list shows it
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_file_size;
/// assert_eq!(format_file_size(2_621_440), "2.50 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let value = bytes as f64;
    if value >= MB {
        format!("{:.2} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Formats a message timestamp as local wall-clock time ("14:05:33")
pub fn format_clock_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_format_file_size_kilobytes() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(153_600), "150.0 KB");
    }

    #[test]
    fn test_format_file_size_megabytes() {
        assert_eq!(format_file_size(1_048_576), "1.00 MB");
        assert_eq!(format_file_size(2_621_440), "2.50 MB");
    }
}
