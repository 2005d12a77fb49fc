/// Format a byte count with fractional KB/MB/GB (e.g., "1.5 KB", "2.3 MB").
///
/// Archive sizes rarely fall on binary boundaries, so one decimal place is
/// always shown above a kilobyte.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Pluralize a count the way catalog summaries are written ("1 webtoon",
/// "3 webtoons"). Zero and one stay singular.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count > 1 {
        format!("{count} {noun}s")
    } else {
        format!("{count} {noun}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1048576), "1.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "webtoon"), "0 webtoon");
        assert_eq!(pluralize(1, "webtoon"), "1 webtoon");
        assert_eq!(pluralize(2, "webtoon"), "2 webtoons");
    }
}
