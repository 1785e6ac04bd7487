use colored::*;
use humansize::{format_size, DECIMAL};
use unicode_width::UnicodeWidthStr;

/// Format a byte count in human-readable decimal units (KB, MB, GB)
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Pad a string with spaces up to a display width, unicode-aware.
/// Strings wider than `width` are returned unchanged.
pub fn pad_display(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

/// Render a usage bar of the given width, colored by how full it is
pub fn create_usage_bar(usage_percent: f32, width: usize) -> String {
    let filled = ((usage_percent / 100.0) * width as f32) as usize;
    let filled = filled.min(width);
    let empty = width.saturating_sub(filled);

    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

    let colored_bar = if usage_percent >= 85.0 {
        bar.red()
    } else if usage_percent >= 70.0 {
        bar.yellow()
    } else {
        bar.green()
    };

    format!("[{}]", colored_bar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_display_ascii() {
        assert_eq!(pad_display("abc", 5), "abc  ");
        assert_eq!(pad_display("abcdef", 5), "abcdef");
    }

    #[test]
    fn test_pad_display_wide_chars() {
        // CJK characters occupy two columns each
        let padded = pad_display("メモリ", 8);
        assert_eq!(padded, "メモリ  ");
    }

    #[test]
    fn test_usage_bar_is_bounded() {
        let bar = create_usage_bar(150.0, 10);
        // 10 filled cells plus the brackets and color codes, never wider
        assert_eq!(bar.matches('█').count(), 10);
        assert_eq!(bar.matches('░').count(), 0);
    }
}
