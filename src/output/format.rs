//! Size column and label formatting

use std::path::Path;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::tree::Entry;

use super::config::OutputConfig;

/// Column width for raw byte counts.
pub const BYTES_WIDTH: usize = 11;

/// Column width for human-readable sizes.
pub const HUMAN_WIDTH: usize = 9;

const KB: u64 = 1 << 10;
const MB: u64 = 1 << 20;
const GB: u64 = 1 << 30;
const TB: u64 = 1 << 40;
const PB: u64 = 1 << 50;

/// Format a size scaled to binary units, e.g. `1.00KB`. Sizes below 1024
/// are printed as a bare integer.
pub fn human_size(bytes: u64) -> String {
    let (unit, suffix) = match bytes {
        b if b < KB => return b.to_string(),
        b if b < MB => (KB, "KB"),
        b if b < GB => (MB, "MB"),
        b if b < TB => (GB, "GB"),
        b if b < PB => (TB, "TB"),
        _ => (PB, "PB"),
    };
    format!("{:.2}{}", bytes as f64 / unit as f64, suffix)
}

/// Format a raw byte count, switching to scientific notation once it no
/// longer fits the column.
pub fn byte_size(bytes: u64) -> String {
    let digits = bytes.to_string();
    if digits.len() > BYTES_WIDTH {
        // Exponent is always positive here; keep the sign explicit
        format!("{:.6E}", bytes as f64).replacen('E', "E+", 1)
    } else {
        digits
    }
}

/// Format a size right-aligned to its column.
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if human_readable {
        format!("{:>width$}", human_size(bytes), width = HUMAN_WIDTH)
    } else {
        format!("{:>width$}", byte_size(bytes), width = BYTES_WIDTH)
    }
}

/// The bracketed metadata block printed before a label, or an empty string
/// when no metadata is enabled.
pub fn metadata_block(entry: &Entry, config: &OutputConfig) -> String {
    if !config.size_enabled() {
        return String::new();
    }
    format!("[{}] ", format_size(entry.size, config.human_readable))
}

/// The text printed for an entry.
pub fn entry_label(parent: &Path, entry: &Entry, config: &OutputConfig) -> String {
    let label = if config.full_path {
        parent.join(&entry.file_name).to_string_lossy().into_owned()
    } else {
        entry.name.clone()
    };
    if config.replace_nonprintable {
        replace_nonprintable(&label)
    } else {
        label
    }
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space are
/// printable. Controls, format characters, separators other than the space,
/// private-use and unassigned code points are not.
pub fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    c == ' '
        || matches!(
            get_general_category(c),
            UppercaseLetter
                | LowercaseLetter
                | TitlecaseLetter
                | ModifierLetter
                | OtherLetter
                | NonspacingMark
                | SpacingMark
                | EnclosingMark
                | DecimalNumber
                | LetterNumber
                | OtherNumber
                | ConnectorPunctuation
                | DashPunctuation
                | OpenPunctuation
                | ClosePunctuation
                | InitialPunctuation
                | FinalPunctuation
                | OtherPunctuation
                | MathSymbol
                | CurrencySymbol
                | ModifierSymbol
                | OtherSymbol
        )
}

pub fn replace_nonprintable(s: &str) -> String {
    s.chars()
        .map(|c| if is_printable(c) { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_below_one_kilobyte_is_bare() {
        assert_eq!(human_size(0), "0");
        assert_eq!(human_size(512), "512");
        assert_eq!(human_size(1023), "1023");
    }

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(1024), "1.00KB");
        assert_eq!(human_size(1536), "1.50KB");
        assert_eq!(human_size(MB), "1.00MB");
        assert_eq!(human_size(5 * GB / 2), "2.50GB");
        assert_eq!(human_size(TB), "1.00TB");
        assert_eq!(human_size(PB), "1.00PB");
        assert_eq!(human_size(2048 * PB), "2048.00PB");
    }

    #[test]
    fn test_byte_size_switches_to_scientific() {
        assert_eq!(byte_size(12345678901), "12345678901");
        assert_eq!(byte_size(123456789012), "1.234568E+11");
    }

    #[test]
    fn test_format_size_is_right_aligned() {
        assert_eq!(format_size(512, false), "        512");
        assert_eq!(format_size(512, true), "      512");
        assert_eq!(format_size(1024, true), "   1.00KB");
        assert_eq!(format_size(123456789012, false), "1.234568E+11");
    }

    #[test]
    fn test_metadata_block() {
        let entry = Entry::file("a.txt", 1024);
        assert_eq!(metadata_block(&entry, &OutputConfig::default()), "");

        let sized = OutputConfig {
            show_size: true,
            ..Default::default()
        };
        assert_eq!(metadata_block(&entry, &sized), "[       1024] ");

        let human = OutputConfig {
            human_readable: true,
            ..Default::default()
        };
        assert_eq!(metadata_block(&entry, &human), "[   1.00KB] ");
    }

    #[test]
    fn test_entry_label_full_path() {
        let entry = Entry::file("a.txt", 1);
        let config = OutputConfig::default();
        assert_eq!(entry_label(Path::new("root/sub"), &entry, &config), "a.txt");

        let config = OutputConfig {
            full_path: true,
            ..Default::default()
        };
        let expected = Path::new("root/sub").join("a.txt");
        assert_eq!(
            entry_label(Path::new("root/sub"), &entry, &config),
            expected.to_string_lossy()
        );
    }

    #[test]
    fn test_replace_nonprintable() {
        assert_eq!(replace_nonprintable("plain name.txt"), "plain name.txt");
        assert_eq!(replace_nonprintable("tab\there"), "tab?here");
        assert_eq!(replace_nonprintable("bell\u{7}"), "bell?");
        assert_eq!(replace_nonprintable("line\nbreak"), "line?break");
        assert_eq!(replace_nonprintable("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn test_format_and_private_use_chars_are_replaced() {
        assert_eq!(
            replace_nonprintable("evil\u{202e}txt.exe\u{200b}\u{ad}"),
            "evil?txt.exe??"
        );
        assert_eq!(replace_nonprintable("pua\u{e000}"), "pua?");
        assert_eq!(replace_nonprintable("nbsp\u{a0}x"), "nbsp?x");
        assert_eq!(replace_nonprintable("unassigned\u{378}"), "unassigned?");
    }

    #[test]
    fn test_printable_categories_are_kept() {
        for name in ["日本語", "émoji_🎉", "a\u{301}", "€$£", "«quoted»", "Ⅻ_½", "x+y=z"] {
            assert_eq!(replace_nonprintable(name), name);
        }
    }

    #[test]
    fn test_entry_label_replaces_only_when_enabled() {
        let entry = Entry::file("a\u{1b}b", 1);
        let config = OutputConfig::default();
        assert_eq!(entry_label(Path::new("."), &entry, &config), "a\u{1b}b");

        let config = OutputConfig {
            replace_nonprintable: true,
            ..Default::default()
        };
        assert_eq!(entry_label(Path::new("."), &entry, &config), "a?b");
    }
}
