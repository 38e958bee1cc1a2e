//! Entry filtering for tree walking

use glob::Pattern;

use super::config::WalkerConfig;
use super::entry::Entry;

/// A compiled glob matched against bare entry names.
#[derive(Debug, Clone)]
pub enum NamePattern {
    /// Empty pattern, matches every name
    Any,
    Glob(Pattern),
    /// Failed to compile; never matches
    Invalid,
}

impl NamePattern {
    /// Compile a pattern, lowercasing it first when matching ignores case.
    pub fn new(pattern: &str, ignore_case: bool) -> Self {
        if pattern.is_empty() {
            return Self::Any;
        }
        let source = if ignore_case {
            pattern.to_lowercase()
        } else {
            pattern.to_string()
        };
        match Pattern::new(&source) {
            Ok(p) => Self::Glob(p),
            Err(_) => Self::Invalid,
        }
    }

    pub fn matches(&self, name: &str, ignore_case: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Glob(p) if ignore_case => p.matches(&name.to_lowercase()),
            Self::Glob(p) => p.matches(name),
            Self::Invalid => false,
        }
    }
}

/// Per-directory filter pipeline.
///
/// Stages run in a fixed order: hidden, directories-only, include (or the
/// parent directory's own include match), exclude.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    include_hidden: bool,
    dirs_only: bool,
    ignore_case: bool,
    match_dirs: bool,
    include: NamePattern,
    exclude: Option<NamePattern>,
}

impl EntryFilter {
    pub fn new(config: &WalkerConfig) -> Self {
        let exclude = (!config.exclude_pattern.is_empty())
            .then(|| NamePattern::new(&config.exclude_pattern, config.ignore_case));
        Self {
            include_hidden: config.include_hidden,
            dirs_only: config.dirs_only,
            ignore_case: config.ignore_case,
            match_dirs: config.match_dirs,
            include: NamePattern::new(&config.include_pattern, config.ignore_case),
            exclude,
        }
    }

    /// Whether the listed directory's own name satisfies the include pattern.
    /// Always false unless directory-name matching is enabled.
    pub fn dir_self_match(&self, dir_name: &str) -> bool {
        self.match_dirs && self.include.matches(dir_name, self.ignore_case)
    }

    pub fn keep(&self, entry: &Entry, dir_self_match: bool) -> bool {
        if entry.hidden && !self.include_hidden {
            return false;
        }
        if self.dirs_only && !entry.is_dir {
            return false;
        }
        if !(dir_self_match || self.include.matches(&entry.name, self.ignore_case)) {
            return false;
        }
        if let Some(exclude) = &self.exclude {
            if exclude.matches(&entry.name, self.ignore_case) {
                return false;
            }
        }
        true
    }

    /// Filter a listing of the directory named `dir_name`.
    pub fn apply(&self, dir_name: &str, entries: Vec<Entry>) -> Vec<Entry> {
        let dir_self_match = self.dir_self_match(dir_name);
        entries
            .into_iter()
            .filter(|entry| self.keep(entry, dir_self_match))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_glob_match() {
        let m = |p: &str, n: &str| NamePattern::new(p, false).matches(n, false);

        // Basic patterns
        assert!(m("*.rs", "main.rs"));
        assert!(m("*.rs", "lib.rs"));
        assert!(!m("*.rs", "main.py"));
        assert!(m("test*", "test_foo"));
        assert!(!m("test*", "foo_test"));
        assert!(m("exact", "exact"));
        assert!(!m("exact", "notexact"));

        // Single character wildcard
        assert!(m("test?.rs", "test1.rs"));
        assert!(!m("test?.rs", "test12.rs"));

        // Character classes and ranges
        assert!(m("[abc].txt", "a.txt"));
        assert!(!m("[abc].txt", "d.txt"));
        assert!(m("[a-z].txt", "x.txt"));
        assert!(!m("[a-z].txt", "X.txt"));
    }

    #[test]
    fn test_ignore_case_folds_both_sides() {
        assert!(!NamePattern::new("*.TXT", false).matches("a.txt", false));
        assert!(NamePattern::new("*.TXT", true).matches("a.txt", true));
        assert!(NamePattern::new("*.txt", true).matches("A.TXT", true));
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let p = NamePattern::new("", false);
        assert!(p.matches("anything", false));
        assert!(p.matches("", false));
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let p = NamePattern::new("[", false);
        assert!(matches!(p, NamePattern::Invalid));
        assert!(!p.matches("[", false));
        assert!(!p.matches("a", false));
    }

    #[test]
    fn test_hidden_dropped_by_default() {
        let filter = EntryFilter::new(&WalkerConfig::default());
        let kept = filter.apply(
            "root",
            vec![Entry::file(".hidden", 1).hidden(true), Entry::file("shown", 1)],
        );
        assert_eq!(names(&kept), ["shown"]);

        let filter = EntryFilter::new(&WalkerConfig {
            include_hidden: true,
            ..Default::default()
        });
        let kept = filter.apply(
            "root",
            vec![Entry::file(".hidden", 1).hidden(true), Entry::file("shown", 1)],
        );
        assert_eq!(names(&kept), [".hidden", "shown"]);
    }

    #[test]
    fn test_dirs_only() {
        let filter = EntryFilter::new(&WalkerConfig {
            dirs_only: true,
            ..Default::default()
        });
        let kept = filter.apply("root", vec![Entry::file("f", 1), Entry::dir("d")]);
        assert_eq!(names(&kept), ["d"]);
    }

    #[test]
    fn test_include_applies_to_directories_too() {
        let filter = EntryFilter::new(&WalkerConfig {
            include_pattern: "*.rs".to_string(),
            ..Default::default()
        });
        let kept = filter.apply(
            "root",
            vec![Entry::file("main.rs", 1), Entry::file("notes.md", 1), Entry::dir("src")],
        );
        assert_eq!(names(&kept), ["main.rs"]);
    }

    #[test]
    fn test_exclude_pattern() {
        let filter = EntryFilter::new(&WalkerConfig {
            exclude_pattern: "*ignore*".to_string(),
            ..Default::default()
        });
        let kept = filter.apply(
            "root",
            vec![
                Entry::file("keep.rs", 1),
                Entry::file("ignore_me.rs", 1),
                Entry::dir("also_ignore"),
            ],
        );
        assert_eq!(names(&kept), ["keep.rs"]);
    }

    #[test]
    fn test_invalid_exclude_keeps_everything() {
        let filter = EntryFilter::new(&WalkerConfig {
            exclude_pattern: "[".to_string(),
            ..Default::default()
        });
        let kept = filter.apply("root", vec![Entry::file("a", 1), Entry::file("[", 1)]);
        assert_eq!(names(&kept), ["a", "["]);
    }

    #[test]
    fn test_invalid_include_keeps_nothing() {
        let filter = EntryFilter::new(&WalkerConfig {
            include_pattern: "[".to_string(),
            ..Default::default()
        });
        let kept = filter.apply("root", vec![Entry::file("a", 1), Entry::dir("d")]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_match_dirs_keeps_children_of_matching_directory() {
        let config = WalkerConfig {
            include_pattern: "src*".to_string(),
            match_dirs: true,
            ..Default::default()
        };
        let filter = EntryFilter::new(&config);

        assert!(filter.dir_self_match("src"));
        let kept = filter.apply("src", vec![Entry::file("main.rs", 1), Entry::file("lib.rs", 1)]);
        assert_eq!(names(&kept), ["main.rs", "lib.rs"]);

        assert!(!filter.dir_self_match("docs"));
        let kept = filter.apply("docs", vec![Entry::file("guide.md", 1)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_dir_self_match_requires_match_dirs() {
        let filter = EntryFilter::new(&WalkerConfig {
            include_pattern: "src".to_string(),
            ..Default::default()
        });
        assert!(!filter.dir_self_match("src"));
    }

    #[test]
    fn test_exclude_wins_over_dir_self_match() {
        let filter = EntryFilter::new(&WalkerConfig {
            include_pattern: "src".to_string(),
            exclude_pattern: "*.bak".to_string(),
            match_dirs: true,
            ..Default::default()
        });
        let kept = filter.apply("src", vec![Entry::file("a.rs", 1), Entry::file("a.bak", 1)]);
        assert_eq!(names(&kept), ["a.rs"]);
    }

    #[test]
    fn test_hidden_dropped_even_when_dir_self_match() {
        let filter = EntryFilter::new(&WalkerConfig {
            include_pattern: "src".to_string(),
            match_dirs: true,
            ..Default::default()
        });
        let kept = filter.apply("src", vec![Entry::file(".env", 1).hidden(true)]);
        assert!(kept.is_empty());
    }
}
