// Default bang set used by reset and by a fresh owner store

use super::{BangEntry, BangTable};

/// Stock bangs as (trigger, url) in display order
const BUILTIN_BANGS: &[(&str, &str)] = &[
    ("g", "https://www.google.com/search?q=%s"),
    ("d", "https://duckduckgo.com/?q=%s"),
    ("b", "https://www.bing.com/search?q=%s"),
    ("w", "https://en.wikipedia.org/w/index.php?search=%s"),
    ("yt", "https://www.youtube.com/results?search_query=%s"),
    ("gh", "https://github.com/search?q=%s"),
    ("r", "https://www.reddit.com/search/?q=%s"),
    ("a", "https://www.amazon.com/s?k=%s"),
    ("m", "https://www.google.com/maps/search/%s"),
    ("so", "https://stackoverflow.com/search?q=%s"),
];

/// Provider of a complete, valid default table
pub trait DefaultsProvider: Send + Sync {
    fn default_table(&self) -> BangTable;
}

/// Ships the stock bang set, ids 1..=n and positions in list order
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinDefaults;

impl DefaultsProvider for BuiltinDefaults {
    fn default_table(&self) -> BangTable {
        BUILTIN_BANGS
            .iter()
            .enumerate()
            .map(|(i, (trigger, url))| {
                let n = i as u64 + 1;
                (trigger.to_string(), BangEntry::new(n, *url, n as i64))
            })
            .collect()
    }
}

/// Provider returning a fixed table, useful when defaults come from elsewhere
#[derive(Debug, Clone)]
pub struct StaticDefaults(pub BangTable);

impl DefaultsProvider for StaticDefaults {
    fn default_table(&self) -> BangTable {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "defaults_test.rs"]
mod tests;
