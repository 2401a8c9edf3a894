use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::version::error::VersionError;
use crate::version::number::VersionNumber;

/// Memoises [`VersionNumber::parse`] by raw string.
///
/// Entries are only ever inserted, and always with the value `parse` would return,
/// so concurrent readers and racing writers agree. A disabled or cleared cache
/// changes nothing but speed. A poisoned lock is bypassed, not reported.
#[derive(Debug)]
pub struct ParseCache {
    entries: RwLock<HashMap<String, VersionNumber>>,
    enabled: bool,
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            enabled: true,
        }
    }

    /// A cache that never stores anything; every lookup parses.
    pub fn disabled() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Parse errors are not cached.
    pub fn get_or_parse(&self, raw: &str) -> Result<VersionNumber, VersionError> {
        if !self.enabled {
            return VersionNumber::parse(raw);
        }

        if let Ok(entries) = self.entries.read()
            && let Some(version) = entries.get(raw)
        {
            return Ok(*version);
        }

        let version = VersionNumber::parse(raw)?;
        if let Ok(mut entries) = self.entries.write() {
            entries.entry(raw.to_string()).or_insert(version);
            debug!("Cached parsed version '{}' -> {}", raw, version);
        }
        Ok(version)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn get_or_parse_stores_successful_parses_once() {
        let cache = ParseCache::new();

        assert_eq!(cache.get_or_parse("16.4"), Ok(VersionNumber::new(16, 4, 0)));
        assert_eq!(cache.get_or_parse("16.4"), Ok(VersionNumber::new(16, 4, 0)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_or_parse_does_not_store_errors() {
        let cache = ParseCache::new();

        assert!(cache.get_or_parse("abc").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn disabled_cache_returns_same_results_without_storing() {
        let cache = ParseCache::disabled();

        assert_eq!(cache.get_or_parse("15.8"), VersionNumber::parse("15.8"));
        assert!(cache.is_empty());
        assert!(!cache.is_enabled());
    }

    #[test]
    fn clear_empties_cache_without_changing_results() {
        let cache = ParseCache::new();
        let before = cache.get_or_parse("12.22");

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get_or_parse("12.22"), before);
    }

    #[test]
    fn concurrent_lookups_agree() {
        let cache = Arc::new(ParseCache::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let raw = format!("{}.{}", 10 + i % 2, i);
                    cache.get_or_parse(&raw).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let i = i as u32;
            assert_eq!(handle.join().unwrap(), VersionNumber::new(10 + i % 2, i, 0));
        }
        assert_eq!(cache.len(), 8);
    }
}
