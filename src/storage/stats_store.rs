//! Best-effort load/save of the statistics snapshot.

use super::{KeyValueStore, StoreError};
use crate::models::stats::GameStats;

/// Key the statistics snapshot lives under.
pub const STATS_KEY: &str = "colourGuesserStats";

/// Reads the snapshot, merging defaults into missing fields.
///
/// Missing, unreadable or corrupt data yields zeroed statistics.
pub fn load_stats<S: KeyValueStore + ?Sized>(store: &S) -> GameStats {
    let raw = match store.get(STATS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return GameStats::default(),
        Err(e) => {
            log::warn!("STORE: Failed to load game stats: {}", e);
            return GameStats::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(stats) => stats,
        Err(e) => {
            log::warn!("STORE: Failed to load game stats: {}", e);
            GameStats::default()
        }
    }
}

/// Writes the snapshot. Failures are logged and reported as `false`; they
/// never interrupt play.
pub fn save_stats<S: KeyValueStore + ?Sized>(store: &mut S, stats: &GameStats) -> bool {
    let result = serde_json::to_string(stats)
        .map_err(StoreError::from)
        .and_then(|json| store.set(STATS_KEY, &json));

    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("STORE: Failed to save game stats: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let mut stats = GameStats::new();
        stats.record_round(150, true, 150);

        assert!(save_stats(&mut store, &stats));
        assert_eq!(load_stats(&store), stats);
    }

    #[test]
    fn test_missing_and_corrupt_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(load_stats(&store), GameStats::default());

        store.set(STATS_KEY, "{not json").unwrap();
        assert_eq!(load_stats(&store), GameStats::default());

        store.set(STATS_KEY, r#"{"gamesPlayed":3}"#).unwrap();
        assert_eq!(load_stats(&store).games_played, 3);
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        let mut store = BrokenStore;
        assert_eq!(load_stats(&store), GameStats::default());
        assert!(!save_stats(&mut store, &GameStats::default()));
    }
}
