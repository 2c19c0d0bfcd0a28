//! Deterministic storage keys, one family per persisted entity.
//!
//! The key layout is part of the persisted format: chains carry entries
//! under these prefixes forever, so any change here is a migration.

/// Prefix of the roster entry for a title.
const CONFIG_NODES_PREFIX: &str = "mavl-paracross-nodes-";

/// Prefix of the per-title cursor entry.
const TITLE_PREFIX: &str = "mavl-paracross-title-";

/// Prefix of the per-(title, height) aggregation record entry.
const TITLE_HEIGHT_PREFIX: &str = "mavl-paracross-title-height-";

/// Key of the validator roster configured for `title`.
pub fn config_nodes(title: &str) -> Vec<u8> {
    format!("{CONFIG_NODES_PREFIX}{title}").into_bytes()
}

/// Key of the cursor for `title`.
pub fn title(title: &str) -> Vec<u8> {
    format!("{TITLE_PREFIX}{title}").into_bytes()
}

/// Key of the aggregation record for (`title`, `height`). Heights only
/// need to be unique within a title, not byte-ordered.
pub fn title_height(title: &str, height: i64) -> Vec<u8> {
    format!("{TITLE_HEIGHT_PREFIX}{title}-{height}").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_families_are_disjoint() {
        assert_ne!(config_nodes("game"), title("game"));
        assert_ne!(title("game"), title_height("game", 1));
        assert_ne!(config_nodes("game"), title_height("game", 1));
    }

    #[test]
    fn test_keys_are_stable() {
        assert_eq!(config_nodes("game"), b"mavl-paracross-nodes-game".to_vec());
        assert_eq!(title("game"), b"mavl-paracross-title-game".to_vec());
        assert_eq!(
            title_height("game", 12),
            b"mavl-paracross-title-height-game-12".to_vec()
        );
    }

    #[test]
    fn test_distinct_heights_get_distinct_keys() {
        assert_ne!(title_height("game", 1), title_height("game", 2));
        assert_ne!(title_height("game", 1), title_height("war", 1));
    }
}
