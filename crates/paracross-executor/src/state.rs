//! Typed gateway over the opaque KV: decode on read, encode on write.
//!
//! Reads distinguish "never written" (`None` / zero value, depending on
//! the entity) from decode failure, which is corruption and fatal to the
//! transaction. Writes go through the capability immediately; the same
//! bytes also travel in the receipt delta so the host commits atomically.

use crate::domain::keys;
use crate::error::ParacrossResult;
use crate::ports::outbound::KvStore;
use paracross_types::{
    decode, encode, Address, ConfigItem, ParacrossHeightStatus, ParacrossStatus,
};
use tracing::warn;

/// The validator roster configured for `title`. `None` means no roster
/// was ever configured (unknown title); a configured item whose array
/// was cleared yields an empty roster.
pub fn get_roster(kv: &dyn KvStore, title: &str) -> ParacrossResult<Option<Vec<Address>>> {
    let Some(bytes) = kv.get(&keys::config_nodes(title))? else {
        return Ok(None);
    };
    let item: ConfigItem = decode(&bytes).map_err(|e| {
        warn!("[paracross] roster for title {title} failed to decode: {e}");
        e
    })?;
    Ok(Some(item.members().to_vec()))
}

/// The cursor of `title`. A missing key is the zero-value cursor: no
/// height has reached consensus and the first current height is 1.
pub fn get_cursor(kv: &dyn KvStore, title: &str) -> ParacrossResult<ParacrossStatus> {
    match kv.get(&keys::title(title))? {
        Some(bytes) => Ok(decode(&bytes)?),
        None => Ok(ParacrossStatus {
            title: title.to_string(),
            height: 0,
        }),
    }
}

/// The aggregation record at (`title`, `height`), if any vote has been
/// recorded there.
pub fn get_agg(
    kv: &dyn KvStore,
    title: &str,
    height: i64,
) -> ParacrossResult<Option<ParacrossHeightStatus>> {
    match kv.get(&keys::title_height(title, height))? {
        Some(bytes) => Ok(Some(decode(&bytes)?)),
        None => Ok(None),
    }
}

/// Write the cursor through the capability.
pub fn put_cursor(kv: &dyn KvStore, cursor: &ParacrossStatus) -> ParacrossResult<()> {
    kv.put(&keys::title(&cursor.title), &encode(cursor)?)
}

/// Write an aggregation record through the capability.
pub fn put_agg(kv: &dyn KvStore, stat: &ParacrossHeightStatus) -> ParacrossResult<()> {
    kv.put(&keys::title_height(&stat.title, stat.height), &encode(stat)?)
}
