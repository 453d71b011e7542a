use std::collections::BTreeMap;
use std::time::Duration;

use casement_common::PersistenceError;
use casement_config::PersistenceConfig;
use tracing::{debug, info};

use super::group_state::GroupStateRecord;
use crate::cache::TtlCache;
use crate::geometry::DEFAULT_GRID_COLUMNS;
use crate::layout_presets::columns_option;
use crate::manager::WindowManager;

pub const DEFAULT_CACHE_KEY: &str = "window_groups";

/// Seven days.
pub const DEFAULT_EXPIRE_TIME: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Saves and restores every group at once through a TTL cache entry.
pub struct WindowGroupStateManager<C: TtlCache> {
    cache: C,
    cache_key: String,
    expire: Duration,
}

impl<C: TtlCache> WindowGroupStateManager<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache,
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            expire: DEFAULT_EXPIRE_TIME,
        }
    }

    pub fn from_config(cache: C, config: &PersistenceConfig) -> Self {
        Self {
            cache,
            cache_key: config.cache_key.clone(),
            expire: Duration::from_secs(config.ttl_secs),
        }
    }

    pub fn set_expire_time(&mut self, expire: Duration) -> &mut Self {
        self.expire = expire;
        self
    }

    pub fn set_cache_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.cache_key = key.into();
        self
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn into_cache(self) -> C {
        self.cache
    }

    /// Write one record per group. Returns the number of groups saved.
    pub fn auto_save_all(&mut self, manager: &mut WindowManager) -> Result<usize, PersistenceError> {
        let mut records = BTreeMap::new();
        for name in manager.group_names() {
            let Some(mut group) = manager.group_mut(&name) else {
                continue;
            };
            let windows = group.save_state();
            let record = GroupStateRecord::new(
                windows,
                group.current_layout().map(str::to_string),
                group.layout_options().clone(),
            );
            records.insert(name, record);
        }
        let count = records.len();
        self.cache
            .set(&self.cache_key, serde_json::to_value(&records)?, self.expire)?;
        info!(groups = count, key = %self.cache_key, "group state saved");
        Ok(count)
    }

    /// Restore member state for every saved group that still exists, then
    /// re-apply its layout.
    ///
    /// Only `horizontal`, `vertical` and `grid` are re-applied, without
    /// animation; other layout names are skipped. Returns the number of
    /// groups restored.
    pub fn auto_restore_all(&mut self, manager: &mut WindowManager) -> Result<usize, PersistenceError> {
        let Some(value) = self.cache.get(&self.cache_key)? else {
            debug!(key = %self.cache_key, "no saved group state");
            return Ok(0);
        };
        let records: BTreeMap<String, GroupStateRecord> = serde_json::from_value(value)?;

        let mut restored = 0;
        for (name, record) in &records {
            let Some(mut group) = manager.group_mut(name) else {
                debug!(group = %name, "saved group no longer exists");
                continue;
            };
            group.restore_state(&record.windows);
            match record.layout.as_deref() {
                Some("horizontal") => {
                    group.arrange_horizontal(false);
                }
                Some("vertical") => {
                    group.arrange_vertical(false);
                }
                Some("grid") => {
                    let columns = columns_option(&record.options).unwrap_or(DEFAULT_GRID_COLUMNS);
                    group.arrange_grid(columns, false);
                }
                Some(other) => debug!(group = %name, layout = other, "layout not re-applied on restore"),
                None => {}
            }
            restored += 1;
        }
        info!(groups = restored, "group state restored");
        Ok(restored)
    }

    pub fn clear_all(&mut self) -> Result<bool, PersistenceError> {
        self.cache.delete(&self.cache_key)
    }
}
