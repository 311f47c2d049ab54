//! Keyed store of loaded maps.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use gridpath_core::GridMap;

use crate::error::Error;

/// Identifies one map in a [`MapRegistry`].
///
/// The empty key is reserved for the default (unkeyed) map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapKey(String);

impl MapKey {
    /// Create a key. An empty name refers to the default map.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key's name; empty for the default map.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the default map's key.
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            f.write_str("<default>")
        } else {
            write!(f, "{:?}", self.0)
        }
    }
}

/// Thread-safe map from [`MapKey`] to an immutable [`GridMap`].
///
/// The lock guards only the key table. Maps are handed out as `Arc`s and
/// read without locking; a load swaps in a freshly built map, so a reader
/// sees either the previous map or the new one in full.
#[derive(Debug, Default)]
pub struct MapRegistry {
    maps: RwLock<HashMap<MapKey, Arc<GridMap>>>,
}

impl MapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `rows` and install it under `key`, replacing any
    /// previous map for that key.
    ///
    /// A malformed grid is rejected before the table is touched, so the
    /// previous map (if any) stays in place.
    pub fn load<R: AsRef<[i32]>>(
        &self,
        key: impl Into<MapKey>,
        rows: &[R],
    ) -> Result<Arc<GridMap>, Error> {
        let key = key.into();
        let map = match GridMap::from_rows(rows) {
            Ok(map) => Arc::new(map),
            Err(e) => {
                log::warn!("rejected map for key {key}: {e}");
                return Err(e.into());
            }
        };
        self.install(key, Arc::clone(&map));
        Ok(map)
    }

    /// Install an already built map under `key`.
    pub fn install(&self, key: impl Into<MapKey>, map: Arc<GridMap>) {
        let key = key.into();
        let (w, h) = (map.width(), map.height());
        // Poisoning cannot leave the table half-updated: every write is a
        // single insert or remove.
        let replaced = self
            .maps
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), map)
            .is_some();
        log::debug!(
            "{} map {key} ({w}x{h})",
            if replaced { "replaced" } else { "loaded" }
        );
    }

    /// The map currently installed under `key`.
    pub fn get(&self, key: &MapKey) -> Result<Arc<GridMap>, Error> {
        self.maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
            .ok_or_else(|| Error::MapNotFound(key.clone()))
    }

    /// Remove the map under `key`. Returns whether one was installed.
    ///
    /// Queries already holding the map keep their `Arc` until they finish.
    pub fn unload(&self, key: &MapKey) -> bool {
        let removed = self
            .maps
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some();
        if removed {
            log::debug!("unloaded map {key}");
        }
        removed
    }

    /// Whether a map is installed under `key`.
    pub fn contains(&self, key: &MapKey) -> bool {
        self.maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }

    /// All installed keys, sorted.
    pub fn keys(&self) -> Vec<MapKey> {
        let mut keys: Vec<MapKey> = self
            .maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    /// Number of installed maps.
    pub fn len(&self) -> usize {
        self.maps.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::{GridError, Point};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    #[test]
    fn load_and_get() {
        let reg = MapRegistry::new();
        let key = MapKey::from("a");
        reg.load(key.clone(), &[[0, 1], [0, 0]]).unwrap();
        let map = reg.get(&key).unwrap();
        assert_eq!(map.is_blocked(Point::new(1, 0)), Ok(true));
        assert!(reg.contains(&key));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn missing_key() {
        let reg = MapRegistry::new();
        assert_eq!(
            reg.get(&MapKey::from("nope")),
            Err(Error::MapNotFound(MapKey::from("nope")))
        );
        assert_eq!(
            reg.get(&MapKey::default()),
            Err(Error::MapNotFound(MapKey::default()))
        );
    }

    #[test]
    fn load_replaces_previous_map() {
        let reg = MapRegistry::new();
        let key = MapKey::from("level");
        let old = reg.load(key.clone(), &[[0, 0]]).unwrap();
        reg.load(key.clone(), &[[1], [0], [0]]).unwrap();
        let new = reg.get(&key).unwrap();
        assert_eq!((new.width(), new.height()), (1, 3));
        // Earlier handles stay valid and unchanged.
        assert_eq!((old.width(), old.height()), (2, 1));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn invalid_shape_keeps_previous_map() {
        let reg = MapRegistry::new();
        let key = MapKey::from("k");
        reg.load(key.clone(), &[[0, 0, 0]]).unwrap();

        let ragged: &[&[i32]] = &[&[0, 0], &[0]];
        let err = reg.load(key.clone(), ragged).unwrap_err();
        assert!(err.is_invalid_shape());
        assert_eq!(reg.get(&key).unwrap().width(), 3);

        let empty: &[Vec<i32>] = &[];
        assert_eq!(
            reg.load("fresh", empty).unwrap_err(),
            Error::Grid(GridError::EmptyGrid)
        );
        assert!(!reg.contains(&MapKey::from("fresh")));
    }

    #[test]
    fn keys_are_independent() {
        let reg = MapRegistry::new();
        reg.load("a", &[[0]]).unwrap();
        reg.load("b", &[[1, 1]]).unwrap();
        reg.load("", &[[0, 0, 0]]).unwrap();
        assert_eq!(
            reg.keys(),
            vec![MapKey::default(), MapKey::from("a"), MapKey::from("b")]
        );
        assert_eq!(reg.get(&MapKey::from("a")).unwrap().width(), 1);
        assert_eq!(reg.get(&MapKey::from("b")).unwrap().width(), 2);
        assert_eq!(reg.get(&MapKey::default()).unwrap().width(), 3);
    }

    #[test]
    fn unload() {
        let reg = MapRegistry::new();
        let key = MapKey::from("gone");
        let held = reg.load(key.clone(), &[[0]]).unwrap();
        assert!(reg.unload(&key));
        assert!(!reg.unload(&key));
        assert!(reg.get(&key).is_err());
        assert!(reg.is_empty());
        assert!(held.passable(Point::ZERO));
    }

    #[test]
    fn concurrent_load_and_get_see_whole_maps() {
        // Every loaded map is n x (n + 1); a torn read would break that.
        let reg = MapRegistry::new();
        let key = MapKey::from("race");
        reg.load(key.clone(), &vec![vec![0; 1]; 2]).unwrap();
        let done = AtomicBool::new(false);

        thread::scope(|s| {
            s.spawn(|| {
                for n in 1..200usize {
                    let rows = vec![vec![0; n]; n + 1];
                    reg.load(key.clone(), &rows).unwrap();
                }
                done.store(true, Ordering::Release);
            });
            for _ in 0..3 {
                s.spawn(|| {
                    while !done.load(Ordering::Acquire) {
                        let map = reg.get(&key).unwrap();
                        assert_eq!(map.height(), map.width() + 1);
                        assert_eq!(map.range().len(), (map.width() * map.height()) as usize);
                    }
                });
            }
        });
    }

    #[test]
    fn key_display() {
        assert_eq!(MapKey::default().to_string(), "<default>");
        assert_eq!(MapKey::from("m1").to_string(), "\"m1\"");
        assert!(MapKey::new("").is_default());
        assert_eq!(MapKey::from(String::from("x")).as_str(), "x");
    }
}
