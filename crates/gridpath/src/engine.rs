//! The query facade: map loading plus path and line queries by key.

use std::sync::Arc;

use gridpath_core::{GridMap, Point};
use gridpath_paths::{
    PathRange, SearchConfig, clipped_segment, find_path, find_path_with, line_segment,
};

use crate::error::Error;
use crate::registry::{MapKey, MapRegistry};

/// One path query: start and goal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathQuery {
    pub from: Point,
    pub to: Point,
}

impl PathQuery {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

impl From<[i32; 4]> for PathQuery {
    /// `[x1, y1, x2, y2]`.
    fn from([x1, y1, x2, y2]: [i32; 4]) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }
}

/// A path-finding engine: one [`MapRegistry`] plus the movement rules used
/// for every search.
///
/// All methods take `&self`; share the engine across threads with an `Arc`.
#[derive(Debug, Default)]
pub struct PathEngine {
    registry: MapRegistry,
    config: SearchConfig,
}

impl PathEngine {
    /// An engine with the default [`SearchConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            registry: MapRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn registry(&self) -> &MapRegistry {
        &self.registry
    }

    // -----------------------------------------------------------------------
    // Maps
    // -----------------------------------------------------------------------

    /// Install `rows` as the default map.
    pub fn load_map<R: AsRef<[i32]>>(&self, rows: &[R]) -> Result<Arc<GridMap>, Error> {
        self.registry.load(MapKey::default(), rows)
    }

    /// Install `rows` under `key`.
    pub fn load_map_for_key<R: AsRef<[i32]>>(
        &self,
        key: impl Into<MapKey>,
        rows: &[R],
    ) -> Result<Arc<GridMap>, Error> {
        self.registry.load(key, rows)
    }

    /// Drop the map under `key`. Returns whether one was installed.
    pub fn unload_map(&self, key: impl Into<MapKey>) -> bool {
        self.registry.unload(&key.into())
    }

    /// The map under `key`.
    pub fn map(&self, key: impl Into<MapKey>) -> Result<Arc<GridMap>, Error> {
        self.registry.get(&key.into())
    }

    // -----------------------------------------------------------------------
    // Paths
    // -----------------------------------------------------------------------

    /// Shortest path on the default map.
    pub fn find_path(&self, from: Point, to: Point) -> Result<Vec<Point>, Error> {
        self.find_path_in_map(MapKey::default(), from, to)
    }

    /// Shortest path on the map under `key`.
    ///
    /// Fails with [`Error::MapNotFound`] for an unknown key and with an
    /// out-of-bounds [`Error::Grid`] when either endpoint is off the map. A
    /// blocked endpoint or an unreachable goal gives an empty path.
    pub fn find_path_in_map(
        &self,
        key: impl Into<MapKey>,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, Error> {
        let map = self.registry.get(&key.into())?;
        Ok(find_path(&map, from, to, self.config)?)
    }

    /// [`find_path`](Self::find_path) for each query, in order.
    pub fn find_paths(&self, queries: &[PathQuery]) -> Vec<Result<Vec<Point>, Error>> {
        self.find_paths_in_map(MapKey::default(), queries)
    }

    /// [`find_path_in_map`](Self::find_path_in_map) for each query, in order.
    ///
    /// Each result is independent; a failing query does not stop the batch.
    /// The queries share one search state, sized once for the map.
    pub fn find_paths_in_map(
        &self,
        key: impl Into<MapKey>,
        queries: &[PathQuery],
    ) -> Vec<Result<Vec<Point>, Error>> {
        let key = key.into();
        // Resolve once so the whole batch runs against one map even if the
        // key is reloaded meanwhile.
        let map = match self.registry.get(&key) {
            Ok(map) => map,
            Err(e) => return queries.iter().map(|_| Err(e.clone())).collect(),
        };
        let mut search = PathRange::new(map.range());
        queries
            .iter()
            .map(|q| Ok(find_path_with(&mut search, &map, q.from, q.to, self.config)?))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Lines
    // -----------------------------------------------------------------------

    /// Cells on the straight segment `from -> to`; needs no map.
    pub fn line_segment(&self, from: Point, to: Point) -> Vec<Point> {
        line_segment(from, to)
    }

    /// The segment `from -> to` on the map under `key`, cut short before the
    /// first blocked or off-map cell.
    pub fn line_segment_in_map(
        &self,
        key: impl Into<MapKey>,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, Error> {
        let map = self.registry.get(&key.into())?;
        Ok(clipped_segment(&map, from, to))
    }
}
