//! Flat-encoded entry points for host bindings.
//!
//! Every function here wraps a [`PathEngine`] method and converts results to
//! `[x0, y0, x1, y1, ...]` with [`flatten`]. Single queries keep their error
//! channel; batch queries cannot report per-item errors, so a failed item
//! becomes an empty sequence and is logged.

use gridpath_core::{Point, flatten};
use gridpath_paths::line_segment;

use crate::engine::{PathEngine, PathQuery};
use crate::error::Error;
use crate::registry::MapKey;

/// Implementation version string.
pub fn version() -> &'static str {
    crate::VERSION
}

/// Install `rows` as the default map.
pub fn load_map<R: AsRef<[i32]>>(engine: &PathEngine, rows: &[R]) -> Result<(), Error> {
    engine.load_map(rows).map(drop)
}

/// Install `rows` under `key`.
pub fn load_map_for_key<R: AsRef<[i32]>>(
    engine: &PathEngine,
    key: &str,
    rows: &[R],
) -> Result<(), Error> {
    engine.load_map_for_key(key, rows).map(drop)
}

/// Shortest path on the default map, flattened.
pub fn find_path(
    engine: &PathEngine,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Result<Vec<i32>, Error> {
    engine
        .find_path(Point::new(x1, y1), Point::new(x2, y2))
        .map(|p| flatten(&p))
}

/// Shortest path on the map under `key`, flattened.
pub fn find_path_in_map(
    engine: &PathEngine,
    key: &str,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Result<Vec<i32>, Error> {
    engine
        .find_path_in_map(key, Point::new(x1, y1), Point::new(x2, y2))
        .map(|p| flatten(&p))
}

/// Raster cells between two points, flattened. Needs no map.
pub fn get_line_segment(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<i32> {
    flatten(&line_segment(Point::new(x1, y1), Point::new(x2, y2)))
}

/// Line segment on the map under `key`, clipped before the first blocked or
/// off-map cell, flattened.
pub fn get_line_segment_in_map(
    engine: &PathEngine,
    key: &str,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Result<Vec<i32>, Error> {
    engine
        .line_segment_in_map(key, Point::new(x1, y1), Point::new(x2, y2))
        .map(|p| flatten(&p))
}

/// Batch of `[x1, y1, x2, y2]` queries on the default map.
pub fn find_paths(engine: &PathEngine, queries: &[[i32; 4]]) -> Vec<Vec<i32>> {
    find_paths_in_map(engine, "", queries)
}

/// Batch of `[x1, y1, x2, y2]` queries on the map under `key`.
///
/// The output has one entry per query, in input order. A query that fails
/// yields an empty sequence, the same as "no path".
pub fn find_paths_in_map(
    engine: &PathEngine,
    key: &str,
    queries: &[[i32; 4]],
) -> Vec<Vec<i32>> {
    let key = MapKey::from(key);
    let queries: Vec<PathQuery> = queries.iter().copied().map(PathQuery::from).collect();
    engine
        .find_paths_in_map(key.clone(), &queries)
        .into_iter()
        .zip(&queries)
        .map(|(result, q)| match result {
            Ok(path) => flatten(&path),
            Err(e) => {
                log::warn!("path {} -> {} on map {key}: {e}", q.from, q.to);
                Vec::new()
            }
        })
        .collect()
}
