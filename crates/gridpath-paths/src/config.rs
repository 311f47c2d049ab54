/// Cost of one horizontal or vertical step.
pub const CARDINAL_COST: i64 = 1000;

/// Cost of one diagonal step (√2 in [`CARDINAL_COST`] units).
pub const DIAGONAL_COST: i64 = 1414;

/// Which neighboring cells a single search step may reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Horizontal and vertical moves only.
    Four,
    /// Horizontal, vertical and diagonal moves.
    #[default]
    Eight,
}

/// Movement rules for a path search.
///
/// The default is 8-connected movement without corner cutting: a diagonal
/// step needs both cells it squeezes between to be passable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub connectivity: Connectivity,
    /// Allow a diagonal step whenever its destination is passable, even when
    /// it passes the corner of a blocked cell.
    pub corner_cutting: bool,
}

impl SearchConfig {
    /// Set the neighbor model.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Allow or forbid diagonal steps past blocked corners.
    pub fn with_corner_cutting(mut self, corner_cutting: bool) -> Self {
        self.corner_cutting = corner_cutting;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default().with_corner_cutting(true);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"connectivity":"Four"}"#).unwrap();
        assert_eq!(cfg.connectivity, Connectivity::Four);
        assert!(!cfg.corner_cutting);
    }
}
