//! Qubit connectivity topology descriptors.

use serde::{Deserialize, Serialize};

/// Connectivity topology of a quantum device.
///
/// Enumerated patterns are expanded into a concrete adjacency structure by
/// the estimator's connectivity-graph builder; `Custom` carries an explicit
/// adjacency list validated at architecture construction (symmetric,
/// in-bounds, length equal to the qubit count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Topology {
    /// Every pair of qubits connected.
    AllToAll,
    /// Nearest-neighbor chain: i to i+1.
    Linear,
    /// Linear chain with the closing (Q-1, 0) edge.
    Ring,
    /// Square grid with side ⌈√Q⌉, row-major, right/below edges.
    Grid,
    /// Heavy-hex lattice, modeled as a linear chain with periodic
    /// cross-links. An approximation, not a faithful lattice.
    HeavyHex,
    /// Heavy-square lattice, same approximate model as heavy-hex.
    HeavySquare,
    /// Explicit adjacency list: `adjacencies[i]` lists the neighbors of
    /// qubit `i`.
    Custom {
        /// Neighbor lists, one per qubit.
        adjacencies: Vec<Vec<u32>>,
    },
}

impl Topology {
    /// The kebab-case tag for this topology.
    pub fn name(&self) -> &'static str {
        match self {
            Topology::AllToAll => "all-to-all",
            Topology::Linear => "linear",
            Topology::Ring => "ring",
            Topology::Grid => "grid",
            Topology::HeavyHex => "heavy-hex",
            Topology::HeavySquare => "heavy-square",
            Topology::Custom { .. } => "custom",
        }
    }

    /// Whether every qubit pair interacts directly (routing is free).
    #[inline]
    pub fn is_all_to_all(&self) -> bool {
        matches!(self, Topology::AllToAll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_tags() {
        assert_eq!(Topology::AllToAll.name(), "all-to-all");
        assert_eq!(Topology::HeavyHex.name(), "heavy-hex");
        assert!(Topology::AllToAll.is_all_to_all());
        assert!(!Topology::Ring.is_all_to_all());
    }

    #[test]
    fn test_topology_serde_tags() {
        let json = serde_json::to_string(&Topology::HeavySquare).unwrap();
        assert_eq!(json, r#"{"type":"heavy-square"}"#);

        let custom = Topology::Custom {
            adjacencies: vec![vec![1], vec![0]],
        };
        let json = serde_json::to_string(&custom).unwrap();
        let back: Topology = serde_json::from_str(&json).unwrap();
        assert_eq!(back, custom);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = serde_json::from_str::<Topology>(r#"{"type":"torus"}"#);
        assert!(err.is_err());
    }
}
