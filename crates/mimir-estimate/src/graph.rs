//! Connectivity graph built from an architecture's topology descriptor.

use mimir_hal::{HardwareArchitecture, Topology};

/// Physical-qubit connectivity graph with precomputed distances.
///
/// Built once per estimation call from the architecture's topology
/// descriptor. All-pairs shortest-path distances are precomputed with one
/// BFS per node, so `distance()` is O(1) during routing; `u32::MAX` is the
/// internal unreachable sentinel, surfaced as `None`.
#[derive(Debug, Clone)]
pub struct ConnectivityGraph {
    num_qubits: u32,
    adjacency: Vec<Vec<u32>>,
    dist_matrix: Vec<Vec<u32>>,
}

impl ConnectivityGraph {
    /// Build the graph for an architecture.
    ///
    /// Enumerated topologies expand as:
    /// - all-to-all: every pair connected;
    /// - linear: i to i+1;
    /// - ring: linear plus the closing (Q-1, 0) edge;
    /// - grid: ⌈√Q⌉-side square, row-major, right/below edges;
    /// - heavy-hex / heavy-square: linear chain plus (i, i+2) cross-links
    ///   for i ≡ 0 (mod 3), an approximation of the real lattices;
    /// - custom: the architecture's explicit adjacency, already validated
    ///   for symmetry and bounds.
    ///
    /// The result is deduplicated and symmetric.
    pub fn build(architecture: &HardwareArchitecture) -> Self {
        let n = architecture.qubit_count();
        let mut adjacency: Vec<Vec<u32>> = vec![vec![]; n as usize];

        let mut connect = |a: u32, b: u32| {
            adjacency[a as usize].push(b);
            adjacency[b as usize].push(a);
        };

        match architecture.connectivity() {
            Topology::AllToAll => {
                for i in 0..n {
                    for j in (i + 1)..n {
                        connect(i, j);
                    }
                }
            }
            Topology::Linear => {
                for i in 0..n.saturating_sub(1) {
                    connect(i, i + 1);
                }
            }
            Topology::Ring => {
                for i in 0..n.saturating_sub(1) {
                    connect(i, i + 1);
                }
                if n > 2 {
                    connect(n - 1, 0);
                }
            }
            Topology::Grid => {
                let side = (f64::from(n)).sqrt().ceil() as u32;
                for r in 0..side {
                    for c in 0..side {
                        let idx = r * side + c;
                        if idx >= n {
                            continue;
                        }
                        if c + 1 < side && idx + 1 < n {
                            connect(idx, idx + 1);
                        }
                        if r + 1 < side && idx + side < n {
                            connect(idx, idx + side);
                        }
                    }
                }
            }
            Topology::HeavyHex | Topology::HeavySquare => {
                // Approximate model: chain plus periodic cross-links.
                for i in 0..n.saturating_sub(1) {
                    connect(i, i + 1);
                    if i + 2 < n && i % 3 == 0 {
                        connect(i, i + 2);
                    }
                }
            }
            Topology::Custom { adjacencies } => {
                for (i, neighbors) in adjacencies.iter().enumerate() {
                    for &j in neighbors {
                        if (i as u32) < j {
                            connect(i as u32, j);
                        }
                    }
                }
            }
        }

        // Deduplicate neighbor lists.
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }

        let mut graph = Self {
            num_qubits: n,
            adjacency,
            dist_matrix: vec![],
        };
        graph.precompute_distances();
        graph
    }

    /// One BFS per node fills the all-pairs distance matrix.
    fn precompute_distances(&mut self) {
        let n = self.num_qubits as usize;
        self.dist_matrix = vec![vec![u32::MAX; n]; n];

        for src in 0..n {
            self.dist_matrix[src][src] = 0;
            let mut queue = std::collections::VecDeque::new();
            queue.push_back(src as u32);

            while let Some(current) = queue.pop_front() {
                let cur = current as usize;
                for &neighbor in &self.adjacency[cur] {
                    let nb = neighbor as usize;
                    if self.dist_matrix[src][nb] == u32::MAX {
                        self.dist_matrix[src][nb] = self.dist_matrix[src][cur] + 1;
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    /// Number of physical qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Whether two qubits are directly connected.
    #[inline]
    pub fn is_connected(&self, a: u32, b: u32) -> bool {
        self.adjacency
            .get(a as usize)
            .is_some_and(|neighbors| neighbors.binary_search(&b).is_ok())
    }

    /// Neighbors of a qubit.
    pub fn neighbors(&self, qubit: u32) -> &[u32] {
        self.adjacency
            .get(qubit as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Shortest-path distance between two qubits.
    ///
    /// `Some(0)` when `from == to`; `None` when either index is out of
    /// bounds or no path exists.
    pub fn distance(&self, from: u32, to: u32) -> Option<u32> {
        let d = *self
            .dist_matrix
            .get(from as usize)?
            .get(to as usize)?;
        if d == u32::MAX { None } else { Some(d) }
    }
}
