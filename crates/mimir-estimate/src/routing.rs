//! SWAP overhead estimation under a routing policy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use mimir_hal::HardwareArchitecture;
use mimir_ir::Circuit;

use crate::error::{EstimateError, EstimateResult};
use crate::graph::ConnectivityGraph;
use crate::layout::Layout;

/// Routing policy for SWAP overhead estimation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingAlgorithm {
    /// No routing: overhead is always zero. A baseline, or the natural
    /// choice for all-to-all devices.
    None,
    /// Static upper-bound estimate: (distance − 1) SWAPs per two-qubit
    /// gate against a fixed mapping that is never updated.
    ShortestPath,
    /// Dynamic estimate: a live mapping updated through simulated SWAPs,
    /// greedily choosing the single neighbor exchange that most reduces
    /// the endpoint distance for each gate.
    #[default]
    GreedyRouter,
}

impl RoutingAlgorithm {
    /// The kebab-case tag for this policy.
    pub fn name(&self) -> &'static str {
        match self {
            RoutingAlgorithm::None => "none",
            RoutingAlgorithm::ShortestPath => "shortest-path",
            RoutingAlgorithm::GreedyRouter => "greedy-router",
        }
    }
}

/// SWAP routing analysis for one (circuit, architecture) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapOverhead {
    /// Estimated number of SWAP operations required.
    pub count: u32,
    /// Policy that produced the estimate.
    pub algorithm: RoutingAlgorithm,
    /// Two-qubit gates whose endpoints are not adjacent under the initial
    /// mapping (before any routing).
    pub non_local_cnots: u32,
    /// Gate count of the unrouted circuit.
    pub original_gate_count: usize,
    /// Gate count after decomposing each SWAP into 3 two-qubit gates.
    pub routed_gate_count: usize,
    /// routed / original gate-count ratio (1.0 for an empty circuit).
    pub routing_factor: f64,
    /// Estimated depth increase from routing. Upper bound: SWAPs are
    /// counted as if none parallelize.
    pub swap_depth_overhead: u32,
}

/// Estimate the SWAP overhead for executing a circuit on an architecture.
///
/// The circuit must fit on the device; a width overflow is fatal no matter
/// the policy or topology. All-to-all connectivity (and the `none` policy)
/// short-circuit to zero SWAPs. The optional initial mapping gives the
/// physical home of each logical qubit; the default is the identity.
///
/// Both routed policies are approximations: `shortest-path` never moves
/// qubits so repeated distant interactions are charged repeatedly, while
/// `greedy-router` is locally optimal per gate with no lookahead (optimal
/// routing is NP-hard). When the greedy search reaches a local optimum it
/// charges the remaining (distance − 1) SWAPs for that gate directly.
pub fn estimate_swap_overhead(
    circuit: &Circuit,
    architecture: &HardwareArchitecture,
    algorithm: RoutingAlgorithm,
    initial_mapping: Option<&[u32]>,
) -> EstimateResult<SwapOverhead> {
    if circuit.num_qubits() > architecture.qubit_count() {
        return Err(EstimateError::QubitCountExceeded {
            architecture: architecture.name().to_string(),
            required: circuit.num_qubits(),
            available: architecture.qubit_count(),
        });
    }

    let graph = ConnectivityGraph::build(architecture);
    let layout = match initial_mapping {
        Some(mapping) => {
            Layout::from_mapping(mapping, circuit.num_qubits(), architecture.qubit_count())?
        }
        None => Layout::trivial(circuit.num_qubits(), architecture.qubit_count()),
    };

    let non_local = count_non_local(circuit, &graph, &layout);

    let count = if architecture.connectivity().is_all_to_all() {
        0
    } else {
        match algorithm {
            RoutingAlgorithm::None => 0,
            RoutingAlgorithm::ShortestPath => route_shortest_path(circuit, &graph, &layout)?,
            RoutingAlgorithm::GreedyRouter => route_greedy(circuit, &graph, layout),
        }
    };

    debug!(
        algorithm = algorithm.name(),
        swaps = count,
        non_local,
        "routed circuit"
    );

    let original_gate_count = circuit.len();
    let routed_gate_count = original_gate_count + 3 * count as usize;
    let routing_factor = if original_gate_count > 0 {
        routed_gate_count as f64 / original_gate_count as f64
    } else {
        1.0
    };

    Ok(SwapOverhead {
        count,
        algorithm,
        non_local_cnots: non_local,
        original_gate_count,
        routed_gate_count,
        routing_factor,
        swap_depth_overhead: count,
    })
}

/// Count two-qubit gates whose endpoints are not adjacent under the
/// initial mapping. Unreachable endpoints count as non-local.
fn count_non_local(circuit: &Circuit, graph: &ConnectivityGraph, layout: &Layout) -> u32 {
    let mut count = 0;
    for gate in circuit.gates() {
        if !gate.is_two_qubit() {
            continue;
        }
        let p1 = layout.physical(gate.qubits[0].0);
        let p2 = layout.physical(gate.qubits[1].0);
        match graph.distance(p1, p2) {
            Some(d) if d <= 1 => {}
            _ => count += 1,
        }
    }
    count
}

/// Static estimate: sum (distance − 1) over two-qubit gates against the
/// fixed initial mapping. The mapping is deliberately never updated; this
/// is a simplified upper bound, not a simulation.
fn route_shortest_path(
    circuit: &Circuit,
    graph: &ConnectivityGraph,
    layout: &Layout,
) -> EstimateResult<u32> {
    let mut total = 0u32;
    for gate in circuit.gates() {
        if !gate.is_two_qubit() {
            continue;
        }
        let p1 = layout.physical(gate.qubits[0].0);
        let p2 = layout.physical(gate.qubits[1].0);
        let dist = graph
            .distance(p1, p2)
            .ok_or(EstimateError::UnreachableQubits { from: p1, to: p2 })?;
        if dist > 1 {
            total += dist - 1;
        }
    }
    Ok(total)
}

/// Dynamic estimate: walk the circuit in order with a live mapping,
/// greedily applying the single neighbor exchange that most reduces the
/// gate's endpoint distance; on a local optimum, charge the remaining
/// distance and move on.
fn route_greedy(circuit: &Circuit, graph: &ConnectivityGraph, mut layout: Layout) -> u32 {
    let mut total = 0u32;

    for gate in circuit.gates() {
        if !gate.is_two_qubit() {
            continue;
        }
        let l1 = gate.qubits[0].0;
        let l2 = gate.qubits[1].0;

        loop {
            let p1 = layout.physical(l1);
            let p2 = layout.physical(l2);

            let Some(dist) = graph.distance(p1, p2) else {
                // Disconnected endpoints: nothing the router can do.
                break;
            };
            if dist <= 1 {
                break;
            }

            // Best single swap: move either endpoint onto one of its
            // occupied neighbors, minimizing the resulting distance.
            let mut best: Option<(u32, u32)> = None;
            let mut best_dist = dist;

            for &neighbor in graph.neighbors(p1) {
                if !layout.occupied(neighbor) {
                    continue;
                }
                if let Some(d) = graph.distance(neighbor, p2) {
                    if d < best_dist {
                        best_dist = d;
                        best = Some((p1, neighbor));
                    }
                }
            }
            for &neighbor in graph.neighbors(p2) {
                if !layout.occupied(neighbor) {
                    continue;
                }
                if let Some(d) = graph.distance(p1, neighbor) {
                    if d < best_dist {
                        best_dist = d;
                        best = Some((p2, neighbor));
                    }
                }
            }

            match best {
                Some((a, b)) => {
                    layout.swap_physical(a, b);
                    total += 1;
                }
                None => {
                    // Local optimum: charge the rest of the path directly.
                    total += dist - 1;
                    break;
                }
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimir_hal::{GateErrors, GateTimings, Topology};
    use mimir_ir::QubitId;

    fn arch_with(topology: Topology, qubits: u32) -> HardwareArchitecture {
        HardwareArchitecture::builder("routing-test", qubits)
            .connectivity(topology)
            .native_gates(["X", "H", "CX"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap()
    }

    fn cnot_chain(n: u32, pairs: &[(u32, u32)]) -> Circuit {
        let mut circuit = Circuit::new("pairs", n).unwrap();
        for &(a, b) in pairs {
            circuit.cx(QubitId(a), QubitId(b)).unwrap();
        }
        circuit
    }

    #[test]
    fn test_local_circuit_needs_no_swaps() {
        let arch = arch_with(Topology::Linear, 2);
        let circuit = Circuit::bell().unwrap();
        for algorithm in [
            RoutingAlgorithm::None,
            RoutingAlgorithm::ShortestPath,
            RoutingAlgorithm::GreedyRouter,
        ] {
            let overhead = estimate_swap_overhead(&circuit, &arch, algorithm, None).unwrap();
            assert_eq!(overhead.count, 0, "{algorithm:?}");
            assert_eq!(overhead.non_local_cnots, 0);
            assert_eq!(overhead.routed_gate_count, overhead.original_gate_count);
        }
    }

    #[test]
    fn test_all_to_all_short_circuits() {
        let arch = arch_with(Topology::AllToAll, 6);
        let circuit = cnot_chain(6, &[(0, 5), (1, 4), (2, 5)]);
        for algorithm in [RoutingAlgorithm::ShortestPath, RoutingAlgorithm::GreedyRouter] {
            let overhead = estimate_swap_overhead(&circuit, &arch, algorithm, None).unwrap();
            assert_eq!(overhead.count, 0);
        }
    }

    #[test]
    fn test_width_overflow_is_fatal_even_on_all_to_all() {
        let arch = arch_with(Topology::AllToAll, 4);
        let circuit = cnot_chain(5, &[(0, 4)]);
        let err = estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::None, None).unwrap_err();
        assert!(matches!(err, EstimateError::QubitCountExceeded { .. }));
    }

    #[test]
    fn test_shortest_path_distance_sum() {
        // Linear 0-1-2-3: CX(0,3) is distance 3 → 2 SWAPs; CX(0,2) → 1.
        let arch = arch_with(Topology::Linear, 4);
        let circuit = cnot_chain(4, &[(0, 3), (0, 2)]);
        let overhead =
            estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::ShortestPath, None).unwrap();
        assert_eq!(overhead.count, 3);
        assert_eq!(overhead.non_local_cnots, 2);
        assert_eq!(overhead.routed_gate_count, 2 + 9);
    }

    #[test]
    fn test_shortest_path_ignores_mapping_updates() {
        // The same distant pair twice is charged twice: the static policy
        // never moves qubits.
        let arch = arch_with(Topology::Linear, 4);
        let circuit = cnot_chain(4, &[(0, 3), (0, 3)]);
        let overhead =
            estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::ShortestPath, None).unwrap();
        assert_eq!(overhead.count, 4);
    }

    #[test]
    fn test_greedy_converges_on_distant_pair() {
        // Linear 0-1-2-3: CX(0,3) needs 2 SWAPs to become adjacent.
        let arch = arch_with(Topology::Linear, 4);
        let circuit = cnot_chain(4, &[(0, 3)]);
        let overhead =
            estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::GreedyRouter, None).unwrap();
        assert_eq!(overhead.count, 2);
    }

    #[test]
    fn test_greedy_reuses_moved_qubits() {
        // After routing CX(0,3), the greedy mapping keeps the moved qubits
        // close; repeating the same pair costs no further SWAPs.
        let arch = arch_with(Topology::Linear, 4);
        let circuit = cnot_chain(4, &[(0, 3), (0, 3)]);
        let overhead =
            estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::GreedyRouter, None).unwrap();
        assert_eq!(overhead.count, 2);
    }

    #[test]
    fn test_unreachable_fatal_under_shortest_path() {
        let arch = arch_with(
            Topology::Custom {
                adjacencies: vec![vec![1], vec![0], vec![3], vec![2]],
            },
            4,
        );
        let circuit = cnot_chain(4, &[(0, 2)]);
        let err = estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::ShortestPath, None)
            .unwrap_err();
        assert!(matches!(
            err,
            EstimateError::UnreachableQubits { from: 0, to: 2 }
        ));
    }

    #[test]
    fn test_initial_mapping_respected() {
        // Map logical 0 → physical 0, logical 1 → physical 3 on a linear
        // chain: CX(0,1) is distance 3 under this mapping.
        let arch = arch_with(Topology::Linear, 4);
        let circuit = cnot_chain(2, &[(0, 1)]);
        let overhead = estimate_swap_overhead(
            &circuit,
            &arch,
            RoutingAlgorithm::ShortestPath,
            Some(&[0, 3]),
        )
        .unwrap();
        assert_eq!(overhead.count, 2);
        assert_eq!(overhead.non_local_cnots, 1);
    }

    #[test]
    fn test_invalid_mapping_rejected() {
        let arch = arch_with(Topology::Linear, 4);
        let circuit = cnot_chain(2, &[(0, 1)]);

        let err = estimate_swap_overhead(
            &circuit,
            &arch,
            RoutingAlgorithm::GreedyRouter,
            Some(&[0, 1, 2]),
        )
        .unwrap_err();
        assert!(matches!(err, EstimateError::MappingLengthMismatch { .. }));

        let err =
            estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::GreedyRouter, Some(&[1, 1]))
                .unwrap_err();
        assert!(matches!(err, EstimateError::MappingDuplicate { qubit: 1 }));

        let err =
            estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::GreedyRouter, Some(&[0, 9]))
                .unwrap_err();
        assert!(matches!(err, EstimateError::MappingOutOfRange { qubit: 9, .. }));
    }

    #[test]
    fn test_single_qubit_circuit_free_everywhere() {
        let arch = arch_with(Topology::HeavyHex, 8);
        let mut circuit = Circuit::new("singles", 8).unwrap();
        for i in 0..8 {
            circuit.h(QubitId(i)).unwrap();
            circuit.t(QubitId(i)).unwrap();
        }
        for algorithm in [
            RoutingAlgorithm::None,
            RoutingAlgorithm::ShortestPath,
            RoutingAlgorithm::GreedyRouter,
        ] {
            let overhead = estimate_swap_overhead(&circuit, &arch, algorithm, None).unwrap();
            assert_eq!(overhead.count, 0);
        }
    }

    #[test]
    fn test_routing_factor() {
        let arch = arch_with(Topology::Linear, 4);
        let circuit = cnot_chain(4, &[(0, 3)]);
        let overhead =
            estimate_swap_overhead(&circuit, &arch, RoutingAlgorithm::GreedyRouter, None).unwrap();
        // 1 gate + 2 SWAPs × 3 = 7 gates
        assert_eq!(overhead.routed_gate_count, 7);
        assert!((overhead.routing_factor - 7.0).abs() < 1e-12);
    }
}
