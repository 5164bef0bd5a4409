//! End-to-end scenarios through the full estimation pipeline.

use mimir_estimate::{
    EstimateError, EstimationOptions, RoutingAlgorithm, estimate_resources,
};
use mimir_hal::{GateErrors, GateTimings, HardwareArchitecture, Topology};
use mimir_ir::{Circuit, QubitId};

fn nisq_arch(name: &str, qubits: u32, topology: Topology) -> HardwareArchitecture {
    HardwareArchitecture::builder(name, qubits)
        .connectivity(topology)
        .native_gates(["X", "H", "RZ", "CX"])
        .gate_errors(GateErrors::generic(1e-3, 5e-3))
        .readout_errors(0.01)
        .t1_times(100.0)
        .t2_times(80.0)
        .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
        .build()
        .unwrap()
}

/// A Bell pair is depth 2, two gates, and fully local wherever qubits 0
/// and 1 share an edge.
#[test]
fn bell_pair_is_local_on_adjacent_qubits() {
    let circuit = Circuit::bell().unwrap();
    assert_eq!(circuit.depth(), 2);
    assert_eq!(circuit.len(), 2);

    let architectures = [
        nisq_arch("linear-2", 2, Topology::Linear),
        nisq_arch("ring-4", 4, Topology::Ring),
        nisq_arch(
            "custom-edge",
            2,
            Topology::Custom {
                adjacencies: vec![vec![1], vec![0]],
            },
        ),
        nisq_arch("full-3", 3, Topology::AllToAll),
    ];

    for arch in &architectures {
        for algorithm in [
            RoutingAlgorithm::None,
            RoutingAlgorithm::ShortestPath,
            RoutingAlgorithm::GreedyRouter,
        ] {
            let options = EstimationOptions {
                routing_algorithm: algorithm,
                ..Default::default()
            };
            let result = estimate_resources(&circuit, arch, &options).unwrap();
            assert_eq!(result.circuit_depth, 2);
            assert_eq!(result.total_gate_count, 2);
            assert_eq!(result.swap_overhead.count, 0, "{}", arch.name());
        }
    }
}

/// Three distant CNOTs on a 4-qubit chain: all three are non-local, the
/// router must pay SWAPs, and the routed gate count grows accordingly.
#[test]
fn distant_cnots_on_linear_chain_need_routing() {
    let mut circuit = Circuit::new("distant-cnots", 4).unwrap();
    circuit.cx(QubitId(0), QubitId(2)).unwrap();
    circuit.cx(QubitId(0), QubitId(3)).unwrap();
    circuit.cx(QubitId(1), QubitId(3)).unwrap();

    let arch = nisq_arch("linear-4", 4, Topology::Linear);

    for algorithm in [RoutingAlgorithm::ShortestPath, RoutingAlgorithm::GreedyRouter] {
        let options = EstimationOptions {
            routing_algorithm: algorithm,
            ..Default::default()
        };
        let result = estimate_resources(&circuit, &arch, &options).unwrap();
        let overhead = &result.swap_overhead;

        assert_eq!(overhead.non_local_cnots, 3, "{algorithm:?}");
        assert!(overhead.count > 0, "{algorithm:?}");
        assert!(
            overhead.routed_gate_count > overhead.original_gate_count,
            "{algorithm:?}"
        );
        assert!(overhead.routing_factor > 1.0);
        assert!(result.compiled_circuit_depth >= result.circuit_depth);
    }
}

/// A circuit wider than the device is a fatal estimation error naming the
/// mismatch.
#[test]
fn oversized_circuit_raises_estimation_error() {
    let circuit = Circuit::ghz(5).unwrap();
    let arch = nisq_arch("small-4", 4, Topology::Linear);

    let err = estimate_resources(&circuit, &arch, &EstimationOptions::default()).unwrap_err();
    match err {
        EstimateError::QubitCountExceeded {
            required,
            available,
            ref architecture,
        } => {
            assert_eq!(required, 5);
            assert_eq!(available, 4);
            assert_eq!(architecture, "small-4");
        }
        other => panic!("expected QubitCountExceeded, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains('5'));
    assert!(message.contains('4'));
}

/// Two-qubit error of 5% sits above the 1% surface-code threshold: fault
/// tolerance comes back all-infinite.
#[test]
fn fault_tolerance_infeasible_above_threshold() {
    let arch = HardwareArchitecture::builder("noisy", 4)
        .connectivity(Topology::Linear)
        .native_gates(["X", "H", "CX"])
        .gate_errors(GateErrors::generic(1e-3, 0.05))
        .readout_errors(0.01)
        .t1_times(100.0)
        .t2_times(80.0)
        .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
        .build()
        .unwrap();

    let circuit = Circuit::bell().unwrap();
    let options = EstimationOptions {
        enable_fault_tolerance: true,
        ..Default::default()
    };
    let result = estimate_resources(&circuit, &arch, &options).unwrap();
    let ft = result.fault_tolerance.expect("fault tolerance requested");

    assert!(ft.is_enabled);
    assert!(ft.code_distance.is_infinite());
    assert!(ft.total_physical_qubits.is_infinite());
}

/// The same inputs give the same numbers: estimation is deterministic up
/// to the record timestamp.
#[test]
fn estimation_is_deterministic() {
    let circuit = Circuit::qft(5).unwrap();
    let arch = nisq_arch("grid-9", 9, Topology::Grid);
    let options = EstimationOptions::default();

    let a = estimate_resources(&circuit, &arch, &options).unwrap();
    let b = estimate_resources(&circuit, &arch, &options).unwrap();

    assert_eq!(a.swap_overhead, b.swap_overhead);
    assert_eq!(a.execution_time_ns, b.execution_time_ns);
    assert_eq!(a.fidelity, b.fidelity);
    assert_eq!(a.quantum_volume, b.quantum_volume);
    assert_eq!(a.gate_counts, b.gate_counts);
}

/// Estimating on the technology presets exercises the full pipeline with
/// realistic characterization numbers.
#[test]
fn presets_run_end_to_end() {
    let circuit = Circuit::ghz(6).unwrap();
    for arch in [
        HardwareArchitecture::superconducting("sc-16", 16),
        HardwareArchitecture::trapped_ion("ion-11", 11),
        HardwareArchitecture::photonic("ph-8", 8),
    ] {
        let result = estimate_resources(&circuit, &arch, &EstimationOptions::default()).unwrap();
        assert!((0.0..=1.0).contains(&result.fidelity), "{}", arch.name());
        assert!(result.execution_time_ns > 0.0);
        assert!(result.quantum_volume >= 1);
    }
}
