//! Execution time, coherence, fidelity, quantum volume, and classical
//! simulation estimators.

use serde::{Deserialize, Serialize};
use tracing::debug;

use mimir_hal::HardwareArchitecture;
use mimir_ir::Circuit;

use crate::analysis::GateComposition;
use crate::options::SimulationType;

/// Safety margin applied when deriving required coherence times from the
/// physical execution time.
pub const COHERENCE_SAFETY_FACTOR: f64 = 5.0;

/// Fidelity a square circuit must keep for its width to count towards the
/// quantum-volume estimate.
const QUANTUM_VOLUME_FIDELITY_FLOOR: f64 = 2.0 / 3.0;

/// Physical execution time by summing per-gate durations.
///
/// Each gate contributes its per-instance duration override when present,
/// otherwise the architecture lookup for its type and arity. Every SWAP
/// contributes 3 CX durations (its standard decomposition), and one
/// measurement per qubit is charged at the end.
pub fn execution_time_gate_sum(
    circuit: &Circuit,
    architecture: &HardwareArchitecture,
    swap_count: u32,
) -> f64 {
    let mut total_ns = 0.0;
    for gate in circuit.gates() {
        total_ns += gate
            .duration_ns
            .unwrap_or_else(|| architecture.gate_duration_ns(gate.name(), gate.num_qubits()));
    }

    let swap_duration = 3.0 * architecture.gate_duration_ns("cx", 2);
    total_ns += f64::from(swap_count) * swap_duration;

    total_ns += f64::from(circuit.num_qubits()) * architecture.measurement_duration_ns();
    total_ns
}

/// Physical execution time from a compiled-depth estimate.
///
/// The alternative to the per-gate sum: each layer is charged one generic
/// two-qubit duration (the usual bottleneck), plus one measurement layer
/// over all qubits. Used when a compiled depth is available; the two modes
/// are intentionally separate, not merged.
pub fn execution_time_depth_based(
    num_qubits: u32,
    architecture: &HardwareArchitecture,
    compiled_depth: usize,
) -> f64 {
    compiled_depth as f64 * architecture.two_qubit_duration_ns()
        + f64::from(num_qubits) * architecture.measurement_duration_ns()
}

/// Required T1/T2 to execute within the coherence budget, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequiredCoherence {
    /// Required T1 relaxation time (µs).
    pub t1_us: f64,
    /// Required T2 dephasing time (µs).
    pub t2_us: f64,
}

/// Whether execution is likely limited by the device's coherence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceLimited {
    /// Required T1 exceeds the device average.
    pub t1: bool,
    /// Required T2 exceeds the device average.
    pub t2: bool,
}

/// Required coherence: execution time times the safety factor.
pub fn required_coherence(execution_time_ns: f64) -> RequiredCoherence {
    let required_us = execution_time_ns / 1000.0 * COHERENCE_SAFETY_FACTOR;
    RequiredCoherence {
        t1_us: required_us,
        t2_us: required_us,
    }
}

/// Compare required coherence against the device averages.
pub fn coherence_limited(
    required: RequiredCoherence,
    architecture: &HardwareArchitecture,
) -> CoherenceLimited {
    CoherenceLimited {
        t1: required.t1_us > architecture.average_t1(),
        t2: required.t2_us > architecture.average_t2(),
    }
}

/// Estimated probability of an error-free run.
///
/// Product of per-gate success terms (the per-instance fidelity override
/// when present, else 1 − looked-up error rate), times the SWAP
/// decomposition term (1 − CX error)^(3·SWAPs), times per-qubit readout
/// success, times the decoherence factor exp(−t/T2) over the gate-sum
/// execution time. Clamped to ≥ 0.
pub fn estimate_fidelity(
    circuit: &Circuit,
    architecture: &HardwareArchitecture,
    swap_count: u32,
) -> f64 {
    let mut fidelity = 1.0;

    for gate in circuit.gates() {
        fidelity *= gate
            .fidelity
            .unwrap_or_else(|| 1.0 - architecture.gate_error(gate.name(), gate.num_qubits()));
    }

    let cx_error = architecture.gate_error("cx", 2);
    fidelity *= (1.0 - cx_error).powi(3).powi(swap_count as i32);

    let readout = architecture.average_readout_error();
    fidelity *= (1.0 - readout).powi(circuit.num_qubits() as i32);

    // Decoherence over the wall-clock of the routed circuit. The gate-sum
    // mode is used here: the depth estimate is not available at this layer.
    let execution_us = execution_time_gate_sum(circuit, architecture, swap_count) / 1000.0;
    let avg_t2 = architecture.average_t2();
    if avg_t2 > 0.0 {
        fidelity *= (-execution_us / avg_t2).exp();
    }

    fidelity.max(0.0)
}

/// Heuristic quantum-volume estimate for this circuit width on this
/// architecture.
///
/// For each trial width n up to min(circuit, device), model an idealized
/// square circuit (n layers of n single-qubit gates and ⌊n/2⌋ two-qubit
/// gates, read out over n qubits) and keep the largest n whose modeled
/// fidelity stays above 2/3. The result is 2^n. A benchmark-style
/// heuristic, not a measured quantity.
pub fn estimate_quantum_volume(architecture: &HardwareArchitecture, circuit_width: u32) -> u64 {
    if circuit_width == 0 {
        return 1;
    }
    let effective_width = circuit_width.min(architecture.qubit_count());

    let single_error = architecture.single_qubit_error();
    let two_error = architecture.two_qubit_error();
    let readout_error = architecture.average_readout_error();

    let mut effective_n = 0u32;
    for n in 1..=effective_width {
        let layer_fidelity = (1.0 - single_error).powi(n as i32)
            * (1.0 - two_error).powi((n / 2) as i32);
        let circuit_fidelity = layer_fidelity.powi(n as i32);
        let readout_fidelity = (1.0 - readout_error).powi(n as i32);

        if circuit_fidelity * readout_fidelity > QUANTUM_VOLUME_FIDELITY_FLOOR {
            effective_n = n;
        } else {
            break;
        }
    }

    debug!(effective_n, "quantum volume width");
    if effective_n >= u64::BITS - 1 {
        u64::MAX
    } else {
        1u64 << effective_n
    }
}

/// Classical simulation cost estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalResources {
    /// Simulation mode the estimate is for.
    pub simulation: SimulationType,
    /// Asymptotic complexity class, in terms of width N and gate count G.
    pub complexity: String,
    /// Estimated memory in MB. `None` for tensor-network mode, whose cost
    /// is structure-dependent.
    pub memory_mb: Option<f64>,
}

/// Estimate classical simulation resources.
///
/// Clifford mode applies only to fully-Clifford circuits (stabilizer
/// tableau, ~O(N²) bytes); anything else falls back to state-vector
/// accounting at 2^N × 16 bytes of complex amplitudes. Tensor-network mode
/// reports a complexity class with no memory figure.
pub fn estimate_classical_resources(
    circuit: &Circuit,
    composition: &GateComposition,
    simulation: SimulationType,
) -> ClassicalResources {
    const MB: f64 = 1024.0 * 1024.0;
    let n = circuit.num_qubits();

    let simulation = match simulation {
        SimulationType::Clifford if composition.is_all_clifford() => {
            let tableau_bytes = f64::from(n) * f64::from(n) * 8.0;
            return ClassicalResources {
                simulation: SimulationType::Clifford,
                complexity: "O(N^2 * G)".to_string(),
                memory_mb: Some((tableau_bytes / MB).ceil() + 1.0),
            };
        }
        // Non-Clifford content: the tableau model does not apply.
        SimulationType::Clifford => SimulationType::StateVector,
        other => other,
    };

    match simulation {
        SimulationType::StateVector => {
            let memory_bytes = 2f64.powi(n as i32) * 16.0;
            ClassicalResources {
                simulation: SimulationType::StateVector,
                complexity: "O(G * 2^N)".to_string(),
                memory_mb: Some((memory_bytes / MB).ceil()),
            }
        }
        SimulationType::TensorNetwork => ClassicalResources {
            simulation: SimulationType::TensorNetwork,
            complexity: "structure-dependent (bond-dimension bound)".to_string(),
            memory_mb: None,
        },
        SimulationType::Clifford => unreachable!("handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_gate_composition;
    use mimir_hal::{GateErrors, GateTimings, Topology};
    use mimir_ir::{Gate, QubitId, StandardGate};

    fn arch() -> HardwareArchitecture {
        HardwareArchitecture::builder("metrics-test", 5)
            .connectivity(Topology::Linear)
            .native_gates(["X", "H", "RZ", "CX"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_gate_sum_time() {
        let arch = arch();
        let circuit = Circuit::bell().unwrap();
        // H (30) + CX (200) + 2 measurements (1000)
        let t = execution_time_gate_sum(&circuit, &arch, 0);
        assert!((t - 1230.0).abs() < 1e-9);

        // Each SWAP adds 3 CX durations.
        let t_swapped = execution_time_gate_sum(&circuit, &arch, 2);
        assert!((t_swapped - (1230.0 + 2.0 * 600.0)).abs() < 1e-9);
    }

    #[test]
    fn test_gate_sum_honors_duration_override() {
        let arch = arch();
        let mut circuit = Circuit::new("override", 1).unwrap();
        circuit
            .push(
                Gate::single(StandardGate::H, QubitId(0))
                    .unwrap()
                    .with_duration_ns(77.0)
                    .unwrap(),
            )
            .unwrap();
        let t = execution_time_gate_sum(&circuit, &arch, 0);
        assert!((t - (77.0 + 500.0)).abs() < 1e-9);
    }

    #[test]
    fn test_depth_based_time() {
        let arch = arch();
        // 4 layers × 200 ns + 2 qubits × 500 ns
        let t = execution_time_depth_based(2, &arch, 4);
        assert!((t - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_required_coherence_safety_factor() {
        let required = required_coherence(10_000.0);
        assert!((required.t1_us - 50.0).abs() < 1e-9);
        assert_eq!(required.t1_us, required.t2_us);
    }

    #[test]
    fn test_coherence_limited_flags() {
        let arch = arch(); // T1 = 100 µs, T2 = 80 µs
        let fine = coherence_limited(required_coherence(1_000.0), &arch); // 5 µs
        assert!(!fine.t1);
        assert!(!fine.t2);

        let limited = coherence_limited(required_coherence(18_000.0), &arch); // 90 µs
        assert!(!limited.t1);
        assert!(limited.t2);
    }

    #[test]
    fn test_fidelity_in_unit_interval_and_swap_monotonic() {
        let arch = arch();
        let circuit = Circuit::ghz(4).unwrap();
        let mut previous = 1.0f64;
        for swaps in [0u32, 1, 5, 20, 100] {
            let f = estimate_fidelity(&circuit, &arch, swaps);
            assert!((0.0..=1.0).contains(&f));
            assert!(f <= previous, "fidelity must not increase with SWAPs");
            previous = f;
        }
    }

    #[test]
    fn test_fidelity_override_taken_verbatim() {
        let arch = arch();
        let mut circuit = Circuit::new("override", 1).unwrap();
        circuit
            .push(
                Gate::single(StandardGate::H, QubitId(0))
                    .unwrap()
                    .with_fidelity(0.5)
                    .unwrap(),
            )
            .unwrap();
        let with_override = estimate_fidelity(&circuit, &arch, 0);

        let mut plain = Circuit::new("plain", 1).unwrap();
        plain.h(QubitId(0)).unwrap();
        let without = estimate_fidelity(&plain, &arch, 0);

        assert!(with_override < without);
        assert!((with_override / without - 0.5 / (1.0 - 1e-3)).abs() < 1e-9);
    }

    #[test]
    fn test_quantum_volume_on_clean_device() {
        // Very clean device: every width passes, QV = 2^width.
        let clean = HardwareArchitecture::builder("clean", 4)
            .connectivity(Topology::AllToAll)
            .native_gates(["X", "CX"])
            .gate_errors(GateErrors::generic(1e-6, 1e-5))
            .readout_errors(1e-4)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap();
        assert_eq!(estimate_quantum_volume(&clean, 4), 16);
    }

    #[test]
    fn test_quantum_volume_on_noisy_device() {
        let noisy = HardwareArchitecture::builder("noisy", 8)
            .connectivity(Topology::AllToAll)
            .native_gates(["X", "CX"])
            .gate_errors(GateErrors::generic(0.05, 0.10))
            .readout_errors(0.05)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap();
        // Width 1 already fails the 2/3 floor? (1-0.05)^1 * (1-0.05)^1 ≈ 0.90 > 2/3,
        // so width 1 passes; width 2+ decays fast.
        let qv = estimate_quantum_volume(&noisy, 8);
        assert!(qv <= 4);
        assert!(qv >= 2);
    }

    #[test]
    fn test_classical_clifford_vs_state_vector() {
        let ghz = Circuit::ghz(10).unwrap();
        let comp = analyze_gate_composition(&ghz);
        let clifford = estimate_classical_resources(&ghz, &comp, SimulationType::Clifford);
        assert_eq!(clifford.simulation, SimulationType::Clifford);
        assert_eq!(clifford.memory_mb, Some(1.0 + 1.0)); // tiny tableau rounds up

        let mut with_t = Circuit::ghz(10).unwrap();
        with_t.t(QubitId(0)).unwrap();
        let comp_t = analyze_gate_composition(&with_t);
        let fallback = estimate_classical_resources(&with_t, &comp_t, SimulationType::Clifford);
        assert_eq!(fallback.simulation, SimulationType::StateVector);
        // 2^10 × 16 B = 16 KiB → rounds up to 1 MB
        assert_eq!(fallback.memory_mb, Some(1.0));
    }

    #[test]
    fn test_classical_state_vector_memory() {
        let circuit = Circuit::ghz(30).unwrap();
        let comp = analyze_gate_composition(&circuit);
        let sv = estimate_classical_resources(&circuit, &comp, SimulationType::StateVector);
        // 2^30 × 16 B = 16 GiB = 16384 MB
        assert_eq!(sv.memory_mb, Some(16384.0));
    }

    #[test]
    fn test_classical_tensor_network_has_no_memory_figure() {
        let circuit = Circuit::ghz(10).unwrap();
        let comp = analyze_gate_composition(&circuit);
        let tn = estimate_classical_resources(&circuit, &comp, SimulationType::TensorNetwork);
        assert_eq!(tn.memory_mb, None);
    }

    #[test]
    fn test_fidelity_with_infinite_t2() {
        let photonic = HardwareArchitecture::photonic("ph", 4);
        let circuit = Circuit::bell().unwrap();
        let f = estimate_fidelity(&circuit, &photonic, 0);
        assert!((0.0..=1.0).contains(&f));
        assert!(f > 0.8); // no decoherence factor
    }
}
