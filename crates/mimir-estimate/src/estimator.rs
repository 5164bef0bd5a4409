//! Top-level estimation orchestration.

use chrono::Utc;
use tracing::debug;

use mimir_hal::HardwareArchitecture;
use mimir_ir::Circuit;

use crate::analysis::analyze_gate_composition;
use crate::error::{EstimateError, EstimateResult};
use crate::metrics::{
    coherence_limited, estimate_classical_resources, estimate_fidelity, estimate_quantum_volume,
    execution_time_depth_based, execution_time_gate_sum, required_coherence,
};
use crate::options::EstimationOptions;
use crate::result::EstimationResult;
use crate::routing::estimate_swap_overhead;
use crate::suggestions::generate_suggestions;
use crate::surface_code::estimate_fault_tolerance;

/// Run the full estimation pipeline for one circuit on one architecture.
///
/// Stages run in a fixed order (depth, gate composition, SWAP routing,
/// compiled depth, execution time, coherence, fidelity, quantum volume,
/// classical resources, optional fault tolerance, suggestions), each
/// consuming only earlier outputs and the original inputs. The whole call
/// is a pure computation: no I/O, no shared state, deterministic for
/// identical inputs (up to the timestamp on the record).
pub fn estimate_resources(
    circuit: &Circuit,
    architecture: &HardwareArchitecture,
    options: &EstimationOptions,
) -> EstimateResult<EstimationResult> {
    let rate = options.target_logical_error_rate;
    if !(rate > 0.0 && rate < 1.0) {
        return Err(EstimateError::InvalidTargetErrorRate(rate));
    }

    debug!(
        circuit = circuit.name(),
        architecture = architecture.name(),
        "starting resource estimation"
    );

    // 1. Circuit shape
    let depth = circuit.depth();
    let composition = analyze_gate_composition(circuit);
    debug!(depth, gates = composition.total_gate_count, "analyzed circuit");

    // 2. SWAP routing (validates circuit-vs-device width and the mapping)
    let swap_overhead = estimate_swap_overhead(
        circuit,
        architecture,
        options.routing_algorithm,
        options.initial_mapping.as_deref(),
    )?;

    // 3. Compiled depth: logical depth plus a routing correction spread
    //    over roughly half the register.
    let spread = (circuit.num_qubits() / 2).max(1) as usize;
    let compiled_depth = depth + (swap_overhead.count as usize).div_ceil(spread);

    // 4. Execution time. The compiled-depth mode is used when routing
    //    produced a depth estimate; the per-gate sum covers the rest.
    let execution_time_ns = if compiled_depth > 0 {
        execution_time_depth_based(circuit.num_qubits(), architecture, compiled_depth)
    } else {
        execution_time_gate_sum(circuit, architecture, swap_overhead.count)
    };
    debug!(execution_time_ns, "estimated execution time");

    // 5. Coherence requirements
    let required = required_coherence(execution_time_ns);
    let limited = coherence_limited(required, architecture);

    // 6. Fidelity
    let fidelity = estimate_fidelity(circuit, architecture, swap_overhead.count);

    // 7. Quantum volume
    let quantum_volume = estimate_quantum_volume(architecture, circuit.num_qubits());

    // 8. Classical simulation
    let classical = estimate_classical_resources(circuit, &composition, options.simulation_type);

    // 9. Fault tolerance (optional)
    let fault_tolerance = options.enable_fault_tolerance.then(|| {
        estimate_fault_tolerance(
            circuit.num_qubits(),
            composition.t_gate_count,
            depth,
            architecture,
            rate,
        )
    });

    let mut result = EstimationResult {
        circuit_name: circuit.name().to_string(),
        architecture_name: architecture.name().to_string(),
        circuit_width: circuit.num_qubits(),
        circuit_depth: depth,
        gate_counts: composition.gate_counts.clone(),
        total_gate_count: composition.total_gate_count,
        t_gate_count: composition.t_gate_count,
        clifford_gate_count: composition.clifford_gate_count,
        non_clifford_gate_count: composition.non_clifford_gate_count,
        two_qubit_gate_count: composition.two_qubit_gate_count,
        multi_qubit_gate_count: composition.multi_qubit_gate_count,
        swap_overhead,
        compiled_circuit_depth: compiled_depth,
        quantum_volume,
        execution_time_ns,
        required_coherence: required,
        coherence_limited: limited,
        fidelity,
        error_rate: 1.0 - fidelity,
        classical,
        fault_tolerance,
        suggestions: vec![],
        analyzed_at: Utc::now(),
    };

    // 10. Suggestions, appended last over the finished record.
    result.suggestions = generate_suggestions(&result, architecture);

    Ok(result)
}
