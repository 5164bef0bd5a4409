//! Rule-based optimization suggestions over a finished estimate.

use mimir_hal::HardwareArchitecture;

use crate::result::EstimationResult;

/// Generate human-readable optimization suggestions.
///
/// A small rule engine over the finished record; each rule fires
/// independently and appends one message. Not part of the numeric core;
/// consumers are free to ignore the list.
pub fn generate_suggestions(
    result: &EstimationResult,
    architecture: &HardwareArchitecture,
) -> Vec<String> {
    let mut suggestions = vec![];

    if f64::from(result.swap_overhead.count) > result.total_gate_count as f64 * 0.2 {
        suggestions.push(format!(
            "High SWAP overhead ({} SWAPs). Consider re-compiling for the '{}' topology or \
             choosing a different initial qubit mapping.",
            result.swap_overhead.count,
            architecture.connectivity().name(),
        ));
    }

    if result.coherence_limited.t1 || result.coherence_limited.t2 {
        suggestions.push(format!(
            "Execution is likely coherence-limited (required T1/T2 ≈ {:.1} µs). Reduce circuit \
             depth or target hardware with longer coherence times.",
            result.required_coherence.t1_us,
        ));
    }

    if result.fidelity < 0.9 {
        suggestions.push(format!(
            "Low circuit fidelity ({:.1}%). Explore error mitigation, or fault-tolerant \
             encoding if high precision is needed.",
            result.fidelity * 100.0,
        ));
    }

    if let Some(ft) = &result.fault_tolerance {
        if ft.total_physical_qubits.is_finite()
            && ft.total_physical_qubits > f64::from(architecture.qubit_count()) * 50.0
        {
            suggestions.push(format!(
                "Fault-tolerant mode requires a very large physical register ({:.0} qubits). \
                 Verify the algorithm scale or relax the target logical error rate.",
                ft.total_physical_qubits,
            ));
        }
        if result.t_gate_count > 0
            && ft.resource_state_count.is_finite()
            && ft.resource_state_count / result.t_gate_count as f64 > 1.5
        {
            suggestions.push(
                "Significant magic-state distillation overhead. Reduce the T-count or consider \
                 a different distillation protocol."
                    .to_string(),
            );
        }
    } else if result.t_gate_count > 0 && result.fidelity < 0.95 {
        suggestions.push(format!(
            "Circuit contains {} T-gates at moderate fidelity. Fault tolerance may be \
             necessary for high-precision results.",
            result.t_gate_count,
        ));
    }

    if result.circuit_depth > 100
        && (result.total_gate_count as f64 / result.circuit_depth as f64)
            < f64::from(result.circuit_width) / 3.0
    {
        suggestions.push(format!(
            "Circuit is deep ({} layers) with low gate parallelism. Increase gate concurrency \
             or reduce depth.",
            result.circuit_depth,
        ));
    }

    if let Some(memory_mb) = result.classical.memory_mb {
        if memory_mb > 4096.0 {
            suggestions.push(format!(
                "Classical simulation needs roughly {memory_mb:.0} MB. Consider tensor-network \
                 methods or partial simulation.",
            ));
        }
    }

    suggestions
}
