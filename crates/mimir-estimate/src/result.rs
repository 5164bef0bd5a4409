//! The aggregate estimation record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::metrics::{ClassicalResources, CoherenceLimited, RequiredCoherence};
use crate::routing::SwapOverhead;
use crate::surface_code::FaultTolerance;

/// Comprehensive resource estimate for one (circuit, architecture,
/// options) triple.
///
/// Produced fresh by every [`estimate_resources`](crate::estimate_resources)
/// call and never mutated afterwards (the suggestion list is appended as
/// the final construction step).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Name of the analyzed circuit.
    pub circuit_name: String,
    /// Name of the target architecture.
    pub architecture_name: String,

    // ── circuit shape ────────────────────────────────────────────────────
    /// Circuit width (number of qubits used).
    pub circuit_width: u32,
    /// Logical depth (layers under disjoint-qubit parallelism).
    pub circuit_depth: usize,
    /// Count per normalized uppercase gate tag.
    pub gate_counts: BTreeMap<String, usize>,
    /// Total gate count.
    pub total_gate_count: usize,
    /// T and T-dagger count.
    pub t_gate_count: usize,
    /// Clifford gate count.
    pub clifford_gate_count: usize,
    /// Non-Clifford gate count.
    pub non_clifford_gate_count: usize,
    /// Two-qubit gate count.
    pub two_qubit_gate_count: usize,
    /// Count of gates on more than two qubits.
    pub multi_qubit_gate_count: usize,

    // ── hardware interaction ─────────────────────────────────────────────
    /// SWAP routing analysis.
    pub swap_overhead: SwapOverhead,
    /// Depth estimate after routing correction.
    pub compiled_circuit_depth: usize,
    /// Heuristic quantum-volume estimate (2^n).
    pub quantum_volume: u64,

    // ── time and coherence ───────────────────────────────────────────────
    /// Physical execution time in nanoseconds.
    pub execution_time_ns: f64,
    /// Required T1/T2 with safety margin.
    pub required_coherence: RequiredCoherence,
    /// Coherence-limited flags against the device averages.
    pub coherence_limited: CoherenceLimited,

    // ── error and fidelity ───────────────────────────────────────────────
    /// Estimated probability of an error-free run, in [0, 1].
    pub fidelity: f64,
    /// 1 − fidelity.
    pub error_rate: f64,

    // ── classical simulation ─────────────────────────────────────────────
    /// Classical simulation cost.
    pub classical: ClassicalResources,

    // ── fault tolerance ──────────────────────────────────────────────────
    /// Surface-code sizing, present when requested in the options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_tolerance: Option<FaultTolerance>,

    /// Human-readable optimization suggestions.
    pub suggestions: Vec<String>,
    /// When the analysis ran.
    pub analyzed_at: DateTime<Utc>,
}
