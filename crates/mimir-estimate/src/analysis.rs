//! Gate composition analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use mimir_hal::normalize_gate_key;
use mimir_ir::Circuit;

/// The Clifford gate vocabulary. Everything outside this set counts as
/// non-Clifford, including T/T-dagger and every parameterized rotation.
/// `CNOT` is covered by normalization onto `CX`.
const CLIFFORD_GATES: [&str; 10] = ["X", "Y", "Z", "H", "S", "SDG", "CX", "CY", "CZ", "SWAP"];

/// Gate-type and gate-class counts for one circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateComposition {
    /// Count per normalized uppercase gate tag.
    pub gate_counts: BTreeMap<String, usize>,
    /// Total number of gates.
    pub total_gate_count: usize,
    /// T and T-dagger gates (the critical count for fault tolerance).
    pub t_gate_count: usize,
    /// Gates in the Clifford set.
    pub clifford_gate_count: usize,
    /// Everything else.
    pub non_clifford_gate_count: usize,
    /// Gates acting on exactly two qubits.
    pub two_qubit_gate_count: usize,
    /// Gates acting on more than two qubits.
    pub multi_qubit_gate_count: usize,
}

impl GateComposition {
    /// Whether the circuit is purely Clifford (stabilizer-simulable).
    pub fn is_all_clifford(&self) -> bool {
        self.clifford_gate_count == self.total_gate_count
    }
}

/// Classify every gate in the circuit: per-type counts, Clifford vs
/// non-Clifford membership, T-count, and arity buckets. Pure function; an
/// empty circuit yields all-zero counts.
pub fn analyze_gate_composition(circuit: &Circuit) -> GateComposition {
    let mut gate_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut t_gate_count = 0;
    let mut clifford_gate_count = 0;
    let mut non_clifford_gate_count = 0;
    let mut two_qubit_gate_count = 0;
    let mut multi_qubit_gate_count = 0;

    for gate in circuit.gates() {
        let key = normalize_gate_key(gate.name());

        if matches!(key.as_str(), "T" | "TDG") {
            t_gate_count += 1;
        }
        if CLIFFORD_GATES.contains(&key.as_str()) {
            clifford_gate_count += 1;
        } else {
            non_clifford_gate_count += 1;
        }
        match gate.qubits.len() {
            2 => two_qubit_gate_count += 1,
            n if n > 2 => multi_qubit_gate_count += 1,
            _ => {}
        }

        *gate_counts.entry(key).or_insert(0) += 1;
    }

    GateComposition {
        gate_counts,
        total_gate_count: circuit.len(),
        t_gate_count,
        clifford_gate_count,
        non_clifford_gate_count,
        two_qubit_gate_count,
        multi_qubit_gate_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimir_ir::QubitId;

    #[test]
    fn test_empty_circuit_all_zero() {
        let circuit = Circuit::new("empty", 2).unwrap();
        let comp = analyze_gate_composition(&circuit);
        assert_eq!(comp.total_gate_count, 0);
        assert_eq!(comp.t_gate_count, 0);
        assert_eq!(comp.clifford_gate_count, 0);
        assert_eq!(comp.non_clifford_gate_count, 0);
        assert!(comp.is_all_clifford());
    }

    #[test]
    fn test_clifford_classification() {
        let mut circuit = Circuit::new("mixed", 3).unwrap();
        circuit.h(QubitId(0)).unwrap(); // Clifford
        circuit.s(QubitId(1)).unwrap(); // Clifford
        circuit.cx(QubitId(0), QubitId(1)).unwrap(); // Clifford
        circuit.t(QubitId(2)).unwrap(); // non-Clifford, T-count
        circuit.tdg(QubitId(2)).unwrap(); // non-Clifford, T-count
        circuit.rz(0.3, QubitId(0)).unwrap(); // non-Clifford
        circuit.ccx(QubitId(0), QubitId(1), QubitId(2)).unwrap(); // non-Clifford, multi

        let comp = analyze_gate_composition(&circuit);
        assert_eq!(comp.total_gate_count, 7);
        assert_eq!(comp.t_gate_count, 2);
        assert_eq!(comp.clifford_gate_count, 3);
        assert_eq!(comp.non_clifford_gate_count, 4);
        assert_eq!(comp.two_qubit_gate_count, 1);
        assert_eq!(comp.multi_qubit_gate_count, 1);
        assert!(!comp.is_all_clifford());
    }

    #[test]
    fn test_rotations_are_non_clifford() {
        let mut circuit = Circuit::new("rot", 1).unwrap();
        circuit.rx(0.1, QubitId(0)).unwrap();
        circuit.ry(0.2, QubitId(0)).unwrap();
        circuit.rz(0.3, QubitId(0)).unwrap();
        let comp = analyze_gate_composition(&circuit);
        assert_eq!(comp.non_clifford_gate_count, 3);
        assert_eq!(comp.clifford_gate_count, 0);
    }

    #[test]
    fn test_counts_keyed_by_normalized_tag() {
        let circuit = Circuit::ghz(3).unwrap();
        let comp = analyze_gate_composition(&circuit);
        assert_eq!(comp.gate_counts.get("H"), Some(&1));
        assert_eq!(comp.gate_counts.get("CX"), Some(&2));
        assert!(comp.is_all_clifford());
    }
}
