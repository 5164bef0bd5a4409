//! High-level circuit builder API.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateKind, StandardGate};
use crate::qubit::QubitId;

/// A quantum circuit: a fixed qubit register and an ordered gate sequence.
///
/// Treated as an immutable value object by the estimators. The only
/// mutations are `push`/`insert`, which re-validate qubit bounds before
/// accepting a gate. Deserialization funnels through the same validation,
/// so untrusted JSON cannot produce an out-of-bounds circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircuitData")]
pub struct Circuit {
    /// Display name of the circuit.
    name: String,
    /// Number of qubits in the register.
    num_qubits: u32,
    /// Ordered gate sequence.
    gates: Vec<Gate>,
    /// Free-form metadata (description, source, provenance).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl Circuit {
    /// Create a new empty circuit with the given qubit count.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> IrResult<Self> {
        let name = name.into();
        if num_qubits == 0 {
            return Err(IrError::ZeroWidthCircuit(name));
        }
        Ok(Self {
            name,
            num_qubits,
            gates: vec![],
            metadata: None,
        })
    }

    /// Attach free-form metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    fn check_bounds(&self, gate: &Gate) -> IrResult<()> {
        for &q in &gate.qubits {
            if q.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfBounds {
                    gate: gate.name().to_string(),
                    qubit: q,
                    num_qubits: self.num_qubits,
                });
            }
        }
        Ok(())
    }

    /// Append a validated gate to the end of the circuit.
    pub fn push(&mut self, gate: Gate) -> IrResult<&mut Self> {
        self.check_bounds(&gate)?;
        self.gates.push(gate);
        Ok(self)
    }

    /// Insert a validated gate at the given position.
    pub fn insert(&mut self, index: usize, gate: Gate) -> IrResult<&mut Self> {
        if index > self.gates.len() {
            return Err(IrError::IndexOutOfBounds {
                index,
                len: self.gates.len(),
            });
        }
        self.check_bounds(&gate)?;
        self.gates.insert(index, gate);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::H, qubit)?)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::X, qubit)?)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::Y, qubit)?)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::Z, qubit)?)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::S, qubit)?)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::Sdg, qubit)?)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::T, qubit)?)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::Tdg, qubit)?)
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::SX, qubit)?)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::Rx(theta), qubit)?)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::Ry(theta), qubit)?)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::Rz(theta), qubit)?)
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::P(theta), qubit)?)
    }

    /// Apply universal U gate.
    pub fn u(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::single(StandardGate::U(theta, phi, lambda), qubit)?)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CX, control, target)?)
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CY, control, target)?)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CZ, control, target)?)
    }

    /// Apply controlled-Hadamard gate.
    pub fn ch(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CH, control, target)?)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::Swap, q1, q2)?)
    }

    /// Apply iSWAP gate.
    pub fn iswap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::ISwap, q1, q2)?)
    }

    /// Apply controlled-Rx gate.
    pub fn crx(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CRx(theta), control, target)?)
    }

    /// Apply controlled-Ry gate.
    pub fn cry(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CRy(theta), control, target)?)
    }

    /// Apply controlled-Rz gate.
    pub fn crz(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CRz(theta), control, target)?)
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::CP(theta), control, target)?)
    }

    /// Apply RZZ (ZZ rotation) gate.
    pub fn rzz(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::two(StandardGate::RZZ(theta), q1, q2)?)
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(StandardGate::CCX, [c1, c2, target])?)
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(StandardGate::CSwap, [control, t1, t2])?)
    }

    // =========================================================================
    // Accessors and derived properties
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the ordered gate sequence.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Get the attached metadata, if any.
    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    /// Get the total number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Compute the logical depth of the circuit.
    ///
    /// The depth is the minimum number of sequential layers needed when
    /// gates on disjoint qubits execute in parallel and every gate occupies
    /// exactly one layer. A single forward scan tracks, per qubit, the layer
    /// in which that qubit was last occupied; each gate starts at the
    /// maximum of its operands' finish layers. Depends only on gate order
    /// and qubit sets, never on gate kind or parameters.
    pub fn depth(&self) -> usize {
        if self.gates.is_empty() {
            return 0;
        }

        let mut finish_layer = vec![0usize; self.num_qubits as usize];
        let mut max_depth = 0usize;

        for gate in &self.gates {
            let start = gate
                .qubits
                .iter()
                .map(|q| finish_layer[q.index()])
                .max()
                .unwrap_or(0);
            let finish = start + 1;
            for q in &gate.qubits {
                finish_layer[q.index()] = finish;
            }
            max_depth = max_depth.max(finish);
        }

        max_depth
    }

    /// Count gates per uppercase type tag.
    pub fn gate_counts(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for gate in &self.gates {
            *counts.entry(gate.name().to_ascii_uppercase()).or_insert(0) += 1;
        }
        counts
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state preparation circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::new("bell", 2)?;
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::new("ghz", n)?;
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        Ok(circuit)
    }

    /// Create a QFT circuit (without the final bit-reversal measurements).
    pub fn qft(n: u32) -> IrResult<Self> {
        use std::f64::consts::PI;

        let mut circuit = Self::new("qft", n)?;
        for i in 0..n {
            circuit.h(QubitId(i))?;
            for j in (i + 1)..n {
                let k = j - i;
                let angle = PI / (1u64 << k) as f64;
                circuit.cp(angle, QubitId(j), QubitId(i))?;
            }
        }
        // Swap qubits for bit reversal
        for i in 0..n / 2 {
            circuit.swap(QubitId(i), QubitId(n - 1 - i))?;
        }
        Ok(circuit)
    }
}

/// Untrusted deserialization mirror for [`Circuit`]; every gate is rebuilt
/// through the validating constructors.
#[derive(Debug, Deserialize)]
struct CircuitData {
    name: String,
    num_qubits: u32,
    #[serde(default)]
    gates: Vec<Gate>,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

impl TryFrom<CircuitData> for Circuit {
    type Error = IrError;

    fn try_from(data: CircuitData) -> IrResult<Self> {
        let mut circuit = Circuit::new(data.name, data.num_qubits)?;
        for gate in data.gates {
            let mut rebuilt = Gate::new(gate.kind, gate.qubits)?;
            if let Some(duration_ns) = gate.duration_ns {
                rebuilt = rebuilt.with_duration_ns(duration_ns)?;
            }
            if let Some(fidelity) = gate.fidelity {
                rebuilt = rebuilt.with_fidelity(fidelity)?;
            }
            circuit.push(rebuilt)?;
        }
        if let Some(metadata) = data.metadata {
            circuit = circuit.with_metadata(metadata);
        }
        Ok(circuit)
    }
}
