//! Hardware architecture description and lookup methods.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

use crate::error::{HalError, HalResult};
use crate::tables::{GateErrors, GateTimings, PerQubit};
use crate::topology::Topology;

/// Error rate assumed for gate types the architecture says nothing about.
///
/// Lookups fall back to this deliberately pessimistic value so that an
/// unknown gate degrades the estimate instead of failing it.
pub const DEFAULT_GATE_ERROR: f64 = 0.1;

/// Duration in nanoseconds assumed for gate types the architecture says
/// nothing about. Deliberately pessimistic, same rationale as
/// [`DEFAULT_GATE_ERROR`].
pub const DEFAULT_GATE_DURATION_NS: f64 = 1000.0;

/// Tolerance for the T2 ≤ 2·T1 physicality bound.
const T2_BOUND_EPSILON: f64 = 1e-9;

/// Normalize a gate tag for table lookup: uppercase, with `CNOT` folded
/// into its canonical `CX` spelling.
pub fn normalize_gate_key(gate: &str) -> String {
    let upper = gate.to_ascii_uppercase();
    if upper == "CNOT" { "CX".to_string() } else { upper }
}

/// Operational constraints of a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Maximum circuit depth the device accepts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_circuit_depth: Option<u32>,
    /// Maximum shots per execution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shots: Option<u32>,
}

/// A quantum hardware architecture: qubit register, connectivity, native
/// gates, and noise/timing characterization.
///
/// Constructed only through [`ArchitectureBuilder`], which validates every
/// invariant once; instances are read-only afterwards. Estimators treat a
/// shared `&HardwareArchitecture` as immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArchitectureBuilder")]
pub struct HardwareArchitecture {
    name: String,
    qubit_count: u32,
    connectivity: Topology,
    native_gates: BTreeSet<String>,
    gate_errors: GateErrors,
    readout_errors: PerQubit,
    t1_times: PerQubit,
    t2_times: PerQubit,
    gate_timings: GateTimings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crosstalk: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    constraints: Option<Constraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl HardwareArchitecture {
    /// Start building an architecture.
    pub fn builder(name: impl Into<String>, qubit_count: u32) -> ArchitectureBuilder {
        ArchitectureBuilder {
            name: name.into(),
            qubit_count,
            connectivity: None,
            native_gates: None,
            gate_errors: None,
            readout_errors: None,
            t1_times: None,
            t2_times: None,
            gate_timings: None,
            crosstalk: None,
            constraints: None,
            metadata: None,
        }
    }

    // =========================================================================
    // Technology presets
    // =========================================================================

    /// A superconducting-transmon device with typical published
    /// characterization numbers (30/200/500 ns timings, 1e-4/5e-3 errors,
    /// 100/80 µs coherence) on a heavy-hex-like lattice.
    pub fn superconducting(name: impl Into<String>, qubit_count: u32) -> Self {
        Self::builder(name, qubit_count)
            .connectivity(Topology::HeavyHex)
            .native_gates(["X", "SX", "RZ", "CX"])
            .gate_errors(GateErrors::generic(1e-4, 5e-3))
            .readout_errors(1e-2)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .expect("superconducting preset is valid")
    }

    /// A trapped-ion device: all-to-all connectivity, slow gates, long
    /// coherence (1/50/100 µs timings, 5e-5/1e-3 errors, 1e6/1e5 µs T1/T2).
    pub fn trapped_ion(name: impl Into<String>, qubit_count: u32) -> Self {
        Self::builder(name, qubit_count)
            .connectivity(Topology::AllToAll)
            .native_gates(["RX", "RY", "RZ", "RXX"])
            .gate_errors(GateErrors::generic(5e-5, 1e-3))
            .readout_errors(5e-3)
            .t1_times(1e6)
            .t2_times(1e5)
            .gate_timings(GateTimings::generic(1000.0, 50_000.0, 100_000.0))
            .build()
            .expect("trapped-ion preset is valid")
    }

    /// A photonic device: fast gates, lossy two-qubit interactions, and no
    /// meaningful T1/T2 decay (both infinite).
    pub fn photonic(name: impl Into<String>, qubit_count: u32) -> Self {
        Self::builder(name, qubit_count)
            .connectivity(Topology::AllToAll)
            .native_gates(["H", "RZ", "CX", "CZ"])
            .gate_errors(GateErrors::generic(1e-3, 1e-2))
            .readout_errors(2e-2)
            .t1_times(f64::INFINITY)
            .t2_times(f64::INFINITY)
            .gate_timings(GateTimings::generic(10.0, 100.0, 1000.0))
            .build()
            .expect("photonic preset is valid")
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Name of the device or architecture.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of physical qubits.
    pub fn qubit_count(&self) -> u32 {
        self.qubit_count
    }

    /// Connectivity topology descriptor.
    pub fn connectivity(&self) -> &Topology {
        &self.connectivity
    }

    /// Native gate set (normalized uppercase tags).
    pub fn native_gates(&self) -> &BTreeSet<String> {
        &self.native_gates
    }

    /// Whether a gate is in the native set.
    pub fn is_native(&self, gate: &str) -> bool {
        self.native_gates.contains(&normalize_gate_key(gate))
    }

    /// Crosstalk matrix, if characterized.
    pub fn crosstalk(&self) -> Option<&Vec<Vec<f64>>> {
        self.crosstalk.as_ref()
    }

    /// Operational constraints, if any.
    pub fn constraints(&self) -> Option<&Constraints> {
        self.constraints.as_ref()
    }

    // =========================================================================
    // Error-rate and timing lookups
    // =========================================================================

    /// Error rate for a gate type, with generic fallback.
    ///
    /// Lookup order: per-type override → generic single-/two-qubit average
    /// by arity → [`DEFAULT_GATE_ERROR`]. The final fallback is logged: an
    /// estimate that leans on it is best-effort, not characterized.
    pub fn gate_error(&self, gate: &str, num_qubits: u32) -> f64 {
        let key = normalize_gate_key(gate);
        if let Some(&e) = self.gate_errors.overrides.get(&key) {
            return e;
        }
        if num_qubits == 1 {
            if let Some(e) = self.gate_errors.single_qubit {
                return e;
            }
        }
        if num_qubits >= 2 {
            if let Some(e) = self.gate_errors.two_qubit {
                return e;
            }
        }
        warn!(gate, num_qubits, "no error rate characterized; using conservative default");
        DEFAULT_GATE_ERROR
    }

    /// Duration in nanoseconds for a gate type, with generic fallback.
    ///
    /// Lookup order: per-type override → measurement/single/two-qubit
    /// generic average → [`DEFAULT_GATE_DURATION_NS`] (logged).
    pub fn gate_duration_ns(&self, gate: &str, num_qubits: u32) -> f64 {
        let key = normalize_gate_key(gate);
        if let Some(&d) = self.gate_timings.overrides.get(&key) {
            return d;
        }
        if key == "MEASUREMENT" {
            if let Some(d) = self.gate_timings.measurement {
                return d;
            }
        }
        if num_qubits == 1 {
            if let Some(d) = self.gate_timings.single_qubit {
                return d;
            }
        }
        if num_qubits >= 2 {
            if let Some(d) = self.gate_timings.two_qubit {
                return d;
            }
        }
        warn!(gate, num_qubits, "no duration characterized; using conservative default");
        DEFAULT_GATE_DURATION_NS
    }

    /// Generic single-qubit error rate (default if uncharacterized).
    pub fn single_qubit_error(&self) -> f64 {
        self.gate_errors.single_qubit.unwrap_or(DEFAULT_GATE_ERROR)
    }

    /// Generic two-qubit error rate (default if uncharacterized).
    pub fn two_qubit_error(&self) -> f64 {
        self.gate_errors.two_qubit.unwrap_or(DEFAULT_GATE_ERROR)
    }

    /// Generic two-qubit gate duration in nanoseconds.
    pub fn two_qubit_duration_ns(&self) -> f64 {
        self.gate_timings
            .two_qubit
            .unwrap_or(DEFAULT_GATE_DURATION_NS)
    }

    /// Generic measurement duration in nanoseconds.
    pub fn measurement_duration_ns(&self) -> f64 {
        self.gate_timings
            .measurement
            .unwrap_or(DEFAULT_GATE_DURATION_NS)
    }

    // =========================================================================
    // Per-qubit characterization
    // =========================================================================

    /// Readout error for a specific qubit.
    pub fn readout_error(&self, qubit: u32) -> HalResult<f64> {
        self.check_qubit(qubit)?;
        Ok(self.readout_errors.get(qubit).expect("validated length"))
    }

    /// T1 relaxation time (µs) for a specific qubit.
    pub fn t1(&self, qubit: u32) -> HalResult<f64> {
        self.check_qubit(qubit)?;
        Ok(self.t1_times.get(qubit).expect("validated length"))
    }

    /// T2 dephasing time (µs) for a specific qubit.
    pub fn t2(&self, qubit: u32) -> HalResult<f64> {
        self.check_qubit(qubit)?;
        Ok(self.t2_times.get(qubit).expect("validated length"))
    }

    /// Device-average readout error.
    pub fn average_readout_error(&self) -> f64 {
        self.readout_errors.average()
    }

    /// Device-average T1 (µs).
    pub fn average_t1(&self) -> f64 {
        self.t1_times.average()
    }

    /// Device-average T2 (µs).
    pub fn average_t2(&self) -> f64 {
        self.t2_times.average()
    }

    fn check_qubit(&self, qubit: u32) -> HalResult<()> {
        if qubit >= self.qubit_count {
            return Err(HalError::QubitOutOfRange {
                qubit,
                count: self.qubit_count,
            });
        }
        Ok(())
    }
}

/// Builder for [`HardwareArchitecture`].
///
/// All invariants are checked in [`build`](Self::build); the first violated
/// one is returned as a typed [`HalError`]. Also serves as the untrusted
/// deserialization mirror, so JSON input passes through the same checks.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureBuilder {
    name: String,
    qubit_count: u32,
    #[serde(default)]
    connectivity: Option<Topology>,
    #[serde(default)]
    native_gates: Option<Vec<String>>,
    #[serde(default)]
    gate_errors: Option<GateErrors>,
    #[serde(default)]
    readout_errors: Option<PerQubit>,
    #[serde(default)]
    t1_times: Option<PerQubit>,
    #[serde(default)]
    t2_times: Option<PerQubit>,
    #[serde(default)]
    gate_timings: Option<GateTimings>,
    #[serde(default)]
    crosstalk: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    constraints: Option<Constraints>,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

impl ArchitectureBuilder {
    /// Set the connectivity topology.
    #[must_use]
    pub fn connectivity(mut self, topology: Topology) -> Self {
        self.connectivity = Some(topology);
        self
    }

    /// Set the native gate set.
    #[must_use]
    pub fn native_gates<I, S>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.native_gates = Some(gates.into_iter().map(Into::into).collect());
        self
    }

    /// Set the gate error-rate table.
    #[must_use]
    pub fn gate_errors(mut self, errors: GateErrors) -> Self {
        self.gate_errors = Some(errors);
        self
    }

    /// Set the readout errors (scalar or per-qubit).
    #[must_use]
    pub fn readout_errors(mut self, readout: impl Into<PerQubit>) -> Self {
        self.readout_errors = Some(readout.into());
        self
    }

    /// Set the T1 times in microseconds (scalar or per-qubit).
    #[must_use]
    pub fn t1_times(mut self, t1: impl Into<PerQubit>) -> Self {
        self.t1_times = Some(t1.into());
        self
    }

    /// Set the T2 times in microseconds (scalar or per-qubit).
    #[must_use]
    pub fn t2_times(mut self, t2: impl Into<PerQubit>) -> Self {
        self.t2_times = Some(t2.into());
        self
    }

    /// Set the gate timing table.
    #[must_use]
    pub fn gate_timings(mut self, timings: GateTimings) -> Self {
        self.gate_timings = Some(timings);
        self
    }

    /// Set the crosstalk matrix (Q×Q, probabilities).
    #[must_use]
    pub fn crosstalk(mut self, matrix: Vec<Vec<f64>>) -> Self {
        self.crosstalk = Some(matrix);
        self
    }

    /// Set operational constraints.
    #[must_use]
    pub fn constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Attach free-form metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validate every invariant and produce the architecture.
    pub fn build(self) -> HalResult<HardwareArchitecture> {
        if self.qubit_count == 0 {
            return Err(HalError::NoQubits(self.name));
        }
        let q = self.qubit_count;

        let connectivity = self
            .connectivity
            .ok_or(HalError::MissingField("connectivity"))?;
        let raw_gates = self
            .native_gates
            .ok_or(HalError::MissingField("native_gates"))?;
        let mut gate_errors = self
            .gate_errors
            .ok_or(HalError::MissingField("gate_errors"))?;
        let readout_errors = self
            .readout_errors
            .ok_or(HalError::MissingField("readout_errors"))?;
        let t1_times = self.t1_times.ok_or(HalError::MissingField("t1_times"))?;
        let t2_times = self.t2_times.ok_or(HalError::MissingField("t2_times"))?;
        let mut gate_timings = self
            .gate_timings
            .ok_or(HalError::MissingField("gate_timings"))?;

        // Native gate set: non-empty, unique after normalization.
        if raw_gates.is_empty() {
            return Err(HalError::EmptyGateSet);
        }
        let mut native_gates = BTreeSet::new();
        for gate in &raw_gates {
            if !native_gates.insert(normalize_gate_key(gate)) {
                return Err(HalError::DuplicateNativeGate(gate.clone()));
            }
        }

        // Error table: probabilities, override keys in the native set.
        for (key, value) in [
            ("single_qubit", gate_errors.single_qubit),
            ("two_qubit", gate_errors.two_qubit),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(HalError::InvalidErrorRate {
                        key: key.to_string(),
                        value: v,
                    });
                }
            }
        }
        gate_errors.overrides = std::mem::take(&mut gate_errors.overrides)
            .into_iter()
            .map(|(k, v)| (normalize_gate_key(&k), v))
            .collect();
        for (key, &value) in &gate_errors.overrides {
            if !native_gates.contains(key) {
                return Err(HalError::UnknownTableKey {
                    key: key.clone(),
                    table: "error",
                });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(HalError::InvalidErrorRate {
                    key: key.clone(),
                    value,
                });
            }
        }

        // Timing table: positive durations, override keys in the native set.
        for (key, value) in [
            ("single_qubit", gate_timings.single_qubit),
            ("two_qubit", gate_timings.two_qubit),
            ("measurement", gate_timings.measurement),
        ] {
            if let Some(v) = value {
                if !(v > 0.0) {
                    return Err(HalError::InvalidDuration {
                        key: key.to_string(),
                        value: v,
                    });
                }
            }
        }
        gate_timings.overrides = std::mem::take(&mut gate_timings.overrides)
            .into_iter()
            .map(|(k, v)| (normalize_gate_key(&k), v))
            .collect();
        for (key, &value) in &gate_timings.overrides {
            if !native_gates.contains(key) {
                return Err(HalError::UnknownTableKey {
                    key: key.clone(),
                    table: "timing",
                });
            }
            if !(value > 0.0) {
                return Err(HalError::InvalidDuration {
                    key: key.clone(),
                    value,
                });
            }
        }

        // Readout errors: length and range.
        if let PerQubit::Each(vs) = &readout_errors {
            if vs.len() != q as usize {
                return Err(HalError::LengthMismatch {
                    field: "readout errors",
                    expected: q,
                    got: vs.len(),
                });
            }
        }
        for (qubit, value) in readout_errors.values(q) {
            if !(0.0..=1.0).contains(&value) {
                return Err(HalError::InvalidReadoutError { qubit, value });
            }
        }

        // Coherence times: length, positivity, and the T2 ≤ 2·T1 bound.
        for (field, times) in [("T1", &t1_times), ("T2", &t2_times)] {
            if let PerQubit::Each(vs) = times {
                if vs.len() != q as usize {
                    return Err(HalError::LengthMismatch {
                        field: if field == "T1" { "T1 times" } else { "T2 times" },
                        expected: q,
                        got: vs.len(),
                    });
                }
            }
            for (qubit, value) in times.values(q) {
                if !(value > 0.0) {
                    return Err(HalError::InvalidCoherenceTime {
                        field,
                        qubit,
                        value,
                    });
                }
            }
        }
        for qubit in 0..q {
            let t1 = t1_times.get(qubit).expect("validated length");
            let t2 = t2_times.get(qubit).expect("validated length");
            if t2 > 2.0 * t1 + T2_BOUND_EPSILON {
                return Err(HalError::T2ExceedsBound { qubit, t1, t2 });
            }
        }

        // Custom adjacency: length, bounds, symmetry.
        if let Topology::Custom { adjacencies } = &connectivity {
            if adjacencies.len() != q as usize {
                return Err(HalError::AdjacencyLengthMismatch {
                    expected: q,
                    got: adjacencies.len(),
                });
            }
            for (i, neighbors) in adjacencies.iter().enumerate() {
                let i = i as u32;
                for &n in neighbors {
                    if n >= q {
                        return Err(HalError::AdjacencyOutOfRange {
                            qubit: i,
                            neighbor: n,
                        });
                    }
                    if !adjacencies[n as usize].contains(&i) {
                        return Err(HalError::AsymmetricAdjacency { a: i, b: n });
                    }
                }
            }
        }

        // Crosstalk: Q×Q, probabilities.
        if let Some(matrix) = &self.crosstalk {
            if matrix.len() != q as usize {
                return Err(HalError::CrosstalkRows {
                    expected: q,
                    rows: matrix.len(),
                });
            }
            for (row, values) in matrix.iter().enumerate() {
                if values.len() != q as usize {
                    return Err(HalError::CrosstalkShape {
                        row: row as u32,
                        expected: q,
                        got: values.len(),
                    });
                }
                for (col, &value) in values.iter().enumerate() {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(HalError::CrosstalkRange {
                            row: row as u32,
                            col: col as u32,
                            value,
                        });
                    }
                }
            }
        }

        // Constraints: positive when present.
        if let Some(constraints) = &self.constraints {
            if constraints.max_circuit_depth == Some(0) {
                return Err(HalError::InvalidConstraint {
                    field: "max_circuit_depth",
                });
            }
            if constraints.max_shots == Some(0) {
                return Err(HalError::InvalidConstraint { field: "max_shots" });
            }
        }

        Ok(HardwareArchitecture {
            name: self.name,
            qubit_count: q,
            connectivity,
            native_gates,
            gate_errors,
            readout_errors,
            t1_times,
            t2_times,
            gate_timings,
            crosstalk: self.crosstalk,
            constraints: self.constraints,
            metadata: self.metadata,
        })
    }
}

impl TryFrom<ArchitectureBuilder> for HardwareArchitecture {
    type Error = HalError;

    fn try_from(builder: ArchitectureBuilder) -> HalResult<Self> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_arch(qubits: u32) -> HardwareArchitecture {
        HardwareArchitecture::builder("test-linear", qubits)
            .connectivity(Topology::Linear)
            .native_gates(["X", "H", "RZ", "CNOT"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3).with_override("H", 1.1e-3))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0).with_override("H", 25.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_and_lookup() {
        let arch = linear_arch(5);
        assert_eq!(arch.qubit_count(), 5);
        assert_eq!(arch.gate_error("H", 1), 1.1e-3);
        assert_eq!(arch.gate_error("X", 1), 1e-3); // generic fallback
        assert_eq!(arch.gate_error("CX", 2), 5e-3);
        assert_eq!(arch.gate_duration_ns("H", 1), 25.0);
        assert_eq!(arch.gate_duration_ns("RZ", 1), 30.0);
        assert_eq!(arch.gate_duration_ns("measurement", 1), 500.0);
    }

    #[test]
    fn test_cnot_alias_normalization() {
        // "CNOT" in the native set and tables is folded into CX.
        let arch = HardwareArchitecture::builder("alias", 2)
            .connectivity(Topology::Linear)
            .native_gates(["H", "CNOT"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3).with_override("CNOT", 7e-3))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap();
        assert!(arch.is_native("cx"));
        assert!(arch.is_native("CNOT"));
        assert_eq!(arch.gate_error("cx", 2), 7e-3);
        assert_eq!(arch.gate_error("CNOT", 2), 7e-3);
    }

    #[test]
    fn test_unknown_gate_falls_back_to_default() {
        let arch = linear_arch(3);
        // Gate with no override and no matching arity default.
        let arch_no_generic = HardwareArchitecture::builder("sparse", 3)
            .connectivity(Topology::Linear)
            .native_gates(["H"])
            .gate_errors(GateErrors::default())
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::default())
            .build()
            .unwrap();
        assert_eq!(arch_no_generic.gate_error("mystery", 1), DEFAULT_GATE_ERROR);
        assert_eq!(
            arch_no_generic.gate_duration_ns("mystery", 2),
            DEFAULT_GATE_DURATION_NS
        );
        // Known-arity lookup on an architecture with generics still works.
        assert_eq!(arch.gate_error("mystery", 2), 5e-3);
    }

    #[test]
    fn test_zero_qubits_rejected() {
        let err = HardwareArchitecture::builder("bad", 0)
            .connectivity(Topology::Linear)
            .native_gates(["X"])
            .build()
            .unwrap_err();
        assert!(matches!(err, HalError::NoQubits(_)));
    }

    #[test]
    fn test_missing_field_rejected() {
        let err = HardwareArchitecture::builder("bad", 2)
            .connectivity(Topology::Linear)
            .build()
            .unwrap_err();
        assert!(matches!(err, HalError::MissingField("native_gates")));
    }

    #[test]
    fn test_table_key_outside_native_set_rejected() {
        let err = HardwareArchitecture::builder("bad", 2)
            .connectivity(Topology::Linear)
            .native_gates(["X"])
            .gate_errors(GateErrors::default().with_override("Y", 0.1))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::default())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            HalError::UnknownTableKey { table: "error", .. }
        ));
    }

    #[test]
    fn test_t2_bound_rejected() {
        let err = HardwareArchitecture::builder("bad", 1)
            .connectivity(Topology::Linear)
            .native_gates(["X"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(0.01)
            .t1_times(50.0)
            .t2_times(110.0) // > 2 * 50
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, HalError::T2ExceedsBound { .. }));
    }

    #[test]
    fn test_readout_length_mismatch_rejected() {
        let err = HardwareArchitecture::builder("bad", 3)
            .connectivity(Topology::Linear)
            .native_gates(["X"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(vec![0.01, 0.01])
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            HalError::LengthMismatch {
                field: "readout errors",
                ..
            }
        ));
    }

    #[test]
    fn test_asymmetric_adjacency_rejected() {
        let err = HardwareArchitecture::builder("bad", 3)
            .connectivity(Topology::Custom {
                adjacencies: vec![vec![1], vec![0, 2], vec![]], // 2 missing backlink to 1
            })
            .native_gates(["X"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, HalError::AsymmetricAdjacency { a: 1, b: 2 }));
    }

    #[test]
    fn test_adjacency_length_mismatch_rejected() {
        let err = HardwareArchitecture::builder("bad", 2)
            .connectivity(Topology::Custom {
                adjacencies: vec![vec![1], vec![0], vec![0]],
            })
            .native_gates(["X"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            HalError::AdjacencyLengthMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_crosstalk_validation() {
        let err = HardwareArchitecture::builder("bad", 2)
            .connectivity(Topology::Linear)
            .native_gates(["X"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(0.01)
            .t1_times(100.0)
            .t2_times(80.0)
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .crosstalk(vec![vec![0.0, 0.001]])
            .build()
            .unwrap_err();
        assert!(matches!(err, HalError::CrosstalkRows { .. }));
    }

    #[test]
    fn test_per_qubit_averages() {
        let arch = HardwareArchitecture::builder("avg", 2)
            .connectivity(Topology::Linear)
            .native_gates(["X"])
            .gate_errors(GateErrors::generic(1e-3, 5e-3))
            .readout_errors(vec![0.01, 0.03])
            .t1_times(vec![100.0, 120.0])
            .t2_times(vec![80.0, 90.0])
            .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
            .build()
            .unwrap();
        assert!((arch.average_readout_error() - 0.02).abs() < 1e-12);
        assert!((arch.average_t1() - 110.0).abs() < 1e-12);
        assert_eq!(arch.t2(1).unwrap(), 90.0);
        assert!(matches!(
            arch.t2(5),
            Err(HalError::QubitOutOfRange { qubit: 5, count: 2 })
        ));
    }

    #[test]
    fn test_presets() {
        let sc = HardwareArchitecture::superconducting("transmon-27", 27);
        assert_eq!(sc.two_qubit_error(), 5e-3);
        assert_eq!(sc.two_qubit_duration_ns(), 200.0);

        let ion = HardwareArchitecture::trapped_ion("ion-11", 11);
        assert!(ion.connectivity().is_all_to_all());

        let ph = HardwareArchitecture::photonic("photon-8", 8);
        assert!(ph.average_t2().is_infinite());
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let json = r#"{
            "name": "from-json",
            "qubit_count": 2,
            "connectivity": {"type": "linear"},
            "native_gates": ["X", "CX"],
            "gate_errors": {"single_qubit": 1e-3, "two_qubit": 5e-3},
            "readout_errors": 0.01,
            "t1_times": 100.0,
            "t2_times": 300.0,
            "gate_timings": {"single_qubit": 30.0, "two_qubit": 200.0, "measurement": 500.0}
        }"#;
        // T2 > 2*T1 must be rejected through the serde path too.
        let err = serde_json::from_str::<HardwareArchitecture>(json);
        assert!(err.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let arch = linear_arch(4);
        let json = serde_json::to_string(&arch).unwrap();
        let back: HardwareArchitecture = serde_json::from_str(&json).unwrap();
        assert_eq!(back, arch);
    }
}
