//! Gate error-rate and timing tables, and scalar-or-per-qubit values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gate error rates: generic single-/two-qubit averages plus per-type
/// overrides. All values are probabilities in [0, 1].
///
/// Override keys must name gates from the architecture's native gate set;
/// this is checked at architecture construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateErrors {
    /// Average error rate for any single-qubit gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_qubit: Option<f64>,
    /// Average error rate for any two-qubit gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_qubit: Option<f64>,
    /// Per-type overrides, keyed by normalized uppercase gate tag.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, f64>,
}

impl GateErrors {
    /// Generic averages with no per-type overrides.
    pub fn generic(single_qubit: f64, two_qubit: f64) -> Self {
        Self {
            single_qubit: Some(single_qubit),
            two_qubit: Some(two_qubit),
            overrides: BTreeMap::new(),
        }
    }

    /// Add a per-type override. The key is normalized at architecture
    /// construction.
    #[must_use]
    pub fn with_override(mut self, gate: impl Into<String>, rate: f64) -> Self {
        self.overrides.insert(gate.into(), rate);
        self
    }
}

/// Gate durations in nanoseconds: generic single-/two-qubit/measurement
/// averages plus per-type overrides. All values must be positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateTimings {
    /// Average duration for any single-qubit gate (ns).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_qubit: Option<f64>,
    /// Average duration for any two-qubit gate (ns).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_qubit: Option<f64>,
    /// Average duration of a qubit measurement (ns).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<f64>,
    /// Per-type overrides, keyed by normalized uppercase gate tag.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<String, f64>,
}

impl GateTimings {
    /// Generic averages with no per-type overrides.
    pub fn generic(single_qubit: f64, two_qubit: f64, measurement: f64) -> Self {
        Self {
            single_qubit: Some(single_qubit),
            two_qubit: Some(two_qubit),
            measurement: Some(measurement),
            overrides: BTreeMap::new(),
        }
    }

    /// Add a per-type override. The key is normalized at architecture
    /// construction.
    #[must_use]
    pub fn with_override(mut self, gate: impl Into<String>, duration_ns: f64) -> Self {
        self.overrides.insert(gate.into(), duration_ns);
        self
    }
}

/// A device property given either as one device-wide scalar or as one value
/// per qubit. Used for readout errors and T1/T2 times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerQubit {
    /// One value for every qubit.
    Uniform(f64),
    /// One value per qubit, in qubit-index order.
    Each(Vec<f64>),
}

impl PerQubit {
    /// Value for a specific qubit. `None` if the index is past a per-qubit
    /// list (cannot happen for a validated architecture).
    pub fn get(&self, qubit: u32) -> Option<f64> {
        match self {
            PerQubit::Uniform(v) => Some(*v),
            PerQubit::Each(vs) => vs.get(qubit as usize).copied(),
        }
    }

    /// Device-wide average.
    pub fn average(&self) -> f64 {
        match self {
            PerQubit::Uniform(v) => *v,
            PerQubit::Each(vs) => vs.iter().sum::<f64>() / vs.len() as f64,
        }
    }

    /// Iterate over (qubit, value) pairs for a device of the given size.
    pub fn values(&self, num_qubits: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        (0..num_qubits).filter_map(move |q| self.get(q).map(|v| (q, v)))
    }
}

impl From<f64> for PerQubit {
    fn from(v: f64) -> Self {
        PerQubit::Uniform(v)
    }
}

impl From<Vec<f64>> for PerQubit {
    fn from(vs: Vec<f64>) -> Self {
        PerQubit::Each(vs)
    }
}
