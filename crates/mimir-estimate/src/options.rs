//! Estimation configuration.

use serde::{Deserialize, Serialize};

use crate::routing::RoutingAlgorithm;

/// Classical simulation mode to cost out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SimulationType {
    /// Full state-vector simulation (2^N amplitudes).
    #[default]
    StateVector,
    /// Tensor-network contraction (structure-dependent cost).
    TensorNetwork,
    /// Stabilizer-tableau simulation, valid for all-Clifford circuits.
    Clifford,
}

/// Options for one estimation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationOptions {
    /// Routing policy for the SWAP overhead stage.
    pub routing_algorithm: RoutingAlgorithm,
    /// Whether to run the surface-code sizing stage.
    pub enable_fault_tolerance: bool,
    /// Desired error rate per logical qubit per logical cycle. Must lie
    /// strictly within (0, 1).
    pub target_logical_error_rate: f64,
    /// Classical simulation mode to cost out.
    pub simulation_type: SimulationType,
    /// Initial logical-to-physical mapping for routing
    /// (`initial_mapping[l]` = physical home of logical qubit `l`).
    /// Defaults to the identity.
    pub initial_mapping: Option<Vec<u32>>,
}

impl Default for EstimationOptions {
    fn default() -> Self {
        Self {
            routing_algorithm: RoutingAlgorithm::GreedyRouter,
            enable_fault_tolerance: false,
            target_logical_error_rate: 1e-15,
            simulation_type: SimulationType::StateVector,
            initial_mapping: None,
        }
    }
}
