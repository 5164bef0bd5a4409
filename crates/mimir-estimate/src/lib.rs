//! Mimir quantum resource estimation engine.
//!
//! Given a circuit (`mimir-ir`) and a hardware architecture (`mimir-hal`),
//! this crate estimates what running the circuit would take: logical
//! depth, gate composition, SWAP routing overhead under the device's
//! connectivity, physical execution time, required coherence, fidelity,
//! achievable quantum volume, classical simulation cost, and, on request,
//! surface-code fault-tolerance sizing.
//!
//! The whole engine is synchronous and purely functional: every call maps
//! immutable inputs to a fresh [`EstimationResult`] with no I/O and no
//! shared state. Sharing one architecture across concurrent calls is safe
//! because architectures cannot be mutated after construction.
//!
//! # Example
//!
//! ```rust
//! use mimir_estimate::{EstimationOptions, estimate_resources};
//! use mimir_hal::HardwareArchitecture;
//! use mimir_ir::Circuit;
//!
//! let circuit = Circuit::ghz(5).unwrap();
//! let arch = HardwareArchitecture::superconducting("transmon-27", 27);
//!
//! let result = estimate_resources(&circuit, &arch, &EstimationOptions::default()).unwrap();
//! assert_eq!(result.circuit_width, 5);
//! assert!(result.fidelity > 0.0 && result.fidelity <= 1.0);
//! ```
//!
//! # Routing policies
//!
//! The SWAP estimator supports three policies (see
//! [`RoutingAlgorithm`]): `none`, a static `shortest-path` upper bound,
//! and the default `greedy-router` that simulates a live qubit mapping.
//! Both routed policies are documented approximations; exact routing is
//! NP-hard and out of scope.

pub mod analysis;
pub mod error;
pub mod estimator;
pub mod graph;
pub mod layout;
pub mod metrics;
pub mod options;
pub mod result;
pub mod routing;
pub mod suggestions;
pub mod surface_code;

pub use analysis::{GateComposition, analyze_gate_composition};
pub use error::{EstimateError, EstimateResult};
pub use estimator::estimate_resources;
pub use graph::ConnectivityGraph;
pub use layout::Layout;
pub use metrics::{
    COHERENCE_SAFETY_FACTOR, ClassicalResources, CoherenceLimited, RequiredCoherence,
    coherence_limited, estimate_classical_resources, estimate_fidelity, estimate_quantum_volume,
    execution_time_depth_based, execution_time_gate_sum, required_coherence,
};
pub use options::{EstimationOptions, SimulationType};
pub use result::EstimationResult;
pub use routing::{RoutingAlgorithm, SwapOverhead, estimate_swap_overhead};
pub use suggestions::generate_suggestions;
pub use surface_code::{
    FaultTolerance, ROUTING_OVERHEAD_FACTOR, SURFACE_CODE_PREFACTOR, SURFACE_CODE_THRESHOLD,
    estimate_fault_tolerance,
};
