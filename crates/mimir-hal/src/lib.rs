//! Mimir hardware architecture model.
//!
//! This crate describes what a quantum device looks like to the resource
//! estimator: qubit count, connectivity topology, native gate set, gate
//! error rates and durations, readout errors, T1/T2 coherence times, and
//! optional crosstalk and operational constraints.
//!
//! Architectures are constructed through a validating builder and are
//! read-only afterwards; the estimators in `mimir-estimate` rely on that
//! immutability when sharing one architecture across calls.
//!
//! # Example
//!
//! ```rust
//! use mimir_hal::{GateErrors, GateTimings, HardwareArchitecture, Topology};
//!
//! let arch = HardwareArchitecture::builder("nisq-device", 5)
//!     .connectivity(Topology::Linear)
//!     .native_gates(["X", "H", "RZ", "CX"])
//!     .gate_errors(GateErrors::generic(1e-3, 5e-3).with_override("CX", 5.5e-3))
//!     .readout_errors(0.01)
//!     .t1_times(100.0)
//!     .t2_times(80.0)
//!     .gate_timings(GateTimings::generic(30.0, 200.0, 500.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(arch.gate_error("CX", 2), 5.5e-3);
//! assert_eq!(arch.gate_error("H", 1), 1e-3); // generic fallback
//! ```

pub mod architecture;
pub mod error;
pub mod tables;
pub mod topology;

pub use architecture::{
    ArchitectureBuilder, Constraints, DEFAULT_GATE_DURATION_NS, DEFAULT_GATE_ERROR,
    HardwareArchitecture, normalize_gate_key,
};
pub use error::{HalError, HalResult};
pub use tables::{GateErrors, GateTimings, PerQubit};
pub use topology::Topology;
