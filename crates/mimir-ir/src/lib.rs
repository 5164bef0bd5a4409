//! Mimir circuit representation.
//!
//! This crate provides the core data structures for describing quantum
//! circuits in Mimir: the gate vocabulary, the validated [`Circuit`]
//! container, and named template generators. It is the input half of the
//! resource-estimation pipeline; the other half is the hardware model in
//! `mimir-hal`.
//!
//! # Example: Building a Bell pair
//!
//! ```rust
//! use mimir_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell", 2).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Validation
//!
//! Circuits and gates are validated at construction and on every
//! `push`/`insert`: operand arity, operand uniqueness, register bounds, and
//! override ranges. Once accepted, values are treated as immutable by the
//! estimators.

pub mod circuit;
pub mod error;
pub mod gate;
pub mod generate;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate};
pub use qubit::QubitId;
