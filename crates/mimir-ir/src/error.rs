//! Error types for the circuit representation.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors raised while constructing or mutating circuits and gates.
///
/// These are validation errors in the sense of the estimation pipeline:
/// they are raised synchronously at construction time and never recovered
/// locally.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Circuit declared with zero qubits.
    #[error("circuit '{0}' must have at least one qubit")]
    ZeroWidthCircuit(String),

    /// Gate declared with an empty operand list.
    #[error("gate '{0}' must act on at least one qubit")]
    NoOperands(String),

    /// Gate operand count does not match the gate's arity.
    #[error("gate '{gate}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Arity declared by the gate type.
        expected: u32,
        /// Number of operands provided.
        got: u32,
    },

    /// The same qubit appears twice in one gate's operand list.
    #[error("duplicate qubit {qubit} in gate '{gate}'")]
    DuplicateQubit {
        /// The repeated qubit.
        qubit: QubitId,
        /// Name of the gate.
        gate: String,
    },

    /// Gate operand outside the circuit's qubit range.
    #[error("gate '{gate}' acts on qubit {qubit}, out of bounds for a {num_qubits}-qubit circuit")]
    QubitOutOfBounds {
        /// Name of the gate.
        gate: String,
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
    },

    /// Gate insertion index past the end of the gate sequence.
    #[error("insertion index {index} out of bounds for circuit with {len} gates")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Current gate count.
        len: usize,
    },

    /// Per-instance duration override must be positive.
    #[error("gate duration override {0} ns must be positive")]
    InvalidDuration(f64),

    /// Per-instance fidelity override must be a probability.
    #[error("gate fidelity override {0} must be within [0, 1]")]
    InvalidFidelity(f64),
}

/// Result type for circuit operations.
pub type IrResult<T> = Result<T, IrError>;
