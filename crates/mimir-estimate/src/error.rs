//! Error types for the estimation engine.

use thiserror::Error;

/// Errors raised during resource estimation.
///
/// Two families per the error-handling design:
/// - *configuration* errors: individually valid inputs that do not fit
///   together for the requested operation (bad initial mapping, bad target
///   rate);
/// - *estimation* errors: runtime conditions that would make the computed
///   numbers meaningless (circuit wider than the device, unreachable
///   qubits under a required routing policy).
///
/// Both are always propagated to the caller. Lookup misses for unknown
/// gate types are NOT errors; they fall back to conservative defaults in
/// `mimir-hal` so estimation stays best-effort.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EstimateError {
    /// Circuit needs more qubits than the architecture has.
    #[error("circuit requires {required} qubits, but architecture '{architecture}' has {available}")]
    QubitCountExceeded {
        /// Architecture name.
        architecture: String,
        /// Circuit width.
        required: u32,
        /// Physical qubits available.
        available: u32,
    },

    /// No routing path exists between two physical qubits.
    #[error("no routing path between physical qubits {from} and {to}")]
    UnreachableQubits {
        /// Source physical qubit.
        from: u32,
        /// Destination physical qubit.
        to: u32,
    },

    /// Initial mapping length does not match the circuit width.
    #[error("initial mapping has {got} entries, expected one per circuit qubit ({expected})")]
    MappingLengthMismatch {
        /// Circuit width.
        expected: u32,
        /// Provided entries.
        got: usize,
    },

    /// Initial mapping assigns the same physical qubit twice.
    #[error("initial mapping assigns physical qubit {qubit} more than once")]
    MappingDuplicate {
        /// The repeated physical qubit.
        qubit: u32,
    },

    /// Initial mapping references a physical qubit outside the device.
    #[error("initial mapping references physical qubit {qubit}, out of range for {available} qubits")]
    MappingOutOfRange {
        /// The offending physical index.
        qubit: u32,
        /// Physical qubits available.
        available: u32,
    },

    /// Target logical error rate must be a probability strictly inside (0, 1).
    #[error("target logical error rate {0} must lie strictly within (0, 1)")]
    InvalidTargetErrorRate(f64),
}

impl EstimateError {
    /// Whether this error is a configuration error (invalid input
    /// combination) rather than an estimation-time condition.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EstimateError::MappingLengthMismatch { .. }
                | EstimateError::MappingDuplicate { .. }
                | EstimateError::MappingOutOfRange { .. }
                | EstimateError::InvalidTargetErrorRate(_)
        )
    }
}

/// Result type for estimation operations.
pub type EstimateResult<T> = Result<T, EstimateError>;
