//! Error types for the hardware architecture model.

use thiserror::Error;

/// Validation errors raised while constructing a hardware architecture.
///
/// All variants are construction-time failures: an architecture that
/// builds successfully is read-only and never re-validated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// Architecture declared with zero qubits.
    #[error("architecture '{0}' must have at least one qubit")]
    NoQubits(String),

    /// A required builder field was never set.
    #[error("missing required architecture field '{0}'")]
    MissingField(&'static str),

    /// Native gate set must not be empty.
    #[error("native gate set must not be empty")]
    EmptyGateSet,

    /// Native gate set contains a repeated tag.
    #[error("duplicate gate '{0}' in native gate set")]
    DuplicateNativeGate(String),

    /// Error/timing override names a gate outside the native set.
    #[error("gate '{key}' in the {table} table is not in the native gate set")]
    UnknownTableKey {
        /// The offending key.
        key: String,
        /// Which table ("error" or "timing").
        table: &'static str,
    },

    /// Error rate outside [0, 1].
    #[error("error rate {value} for '{key}' must be within [0, 1]")]
    InvalidErrorRate {
        /// Table key.
        key: String,
        /// The offending value.
        value: f64,
    },

    /// Gate duration must be positive.
    #[error("duration {value} ns for '{key}' must be positive")]
    InvalidDuration {
        /// Table key.
        key: String,
        /// The offending value.
        value: f64,
    },

    /// Per-qubit list length does not match the qubit count.
    #[error("{field} list length {got} does not match qubit count {expected}")]
    LengthMismatch {
        /// Which field ("readout errors", "T1 times", "T2 times").
        field: &'static str,
        /// Expected length (qubit count).
        expected: u32,
        /// Provided length.
        got: usize,
    },

    /// Readout error outside [0, 1].
    #[error("readout error {value} for qubit {qubit} must be within [0, 1]")]
    InvalidReadoutError {
        /// Qubit index (0 when the value is a scalar).
        qubit: u32,
        /// The offending value.
        value: f64,
    },

    /// Coherence time must be positive.
    #[error("{field} {value} µs for qubit {qubit} must be positive")]
    InvalidCoherenceTime {
        /// Which field ("T1" or "T2").
        field: &'static str,
        /// Qubit index (0 when the value is a scalar).
        qubit: u32,
        /// The offending value.
        value: f64,
    },

    /// T2 bound violated: T2 must not exceed 2·T1 (per qubit).
    #[error("T2 ({t2} µs) for qubit {qubit} exceeds 2·T1 ({t1} µs)")]
    T2ExceedsBound {
        /// Qubit index.
        qubit: u32,
        /// T1 in microseconds.
        t1: f64,
        /// T2 in microseconds.
        t2: f64,
    },

    /// Custom adjacency list length does not match the qubit count.
    #[error("custom adjacency length {got} does not match qubit count {expected}")]
    AdjacencyLengthMismatch {
        /// Expected length (qubit count).
        expected: u32,
        /// Provided length.
        got: usize,
    },

    /// Custom adjacency references an out-of-range qubit.
    #[error("adjacency for qubit {qubit} references out-of-range qubit {neighbor}")]
    AdjacencyOutOfRange {
        /// The list owner.
        qubit: u32,
        /// The offending neighbor index.
        neighbor: u32,
    },

    /// Custom adjacency is not symmetric.
    #[error("asymmetric adjacency: qubit {a} lists {b}, but {b} does not list {a}")]
    AsymmetricAdjacency {
        /// One endpoint.
        a: u32,
        /// The other endpoint.
        b: u32,
    },

    /// Crosstalk matrix has the wrong number of rows.
    #[error("crosstalk matrix must be {expected}×{expected}, got {rows} rows")]
    CrosstalkRows {
        /// Expected dimension (qubit count).
        expected: u32,
        /// Provided row count.
        rows: usize,
    },

    /// Crosstalk matrix row has the wrong number of columns.
    #[error("crosstalk matrix row {row} has {got} columns, expected {expected}")]
    CrosstalkShape {
        /// Row index.
        row: u32,
        /// Expected dimension (qubit count).
        expected: u32,
        /// Provided dimension.
        got: usize,
    },

    /// Crosstalk value outside [0, 1].
    #[error("crosstalk value {value} at ({row}, {col}) must be within [0, 1]")]
    CrosstalkRange {
        /// Row index.
        row: u32,
        /// Column index.
        col: u32,
        /// The offending value.
        value: f64,
    },

    /// Operational constraint must be positive.
    #[error("constraint {field} must be positive")]
    InvalidConstraint {
        /// Which constraint.
        field: &'static str,
    },

    /// Qubit index past the end of the register.
    #[error("qubit index {qubit} out of range for {count}-qubit architecture")]
    QubitOutOfRange {
        /// The offending index.
        qubit: u32,
        /// Qubit count of the architecture.
        count: u32,
    },
}

/// Result type for architecture operations.
pub type HalResult<T> = Result<T, HalError>;
