//! Error types for the interchange parser and emitter.

use thiserror::Error;

/// Errors raised while parsing or emitting circuit text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QasmError {
    /// The lexer hit an invalid token.
    #[error("invalid token at line {line}")]
    InvalidToken {
        /// 1-based source line.
        line: usize,
    },

    /// An unexpected token was found.
    #[error("unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// 1-based source line.
        line: usize,
        /// What the parser was looking for.
        expected: &'static str,
        /// What it found instead.
        found: String,
    },

    /// Input ended mid-statement.
    #[error("unexpected end of input: expected {0}")]
    UnexpectedEof(&'static str),

    /// Missing or unsupported version header.
    #[error("expected 'OPENQASM 2.0;' header, found version {0}")]
    UnsupportedVersion(String),

    /// No qubit register declared before the first gate.
    #[error("no qreg declaration before first gate instruction")]
    MissingRegister,

    /// A second qubit register was declared.
    #[error("duplicate qreg declaration '{0}' (a single register is supported)")]
    DuplicateRegister(String),

    /// Operand names a register that was never declared.
    #[error("unknown register '{found}' at line {line}, expected '{expected}'")]
    UnknownRegister {
        /// 1-based source line.
        line: usize,
        /// The declared register name.
        expected: String,
        /// The name used in the operand.
        found: String,
    },

    /// Statement kind outside the supported subset.
    #[error("unsupported statement '{statement}' at line {line}")]
    UnsupportedStatement {
        /// 1-based source line.
        line: usize,
        /// The offending keyword.
        statement: String,
    },

    /// Gate parameter count does not match the gate type.
    #[error("gate '{gate}' expects {expected} parameters, got {got} at line {line}")]
    WrongParameterCount {
        /// 1-based source line.
        line: usize,
        /// Gate name.
        gate: String,
        /// Expected parameter count.
        expected: usize,
        /// Provided parameter count.
        got: usize,
    },

    /// A gate that cannot be written in the interchange subset.
    #[error("cannot emit gate '{0}': not part of the interchange vocabulary")]
    UnsupportedGate(String),

    /// Circuit-level validation failed on the parsed gates.
    #[error(transparent)]
    Circuit(#[from] mimir_ir::IrError),
}

/// Result type for interchange operations.
pub type QasmResult<T> = Result<T, QasmError>;
