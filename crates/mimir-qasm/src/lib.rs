//! OpenQASM 2.0 circuit interchange for Mimir.
//!
//! A convenience serializer for round-tripping circuits to and from a
//! line-oriented text format: a version header, a `qreg` declaration, and
//! one gate instruction per line. This sits outside the estimation core
//! (the estimators consume [`mimir_ir::Circuit`] values directly), but the
//! round-trip property (parsing an emitted circuit reproduces its qubit
//! count and gate sequence) makes it a useful test boundary.
//!
//! # Example
//!
//! ```rust
//! use mimir_qasm::{emit, parse};
//!
//! let qasm = r#"
//!     OPENQASM 2.0;
//!     include "qelib1.inc";
//!     qreg q[2];
//!     h q[0];
//!     cx q[0], q[1];
//! "#;
//!
//! let circuit = parse(qasm).unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//!
//! let emitted = emit(&circuit).unwrap();
//! let reparsed = parse(&emitted).unwrap();
//! assert_eq!(reparsed.gates(), circuit.gates());
//! ```

pub mod emitter;
pub mod error;
pub mod lexer;
pub mod parser;

pub use emitter::emit;
pub use error::{QasmError, QasmResult};
pub use parser::parse;
