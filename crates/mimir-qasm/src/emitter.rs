//! Emitter for the OpenQASM 2.0 interchange subset.

use std::fmt::Write;

use mimir_ir::{Circuit, GateKind};

use crate::error::{QasmError, QasmResult};

/// Serialize a circuit to QASM 2.0 text.
///
/// Emits the version header, the `qelib1.inc` include, one `qreg`
/// declaration, and one instruction per gate. Only standard gates are
/// representable; a custom gate is an emission error. Parameters are
/// written as plain decimal floats, which the parser reads back exactly.
pub fn emit(circuit: &Circuit) -> QasmResult<String> {
    let mut out = String::new();
    out.push_str("OPENQASM 2.0;\n");
    out.push_str("include \"qelib1.inc\";\n");
    let _ = writeln!(out, "qreg q[{}];", circuit.num_qubits());

    for gate in circuit.gates() {
        match &gate.kind {
            GateKind::Standard(std_gate) => {
                out.push_str(std_gate.name());
                let params = std_gate.params();
                if !params.is_empty() {
                    let rendered: Vec<String> = params.iter().map(|p| format!("{p}")).collect();
                    let _ = write!(out, "({})", rendered.join(", "));
                }
                let operands: Vec<String> =
                    gate.qubits.iter().map(|q| format!("q[{}]", q.0)).collect();
                let _ = writeln!(out, " {};", operands.join(", "));
            }
            GateKind::Custom(custom) => {
                return Err(QasmError::UnsupportedGate(custom.name.clone()));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimir_ir::{CustomGate, Gate, QubitId};

    #[test]
    fn test_emit_bell() {
        let circuit = Circuit::bell().unwrap();
        let qasm = emit(&circuit).unwrap();
        assert!(qasm.starts_with("OPENQASM 2.0;\n"));
        assert!(qasm.contains("qreg q[2];"));
        assert!(qasm.contains("h q[0];"));
        assert!(qasm.contains("cx q[0], q[1];"));
    }

    #[test]
    fn test_emit_parameterized() {
        let mut circuit = Circuit::new("params", 1).unwrap();
        circuit.rx(0.5, QubitId(0)).unwrap();
        let qasm = emit(&circuit).unwrap();
        assert!(qasm.contains("rx(0.5) q[0];"));
    }

    #[test]
    fn test_emit_custom_gate_rejected() {
        let mut circuit = Circuit::new("custom", 2).unwrap();
        circuit
            .push(Gate::new(CustomGate::new("ecr", 2), [QubitId(0), QubitId(1)]).unwrap())
            .unwrap();
        let err = emit(&circuit).unwrap_err();
        assert!(matches!(err, QasmError::UnsupportedGate(name) if name == "ecr"));
    }
}
