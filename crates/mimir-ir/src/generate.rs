//! Named template circuit generators.
//!
//! These produce the workload circuits the estimator is typically pointed
//! at: search, variational ansatz, and randomized benchmarking shapes. Each
//! generator returns an ordinary validated [`Circuit`].

use rand::Rng;
use std::f64::consts::PI;

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::qubit::QubitId;

/// Entangling-layer pattern for the hardware-efficient ansatz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entanglement {
    /// Nearest-neighbor chain: CX(i, i+1).
    Linear,
    /// Chain plus the closing CX(n-1, 0) edge.
    Circular,
    /// Every qubit pair entangled.
    Full,
}

/// Generate a simplified Grover search circuit.
///
/// Superposition, a phase oracle on the last qubit, and one diffusion
/// block. Not a tuned implementation, just a representative gate mix for
/// resource estimation.
pub fn grover(n_qubits: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::new("grover", n_qubits)?;
    let last = QubitId(n_qubits - 1);

    // Initialize superposition
    for i in 0..n_qubits {
        circuit.h(QubitId(i))?;
    }

    // Oracle (simplified)
    circuit.z(last)?;

    // Diffusion operator
    for i in 0..n_qubits {
        circuit.h(QubitId(i))?;
        circuit.x(QubitId(i))?;
    }
    circuit.h(last)?;
    for i in 0..n_qubits.saturating_sub(1) {
        circuit.cx(QubitId(i), last)?;
    }
    circuit.h(last)?;
    for i in 0..n_qubits {
        circuit.x(QubitId(i))?;
        circuit.h(QubitId(i))?;
    }

    Ok(circuit)
}

/// Generate a hardware-efficient variational ansatz.
///
/// Alternating layers of parameterized Ry rotations and entangling CX
/// gates, closed by a final Rz layer. The rotation angles are fixed
/// placeholders; only the gate mix matters for estimation.
pub fn hardware_efficient_ansatz(
    n_qubits: u32,
    layers: u32,
    entanglement: Entanglement,
) -> IrResult<Circuit> {
    let mut circuit = Circuit::new("hardware-efficient-ansatz", n_qubits)?;

    // State preparation
    for i in 0..n_qubits {
        circuit.h(QubitId(i))?;
    }

    for layer in 0..layers {
        // Parameterized single-qubit rotations
        let angle = PI / 4.0 * f64::from(layer + 1) / f64::from(layers.max(1));
        for i in 0..n_qubits {
            circuit.ry(angle, QubitId(i))?;
        }

        // Entangling layer
        if n_qubits >= 2 {
            match entanglement {
                Entanglement::Linear => {
                    for i in 0..n_qubits - 1 {
                        circuit.cx(QubitId(i), QubitId(i + 1))?;
                    }
                }
                Entanglement::Circular => {
                    for i in 0..n_qubits - 1 {
                        circuit.cx(QubitId(i), QubitId(i + 1))?;
                    }
                    circuit.cx(QubitId(n_qubits - 1), QubitId(0))?;
                }
                Entanglement::Full => {
                    for i in 0..n_qubits {
                        for j in (i + 1)..n_qubits {
                            circuit.cx(QubitId(i), QubitId(j))?;
                        }
                    }
                }
            }
        }
    }

    // Final parameterized rotations
    for i in 0..n_qubits {
        let angle = PI / 2.0 * f64::from(i + 1) / f64::from(n_qubits);
        circuit.rz(angle, QubitId(i))?;
    }

    Ok(circuit)
}

/// Generate a QAOA MaxCut circuit on a ring interaction graph.
///
/// Each step applies the problem Hamiltonian as CX·Rz·CX blocks over ring
/// edges, then the Rx mixer layer.
pub fn qaoa_maxcut(n_qubits: u32, p_steps: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::new("qaoa-maxcut", n_qubits)?;

    for i in 0..n_qubits {
        circuit.h(QubitId(i))?;
    }

    for step in 0..p_steps {
        let gamma = 0.1 + 0.8 * f64::from(step) / f64::from(p_steps.max(1));

        if n_qubits >= 2 {
            for i in 0..n_qubits {
                let j = (i + 1) % n_qubits;
                if i == j {
                    continue;
                }
                circuit.cx(QubitId(i), QubitId(j))?;
                circuit.rz(2.0 * gamma, QubitId(j))?;
                circuit.cx(QubitId(i), QubitId(j))?;
            }
        }

        let beta = PI / f64::from(p_steps + 1) * f64::from(step + 1);
        for i in 0..n_qubits {
            circuit.rx(2.0 * beta, QubitId(i))?;
        }
    }

    Ok(circuit)
}

/// Generate a random circuit with the given gate count.
///
/// Roughly 30% of gates are CX on distinct random qubits (when the register
/// allows), the rest drawn from a small single-qubit vocabulary with random
/// angles for the rotations.
pub fn random_circuit(n_qubits: u32, n_gates: usize, rng: &mut impl Rng) -> IrResult<Circuit> {
    let mut circuit = Circuit::new("random", n_qubits)?;

    for _ in 0..n_gates {
        if n_qubits > 1 && rng.gen_bool(0.3) {
            let q1 = rng.gen_range(0..n_qubits);
            let mut q2 = rng.gen_range(0..n_qubits);
            while q2 == q1 {
                q2 = rng.gen_range(0..n_qubits);
            }
            circuit.cx(QubitId(q1), QubitId(q2))?;
        } else {
            let q = QubitId(rng.gen_range(0..n_qubits));
            match rng.gen_range(0..8) {
                0 => circuit.h(q)?,
                1 => circuit.x(q)?,
                2 => circuit.y(q)?,
                3 => circuit.z(q)?,
                4 => circuit.rz(rng.gen_range(0.0..2.0 * PI), q)?,
                5 => circuit.ry(rng.gen_range(0.0..2.0 * PI), q)?,
                6 => circuit.t(q)?,
                _ => circuit.s(q)?,
            };
        }
    }

    Ok(circuit)
}
