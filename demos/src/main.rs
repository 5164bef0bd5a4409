//! End-to-end estimation demo.
//!
//! Builds a few template circuits, targets each technology preset, and
//! prints the full estimation record as JSON. Run with:
//!
//! ```text
//! cargo run -p mimir-demos --bin demo-estimate
//! RUST_LOG=debug cargo run -p mimir-demos --bin demo-estimate
//! ```

use mimir_estimate::{EstimationOptions, estimate_resources};
use mimir_hal::HardwareArchitecture;
use mimir_ir::{Circuit, QubitId};
use mimir_qasm::emit;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let architectures = [
        HardwareArchitecture::superconducting("transmon-27", 27),
        HardwareArchitecture::trapped_ion("ion-trap-11", 11),
        HardwareArchitecture::photonic("photonic-8", 8),
    ];

    let mut bell_with_t = Circuit::bell().expect("bell template");
    bell_with_t.t(QubitId(0)).expect("t gate");

    let circuits = [
        Circuit::ghz(6).expect("ghz template"),
        Circuit::qft(5).expect("qft template"),
        bell_with_t,
    ];

    let options = EstimationOptions {
        enable_fault_tolerance: true,
        target_logical_error_rate: 1e-9,
        ..Default::default()
    };

    for circuit in &circuits {
        info!(circuit = circuit.name(), "serialized interchange form");
        match emit(circuit) {
            Ok(qasm) => println!("// {}\n{qasm}", circuit.name()),
            Err(err) => eprintln!("cannot serialize {}: {err}", circuit.name()),
        }

        for arch in &architectures {
            info!(
                circuit = circuit.name(),
                architecture = arch.name(),
                "estimating"
            );
            match estimate_resources(circuit, arch, &options) {
                Ok(result) => {
                    let json =
                        serde_json::to_string_pretty(&result).expect("result serializes");
                    println!("{json}");
                }
                Err(err) => eprintln!(
                    "estimation failed for {} on {}: {err}",
                    circuit.name(),
                    arch.name()
                ),
            }
        }
    }
}
