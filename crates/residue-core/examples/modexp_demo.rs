//! Demonstration of the kernel across every backend
//!
//! Run with:
//! ```bash
//! cargo run --example modexp_demo
//! ```

use residue_core::{BackendType, Executor, LaunchConfig, Partition};

fn main() -> residue_core::Result<()> {
    residue_tracing::init(residue_tracing::TracingConfig::for_local());

    println!("=== Bit-Parallel Modular Exponentiation Demo ===\n");

    let (base, exponent, modulus) = (5u64, 117u64, 19u64);
    println!("Computing {base}^{exponent} mod {modulus}:\n");

    for backend in [BackendType::Serial, BackendType::Threaded, BackendType::Rayon] {
        for workers in [1u32, 2, 4, 8] {
            let exec = Executor::with_backend(backend, LaunchConfig::new(workers, Partition::Striped));
            let result = exec.mod_exp(base, exponent, modulus)?;
            println!("  {:>8} backend, {workers} worker(s): {result}", backend.to_string());
            assert_eq!(result, 1);
        }
    }

    println!("\n✓ Every backend and worker count agrees with the sequential reference");
    Ok(())
}
