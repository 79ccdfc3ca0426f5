//! File encryption round trip over the flat word artifact
//!
//! The sender/receiver flow with the transport stripped away: encrypt a
//! file into the 64-bit-word ciphertext format, decrypt it back, and verify
//! the bytes survived.
//!
//! Run with:
//! ```bash
//! cargo run --example file_roundtrip
//! ```

use std::fs;

use residue_core::{ops::file, Executor, KeyPair};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    residue_tracing::init(residue_tracing::TracingConfig::for_local());

    let dir = tempfile::tempdir()?;
    let plain = dir.path().join("message.txt");
    let cipher = dir.path().join("message.cipher");
    let recovered = dir.path().join("message.out");

    let payload = b"attack at dawn (or whenever the reduction finishes)";
    fs::write(&plain, payload)?;

    // Keys are explicit values handed to each call; nothing is baked in.
    let pair = KeyPair::new(65537, 2753, 3233);
    let exec = Executor::new();

    let words = file::encrypt_file(&exec, &plain, &cipher, &pair.public)?;
    println!(
        "✓ Encrypted {} bytes into {} words ({} bytes on disk)",
        payload.len(),
        words,
        fs::metadata(&cipher)?.len()
    );

    let bytes = file::decrypt_file(&exec, &cipher, &recovered, &pair.private)?;
    println!("✓ Decrypted back into {bytes} bytes");

    assert_eq!(fs::read(&recovered)?, payload);
    println!("✓ Round trip preserved every byte");
    Ok(())
}
