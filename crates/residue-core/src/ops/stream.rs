//! Byte-stream transform: one kernel call per unit
//!
//! Encryption maps each input byte `b` to the 64-bit word
//! `b^e mod n`; decryption maps each word `c` back through `c^d mod n` and
//! keeps the low 8 bits. Units are processed in input order and never
//! reordered in the output.
//!
//! # Truncation limitation
//!
//! Decryption emits one byte per word by truncating the decrypted value to
//! its low 8 bits. With a matched key pair over a modulus whose decrypted
//! values stay below 256 this is lossless; with arbitrary exponent/modulus
//! pairs it silently loses the high bits. This is a latent defect of
//! byte-granularity units, kept and documented rather than papered over:
//! deployments with realistic moduli must treat each plaintext unit as a
//! block sized to the modulus, not as a single byte.

use crate::error::Result;
use crate::executor::Executor;
use crate::keys::{PrivateKey, PublicKey};

/// Encrypt a byte sequence into 64-bit ciphertext words.
///
/// One kernel call per byte; the output carries exactly one word per input
/// byte, in input order. A failed kernel call aborts the transform and
/// discards the partial output.
#[tracing::instrument(skip_all, level = "debug", fields(bytes = plaintext.len()))]
pub fn encrypt(exec: &Executor, plaintext: &[u8], key: &PublicKey) -> Result<Vec<u64>> {
    let mut words = Vec::with_capacity(plaintext.len());
    for &byte in plaintext {
        words.push(exec.mod_exp(u64::from(byte), key.exponent, key.modulus)?);
    }
    Ok(words)
}

/// Decrypt 64-bit ciphertext words back into bytes.
///
/// One kernel call per word; each decrypted value contributes its low 8
/// bits to the output (see the module-level truncation note).
#[tracing::instrument(skip_all, level = "debug", fields(words = ciphertext.len()))]
pub fn decrypt(exec: &Executor, ciphertext: &[u64], key: &PrivateKey) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(ciphertext.len());
    for &word in ciphertext {
        let value = exec.mod_exp(word, key.exponent, key.modulus)?;
        bytes.push(value as u8);
    }
    Ok(bytes)
}
