//! Ciphertext artifact at the file boundary
//!
//! A ciphertext file is a flat concatenation of 64-bit words in the host's
//! native byte order, one word per encrypted input byte: no header, length
//! prefix, or checksum. The format is fragile (producer and consumer must
//! agree on byte order and word width), so it is pinned here bit-exactly for
//! interchange with other producers and consumers of the same artifact.
//!
//! I/O failures abort the transform for the stream and surface as
//! [`Error::Io`](crate::Error::Io); output already written to the
//! destination is not retracted.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::keys::{PrivateKey, PublicKey};
use crate::ops::stream;

/// Width in bytes of one ciphertext word.
pub const WORD_SIZE: usize = std::mem::size_of::<u64>();

/// Encrypt `input` into the flat word artifact at `output`.
///
/// Returns the number of ciphertext words written (one per plaintext byte).
pub fn encrypt_file(
    exec: &Executor,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    key: &PublicKey,
) -> Result<usize> {
    let plaintext = fs::read(input.as_ref())?;
    let words = stream::encrypt(exec, &plaintext, key)?;

    let mut writer = BufWriter::new(File::create(output.as_ref())?);
    writer.write_all(bytemuck::cast_slice(&words))?;
    writer.flush()?;

    tracing::debug!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        words = words.len(),
        "encrypted file"
    );
    Ok(words.len())
}

/// Decrypt the flat word artifact at `input` into plaintext bytes at `output`.
///
/// Returns the number of plaintext bytes written (one per ciphertext word).
///
/// # Errors
///
/// Returns [`Error::MalformedCiphertext`] when the artifact's length is not
/// a whole number of words. The format has no framing, so a truncated file
/// is the only detectable corruption.
pub fn decrypt_file(
    exec: &Executor,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    key: &PrivateKey,
) -> Result<usize> {
    let raw = fs::read(input.as_ref())?;
    if raw.len() % WORD_SIZE != 0 {
        return Err(Error::MalformedCiphertext(raw.len()));
    }
    let words: Vec<u64> = bytemuck::pod_collect_to_vec(&raw);
    let bytes = stream::decrypt(exec, &words, key)?;
    fs::write(output.as_ref(), &bytes)?;

    tracing::debug!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        bytes = bytes.len(),
        "decrypted file"
    );
    Ok(bytes.len())
}
