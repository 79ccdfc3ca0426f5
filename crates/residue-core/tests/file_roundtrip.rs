//! File-boundary round trips over the flat word artifact

use std::fs;

use residue_core::{ops::file, ops::stream, Error, Executor, KeyPair};

const TOY_PAIR: KeyPair = KeyPair::new(65537, 2753, 3233);

#[test]
fn file_round_trip_recovers_the_plaintext() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    let cipher = dir.path().join("cipher.bin");
    let recovered = dir.path().join("recovered.bin");

    let mut payload: Vec<u8> = (0..=255).collect();
    payload.extend_from_slice(b"the quick brown fox");
    fs::write(&plain, &payload).unwrap();

    let exec = Executor::new();
    let words = file::encrypt_file(&exec, &plain, &cipher, &TOY_PAIR.public).unwrap();
    assert_eq!(words, payload.len());
    // One native-endian word per plaintext byte, nothing else.
    assert_eq!(fs::metadata(&cipher).unwrap().len(), (payload.len() * file::WORD_SIZE) as u64);

    let bytes = file::decrypt_file(&exec, &cipher, &recovered, &TOY_PAIR.private).unwrap();
    assert_eq!(bytes, payload.len());
    assert_eq!(fs::read(&recovered).unwrap(), payload);
}

#[test]
fn artifact_words_match_the_in_memory_transform() {
    // The file is the in-memory word sequence, bit-exactly.
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.bin");
    let cipher = dir.path().join("cipher.bin");
    fs::write(&plain, b"interchange").unwrap();

    let exec = Executor::new();
    file::encrypt_file(&exec, &plain, &cipher, &TOY_PAIR.public).unwrap();

    let raw = fs::read(&cipher).unwrap();
    let from_file: Vec<u64> = bytemuck::pod_collect_to_vec(&raw);
    let from_memory = stream::encrypt(&exec, b"interchange", &TOY_PAIR.public).unwrap();
    assert_eq!(from_file, from_memory);
}

#[test]
fn truncated_artifacts_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cipher = dir.path().join("truncated.bin");
    let out = dir.path().join("out.bin");
    fs::write(&cipher, [0u8; 15]).unwrap();

    let exec = Executor::new();
    let err = file::decrypt_file(&exec, &cipher, &out, &TOY_PAIR.private).unwrap_err();
    assert!(matches!(err, Error::MalformedCiphertext(15)));
}

#[test]
fn missing_input_surfaces_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let exec = Executor::new();
    let err = file::encrypt_file(
        &exec,
        dir.path().join("does-not-exist"),
        dir.path().join("out.bin"),
        &TOY_PAIR.public,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn empty_file_round_trips_to_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("empty");
    let cipher = dir.path().join("empty.cipher");
    let recovered = dir.path().join("empty.out");
    fs::write(&plain, []).unwrap();

    let exec = Executor::new();
    assert_eq!(file::encrypt_file(&exec, &plain, &cipher, &TOY_PAIR.public).unwrap(), 0);
    assert_eq!(file::decrypt_file(&exec, &cipher, &recovered, &TOY_PAIR.private).unwrap(), 0);
    assert!(fs::read(&recovered).unwrap().is_empty());
}
