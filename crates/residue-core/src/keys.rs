//! Key material as plain values
//!
//! Keys are value types passed into every transform call. There is no
//! process-wide key state: two executors can encrypt under different keys
//! concurrently without coordination.
//!
//! Key *construction* is an external concern. This crate performs no key
//! generation and no primality or consistency checking: a mismatched
//! `(e, d, n)` triple simply fails to round-trip, it is not detected here.

use serde::{Deserialize, Serialize};

/// Public half of a key pair: the encryption exponent and the shared modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey {
    /// Encryption exponent `e`.
    pub exponent: u64,
    /// Shared modulus `n`.
    pub modulus: u64,
}

/// Private half of a key pair: the decryption exponent and the shared modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrivateKey {
    /// Decryption exponent `d`.
    pub exponent: u64,
    /// Shared modulus `n`.
    pub modulus: u64,
}

/// A matched public/private pair over one modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

impl KeyPair {
    /// Assemble a pair from the exponents `e`, `d` and the modulus `n`.
    pub const fn new(public_exponent: u64, private_exponent: u64, modulus: u64) -> Self {
        Self {
            public: PublicKey {
                exponent: public_exponent,
                modulus,
            },
            private: PrivateKey {
                exponent: private_exponent,
                modulus,
            },
        }
    }
}
