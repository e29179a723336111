#![allow(non_snake_case)]

//! Ballot values. Every type here is immutable once built: the randomizer
//! derives new values, the verifier only reads.
//!
//! The canonical persisted shape follows field declaration order:
//!
//! ```text
//! Ballot      = { c: { c1, c2, c3, T, C: { C_r, C_2m, C_2m_square },
//!                      pi: { pi_r, pi_m, pi_M, pi_T, pi_V } },
//!                 sigma: { sigma1, sigma2, sigma3, sigma4, sigma5 } }
//! FirstBallot = { c0: { Ballot.c, a0, b0, proof }, sigma0 }
//! ```

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::crypto::groth_sahai::{Commitment2, LinearProof};
use crate::crypto::{Scalar, G1, G2};
use crate::error::BallotError;
use crate::serde_types::{deserialize, serialize};

/// ElGamal encryption of F(m) plus the terms binding it to the voter's key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ciphertext {
    /// g1·r
    pub c1: G1,
    /// F(m) + P·r
    pub c2: G1,
    /// H(vk)·r
    pub c3: G1,
    /// X1·r
    pub T: G1,
}

/// Groth-Sahai commitments in G2.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct CommitmentBundle {
    /// Commitment to the encryption randomness r.
    pub C_r: Commitment2,
    /// `C_2m[i]` commits to `m[i]`.
    pub C_2m: Vec<Commitment2>,
    /// `C_2m_square[i]` commits to `m[i]^2`.
    pub C_2m_square: Vec<Commitment2>,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ProofBundle {
    /// g1·r = c1
    pub pi_r: LinearProof,
    /// `pi_m[i]`: m[i] = m[i]^2, i.e. m[i] is a bit.
    pub pi_m: Vec<LinearProof>,
    /// c2 - usig[0] = Σ usig[i]·m[i-1] + P·r
    pub pi_M: LinearProof,
    /// X1·r = T
    pub pi_T: LinearProof,
    /// H(vk)·r = c3
    pub pi_V: LinearProof,
}

/// A ciphertext with its commitments and proofs.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct EncryptedVote {
    pub ciphertext: Ciphertext,
    pub C: CommitmentBundle,
    pub pi: ProofBundle,
}

/// Schnorr-style proof that the first ciphertext carries the baseline encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ZeroProof {
    pub a0: G1,
    pub b0: G1,
    pub proof: Scalar,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct FirstEncryptedVote {
    pub vote: EncryptedVote,
    pub zero: ZeroProof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Signature {
    pub sigma1: G1,
    pub sigma2: G1,
    pub sigma3: G1,
    pub sigma4: G2,
    pub sigma5: G1,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Ballot {
    pub c: EncryptedVote,
    pub sigma: Signature,
}

/// The voter's first ballot; it is the only one carrying a [`ZeroProof`].
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct FirstBallot {
    pub c0: FirstEncryptedVote,
    pub sigma0: Signature,
}

impl EncryptedVote {
    /// Checks that every per-bit vector has exactly k entries.
    pub fn check_shape(&self, k: usize) -> Result<(), BallotError> {
        if self.C.C_2m.len() != k {
            return Err(BallotError::MalformedBallot("C_2m does not have k commitments"));
        }
        if self.C.C_2m_square.len() != k {
            return Err(BallotError::MalformedBallot("C_2m_square does not have k commitments"));
        }
        if self.pi.pi_m.len() != k {
            return Err(BallotError::MalformedBallot("pi_m does not have k proofs"));
        }
        Ok(())
    }
}

impl Ballot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, BallotError> {
        serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BallotError> {
        deserialize(bytes)
    }
}

impl FirstBallot {
    pub fn to_bytes(&self) -> Result<Vec<u8>, BallotError> {
        serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BallotError> {
        deserialize(bytes)
    }
}
