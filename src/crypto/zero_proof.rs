#![allow(non_snake_case)]

use rand_core::{CryptoRng, RngCore};

use crate::crypto::ballot::ZeroProof;
use crate::crypto::hash::hash_points_to_scalar;
use crate::crypto::keys::ElectionPublicParameters;
use crate::crypto::random::make_factor;
use crate::crypto::{Scalar, G1};
use crate::error::BallotError;

/// The nizk proof is used to prove that the first ciphertext (c1, c2) satisfies
/// c1 = g1·r and c2 = usig[0] + P·r for a randomness r known to the prover,
/// i.e. that it encrypts the baseline encoding F(0) = usig[0].

/// Domain separator for the zero proof challenge
pub const DOMAIN_NIZK_PROOF_OF_ZERO_CHALLENGE: &str = "beleniosrf-zk-proof-of-zero-challenge";

const LOG_TARGET: &str = "beleniosrf::crypto::zero_proof";

/// ch = SHA-512(domain, a0, b0, c1, c2) mod n
fn zero_proof_challenge(a0: &G1, b0: &G1, c1: &G1, c2: &G1) -> Result<Scalar, BallotError> {
    hash_points_to_scalar(
        DOMAIN_NIZK_PROOF_OF_ZERO_CHALLENGE,
        &[("a0", a0), ("b0", b0), ("c1", c1), ("c2", c2)],
    )
}

pub fn prove_zero<R: RngCore + CryptoRng>(
    rng: &mut R,
    pp: &ElectionPublicParameters,
    c1: &G1,
    c2: &G1,
    r: &Scalar,
) -> Result<ZeroProof, BallotError> {
    let s = make_factor(rng)?;
    let a0 = pp.g1 * s;
    let b0 = pp.P * s;

    let ch = zero_proof_challenge(&a0, &b0, c1, c2)?;
    let proof = s + ch * r;

    tracing::trace!(target: LOG_TARGET, "zero proof generated");
    Ok(ZeroProof { a0, b0, proof })
}

/// Checks g1·proof = a0 + c1·ch and P·proof + usig[0]·ch = c2·ch + b0.
pub fn verify_zero(
    pp: &ElectionPublicParameters,
    c1: &G1,
    c2: &G1,
    zero: &ZeroProof,
) -> Result<bool, BallotError> {
    let u0 = pp
        .usig
        .first()
        .ok_or(BallotError::InvalidParameters("election has no message bases"))?;
    let ch = zero_proof_challenge(&zero.a0, &zero.b0, c1, c2)?;

    let v1 = pp.g1 * zero.proof == zero.a0 + *c1 * ch;
    let v2 = pp.P * zero.proof + *u0 * ch == *c2 * ch + zero.b0;

    Ok(v1 && v2)
}
