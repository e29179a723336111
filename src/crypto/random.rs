use ark_ff::PrimeField;
use rand_core::{CryptoRng, RngCore};

use crate::crypto::Scalar;
use crate::error::BallotError;

/// Bytes drawn per scalar; twice the size of n so the reduction bias is negligible.
const FACTOR_BYTES: usize = 64;

/// Draws a fresh uniformly distributed scalar mod n.
///
/// A failing randomness source is reported, never replaced by a default.
pub fn make_factor<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar, BallotError> {
    let mut bytes = [0u8; FACTOR_BYTES];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(Scalar::from_le_bytes_mod_order(&bytes))
}

/// Draws `count` independent scalars.
pub fn make_factors<R: RngCore + CryptoRng>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<Scalar>, BallotError> {
    (0..count).map(|_| make_factor(rng)).collect()
}
