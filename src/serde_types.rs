use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::crypto::{Scalar, G1, G2};
use crate::error::BallotError;

/// Compressed canonical encoding of any ballot value.
pub fn serialize<T: CanonicalSerialize>(t: &T) -> Result<Vec<u8>, BallotError> {
    let mut buf = Vec::with_capacity(t.compressed_size());
    t.serialize_compressed(&mut buf)?;
    Ok(buf)
}

/// Inverse of [`serialize`]; rejects points off the curve or outside the
/// prime-order subgroup.
pub fn deserialize<T: CanonicalDeserialize>(buf: &[u8]) -> Result<T, BallotError> {
    Ok(T::deserialize_compressed(buf)?)
}

pub fn bytes_to_g1(bytes: &[u8]) -> Result<G1, BallotError> {
    deserialize(bytes)
}

pub fn bytes_to_g2(bytes: &[u8]) -> Result<G2, BallotError> {
    deserialize(bytes)
}

pub fn bytes_to_scalar(bytes: &[u8]) -> Result<Scalar, BallotError> {
    deserialize(bytes)
}
