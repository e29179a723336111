use ark_bls12_381::g1::Config as G1Config;
use ark_ec::{
    hashing::{
        curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher, HashToCurve,
    },
    short_weierstrass::Projective,
};
use ark_ff::{field_hashers::DefaultFieldHasher, PrimeField};
use ark_serialize::CanonicalSerialize;
use sha2::{Digest, Sha256, Sha512};

use crate::crypto::{Scalar, G1};
use crate::error::BallotError;

/// Domain separation tag for H: bytes -> G1.
pub const DST_G1: &str = "BELENIOSRF-V01-CS01-with-BLS12381G1_XMD:SHA-256_SSWU_RO_";

/// H: hashes arbitrary bytes onto G1.
pub fn hash_to_g1(msg: impl AsRef<[u8]>) -> Result<G1, BallotError> {
    let g1_mapper = MapToCurveBasedHasher::<
        Projective<G1Config>,
        DefaultFieldHasher<Sha256, 128>,
        WBMap<G1Config>,
    >::new(DST_G1.as_bytes())
    .map_err(|e| BallotError::HashToCurve(e.to_string()))?;

    g1_mapper
        .hash(msg.as_ref())
        .map(G1::from)
        .map_err(|e| BallotError::HashToCurve(e.to_string()))
}

/// SHA-512 over a domain separator and a fixed-arity tuple of labelled
/// G1 points, read big-endian and reduced mod n.
///
/// Every point is written in its 48-byte compressed form, preceded by its
/// label, in the order given.
pub fn hash_points_to_scalar(
    domain: &str,
    points: &[(&str, &G1)],
) -> Result<Scalar, BallotError> {
    let mut transcript: Vec<u8> = Vec::from(domain);
    for (label, point) in points {
        transcript.extend_from_slice(label.as_bytes());
        point.serialize_compressed(&mut transcript)?;
    }

    let digest = Sha512::digest(&transcript);
    Ok(Scalar::from_be_bytes_mod_order(&digest))
}
