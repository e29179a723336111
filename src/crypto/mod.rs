use ark_bls12_381::Bls12_381;
use ark_ec::pairing::PairingOutput;

pub mod pairing;
pub mod random;
pub mod hash;
pub mod groth_sahai;
pub mod message;
pub mod keys;
pub mod ballot;
pub mod zero_proof;
pub mod vote_encryptor;
pub mod ballot_verifier;
pub mod randomizer;
pub mod contracts;

/// Integer modulo the election group order n.
pub type Scalar = ark_bls12_381::Fr;
pub type G1 = ark_bls12_381::G1Projective;
pub type G2 = ark_bls12_381::G2Projective;
/// Target group of the pairing, written additively by arkworks.
pub type Gt = PairingOutput<Bls12_381>;
