#![allow(non_snake_case)]

use ark_ec::PrimeGroup;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::{CryptoRng, RngCore};

use crate::crypto::groth_sahai::GsCrs;
use crate::crypto::hash::hash_to_g1;
use crate::crypto::message::Message;
use crate::crypto::random::{make_factor, make_factors};
use crate::crypto::{Scalar, G1, G2};
use crate::error::BallotError;

/// Label prepended to the canonical verification key encoding.
const VK_DOMAIN: &[u8] = b"beleniosrf-vk";

/// Public parameters of one election instance.
///
/// Built once by [`ElectionKeypair::generate`] and passed by reference into
/// every engine.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ElectionPublicParameters {
    pub g1: G1,
    pub g2: G2,
    /// ElGamal encryption key, `P = g1·d`.
    pub P: G1,
    /// Base absorbed by the signing key: `e(Y, g2) = e(z, X2)`.
    pub z: G1,
    /// `k + 1` bases; `usig[0]` offsets the message encoding.
    pub usig: Vec<G1>,
    pub gs: GsCrs,
}

impl ElectionPublicParameters {
    /// Number of bits in a vote.
    pub fn k(&self) -> usize {
        self.usig.len().saturating_sub(1)
    }

    /// F(m) = usig[0] + Σ usig[i]·m[i-1]
    pub fn encode_message(&self, m: &Message) -> Result<G1, BallotError> {
        self.check_message(m)?;
        Ok(m
            .bits()
            .iter()
            .zip(&self.usig[1..])
            .filter(|(bit, _)| **bit)
            .fold(self.usig[0], |acc, (_, u)| acc + *u))
    }

    pub fn check_message(&self, m: &Message) -> Result<(), BallotError> {
        if self.usig.is_empty() {
            return Err(BallotError::InvalidParameters("election has no message bases"));
        }
        if m.len() != self.k() {
            return Err(BallotError::MessageLength { expected: self.k(), found: m.len() });
        }
        Ok(())
    }

    /// A verification key is bound to exactly these `z` and `usig`; any other
    /// bases would let the voter choose their own message encoding.
    pub fn check_verification_key(&self, vk: &VerificationKey) -> Result<(), BallotError> {
        if vk.pp.z != self.z || vk.pp.usig != self.usig {
            return Err(BallotError::MalformedBallot(
                "verification key does not match the election",
            ));
        }
        Ok(())
    }

    /// H(serialize(vk)), the base of `c3` and of the `pi_V` relation.
    pub fn hash_verification_key(&self, vk: &VerificationKey) -> Result<G1, BallotError> {
        hash_to_g1(vk.to_bytes()?)
    }
}

/// The trustees' secret and the public parameters derived from it.
pub struct ElectionKeypair {
    pub decryption_key: Scalar,
    pub public: ElectionPublicParameters,
}

impl ElectionKeypair {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, k: usize) -> Result<Self, BallotError> {
        if k == 0 {
            return Err(BallotError::InvalidParameters("an election needs at least one bit"));
        }

        let g1 = G1::generator();
        let g2 = G2::generator();
        let d = make_factor(rng)?;
        let z = g1 * make_factor(rng)?;
        let usig = make_factors(rng, k + 1)?.into_iter().map(|x| g1 * x).collect();
        let gs = GsCrs::generate(rng)?;

        tracing::debug!(k, "generated election parameters");

        Ok(ElectionKeypair {
            decryption_key: d,
            public: ElectionPublicParameters { g1, g2, P: g1 * d, z, usig, gs },
        })
    }
}

/// The part of the election parameters a verification key is bound to.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerificationParameters {
    pub z: G1,
    pub usig: Vec<G1>,
}

#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct VerificationKey {
    pub X1: G1,
    pub X2: G2,
    pub pp: VerificationParameters,
}

impl VerificationKey {
    /// Canonical encoding hashed into `c3`: a domain label, then `X1`, `X2`,
    /// `z` and `usig` in compressed form (the vector with a u64 length prefix).
    pub fn to_bytes(&self) -> Result<Vec<u8>, BallotError> {
        let mut buf = Vec::from(VK_DOMAIN);
        self.X1.serialize_compressed(&mut buf)?;
        self.X2.serialize_compressed(&mut buf)?;
        self.pp.z.serialize_compressed(&mut buf)?;
        self.pp.usig.serialize_compressed(&mut buf)?;
        Ok(buf)
    }
}

/// The voter's long-term secret `Y = z·x`.
#[derive(Clone)]
pub struct SigningKey {
    pub Y: G1,
}

pub struct UserKeypair {
    pub vk: VerificationKey,
    pub sk: SigningKey,
}

impl UserKeypair {
    pub fn generate<R: RngCore + CryptoRng>(
        rng: &mut R,
        election: &ElectionPublicParameters,
    ) -> Result<Self, BallotError> {
        let x = make_factor(rng)?;
        let vk = VerificationKey {
            X1: election.g1 * x,
            X2: election.g2 * x,
            pp: VerificationParameters { z: election.z, usig: election.usig.clone() },
        };
        Ok(UserKeypair { vk, sk: SigningKey { Y: election.z * x } })
    }
}
