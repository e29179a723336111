#![allow(non_snake_case)]

use rand_core::{CryptoRng, RngCore};

use crate::crypto::ballot::{
    Ballot, Ciphertext, CommitmentBundle, EncryptedVote, FirstBallot, ProofBundle, Signature,
};
use crate::crypto::groth_sahai::{GsCrs, LinearProof};
use crate::crypto::keys::{ElectionPublicParameters, VerificationKey};
use crate::crypto::random::make_factor;
use crate::crypto::{Scalar, G1};
use crate::error::BallotError;

const LOG_TARGET: &str = "beleniosrf::crypto::randomizer";

/// Re-randomizes ballots using public material only.
///
/// The input is never modified. The output verifies under the same
/// verification key and encrypts the same message. `C_2m`, `C_2m_square`
/// and `pi_m` are copied unchanged, so they are identical across every
/// randomization of one ballot.
pub struct Randomizer<'a> {
    election: &'a ElectionPublicParameters,
}

/// Fresh randomness of one randomization.
struct Deltas {
    r: Scalar,
    s: Scalar,
    rand: Scalar,
}

impl<'a> Randomizer<'a> {
    pub fn new(election: &'a ElectionPublicParameters) -> Self {
        Randomizer { election }
    }

    pub fn randomize<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        vk: &VerificationKey,
        b: &Ballot,
    ) -> Result<Ballot, BallotError> {
        tracing::debug!(target: LOG_TARGET, "randomizing ballot");
        self.randomize_parts(rng, vk, &b.c, &b.sigma)
    }

    /// The zero proof is consumed by the first verification and dropped here.
    pub fn randomize_first<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        vk: &VerificationKey,
        b: &FirstBallot,
    ) -> Result<Ballot, BallotError> {
        tracing::debug!(target: LOG_TARGET, "randomizing first ballot");
        self.randomize_parts(rng, vk, &b.c0.vote, &b.sigma0)
    }

    fn randomize_parts<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        vk: &VerificationKey,
        c: &EncryptedVote,
        sigma: &Signature,
    ) -> Result<Ballot, BallotError> {
        let k = self.election.k();
        c.check_shape(k)?;
        self.election.check_verification_key(vk)?;

        let deltas = Deltas {
            r: make_factor(rng)?,
            s: make_factor(rng)?,
            rand: make_factor(rng)?,
        };
        let Hvk = self.election.hash_verification_key(vk)?;

        let ciphertext = self.randomize_ciphertext(vk, &Hvk, &c.ciphertext, &deltas);
        let sigma = self.randomize_signature(&c.ciphertext, sigma, &deltas);
        let (C, pi) = self.randomize_proofs(vk, &Hvk, &c.C, &c.pi, &deltas)?;

        tracing::trace!(target: LOG_TARGET, k, "ballot randomized");
        Ok(Ballot { c: EncryptedVote { ciphertext, C, pi }, sigma })
    }

    fn randomize_ciphertext(
        &self,
        vk: &VerificationKey,
        Hvk: &G1,
        c: &Ciphertext,
        d: &Deltas,
    ) -> Ciphertext {
        let pp = self.election;
        Ciphertext {
            c1: c.c1 + pp.g1 * d.r,
            c2: c.c2 + pp.P * d.r,
            c3: c.c3 + *Hvk * d.r,
            T: c.T + vk.X1 * d.r,
        }
    }

    /// Shifts the signing randomness to s + s' against the shifted ciphertext.
    /// `c` is the ciphertext before randomization.
    fn randomize_signature(&self, c: &Ciphertext, sigma: &Signature, d: &Deltas) -> Signature {
        let pp = self.election;
        let rs = d.r * d.s;

        Signature {
            sigma1: [c.c1 * d.s, sigma.sigma3 * d.r, pp.g1 * rs]
                .into_iter()
                .fold(sigma.sigma1, |acc, term| acc + term),
            sigma2: [c.c2 * d.s, sigma.sigma5 * d.r, pp.P * rs]
                .into_iter()
                .fold(sigma.sigma2, |acc, term| acc + term),
            sigma3: sigma.sigma3 + pp.g1 * d.s,
            sigma4: sigma.sigma4 + pp.g2 * d.s,
            sigma5: sigma.sigma5 + pp.P * d.s,
        }
    }

    /// Adds a commitment to r' into `C_r` and a delta proof into each proof
    /// that mentions r. Bit commitments and `pi_m` are carried over.
    fn randomize_proofs(
        &self,
        vk: &VerificationKey,
        Hvk: &G1,
        C: &CommitmentBundle,
        pi: &ProofBundle,
        d: &Deltas,
    ) -> Result<(CommitmentBundle, ProofBundle), BallotError> {
        let pp = self.election;
        let gs = &pp.gs;

        let commitment_to_r_prime = gs.commit_scalars_in_g2(&[d.r], &[d.rand])?[0];

        // m does not change: its commitments get zero randomness
        let bases_M: Vec<G1> = pp.usig[1..].iter().copied().chain([pp.P]).collect();
        let mut rand_M = vec![Scalar::from(0u64); bases_M.len() - 1];
        rand_M.push(d.rand);

        let C_prime = CommitmentBundle {
            C_r: C.C_r + commitment_to_r_prime,
            C_2m: C.C_2m.clone(),
            C_2m_square: C.C_2m_square.clone(),
        };
        let pi_prime = ProofBundle {
            pi_r: randomized_proof(gs, &pi.pi_r, &[pp.g1], &[d.rand])?,
            pi_m: pi.pi_m.clone(),
            pi_M: randomized_proof(gs, &pi.pi_M, &bases_M, &rand_M)?,
            pi_T: randomized_proof(gs, &pi.pi_T, &[vk.X1], &[d.rand])?,
            pi_V: randomized_proof(gs, &pi.pi_V, &[*Hvk], &[d.rand])?,
        };

        Ok((C_prime, pi_prime))
    }
}

/// `original + delta`, the delta proving the same relation for r' under `bases`.
fn randomized_proof(
    gs: &GsCrs,
    original: &LinearProof,
    bases: &[G1],
    rand: &[Scalar],
) -> Result<LinearProof, BallotError> {
    let delta = gs.prove_multi_scalar_linear(bases, rand)?;
    Ok(*original + delta)
}
