#![allow(non_snake_case)]

use ark_ff::Zero;
use rayon::prelude::*;

use crate::crypto::ballot::{Ballot, Ciphertext, EncryptedVote, FirstBallot, Signature};
use crate::crypto::keys::{ElectionPublicParameters, VerificationKey};
use crate::crypto::pairing::{e, ee};
use crate::crypto::zero_proof::verify_zero;
use crate::crypto::G1;
use crate::error::BallotError;

const LOG_TARGET: &str = "beleniosrf::crypto::ballot_verifier";

/// Public verification of ballots.
///
/// `Ok(false)` means the ballot is invalid; which check failed is not
/// reported. `Err` is reserved for ballots whose shape does not match the
/// election and for verification keys carrying other election bases.
pub struct BallotVerifier<'a> {
    election: &'a ElectionPublicParameters,
}

impl<'a> BallotVerifier<'a> {
    pub fn new(election: &'a ElectionPublicParameters) -> Self {
        BallotVerifier { election }
    }

    pub fn verify_first_ballot(
        &self,
        vk: &VerificationKey,
        b: &FirstBallot,
    ) -> Result<bool, BallotError> {
        tracing::debug!(target: LOG_TARGET, "verifying first ballot");
        let vote = &b.c0.vote;
        let valid = self.verify_proofs(vk, vote)?
            && verify_zero(self.election, &vote.ciphertext.c1, &vote.ciphertext.c2, &b.c0.zero)?
            && self.verify_signature(vk, &vote.ciphertext, &b.sigma0);

        if !valid {
            tracing::debug!(target: LOG_TARGET, "ballot rejected");
        }
        Ok(valid)
    }

    pub fn verify_plus(&self, vk: &VerificationKey, b: &Ballot) -> Result<bool, BallotError> {
        tracing::debug!(target: LOG_TARGET, "verifying ballot");
        let valid = self.verify_proofs(vk, &b.c)?
            && self.verify_signature(vk, &b.c.ciphertext, &b.sigma);

        if !valid {
            tracing::debug!(target: LOG_TARGET, "ballot rejected");
        }
        Ok(valid)
    }

    /// Verifies independent ballots in parallel, one result per ballot.
    pub fn verify_plus_batch(
        &self,
        ballots: &[(VerificationKey, Ballot)],
    ) -> Result<Vec<bool>, BallotError> {
        ballots
            .par_iter()
            .map(|(vk, b)| self.verify_plus(vk, b))
            .collect()
    }

    fn verify_proofs(&self, vk: &VerificationKey, c: &EncryptedVote) -> Result<bool, BallotError> {
        let pp = self.election;
        let k = pp.k();
        c.check_shape(k)?;
        pp.check_verification_key(vk)?;

        let gs = &pp.gs;
        let Ciphertext { c1, c2, c3, T } = c.ciphertext;
        let pi = &c.pi;
        let C = &c.C;

        // g1·r = c1
        if !gs.verify_multi_scalar_linear(&[pp.g1], &[C.C_r], c1, &pi.pi_r) {
            return Ok(false);
        }

        // X1·r = T
        if !gs.verify_multi_scalar_linear(&[vk.X1], &[C.C_r], T, &pi.pi_T) {
            return Ok(false);
        }

        // H(vk)·r = c3
        let Hvk = pp.hash_verification_key(vk)?;
        if !gs.verify_multi_scalar_linear(&[Hvk], &[C.C_r], c3, &pi.pi_V) {
            return Ok(false);
        }

        // usig[0] + Σ usig[i]·m[i-1] + P·r = c2
        let A: Vec<G1> = pp.usig[1..].iter().copied().chain([pp.P]).collect();
        let d: Vec<_> = C.C_2m.iter().copied().chain([C.C_r]).collect();
        if !gs.verify_multi_scalar_linear(&A, &d, c2 - pp.usig[0], &pi.pi_M) {
            return Ok(false);
        }

        // g1·m_i - g1·m_i^2 = 0
        let A = [pp.g1, -pp.g1];
        let bits_valid = C
            .C_2m
            .iter()
            .zip(&C.C_2m_square)
            .zip(&pi.pi_m)
            .all(|((c_m, c_sq), proof)| {
                gs.verify_multi_scalar_linear(&A, &[*c_m, *c_sq], G1::zero(), proof)
            });

        Ok(bits_valid)
    }

    /// The four pairing equations binding the signature to the ciphertext and vk.
    fn verify_signature(&self, vk: &VerificationKey, c: &Ciphertext, sigma: &Signature) -> bool {
        let pp = self.election;
        let Signature { sigma1, sigma2, sigma3, sigma4, sigma5 } = *sigma;

        // e(σ1, g2) = e(c1, σ4)
        e(sigma1, pp.g2) == e(c.c1, sigma4)
            // e(σ2, g2) = e(z, X2) e(c2, σ4)
            && e(sigma2, pp.g2) == ee(pp.z, vk.X2, c.c2, sigma4)
            // e(σ3, g2) = e(g1, σ4)
            && e(sigma3, pp.g2) == e(pp.g1, sigma4)
            // e(σ5, g2) = e(P, σ4)
            && e(sigma5, pp.g2) == e(pp.P, sigma4)
    }
}
