#![allow(non_snake_case)]

use rand_core::{CryptoRng, RngCore};

use crate::crypto::ballot::{
    Ciphertext, CommitmentBundle, EncryptedVote, FirstEncryptedVote, ProofBundle, Signature,
};
use crate::crypto::keys::{ElectionPublicParameters, UserKeypair};
use crate::crypto::message::Message;
use crate::crypto::random::{make_factor, make_factors};
use crate::crypto::zero_proof::prove_zero;
use crate::crypto::{Scalar, G1};
use crate::error::BallotError;

const LOG_TARGET: &str = "beleniosrf::crypto::vote_encryptor";

/// Encrypts and signs votes for one voter.
pub struct VoteEncryptor<'a> {
    election: &'a ElectionPublicParameters,
    keypair: &'a UserKeypair,
}

impl<'a> VoteEncryptor<'a> {
    pub fn new(election: &'a ElectionPublicParameters, keypair: &'a UserKeypair) -> Self {
        VoteEncryptor { election, keypair }
    }

    pub fn encrypt_plus<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        m: &Message,
    ) -> Result<EncryptedVote, BallotError> {
        tracing::debug!(target: LOG_TARGET, k = m.len(), "encrypting ballot");
        let Hvk = self.verification_key_hash()?;
        let (ciphertext, r) = self.encrypt(rng, &Hvk, m)?;
        let (C, pi) = self.gs_prove(rng, &Hvk, &r, &m.to_scalars())?;
        Ok(EncryptedVote { ciphertext, C, pi })
    }

    /// Like [`Self::encrypt_plus`], with the proof of zero only the first ballot carries.
    ///
    /// The zero proof verifies only when `m` is the all-zero message.
    pub fn encrypt_first<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        m: &Message,
    ) -> Result<FirstEncryptedVote, BallotError> {
        tracing::debug!(target: LOG_TARGET, k = m.len(), "encrypting first ballot");
        let Hvk = self.verification_key_hash()?;
        let (ciphertext, r) = self.encrypt(rng, &Hvk, m)?;
        let (C, pi) = self.gs_prove(rng, &Hvk, &r, &m.to_scalars())?;
        let zero = prove_zero(rng, self.election, &ciphertext.c1, &ciphertext.c2, &r)?;
        Ok(FirstEncryptedVote { vote: EncryptedVote { ciphertext, C, pi }, zero })
    }

    /// Signs a ciphertext with a fresh s and the long-term secret Y.
    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        ciphertext: &Ciphertext,
    ) -> Result<Signature, BallotError> {
        let pp = self.election;
        let s = make_factor(rng)?;

        Ok(Signature {
            sigma1: ciphertext.c1 * s,
            sigma2: ciphertext.c2 * s + self.keypair.sk.Y,
            sigma3: pp.g1 * s,
            sigma4: pp.g2 * s,
            sigma5: pp.P * s,
        })
    }

    /// H(vk) for a key bound to this election.
    fn verification_key_hash(&self) -> Result<G1, BallotError> {
        self.election.check_verification_key(&self.keypair.vk)?;
        self.election.hash_verification_key(&self.keypair.vk)
    }

    /// Returns the ciphertext and its randomness r. r must not outlive the proofs.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        Hvk: &G1,
        m: &Message,
    ) -> Result<(Ciphertext, Scalar), BallotError> {
        let pp = self.election;
        let FM = pp.encode_message(m)?;
        let r = make_factor(rng)?;

        let ciphertext = Ciphertext {
            c1: pp.g1 * r,
            c2: FM + pp.P * r,
            c3: *Hvk * r,
            T: self.keypair.vk.X1 * r,
        };
        Ok((ciphertext, r))
    }

    /// Commits to r and to every bit and its square, then proves the five
    /// linear relations tying the commitments to the ciphertext.
    ///
    /// `bits` are scalars so that a non-bit value can be committed; its
    /// `pi_m` entry will not verify.
    fn gs_prove<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        Hvk: &G1,
        r: &Scalar,
        bits: &[Scalar],
    ) -> Result<(CommitmentBundle, ProofBundle), BallotError> {
        let pp = self.election;
        let gs = &pp.gs;
        let k = pp.k();
        if bits.len() != k {
            return Err(BallotError::MessageLength { expected: k, found: bits.len() });
        }

        let squares: Vec<Scalar> = bits.iter().map(|m| *m * m).collect();
        let C_2m_rand = make_factors(rng, k)?;
        let C_2m_square_rand = make_factors(rng, k)?;
        let C_2m = gs.commit_scalars_in_g2(bits, &C_2m_rand)?;
        let C_2m_square = gs.commit_scalars_in_g2(&squares, &C_2m_square_rand)?;

        let C_r_rand = make_factor(rng)?;
        let C_r = gs.commit_scalars_in_g2(&[*r], &[C_r_rand])?[0];

        // g1·r = c1
        let pi_r = gs.prove_multi_scalar_linear(&[pp.g1], &[C_r_rand])?;
        // X1·r = T
        let pi_T = gs.prove_multi_scalar_linear(&[self.keypair.vk.X1], &[C_r_rand])?;
        // H(vk)·r = c3
        let pi_V = gs.prove_multi_scalar_linear(&[*Hvk], &[C_r_rand])?;

        // (usig[1..k], P) · (m, r) = c2 - usig[0]
        let bases_M: Vec<_> = pp.usig[1..].iter().copied().chain([pp.P]).collect();
        let rand_M: Vec<_> = C_2m_rand.iter().copied().chain([C_r_rand]).collect();
        let pi_M = gs.prove_multi_scalar_linear(&bases_M, &rand_M)?;

        // (g1, -g1) · (m_i, m_i^2) = 0
        let bases_m = [pp.g1, -pp.g1];
        let pi_m = C_2m_rand
            .iter()
            .zip(&C_2m_square_rand)
            .map(|(rho, rho_sq)| gs.prove_multi_scalar_linear(&bases_m, &[*rho, *rho_sq]))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(target: LOG_TARGET, k, "groth-sahai proofs generated");

        Ok((
            CommitmentBundle { C_r, C_2m, C_2m_square },
            ProofBundle { pi_r, pi_m, pi_M, pi_T, pi_V },
        ))
    }
}
