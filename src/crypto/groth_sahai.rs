//! Groth-Sahai commitments to scalars in `B2 = G2 x G2` and proofs for
//! multi-scalar linear equations in G1 (SXDH instantiation).
//!
//! For public bases `A_i` in G1, a public target `T` in G1 and scalars
//! `y_i` committed as `C_i = y_i·u + ρ_i·u1`, the proven relation is
//!
//! ```text
//! Σ A_i · y_i = T
//! ```
//!
//! The proof is `θ = ι1(Σ ρ_i·A_i)` with `ι1(X) = (0, X)`. Verification
//! checks, for each column k of the 2x2 pairing matrix,
//!
//! ```text
//! Π_i e(A_i, C_i[k]) = e(T, u[k]) · e(θ.1, u1[k])
//! ```
//!
//! together with the first row, which holds iff `θ.0 = 0`.
//!
//! Commitments and proofs are additively homomorphic: adding a commitment
//! to `y'` (randomness `ρ'`) and a proof built from `ρ'` yields a valid
//! proof for `y + y'` against the target `T + Σ A_i·y'_i`.

use std::ops::Add;

use ark_ec::PrimeGroup;
use ark_ff::Zero;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::{CryptoRng, RngCore};

use crate::crypto::pairing::{e, product};
use crate::crypto::random::make_factor;
use crate::crypto::{Scalar, G1, G2};
use crate::error::BallotError;

/// An element of `B1 = G1 x G1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct B1(pub G1, pub G1);

/// An element of `B2 = G2 x G2`; a commitment to a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct B2(pub G2, pub G2);

pub type Commitment2 = B2;

impl Add for B1 {
    type Output = B1;

    fn add(self, rhs: B1) -> B1 {
        B1(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Add for B2 {
    type Output = B2;

    fn add(self, rhs: B2) -> B2 {
        B2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl B1 {
    /// ι1(X) = (0, X)
    pub fn embed(x: G1) -> B1 {
        B1(G1::zero(), x)
    }
}

impl B2 {
    pub fn scale(&self, s: Scalar) -> B2 {
        B2(self.0 * s, self.1 * s)
    }

    fn component(&self, k: usize) -> G2 {
        if k == 0 {
            self.0
        } else {
            self.1
        }
    }
}

/// Proof for one multi-scalar linear equation ("theta").
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct LinearProof {
    pub theta: B1,
}

impl Add for LinearProof {
    type Output = LinearProof;

    fn add(self, rhs: LinearProof) -> LinearProof {
        LinearProof { theta: self.theta + rhs.theta }
    }
}

/// Commitment key for scalars committed in G2.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct GsCrs {
    /// `u1 = (g2, a·g2)`, multiplies the commitment randomness.
    pub u1: B2,
    /// `u = t·u1 + (0, g2)`, multiplies the committed scalar.
    pub u: B2,
}

impl GsCrs {
    /// Samples a binding commitment key. The trapdoor `(a, t)` is dropped.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, BallotError> {
        let g2 = G2::generator();
        let a = make_factor(rng)?;
        let t = make_factor(rng)?;

        let u1 = B2(g2, g2 * a);
        let u = u1.scale(t) + B2(G2::zero(), g2);
        Ok(GsCrs { u1, u })
    }

    /// `C_i = scalars[i]·u + randomness[i]·u1`
    pub fn commit_scalars_in_g2(
        &self,
        scalars: &[Scalar],
        randomness: &[Scalar],
    ) -> Result<Vec<Commitment2>, BallotError> {
        if scalars.len() != randomness.len() {
            return Err(BallotError::InvalidParameters(
                "commitment randomness does not match the number of scalars",
            ));
        }

        Ok(scalars
            .iter()
            .zip(randomness)
            .map(|(y, rho)| self.u.scale(*y) + self.u1.scale(*rho))
            .collect())
    }

    /// Proves `Σ bases[i]·y_i = T` for scalars committed with `randomness`.
    pub fn prove_multi_scalar_linear(
        &self,
        bases: &[G1],
        randomness: &[Scalar],
    ) -> Result<LinearProof, BallotError> {
        if bases.len() != randomness.len() {
            return Err(BallotError::InvalidParameters(
                "proof randomness does not match the number of bases",
            ));
        }

        let theta = bases
            .iter()
            .zip(randomness)
            .fold(G1::zero(), |acc, (base, rho)| acc + *base * rho);
        Ok(LinearProof { theta: B1::embed(theta) })
    }

    /// Checks a proof that the committed scalars satisfy `Σ bases[i]·y_i = target`.
    pub fn verify_multi_scalar_linear(
        &self,
        bases: &[G1],
        commitments: &[Commitment2],
        target: G1,
        proof: &LinearProof,
    ) -> bool {
        if bases.is_empty() || bases.len() != commitments.len() {
            return false;
        }

        // first row: ι1 has a zero first component, so e(θ.0, u1[k]) must be one
        if !proof.theta.0.is_zero() {
            return false;
        }

        (0..2).all(|k| {
            let columns: Vec<G2> = commitments.iter().map(|c| c.component(k)).collect();
            let lhs = product(bases, &columns);
            let rhs = e(target, self.u.component(k)) + e(proof.theta.1, self.u1.component(k));
            lhs == rhs
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;
    use crate::crypto::random::make_factors;

    fn random_bases<R: RngCore + CryptoRng>(rng: &mut R, n: usize) -> Vec<G1> {
        make_factors(rng, n)
            .unwrap()
            .into_iter()
            .map(|x| G1::generator() * x)
            .collect()
    }

    #[test]
    fn linear_proof_should_verify() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let crs = GsCrs::generate(&mut rng).unwrap();

        let bases = random_bases(&mut rng, 3);
        let ys = make_factors(&mut rng, 3).unwrap();
        let rhos = make_factors(&mut rng, 3).unwrap();
        let target = bases.iter().zip(&ys).map(|(a, y)| *a * y).sum::<G1>();

        let commitments = crs.commit_scalars_in_g2(&ys, &rhos).unwrap();
        let proof = crs.prove_multi_scalar_linear(&bases, &rhos).unwrap();

        assert!(crs.verify_multi_scalar_linear(&bases, &commitments, target, &proof));
    }

    #[test]
    fn linear_proof_should_fail_on_wrong_target() {
        let mut rng = thread_rng();
        let crs = GsCrs::generate(&mut rng).unwrap();

        let bases = random_bases(&mut rng, 2);
        let ys = make_factors(&mut rng, 2).unwrap();
        let rhos = make_factors(&mut rng, 2).unwrap();
        let target = bases[0] * ys[0] + bases[1] * ys[1];

        let commitments = crs.commit_scalars_in_g2(&ys, &rhos).unwrap();
        let proof = crs.prove_multi_scalar_linear(&bases, &rhos).unwrap();

        let wrong_target = target + G1::generator();
        assert!(!crs.verify_multi_scalar_linear(&bases, &commitments, wrong_target, &proof));
    }

    #[test]
    fn linear_proof_should_fail_on_nonzero_first_row() {
        let mut rng = thread_rng();
        let crs = GsCrs::generate(&mut rng).unwrap();

        let bases = random_bases(&mut rng, 1);
        let ys = make_factors(&mut rng, 1).unwrap();
        let rhos = make_factors(&mut rng, 1).unwrap();
        let commitments = crs.commit_scalars_in_g2(&ys, &rhos).unwrap();
        let mut proof = crs.prove_multi_scalar_linear(&bases, &rhos).unwrap();
        proof.theta.0 += G1::generator();

        assert!(!crs.verify_multi_scalar_linear(&bases, &commitments, bases[0] * ys[0], &proof));
    }

    #[test]
    fn proofs_compose_homomorphically() {
        let mut rng = thread_rng();
        let crs = GsCrs::generate(&mut rng).unwrap();
        let base = random_bases(&mut rng, 1);

        let (y, y_prime) = (make_factor(&mut rng).unwrap(), make_factor(&mut rng).unwrap());
        let (rho, rho_prime) = (make_factor(&mut rng).unwrap(), make_factor(&mut rng).unwrap());

        let c = crs.commit_scalars_in_g2(&[y], &[rho]).unwrap()[0];
        let c_prime = crs.commit_scalars_in_g2(&[y_prime], &[rho_prime]).unwrap()[0];
        let proof = crs.prove_multi_scalar_linear(&base, &[rho]).unwrap()
            + crs.prove_multi_scalar_linear(&base, &[rho_prime]).unwrap();

        let target = base[0] * (y + y_prime);
        assert!(crs.verify_multi_scalar_linear(&base, &[c + c_prime], target, &proof));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut rng = thread_rng();
        let crs = GsCrs::generate(&mut rng).unwrap();
        let bases = random_bases(&mut rng, 2);
        let rhos = make_factors(&mut rng, 1).unwrap();

        assert!(crs.commit_scalars_in_g2(&rhos, &[]).is_err());
        assert!(crs.prove_multi_scalar_linear(&bases, &rhos).is_err());

        let commitments = crs.commit_scalars_in_g2(&rhos, &rhos).unwrap();
        let proof = crs.prove_multi_scalar_linear(&bases[..1], &rhos).unwrap();
        assert!(!crs.verify_multi_scalar_linear(&bases, &commitments, bases[0], &proof));
    }
}
