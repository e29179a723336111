use ark_bls12_381::Bls12_381;
use ark_ec::pairing::Pairing;

use crate::crypto::{Gt, G1, G2};

/// The bilinear map e: G1 x G2 -> GT.
pub fn e(a: G1, b: G2) -> Gt {
    Bls12_381::pairing(a, b)
}

/// e(a, b) · e(c, d), evaluated as one multi-pairing.
pub fn ee(a: G1, b: G2, c: G1, d: G2) -> Gt {
    Bls12_381::multi_pairing([a, c], [b, d])
}

/// Product of pairings over two equally long slices.
pub fn product(lhs: &[G1], rhs: &[G2]) -> Gt {
    debug_assert_eq!(lhs.len(), rhs.len());
    Bls12_381::multi_pairing(lhs.iter().copied(), rhs.iter().copied())
}
