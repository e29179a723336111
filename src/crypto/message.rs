use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::crypto::Scalar;

/// A vote: an ordered sequence of k bits, k fixed per election.
#[derive(Clone, Debug, PartialEq, Eq, Hash, CanonicalSerialize, CanonicalDeserialize)]
pub struct Message {
    bits: Vec<bool>,
}

impl From<Vec<bool>> for Message {
    fn from(bits: Vec<bool>) -> Self {
        Message { bits }
    }
}

impl Message {
    pub fn new(bits: Vec<bool>) -> Self {
        Message { bits }
    }

    /// The k low bits of `value`, least significant bit first.
    pub fn from_int(value: u64, k: usize) -> Self {
        let bits = (0..k)
            .map(|i| i < u64::BITS as usize && (value >> i) & 1 == 1)
            .collect();
        Message { bits }
    }

    /// The all-zero message of length k.
    pub fn zero(k: usize) -> Self {
        Message { bits: vec![false; k] }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn to_scalars(&self) -> Vec<Scalar> {
        self.bits.iter().map(|bit| Scalar::from(u64::from(*bit))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_is_lsb_first() {
        let m = Message::from_int(2, 3);
        assert_eq!(m.bits(), &[false, true, false]);
        assert_eq!(Message::from_int(0, 2), Message::zero(2));
    }

    #[test]
    fn scalars_are_bits() {
        let m = Message::new(vec![true, false]);
        assert_eq!(m.to_scalars(), vec![Scalar::from(1u64), Scalar::from(0u64)]);
        assert_eq!(m.len(), 2);
    }
}
