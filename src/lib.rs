//! Library entry point for the beleniosrf crate.
//
// Signatures on randomizable ciphertexts for BeleniosRF-style ballots:
// encryption with Groth-Sahai proofs, pairing-based signing, public
// verification and key-less re-randomization.

pub mod serde_types;
pub mod error;
pub mod crypto;

pub use crypto::ballot::{
    Ballot, Ciphertext, CommitmentBundle, EncryptedVote, FirstBallot, FirstEncryptedVote,
    ProofBundle, Signature, ZeroProof,
};
pub use crypto::ballot_verifier::BallotVerifier;
pub use crypto::contracts::{Publisher, Trustee};
pub use crypto::keys::{
    ElectionKeypair, ElectionPublicParameters, SigningKey, UserKeypair, VerificationKey,
    VerificationParameters,
};
pub use crypto::message::Message;
pub use crypto::randomizer::Randomizer;
pub use crypto::vote_encryptor::VoteEncryptor;
pub use error::BallotError;
