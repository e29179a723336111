use ark_serialize::SerializationError;
use thiserror::Error;

/// Malformed input and collaborator failures.
///
/// An invalid but well-formed ballot is never an error: verification
/// reports it as `Ok(false)`.
#[derive(Error, Debug)]
pub enum BallotError {
    #[error("Message has {found} bits, election expects {expected}")]
    MessageLength { expected: usize, found: usize },
    #[error("Ballot is not well formed: {0}")]
    MalformedBallot(&'static str),
    #[error("Invalid election parameters: {0}")]
    InvalidParameters(&'static str),
    #[error("Randomness source failed: {0}")]
    Randomness(#[from] rand_core::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
    #[error("Hash to curve failed: {0}")]
    HashToCurve(String),
}
