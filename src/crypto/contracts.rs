//! Contracts for the collaborators downstream of verification.
//!
//! Ballots handed to either collaborator have already passed
//! [`BallotVerifier::verify_plus`](crate::BallotVerifier::verify_plus).

use crate::crypto::ballot::Ballot;
use crate::crypto::message::Message;
use crate::error::BallotError;

/// Holder of the election decryption key.
pub trait Trustee {
    /// Recovers the k-bit message of a ballot, or of any randomization of it.
    fn decrypt_plus(&self, ballot: &Ballot) -> Result<Message, BallotError>;
}

/// Stores or forwards verified ballots in some external representation.
pub trait Publisher {
    type Published;

    fn publish(&self, ballot: &Ballot) -> Result<Self::Published, BallotError>;
}
