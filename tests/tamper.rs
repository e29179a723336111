//! Perturbing any single group element or scalar of a valid ballot must make
//! verification return `Ok(false)`.

use ark_ec::PrimeGroup;
use ark_ff::One;
use beleniosrf::crypto::groth_sahai::{LinearProof, B2};
use beleniosrf::crypto::{Scalar, G1, G2};
use beleniosrf::{
    Ballot, BallotVerifier, ElectionKeypair, FirstBallot, FirstEncryptedVote, Message, UserKeypair,
    VoteEncryptor,
};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

type Tamper = Box<dyn Fn(&mut Ballot)>;

const K: usize = 2;

fn setup() -> (ChaCha20Rng, ElectionKeypair, UserKeypair) {
    let mut rng = ChaCha20Rng::seed_from_u64(404);
    let election = ElectionKeypair::generate(&mut rng, K).unwrap();
    let user = UserKeypair::generate(&mut rng, &election.public).unwrap();
    (rng, election, user)
}

fn bump_commitment(c: &mut B2, component: usize) {
    if component == 0 {
        c.0 += G2::generator();
    } else {
        c.1 += G2::generator();
    }
}

fn bump_proof(p: &mut LinearProof, component: usize) {
    if component == 0 {
        p.theta.0 += G1::generator();
    } else {
        p.theta.1 += G1::generator();
    }
}

fn tamper(field: impl Into<String>, f: impl Fn(&mut Ballot) + 'static) -> (String, Tamper) {
    (field.into(), Box::new(f))
}

fn tampers() -> Vec<(String, Tamper)> {
    let g1 = G1::generator();
    let g2 = G2::generator();
    let mut all: Vec<(String, Tamper)> = vec![
        tamper("c1", move |b| b.c.ciphertext.c1 += g1),
        tamper("c2", move |b| b.c.ciphertext.c2 += g1),
        tamper("c3", move |b| b.c.ciphertext.c3 += g1),
        tamper("T", move |b| b.c.ciphertext.T += g1),
        tamper("sigma1", move |b| b.sigma.sigma1 += g1),
        tamper("sigma2", move |b| b.sigma.sigma2 += g1),
        tamper("sigma3", move |b| b.sigma.sigma3 += g1),
        tamper("sigma4", move |b| b.sigma.sigma4 += g2),
        tamper("sigma5", move |b| b.sigma.sigma5 += g1),
    ];

    for j in 0..2 {
        all.push(tamper(format!("C_r[{j}]"), move |b| bump_commitment(&mut b.c.C.C_r, j)));
        all.push(tamper(format!("pi_r.theta[{j}]"), move |b| bump_proof(&mut b.c.pi.pi_r, j)));
        all.push(tamper(format!("pi_M.theta[{j}]"), move |b| bump_proof(&mut b.c.pi.pi_M, j)));
        all.push(tamper(format!("pi_T.theta[{j}]"), move |b| bump_proof(&mut b.c.pi.pi_T, j)));
        all.push(tamper(format!("pi_V.theta[{j}]"), move |b| bump_proof(&mut b.c.pi.pi_V, j)));

        for i in 0..K {
            all.push(tamper(format!("C_2m[{i}][{j}]"), move |b| bump_commitment(&mut b.c.C.C_2m[i], j)));
            all.push(tamper(format!("C_2m_square[{i}][{j}]"), move |b| bump_commitment(&mut b.c.C.C_2m_square[i], j)));
            all.push(tamper(format!("pi_m[{i}].theta[{j}]"), move |b| bump_proof(&mut b.c.pi.pi_m[i], j)));
        }
    }
    all
}

#[test]
fn every_ballot_field_is_checked() {
    let (mut rng, election, user) = setup();
    let encryptor = VoteEncryptor::new(&election.public, &user);
    let verifier = BallotVerifier::new(&election.public);

    for value in [0, 1, 3] {
        let c = encryptor.encrypt_plus(&mut rng, &Message::from_int(value, K)).unwrap();
        let sigma = encryptor.sign(&mut rng, &c.ciphertext).unwrap();
        let honest = Ballot { c, sigma };
        assert!(verifier.verify_plus(&user.vk, &honest).unwrap());

        for (field, apply) in tampers() {
            let mut b = honest.clone();
            apply(&mut b);
            assert!(!verifier.verify_plus(&user.vk, &b).unwrap(), "m={value}: tampered {field} accepted");
        }
    }
}

#[test]
fn every_first_ballot_field_is_checked() {
    let (mut rng, election, user) = setup();
    let encryptor = VoteEncryptor::new(&election.public, &user);
    let verifier = BallotVerifier::new(&election.public);

    let c0 = encryptor.encrypt_first(&mut rng, &Message::zero(K)).unwrap();
    let sigma0 = encryptor.sign(&mut rng, &c0.vote.ciphertext).unwrap();
    let honest = FirstBallot { c0, sigma0 };
    assert!(verifier.verify_first_ballot(&user.vk, &honest).unwrap());

    for (field, apply) in tampers() {
        let mut plus = Ballot { c: honest.c0.vote.clone(), sigma: honest.sigma0 };
        apply(&mut plus);
        let b = FirstBallot {
            c0: FirstEncryptedVote { vote: plus.c, zero: honest.c0.zero },
            sigma0: plus.sigma,
        };
        assert!(!verifier.verify_first_ballot(&user.vk, &b).unwrap(), "tampered {field} accepted");
    }

    let g1 = G1::generator();
    for field in ["a0", "b0", "proof"] {
        let mut b = honest.clone();
        match field {
            "a0" => b.c0.zero.a0 += g1,
            "b0" => b.c0.zero.b0 += g1,
            _ => b.c0.zero.proof += Scalar::one(),
        }
        assert!(!verifier.verify_first_ballot(&user.vk, &b).unwrap(), "tampered {field} accepted");
    }
}

#[test]
fn swapped_signature_is_rejected() {
    let (mut rng, election, user) = setup();
    let encryptor = VoteEncryptor::new(&election.public, &user);
    let verifier = BallotVerifier::new(&election.public);

    let a = encryptor.encrypt_plus(&mut rng, &Message::from_int(1, K)).unwrap();
    let b = encryptor.encrypt_plus(&mut rng, &Message::from_int(2, K)).unwrap();
    let sigma_b = encryptor.sign(&mut rng, &b.ciphertext).unwrap();

    assert!(!verifier.verify_plus(&user.vk, &Ballot { c: a, sigma: sigma_b }).unwrap());
}
