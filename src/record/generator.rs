//! Random record generation
//!
//! Names alternate a consonant at even positions with a vowel at odd
//! positions, which keeps them pronounceable and makes collisions on last
//! names frequent enough to exercise duplicate handling.

use crate::record::Record;
use crate::types::{NAME_LENGTH_MAX, NAME_LENGTH_MIN, TELEPHONE_LENGTH};
use rand::Rng;

const CONSONANTS: &[u8] = b"BCDFGHJLMNPRSTV";
const VOWELS: &[u8] = b"AEIOU";

/// Generate a random name of length 3..=10
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(NAME_LENGTH_MIN..=NAME_LENGTH_MAX);
    (0..len)
        .map(|i| {
            let alphabet = if i % 2 == 0 { CONSONANTS } else { VOWELS };
            alphabet[rng.gen_range(0..alphabet.len())] as char
        })
        .collect()
}

/// Generate a random 8 digit telephone
pub fn random_telephone<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..TELEPHONE_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Generate one random record
pub fn random_record<R: Rng + ?Sized>(rng: &mut R) -> Record {
    let last_name = random_name(rng);
    let first_name = random_name(rng);
    let telephone = random_telephone(rng);
    Record::new(last_name, first_name, telephone)
        .unwrap_or_else(|err| unreachable!("generated record is always valid: {err}"))
}

/// Generate `n` random records
pub fn random_records<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Record> {
    (0..n).map(|_| random_record(rng)).collect()
}
