//! Confirmation number generation.

use rand::Rng;

/// Length of a generated confirmation number.
const CONFIRMATION_LENGTH: usize = 12;

/// Uppercase alphanumeric alphabet without the ambiguous 0/O/1/I characters,
/// since confirmation numbers get read back over the phone.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generates a random 12-character confirmation number.
///
/// Uniqueness is enforced by the database constraint on the rewards table,
/// not here; collisions are retried by the caller.
pub fn generate_confirmation_number() -> String {
    let mut rng = rand::rng();
    (0..CONFIRMATION_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_confirmation_number_has_correct_length() {
        assert_eq!(generate_confirmation_number().len(), 12);
    }

    #[test]
    fn test_confirmation_number_uses_allowed_alphabet() {
        let number = generate_confirmation_number();
        assert!(number.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_confirmation_numbers_are_unique_in_practice() {
        let mut numbers = HashSet::new();
        for _ in 0..1000 {
            numbers.insert(generate_confirmation_number());
        }
        assert_eq!(numbers.len(), 1000);
    }
}
