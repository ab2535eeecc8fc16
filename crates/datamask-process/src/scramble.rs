use rand::RngCore;

use crate::random::{random_lowercase, random_numeric, random_uppercase};

/// Replace every ASCII letter and digit with a random one of the same class.
///
/// Output has the same byte length as the input. Any other byte (punctuation,
/// whitespace, bytes of multi-byte characters) is copied to the same position.
pub fn scramble_string(input: &str, rng: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        let replacement = match ch {
            'a'..='z' => random_lowercase(rng) as char,
            'A'..='Z' => random_uppercase(rng) as char,
            '0'..='9' => random_numeric(rng) as char,
            other => other,
        };
        out.push(replacement);
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn class(byte: u8) -> char {
        match byte {
            b'a'..=b'z' => 'L',
            b'A'..=b'Z' => 'U',
            b'0'..=b'9' => 'D',
            _ => '-',
        }
    }

    #[test]
    fn preserves_length_and_character_classes() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let input = "ABC-1a2bC";
        let output = scramble_string(input, &mut rng);

        assert_eq!(output.len(), 9);
        let pattern: String = output.bytes().map(class).collect();
        assert_eq!(pattern, "UUU-DLDLU");
        assert_eq!(output.as_bytes()[3], b'-');
    }

    #[test]
    fn keeps_separators_and_non_ascii_in_place() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let input = "São Paulo, 01310-000 (ß)";
        let output = scramble_string(input, &mut rng);

        assert_eq!(output.len(), input.len());
        for (original, scrambled) in input.bytes().zip(output.bytes()) {
            if original.is_ascii_alphanumeric() {
                assert_eq!(class(original), class(scrambled));
            } else {
                assert_eq!(original, scrambled);
            }
        }
    }

    #[test]
    fn alphanumeric_positions_usually_change() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let input = "ABC-1a2bC";
        let mut changed = 0usize;
        let mut total = 0usize;
        for _ in 0..200 {
            let output = scramble_string(input, &mut rng);
            for (original, scrambled) in input.bytes().zip(output.bytes()) {
                if original.is_ascii_alphanumeric() {
                    total += 1;
                    if original != scrambled {
                        changed += 1;
                    }
                }
            }
        }
        // Letters repeat with p=1/26 and digits with p=1/10.
        assert!(changed * 100 > total * 80, "changed {changed} of {total}");
    }

    #[test]
    fn empty_input_scrambles_to_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(scramble_string("", &mut rng), "");
    }
}
