pub const DEFAULT_MASK_CHAR: char = '*';

/// One `mask_char` per Unicode scalar value of `input`.
pub fn scrub_string(input: &str, mask_char: char) -> String {
    input.chars().map(|_| mask_char).collect()
}
