//! Random token generation.

use rand::RngCore;

/// Generates a lowercase hex token from `bytes` bytes of thread-local CSPRNG output.
///
/// The returned string is `2 * bytes` characters long.
pub(crate) fn generate(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    rand::rng().fill_bytes(&mut buf);
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_has_expected_length_and_alphabet() {
        let token = generate(16);
        assert_eq!(token.len(), 32);
        assert!(token.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(generate(16), generate(16));
    }
}
