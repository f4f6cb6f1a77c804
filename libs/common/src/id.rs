use rand::Rng;

/// Alphabet for generated IDs: lowercase alphanumerics minus `l`, which
/// reads as `1` in most faces.
const ALPHABET: &[u8] = b"abcdefghijkmnopqrstuvwxyz0123456789";

/// Length of the random portion of a generated ID.
const ID_LEN: usize = 8;

/// Generates a new random ID with the given prefix.
///
/// # Examples
/// ```
/// let id = podium_common::id::prefixed_id("q");
/// assert!(id.starts_with("q_"));
/// ```
pub fn prefixed_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let body: String = (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{prefix}_{body}")
}

/// Well-known ID prefixes.
pub mod prefix {
    pub const QUESTION: &str = "q";
    pub const SESSION: &str = "ses";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_id_format() {
        let id = prefixed_id("q");
        assert!(id.starts_with("q_"));
        assert_eq!(id.len(), 2 + ID_LEN);
        assert!(id[2..].bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_uniqueness() {
        let a = prefixed_id("q");
        let b = prefixed_id("q");
        assert_ne!(a, b);
    }
}
