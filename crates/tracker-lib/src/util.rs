//! ID generation utilities.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Generate a unique issue ID with the given prefix.
///
/// Uses SHA256 hashing with base36 encoding. Hash length scales with
/// the collection size; the `exists` closure checks for collisions, so
/// a returned ID is guaranteed unused at generation time.
pub fn generate_id<F>(
    prefix: &str,
    title: &str,
    description: &str,
    created_at: DateTime<Utc>,
    issue_count: usize,
    exists: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let mut length = optimal_hash_length(issue_count);

    loop {
        for nonce in 0..10 {
            let seed = id_seed(title, description, created_at, nonce);
            let id = format!("{prefix}-{}", id_hash(&seed, length));
            if !exists(&id) {
                return id;
            }
        }

        if length < 12 {
            length += 1;
        } else {
            // Collision space is exhausted for practical purposes;
            // fall back to an unbounded nonce at full length.
            let mut nonce = 10u32;
            loop {
                let seed = id_seed(title, description, created_at, nonce);
                let id = format!("{prefix}-{}", id_hash(&seed, length));
                if !exists(&id) {
                    return id;
                }
                nonce += 1;
            }
        }
    }
}

/// Shortest hash length keeping the birthday-collision probability low
/// for the current collection size.
#[must_use]
fn optimal_hash_length(issue_count: usize) -> usize {
    let n = issue_count as f64;
    let max_prob = 0.25;

    for (len, exp) in [(4_usize, 4_i32), (5, 5), (6, 6), (7, 7), (8, 8)] {
        let space = 36_f64.powi(exp);
        let prob = 1.0 - (-n * n / (2.0 * space)).exp();
        if prob < max_prob {
            return len;
        }
    }
    8
}

fn id_seed(title: &str, description: &str, created_at: DateTime<Utc>, nonce: u32) -> String {
    format!(
        "{}|{}|{}|{}",
        title,
        description,
        created_at.timestamp_nanos_opt().unwrap_or(0),
        nonce
    )
}

fn id_hash(input: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();

    let mut num = 0u64;
    for &byte in digest.iter().take(8) {
        num = (num << 8) | u64::from(byte);
    }

    let mut encoded = base36_encode(num);
    if encoded.len() < length {
        encoded = format!("{encoded:0>length$}");
    }
    encoded.chars().take(length).collect()
}

fn base36_encode(mut num: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if num == 0 {
        return "0".to_string();
    }
    let mut chars = Vec::new();
    while num > 0 {
        chars.push(ALPHABET[(num % 36) as usize] as char);
        num /= 36;
    }
    chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("it", "Test", "", Utc::now(), 0, |_| false);
        assert!(id.starts_with("it-"));
        assert!(id.len() >= 6);
    }

    #[test]
    fn test_generate_id_collision_handling() {
        let mut generated = std::collections::HashSet::new();
        let now = Utc::now();
        let id1 = generate_id("it", "Test", "", now, 0, |id| generated.contains(id));
        generated.insert(id1.clone());
        let id2 = generate_id("it", "Test", "", now, 1, |id| generated.contains(id));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_hash_length_grows_with_collection() {
        assert!(optimal_hash_length(0) <= optimal_hash_length(1_000_000));
    }
}
