use sha2::{Digest, Sha256};

/// Accumulates a SHA-256 digest over several labelled inputs.
pub(crate) struct SnapshotHasher {
    hasher: Sha256,
}

impl SnapshotHasher {
    pub(crate) fn new() -> Self {
        Self { hasher: Sha256::new() }
    }

    /// Feed one input; the label and length are hashed too so inputs can't run together.
    pub(crate) fn update(&mut self, label: &str, bytes: &[u8]) {
        self.hasher.update(label.as_bytes());
        self.hasher.update((bytes.len() as u64).to_le_bytes());
        self.hasher.update(bytes);
    }

    /// Hex-encoded digest.
    pub(crate) fn finish(self) -> String {
        hex::encode(self.hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(parts: &[(&str, &str)]) -> String {
        let mut hasher = SnapshotHasher::new();
        for &(label, text) in parts { hasher.update(label, text.as_bytes()) }
        hasher.finish()
    }

    #[test]
    fn digest_is_hex_sha256() {
        let d = digest(&[("projects", "[]")]);
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn boundaries_between_inputs_matter() {
        assert_ne!(digest(&[("a", "xy"), ("b", "z")]), digest(&[("a", "x"), ("b", "yz")]));
    }

    #[test]
    fn same_inputs_same_digest() {
        assert_eq!(digest(&[("a", "1")]), digest(&[("a", "1")]));
    }
}
