use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a resource finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - resource identity (ARN where the resource has one, otherwise its id)
pub fn fingerprint_for_resource(check_id: &str, code: &str, identity: &str) -> String {
    let canonical = [check_id, code, identity].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_identity_sensitive() {
        let a = fingerprint_for_resource("iam.unused_roles", "stale_role", "arn:aws:iam::1:role/a");
        let b = fingerprint_for_resource("iam.unused_roles", "stale_role", "arn:aws:iam::1:role/a");
        let c = fingerprint_for_resource("iam.unused_roles", "stale_role", "arn:aws:iam::1:role/b");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
