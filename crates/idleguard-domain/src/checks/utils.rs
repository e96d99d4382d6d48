use globset::{Glob, GlobSetBuilder};
use time::OffsetDateTime;

/// Whole days between `reference` and `now`. Negative when `reference` is in
/// the future (never satisfies a positive threshold).
pub(crate) fn age_in_days(now: OffsetDateTime, reference: OffsetDateTime) -> i64 {
    (now - reference).whole_days()
}

/// Does `name` match any of the check's allow globs?
///
/// Invalid patterns are rejected during config resolution; any that slip
/// through are skipped here rather than suppressing findings.
pub(crate) fn is_allowed(allow: &[String], name: &str) -> bool {
    if allow.is_empty() {
        return false;
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in allow {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    match builder.build() {
        Ok(set) => set.is_match(name),
        Err(_) => false,
    }
}
