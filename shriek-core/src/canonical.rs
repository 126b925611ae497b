//! Vendor-name canonicalization.
//!
//! The metadata provider reports streaming services under varying brand
//! strings. A fixed rule chain folds those variants onto one canonical name
//! per service so deduplication and link resolution have a stable key.

/// Ordered substring rules, evaluated top to bottom with first match wins.
///
/// Rule order is load-bearing: "apple" and "sky" run before the broader
/// rules, and "paramount" must run before the "prime video"/"amazon prime"
/// patterns. Keep this a sequence, never an unordered map.
const CANONICAL_RULES: &[(&[&str], &str)] = &[
    (&["apple"], "Apple TV"),
    (&["sky"], "Sky Store"),
    (&["netflix"], "Netflix"),
    (&["paramount"], "Paramount+"),
    (&["prime video", "amazon prime"], "Prime Video"),
    (&["disney"], "Disney Plus"),
    (&["hulu"], "Hulu"),
    (&["shudder"], "Shudder"),
    (&["google play"], "Google Play"),
    (&["youtube"], "YouTube"),
];

/// Maps a raw vendor name onto its canonical service name.
///
/// Matching is case-insensitive substring containment. Names matching no
/// rule pass through unchanged, empty input included; unknown services are
/// still displayed under their raw name rather than dropped.
pub fn canonicalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    for (patterns, canonical) in CANONICAL_RULES {
        if patterns.iter().any(|pattern| lowered.contains(pattern)) {
            return (*canonical).to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn netflix_variants_fold_to_netflix() {
        assert_eq!(canonicalize("Netflix"), "Netflix");
        assert_eq!(canonicalize("NETFLIX"), "Netflix");
        assert_eq!(canonicalize("Netflix basic with Ads"), "Netflix");
        assert_eq!(canonicalize("netflix kids"), "Netflix");
    }

    #[test]
    fn amazon_brandings_fold_to_prime_video() {
        assert_eq!(canonicalize("Amazon Prime Video"), "Prime Video");
        assert_eq!(canonicalize("Prime Video"), "Prime Video");
        assert_eq!(canonicalize("amazon prime video with ads"), "Prime Video");
    }

    #[test]
    fn paramount_wins_over_prime_patterns() {
        // "Paramount+ Amazon Channel" contains both "paramount" and "amazon";
        // the paramount rule runs first.
        assert_eq!(canonicalize("Paramount+ Amazon Channel"), "Paramount+");
        assert_eq!(canonicalize("Paramount Plus"), "Paramount+");
    }

    #[test]
    fn apple_and_sky_checked_before_everything_else() {
        assert_eq!(canonicalize("Apple TV Plus"), "Apple TV");
        assert_eq!(canonicalize("Apple iTunes"), "Apple TV");
        assert_eq!(canonicalize("Sky Go"), "Sky Store");
        assert_eq!(canonicalize("Sky Store"), "Sky Store");
    }

    #[test]
    fn unmatched_names_pass_through_unchanged() {
        assert_eq!(canonicalize("Mubi"), "Mubi");
        assert_eq!(canonicalize("criterion channel"), "criterion channel");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn canonical_names_are_idempotent() {
        for name in [
            "Netflix",
            "Prime Video",
            "Disney Plus",
            "Hulu",
            "Shudder",
            "Paramount+",
            "Apple TV",
            "Google Play",
            "YouTube",
            "Sky Store",
        ] {
            assert_eq!(canonicalize(name), name);
        }
    }
}
