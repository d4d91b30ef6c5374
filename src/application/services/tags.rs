use once_cell::sync::Lazy;
use regex::Regex;

static TAG_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    // word chars plus common CJK/kana/hangul ranges
    Regex::new(r"[a-zA-Z0-9\u{3040}-\u{309F}\u{30A0}-\u{30FF}\u{4E00}-\u{9FAF}\u{3400}-\u{4DBF}\u{AC00}-\u{D7AF}_-]+")
        .unwrap()
});

/// Normalize a free-form tags field ("Nature, #sunset photography") into a
/// lowercase, de-duplicated list. Order of first appearance is preserved.
pub fn normalize_tags(raw: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let Some(raw) = raw else {
        return out;
    };
    for m in TAG_TOKEN_RE.find_iter(raw) {
        let mut t = m.as_str().to_lowercase();
        // Pop whole chars so multi-byte tags cannot split mid-character
        while t.len() > 64 {
            t.pop();
        }
        if !t.is_empty() && !out.contains(&t) {
            out.push(t);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_lowercases() {
        let tags = normalize_tags(Some("Nature, #Sunset  photography"));
        assert_eq!(tags, vec!["nature", "sunset", "photography"]);
    }

    #[test]
    fn drops_duplicates_keeping_first() {
        let tags = normalize_tags(Some("sea SEA sea, shore"));
        assert_eq!(tags, vec!["sea", "shore"]);
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(normalize_tags(None).is_empty());
        assert!(normalize_tags(Some("  ,, #")).is_empty());
    }

    #[test]
    fn truncates_very_long_tags() {
        let long = "x".repeat(100);
        let tags = normalize_tags(Some(&long));
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].len(), 64);
    }
}
