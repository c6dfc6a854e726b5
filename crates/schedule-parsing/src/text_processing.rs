use once_cell::sync::Lazy;
use regex::Regex;

/// `(cid:N)` glyph placeholders emitted for characters without a Unicode mapping.
static CID_ARTIFACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(cid:\d+\)").unwrap());

/// Remove `(cid:N)` placeholders and trim the result.
///
/// `"12(cid:13)"` → `"12"`, `"(cid:10)"` → `""`.
pub fn strip_cid_artifacts(token: &str) -> String {
    CID_ARTIFACT_RE.replace_all(token, "").trim().to_string()
}

/// Title-case a phrase: the first letter of every run of letters is
/// upper-cased, the rest lower-cased.
///
/// Any non-letter (space, digit, apostrophe, hyphen) starts a new run, so
/// `"d'água"` → `"D'Água"` and `"cálculo-ii"` → `"Cálculo-Ii"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;

    for c in text.chars() {
        let cased = c.is_uppercase() || c.is_lowercase();
        if cased {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}

/// Parse a cleaned absence count, falling back to 0.
pub(crate) fn parse_absences(token: &str) -> u64 {
    token.parse().unwrap_or(0)
}
