/// Marks an optional compound or hyphenation boundary.
pub const PART_MARKER: char = '|';
/// Marks a compound boundary that is not written out.
pub const JOIN_MARKER: char = '=';
pub const HYPHEN: char = '-';

fn is_boundary(c: char) -> bool {
    c == PART_MARKER || c == JOIN_MARKER || c == HYPHEN
}

/// Removes the internal markers that are not part of the written form.
/// Hyphens are kept.
pub fn strip_markers(form: &str) -> String {
    form.chars()
        .filter(|&c| c != PART_MARKER && c != JOIN_MARKER)
        .collect()
}

/// A form made of one segment only: no markers and no hyphens.
pub fn is_single_part(form: &str) -> bool {
    !form.contains(is_boundary)
}

/// The segment after the last boundary, or the whole form.
pub fn last_part(form: &str) -> &str {
    match form.rfind(is_boundary) {
        // all boundary characters are single-byte
        Some(idx) => &form[idx + 1..],
        None => form,
    }
}

/// Uppercases every letter that follows a non-letter, lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = !c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markers() {
        assert_eq!(strip_markers("linja-|auto"), "linja-auto");
        assert_eq!(strip_markers("talo=mies"), "talomies");
        assert_eq!(strip_markers("talo"), "talo");
    }

    #[test]
    fn test_single_part() {
        assert!(is_single_part("talo"));
        assert!(!is_single_part("kerros=talo"));
        assert!(!is_single_part("linja-auto"));
        assert!(!is_single_part("kerros|talo"));
    }

    #[test]
    fn test_last_part() {
        assert_eq!(last_part("kerros=talo"), "talo");
        assert_eq!(last_part("a-b|c"), "c");
        assert_eq!(last_part("talo"), "talo");
        assert_eq!(last_part("talo-"), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("nainen"), "Nainen");
        assert_eq!(title_case("HATTU"), "Hattu");
        assert_eq!(title_case("valo_av1"), "Valo_Av1");
        assert_eq!(title_case("äes"), "Äes");
    }
}
