use lexgen_protocol::VowelType;

const BACK_VOWELS: [char; 4] = ['a', 'o', 'å', 'u'];
const FRONT_VOWELS: [char; 2] = ['ä', 'ö'];

/// Vowel harmony of the inflected (last) part of a form.
///
/// Compound markers are followed to the last part; an empty form or one
/// ending in a marker gets `Both`.
pub fn vowel_type(form: &str) -> VowelType {
    if form.is_empty() {
        return VowelType::Both;
    }
    if let Some(idx) = form.rfind(|c: char| c == '=' || c == '-') {
        if idx == form.len() - 1 {
            return VowelType::Both;
        }
        return vowel_type(&form[idx + 1..]);
    }
    if let Some(idx) = form.rfind('|') {
        if idx == form.len() - 1 {
            return VowelType::Both;
        }
        return vowel_type(&form[idx + 1..]);
    }

    let chars: Vec<char> = form.chars().flat_map(char::to_lowercase).collect();
    let last_of = |set: &[char]| -> isize {
        chars
            .iter()
            .rposition(|c| set.contains(c))
            .map_or(-1, |i| i as isize)
    };

    let last_back = last_of(&BACK_VOWELS);
    let last_front = last_of(&FRONT_VOWELS);
    let last_y = last_of(&['y']);
    let last_any_front = last_front.max(last_y);

    if last_back > 0 && last_any_front == -1 {
        return VowelType::Back;
    }
    if last_back == -1 && last_any_front > 0 {
        return VowelType::Front;
    }
    if last_back.max(last_any_front) == -1 {
        return VowelType::Front;
    }
    if last_y < last_back.max(last_front) {
        if last_back > last_front {
            VowelType::Back
        } else {
            VowelType::Front
        }
    } else {
        VowelType::Both
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_front() {
        assert_eq!(vowel_type("talo"), VowelType::Back);
        assert_eq!(vowel_type("kynä"), VowelType::Front);
        assert_eq!(vowel_type("äiti"), VowelType::Front);
        assert_eq!(vowel_type("Helsinki"), VowelType::Front);
    }

    #[test]
    fn test_compound_uses_last_part() {
        assert_eq!(vowel_type("kesä=talo"), VowelType::Back);
        assert_eq!(vowel_type("talo-kynä"), VowelType::Front);
        assert_eq!(vowel_type("kesä|talo"), VowelType::Back);
    }

    #[test]
    fn test_trailing_marker_is_both() {
        assert_eq!(vowel_type("talo-"), VowelType::Both);
        assert_eq!(vowel_type("talo|"), VowelType::Both);
    }

    #[test]
    fn test_mixed_vowels() {
        // y after a back vowel leaves the choice open
        assert_eq!(vowel_type("analyysi"), VowelType::Both);
        assert_eq!(vowel_type("hämärä"), VowelType::Front);
        assert_eq!(vowel_type("sähkö"), VowelType::Front);
        // a back vowel after y decides
        assert_eq!(vowel_type("olympia"), VowelType::Back);
    }

    #[test]
    fn test_no_vowels_defaults_to_front() {
        assert_eq!(vowel_type("psst"), VowelType::Front);
    }

    #[test]
    fn test_empty_form_is_both() {
        assert_eq!(vowel_type(""), VowelType::Both);
    }
}
