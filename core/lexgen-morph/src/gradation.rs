/// A gradation type (`av1`..`av6`) together with one of the letters it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradation {
    pub gradation_type: &'static str,
    pub letter: &'static str,
}

const fn grad(gradation_type: &'static str, letter: &'static str) -> Gradation {
    Gradation { gradation_type, letter }
}

/// Gradation letters of inflection codes mapped to the gradation types
/// classification rules are written against.
pub const GRADATIONS: [Gradation; 28] = [
    grad("av1", "A"),
    grad("av1", "B"),
    grad("av1", "C"),
    grad("av1", "D"),
    grad("av1", "E"),
    grad("av1", "F"),
    grad("av1", "G"),
    grad("av1", "H"),
    grad("av1", "I"),
    grad("av1", "J"),
    grad("av1", "K"),
    grad("av1", "M"),
    grad("av2", "A"),
    grad("av2", "B"),
    grad("av2", "C"),
    grad("av2", "D"),
    grad("av2", "E"),
    grad("av2", "F"),
    grad("av2", "G"),
    grad("av2", "H"),
    grad("av2", "I"),
    grad("av2", "J"),
    grad("av2", "K"),
    grad("av2", "M"),
    grad("av3", "L"),
    grad("av4", "L"),
    grad("av5", "D"),
    grad("av6", "D"),
];

/// Splits an inflection code such as `valo-A` into its base class and
/// optional gradation letter. Anything after a second `-` is ignored.
pub fn split_infclass(code: &str) -> (&str, Option<&str>) {
    let mut parts = code.split('-');
    let base = parts.next().unwrap_or(code);
    (base, parts.next())
}

/// Gradation types a rule may require for a word with gradation letter
/// `letter`. Without a letter only rules without gradation apply, which is
/// expressed as a single `None`.
pub fn compatible_gradations(letter: Option<&str>) -> Vec<Option<&'static str>> {
    match letter {
        None => vec![None],
        Some(letter) => GRADATIONS
            .iter()
            .filter(|g| g.letter == letter)
            .map(|g| Some(g.gradation_type))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_infclass() {
        assert_eq!(split_infclass("valo"), ("valo", None));
        assert_eq!(split_infclass("valo-A"), ("valo", Some("A")));
        assert_eq!(split_infclass("a-b-c"), ("a", Some("b")));
    }

    #[test]
    fn test_compatible_gradations() {
        assert_eq!(compatible_gradations(None), vec![None]);
        assert_eq!(compatible_gradations(Some("L")), vec![Some("av3"), Some("av4")]);

        let d = compatible_gradations(Some("D"));
        assert!(d.contains(&Some("av1")));
        assert!(d.contains(&Some("av5")));
        assert!(!d.contains(&None));

        assert!(compatible_gradations(Some("Z")).is_empty());
    }
}
