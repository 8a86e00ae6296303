use lexgen_protocol::{Target, WordClass};

/// Marker string describing capitalisation and compound boundaries of `form`,
/// or `None` when nothing in the form is notable.
///
/// An initial capital is expected for proper nouns and does not by itself
/// make the structure notable.
pub fn structure_markers(form: &str, word_class: WordClass) -> Option<String> {
    let proper_noun = word_class.is_proper_noun();
    let mut needed = false;
    let mut markers = String::with_capacity(form.len());

    for (i, c) in form.chars().enumerate() {
        match c {
            '-' => {
                markers.push_str("-=");
                needed = true;
            }
            '|' => {}
            '=' | ':' => {
                markers.push(c);
                needed = true;
            }
            c if c.is_uppercase() => {
                markers.push('i');
                if !(proper_noun && i == 0) {
                    needed = true;
                }
            }
            _ => markers.push('p'),
        }
    }

    needed.then_some(markers)
}

/// Structure annotation in the notation of `target`; empty when not needed.
pub fn annotate(form: &str, word_class: WordClass, target: Target) -> String {
    match structure_markers(form, word_class) {
        None => String::new(),
        Some(markers) => match target {
            Target::Malaga => format!(", rakenne: \"={markers}\""),
            Target::Lexc => format!("[Xr]{markers}[X]"),
        },
    }
}
