use lexgen_morph::{is_single_part, last_part};

/// Checks the alternative spellings of one record: when a record has both
/// single-part and multi-part forms, every multi-part form must end in one
/// of the single-part forms. Returns the first offending form.
pub fn check_alternative_forms<S: AsRef<str>>(forms: &[S]) -> Result<(), String> {
    let (single, multi): (Vec<&str>, Vec<&str>) = forms
        .iter()
        .map(AsRef::as_ref)
        .partition(|form| is_single_part(form));

    if single.is_empty() {
        return Ok(());
    }

    match multi.into_iter().find(|form| !single.contains(&last_part(form))) {
        Some(form) => Err(form.to_string()),
        None => Ok(()),
    }
}
