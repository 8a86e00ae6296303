//! Orthographic helpers shared by the classifier and the entry writer:
//! marker handling in spelling forms, vowel harmony and consonant gradation.

pub mod forms;
pub mod gradation;
pub mod vowel;

pub use forms::{is_single_part, last_part, strip_markers, title_case};
pub use gradation::{compatible_gradations, split_infclass, Gradation, GRADATIONS};
pub use vowel::vowel_type;
