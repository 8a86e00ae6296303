pub mod consistency;
pub mod eligibility;
pub mod entry;
pub mod error;
pub mod pipeline;
pub mod router;
pub mod structure;

pub use consistency::check_alternative_forms;
pub use eligibility::{eligibility, is_eligible, Rejection};
pub use entry::{word_class_marker, EntryFormatter, EntryInput};
pub use error::GenerateError;
pub use pipeline::{Generator, RecordOutcome, RunSummary};
pub use router::{OutputRouter, Route};
pub use structure::{annotate, structure_markers};
