pub mod config;
pub mod model;
pub mod morphology;
pub mod rules;

// Re-export core types for convenience
pub use config::*;
pub use model::*;
pub use morphology::*;
pub use rules::*;
