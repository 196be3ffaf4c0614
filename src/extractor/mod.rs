pub mod contact_extractor;
pub mod types;

pub use contact_extractor::ContactExtractor;
pub use types::{ContactReport, ExtractionResult};
