//! Output records and serialization

pub mod report;

pub use report::{CollectionOutput, ExtractedSection, Metadata, SubsectionAnalysis};
