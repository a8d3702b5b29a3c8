//! Document input boundary

pub mod pdf;

pub use pdf::{PageBlock, PageSource, PdfPageSource};
