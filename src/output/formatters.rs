// src/output/formatters.rs
pub mod delimited;
pub mod jsonl;
pub mod markdown;
pub mod structured;
pub mod table;
#[cfg(feature = "xlsx")]
pub mod xlsx;

pub use delimited::DelimitedSink;
pub use jsonl::JsonlSink;
pub use markdown::MarkdownSink;
pub use structured::{Structured, StructuredSink};
pub use table::TableSink;
#[cfg(feature = "xlsx")]
pub use xlsx::XlsxSink;
