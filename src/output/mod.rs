//! CSV output: record accumulation and the per-batch file layout.

pub mod paths;
pub mod writer;

pub use writer::RecordTable;
