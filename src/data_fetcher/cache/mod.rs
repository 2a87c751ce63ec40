pub mod document_cache;

pub use document_cache::DocumentCache;
