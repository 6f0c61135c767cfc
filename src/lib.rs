// papercheck: cosine-similarity plagiarism check between two documents.
//
// This is the library root. The tokenizer and similarity engine are pure;
// config, document and output are the thin I/O layer used by the binary.

pub mod checker;
pub mod config;
pub mod document;
pub mod output;
pub mod similarity;
pub mod tokenize;

pub use checker::{Checker, Comparison};
