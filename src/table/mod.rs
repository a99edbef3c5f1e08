//! Delimited table I/O
//!
//! Reading raw rows from text and writing ranked results back out.

pub mod reader;
pub mod writer;

pub use reader::{RawRow, RawTable, parse_table, read_source};
pub use writer::{render, write_atomic};
