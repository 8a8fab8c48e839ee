// src/lib.rs
//! Heuristic résumé text extraction.
//!
//! [`parse_resume_text`] turns layout-stripped résumé text into a
//! [`ParsedProfile`]. The extraction core is pure and synchronous; the
//! `input`, `storage` and `utils` modules support the command-line binary.

pub mod extractors;
pub mod input;
pub mod profile;
pub mod storage;
pub mod utils;

pub use profile::{
    parse_resume_text, parse_resume_with_defaults, Defaulted, Experience, ParsedProfile, Project,
};
pub use utils::AppError;
