// src/extractors/mod.rs
pub mod contact;
pub mod education;
pub mod experience;
pub mod projects;
pub mod section;
pub mod skills;

// Re-export key extraction types for convenience
pub use section::{
    locate,
    locate_with_chain,
    normalize_lines,
    AnchorStrategy,
    KeywordStrategy,
    LineScanStrategy,
    Section,
    SectionStrategy,
};
