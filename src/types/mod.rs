// Type definitions for the photo privacy analyzer

pub mod finding;
pub mod metadata;

pub use finding::*;
pub use metadata::*;
