pub mod fixtures;
pub mod integration;
