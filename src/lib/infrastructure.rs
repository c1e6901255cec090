//! Infrastructure adapters for the domain traits

pub mod assets;
pub mod config;
pub mod email;
