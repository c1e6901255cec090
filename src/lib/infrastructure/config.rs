//! Configuration providers

mod env;
mod memory;

pub use env::EnvConfig;
pub use memory::MemoryConfig;
