pub mod error;
pub mod file;
pub mod loader;
pub mod memory;
