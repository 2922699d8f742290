pub mod adapter;
pub mod error;
pub mod loader;
pub mod settings;
pub mod types;
