pub mod error;
pub mod execution;

pub use execution::executor::{QueryExecutor, execute_query};
