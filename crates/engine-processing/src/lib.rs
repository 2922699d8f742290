pub mod error;
pub mod filter;
pub mod join;
pub mod projection;
pub mod resolve;
pub mod row_builder;
