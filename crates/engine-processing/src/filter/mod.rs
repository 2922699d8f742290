pub mod condition;
pub mod pipeline;
