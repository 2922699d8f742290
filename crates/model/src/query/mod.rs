pub mod comparator;
pub mod descriptor;
pub mod join;
