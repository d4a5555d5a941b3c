//! Operator execution modules

mod comparison;

pub use comparison::compare_values;
