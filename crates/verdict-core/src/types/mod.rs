//! Value types for Verdict
//!
//! This module contains the scalar types a rule compares and the records
//! it is evaluated against.

pub mod record;
pub mod value;

pub use record::Record;
pub use value::{Literal, Value};
