//! Common test utilities for SDK integration tests

use verdict_sdk::Record;

pub const RULE_1: &str = r#"((age > 30 AND department == "Sales") OR (age < 25 AND department == "Marketing")) AND (salary > 50000 OR experience > 5)"#;
pub const RULE_2: &str = r#"((age > 30 AND department == "Marketing")) AND (salary > 20000 OR experience > 5)"#;

/// Build a record of the four employee fields used by the fixtures
pub fn employee(age: i64, department: &str, salary: i64, experience: i64) -> Record {
    Record::new()
        .with("age", age)
        .with("department", department)
        .with("salary", salary)
        .with("experience", experience)
}
