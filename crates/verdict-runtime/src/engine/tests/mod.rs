//! Test modules for the evaluator

#[cfg(test)]
mod basic_execution;

#[cfg(test)]
mod short_circuit_test;
