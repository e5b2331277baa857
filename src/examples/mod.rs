//! Worked examples built with the library.
//!
//! The [json] module declares a tokenizer for JSON extended with block
//! comments, exercising channels, priorities and the mode stack, together
//! with the JSON grammar compiled into rule trees.

pub mod json;

#[cfg(test)]
mod __tests__;
