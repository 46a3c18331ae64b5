pub mod truth_tables;

pub use truth_tables::{LabeledCase, and_table, or_table, xor_table};
