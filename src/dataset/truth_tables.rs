use serde::{Serialize, Deserialize};

/// One labeled training sample: a fixed-arity input vector and the class it
/// should map to (0.0 or 1.0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledCase {
    pub inputs: Vec<f64>,
    pub expected: f64,
}

impl LabeledCase {
    pub fn new(inputs: Vec<f64>, expected: f64) -> LabeledCase {
        LabeledCase { inputs, expected }
    }
}

/// AND truth table over two boolean inputs.
///
/// Row order is part of the contract: the trainer walks cases in sequence
/// and adjusts weights mid-pass, so a different order produces different
/// intermediate weights (and epoch counts).
pub fn and_table() -> Vec<LabeledCase> {
    vec![
        LabeledCase::new(vec![1.0, 1.0], 1.0),
        LabeledCase::new(vec![1.0, 0.0], 0.0),
        LabeledCase::new(vec![0.0, 1.0], 0.0),
        LabeledCase::new(vec![0.0, 0.0], 0.0),
    ]
}

/// OR truth table, same row order as `and_table`.
pub fn or_table() -> Vec<LabeledCase> {
    vec![
        LabeledCase::new(vec![1.0, 1.0], 1.0),
        LabeledCase::new(vec![1.0, 0.0], 1.0),
        LabeledCase::new(vec![0.0, 1.0], 1.0),
        LabeledCase::new(vec![0.0, 0.0], 0.0),
    ]
}

/// XOR truth table, same row order. Not linearly separable, so no single
/// threshold neuron can classify all four rows.
pub fn xor_table() -> Vec<LabeledCase> {
    vec![
        LabeledCase::new(vec![1.0, 1.0], 0.0),
        LabeledCase::new(vec![1.0, 0.0], 1.0),
        LabeledCase::new(vec![0.0, 1.0], 1.0),
        LabeledCase::new(vec![0.0, 0.0], 0.0),
    ]
}
