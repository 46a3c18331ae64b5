use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::activation::activation::step;
use crate::dataset::truth_tables::LabeledCase;

/// Step size applied to every weight and bias correction.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// A single linear threshold neuron.
///
/// Holds one weight per input plus a bias; classification is the step
/// activation of the weighted sum. Parameters mutate only through
/// `test_case`, which applies the perceptron learning rule on a miss.
///
/// `Clone` deep-copies the weight vector, so a cloned neuron can seed an
/// independent training run without aliasing the original's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    bias: f64,
    weights: Vec<f64>,
    learning_rate: f64,
}

impl Neuron {
    /// Creates a neuron with the given bias and weights and the default
    /// learning rate. No dimensionality validation is performed; callers
    /// supply inputs matching `weights.len()`.
    pub fn new(bias: f64, weights: Vec<f64>) -> Neuron {
        Neuron {
            bias,
            weights,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    /// Creates a neuron with `arity` weights and a bias, all drawn
    /// uniformly from [-1, 1).
    pub fn random(arity: usize) -> Neuron {
        let mut rng = rand::thread_rng();
        let weights = (0..arity).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
        let bias = rng.gen::<f64>() * 2.0 - 1.0;
        Neuron::new(bias, weights)
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Classifies an input vector: `step(bias + Σ weights[i] * inputs[i])`.
    ///
    /// The accumulation is bounded by the neuron's own weight count.
    /// Pure; no parameter is touched.
    ///
    /// # Panics
    /// Panics if `inputs` has fewer elements than the neuron has weights.
    pub fn evaluate(&self, inputs: &[f64]) -> f64 {
        let mut sum = self.bias;
        for i in 0..self.weights.len() {
            sum += self.weights[i] * inputs[i];
        }
        step(sum)
    }

    /// Evaluates one labeled case. Returns `true` on a correct
    /// classification, leaving the parameters untouched. On a miss,
    /// applies one perceptron update for this case and returns `false`.
    ///
    /// `step` produces exactly 0.0 or 1.0, so the equality check is exact.
    pub fn test_case(&mut self, case: &LabeledCase) -> bool {
        let produced = self.evaluate(&case.inputs);
        if produced == case.expected {
            return true;
        }
        self.adjust(&case.inputs, case.expected - produced);
        false
    }

    /// The classical perceptron update: move each weight in the direction
    /// that reduces the error for this one case, then shift the bias.
    fn adjust(&mut self, inputs: &[f64], error: f64) {
        for i in 0..self.weights.len() {
            self.weights[i] += error * self.learning_rate * inputs[i];
        }
        self.bias += error * self.learning_rate;
    }
}

impl Default for Neuron {
    /// The reference starting point for the two-input logic-gate runs:
    /// bias 0, weights [1, 1].
    fn default() -> Neuron {
        Neuron::new(0.0, vec![1.0, 1.0])
    }
}
