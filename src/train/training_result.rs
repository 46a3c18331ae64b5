use serde::{Serialize, Deserialize};

use crate::dataset::truth_tables::LabeledCase;
use crate::neuron::neuron::Neuron;

/// Outcome of a `train` run.
///
/// `epochs` is the 1-based count of full passes attempted: a run whose
/// first pass already classifies every case returns 1, and a capped run
/// returns exactly `max_epochs`. The count alone does not say whether the
/// run converged; use `classifies_all` to tell convergence apart from
/// epoch-cap exhaustion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    pub epochs: usize,
    pub neuron: Neuron,
}

impl TrainingResult {
    /// Re-checks every case against the final parameters. Pure: evaluation
    /// only, no adjustment.
    pub fn classifies_all(&self, cases: &[LabeledCase]) -> bool {
        cases
            .iter()
            .all(|case| self.neuron.evaluate(&case.inputs) == case.expected)
    }
}
