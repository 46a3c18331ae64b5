use crate::dataset::truth_tables::LabeledCase;
use crate::neuron::neuron::Neuron;

/// Configuration for a `train` run.
///
/// # Fields
/// - `cases`      : labeled samples, walked in order once per epoch
/// - `neuron`     : starting neuron; `None` means `Neuron::default()`
/// - `max_epochs` : epoch cap; `0` means unbounded
pub struct TrainConfig {
    pub cases: Vec<LabeledCase>,
    pub neuron: Option<Neuron>,
    pub max_epochs: usize,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig`: a default starting neuron and no
    /// epoch cap.
    pub fn new(cases: Vec<LabeledCase>) -> Self {
        TrainConfig {
            cases,
            neuron: None,
            max_epochs: 0,
        }
    }
}
