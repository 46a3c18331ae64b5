use crate::dataset::truth_tables::LabeledCase;
use crate::neuron::neuron::Neuron;
use crate::train::train_config::TrainConfig;
use crate::train::training_result::TrainingResult;

/// Trains a neuron on `config.cases` until every case classifies correctly
/// or the epoch cap is reached.
///
/// Each epoch is one full pass calling `Neuron::test_case` on every case in
/// sequence order. The neuron adjusts itself mid-pass, so later cases in
/// the same pass are evaluated against the already-shifted weights
/// (on-line learning, not a frozen-snapshot pass).
///
/// # Termination
/// - A pass with zero misses is convergence; the current epoch count is
///   returned immediately.
/// - Otherwise, once `max_epochs` is nonzero and reached, the run returns
///   not-converged. `TrainingResult::classifies_all` distinguishes the two.
///
/// # Panics
/// Panics if `config.cases` is empty or any case's arity differs from the
/// neuron's weight count.
pub fn train(config: TrainConfig) -> TrainingResult {
    let TrainConfig {
        cases,
        neuron,
        max_epochs,
    } = config;
    let mut neuron = neuron.unwrap_or_default();

    assert!(!cases.is_empty(), "cases must not be empty");
    for case in &cases {
        assert_eq!(
            case.inputs.len(),
            neuron.weights().len(),
            "case arity must match the neuron's weight count"
        );
    }

    let mut epochs = 1;
    loop {
        let misses = run_one_pass(&mut neuron, &cases);
        if misses == 0 {
            break;
        }
        if max_epochs != 0 && epochs == max_epochs {
            break;
        }
        epochs += 1;
    }

    TrainingResult { epochs, neuron }
}

/// Runs one full pass over the cases in order, letting the neuron adjust
/// itself on every miss. Returns the number of misses.
fn run_one_pass(neuron: &mut Neuron, cases: &[LabeledCase]) -> usize {
    let mut misses = 0;
    for case in cases {
        if !neuron.test_case(case) {
            misses += 1;
        }
    }
    misses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "cases must not be empty")]
    fn empty_case_list_is_rejected() {
        train(TrainConfig::new(vec![]));
    }

    #[test]
    #[should_panic(expected = "case arity must match")]
    fn mismatched_arity_is_rejected() {
        train(TrainConfig::new(vec![LabeledCase::new(vec![1.0], 1.0)]));
    }
}
