//! End-to-end training properties over the fixed logic-gate truth tables.

use pyrite_perceptron::dataset::truth_tables::{and_table, or_table, xor_table};
use pyrite_perceptron::{train, TrainConfig};

#[test]
fn and_converges_unbounded_within_ten_epochs() {
    let result = train(TrainConfig::new(and_table()));
    assert!(result.classifies_all(&and_table()));
    assert!(result.epochs >= 1);
    assert!(result.epochs <= 10);
}

#[test]
fn or_converges_unbounded_within_ten_epochs() {
    let result = train(TrainConfig::new(or_table()));
    assert!(result.classifies_all(&or_table()));
    assert!(result.epochs >= 1);
    assert!(result.epochs <= 10);
}

#[test]
fn or_trained_from_and_neuron_converges_without_touching_the_source() {
    let and_run = train(TrainConfig::new(and_table()));
    let source_bias = and_run.neuron.bias();
    let source_weights = and_run.neuron.weights().to_vec();

    let mut seeded = TrainConfig::new(or_table());
    seeded.neuron = Some(and_run.neuron.clone());
    let transfer_run = train(seeded);

    assert!(transfer_run.classifies_all(&or_table()));
    assert_eq!(and_run.neuron.bias(), source_bias);
    assert_eq!(and_run.neuron.weights(), source_weights);
    assert!(and_run.classifies_all(&and_table()));
}

#[test]
fn xor_terminates_at_exactly_the_epoch_cap() {
    let mut config = TrainConfig::new(xor_table());
    config.max_epochs = 2000;
    let result = train(config);

    assert_eq!(result.epochs, 2000);
    assert!(!result.classifies_all(&xor_table()));
}

#[test]
fn retraining_a_converged_neuron_returns_after_one_pass() {
    let first = train(TrainConfig::new(and_table()));
    let trained_bias = first.neuron.bias();
    let trained_weights = first.neuron.weights().to_vec();

    let mut again = TrainConfig::new(and_table());
    again.neuron = Some(first.neuron.clone());
    let second = train(again);

    assert_eq!(second.epochs, 1);
    assert_eq!(second.neuron.bias(), trained_bias);
    assert_eq!(second.neuron.weights(), trained_weights);
}
