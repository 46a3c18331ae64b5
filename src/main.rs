use serde::Serialize;

use pyrite_perceptron::dataset::truth_tables::{and_table, or_table, xor_table};
use pyrite_perceptron::{train, LabeledCase, TrainConfig, TrainingResult};

/// One printable record per demonstration run.
#[derive(Serialize)]
struct RunRecord<'a> {
    name: &'a str,
    epochs: usize,
    converged: bool,
    bias: f64,
    weights: &'a [f64],
}

fn main() {
    let and_run = train(TrainConfig::new(and_table()));
    report("AND", &and_run, &and_table());

    let or_run = train(TrainConfig::new(or_table()));
    report("OR", &or_run, &or_table());

    // Seed OR training from a copy of the AND-trained neuron; the AND
    // result keeps its own weights.
    let mut seeded = TrainConfig::new(or_table());
    seeded.neuron = Some(and_run.neuron.clone());
    let transfer_run = train(seeded);
    report("OR from AND neuron", &transfer_run, &or_table());

    // XOR is not linearly separable; the cap is what ends the run.
    let mut capped = TrainConfig::new(xor_table());
    capped.max_epochs = 2000;
    let xor_run = train(capped);
    report("XOR", &xor_run, &xor_table());
}

fn report(name: &str, result: &TrainingResult, cases: &[LabeledCase]) {
    let record = RunRecord {
        name,
        epochs: result.epochs,
        converged: result.classifies_all(cases),
        bias: result.neuron.bias(),
        weights: result.neuron.weights(),
    };
    let rendered = serde_json::to_string_pretty(&record).expect("run record serializes");
    println!("{rendered}");
    for case in cases {
        println!("  {:?} -> {}", case.inputs, result.neuron.evaluate(&case.inputs));
    }
    println!();
}
