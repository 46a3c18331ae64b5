pub mod activation;
pub mod dataset;
pub mod neuron;
pub mod train;

// Convenience re-exports
pub use activation::activation::step;
pub use dataset::truth_tables::LabeledCase;
pub use neuron::neuron::Neuron;
pub use train::trainer::train;
pub use train::train_config::TrainConfig;
pub use train::training_result::TrainingResult;
