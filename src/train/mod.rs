pub mod trainer;
pub mod train_config;
pub mod training_result;

pub use trainer::train;
pub use train_config::TrainConfig;
pub use training_result::TrainingResult;
