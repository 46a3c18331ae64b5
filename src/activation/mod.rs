pub mod activation;

pub use activation::step;
