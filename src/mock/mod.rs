pub mod generator;

pub use generator::{MockConfig, MockSimulator};
