pub mod calculator;
pub mod examples;

pub use calculator::{CalculatorAction, CalculatorComponent};
pub use examples::ExamplesComponent;
