#[allow(non_snake_case)]
pub mod Calculators;
#[allow(non_snake_case)]
pub mod Evaluator;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod constants;
pub mod settings;
