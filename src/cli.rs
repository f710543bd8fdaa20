/// Category, calculator and form menus.
pub mod cli_calculator;
/// Entry menu, catalogue, settings and one-shot command line evaluation.
pub mod cli_main;
