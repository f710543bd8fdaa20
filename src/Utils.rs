/// Terminal logger setup for the binary.
pub mod logger;
