// Estatery - util/mod.rs
//
// Cross-cutting utilities: error hierarchy, logging, named constants.

pub mod constants;
pub mod error;
pub mod logging;
