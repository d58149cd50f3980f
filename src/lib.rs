// src/lib.rs — Library root for tooljudge

pub mod cli;
pub mod core;
pub mod evaluator;
pub mod infra;
pub mod runner;
