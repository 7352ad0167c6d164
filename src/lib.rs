pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::Settings;

pub use adapters::LocalStorage;
pub use core::{
    equality::roots_equal, format::RootFormatter, harness::TestHarness, solver::Solver,
    tolerance::Tolerance,
};
pub use domain::model::{Equation, RootCount};
pub use utils::error::{QuadError, Result};
