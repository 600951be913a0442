pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::shell::{Outcome, Session};
pub use crate::config::{cli::LocalStorage, Settings};
pub use crate::core::{Car, Inventory, LoadPolicy, RentalStatus};
pub use crate::utils::error::{FleetError, Result};
