pub mod database;
pub mod inventory;

pub use crate::domain::model::{Car, RentalStatus};
pub use crate::domain::ports::{ConfigProvider, LoadPolicy, Storage};
pub use crate::utils::error::Result;
pub use inventory::Inventory;
