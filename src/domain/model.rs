use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalStatus {
    Available,
    Rented,
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalStatus::Available => write!(f, "Available"),
            RentalStatus::Rented => write!(f, "Rented"),
        }
    }
}

/// One car in the fleet. Only `rented` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: i64,
    pub rented: bool,
}

impl Car {
    pub fn new(
        plate: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        mileage: i64,
    ) -> Self {
        Self {
            plate: plate.into(),
            make: make.into(),
            model: model.into(),
            year,
            mileage,
            rented: false,
        }
    }

    pub fn status(&self) -> RentalStatus {
        if self.rented {
            RentalStatus::Rented
        } else {
            RentalStatus::Available
        }
    }

    /// Multi-line rendering, one `Label: value` per line.
    pub fn details(&self) -> String {
        format!(
            "Plate: {}\nMake: {}\nModel: {}\nYear: {}\nMileage: {}\nStatus: {}",
            self.plate,
            self.make,
            self.model,
            self.year,
            self.mileage,
            self.status()
        )
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plate: {}, Make: {}, Model: {}, Year: {}, Mileage: {}, Status: {}",
            self.plate,
            self.make,
            self.model,
            self.year,
            self.mileage,
            self.status()
        )
    }
}
