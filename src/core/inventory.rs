use crate::core::Car;
use crate::utils::error::{FleetError, Result};

/// In-memory fleet registry, ordered by insertion and keyed by plate.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    cars: Vec<Car>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { cars: Vec::new() }
    }

    pub fn add(&mut self, car: Car) -> Result<()> {
        if self.contains(&car.plate) {
            tracing::debug!("Rejected duplicate plate {}", car.plate);
            return Err(FleetError::DuplicatePlate { plate: car.plate });
        }

        tracing::debug!("Added car {}", car.plate);
        self.cars.push(car);
        Ok(())
    }

    pub fn remove(&mut self, plate: &str) -> Result<Car> {
        let index = self.position(plate)?;
        let car = self.cars.remove(index);
        tracing::debug!("Removed car {} (rented: {})", car.plate, car.rented);
        Ok(car)
    }

    pub fn find(&self, plate: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.plate == plate)
    }

    pub fn find_mut(&mut self, plate: &str) -> Option<&mut Car> {
        self.cars.iter_mut().find(|car| car.plate == plate)
    }

    pub fn contains(&self, plate: &str) -> bool {
        self.find(plate).is_some()
    }

    pub fn rent(&mut self, plate: &str) -> Result<()> {
        let car = self.find_mut(plate).ok_or_else(|| not_found(plate))?;
        if car.rented {
            return Err(FleetError::AlreadyRented {
                plate: plate.to_string(),
            });
        }

        car.rented = true;
        tracing::debug!("Car {} rented", plate);
        Ok(())
    }

    pub fn return_car(&mut self, plate: &str) -> Result<()> {
        let car = self.find_mut(plate).ok_or_else(|| not_found(plate))?;
        if !car.rented {
            return Err(FleetError::NotRented {
                plate: plate.to_string(),
            });
        }

        car.rented = false;
        tracing::debug!("Car {} returned", plate);
        Ok(())
    }

    pub fn list_all(&self) -> &[Car] {
        &self.cars
    }

    pub fn available(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|car| !car.rented)
    }

    pub fn rented(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|car| car.rented)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn clear(&mut self) {
        self.cars.clear();
    }

    /// Appends without the duplicate check. Only the loader uses this, to
    /// keep files with repeated plates loadable.
    pub(crate) fn push_unchecked(&mut self, car: Car) {
        self.cars.push(car);
    }

    fn position(&self, plate: &str) -> Result<usize> {
        self.cars
            .iter()
            .position(|car| car.plate == plate)
            .ok_or_else(|| not_found(plate))
    }
}

fn not_found(plate: &str) -> FleetError {
    FleetError::NotFound {
        plate: plate.to_string(),
    }
}
