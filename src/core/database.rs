use crate::core::{Car, Inventory, LoadPolicy, Storage};
use crate::utils::error::{FleetError, Result};
use serde::{Deserialize, Serialize};

pub const HEADER: [&str; 6] = ["Plate", "Make", "Model", "Year", "Mileage", "Rented"];

#[derive(Serialize)]
struct CarRow<'a> {
    plate: &'a str,
    make: &'a str,
    model: &'a str,
    year: i32,
    mileage: i64,
    rented: &'static str,
}

impl<'a> From<&'a Car> for CarRow<'a> {
    fn from(car: &'a Car) -> Self {
        Self {
            plate: &car.plate,
            make: &car.make,
            model: &car.model,
            year: car.year,
            mileage: car.mileage,
            rented: if car.rented { "True" } else { "False" },
        }
    }
}

// 讀取時數字欄位先保留原始字串，才能回報是哪一列哪個欄位出錯
#[derive(Deserialize)]
struct RawCarRow {
    #[serde(rename = "Plate")]
    plate: String,
    #[serde(rename = "Make")]
    make: String,
    #[serde(rename = "Model")]
    model: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Mileage")]
    mileage: String,
    #[serde(rename = "Rented")]
    rented: String,
}

impl RawCarRow {
    fn into_car(self, row: usize) -> Result<Car> {
        let year = parse_field(row, "Year", &self.year)?;
        let mileage = parse_field(row, "Mileage", &self.mileage)?;

        Ok(Car {
            plate: self.plate,
            make: self.make,
            model: self.model,
            year,
            mileage,
            rented: self.rented == "True",
        })
    }
}

fn parse_field<T: std::str::FromStr>(row: usize, field: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| FleetError::ParseError {
        row,
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Renders the header followed by one row per car, in order.
pub fn encode(cars: &[Car]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for car in cars {
        writer.serialize(CarRow::from(car))?;
    }

    writer.into_inner().map_err(|e| FleetError::IoError(e.into_error()))
}

/// Appends every data row of `data` to `inventory` in file order.
///
/// Stops at the first bad row; rows before it stay in `inventory`.
/// Returns the number of cars appended.
pub fn decode_into(data: &[u8], inventory: &mut Inventory, policy: LoadPolicy) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data);

    let mut loaded = 0;
    for (index, row) in reader.deserialize::<RawCarRow>().enumerate() {
        let car = row?.into_car(index + 1)?;

        match policy {
            LoadPolicy::AcceptDuplicates => {
                if inventory.contains(&car.plate) {
                    tracing::warn!("Duplicate plate {} in database row {}", car.plate, index + 1);
                }
                inventory.push_unchecked(car);
            }
            LoadPolicy::RejectDuplicates => inventory.add(car)?,
        }
        loaded += 1;
    }

    Ok(loaded)
}

impl Inventory {
    /// Overwrites `path` with the whole inventory.
    pub fn save<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        let data = encode(self.list_all())?;
        storage.write_file(path, &data)?;
        tracing::info!("Saved {} cars to {}", self.len(), path);
        Ok(())
    }

    /// Replaces the inventory with the contents of `path`.
    ///
    /// The inventory is cleared first, so a missing file leaves it empty and
    /// a parse failure leaves the rows read before the bad one.
    pub fn load<S: Storage>(&mut self, storage: &S, path: &str, policy: LoadPolicy) -> Result<usize> {
        self.clear();

        if !storage.exists(path) {
            tracing::warn!("Database file {} not found", path);
            return Err(FleetError::FileMissing {
                path: path.to_string(),
            });
        }

        let data = storage.read_file(path)?;
        let loaded = decode_into(&data, self, policy)?;
        tracing::info!("Loaded {} cars from {}", loaded, path);
        Ok(loaded)
    }
}
