use crate::app::command::{Command, USAGE};
use crate::core::{Car, ConfigProvider, Inventory, Storage};
use crate::utils::error::{FleetError, Result};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "fleet> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Message(String),
    Quit(String),
}

/// Interactive session: owns the inventory and turns each command into one
/// inventory call plus a message for the user.
pub struct Session<S: Storage, C: ConfigProvider> {
    inventory: Inventory,
    storage: S,
    config: C,
    unsaved_changes: bool,
}

impl<S: Storage, C: ConfigProvider> Session<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            inventory: Inventory::new(),
            storage,
            config,
            unsaved_changes: false,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Loads the configured database. A missing file is reported, not fatal.
    pub fn start(&mut self) -> String {
        let path = self.config.database_path().to_string();
        self.load(&path)
    }

    pub fn execute_line(&mut self, line: &str) -> Option<Outcome> {
        match Command::parse(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(e) => Some(Outcome::Message(e.to_string())),
        }
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::debug!("Executing {:?}", command);

        let message = match command {
            Command::Add {
                plate,
                make,
                model,
                year,
                mileage,
            } => {
                let car = Car::new(plate, make, model, year, mileage);
                self.mutate(|inventory| inventory.add(car), "Car added successfully.")
            }
            Command::Remove { plate } => self.mutate(
                |inventory| inventory.remove(&plate).map(|_| ()),
                "Car removed successfully.",
            ),
            Command::Find { plate } => match self.inventory.find(&plate) {
                Some(car) => car.details(),
                None => render_error(&FleetError::NotFound { plate }),
            },
            Command::Rent { plate } => {
                self.mutate(|inventory| inventory.rent(&plate), "Car rented successfully.")
            }
            Command::Return { plate } => self.mutate(
                |inventory| inventory.return_car(&plate),
                "Car returned successfully.",
            ),
            Command::List { json } => self.list(json),
            Command::Save { path } => {
                let path = path.unwrap_or_else(|| self.config.database_path().to_string());
                self.save(&path)
            }
            Command::Load { path } => {
                let path = path.unwrap_or_else(|| self.config.database_path().to_string());
                self.load(&path)
            }
            Command::Help => USAGE.to_string(),
            Command::Quit => {
                let message = if self.unsaved_changes {
                    "Goodbye. Unsaved changes were discarded."
                } else {
                    "Goodbye."
                };
                return Outcome::Quit(message.to_string());
            }
        };

        Outcome::Message(message)
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line) {
                Some(Outcome::Message(message)) => writeln!(output, "{}", message)?,
                Some(Outcome::Quit(message)) => {
                    writeln!(output, "{}", message)?;
                    return Ok(());
                }
                None => {}
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn mutate<F>(&mut self, operation: F, success: &str) -> String
    where
        F: FnOnce(&mut Inventory) -> Result<()>,
    {
        match operation(&mut self.inventory) {
            Ok(()) => {
                self.unsaved_changes = true;
                success.to_string()
            }
            Err(e) => render_error(&e),
        }
    }

    fn list(&self, json: bool) -> String {
        let cars = self.inventory.list_all();

        if json {
            return match serde_json::to_string_pretty(cars) {
                Ok(output) => output,
                Err(e) => render_error(&FleetError::from(e)),
            };
        }

        if cars.is_empty() {
            return "No cars in the inventory.".to_string();
        }

        let mut lines: Vec<String> = cars.iter().map(Car::to_string).collect();
        lines.push(format!(
            "{} ({} available, {} rented)",
            car_count(cars.len()),
            self.inventory.available().count(),
            self.inventory.rented().count()
        ));
        lines.join("\n")
    }

    fn save(&mut self, path: &str) -> String {
        match self.inventory.save(&self.storage, path) {
            Ok(()) => {
                self.unsaved_changes = false;
                format!("Inventory saved to {}.", path)
            }
            Err(e) => render_error(&e),
        }
    }

    fn load(&mut self, path: &str) -> String {
        let policy = self.config.load_policy();

        match self.inventory.load(&self.storage, path, policy) {
            Ok(count) => {
                self.unsaved_changes = false;
                format!("Loaded {} from {}.", car_count(count), path)
            }
            Err(e) => {
                // 部分載入的內容與任何檔案都不一致
                self.unsaved_changes = !self.inventory.is_empty();
                if matches!(e, FleetError::FileMissing { .. }) {
                    return render_error(&e);
                }

                tracing::error!("Load of {} aborted: {}", path, e);
                format!(
                    "{} Load aborted with {} in memory.",
                    render_error(&e),
                    car_count(self.inventory.len())
                )
            }
        }
    }
}

/// Registry errors read as plain sentences; anything else gets the
/// friendly message plus a recovery hint when one exists.
fn render_error(error: &FleetError) -> String {
    if error.is_registry_error() {
        return error.to_string();
    }

    match error.recovery_suggestion() {
        Some(suggestion) => format!("Error: {}. {}.", error.user_friendly_message(), suggestion),
        None => format!("Error: {}", error.user_friendly_message()),
    }
}

fn car_count(count: usize) -> String {
    if count == 1 {
        "1 car".to_string()
    } else {
        format!("{} cars", count)
    }
}
