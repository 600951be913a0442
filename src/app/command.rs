use crate::utils::error::{FleetError, Result};
use crate::utils::validation::parse_integer;

pub const USAGE: &str = "\
Commands:
  add PLATE MAKE MODEL YEAR MILEAGE   add a car
  remove PLATE                        remove a car
  find PLATE                          show one car
  rent PLATE                          mark a car as rented
  return PLATE                        mark a car as returned
  list [--json]                       show every car
  save [PATH]                         write the inventory to PATH
  load [PATH]                         replace the inventory with PATH
  help                                show this message
  quit                                leave without saving
Use double quotes for values with spaces, e.g. add X1 \"Land Rover\" Defender 2021 500";

/// One user action. Each variant maps to exactly one inventory operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        plate: String,
        make: String,
        model: String,
        year: i32,
        mileage: i64,
    },
    Remove { plate: String },
    Find { plate: String },
    Rent { plate: String },
    Return { plate: String },
    List { json: bool },
    Save { path: Option<String> },
    Load { path: Option<String> },
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let tokens = tokenize(line)?;
        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "add" => {
                let [plate, make, model, year, mileage] = args else {
                    return Err(usage("add PLATE MAKE MODEL YEAR MILEAGE"));
                };
                // Year 先驗證，其次 Mileage
                let year = parse_integer::<i32>("Year", year)?;
                let mileage = parse_integer::<i64>("Mileage", mileage)?;
                Command::Add {
                    plate: plate.clone(),
                    make: make.clone(),
                    model: model.clone(),
                    year,
                    mileage,
                }
            }
            "remove" => Command::Remove {
                plate: single_plate("remove", args)?,
            },
            "find" => Command::Find {
                plate: single_plate("find", args)?,
            },
            "rent" => Command::Rent {
                plate: single_plate("rent", args)?,
            },
            "return" => Command::Return {
                plate: single_plate("return", args)?,
            },
            "list" => match args {
                [] => Command::List { json: false },
                [flag] if flag == "--json" => Command::List { json: true },
                _ => return Err(usage("list [--json]")),
            },
            "save" => Command::Save {
                path: optional_path("save", args)?,
            },
            "load" => Command::Load {
                path: optional_path("load", args)?,
            },
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(FleetError::ValidationError {
                    message: format!("Unknown command '{}'. Type `help` for a list of commands.", other),
                })
            }
        };

        Ok(Some(command))
    }
}

fn single_plate(name: &str, args: &[String]) -> Result<String> {
    match args {
        [plate] => Ok(plate.clone()),
        _ => Err(usage(&format!("{} PLATE", name))),
    }
}

fn optional_path(name: &str, args: &[String]) -> Result<Option<String>> {
    match args {
        [] => Ok(None),
        [path] => Ok(Some(path.clone())),
        _ => Err(usage(&format!("{} [PATH]", name))),
    }
}

fn usage(form: &str) -> FleetError {
    FleetError::ValidationError {
        message: format!("Usage: {}", form),
    }
}

/// Splits on whitespace; double quotes group a token and may produce an
/// empty one (`""`).
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(FleetError::ValidationError {
            message: "Unterminated quote.".to_string(),
        });
    }
    if has_token {
        tokens.push(current);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            tokenize(r#"add X1 "Land Rover" Defender 2021 500"#).unwrap(),
            vec!["add", "X1", "Land Rover", "Defender", "2021", "500"]
        );
        assert_eq!(tokenize(r#"find """#).unwrap(), vec!["find", ""]);
        assert!(tokenize("   ").unwrap().is_empty());
        assert!(tokenize(r#"add "open"#).is_err());
    }

    #[test]
    fn test_parse_add() {
        let command = Command::parse("add A1 Toyota Corolla 2020 1000").unwrap();
        assert_eq!(
            command,
            Some(Command::Add {
                plate: "A1".to_string(),
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2020,
                mileage: 1000,
            })
        );
    }

    #[test]
    fn test_parse_add_validates_integers() {
        let err = Command::parse("add A1 Toyota Corolla new 1000").unwrap_err();
        assert_eq!(err.to_string(), "Year must be an integer.");

        let err = Command::parse("add A1 Toyota Corolla 2020 far").unwrap_err();
        assert_eq!(err.to_string(), "Mileage must be an integer.");

        // Year 錯誤優先回報
        let err = Command::parse("add A1 Toyota Corolla x y").unwrap_err();
        assert_eq!(err.to_string(), "Year must be an integer.");
    }

    #[test]
    fn test_parse_arity_errors() {
        assert!(Command::parse("add A1 Toyota").is_err());
        assert!(Command::parse("rent").is_err());
        assert!(Command::parse("rent A1 B2").is_err());
        assert!(Command::parse("list --yaml").is_err());
        assert!(Command::parse("save a.csv b.csv").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(
            Command::parse("RENT A1").unwrap(),
            Some(Command::Rent { plate: "A1".to_string() })
        );
        assert_eq!(
            Command::parse("list --json").unwrap(),
            Some(Command::List { json: true })
        );
        assert_eq!(
            Command::parse("save backup.csv").unwrap(),
            Some(Command::Save { path: Some("backup.csv".to_string()) })
        );
        assert_eq!(Command::parse("load").unwrap(), Some(Command::Load { path: None }));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("fly A1").unwrap_err();
        assert!(err.to_string().contains("Unknown command 'fly'"));
    }
}
