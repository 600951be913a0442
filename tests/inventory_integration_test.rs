use fleet_inventory::core::Storage;
use fleet_inventory::{Car, FleetError, Inventory, LoadPolicy, LocalStorage, Outcome, Session, Settings};
use tempfile::TempDir;

fn settings_for(temp_dir: &TempDir) -> Settings {
    Settings {
        database_path: temp_dir
            .path()
            .join("inventory.csv")
            .to_str()
            .unwrap()
            .to_string(),
        ..Settings::default()
    }
}

#[test]
fn test_rental_scenario() {
    let mut inventory = Inventory::new();

    assert!(inventory.add(Car::new("A1", "Toyota", "Corolla", 2020, 1000)).is_ok());
    assert!(matches!(
        inventory.add(Car::new("A1", "Toyota", "Corolla", 2020, 1000)),
        Err(FleetError::DuplicatePlate { .. })
    ));
    assert!(inventory.rent("A1").is_ok());
    assert!(matches!(inventory.rent("A1"), Err(FleetError::AlreadyRented { .. })));
    assert!(inventory.return_car("A1").is_ok());
    assert!(matches!(inventory.return_car("A1"), Err(FleetError::NotRented { .. })));
    assert!(inventory.remove("A1").is_ok());
    assert!(matches!(inventory.remove("A1"), Err(FleetError::NotFound { .. })));
}

#[test]
fn test_repeated_adds_never_duplicate_plates() {
    let mut inventory = Inventory::new();
    let plates = ["A1", "B2", "A1", "C3", "B2", "A1"];

    for (i, plate) in plates.iter().enumerate() {
        let _ = inventory.add(Car::new(*plate, "Make", "Model", 2000 + i as i32, i as i64));
    }

    let mut seen: Vec<&str> = inventory.list_all().iter().map(|c| c.plate.as_str()).collect();
    assert_eq!(seen, vec!["A1", "B2", "C3"]);
    seen.dedup();
    assert_eq!(seen.len(), inventory.len());
}

#[test]
fn test_round_trip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let mut inventory = Inventory::new();
    inventory.add(Car::new("XYZ999", "Honda", "Civic", 2019, 30000)).unwrap();
    inventory.save(&storage, "inventory.csv").unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("inventory.csv")).unwrap();
    assert_eq!(
        content,
        "Plate,Make,Model,Year,Mileage,Rented\nXYZ999,Honda,Civic,2019,30000,False\n"
    );

    let mut restored = Inventory::new();
    let loaded = restored
        .load(&storage, "inventory.csv", LoadPolicy::default())
        .unwrap();
    assert_eq!(loaded, 1);
    assert_eq!(
        restored.find("XYZ999"),
        Some(&Car::new("XYZ999", "Honda", "Civic", 2019, 30000))
    );
}

#[test]
fn test_round_trip_preserves_order_and_rented_flags() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let mut inventory = Inventory::new();
    for (plate, make) in [("C3", "Kia"), ("A1", "Toyota"), ("B2", "Ford")] {
        inventory.add(Car::new(plate, make, "Model", 2018, 100)).unwrap();
    }
    inventory.rent("A1").unwrap();
    inventory.save(&storage, "data/fleet.csv").unwrap();

    let mut restored = Inventory::new();
    restored.load(&storage, "data/fleet.csv", LoadPolicy::default()).unwrap();
    assert_eq!(restored.list_all(), inventory.list_all());
}

#[test]
fn test_load_missing_path() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let mut inventory = Inventory::new();
    inventory.add(Car::new("A1", "Toyota", "Corolla", 2020, 1000)).unwrap();

    let result = inventory.load(&storage, "nope.csv", LoadPolicy::default());
    assert!(matches!(result, Err(FleetError::FileMissing { .. })));
    assert!(inventory.is_empty());
}

#[test]
fn test_load_accepts_duplicate_plates_unless_strict() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    storage
        .write_file(
            "dupes.csv",
            b"Plate,Make,Model,Year,Mileage,Rented\nA1,Toyota,Corolla,2020,1,False\nA1,Honda,Civic,2019,2,True\n",
        )
        .unwrap();

    let mut inventory = Inventory::new();
    inventory.load(&storage, "dupes.csv", LoadPolicy::AcceptDuplicates).unwrap();
    assert_eq!(inventory.len(), 2);

    let result = inventory.load(&storage, "dupes.csv", LoadPolicy::RejectDuplicates);
    assert!(matches!(result, Err(FleetError::DuplicatePlate { .. })));
    assert_eq!(inventory.len(), 1);
}

#[test]
fn test_session_persists_between_runs() {
    let temp_dir = TempDir::new().unwrap();

    let mut first = Session::new(LocalStorage::current_dir(), settings_for(&temp_dir));
    assert!(first.start().contains("does not exist yet"));

    let script = "add A1 Toyota Corolla 2020 1000\nadd B2 Honda Civic 2019 30000\nrent B2\nsave\nquit\n";
    let mut output = Vec::new();
    first.run(script.as_bytes(), &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Inventory saved to"));

    let mut second = Session::new(LocalStorage::current_dir(), settings_for(&temp_dir));
    assert!(second.start().starts_with("Loaded 2 cars from"));
    assert!(second.inventory().find("B2").unwrap().rented);

    match second.execute_line("rent B2") {
        Some(Outcome::Message(message)) => assert_eq!(message, "Car B2 is already rented."),
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_session_does_not_autosave() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_for(&temp_dir);
    let database = settings.database_path.clone();

    let mut session = Session::new(LocalStorage::current_dir(), settings);
    session.start();
    let mut output = Vec::new();
    session
        .run("add A1 Toyota Corolla 2020 1000\nquit\n".as_bytes(), &mut output)
        .unwrap();

    assert!(!std::path::Path::new(&database).exists());
}
