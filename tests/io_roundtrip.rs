#![forbid(unsafe_code)]
use shiftgrid::{
    io, DayKey, Employee, EngineConfig, Highlight, JsonStorage, SeededSource, ShiftCell,
    ShiftEngine, ShiftKind, ShiftRequests, Storage,
};
use std::fs;

fn reference_engine() -> ShiftEngine {
    ShiftEngine::new(EngineConfig::reference_july_2024()).unwrap()
}

#[test]
fn schedule_survives_json_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.json");

    let generation = reference_engine()
        .generate(&ShiftRequests::default(), &mut SeededSource::new(4))
        .unwrap();
    let storage = JsonStorage::open(&path).unwrap();
    storage.save(&generation.schedule).unwrap();
    let loaded = storage.load().unwrap();
    assert_eq!(loaded, generation.schedule);
}

#[test]
fn csv_export_writes_one_row_per_employee() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.csv");

    let engine = reference_engine();
    let generation = engine
        .generate(&ShiftRequests::default(), &mut SeededSource::new(4))
        .unwrap();
    io::export_schedule_csv(&path, &generation.schedule, &engine.config().roster).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("employee,2024-07-01,"));
    assert_eq!(lines.count(), 10);
    // Les cellules sont exportées en glyphes du déploiement de référence.
    assert!(content.contains('公'));
}

#[test]
fn requests_csv_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("requests.csv");
    fs::write(
        &path,
        "employee,kind,date\n土井,off,2024-07-10\n小川,preferred,2024-07-11\n",
    )
    .unwrap();

    let requests = io::import_requests_csv(&path).unwrap();
    assert!(requests.off_days[&Employee::new("土井")].contains(&DayKey::new("2024-07-10")));
    assert!(requests.preferred_days[&Employee::new("小川")].contains(&DayKey::new("2024-07-11")));

    fs::write(&path, "employee,kind,date\n土井,maybe,2024-07-10\n").unwrap();
    assert!(io::import_requests_csv(&path).is_err());

    fs::write(&path, "employee,kind,date\n土井,off,10 juillet\n").unwrap();
    assert!(io::import_requests_csv(&path).is_err());
}

#[test]
fn config_round_trip_and_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = EngineConfig::reference_july_2024();
    io::export_config_json(&path, &config).unwrap();
    let loaded = io::load_config_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    fs::write(&path, r#"{"roster":[],"year":2024,"month0":6}"#).unwrap();
    assert!(io::load_config_from_file(&path).is_err());
}

#[test]
fn wire_format_matches_the_reference_api() {
    // Corps de requête : clés camelCase, listes de jours par employé.
    let body = r#"{"preferredDays":{"a":["2024-07-02"]},"offDays":{"b":["2024-07-03"]}}"#;
    let requests: ShiftRequests = serde_json::from_str(body).unwrap();
    assert!(requests.preferred_days[&Employee::new("a")].contains(&DayKey::new("2024-07-02")));
    assert!(requests.off_days[&Employee::new("b")].contains(&DayKey::new("2024-07-03")));

    // Les deux champs sont optionnels et vides par défaut.
    let empty: ShiftRequests = serde_json::from_str("{}").unwrap();
    assert!(empty.is_empty());

    // Cellule : `type`/`classname`, `fixed` émis seulement quand vrai.
    let fixed_off = ShiftCell::off(Highlight::Off, true);
    assert_eq!(
        serde_json::to_string(&fixed_off).unwrap(),
        r#"{"type":"off","classname":"off-highlight","fixed":true}"#
    );
    let plain = ShiftCell {
        kind: ShiftKind::Early,
        highlight: Highlight::None,
        fixed: false,
    };
    assert_eq!(
        serde_json::to_string(&plain).unwrap(),
        r#"{"type":"early","classname":""}"#
    );
}

#[test]
fn schedule_serializes_day_then_employee() {
    let generation = reference_engine()
        .generate(&ShiftRequests::default(), &mut SeededSource::new(8))
        .unwrap();
    let value = serde_json::to_value(&generation.schedule).unwrap();
    let days = value.as_object().unwrap();
    assert_eq!(days.len(), 31);
    let first = days.get("2024-07-01").unwrap().as_object().unwrap();
    assert_eq!(first.len(), 10);
    assert!(first.get("土井").unwrap().get("type").is_some());
}
