use isobrush::settings::Settings;

#[test]
fn settings_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("isobrush.json");
    let path = path.to_string_lossy().into_owned();

    let settings = Settings {
        grid_width: 20,
        grid_height: 15,
        zoom_enabled: false,
        movable_widget: false,
        texture_paths: vec!["grass.png".to_string(), "water.png".to_string()],
        ..Settings::default()
    };
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn absent_settings_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let loaded = Settings::load(&path.to_string_lossy()).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn unknown_zoom_fields_keep_their_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"screen_width": 1024}"#).unwrap();

    let loaded = Settings::load(&path.to_string_lossy()).unwrap();
    assert_eq!(loaded.screen_width, 1024);
    assert!((loaded.zoom_floor - 0.2).abs() < 1e-6);
    assert!((loaded.zoom_step - 0.1).abs() < 1e-6);
    assert!(loaded.center_grid);
}
