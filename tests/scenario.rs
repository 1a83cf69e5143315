use approx::assert_relative_eq;

use nbody::{decode, encode, format_elapsed, Scenario, ScenarioConfig, SimError, FormatError, NVec2, Universe, Viewport};

// ==================================================================================
// YAML scenarios
// ==================================================================================

#[test]
fn scenario_builds_universe_and_parameters() {
    let cfg = ScenarioConfig::from_yaml_str(
        r#"
parameters:
  t_end: 1000.0
  dt: 250.0
extent: 1.0e11
bodies:
  - x: [ 1.0, 2.0 ]
    v: [ 0.1, 0.2 ]
    m: 1.0e5
    label: test.gif
  - x: [ 3.0, 4.0 ]
    v: [ 0.0, 0.0 ]
    m: -2.0e5
    label: anti.gif
"#,
    )
    .unwrap();

    let scenario = Scenario::build_scenario(cfg).unwrap();
    let params = scenario.parameters.unwrap();
    assert_eq!(params.t_end, 1000.0);
    assert_eq!(params.dt, 250.0);

    let u = &scenario.universe;
    assert_eq!(u.len(), 2);
    assert_eq!(u.extent(), 1.0e11);
    assert_eq!(u.body(0).unwrap().position(), NVec2::new(1.0, 2.0));
    assert_eq!(u.body(0).unwrap().label(), "test.gif");
    assert_eq!(u.body(1).unwrap().mass(), -2.0e5);
    assert_eq!(u.body(1).unwrap().label(), "anti.gif");
}

#[test]
fn scenario_without_parameters() {
    let cfg = ScenarioConfig::from_yaml_str("bodies: []\n").unwrap();
    let scenario = Scenario::build_scenario(cfg).unwrap();

    assert!(scenario.parameters.is_none());
    assert!(scenario.universe.is_empty());
    assert_eq!(scenario.universe.extent(), 0.0);
}

#[test]
fn scenario_rejects_negative_extent() {
    let cfg = ScenarioConfig::from_yaml_str("extent: -1.0\nbodies: []\n").unwrap();
    let err = Scenario::build_scenario(cfg).unwrap_err();
    assert!(matches!(err, SimError::Format(FormatError::NegativeExtent(_))));
}

#[test]
fn scenario_rejects_unreachable_t_end() {
    let cfg = ScenarioConfig::from_yaml_str(
        "parameters: { t_end: 10.0, dt: 0.0 }\nbodies: []\n",
    )
    .unwrap();
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::Config(_))));
}

#[test]
fn scenario_requires_a_label() {
    let yaml = "bodies:\n  - { x: [0.0, 0.0], v: [0.0, 0.0], m: 1.0 }\n";
    assert!(ScenarioConfig::from_yaml_str(yaml).is_err());
}

#[test]
fn scenario_rejects_labels_that_cannot_round_trip() {
    for label in ["\"\"", "\"red giant\"", "\"tab\\tbed\""] {
        let yaml = format!(
            "bodies:\n  - {{ x: [0.0, 0.0], v: [0.0, 0.0], m: 1.0, label: {label} }}\n"
        );
        let cfg = ScenarioConfig::from_yaml_str(&yaml).unwrap();
        let err = Scenario::build_scenario(cfg).unwrap_err();
        assert!(
            matches!(err, SimError::Format(FormatError::BadLabel(_))),
            "label {label} accepted: {err:?}"
        );
    }
}

#[test]
fn scenario_output_decodes_again() {
    let cfg = ScenarioConfig::from_yaml_str(
        "extent: 1.0\nbodies:\n  - { x: [0.0, 0.0], v: [0.0, 0.0], m: 1.0, label: dwarf.gif }\n",
    )
    .unwrap();
    let u = Scenario::build_scenario(cfg).unwrap().universe;

    assert_eq!(decode(&encode(&u)).unwrap(), u);
}

#[test]
fn bundled_scenario_matches_snapshot_fixture() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join("binary.yaml");
    let cfg = ScenarioConfig::from_yaml_file(path).unwrap();
    let mut scenario = Scenario::build_scenario(cfg).unwrap();

    let snapshot: Universe = "3\n1.25e11\n\
                              0 0 500 0 5.974e24 earth.gif\n\
                              0 4.5e10 3e4 0 1.989e30 sun.gif\n\
                              0 -4.5e10 -3e4 0 1.989e30 sun.gif\n"
        .parse()
        .unwrap();
    assert_eq!(scenario.universe, snapshot);

    scenario.universe.step(250.0);
    assert_relative_eq!(scenario.universe.body(0).unwrap().position().x, 125000.0);
}

#[test]
fn missing_scenario_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScenarioConfig::from_yaml_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

// ==================================================================================
// Presentation helpers
// ==================================================================================

#[test]
fn viewport_maps_extent_to_shorter_side() {
    let view = Viewport::default();
    let extent = 1.0e11;

    assert_eq!(view.to_screen(extent, NVec2::zeros()), (400.0, 400.0));
    assert_eq!(view.to_screen(extent, NVec2::new(1.0e11, 0.0)), (800.0, 400.0));
    assert_eq!(view.to_screen(extent, NVec2::new(0.0, 1.0e11)), (400.0, 0.0));

    let wide = Viewport::new(800, 600);
    assert_eq!(wide.to_screen(extent, NVec2::new(-1.0e11, -1.0e11)), (100.0, 600.0));
}

#[test]
fn viewport_zero_extent_collapses_to_centre() {
    let view = Viewport::new(640, 480);
    assert_eq!(view.scale(0.0), 0.0);
    assert_eq!(view.to_screen(0.0, NVec2::new(5.0, -5.0)), (320.0, 240.0));
}

#[test]
fn viewport_projects_every_body() {
    let u: Universe = "2 10\n0 0 0 0 1 a.gif\n10 -10 0 0 1 b.gif\n".parse().unwrap();
    let points = Viewport::default().project(&u);
    assert_eq!(points, vec![(400.0, 400.0), (800.0, 800.0)]);
}

#[test]
fn elapsed_time_units() {
    assert_eq!(format_elapsed(0.0), "0.00 s");
    assert_eq!(format_elapsed(3600.0), "3600.00 s");
    assert_eq!(format_elapsed(86_400.0), "1.00 days");
    assert_eq!(format_elapsed(43_200.0 * 3.0), "1.50 days");
    assert_eq!(format_elapsed(31_536_000.0), "1.00 years");
    assert_eq!(format_elapsed(31_536_000.0 * 2.5), "2.50 years");
}
