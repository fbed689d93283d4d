use approx::assert_abs_diff_eq;
use glam::DVec2;
use waypoint_digitizer::{AppCommand, AppController, AppIntent, AppState, ExportKind, Track};

const CUSCO: DVec2 = DVec2::new(-71.978, -13.516);

/// Geographischer Punkt, der planar um `offset` von `origin` verschoben ist.
fn shifted(state: &AppState, origin: DVec2, offset: DVec2) -> DVec2 {
    let planar = state.projection.forward(origin).unwrap() + offset;
    state.projection.inverse(planar).unwrap()
}

fn click(controller: &mut AppController, state: &mut AppState, coordinate: DVec2) {
    controller
        .handle_intent(state, AppIntent::MapClicked { coordinate })
        .expect("Klick sollte verarbeitet werden");
}

fn assert_consistent(track: &Track) {
    if track.is_empty() {
        assert!(track.lines().is_empty());
    } else {
        assert_eq!(track.lines().len(), track.points().len() - 1);
    }
    assert_eq!(track.granular_counts().len(), track.lines().len());
    assert_eq!(
        track.granular_points().len(),
        track.granular_counts().iter().sum::<usize>()
    );
}

#[test]
fn test_clicks_build_lines_and_granular_points() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let second = shifted(&state, CUSCO, DVec2::new(330.0, 0.0));
    let third = shifted(&state, second, DVec2::new(0.0, 470.0));

    click(&mut controller, &mut state, CUSCO);
    click(&mut controller, &mut state, second);
    click(&mut controller, &mut state, third);

    assert_consistent(&state.track);
    assert_eq!(state.track.lines().len(), 2);
    // 330: 0, 100, 200, 300, Endpunkt; 470: 0..=400, Endpunkt
    assert_eq!(state.track.granular_counts(), &[5, 6]);
    assert_abs_diff_eq!(state.track.total_distance(), 800.0, epsilon = 1e-3);
    assert_abs_diff_eq!(
        state.track.lines()[1].cumulative_distance,
        800.0,
        epsilon = 1e-3
    );
    assert_eq!(
        state.status_lines(),
        vec!["Lines: 2", "Points: 3", "dPoints: 11", "Total: 800.00", "Style 1/4"]
    );
}

#[test]
fn test_undo_restores_previous_state_exactly() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let second = shifted(&state, CUSCO, DVec2::new(120.0, 80.0));
    let third = shifted(&state, second, DVec2::new(-260.0, 40.0));

    click(&mut controller, &mut state, CUSCO);
    click(&mut controller, &mut state, second);
    let before = (
        state.track.points().to_vec(),
        state.track.granular_points().to_vec(),
        state.track.total_distance(),
    );

    click(&mut controller, &mut state, third);
    controller
        .handle_intent(&mut state, AppIntent::RemoveLastPointRequested)
        .unwrap();

    assert_consistent(&state.track);
    assert_eq!(state.track.points(), before.0.as_slice());
    assert_eq!(state.track.granular_points(), before.1.as_slice());
    assert_eq!(state.track.total_distance(), before.2);
}

#[test]
fn test_step_length_change_applies_to_future_segments_only() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let second = shifted(&state, CUSCO, DVec2::new(230.0, 0.0));
    let third = shifted(&state, second, DVec2::new(230.0, 0.0));

    click(&mut controller, &mut state, CUSCO);
    click(&mut controller, &mut state, second);
    controller
        .handle_intent(&mut state, AppIntent::StepLengthChanged { step_length: 50.0 })
        .unwrap();
    click(&mut controller, &mut state, third);

    assert_eq!(state.track.granular_counts(), &[4, 6]);
}

#[test]
fn test_tiny_step_length_is_rejected_and_long_segment_cannot_explode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::StepLengthChanged { step_length: 1e-320 })
        .unwrap();
    assert_eq!(state.options.step_length, 100.0);

    controller
        .handle_intent(&mut state, AppIntent::StepLengthChanged { step_length: 0.01 })
        .unwrap();
    assert_eq!(state.options.step_length, 0.01);

    // 25 km bei 1 cm Schrittweite überschreitet die Schrittgrenze
    let far = shifted(&state, CUSCO, DVec2::new(25_000.0, 0.0));
    click(&mut controller, &mut state, CUSCO);
    let result = controller.handle_intent(&mut state, AppIntent::MapClicked { coordinate: far });

    assert!(result.is_err());
    assert_eq!(state.track.points(), &[CUSCO]);
    assert_consistent(&state.track);
}

#[test]
fn test_click_on_last_point_is_ignored() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, CUSCO);
    click(&mut controller, &mut state, CUSCO);

    assert_eq!(state.track.points().len(), 1);
    assert_consistent(&state.track);
}

#[test]
fn test_invalid_projection_is_reported_and_keeps_old_one() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::ProjectionChanged {
            definition: "+proj=utm +zone=99".into(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.projection.config().zone, 18);
}

#[test]
fn test_waypoint_flow_through_intents() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let north = shifted(&state, CUSCO, DVec2::new(0.0, 250.0));
    click(&mut controller, &mut state, CUSCO);
    click(&mut controller, &mut state, north);

    controller
        .handle_intent(&mut state, AppIntent::GranularPointClicked { index: 1 })
        .unwrap();
    let waypoint = state.track.waypoints()[0].clone();
    assert_eq!(waypoint.name, "WP 1");
    assert_eq!(waypoint.position, state.track.granular_points()[1]);
    // Gitter-Nord weicht um die Meridiankonvergenz (< 1°) von geographisch Nord ab
    assert!(waypoint.heading < 2.0 || waypoint.heading > 358.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::WaypointNameEdited {
                id: waypoint.id,
                name: "Sacsayhuamán".into(),
            },
        )
        .unwrap();
    assert_eq!(state.track.waypoints()[0].name, "Sacsayhuamán");
    assert_eq!(state.track.waypoints()[0].id, waypoint.id);

    controller
        .handle_intent(
            &mut state,
            AppIntent::WaypointRemoveRequested { id: waypoint.id },
        )
        .unwrap();
    assert!(state.track.waypoints().is_empty());
}

#[test]
fn test_clear_resets_everything_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let east = shifted(&state, CUSCO, DVec2::new(510.0, 0.0));
    click(&mut controller, &mut state, CUSCO);
    click(&mut controller, &mut state, east);
    controller
        .handle_intent(&mut state, AppIntent::GranularPointClicked { index: 0 })
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .unwrap();

    assert!(state.track.is_empty());
    assert!(state.track.waypoints().is_empty());
    assert_consistent(&state.track);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::ClearTrack)
    );
}

#[test]
fn test_cycle_style_wraps_around() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for _ in 0..3 {
        controller
            .handle_intent(&mut state, AppIntent::CycleStyleRequested)
            .unwrap();
    }
    assert_eq!(state.style_label(), "Style 4/4");

    controller
        .handle_intent(&mut state, AppIntent::CycleStyleRequested)
        .unwrap();
    assert_eq!(state.style_label(), "Style 1/4");
}

#[test]
fn test_export_requested_writes_into_export_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.export_dir = dir.path().to_path_buf();
    let east = shifted(&state, CUSCO, DVec2::new(150.0, 0.0));
    click(&mut controller, &mut state, CUSCO);
    click(&mut controller, &mut state, east);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                kind: ExportKind::GranularPoints,
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                kind: ExportKind::Waypoints,
            },
        )
        .unwrap();

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1, "Wegpunkt-Export ohne Wegpunkte schreibt nichts");
    let content = std::fs::read_to_string(&files[0]).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("nro;latitud;longitud"));
    assert_eq!(lines.count(), 3);
    assert_eq!(state.ui.last_export.as_deref(), Some(files[0].as_path()));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::RequestExit)
    );
}
