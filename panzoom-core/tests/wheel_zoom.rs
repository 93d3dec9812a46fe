use panzoom_core::{GeometricSurface, GestureController, GestureEvent, Point, Rect, StyleHost, Target};

fn surface() -> GeometricSurface {
    GeometricSurface::new(Rect::new(0.0, 0.0, 1280.0, 720.0), 800.0, 600.0)
}

fn wheel(x: f64, y: f64, delta_y: f64) -> GestureEvent {
    GestureEvent::Wheel {
        client: Point::new(x, y),
        delta_y,
    }
}

/// Surface-local layout coordinate currently drawn under a client point.
fn content_under(host: &GeometricSurface, width: f64, client: Point) -> f64 {
    let rect = host.bounding_box(Target::Surface);
    (client.x - rect.left) / rect.width * width
}

#[test]
fn scale_stays_within_bounds() {
    let mut controller = GestureController::new();
    let mut host = surface();
    let deltas = [
        -300.0, -5000.0, -20000.0, 800.0, 100.0, 40000.0, -120.0, -1.0, 3.0, -26000.0,
    ];

    for delta in deltas {
        controller.handle(&mut host, &wheel(400.0, 300.0, delta));
        let scale = controller.state().scale;
        assert!(
            (1.0..=25.0).contains(&scale),
            "scale {} out of bounds after delta {}",
            scale,
            delta
        );
    }
}

#[test]
fn scale_follows_rounded_running_sum() {
    let mut controller = GestureController::new();
    let mut host = surface();
    let mut expected = 1.0;

    for _ in 0..12 {
        controller.handle(&mut host, &wheel(200.0, 150.0, -100.0));
        expected += 0.1;
        let scale = controller.state().scale;
        assert!(
            (scale - (expected * 10.0_f64).round() / 10.0).abs() < 1e-9,
            "scale {} expected {}",
            scale,
            expected
        );
    }
}

#[test]
fn small_deltas_round_away() {
    let mut controller = GestureController::new();
    let mut host = surface();

    // 0.03 per event never survives rounding to one decimal
    for _ in 0..10 {
        controller.handle(&mut host, &wheel(200.0, 150.0, -30.0));
    }

    assert_eq!(controller.state().scale, 1.0);
}

#[test]
fn clamps_at_both_ends() {
    let mut controller = GestureController::new();
    let mut host = surface();

    controller.handle(&mut host, &wheel(10.0, 10.0, 1000.0));
    assert_eq!(controller.state().scale, 1.0);

    controller.handle(&mut host, &wheel(10.0, 10.0, -1_000_000.0));
    assert_eq!(controller.state().scale, 25.0);
}

#[test]
fn origin_stays_under_cursor() {
    let mut controller = GestureController::new();
    let mut host = surface();
    let cursors = [
        Point::new(100.0, 80.0),
        Point::new(640.0, 360.0),
        Point::new(300.0, 500.0),
        Point::new(900.0, 20.0),
    ];

    for cursor in cursors {
        controller.handle(&mut host, &wheel(cursor.x, cursor.y, -700.0));
        let origin = host.page_origin();
        assert!((origin.x - cursor.x).abs() < 1e-9);
        assert!((origin.y - cursor.y).abs() < 1e-9);
    }
}

#[test]
fn content_under_cursor_does_not_jump() {
    let mut controller = GestureController::new();
    let mut host = surface();
    let width = 800.0;

    controller.handle(&mut host, &wheel(500.0, 400.0, -1500.0));

    for (cursor, delta) in [
        (Point::new(120.0, 90.0), -400.0),
        (Point::new(610.0, 250.0), 900.0),
        (Point::new(333.0, 444.0), -2000.0),
    ] {
        let before = content_under(&host, width, cursor);
        controller.handle(&mut host, &wheel(cursor.x, cursor.y, delta));
        let after = content_under(&host, width, cursor);
        assert!(
            (before - after).abs() < 1e-6,
            "content drifted from {} to {}",
            before,
            after
        );
    }
}

#[test]
fn wheel_commits_resting_position() {
    let mut controller = GestureController::new();
    let mut host = surface();

    controller.handle(&mut host, &wheel(100.0, 100.0, -1000.0));

    let state = controller.state();
    assert_eq!(state.end_x, host.left());
    assert_eq!(state.end_y, host.top());
    assert!(!state.panning);
}
