use tatter::{ClothConfig, ClothGrid, GridConfig, NoOpStepObserver, Point, PointerState, Vec2, Viewport};

fn open_sky() -> Viewport<f64> {
    Viewport::new(10_000.0, 10_000.0)
}

#[test]
fn free_fall_matches_verlet_recurrence() {
    let gravity = 400.0;
    let damping = 0.99;
    let dt = 0.016f64;
    let dt2 = dt * dt;
    let config = ClothConfig::new()
        .with_gravity(Vec2::new(0.0, gravity))
        .with_damping(damping);

    let mut p = Point::new(Vec2::new(50.0, 10.0));
    let (mut y, mut py) = (10.0f64, 10.0f64);

    for _ in 0..90 {
        p.integrate(dt2, &config, &PointerState::idle(), &open_sky());
        let ny = y + (y - py) * damping + gravity * dt2;
        py = y;
        y = ny;
        assert_eq!(p.pos.y, y);
        assert_eq!(p.prev_pos.y, py);
        assert_eq!(p.pos.x, 50.0);
    }
}

#[test]
fn undamped_free_fall_matches_closed_form() {
    let gravity = 400.0;
    let dt2 = 0.016f64 * 0.016;
    let config = ClothConfig::new()
        .with_gravity(Vec2::new(0.0, gravity))
        .with_damping(1.0);

    let mut p = Point::new(Vec2::new(0.5, 10.0));
    let steps = 60;
    for _ in 0..steps {
        p.integrate(dt2, &config, &PointerState::idle(), &open_sky());
    }

    // y_n = y_0 + g dt^2 n (n + 1) / 2 for a point released at rest.
    let n = steps as f64;
    let expected = 10.0 + gravity * dt2 * n * (n + 1.0) / 2.0;
    assert!((p.pos.y - expected).abs() < 1e-9, "y = {}, expected {}", p.pos.y, expected);
}

#[test]
fn isolated_pinned_point_never_moves() {
    let config = ClothConfig::new().with_gravity(Vec2::zero());
    let target = Vec2::new(12.0, 34.0);
    let mut p = Point::new(target);
    p.pin(target);

    for _ in 0..500 {
        assert!(p.snap_to_pin());
        p.integrate(0.016 * 0.016, &config, &PointerState::idle(), &open_sky());
    }
    assert_eq!(p.pos, target);
}

#[test]
fn pinned_point_resolves_onto_pin_whatever_its_links() {
    let mut grid = ClothGrid::new(
        &GridConfig::new(3, 3, 10.0),
        ClothConfig::new(),
        Viewport::new(200.0f64, 200.0),
    )
    .unwrap();

    let index = grid.index(1, 0);
    let target = grid.point(index).pin_target().unwrap();

    grid.point_mut(index).pos = Vec2::new(-300.0, 900.0);
    grid.resolve_point(index, &mut NoOpStepObserver);
    assert_eq!(grid.point(index).pos, target);

    // Same after its links are gone.
    grid.cut_at(index).unwrap();
    grid.point_mut(index).pos = Vec2::new(1.0, 1.0);
    grid.resolve_point(index, &mut NoOpStepObserver);
    assert_eq!(grid.point(index).pos, target);
}

#[test]
fn classic_free_fall_matches_halved_force_recurrence() {
    let config = ClothConfig::<f64>::classic();
    let dt = 0.016f64;
    let dt2 = dt * dt;

    let mut p = Point::new(Vec2::new(50.0, 10.0));
    let (mut y, mut py) = (10.0f64, 10.0f64);

    for _ in 0..5 {
        p.integrate(dt2, &config, &PointerState::idle(), &open_sky());
        // Accumulated 1200, applied at half strength.
        let ny = y + (y - py) * 0.99 + (1200.0 / 2.0) * dt2;
        py = y;
        y = ny;
        assert!((p.pos.y - y).abs() < 1e-12, "y = {}, expected {}", p.pos.y, y);
    }
    assert!((p.pos.y - 12.2735).abs() < 1e-3);
}

#[test]
fn classic_preset_quantizes_forces() {
    let config = ClothConfig::<f64>::classic().with_gravity(Vec2::new(0.0, 0.0037));
    let mut p = Point::new(Vec2::new(50.0, 10.0));
    p.integrate(1.0, &config, &PointerState::idle(), &open_sky());
    // 0.0037 snaps down to 1/400.
    assert_eq!(p.pos.y, 10.0 + 1.0 / 400.0);
}
