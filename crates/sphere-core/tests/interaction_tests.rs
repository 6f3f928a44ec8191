// Host-side tests for hover hit-testing and the region state machine.

use glam::{DVec2, DVec3};
use skill_sphere_core::*;

const VIEW: f64 = 500.0;

fn scene(labels: &[&str]) -> Scene {
    Scene::new(labels, SceneConfig::default().with_viewport(VIEW, VIEW)).unwrap()
}

#[test]
fn cursor_on_projected_point_selects_it() {
    let s = scene(&DEFAULT_SKILLS);
    for (i, p) in s.points().iter().enumerate() {
        let at = s.projector().project(p.position);
        let hit = hit_test(s.points(), s.projector(), at.screen(), HIT_THRESHOLD_PX)
            .expect("point under cursor");
        // coincident projections would fall back to the earlier index
        assert!(hit.index <= i);
        if hit.index == i {
            assert_eq!(hit.text, p.label);
            assert_eq!((hit.x, hit.y), (at.x, at.y));
        }
    }
}

#[test]
fn cursor_far_from_all_points_selects_nothing() {
    let s = scene(&["A", "B"]);
    // poles project to (250, 440) and (250, 60)
    assert!(hit_test(s.points(), s.projector(), DVec2::new(350.0, 440.0), 25.0).is_none());

    let full = scene(&DEFAULT_SKILLS);
    assert!(hit_test(full.points(), full.projector(), DVec2::ZERO, 25.0).is_none());
}

#[test]
fn threshold_is_strict() {
    let pts = vec![Point::new("edge", DVec3::ZERO)];
    let projector = Projector::new(BASE_RADIUS, FOV_FACTOR, DVec2::new(250.0, 250.0));
    assert!(hit_test(&pts, &projector, DVec2::new(275.0, 250.0), 25.0).is_none());
    assert!(hit_test(&pts, &projector, DVec2::new(274.9, 250.0), 25.0).is_some());
}

#[test]
fn nearest_point_wins() {
    let pts = vec![
        Point::new("far", DVec3::new(0.1, 0.0, 0.0)),
        Point::new("near", DVec3::new(0.02, 0.0, 0.0)),
    ];
    let projector = Projector::new(BASE_RADIUS, FOV_FACTOR, DVec2::new(250.0, 250.0));
    let hit = hit_test(&pts, &projector, DVec2::new(250.0, 250.0), 25.0).unwrap();
    assert_eq!(hit.text, "near");
    assert_eq!(hit.index, 1);
}

#[test]
fn equal_distance_keeps_first_point() {
    let pts = vec![
        Point::new("left", DVec3::new(-0.05, 0.0, 0.0)),
        Point::new("right", DVec3::new(0.05, 0.0, 0.0)),
        Point::new("again", DVec3::new(-0.05, 0.0, 0.0)),
    ];
    let projector = Projector::new(BASE_RADIUS, FOV_FACTOR, DVec2::new(250.0, 250.0));
    let hit = hit_test(&pts, &projector, DVec2::new(250.0, 250.0), 25.0).unwrap();
    assert_eq!(hit.text, "left");
    assert_eq!(hit.index, 0);
}

#[test]
fn scene_starts_idle_at_normal_speed() {
    let s = scene(&DEFAULT_SKILLS);
    assert_eq!(*s.hover(), HoverState::Idle);
    assert_eq!(s.rotation().mode(), RotationSpeed::Normal);
    assert_eq!(s.rotation().effective_angles(), NORMAL_ROTATION_SPEED);
}

#[test]
fn enter_move_leave_cycle() {
    let mut s = scene(&DEFAULT_SKILLS);

    s.pointer_enter();
    assert_eq!(*s.hover(), HoverState::HoveringRegion);
    assert_eq!(s.rotation().mode(), RotationSpeed::Slow);
    assert_eq!(
        (s.rotation().base_rot_x, s.rotation().base_rot_y),
        SLOW_ROTATION_SPEED
    );

    // first label sits on the north pole at (250, 440)
    let update = s.pointer_move(250.0, 440.0, VIEW, VIEW);
    assert_eq!(
        update,
        TooltipUpdate::Show {
            text: "HTML".to_string(),
            x: 250.0,
            y: 420.0,
        }
    );
    match s.hover() {
        HoverState::HoveringPoint(t) => {
            assert_eq!(t.index, 0);
            assert_eq!(t.text, "HTML");
        }
        other => panic!("expected hovering-point, got {other:?}"),
    }
    assert!((s.rotation().pointer_rot_x - 190.0 * POINTER_GAIN).abs() < 1e-15);
    assert_eq!(s.rotation().pointer_rot_y, 0.0);

    let update = s.pointer_move(5.0, 5.0, VIEW, VIEW);
    assert_eq!(update, TooltipUpdate::Hide);
    assert_eq!(*s.hover(), HoverState::HoveringRegion);
    assert!(s.rotation().pointer_rot_x < 0.0 && s.rotation().pointer_rot_y < 0.0);

    let update = s.pointer_leave();
    assert_eq!(update, TooltipUpdate::Hide);
    assert_eq!(*s.hover(), HoverState::Idle);
    assert_eq!(s.rotation().mode(), RotationSpeed::Normal);
    assert_eq!((s.rotation().pointer_rot_x, s.rotation().pointer_rot_y), (0.0, 0.0));
    assert_eq!(s.rotation().effective_angles(), NORMAL_ROTATION_SPEED);
}

#[test]
fn move_without_enter_still_slows_rotation() {
    let mut s = scene(&DEFAULT_SKILLS);
    let update = s.pointer_move(0.0, 0.0, VIEW, VIEW);
    assert_eq!(update, TooltipUpdate::Hide);
    assert_eq!(*s.hover(), HoverState::HoveringRegion);
    assert_eq!(s.rotation().mode(), RotationSpeed::Slow);
}

#[test]
fn re_entering_keeps_hovered_point() {
    let mut s = scene(&["A", "B"]);
    s.pointer_enter();
    s.pointer_move(250.0, 60.0, VIEW, VIEW);
    s.pointer_enter();
    assert_eq!(s.hover().target().map(|t| t.text.as_str()), Some("B"));
}

#[test]
fn ticking_rotates_but_keeps_points_on_sphere() {
    let mut s = scene(&DEFAULT_SKILLS);
    s.pointer_enter();
    s.pointer_move(480.0, 20.0, VIEW, VIEW);
    let before = s.points().to_vec();
    for _ in 0..600 {
        s.tick();
    }
    for (a, b) in before.iter().zip(s.points()) {
        assert_eq!(a.label, b.label);
        assert!((b.position.length() - 1.0).abs() < 1e-9);
    }
    assert_ne!(before[5].position, s.points()[5].position);
}

#[test]
fn viewport_change_recenters_projection() {
    let mut s = scene(&["A", "B"]);
    s.set_viewport(800.0, 600.0);
    assert_eq!(s.projector().center(), DVec2::new(400.0, 300.0));
    let top = s.projector().project(s.points()[0].position);
    assert!((top.x - 400.0).abs() < 1e-9 && (top.y - 490.0).abs() < 1e-9);
}
