// Host-side tests for the rotation engine.

use glam::DVec3;
use skill_sphere_core::*;

fn approx(a: DVec3, b: DVec3) -> bool {
    (a - b).length() < 1e-12
}

#[test]
fn rotation_preserves_norm() {
    let mut pts = fibonacci_sphere(&DEFAULT_SKILLS).unwrap();
    let mut engine = RotationEngine::default();
    engine.set_pointer_offset(180.0, -75.0);
    for angles in [(0.3, -1.7), (2.5, 0.01), (-4.0, 3.9)] {
        engine.base_rot_x = angles.0;
        engine.base_rot_y = angles.1;
        for _ in 0..50 {
            engine.apply_rotation_frame(&mut pts);
        }
        for p in &pts {
            assert!((p.position.length() - 1.0).abs() < 1e-9, "{} drifted", p.label);
        }
    }
}

#[test]
fn x_rotation_tilts_north_pole_toward_positive_z() {
    let a = 0.4_f64;
    let engine = RotationEngine::new((a, 0.0), (0.0, 0.0), 0.0);
    let mut pts = vec![Point::new("p", DVec3::Y)];
    engine.apply_rotation_frame(&mut pts);
    assert!(approx(pts[0].position, DVec3::new(0.0, a.cos(), a.sin())));
}

#[test]
fn y_rotation_swings_x_axis_toward_negative_z() {
    let b = 0.4_f64;
    let engine = RotationEngine::new((0.0, b), (0.0, 0.0), 0.0);
    let mut pts = vec![Point::new("p", DVec3::X)];
    engine.apply_rotation_frame(&mut pts);
    assert!(approx(pts[0].position, DVec3::new(b.cos(), 0.0, -b.sin())));
}

#[test]
fn x_is_applied_before_y() {
    let quarter = std::f64::consts::FRAC_PI_2;
    let engine = RotationEngine::new((quarter, quarter), (0.0, 0.0), 0.0);
    let mut pts = vec![Point::new("p", DVec3::Y)];
    engine.apply_rotation_frame(&mut pts);
    // X takes +Y to +Z, then Y takes +Z to +X
    assert!(approx(pts[0].position, DVec3::X));
}

#[test]
fn rotation_accumulates_across_frames() {
    let engine = RotationEngine::new((0.1, 0.0), (0.0, 0.0), 0.0);
    let mut pts = vec![Point::new("p", DVec3::Y)];
    for _ in 0..5 {
        engine.apply_rotation_frame(&mut pts);
    }
    let a = 0.5_f64;
    assert!((pts[0].position - DVec3::new(0.0, a.cos(), a.sin())).length() < 1e-9);
}

#[test]
fn slow_then_normal_restores_default_speed() {
    let mut engine = RotationEngine::default();
    assert_eq!((engine.base_rot_x, engine.base_rot_y), (0.0025, -0.0025));
    engine.set_auto_rotate_speed(RotationSpeed::Slow);
    assert_eq!((engine.base_rot_x, engine.base_rot_y), (0.001, -0.001));
    assert_eq!(engine.mode(), RotationSpeed::Slow);
    engine.set_auto_rotate_speed(RotationSpeed::Normal);
    assert_eq!((engine.base_rot_x, engine.base_rot_y), (0.0025, -0.0025));
    assert_eq!(engine.mode(), RotationSpeed::Normal);
}

#[test]
fn pointer_offset_scales_displacement() {
    let mut engine = RotationEngine::default();
    engine.set_pointer_offset(100.0, -40.0);
    assert!((engine.pointer_rot_x - (-40.0 * POINTER_GAIN)).abs() < 1e-15);
    assert!((engine.pointer_rot_y - 100.0 * POINTER_GAIN).abs() < 1e-15);
    let (ax, ay) = engine.effective_angles();
    assert!((ax - (0.0025 - 0.002)).abs() < 1e-15);
    assert!((ay - (-0.0025 + 0.005)).abs() < 1e-15);

    engine.clear_pointer_offset();
    assert_eq!((engine.pointer_rot_x, engine.pointer_rot_y), (0.0, 0.0));
    assert_eq!(engine.effective_angles(), (0.0025, -0.0025));
}
