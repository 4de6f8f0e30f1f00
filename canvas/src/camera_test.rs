#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance_is_euclidean() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

// --- Vec3 ---

#[test]
fn vec_add_sub_mul() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
    assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
    assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
}

#[test]
fn vec_cross_of_axes_follows_right_hand_rule() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn vec_normalize_yields_unit_length() {
    let v = Vec3::new(3.0, 0.0, 4.0).normalize();
    assert!(approx_eq(v.length(), 1.0));
}

#[test]
fn vec_normalize_leaves_zero_vector() {
    assert_eq!(Vec3::default().normalize(), Vec3::default());
}

#[test]
fn rotate_y_quarter_turn_maps_x_to_negative_z() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn rotate_x_quarter_turn_maps_y_to_z() {
    let v = Vec3::new(0.0, 1.0, 0.0).rotate_x(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn rotate_z_quarter_turn_maps_x_to_y() {
    let v = Vec3::new(1.0, 0.0, 0.0).rotate_z(FRAC_PI_2);
    assert!(vec_approx_eq(v, Vec3::new(0.0, 1.0, 0.0)));
}

// --- Camera ---

#[test]
fn camera_default_matches_scene_setup() {
    let cam = Camera::default();
    assert_eq!(cam.position, Vec3::new(0.0, 5.0, 10.0));
    assert_eq!(cam.target, Vec3::default());
    assert_eq!(cam.fov_deg, 75.0);
}

#[test]
fn camera_basis_is_orthonormal() {
    let (right, up, forward) = Camera::default().basis();
    assert!(approx_eq(right.length(), 1.0));
    assert!(approx_eq(up.length(), 1.0));
    assert!(approx_eq(forward.length(), 1.0));
    assert!(approx_eq(right.dot(up), 0.0));
    assert!(approx_eq(right.dot(forward), 0.0));
    assert!(approx_eq(up.dot(forward), 0.0));
}

#[test]
fn target_projects_to_viewport_center() {
    let cam = Camera::default();
    let p = cam.project(cam.target, 800.0, 600.0).expect("target is in front");
    assert!(approx_eq(p.screen.x, 400.0));
    assert!(approx_eq(p.screen.y, 300.0));
    assert!(approx_eq(p.depth, cam.position.length()));
}

#[test]
fn point_right_of_target_projects_right_of_center() {
    let cam = Camera::default();
    let p = cam.project(Vec3::new(2.0, 0.0, 0.0), 800.0, 600.0).expect("visible");
    assert!(p.screen.x > 400.0);
}

#[test]
fn point_above_target_projects_above_center() {
    let cam = Camera::default();
    let p = cam.project(Vec3::new(0.0, 2.0, 0.0), 800.0, 600.0).expect("visible");
    assert!(p.screen.y < 300.0);
}

#[test]
fn point_behind_camera_is_culled() {
    let cam = Camera::default();
    assert!(cam.project(Vec3::new(0.0, 5.0, 20.0), 800.0, 600.0).is_none());
}

#[test]
fn farther_points_have_smaller_scale() {
    let cam = Camera::default();
    let near = cam.project(Vec3::new(0.0, 0.0, 5.0), 800.0, 600.0).expect("visible");
    let far = cam.project(Vec3::new(0.0, 0.0, -5.0), 800.0, 600.0).expect("visible");
    assert!(near.scale > far.scale);
    assert!(near.depth < far.depth);
}

#[test]
fn focal_length_for_ninety_degree_fov_is_half_height() {
    let cam = Camera { fov_deg: 90.0, ..Camera::default() };
    assert!(approx_eq(cam.focal_length(600.0), 300.0));
}

#[test]
fn to_view_of_target_lies_on_view_axis() {
    let cam = Camera::default();
    let v = cam.to_view(cam.target);
    assert!(approx_eq(v.x, 0.0));
    assert!(approx_eq(v.y, 0.0));
    assert!(approx_eq(v.z, cam.position.length()));
}

#[test]
fn project_segment_in_front_matches_point_projection() {
    let cam = Camera::default();
    let a = Vec3::new(-1.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let (pa, pb) = cam.project_segment(a, b, 800.0, 600.0).expect("visible");
    assert_eq!(Some(pa), cam.project(a, 800.0, 600.0));
    assert_eq!(Some(pb), cam.project(b, 800.0, 600.0));
}

#[test]
fn project_segment_clips_endpoint_behind_camera() {
    let cam = Camera::default();
    let front = Vec3::new(0.0, -2.0, -15.0);
    let behind = Vec3::new(0.0, -2.0, 15.0);
    assert!(cam.project(behind, 800.0, 600.0).is_none());
    let (pa, pb) = cam.project_segment(front, behind, 800.0, 600.0).expect("front half visible");
    assert!(pb.depth > cam.near);
    assert!(pb.depth < pa.depth);
}

#[test]
fn project_segment_fully_behind_is_none() {
    let cam = Camera::default();
    let a = Vec3::new(-1.0, 5.0, 20.0);
    let b = Vec3::new(1.0, 5.0, 20.0);
    assert!(cam.project_segment(a, b, 800.0, 600.0).is_none());
}
