// Host-side tests for tilt-on-hover and the hover-reveal index.

use glam::Vec2;
use promptshield_web::core::{HoverReveal, Rect, Tilt, TiltTracker};

fn card() -> Rect {
    Rect::new(100.0, 50.0, 200.0, 100.0)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn tilt_is_flat_at_centre() {
    let mut t = TiltTracker::new();
    let tilt = t.on_move(Vec2::new(200.0, 100.0), card());
    assert!(approx(tilt.rotate_x_deg, 0.0));
    assert!(approx(tilt.rotate_y_deg, 0.0));
}

#[test]
fn top_left_corner_tilts_by_six_degrees() {
    let mut t = TiltTracker::new();
    let tilt = t.on_move(Vec2::new(100.0, 50.0), card());
    assert!(approx(tilt.rotate_x_deg, 6.0));
    assert!(approx(tilt.rotate_y_deg, -6.0));
}

#[test]
fn bottom_right_corner_tilts_the_other_way() {
    let mut t = TiltTracker::new();
    let tilt = t.on_move(Vec2::new(300.0, 150.0), card());
    assert!(approx(tilt.rotate_x_deg, -6.0));
    assert!(approx(tilt.rotate_y_deg, 6.0));
}

#[test]
fn leave_resets_regardless_of_last_position() {
    let mut t = TiltTracker::new();
    t.on_move(Vec2::new(120.0, 60.0), card());
    assert_ne!(t.tilt(), Tilt::FLAT);
    assert_eq!(t.on_leave(), Tilt::FLAT);
    assert_eq!(t.tilt(), Tilt::FLAT);
}

#[test]
fn degenerate_rect_reads_as_centre() {
    let mut t = TiltTracker::new();
    let tilt = t.on_move(Vec2::new(5.0, 5.0), Rect::new(0.0, 0.0, 0.0, 0.0));
    assert!(approx(tilt.rotate_x_deg, 0.0));
    assert!(approx(tilt.rotate_y_deg, 0.0));
}

#[test]
fn css_transform_formats_both_axes() {
    let tilt = Tilt {
        rotate_x_deg: 1.5,
        rotate_y_deg: -3.0,
    };
    assert_eq!(tilt.css_transform(), "rotateX(1.5deg) rotateY(-3deg)");
    assert_eq!(Tilt::FLAT.css_transform(), "rotateX(0deg) rotateY(0deg)");
}

#[test]
fn rect_local_is_relative_to_top_left() {
    assert_eq!(card().local(Vec2::new(150.0, 70.0)), Vec2::new(50.0, 20.0));
}

#[test]
fn hover_starts_with_nothing_active() {
    let h = HoverReveal::new(6);
    assert_eq!(h.active(), None);
    assert!((0..6).all(|i| !h.is_revealed(i)));
}

#[test]
fn enter_overwrites_without_a_leave() {
    let mut h = HoverReveal::new(6);
    assert!(h.enter(1));
    assert!(h.enter(2));
    assert_eq!(h.active(), Some(2));
    assert_eq!((0..6).filter(|&i| h.is_revealed(i)).count(), 1);
}

#[test]
fn leave_on_active_clears() {
    let mut h = HoverReveal::new(6);
    h.enter(3);
    assert!(h.leave(3));
    assert_eq!(h.active(), None);
}

#[test]
fn leave_on_inactive_item_is_noop() {
    let mut h = HoverReveal::new(6);
    h.enter(1);
    h.enter(2);
    // late leave from the previously hovered item
    assert!(!h.leave(1));
    assert_eq!(h.active(), Some(2));
}

#[test]
fn repeated_enter_reports_no_change() {
    let mut h = HoverReveal::new(3);
    assert!(h.enter(0));
    assert!(!h.enter(0));
}

#[test]
fn out_of_range_enter_is_ignored() {
    let mut h = HoverReveal::new(3);
    h.enter(1);
    assert!(!h.enter(3));
    assert_eq!(h.active(), Some(1));
    assert!(HoverReveal::new(0).is_empty());
}

#[test]
fn at_most_one_active_over_a_sweep() {
    let mut h = HoverReveal::new(6);
    let events: [(bool, usize); 9] = [
        (true, 0),
        (true, 1),
        (false, 0),
        (true, 2),
        (false, 2),
        (false, 2),
        (true, 5),
        (true, 4),
        (false, 5),
    ];
    for (enter, i) in events {
        if enter {
            h.enter(i);
        } else {
            h.leave(i);
        }
        assert!((0..6).filter(|&j| h.is_revealed(j)).count() <= 1);
    }
    assert_eq!(h.active(), Some(4));
    h.clear();
    assert_eq!(h.active(), None);
}
