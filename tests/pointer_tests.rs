// Host-side tests for pointer subscriptions and the spring-smoothed follower.
// `PointerHub` stands in for the browser window as the event source.

use glam::Vec2;
use promptshield_web::core::{
    PointerFollower, PointerHub, PointerSource, Spring2, SpringConfig, Subscription,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn subscription_cancel_runs_release_once() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let mut sub = Subscription::new(move || c.set(c.get() + 1));
    assert!(sub.is_active());
    sub.cancel();
    sub.cancel();
    drop(sub);
    assert_eq!(count.get(), 1);
}

#[test]
fn dropping_a_subscription_releases_it() {
    let released = Rc::new(Cell::new(false));
    let r = released.clone();
    {
        let _sub = Subscription::new(move || r.set(true));
    }
    assert!(released.get());
}

#[test]
fn hub_delivers_to_live_handlers_only() {
    let hub = PointerHub::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = seen.clone();
    let mut sub = hub.subscribe(Box::new(move |p| s.borrow_mut().push(p)));
    assert_eq!(hub.listener_count(), 1);

    hub.dispatch(Vec2::new(1.0, 2.0));
    sub.cancel();
    hub.dispatch(Vec2::new(3.0, 4.0));

    assert_eq!(*seen.borrow(), vec![Vec2::new(1.0, 2.0)]);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn handler_may_release_itself_during_dispatch() {
    let hub = PointerHub::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));
    let (slot_h, calls_h) = (slot.clone(), calls.clone());
    let sub = hub.subscribe(Box::new(move |_| {
        calls_h.set(calls_h.get() + 1);
        if let Some(mut s) = slot_h.borrow_mut().take() {
            s.cancel();
        }
    }));
    *slot.borrow_mut() = Some(sub);

    hub.dispatch(Vec2::ZERO);
    hub.dispatch(Vec2::ZERO);
    assert_eq!(calls.get(), 1);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn follower_starts_off_screen_and_at_rest() {
    let mut follower = PointerFollower::default();
    assert_eq!(follower.raw(), Vec2::new(-100.0, -100.0));
    assert_eq!(follower.tick(FRAME), Vec2::new(-100.0, -100.0));
    assert!(follower.is_settled());
}

#[test]
fn follower_subscribes_once_and_stop_is_idempotent() {
    let hub = PointerHub::new();
    let mut follower = PointerFollower::default();
    follower.start(&hub);
    follower.start(&hub);
    assert!(follower.is_listening());
    assert_eq!(hub.listener_count(), 1);

    follower.stop();
    follower.stop();
    assert!(!follower.is_listening());
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn dropping_follower_detaches_listener() {
    let hub = PointerHub::new();
    {
        let mut follower = PointerFollower::default();
        follower.start(&hub);
        assert_eq!(hub.listener_count(), 1);
    }
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn followers_subscribe_independently() {
    let hub = PointerHub::new();
    let mut a = PointerFollower::default();
    let mut b = PointerFollower::default();
    a.start(&hub);
    b.start(&hub);
    assert_eq!(hub.listener_count(), 2);

    a.stop();
    hub.dispatch(Vec2::new(10.0, 20.0));
    assert_eq!(b.raw(), Vec2::new(10.0, 20.0));
    assert_eq!(a.raw(), Vec2::new(-100.0, -100.0));
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn smoothed_position_lags_behind_raw() {
    let hub = PointerHub::new();
    let mut follower = PointerFollower::default();
    follower.start(&hub);
    hub.dispatch(Vec2::new(400.0, 300.0));

    let p = follower.tick(FRAME);
    assert!(p.x > -100.0 && p.x < 400.0, "x = {}", p.x);
    assert!(p.y > -100.0 && p.y < 300.0, "y = {}", p.y);
    assert!(!follower.is_settled());
}

#[test]
fn smoothed_position_settles_on_held_pointer() {
    let hub = PointerHub::new();
    let mut follower = PointerFollower::default();
    follower.start(&hub);
    hub.dispatch(Vec2::new(400.0, 300.0));

    for _ in 0..600 {
        follower.tick(FRAME);
    }
    assert!((follower.smoothed() - follower.raw()).length() < 1e-3);
    assert!(follower.is_settled());
}

#[test]
fn default_tuning_never_overshoots() {
    let cfg = SpringConfig::default();
    assert!(cfg.damping_ratio() > 1.0);

    let mut spring = Spring2::new(cfg, Vec2::new(-100.0, 0.0));
    spring.target = Vec2::new(400.0, 0.0);
    let mut prev = spring.position.x;
    for _ in 0..600 {
        let x = spring.step(FRAME).x;
        assert!(x >= prev, "moved backwards: {prev} -> {x}");
        assert!(x <= 400.0 + 1e-3, "overshoot to {x}");
        prev = x;
    }
    assert_eq!(spring.position, spring.target);
}

#[test]
fn underdamped_spring_still_settles() {
    let cfg = SpringConfig {
        damping: 5.0,
        ..SpringConfig::default()
    };
    assert!(cfg.damping_ratio() < 1.0);
    let mut spring = Spring2::new(cfg, Vec2::ZERO);
    spring.target = Vec2::new(50.0, -50.0);
    for _ in 0..1200 {
        spring.step(FRAME);
    }
    assert!((spring.position - spring.target).length() < 0.01);
}

#[test]
fn oversized_frames_are_clamped() {
    let mut a = Spring2::new(SpringConfig::default(), Vec2::ZERO);
    let mut b = a;
    a.target = Vec2::new(100.0, 0.0);
    b.target = a.target;
    a.step(10.0);
    b.step(0.25);
    assert_eq!(a.position, b.position);
}
