//! Spring-smoothed pointer following for the cursor flame.

use crate::constants::*;
use crate::core::events::{PointerSource, Subscription};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: FLAME_STIFFNESS,
            damping: FLAME_DAMPING,
            mass: FLAME_MASS,
            rest_delta: FLAME_REST_DELTA,
            rest_speed: FLAME_REST_SPEED,
        }
    }
}

impl SpringConfig {
    /// 1.0 is critical; above that the spring approaches without overshoot.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Two-dimensional mass-spring-damper chasing a target.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub config: SpringConfig,
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
}

impl Spring2 {
    pub fn new(config: SpringConfig, start: Vec2) -> Self {
        Self {
            config,
            position: start,
            velocity: Vec2::ZERO,
            target: start,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == Vec2::ZERO
    }

    /// Advance by `dt_sec` using semi-implicit Euler in bounded sub-steps.
    pub fn step(&mut self, dt_sec: f32) -> Vec2 {
        if self.is_at_rest() || dt_sec <= 0.0 {
            return self.position;
        }
        let dt_sec = dt_sec.min(SPRING_MAX_FRAME_SEC);
        let steps = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / steps as f32;
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;
        for _ in 0..steps {
            let accel = (-stiffness * (self.position - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            if (self.target - self.position).length() < rest_delta
                && self.velocity.length() < rest_speed
            {
                self.position = self.target;
                self.velocity = Vec2::ZERO;
                break;
            }
        }
        self.position
    }
}

/// Tracks raw pointer moves from a [`PointerSource`] and smooths them.
pub struct PointerFollower {
    raw: Rc<Cell<Vec2>>,
    spring: Spring2,
    subscription: Option<Subscription>,
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl PointerFollower {
    pub fn new(config: SpringConfig) -> Self {
        let start = Vec2::from(FLAME_START);
        Self {
            raw: Rc::new(Cell::new(start)),
            spring: Spring2::new(config, start),
            subscription: None,
        }
    }

    /// Acquire a pointer subscription. Does nothing if already listening.
    pub fn start(&mut self, source: &dyn PointerSource) {
        if self.is_listening() {
            return;
        }
        let raw = self.raw.clone();
        self.subscription = Some(source.subscribe(Box::new(move |pos| raw.set(pos))));
    }

    /// Release the subscription. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(mut sub) = self.subscription.take() {
            sub.cancel();
        }
    }

    #[inline]
    pub fn is_listening(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Advance smoothing toward the latest raw position.
    pub fn tick(&mut self, dt_sec: f32) -> Vec2 {
        self.spring.target = self.raw.get();
        self.spring.step(dt_sec)
    }

    #[inline]
    pub fn raw(&self) -> Vec2 {
        self.raw.get()
    }

    #[inline]
    pub fn smoothed(&self) -> Vec2 {
        self.spring.position
    }

    pub fn is_settled(&self) -> bool {
        self.spring.target == self.raw.get() && self.spring.is_at_rest()
    }
}
