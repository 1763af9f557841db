//! Floating background particles

use rand::Rng;
use serde::Serialize;
use crate::math::Size;

/// Upper bound on live particles
pub const MAX_PARTICLES: usize = 40;

const FADE_PER_STEP: f32 = 0.003;
const SPAWN_BELOW: f32 = 10.0;
const CULL_ABOVE: f32 = -20.0;

/// One particle drifting upward
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub size: f32,
    pub speed: f32,
}

/// Particles rising through an area of the screen
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    area: Size,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(area: Size) -> Self {
        Self {
            area,
            particles: Vec::with_capacity(MAX_PARTICLES),
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Change the area new particles spawn in
    pub fn resize(&mut self, area: Size) {
        self.area = area;
    }

    /// Add a particle just below the bottom edge, unless the field is full or
    /// its area is not finite
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.particles.len() >= MAX_PARTICLES {
            return false;
        }
        if !self.area.width.is_finite() || !self.area.height.is_finite() {
            return false;
        }
        let width = self.area.width.max(0.0);
        self.particles.push(Particle {
            x: rng.gen_range(0.0..=width),
            y: self.area.height + SPAWN_BELOW,
            opacity: rng.gen_range(0.15..=0.5),
            size: rng.gen_range(1.5..=3.5),
            speed: rng.gen_range(0.4..=1.2),
        });
        true
    }

    /// Move every particle up and fade it, dropping the ones that left or vanished
    pub fn step(&mut self) {
        self.particles.retain_mut(|p| {
            p.y -= p.speed;
            p.opacity -= FADE_PER_STEP;
            p.y >= CULL_ABOVE && p.opacity > 0.0
        });
    }

    /// One frame: spawn, then advance
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        self.spawn(rng);
        self.step();
    }
}
