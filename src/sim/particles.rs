//! Cursor particle trail
//!
//! Particles spawn at the pointer while it moves, drift, fade and shrink.
//! Dead particles are culled before anything is drawn.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// A single trail particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// px per frame
    pub vel: Vec2,
    /// Remaining life (1.0 = fresh)
    pub life: f32,
    /// Life lost per frame
    pub decay: f32,
    pub size: f32,
}

impl Particle {
    fn spawn(rng: &mut Pcg32, at: Vec2) -> Self {
        Self {
            pos: at,
            vel: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
            life: 1.0,
            decay: rng.random_range(0.01..0.03),
            size: rng.random_range(2.0..5.0),
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
        self.size *= PARTICLE_SHRINK;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0 && self.size >= PARTICLE_MIN_SIZE
    }

    /// Hue shifts from violet (fresh) toward cyan (fading)
    pub fn hue(&self) -> f32 {
        190.0 + 80.0 * self.life
    }

    /// Fill style for this particle
    pub fn color_css(&self) -> String {
        format!("hsla({:.0}, 100%, 70%, {:.3})", self.hue(), self.life.clamp(0.0, 1.0))
    }
}

/// Trail state: pointer tracking plus the live particle set
pub struct ParticleTrail {
    pub particles: Vec<Particle>,
    pointer: Vec2,
    last_move_ms: Option<f64>,
    rng: Pcg32,
}

impl ParticleTrail {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            pointer: Vec2::ZERO,
            last_move_ms: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Pointer moved to `pos` at time `now_ms`
    pub fn pointer_moved(&mut self, pos: Vec2, now_ms: f64) {
        self.pointer = pos;
        self.last_move_ms = Some(now_ms);
    }

    /// Movement flag: true until 100ms after the last move
    pub fn is_moving(&self, now_ms: f64) -> bool {
        self.last_move_ms
            .is_some_and(|t| now_ms - t < TRAIL_MOVE_TIMEOUT_MS)
    }

    /// Advance one frame: maybe spawn, then update and cull
    pub fn step(&mut self, now_ms: f64) {
        if self.is_moving(now_ms) && self.rng.random::<f32>() < TRAIL_SPAWN_CHANCE {
            let particle = Particle::spawn(&mut self.rng, self.pointer);
            self.particles.push(particle);
        }

        for particle in self.particles.iter_mut() {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_movement_flag_expires() {
        let mut trail = ParticleTrail::new(1);
        assert!(!trail.is_moving(0.0));
        trail.pointer_moved(Vec2::new(10.0, 10.0), 1000.0);
        assert!(trail.is_moving(1000.0));
        assert!(trail.is_moving(1099.0));
        assert!(!trail.is_moving(1100.0));
    }

    #[test]
    fn test_spawns_only_while_moving() {
        let mut trail = ParticleTrail::new(42);
        for frame in 0..100 {
            trail.step(frame as f64 * 16.0);
        }
        assert!(trail.is_empty());

        let mut now = 0.0;
        for _ in 0..100 {
            now += 16.0;
            trail.pointer_moved(Vec2::new(50.0, 60.0), now);
            trail.step(now);
        }
        // ~30% spawn rate; the newest particles are still alive
        assert!(!trail.is_empty());
    }

    #[test]
    fn test_trail_drains_after_stop() {
        let mut trail = ParticleTrail::new(9);
        let mut now = 0.0;
        for _ in 0..60 {
            now += 16.0;
            trail.pointer_moved(Vec2::ZERO, now);
            trail.step(now);
        }
        // Spawning continues for 100ms after the last move; the slowest decay
        // is 0.01/frame, so 120 frames drains everything
        for _ in 0..120 {
            now += 16.0;
            trail.step(now);
        }
        assert!(trail.is_empty());
    }

    #[test]
    fn test_dead_particle_removed_on_update() {
        let mut trail = ParticleTrail::new(3);
        trail.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ONE,
            life: 0.015,
            decay: 0.02,
            size: 3.0,
        });
        trail.step(0.0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_color_tracks_life() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 1.0,
            decay: 0.5,
            size: 1.0,
        };
        assert_eq!(p.color_css(), "hsla(270, 100%, 70%, 1.000)");
        p.update();
        assert_eq!(p.color_css(), "hsla(230, 100%, 70%, 0.500)");
    }

    proptest! {
        #[test]
        fn prop_life_decreases_by_decay(seed: u64, frames in 1usize..200) {
            let mut trail = ParticleTrail::new(seed);
            let mut now = 0.0;
            for _ in 0..frames {
                now += 16.0;
                trail.pointer_moved(Vec2::new(100.0, 100.0), now);

                let before = trail.particles.clone();
                trail.step(now);

                // Survivors lost exactly their decay; nobody left is dead
                for p in &trail.particles {
                    prop_assert!(p.life > 0.0);
                    prop_assert!(p.size >= PARTICLE_MIN_SIZE);
                    if let Some(old) = before.iter().find(|o| o.decay == p.decay && o.pos + o.vel == p.pos) {
                        prop_assert!(p.life < old.life);
                        prop_assert!((old.life - p.decay - p.life).abs() < 1e-6);
                    }
                }
            }
        }
    }
}
