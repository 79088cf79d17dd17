//! Core engine implementation
//!
//! [`SceneEngine`] owns every piece of mutable animation state: the entity
//! list, the ship, the fire clock, and the sprite store. The host schedules
//! ticks at whatever cadence it likes and supplies elapsed time; the engine
//! clamps deltas defensively, so cadence is purely a presentation concern.
//!
//! A tick is one `advance` (simulation) followed by one `render` (drawing).
//! Rendering never mutates simulation state; the surface is cleared and
//! fully repainted from the current state each frame.

use crate::assets::{SpriteHandle, SpriteStore};
use crate::config::SceneConfig;
use crate::entity::{Cannon, Entity, EntityKind};
use crate::foundation::math::{utils::damp_factor, Vec2};
use crate::render::{ship, Canvas, Color};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Visual identity for one kind of target
#[derive(Debug, Clone)]
pub struct TargetStyle {
    /// Technology name shown by the icon
    pub label: String,

    /// Brand color; also tints the explosion burst
    pub color: Color,

    /// Icon sprite, drawn once its image is ready
    pub sprite: Option<SpriteHandle>,
}

/// Ship state. The ship never enters the entity list; it is drawn
/// separately and only its cannons interact with the list.
#[derive(Debug, Clone)]
struct Ship {
    position: Vec2,
    target_x: f32,
    flame_height: f32,
}

/// The animated scene engine
pub struct SceneEngine {
    config: SceneConfig,
    width: f32,
    height: f32,
    entities: Vec<Entity>,
    ship: Ship,
    styles: Vec<TargetStyle>,
    sprites: SpriteStore,
    /// Simulated seconds since creation, advanced by clamped deltas
    clock: f32,
    last_fired: f32,
    rng: StdRng,
    alive: bool,
}

impl SceneEngine {
    /// Create an engine for a surface of the given size
    pub fn new(config: SceneConfig, width: f32, height: f32) -> Self {
        Self::build(config, width, height, StdRng::from_entropy())
    }

    /// Create an engine with a deterministic random sequence
    pub fn with_seed(config: SceneConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::build(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn build(config: SceneConfig, width: f32, height: f32, rng: StdRng) -> Self {
        log::info!("creating scene engine for {}x{} surface", width, height);

        let ship = Ship {
            position: Vec2::new(width * 0.5, height - config.ship.bottom_anchor),
            target_x: width * 0.5,
            flame_height: config.ship.flame_min,
        };

        Self {
            config,
            width,
            height,
            entities: Vec::new(),
            ship,
            styles: Vec::new(),
            sprites: SpriteStore::new(),
            clock: 0.0,
            last_fired: 0.0,
            rng,
            alive: true,
        }
    }

    /// Register a target style. Spawned targets pick uniformly among the
    /// registered styles; with none registered, targets spawn unlabeled.
    pub fn register_style(
        &mut self,
        label: impl Into<String>,
        color: Color,
        sprite: Option<SpriteHandle>,
    ) {
        self.styles.push(TargetStyle {
            label: label.into(),
            color,
            sprite,
        });
    }

    /// Get the sprite store
    pub fn sprites(&self) -> &SpriteStore {
        &self.sprites
    }

    /// Get mutable access to the sprite store
    pub fn sprites_mut(&mut self) -> &mut SpriteStore {
        &mut self.sprites
    }

    /// Current entities, in draw order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Current ship center
    pub fn ship_position(&self) -> Vec2 {
        self.ship.position
    }

    /// Simulated seconds since creation
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Current surface size
    pub fn surface_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Whether the engine has not been shut down
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Adopt a new surface size.
    ///
    /// Re-anchors the ship relative to the bottom edge and clamps its
    /// steering into the new bounds. Existing entities keep their positions;
    /// out-of-bounds ones are culled by the normal boundary rules.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !self.alive {
            return;
        }
        log::debug!("surface resized to {}x{}", width, height);

        self.width = width;
        self.height = height;
        self.ship.position.y = height - self.config.ship.bottom_anchor;

        let margin = self.config.ship.edge_margin;
        if width > margin * 2.0 {
            self.ship.position.x = self.ship.position.x.clamp(margin, width - margin);
            self.ship.target_x = self.ship.target_x.clamp(margin, width - margin);
        }
    }

    /// Advance the simulation by `dt` seconds (clamped before use).
    pub fn advance(&mut self, dt: f32) {
        if !self.alive {
            return;
        }
        let dt = dt.clamp(0.0, self.config.timing.max_frame_delta);
        self.clock += dt;

        self.steer_ship(dt);
        self.fire();
        self.spawn_targets(dt);
        self.integrate_and_cull(dt);
        self.resolve_collisions();
        self.enforce_population_cap();
    }

    /// Draw the current state onto `canvas`. Simulation state is untouched.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if !self.alive {
            return;
        }
        canvas.clear();
        ship::draw(canvas, self.ship.position, self.ship.flame_height);

        for e in &self.entities {
            match &e.kind {
                EntityKind::Target { sprite, .. } => {
                    let image = sprite.as_ref().and_then(|h| self.sprites.image(*h));
                    match image {
                        Some(img) => canvas.draw_sprite(img, e.aabb()),
                        // Not ready (or failed): translucent placeholder box
                        None => canvas.fill_rect(e.aabb(), Color::WHITE.with_alpha(0.2)),
                    }
                }
                EntityKind::Bullet { .. } => {
                    // Wider translucent pass first, so the core reads as glowing
                    canvas.fill_rect(e.aabb_scaled(2.0), e.color.with_alpha(0.35));
                    canvas.fill_rect(e.aabb(), e.color);
                }
                EntityKind::Particle { life } => {
                    canvas.fill_rect(e.aabb(), e.color.with_alpha(life.clamp(0.0, 1.0)));
                }
            }
        }
    }

    /// Advance and draw one frame.
    ///
    /// Skips the whole frame when the engine has been shut down or the
    /// surface is unusable (absent or zero-sized). A surface that changed
    /// size since the last frame is adopted before updating.
    pub fn tick(&mut self, dt: f32, canvas: Option<&mut dyn Canvas>) {
        if !self.alive {
            return;
        }
        let Some(canvas) = canvas else {
            return;
        };
        let (width, height) = canvas.size();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if (width, height) != (self.width, self.height) {
            self.resize(width, height);
        }

        self.advance(dt);
        self.render(canvas);
    }

    /// Tear the engine down.
    ///
    /// Idempotent; every later `advance`, `render`, `tick`, or `resize`
    /// call is a safe no-op.
    pub fn shutdown(&mut self) {
        if !self.alive {
            return;
        }
        log::info!("scene engine shut down after {:.1} simulated seconds", self.clock);
        self.alive = false;
        self.entities.clear();
    }

    fn steer_ship(&mut self, dt: f32) {
        let cfg = &self.config.ship;

        if self.rng.gen::<f32>() < cfg.retarget_rate * dt && self.width > cfg.edge_margin * 2.0 {
            self.ship.target_x = self
                .rng
                .gen_range(cfg.edge_margin..self.width - cfg.edge_margin);
        }

        // Exponential smoothing toward the target, scaled by elapsed time so
        // the approach speed is independent of tick cadence.
        let gain = damp_factor(cfg.steering_rate, dt);
        self.ship.position.x += (self.ship.target_x - self.ship.position.x) * gain;

        self.ship.flame_height = cfg.flame_min + self.rng.gen::<f32>() * cfg.flame_span;
    }

    fn fire(&mut self) {
        let cfg = &self.config.firing;
        if self.clock - self.last_fired < cfg.cooldown {
            return;
        }
        // Advancing by the cooldown instead of snapping to the clock keeps
        // the long-run cadence exact. The delta clamp bounds catch-up to one
        // volley per tick.
        self.last_fired += cfg.cooldown;

        let nose = Vec2::new(self.ship.position.x, self.ship.position.y - cfg.nose_offset);
        self.entities.push(Entity {
            position: nose,
            velocity: Vec2::new(0.0, -cfg.bullet_speed),
            size: Vec2::new(cfg.bullet_width, cfg.bullet_height),
            color: Color::LASER_GREEN,
            kind: EntityKind::Bullet {
                cannon: Cannon::Center,
            },
        });

        if self.rng.gen::<f32>() < cfg.side_cannon_chance {
            for dir in [-1.0f32, 1.0] {
                self.entities.push(Entity {
                    position: Vec2::new(
                        self.ship.position.x + dir * cfg.side_offset_x,
                        self.ship.position.y + cfg.side_offset_y,
                    ),
                    velocity: Vec2::new(dir * cfg.side_bullet_drift, -cfg.side_bullet_speed),
                    size: Vec2::new(cfg.side_bullet_width, cfg.side_bullet_height),
                    color: Color::MAGENTA,
                    kind: EntityKind::Bullet {
                        cannon: Cannon::Side,
                    },
                });
            }
        }
    }

    fn spawn_targets(&mut self, dt: f32) {
        let cfg = &self.config.targets;
        if self.rng.gen::<f32>() >= cfg.spawn_rate * dt {
            return;
        }
        let live = self.entities.iter().filter(|e| e.is_target()).count();
        if live >= cfg.max_live {
            return;
        }

        let style = if self.styles.is_empty() {
            TargetStyle {
                label: String::new(),
                color: Color::CYAN,
                sprite: None,
            }
        } else {
            self.styles[self.rng.gen_range(0..self.styles.len())].clone()
        };

        let half_width = cfg.width * 0.5;
        let x = if self.width > cfg.width {
            self.rng.gen_range(half_width..self.width - half_width)
        } else {
            self.width * 0.5
        };
        let vx = if cfg.drift_x > 0.0 {
            self.rng.gen_range(-cfg.drift_x..cfg.drift_x)
        } else {
            0.0
        };
        let vy = cfg.fall_min + self.rng.gen::<f32>() * cfg.fall_span;

        self.entities.push(Entity {
            position: Vec2::new(x, -cfg.spawn_height),
            velocity: Vec2::new(vx, vy),
            size: Vec2::new(cfg.width, cfg.height),
            color: style.color,
            kind: EntityKind::Target {
                label: style.label,
                sprite: style.sprite,
            },
        });
    }

    fn integrate_and_cull(&mut self, dt: f32) {
        let decay = self.config.particles.decay_rate;
        for e in &mut self.entities {
            e.position += e.velocity * dt;
            if let EntityKind::Particle { life } = &mut e.kind {
                *life -= decay * dt;
            }
        }

        let top_margin = self.config.firing.top_margin;
        let bottom = self.height + self.config.targets.despawn_margin;
        self.entities.retain(|e| match &e.kind {
            EntityKind::Bullet { .. } => e.position.y > -top_margin,
            EntityKind::Target { .. } => e.position.y < bottom,
            EntityKind::Particle { life } => *life > 0.0,
        });
    }

    fn resolve_collisions(&mut self) {
        let mut destroyed = vec![false; self.entities.len()];
        let mut bursts: Vec<(Vec2, Color)> = Vec::new();

        for i in 0..self.entities.len() {
            if destroyed[i] || !self.entities[i].is_bullet() {
                continue;
            }
            let bullet_box = self.entities[i].aabb();
            for j in 0..self.entities.len() {
                if destroyed[j] || !self.entities[j].is_target() {
                    continue;
                }
                if bullet_box.overlaps(&self.entities[j].aabb()) {
                    destroyed[i] = true;
                    destroyed[j] = true;
                    bursts.push((self.entities[j].position, self.entities[j].color));
                    // First match wins; this bullet is spent.
                    break;
                }
            }
        }

        if bursts.is_empty() {
            return;
        }

        let mut index = 0;
        self.entities.retain(|_| {
            let keep = !destroyed[index];
            index += 1;
            keep
        });

        for (origin, color) in bursts {
            self.spawn_burst(origin, color);
        }
    }

    fn spawn_burst(&mut self, origin: Vec2, color: Color) {
        let cfg = &self.config.particles;
        for _ in 0..cfg.burst_count {
            let velocity = if cfg.max_speed > 0.0 {
                Vec2::new(
                    self.rng.gen_range(-cfg.max_speed..cfg.max_speed),
                    self.rng.gen_range(-cfg.max_speed..cfg.max_speed),
                )
            } else {
                Vec2::new(0.0, 0.0)
            };
            let size = Vec2::new(
                cfg.size_min + self.rng.gen::<f32>() * cfg.size_span,
                cfg.size_min + self.rng.gen::<f32>() * cfg.size_span,
            );
            self.entities.push(Entity {
                position: origin,
                velocity,
                size,
                color,
                kind: EntityKind::Particle { life: 1.0 },
            });
        }
    }

    /// Hard cap on the entity population. Evicts the oldest particle first,
    /// falling back to the oldest entity overall.
    fn enforce_population_cap(&mut self) {
        let cap = self.config.limits.max_entities;
        while self.entities.len() > cap {
            let victim = self
                .entities
                .iter()
                .position(Entity::is_particle)
                .unwrap_or(0);
            self.entities.remove(victim);
        }
    }
}
