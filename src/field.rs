/*
 * Particle Field Module
 *
 * The engine behind the backdrop. It owns the particle set and the pointer
 * state, and is driven by three triggers:
 * 1. Resize: re-measure the surface and reseed the particles
 * 2. Pointer move: remember the freshest pointer sample
 * 3. Frame: clear, advance + draw every particle, draw links, request the next frame
 *
 * Lifecycle is Idle -> Running -> Stopped. `stop` detaches both listeners and
 * cancels the pending frame in one step; after that no trigger mutates state.
 */

use log::{debug, info, warn};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::connections;
use crate::error::Result;
use crate::host::{FrameId, FrameScheduler, Host, ListenerId, Signal};
use crate::params::FieldConfig;
use crate::particle::{self, Particle};
use crate::pointer::PointerState;
use crate::surface::{DrawSurface, SurfaceExtents};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug)]
struct Subscriptions {
    resize: ListenerId,
    pointer: ListenerId,
    frame: Option<FrameId>,
}

#[derive(Debug)]
enum Lifecycle {
    Idle,
    Running(Subscriptions),
    Stopped,
}

/// What one frame drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub particles: usize,
    pub links: usize,
}

pub struct ParticleField {
    config: FieldConfig,
    extents: SurfaceExtents,
    particles: Vec<Particle>,
    pointer: PointerState,
    rng: StdRng,
    lifecycle: Lifecycle,
    paused: bool,
}

impl ParticleField {
    /// Build an idle field. A `seed` makes particle generation reproducible.
    pub fn new(config: FieldConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            pointer: PointerState::new(config.influence_radius),
            config,
            extents: SurfaceExtents::default(),
            particles: Vec::new(),
            rng,
            lifecycle: Lifecycle::Idle,
            paused: false,
        })
    }

    /// Mount the field: subscribe to resize and pointer moves, seed the
    /// particles and request the first frame.
    ///
    /// Returns `false` without touching the host when no surface is attached,
    /// or when the field is already running or has been stopped.
    pub fn start<H, S>(&mut self, host: &mut H, scheduler: &mut S) -> bool
    where
        H: Host + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        match self.lifecycle {
            Lifecycle::Idle => {}
            Lifecycle::Running(_) => {
                warn!("particle field is already running");
                return false;
            }
            Lifecycle::Stopped => {
                warn!("particle field was stopped; mount a new one instead");
                return false;
            }
        }

        let Some(extents) = host.viewport() else {
            debug!("no drawing surface attached, particle field stays idle");
            return false;
        };

        let resize = host.listen(Signal::Resize);
        let pointer = host.listen(Signal::PointerMove);
        self.apply_extents(host, extents);
        let frame = scheduler.request_frame();

        self.lifecycle = Lifecycle::Running(Subscriptions {
            resize,
            pointer,
            frame: Some(frame),
        });

        info!(
            "particle field started at {}x{} with {} particles",
            extents.width,
            extents.height,
            self.particles.len()
        );
        true
    }

    /// Unmount: detach both listeners, cancel the pending frame and forget the
    /// pointer. Safe to call at any point, including before the first frame.
    pub fn stop<H, S>(&mut self, host: &mut H, scheduler: &mut S)
    where
        H: Host + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        let lifecycle = std::mem::replace(&mut self.lifecycle, Lifecycle::Stopped);
        match lifecycle {
            Lifecycle::Running(subs) => {
                host.unlisten(subs.resize);
                host.unlisten(subs.pointer);
                if let Some(frame) = subs.frame {
                    scheduler.cancel_frame(frame);
                }
                self.pointer.clear();
                info!("particle field stopped");
            }
            Lifecycle::Idle | Lifecycle::Stopped => {}
        }
    }

    /// Resize signal: resize the backing surface and reseed.
    pub fn handle_resize<H: Host + ?Sized>(&mut self, host: &mut H, extents: SurfaceExtents) {
        if !self.is_running() {
            return;
        }
        self.apply_extents(host, extents);
    }

    /// Pointer-move signal, in client coordinates.
    pub fn handle_pointer_move(&mut self, position: Vec2) {
        if !self.is_running() {
            return;
        }
        self.pointer.position = Some(position);
    }

    /// Run the frame identified by `id` and request the next one.
    ///
    /// Frames that are not the one currently pending (stale or cancelled)
    /// are ignored and return `None`.
    pub fn frame<D, S>(&mut self, id: FrameId, surface: &mut D, scheduler: &mut S) -> Option<FrameStats>
    where
        D: DrawSurface + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        match &mut self.lifecycle {
            Lifecycle::Running(subs) if subs.frame == Some(id) => subs.frame = None,
            _ => return None,
        }

        surface.clear(self.extents);

        let extents = self.extents;
        let strength = self.config.repulsion_strength;
        for p in &mut self.particles {
            if !self.paused {
                particle::advance(p, extents, &self.pointer, strength);
            }
            particle::draw(p, surface);
        }

        let links = connections::connect(&self.particles, self.extents, &self.config, surface);

        let next = scheduler.request_frame();
        if let Lifecycle::Running(subs) = &mut self.lifecycle {
            subs.frame = Some(next);
        }

        Some(FrameStats {
            particles: self.particles.len(),
            links,
        })
    }

    /// Throw the particle set away and generate a new one for the current extents.
    pub fn reseed(&mut self) {
        self.particles = particle::spawn_all(&mut self.rng, self.extents, &self.config);
        debug!(
            "reseeded {} particles for {}x{}",
            self.particles.len(),
            self.extents.width,
            self.extents.height
        );
    }

    /// Apply a new configuration. Spawn settings reseed immediately; the rest
    /// take effect on the next frame.
    pub fn reconfigure(&mut self, config: FieldConfig) -> Result<()> {
        if let Err(e) = config.validate() {
            warn!("rejected field config: {}", e);
            return Err(e);
        }

        let reseed = self.config.needs_reseed(&config);
        self.pointer.influence_radius = config.influence_radius;
        self.config = config;
        if reseed {
            self.reseed();
        }
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state(&self) -> LifecycleState {
        match self.lifecycle {
            Lifecycle::Idle => LifecycleState::Idle,
            Lifecycle::Running(_) => LifecycleState::Running,
            Lifecycle::Stopped => LifecycleState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Running(_))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn extents(&self) -> SurfaceExtents {
        self.extents
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    fn apply_extents<H: Host + ?Sized>(&mut self, host: &mut H, extents: SurfaceExtents) {
        self.extents = extents;
        host.resize_surface(extents);
        self.reseed();
    }
}
