/*
 * Host Module
 *
 * The field never reaches for a window or a clock directly. Everything
 * ambient comes in through two seams:
 * - `Host` reports the viewport, resizes the backing surface and registers
 *   the resize / pointer-move listeners
 * - `FrameScheduler` hands out one "run before the next repaint" callback
 *   at a time and can cancel it
 *
 * `WindowHost` and `FramePacer` are the in-process implementations. The
 * nannou app routes window events through them, and tests drive them by
 * hand to fire an exact number of ticks.
 */

use log::debug;

use crate::surface::SurfaceExtents;

/// Ambient notifications the field can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Resize,
    PointerMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

pub trait Host {
    /// Current viewport size, or `None` while no drawing surface is attached.
    fn viewport(&self) -> Option<SurfaceExtents>;

    /// Resize the backing drawing surface.
    fn resize_surface(&mut self, extents: SurfaceExtents);

    fn listen(&mut self, signal: Signal) -> ListenerId;

    fn unlisten(&mut self, id: ListenerId);
}

pub trait FrameScheduler {
    /// Ask for one callback before the next repaint.
    fn request_frame(&mut self) -> FrameId;

    fn cancel_frame(&mut self, id: FrameId);
}

/// Window-backed host state: the attached surface and live listeners.
#[derive(Debug, Default)]
pub struct WindowHost {
    viewport: Option<SurfaceExtents>,
    surface: Option<SurfaceExtents>,
    listeners: Vec<(ListenerId, Signal)>,
    next_listener: u64,
}

impl WindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or re-measure) the drawing surface.
    pub fn attach(&mut self, viewport: SurfaceExtents) {
        self.viewport = Some(viewport);
    }

    pub fn detach(&mut self) {
        self.viewport = None;
        self.surface = None;
    }

    /// Size the backing surface was last resized to.
    pub fn surface_size(&self) -> Option<SurfaceExtents> {
        self.surface
    }

    pub fn is_listening(&self, signal: Signal) -> bool {
        self.listeners.iter().any(|&(_, s)| s == signal)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Host for WindowHost {
    fn viewport(&self) -> Option<SurfaceExtents> {
        self.viewport
    }

    fn resize_surface(&mut self, extents: SurfaceExtents) {
        self.surface = Some(extents);
    }

    fn listen(&mut self, signal: Signal) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, signal));
        debug!("listening for {:?} as {:?}", signal, id);
        id
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.retain(|&(existing, _)| existing != id);
    }
}

/// Single-slot frame scheduler: at most one frame is pending at a time.
#[derive(Debug, Default)]
pub struct FramePacer {
    pending: Option<FrameId>,
    next_frame: u64,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending frame so the caller can run it.
    pub fn take_due(&mut self) -> Option<FrameId> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for FramePacer {
    fn request_frame(&mut self) -> FrameId {
        self.next_frame += 1;
        let id = FrameId(self.next_frame);
        self.pending = Some(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }
}
