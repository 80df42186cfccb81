//! Document-wide pointer event dispatch.
//!
//! A drag has to keep tracking the pointer after it leaves the widget, so
//! move and release events are delivered from one hub that stands in for the
//! whole document. Listeners stay registered for as long as their
//! [`Subscription`] is alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::region::Point;
use super::PickerTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Down,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub source: PointerSource,
    pub position: Point,
    /// Element the host reported the event on, if any.
    pub target: Option<PickerTarget>,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, position: Point) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse,
            position,
            target: None,
        }
    }

    /// Builds a touch event from the active touch list; only the first touch
    /// is tracked. Returns `None` for a start/move without any touch point.
    pub fn touch(phase: PointerPhase, touches: &[Point]) -> Option<Self> {
        let position = match touches.first() {
            Some(p) => *p,
            None if phase == PointerPhase::Up => Point::default(),
            None => return None,
        };
        Some(Self {
            phase,
            source: PointerSource::Touch,
            position,
            target: None,
        })
    }

    pub fn on(mut self, target: PickerTarget) -> Self {
        self.target = Some(target);
        self
    }
}

pub trait PointerListener {
    fn on_pointer(&mut self, event: &PointerEvent);
}

type SharedListener = Rc<RefCell<dyn PointerListener>>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, SharedListener)>,
}

/// The "document": every pointer event the host sees goes through here.
#[derive(Clone, Default)]
pub struct PointerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: SharedListener) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        log::debug!("PICKER: listener {} attached", id);

        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Delivers `event` to every registered listener, in subscription order.
    pub fn dispatch(&self, event: &PointerEvent) {
        // Snapshot so listeners may (un)subscribe while handling the event.
        let listeners: Vec<SharedListener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in listeners {
            listener.borrow_mut().on_pointer(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Keeps a listener registered; dropping it detaches the listener.
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
            log::debug!("PICKER: listener {} detached", self.id);
        }
    }
}
