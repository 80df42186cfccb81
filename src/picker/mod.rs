//! HSV colour picker.
//!
//! A saturation/value plane plus a hue track. The picker only owns state and
//! geometry; the host feeds it pointer events and reads back the colour and
//! the handle positions to draw.
//!
//! States: `Idle` -> `SelectorDragging` (down on the plane) or
//! `HueDragging` (down on the hue track) -> `Idle` on any pointer release,
//! wherever it happens.

pub mod capture;
pub mod region;

pub use capture::{
    PointerEvent, PointerHub, PointerListener, PointerPhase, PointerSource, Subscription,
};
pub use region::{Point, Region};

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::color::{Hsv, Rgb};

/// Which part of the widget a pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Plane,
    HueTrack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    SelectorDragging,
    HueDragging,
}

/// Handle positions in percent of their region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handles {
    pub selector_left: f64,
    pub selector_top: f64,
    pub hue_left: f64,
}

impl Default for Handles {
    /// Selector in the top-right corner (full saturation and value), hue at 0.
    fn default() -> Self {
        Self {
            selector_left: 100.0,
            selector_top: 0.0,
            hue_left: 0.0,
        }
    }
}

/// Called with `(hex, rgb)` every time the displayed colour is recomputed.
pub type ColorChangeCallback = Box<dyn FnMut(&str, Rgb)>;

pub struct ColorPicker {
    hsv: Hsv,
    drag: DragState,
    plane: Region,
    hue_track: Region,
    handles: Handles,
    plane_background: String,
    on_color_change: Option<ColorChangeCallback>,
}

impl ColorPicker {
    pub fn new(plane: Region, hue_track: Region) -> Self {
        let hsv = Hsv::default();
        Self {
            hsv,
            drag: DragState::Idle,
            plane,
            hue_track,
            handles: Handles::default(),
            plane_background: hue_base_hex(hsv.h),
            on_color_change: None,
        }
    }

    pub fn set_on_color_change(&mut self, callback: impl FnMut(&str, Rgb) + 'static) {
        self.on_color_change = Some(Box::new(callback));
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn rgb(&self) -> Rgb {
        self.hsv.to_rgb()
    }

    /// Current colour as `#RRGGBB`.
    pub fn current_color(&self) -> String {
        self.rgb().to_hex()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn handles(&self) -> Handles {
        self.handles
    }

    /// Pure hue shown underneath the plane's white/black gradients.
    pub fn plane_background(&self) -> &str {
        &self.plane_background
    }

    pub fn hit_test(&self, p: Point) -> Option<PickerTarget> {
        if self.plane.contains(p) {
            Some(PickerTarget::Plane)
        } else if self.hue_track.contains(p) {
            Some(PickerTarget::HueTrack)
        } else {
            None
        }
    }

    /// Starts a drag on `target` and samples `p` right away.
    pub fn pointer_down(&mut self, target: PickerTarget, p: Point) {
        match target {
            PickerTarget::Plane => {
                self.drag = DragState::SelectorDragging;
                self.sample_plane(p);
            }
            PickerTarget::HueTrack => {
                self.drag = DragState::HueDragging;
                self.sample_hue(p);
            }
        }
    }

    pub fn pointer_move(&mut self, p: Point) {
        match self.drag {
            DragState::SelectorDragging => self.sample_plane(p),
            DragState::HueDragging => self.sample_hue(p),
            DragState::Idle => {}
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Back to pure red with the handles in their starting spots.
    pub fn reset(&mut self) {
        self.hsv = Hsv::default();
        self.drag = DragState::Idle;
        self.handles = Handles::default();
        self.plane_background = hue_base_hex(self.hsv.h);
        self.emit_change();
    }

    fn sample_plane(&mut self, p: Point) {
        let (fx, fy) = self.plane.normalize(p);
        self.hsv = Hsv::new(self.hsv.h, fx * 100.0, (1.0 - fy) * 100.0);
        self.handles.selector_left = fx * 100.0;
        self.handles.selector_top = fy * 100.0;
        self.emit_change();
    }

    fn sample_hue(&mut self, p: Point) {
        let (fx, _) = self.hue_track.normalize(p);
        // Hsv::new wraps the right edge (360) back to 0; the handle stays put.
        self.hsv = Hsv::new(fx * 360.0, self.hsv.s, self.hsv.v);
        self.handles.hue_left = fx * 100.0;
        self.plane_background = hue_base_hex(self.hsv.h);
        self.emit_change();
    }

    fn emit_change(&mut self) {
        let rgb = self.rgb();
        let hex = rgb.to_hex();
        if let Some(callback) = self.on_color_change.as_mut() {
            callback(&hex, rgb);
        }
    }
}

impl PointerListener for ColorPicker {
    fn on_pointer(&mut self, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Down => {
                if let Some(target) = event.target.or_else(|| self.hit_test(event.position)) {
                    self.pointer_down(target, event.position);
                }
            }
            PointerPhase::Move => self.pointer_move(event.position),
            PointerPhase::Up => self.pointer_up(),
        }
    }
}

fn hue_base_hex(hue: f64) -> String {
    Hsv::new(hue, 100.0, 100.0).to_hex()
}

/// A picker attached to a [`PointerHub`].
///
/// Mounting registers the picker as a document-level listener; dropping the
/// mounted picker removes it again.
pub struct MountedPicker {
    picker: Rc<RefCell<ColorPicker>>,
    _subscription: Subscription,
}

impl MountedPicker {
    pub fn mount(picker: ColorPicker, hub: &PointerHub) -> Self {
        let picker = Rc::new(RefCell::new(picker));
        let subscription = hub.subscribe(picker.clone());
        Self {
            picker,
            _subscription: subscription,
        }
    }

    pub fn current_color(&self) -> String {
        self.picker.borrow().current_color()
    }

    pub fn reset(&self) {
        self.picker.borrow_mut().reset();
    }

    pub fn with<R>(&self, f: impl FnOnce(&ColorPicker) -> R) -> R {
        f(&self.picker.borrow())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut ColorPicker) -> R) -> R {
        f(&mut self.picker.borrow_mut())
    }
}
