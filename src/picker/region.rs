//! Screen-space geometry for the picker's two interactive areas.

/// Pointer position in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of an element, as reported by the host layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }

    /// Position relative to the top-left corner, clamped into
    /// `[0, width] x [0, height]`.
    pub fn clamp_local(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.left).clamp(0.0, self.width.max(0.0)),
            y: (p.y - self.top).clamp(0.0, self.height.max(0.0)),
        }
    }

    /// Clamped position as fractions of the size, each in `[0, 1]`.
    ///
    /// A collapsed axis (zero size) maps to 0.
    pub fn normalize(&self, p: Point) -> (f64, f64) {
        let local = self.clamp_local(p);
        (fraction(local.x, self.width), fraction(local.y, self.height))
    }
}

fn fraction(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 { offset / extent } else { 0.0 }
}
