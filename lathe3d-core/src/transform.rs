/// Interactive view state: rotation angles and zoom
/// Rotation state around three axes (in radians). The z component is
/// carried for completeness but the projector currently ignores it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Zoom bounds keep the multiplicative zoom strictly positive and the
/// projected geometry within a sane range.
const MIN_ZOOM: f64 = 0.05;
const MAX_ZOOM: f64 = 50.0;

/// The full interactive view: rotation plus zoom. Owned and passed around
/// by the rendering orchestrator; there is no hidden global copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rotation: RotationState,
    pub zoom: f64,
}

impl ViewState {
    /// Identity view: no rotation, zoom 1.
    pub fn new() -> Self {
        Self {
            rotation: RotationState::zero(),
            zoom: 1.0,
        }
    }

    /// Scale the zoom by a multiplicative factor, clamped to stay positive.
    pub fn zoom_by(&mut self, factor: f64) {
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Back to the identity view.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
