use crate::constants::TILT_GAIN_DEG;
use glam::Vec2;

/// Element bounds in viewport pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position as a fraction of the rect, 0.5 at the centre.
    /// Degenerate axes report the centre.
    pub fn normalized(&self, pointer: Vec2) -> Vec2 {
        let h = if self.width > 0.0 {
            (pointer.x - self.left) / self.width
        } else {
            0.5
        };
        let v = if self.height > 0.0 {
            (pointer.y - self.top) / self.height
        } else {
            0.5
        };
        Vec2::new(h, v)
    }

    /// Pointer position relative to the top-left corner.
    #[inline]
    pub fn local(&self, pointer: Vec2) -> Vec2 {
        pointer - Vec2::new(self.left, self.top)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TiltTracker {
    tilt: Tilt,
}

impl TiltTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_move(&mut self, pointer: Vec2, rect: Rect) -> Tilt {
        let n = rect.normalized(pointer);
        self.tilt = Tilt {
            rotate_x_deg: (n.y - 0.5) * -TILT_GAIN_DEG,
            rotate_y_deg: (n.x - 0.5) * TILT_GAIN_DEG,
        };
        self.tilt
    }

    pub fn on_leave(&mut self) -> Tilt {
        self.tilt = Tilt::FLAT;
        self.tilt
    }

    #[inline]
    pub fn tilt(&self) -> Tilt {
        self.tilt
    }
}
