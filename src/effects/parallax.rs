use crate::config::ParallaxConfig;

/// Pointer position relative to the centre of a box, in box-widths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub dx: f64,
    pub dy: f64,
}

impl ParallaxOffset {
    pub fn from_pointer(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            dx: ((client_x - left - width / 2.0) / width).clamp(-0.5, 0.5),
            dy: ((client_y - top - height / 2.0) / height).clamp(-0.5, 0.5),
        }
    }

    pub fn transform(&self, config: &ParallaxConfig) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            self.dx * config.translate_x,
            self.dy * config.translate_y,
            self.dy * config.tilt_deg,
            self.dx * config.tilt_deg,
        )
    }
}
