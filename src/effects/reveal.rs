use crate::config::RevealConfig;

/// Elements that fade and slide in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".hero-left, .hero-right, .section-head, .grid .card, .testimonial";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTiming {
    distance_px: u32,
    duration_ms: u32,
    easing: String,
    interval_ms: u32,
}

impl RevealTiming {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            distance_px: config.distance_px,
            duration_ms: config.duration_ms,
            easing: config.easing.clone(),
            interval_ms: config.interval_ms,
        }
    }

    /// Delay for the `index`-th element revealed in the same observer batch.
    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.interval_ms.saturating_mul(index)
    }

    /// Custom properties read by the `.reveal` rules in the page stylesheet.
    pub fn custom_properties(&self) -> [(&'static str, String); 3] {
        [
            ("--reveal-distance", format!("{}px", self.distance_px)),
            ("--reveal-duration", format!("{}ms", self.duration_ms)),
            ("--reveal-easing", self.easing.clone()),
        ]
    }
}
