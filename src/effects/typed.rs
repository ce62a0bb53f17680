use crate::config::TypedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Typing,
    Erasing,
}

/// One step of the typing animation: text to show, and how long until the next step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Types each phrase out, holds it, erases it, then moves on to the next.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    direction: Direction,
    type_ms: u32,
    erase_ms: u32,
    hold_ms: u32,
}

impl Typewriter {
    pub fn new(config: &TypedConfig) -> Self {
        Self {
            phrases: config.phrases.clone(),
            phrase: 0,
            chars: 0,
            direction: Direction::Typing,
            type_ms: config.type_ms,
            erase_ms: config.erase_ms,
            hold_ms: config.hold_ms,
        }
    }

    pub fn tick(&mut self) -> TypeFrame {
        let Some(current) = self.phrases.get(self.phrase) else {
            return TypeFrame { text: String::new(), delay_ms: self.hold_ms };
        };
        let len = current.chars().count();

        match self.direction {
            Direction::Typing => {
                self.chars = (self.chars + 1).min(len);
                let text = current.chars().take(self.chars).collect();
                if self.chars >= len {
                    self.direction = Direction::Erasing;
                    return TypeFrame { text, delay_ms: self.hold_ms };
                }
                TypeFrame { text, delay_ms: self.type_ms }
            }
            Direction::Erasing => {
                self.chars = self.chars.saturating_sub(1);
                let text = current.chars().take(self.chars).collect();
                if self.chars == 0 {
                    self.direction = Direction::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    return TypeFrame { text, delay_ms: self.type_ms };
                }
                TypeFrame { text, delay_ms: self.erase_ms }
            }
        }
    }
}
