//! Timing and geometry for the decorative parts of the page. Nothing in here
//! touches the DOM; the components in `crate::components` drive these from
//! timers and pointer events.

pub mod counter;
pub mod parallax;
pub mod reveal;
pub mod theme;
pub mod typed;
