pub mod anchor_link;
pub mod demo_modal;
pub mod hero_parallax;
pub mod scroll_reveal;
pub mod stat_counter;
pub mod theme_toggle;
pub mod typed_subtitle;
