use crate::config::ThemeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Inline style changes needed to show a theme. `None` means remove the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeStyle {
    pub root_vars: Vec<(&'static str, Option<String>)>,
    pub body_background: Option<String>,
    pub body_class: Option<&'static str>,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of `aria-pressed` on the toggle button.
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Theme::Dark => "false",
            Theme::Light => "true",
        }
    }

    pub fn style(self, config: &ThemeConfig) -> ThemeStyle {
        match self {
            Theme::Dark => ThemeStyle {
                root_vars: vec![("--neon-1", None), ("--neon-2", None)],
                body_background: None,
                body_class: None,
            },
            Theme::Light => ThemeStyle {
                root_vars: vec![
                    ("--neon-1", Some(config.light_neon_1.clone())),
                    ("--neon-2", Some(config.light_neon_2.clone())),
                ],
                body_background: Some(config.light_background.clone()),
                body_class: Some("theme-light"),
            },
        }
    }
}
