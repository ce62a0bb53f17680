use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::effects::theme::Theme;

fn apply_theme(theme: Theme) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let style = theme.style(&config::get_config().theme);

    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let root_style = root.style();
        for (name, value) in &style.root_vars {
            let _ = match value {
                Some(value) => root_style.set_property(name, value),
                None => root_style.remove_property(name).map(|_| ()),
            };
        }
    }

    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = match style.body_class {
            Some(class) => classes.add_1(class),
            None => classes.remove_1("theme-light"),
        };
        let _ = body
            .style()
            .set_property("background", style.body_background.as_deref().unwrap_or(""));
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(Theme::default);

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            apply_theme(next);
            log::debug!("Theme switched to {:?}", next);
            theme.set(next);
        })
    };

    html! {
        <button id="themeToggle" class="theme-toggle" aria-pressed={theme.aria_pressed()} aria-label="Toggle light theme" {onclick}>
            { if *theme == Theme::Light { "☾" } else { "☀" } }
        </button>
    }
}
