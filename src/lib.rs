use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod effects;
pub mod modal;
pub mod components;
pub mod pages;

use components::anchor_link::AnchorLink;
use components::theme_toggle::ThemeToggle;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(window) = web_sys::window() {
                        let scroll_top = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 80.0);
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"draftwise"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" aria-expanded={(*menu_open).to_string()} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <AnchorLink href="#features" class={classes!("nav-link")}>{"Features"}</AnchorLink>
                    <AnchorLink href="#stats" class={classes!("nav-link")}>{"Results"}</AnchorLink>
                    <AnchorLink href="#pricing" class={classes!("nav-link")}>{"Pricing"}</AnchorLink>
                    <ThemeToggle />
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 10, 20, 0.85);
                    backdrop-filter: blur(8px);
                }
                body.theme-light .top-nav.scrolled {
                    background: rgba(247, 251, 255, 0.9);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 16px 8vw;
                }
                .nav-logo {
                    font-weight: 800;
                    font-size: 1.4rem;
                    color: inherit;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 24px;
                }
                .nav-link {
                    color: inherit;
                    text-decoration: none;
                }
                .theme-toggle {
                    background: none;
                    border: 1px solid currentColor;
                    border-radius: 999px;
                    color: inherit;
                    padding: 4px 10px;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                }
                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    margin: 4px 0;
                    background: currentColor;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 60px;
                        right: 8vw;
                        padding: 16px;
                        border-radius: 12px;
                        background: rgba(10, 10, 20, 0.95);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
