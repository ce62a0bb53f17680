use yew::prelude::*;

use crate::config;
use crate::effects::parallax::ParallaxOffset;

#[derive(Properties, PartialEq)]
pub struct HeroParallaxProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(HeroParallax)]
pub fn hero_parallax(props: &HeroParallaxProps) -> Html {
    let container = use_node_ref();
    let offset = use_state(ParallaxOffset::default);

    let onpointermove = {
        let container = container.clone();
        let offset = offset.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(el) = container.cast::<web_sys::Element>() {
                let rect = el.get_bounding_client_rect();
                offset.set(ParallaxOffset::from_pointer(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let onpointerleave = {
        let offset = offset.clone();
        Callback::from(move |_: PointerEvent| offset.set(ParallaxOffset::default()))
    };

    let style = format!(
        "transform: {}; transition: transform 0.6s cubic-bezier(.2,.9,.2,1);",
        offset.transform(&config::get_config().parallax)
    );

    html! {
        <div class="hero-right" ref={container} {onpointermove} {onpointerleave}>
            <img src={props.src.clone()} alt={props.alt.clone()} {style} />
        </div>
    }
}
