use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::effects::typed::{TypeFrame, Typewriter};

#[function_component(TypedSubtitle)]
pub fn typed_subtitle() -> Html {
    let typed = &config::get_config().typed;
    let writer = use_mut_ref(|| Typewriter::new(typed));
    // (generation, frame); the generation keeps identical consecutive frames ticking
    let frame = use_state(|| (0u64, TypeFrame { text: String::new(), delay_ms: 0 }));

    {
        let deps = (*frame).clone();
        let frame = frame.clone();
        let writer: Rc<RefCell<Typewriter>> = writer.clone();
        use_effect_with_deps(
            move |(generation, current): &(u64, TypeFrame)| {
                let next_generation = generation + 1;
                let timeout = Timeout::new(current.delay_ms, move || {
                    let next = writer.borrow_mut().tick();
                    frame.set((next_generation, next));
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    html! {
        <p class="hero-subtitle">
            <span id="typed-sub" class="typed" aria-hidden="true">{ frame.1.text.clone() }</span>
            <span class="typed-caret" aria-hidden="true">{"|"}</span>
            <span class="sr-only">{ typed.phrases.join(" ") }</span>
        </p>
    }
}
