use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::effects::counter::{parse_target, Counter, CounterPlan};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    /// Raw target, read like a `data-target` attribute.
    #[prop_or_default]
    pub target: AttrValue,
    /// Static figure; counted up to when `target` is empty.
    #[prop_or_default]
    pub text: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let target = parse_target(Some(props.target.as_str()), props.text.as_str());
    let value = use_state(|| 0u64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |target: &u64| {
                let counter = Counter::new(CounterPlan::new(*target, config::get_config().counter.duration_ms));
                let step_ms = counter.plan().step_ms;
                let counter = Rc::new(RefCell::new(counter));
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let interval = Interval::new(step_ms, {
                    let interval_handle = interval_handle.clone();
                    move || {
                        let mut counter = counter.borrow_mut();
                        value.set(counter.step());
                        if counter.is_done() {
                            interval_handle.borrow_mut().take();
                        }
                    }
                });
                *interval_handle.borrow_mut() = Some(interval);

                move || {
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            target,
        );
    }

    html! {
        <div class="stat">
            <span class="num" data-target={(!props.target.is_empty()).then(|| props.target.clone())}>{ *value }{ props.suffix.clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
