use std::collections::HashMap;

use log::error;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::modal::{DialogState, ModalHandle, SubmitReceipt, TriggerContext, EMAIL_FIELD, PLAN_FIELD};

#[derive(Properties, PartialEq)]
pub struct DemoTriggerProps {
    pub modal: ModalHandle,
    #[prop_or_default]
    pub plan: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Button that opens the demo dialog, forwarding its plan name.
#[function_component(DemoTrigger)]
pub fn demo_trigger(props: &DemoTriggerProps) -> Html {
    let onclick = {
        let modal = props.modal.clone();
        let plan = props.plan.clone();
        Callback::from(move |_: MouseEvent| {
            modal.open(TriggerContext::new(plan.as_ref().map(|p| p.to_string())));
        })
    };

    html! {
        <button type="button" class={classes!("open-modal", props.class.clone())} data-plan={props.plan.clone()} {onclick}>
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub modal: ModalHandle,
    pub on_submitted: Callback<SubmitReceipt>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let error_message = use_state(|| None::<String>);
    let plan_ref = use_node_ref();
    let email_ref = use_node_ref();

    // Bind the controller once the markup exists, release it on unmount.
    {
        let modal = props.modal.clone();
        let error_message = error_message.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(e) = modal.attach() {
                    error!("Demo dialog unavailable: {}", e);
                }
                modal.set_observer(Some(Callback::from(move |_: DialogState| {
                    error_message.set(None);
                })));

                move || {
                    modal.set_observer(None);
                    modal.detach();
                }
            },
            (),
        );
    }

    let close = {
        let modal = props.modal.clone();
        Callback::from(move |_: MouseEvent| modal.close())
    };

    let on_backdrop = {
        let modal = props.modal.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                modal.backdrop_click(&target);
            }
        })
    };

    let onsubmit = {
        let modal = props.modal.clone();
        let on_submitted = props.on_submitted.clone();
        let error_message = error_message.clone();
        let plan_ref = plan_ref.clone();
        let email_ref = email_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut values = HashMap::new();
            if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                values.insert(EMAIL_FIELD.to_string(), input.value());
            }
            if let Some(input) = plan_ref.cast::<HtmlInputElement>() {
                values.insert(PLAN_FIELD.to_string(), input.value());
            }

            match modal.submit(&values) {
                Ok(receipt) => on_submitted.emit(receipt),
                Err(e) => error_message.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <div id="modal" class="modal hidden" aria-hidden="true" role="dialog" aria-modal="true"
            aria-labelledby="modal-title" tabindex="-1" onclick={on_backdrop}>
            <div class="modal-panel">
                <button type="button" class="modal-close" aria-label="Close" onclick={close.clone()}>{"×"}</button>
                <h3 id="modal-title">{"Request a demo"}</h3>
                <p class="modal-lead">{"Tell us where to send the walkthrough. No spam, ever."}</p>
                <form id="demoForm" novalidate=true {onsubmit}>
                    <label for="demoPlan">{"Plan"}</label>
                    <input id="demoPlan" name="plan" type="text" readonly=true ref={plan_ref} />
                    <label for="demoEmail">{"Work email"}</label>
                    <input id="demoEmail" name="email" type="email" placeholder="you@company.com" ref={email_ref} />
                    {
                        if let Some(message) = &*error_message {
                            html! { <p class="form-error" role="alert">{ message }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <div class="modal-actions">
                        <button type="submit" class="btn-primary">{"Send request"}</button>
                        <button type="button" class="btn-ghost" onclick={close}>{"Cancel"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
