use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::demo_modal::{DemoModal, DemoTrigger};
use crate::components::hero_parallax::HeroParallax;
use crate::components::scroll_reveal;
use crate::components::stat_counter::StatCounter;
use crate::components::typed_subtitle::TypedSubtitle;
use crate::effects::reveal::REVEAL_SELECTOR;
use crate::modal::{ModalHandle, SubmitReceipt};

struct Plan {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    perks: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$9",
        blurb: "For solo writers testing the waters.",
        perks: &["20 drafts / month", "Blog and social templates", "Email support"],
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$29",
        blurb: "For marketers shipping every week.",
        perks: &["Unlimited drafts", "SEO briefs and outlines", "Brand voice presets"],
        featured: true,
    },
    Plan {
        name: "Team",
        price: "$79",
        blurb: "For content teams with review flows.",
        perks: &["Everything in Pro", "Shared workspaces", "Priority support"],
        featured: false,
    },
];

const FEATURES: &[(&str, &str, &str)] = &[
    ("✍️", "Long-form in minutes", "Outline, draft and polish articles that read like your best writer on a good day."),
    ("🔎", "Built for search", "Keyword-aware structure, meta descriptions and internal link suggestions."),
    ("🎯", "On-brand every time", "Save your tone and style once; every draft follows it."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_state(ModalHandle::default);
    let modal = (*modal).clone();
    let receipt = use_state(|| None::<SubmitReceipt>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Entrance animations; the observer disconnects on unmount
    {
        use_effect_with_deps(
            move |_| {
                let observer = scroll_reveal::observe(REVEAL_SELECTOR);
                move || drop(observer)
            },
            (),
        );
    }

    let on_submitted = {
        let receipt = receipt.clone();
        Callback::from(move |r: SubmitReceipt| receipt.set(Some(r)))
    };

    let dismiss_notice = {
        let receipt = receipt.clone();
        Callback::from(move |_: MouseEvent| receipt.set(None))
    };

    html! {
        <div class="landing-page">
            <header id="top" class="hero">
                <div class="hero-left">
                    <h1>{"Write less. Publish more."}</h1>
                    <TypedSubtitle />
                    <div class="hero-cta-group">
                        <DemoTrigger modal={modal.clone()} class={classes!("btn-primary")}>{"Request a demo"}</DemoTrigger>
                        <AnchorLink href="#pricing" class={classes!("btn-ghost")}>{"See pricing"}</AnchorLink>
                    </div>
                </div>
                <HeroParallax src="/assets/hero-editor.png" alt="Draft editor with AI suggestions" />
            </header>

            {
                if let Some(r) = &*receipt {
                    html! {
                        <div class="notice" role="status">
                            <span>{ format!("Thanks! Demo request for {} received, we'll be in touch at {}.", if r.plan.is_empty() { "Demo" } else { r.plan.as_str() }, r.email) }</span>
                            <button type="button" class="btn-ghost" onclick={dismiss_notice}>{"Dismiss"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <section id="features" class="section">
                <div class="section-head">
                    <h2>{"Everything a content team needs"}</h2>
                </div>
                <div class="grid">
                    { for FEATURES.iter().map(|(icon, title, body)| html! {
                        <div class="card">
                            <div class="card-icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p>{ *body }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="stats" class="section stats">
                <StatCounter target="1200" suffix="+" label="Teams onboard" />
                <StatCounter target="98" suffix="%" label="Drafts kept after edit" />
                <StatCounter text="6" suffix="h" label="Saved per writer, weekly" />
            </section>

            <section id="pricing" class="section">
                <div class="section-head">
                    <h2>{"Simple pricing"}</h2>
                </div>
                <div class="grid">
                    { for PLANS.iter().map(|plan| html! {
                        <div class={classes!("card", "plan", plan.featured.then_some("featured"))}>
                            <h3>{ plan.name }</h3>
                            <p class="price">{ plan.price }<span>{"/mo"}</span></p>
                            <p>{ plan.blurb }</p>
                            <ul>
                                { for plan.perks.iter().map(|perk| html! { <li>{ *perk }</li> }) }
                            </ul>
                            <DemoTrigger modal={modal.clone()} plan={AttrValue::from(plan.name)} class={classes!("btn-primary")}>
                                { format!("Try {}", plan.name) }
                            </DemoTrigger>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section testimonial">
                <blockquote>
                    {"\"We went from two posts a month to two a week without hiring.\""}
                    <cite>{"Head of Content, a B2B SaaS"}</cite>
                </blockquote>
            </section>

            <footer class="footer">
                <AnchorLink href="#top">{"Back to top"}</AnchorLink>
                <span>{"This is a UI/UX concept. Demo requests are not sent anywhere."}</span>
            </footer>

            <DemoModal modal={modal.clone()} {on_submitted} />

            <style>
                {r#"
                :root {
                    --neon-1: #22d3ee;
                    --neon-2: #a855f7;
                    --reveal-distance: 30px;
                    --reveal-duration: 700ms;
                    --reveal-easing: cubic-bezier(.2,.9,.2,1);
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(var(--reveal-distance));
                    transition: opacity var(--reveal-duration) var(--reveal-easing),
                        transform var(--reveal-duration) var(--reveal-easing);
                }
                .reveal.revealed {
                    opacity: 1;
                    transform: none;
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }
                .landing-page {
                    color: #e5e7eb;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                body.theme-light .landing-page {
                    color: #0f172a;
                }
                .hero {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 48px;
                    padding: 120px 8vw 80px;
                    min-height: 80vh;
                }
                .hero-left h1 {
                    font-size: 3.2rem;
                    background: linear-gradient(90deg, var(--neon-1), var(--neon-2));
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    min-height: 2em;
                }
                .typed-caret {
                    animation: blink 1s steps(1) infinite;
                }
                @keyframes blink {
                    50% { opacity: 0; }
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0 0 0 0);
                    white-space: nowrap;
                }
                .hero-right {
                    perspective: 800px;
                    flex: 1;
                    display: flex;
                    justify-content: center;
                }
                .hero-right img {
                    max-width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
                }
                .hero-cta-group {
                    display: flex;
                    gap: 16px;
                    margin-top: 24px;
                }
                .btn-primary, .btn-ghost {
                    padding: 12px 22px;
                    border-radius: 999px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.16s ease;
                    text-decoration: none;
                }
                .btn-primary {
                    border: none;
                    color: #fff;
                    background: linear-gradient(90deg, var(--neon-1), var(--neon-2));
                }
                .btn-ghost {
                    border: 1px solid currentColor;
                    background: transparent;
                    color: inherit;
                }
                .btn-primary:hover, .btn-ghost:hover {
                    transform: scale(1.04);
                }
                .btn-primary:active, .btn-ghost:active {
                    transform: scale(0.98);
                }
                .section {
                    padding: 80px 8vw;
                }
                .section-head {
                    text-align: center;
                    margin-bottom: 40px;
                }
                .grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 24px;
                }
                .card {
                    padding: 28px;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }
                .card.featured {
                    border-color: var(--neon-2);
                }
                .price {
                    font-size: 2rem;
                    font-weight: 700;
                }
                .stats {
                    display: flex;
                    justify-content: space-around;
                    text-align: center;
                }
                .stat .num {
                    display: block;
                    font-size: 2.6rem;
                    font-weight: 700;
                }
                .testimonial blockquote {
                    font-size: 1.4rem;
                    text-align: center;
                }
                .testimonial cite {
                    display: block;
                    margin-top: 12px;
                    font-size: 1rem;
                    opacity: 0.7;
                }
                .notice {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin: 0 8vw;
                    padding: 16px 24px;
                    border-radius: 12px;
                    background: rgba(34, 211, 238, 0.12);
                }
                .footer {
                    display: flex;
                    justify-content: space-between;
                    padding: 40px 8vw;
                    opacity: 0.8;
                }
                .modal {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.6);
                    z-index: 1000;
                }
                .modal.hidden {
                    display: none;
                }
                .modal-panel {
                    position: relative;
                    width: min(440px, 92vw);
                    padding: 32px;
                    border-radius: 16px;
                    background: #111827;
                    color: #e5e7eb;
                    animation: panelIn 0.45s cubic-bezier(.2,.9,.2,1);
                }
                @keyframes panelIn {
                    from { transform: translateY(20px) scale(0.98); opacity: 0; }
                    to { transform: translateY(0) scale(1); opacity: 1; }
                }
                .modal-panel form {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                }
                .modal-panel input {
                    padding: 10px 12px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(255, 255, 255, 0.06);
                    color: inherit;
                }
                .modal-close {
                    position: absolute;
                    top: 12px;
                    right: 12px;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.6rem;
                    cursor: pointer;
                }
                .modal-actions {
                    display: flex;
                    gap: 12px;
                    margin-top: 16px;
                }
                .form-error {
                    color: #f87171;
                    margin: 4px 0 0;
                }
                @media (max-width: 900px) {
                    .hero {
                        flex-direction: column;
                        padding-top: 100px;
                    }
                    .stats {
                        flex-direction: column;
                        gap: 32px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
