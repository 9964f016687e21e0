use yew::prelude::*;

use crate::components::split_text::SplitText;
use crate::content::TIMELINE;
use crate::hooks::use_element_progress;
use crate::i18n::use_i18n;
use crate::motion::scroll::ScrollSpan;
use crate::motion::steps::{active_index, StepState};

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let i18n = use_i18n();
    let section_ref = use_node_ref();
    let progress = use_element_progress(section_ref.clone(), ScrollSpan::Passing);
    let active = active_index(progress, TIMELINE.len());

    html! {
        <section id="about" class="section timeline-section" ref={section_ref}>
            <style>
                {r#"
                    .timeline-track {
                        position: relative;
                        display: grid;
                        gap: 3rem;
                    }
                    .timeline-path {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 50%;
                        width: 4px;
                        height: 100%;
                        transform: translateX(-50%);
                        overflow: visible;
                    }
                    .timeline-path line {
                        stroke-width: 4;
                        stroke-linecap: round;
                    }
                    .timeline-path .path-base {
                        stroke: rgba(255, 255, 255, 0.08);
                    }
                    .timeline-path .path-fill {
                        stroke: url(#timeline-gradient);
                        stroke-dasharray: 1;
                    }
                    .milestone {
                        position: relative;
                        width: calc(50% - 3rem);
                        transition: opacity var(--transition-duration) ease, transform var(--transition-duration) ease;
                    }
                    .milestone:nth-child(odd) {
                        justify-self: start;
                        text-align: right;
                    }
                    .milestone:nth-child(even) {
                        justify-self: end;
                    }
                    .milestone.is-future {
                        opacity: 0.3;
                    }
                    .milestone.is-active .card {
                        border-color: rgba(0, 212, 255, 0.5);
                        box-shadow: 0 0 30px rgba(0, 212, 255, 0.25);
                        transform: scale(1.02);
                    }
                    .milestone-year {
                        display: inline-block;
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        font-weight: 700;
                        background: rgba(255, 255, 255, 0.05);
                        margin-bottom: 1rem;
                    }
                    .milestone.is-active .milestone-year {
                        color: #00d4ff;
                        background: rgba(0, 212, 255, 0.15);
                    }
                    .milestone-check {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        color: #22c55e;
                    }
                    .timeline-dots {
                        position: sticky;
                        bottom: 2rem;
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 3rem;
                    }
                    .timeline-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.15);
                        transition: width 0.3s ease, background 0.3s ease;
                    }
                    .timeline-dot.is-past {
                        background: rgba(0, 212, 255, 0.5);
                    }
                    .timeline-dot.is-active {
                        width: 32px;
                        background: #00d4ff;
                    }
                    @media (max-width: 768px) {
                        .timeline-path {
                            left: 0.5rem;
                        }
                        .milestone, .milestone:nth-child(odd), .milestone:nth-child(even) {
                            width: auto;
                            justify-self: stretch;
                            text-align: left;
                            margin-left: 2rem;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("timeline.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("timeline.subtitle")}</p>
                </header>
                <div class="timeline-track">
                    <svg class="timeline-path" viewBox="0 0 4 100" preserveAspectRatio="none" aria-hidden="true">
                        <defs>
                            <linearGradient id="timeline-gradient" x1="0" y1="0" x2="0" y2="1">
                                <stop offset="0%" stop-color="#00d4ff" />
                                <stop offset="100%" stop-color="#a855f7" />
                            </linearGradient>
                        </defs>
                        <line class="path-base" x1="2" y1="0" x2="2" y2="100" />
                        <line
                            class="path-fill"
                            x1="2" y1="0" x2="2" y2="100"
                            pathLength="1"
                            stroke-dashoffset={format!("{:.4}", 1.0 - progress)}
                        />
                    </svg>
                    {
                        TIMELINE.iter().enumerate().map(|(index, milestone)| {
                            let state = StepState::of(index, active);
                            html! {
                                <article class={classes!("milestone", state.class())} key={milestone.key}>
                                    <div class="card">
                                        <span class="milestone-year">{milestone.year}</span>
                                        <h3>{i18n.t(&format!("timeline.{}.title", milestone.key))}</h3>
                                        <p>{i18n.t(&format!("timeline.{}.description", milestone.key))}</p>
                                        if state == StepState::Past {
                                            <span class="milestone-check" aria-hidden="true">{"✓"}</span>
                                        }
                                    </div>
                                </article>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="timeline-dots" aria-hidden="true">
                    {
                        TIMELINE.iter().enumerate().map(|(index, milestone)| html! {
                            <span
                                key={milestone.key}
                                class={classes!("timeline-dot", StepState::of(index, active).class())}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
