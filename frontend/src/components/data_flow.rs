use std::cell::Cell;
use std::ops::ControlFlow;

use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::motion::flow::{dot_progress, hero_paths};
use crate::motion::visibility::ObservedLoop;

/// Radius and opacity of each travelling dot; dot `i` rides path `i % 2`.
const DOTS: [(f64, f64); 2] = [(4.0, 0.8), (3.0, 0.6)];

/// Lines that draw themselves in once seen, with dots running along them
/// while the hero is on screen.
#[function_component(DataFlowLines)]
pub fn data_flow_lines() -> Html {
    let svg_ref = use_node_ref();
    let dot_refs = [use_node_ref(), use_node_ref()];
    let drawn = use_in_view(svg_ref.clone(), 0.2);
    let paths = hero_paths();

    {
        let svg_ref = svg_ref.clone();
        let dot_refs = dot_refs.clone();
        use_effect_with_deps(
            move |_| {
                let frames = svg_ref.cast::<Element>().map(|svg| {
                    let started = Cell::new(None::<f64>);
                    ObservedLoop::new(&svg, move |now| {
                        if svg_ref.get().is_none() {
                            return ControlFlow::Break(());
                        }
                        let start = started.get().unwrap_or(now);
                        started.set(Some(start));
                        let elapsed = now - start;
                        for (index, dot) in dot_refs.iter().enumerate() {
                            let (Some(dot), Some(progress)) = (dot.cast::<Element>(), dot_progress(index, elapsed)) else {
                                continue;
                            };
                            let point = paths[index % paths.len()].point_at(progress);
                            let _ = dot.set_attribute("cx", &format!("{:.1}", point.x));
                            let _ = dot.set_attribute("cy", &format!("{:.1}", point.y));
                        }
                        ControlFlow::Continue(())
                    })
                });
                move || drop(frames)
            },
            (),
        );
    }

    html! {
        <div class="data-flow-layer" aria-hidden="true">
            <style>
                {r#"
                    .data-flow-layer,
                    .data-flow {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                    }
                    .flow-path {
                        stroke-dasharray: 1;
                        stroke-dashoffset: 1;
                        transition: stroke-dashoffset 2s cubic-bezier(0.45, 0, 0.55, 1);
                    }
                    .data-flow.is-drawn .flow-path {
                        stroke-dashoffset: 0;
                    }
                "#}
            </style>
            <svg
                ref={svg_ref}
                class={classes!("data-flow", drawn.then_some("is-drawn"))}
                viewBox="0 0 1200 800"
                preserveAspectRatio="xMidYMid slice"
            >
                <defs>
                    <linearGradient id="flow-line-gradient" x1="0%" y1="0%" x2="100%" y2="0%">
                        <stop offset="0%" stop-color="#00d4ff" stop-opacity="0" />
                        <stop offset="50%" stop-color="#00d4ff" stop-opacity="0.6" />
                        <stop offset="100%" stop-color="#00d4ff" stop-opacity="0" />
                    </linearGradient>
                </defs>
                <path class="flow-path" d={paths[0].svg()} pathLength="1" fill="none"
                    stroke="url(#flow-line-gradient)" stroke-width="2" opacity="0.4" />
                <path class="flow-path" d={paths[1].svg()} pathLength="1" fill="none"
                    stroke="url(#flow-line-gradient)" stroke-width="1.5" opacity="0.3" />
                {
                    dot_refs.iter().zip(DOTS).map(|(dot_ref, (radius, opacity))| html! {
                        // parked outside the view box until the dot sets off
                        <circle ref={dot_ref.clone()} cx="-20" cy="-20" r={radius.to_string()}
                            fill="#00d4ff" opacity={opacity.to_string()} />
                    }).collect::<Html>()
                }
            </svg>
        </div>
    }
}
