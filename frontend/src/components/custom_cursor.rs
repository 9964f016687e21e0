use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_motion;
use crate::motion::follow::{Follower, Point};
use crate::motion::frame_loop::{AnimationFrames, AnimationLoop};

const RING_EASE: f64 = 0.15;
const INTERACTIVE: &str = "a, button, input, textarea, select, [data-cursor=\"pointer\"]";
const BODY_CLASS: &str = "has-custom-cursor";

#[derive(Clone, Default, PartialEq)]
struct Hover {
    interactive: bool,
    text: Option<String>,
}

impl Hover {
    fn from_target(target: Option<&Element>) -> Self {
        let Some(target) = target else {
            return Self::default();
        };
        let text = target
            .closest("[data-cursor-text]")
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("data-cursor-text"));
        let interactive = text.is_some() || matches!(target.closest(INTERACTIVE), Ok(Some(_)));
        Self { interactive, text }
    }
}

fn place(node: &NodeRef, at: Point) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.style().set_property(
            "transform",
            &format!("translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%)", at.x, at.y),
        );
    }
}

/// Pointer-following ring and dot. Renders nothing on touch and mobile
/// devices.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let motion = use_motion();
    let ring_ref = use_node_ref();
    let dot_ref = use_node_ref();
    let hover = use_state_eq(Hover::default);
    let pressed = use_state_eq(|| false);
    let visible = use_state_eq(|| false);

    {
        let (ring_ref, dot_ref) = (ring_ref.clone(), dot_ref.clone());
        let (hover, pressed, visible) = (hover.clone(), pressed.clone(), visible.clone());
        use_effect_with_deps(
            move |enabled| {
                let mut cleanup: Option<(Vec<EventListener>, AnimationLoop<AnimationFrames>)> = None;
                let document = web_sys::window().and_then(|window| window.document());

                if let (true, Some(document)) = (*enabled, document) {
                    if let Some(body) = document.body() {
                        let _ = body.class_list().add_1(BODY_CLASS);
                    }
                    let follower = Rc::new(RefCell::new(Follower::new(RING_EASE)));

                    let frames = {
                        let follower = follower.clone();
                        let ring_ref = ring_ref.clone();
                        AnimationLoop::new(AnimationFrames, move |_| {
                            if ring_ref.get().is_none() {
                                return ControlFlow::Break(());
                            }
                            let position = follower.borrow_mut().step();
                            place(&ring_ref, position);
                            ControlFlow::Continue(())
                        })
                    };
                    frames.start();

                    let on_move = {
                        let follower = follower.clone();
                        let visible = visible.clone();
                        EventListener::new(&document, "mousemove", move |event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                            follower.borrow_mut().target = pointer;
                            place(&dot_ref, pointer);
                            visible.set(true);
                        })
                    };
                    let on_over = EventListener::new(&document, "mouseover", move |event| {
                        let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
                        hover.set(Hover::from_target(target.as_ref()));
                    });
                    let on_down = {
                        let pressed = pressed.clone();
                        EventListener::new(&document, "mousedown", move |_| pressed.set(true))
                    };
                    let on_up = EventListener::new(&document, "mouseup", move |_| pressed.set(false));
                    let on_leave = EventListener::new(&document, "mouseleave", move |_| visible.set(false));

                    cleanup = Some((vec![on_move, on_over, on_down, on_up, on_leave], frames));
                }

                move || {
                    if let Some((listeners, frames)) = cleanup {
                        frames.stop();
                        drop(listeners);
                        if let Some(body) = web_sys::window()
                            .and_then(|window| window.document())
                            .and_then(|document| document.body())
                        {
                            let _ = body.class_list().remove_1(BODY_CLASS);
                        }
                    }
                }
            },
            motion.custom_cursor,
        );
    }

    if !motion.custom_cursor {
        return html! {};
    }

    let ring_class = classes!(
        "cursor-ring",
        hover.interactive.then_some("is-hovering"),
        hover.text.is_some().then_some("has-text"),
        (*pressed).then_some("is-pressed"),
        (!*visible).then_some("is-hidden"),
    );

    html! {
        <>
            <style>
                {r#"
                    body.has-custom-cursor,
                    body.has-custom-cursor a,
                    body.has-custom-cursor button {
                        cursor: none;
                    }
                    .cursor-ring, .cursor-dot {
                        position: fixed;
                        top: 0;
                        left: 0;
                        pointer-events: none;
                        z-index: 9999;
                        will-change: transform;
                    }
                    .cursor-ring {
                        width: 40px;
                        height: 40px;
                        border: 1px solid rgba(0, 212, 255, 0.6);
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: width 0.3s ease, height 0.3s ease, background 0.3s ease, opacity 0.3s ease;
                    }
                    .cursor-ring.is-hovering {
                        width: 64px;
                        height: 64px;
                        background: rgba(0, 212, 255, 0.1);
                    }
                    .cursor-ring.has-text {
                        width: 96px;
                        height: 96px;
                        background: rgba(0, 212, 255, 0.9);
                    }
                    .cursor-ring.is-pressed {
                        width: 28px;
                        height: 28px;
                    }
                    .cursor-ring.is-hidden, .cursor-dot.is-hidden {
                        opacity: 0;
                    }
                    .cursor-text {
                        color: #0a0f1c;
                        font-size: 0.75rem;
                        font-weight: 600;
                        text-transform: uppercase;
                    }
                    .cursor-dot {
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #00d4ff;
                    }
                "#}
            </style>
            <div ref={ring_ref} class={ring_class} aria-hidden="true">
                if let Some(text) = &hover.text {
                    <span class="cursor-text">{text}</span>
                }
            </div>
            <div
                ref={dot_ref}
                class={classes!("cursor-dot", (!*visible).then_some("is-hidden"))}
                aria-hidden="true"
            />
        </>
    }
}
