use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_motion;
use crate::motion::follow::{Follower, MagneticOptions, Point};
use crate::motion::frame_loop::{AnimationFrames, AnimationLoop};

/// Makes the element behind `node` drift toward a nearby pointer and ease
/// back home when the pointer leaves. Does nothing on touch devices.
#[hook]
pub fn use_magnetic(node: NodeRef, options: MagneticOptions) {
    let motion = use_motion();
    let enabled = motion.custom_cursor;

    use_effect_with_deps(
        move |(node, enabled)| {
            let mut listener = None;
            let mut frames = None;

            if let (true, Some(window)) = (*enabled, web_sys::window()) {
                let follower = Rc::new(RefCell::new(Follower::new(options.ease)));
                let animation = {
                    let follower = follower.clone();
                    let node = node.clone();
                    Rc::new(AnimationLoop::new(AnimationFrames, move |_| {
                        let Some(element) = node.cast::<HtmlElement>() else {
                            return ControlFlow::Break(());
                        };
                        let mut follower = follower.borrow_mut();
                        let offset = follower.step();
                        let _ = element.style().set_property(
                            "transform",
                            &format!("translate3d({:.2}px, {:.2}px, 0)", offset.x, offset.y),
                        );
                        if follower.is_settled(0.05) {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(())
                        }
                    }))
                };

                let node = node.clone();
                let on_move = {
                    let animation = animation.clone();
                    EventListener::new(&window, "mousemove", move |event| {
                        let (Some(event), Some(element)) =
                            (event.dyn_ref::<MouseEvent>(), node.cast::<HtmlElement>())
                        else {
                            return;
                        };
                        let rect = element.get_bounding_client_rect();
                        // the rect already includes our own transform
                        let offset = follower.borrow().position;
                        let center = Point::new(
                            rect.left() + rect.width() / 2.0 - offset.x,
                            rect.top() + rect.height() / 2.0 - offset.y,
                        );
                        let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                        let target = options.pull(pointer, center).unwrap_or(Point::ORIGIN);

                        let mut follower = follower.borrow_mut();
                        if follower.target != target {
                            follower.target = target;
                            drop(follower);
                            animation.start();
                        }
                    })
                };
                listener = Some(on_move);
                frames = Some(animation);
            }

            move || {
                drop(listener);
                if let Some(frames) = frames {
                    frames.stop();
                }
            }
        },
        (node, enabled),
    );
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub cursor_text: Option<AttrValue>,
    #[prop_or_default]
    pub button_type: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    use_magnetic(node.clone(), MagneticOptions::default());

    html! {
        <button
            ref={node}
            type={props.button_type.clone().unwrap_or_else(|| AttrValue::from("button"))}
            class={classes!("magnetic-button", props.class.clone())}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            data-cursor-text={props.cursor_text.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
