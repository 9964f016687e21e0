use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_motion;
use crate::motion::follow::Point;
use crate::motion::tilt::{Bounds, Tilt};

#[derive(Properties, PartialEq)]
pub struct Card3DProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("rgba(0, 212, 255, 0.3)"))]
    pub glow: AttrValue,
    /// Degrees of tilt with the pointer on an edge.
    #[prop_or(15.0)]
    pub intensity: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that leans toward the pointer and glows while hovered. A plain
/// box when 3D effects are off.
#[function_component(Card3D)]
pub fn card_3d(props: &Card3DProps) -> Html {
    let motion = use_motion();
    let node = use_node_ref();
    let tilt = use_state_eq(|| Tilt::FLAT);
    let hovered = use_state_eq(|| false);

    if !motion.enable_3d {
        return html! {
            <div class={classes!("card-3d", props.class.clone())}>
                { for props.children.iter() }
            </div>
        };
    }

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.clone();
        let intensity = props.intensity;
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let pointer = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
            tilt.set(Tilt::toward(pointer, bounds, intensity));
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            tilt.set(Tilt::FLAT);
            hovered.set(false);
        })
    };

    let shadow = if *hovered {
        format!("0 25px 50px -12px {glow}, 0 0 30px {glow}", glow = props.glow)
    } else {
        "0 10px 30px -10px rgba(0, 0, 0, 0.3)".to_string()
    };
    let inner_style = format!("transform: {}; box-shadow: {};", tilt.css(*hovered), shadow);
    let glow_style = format!(
        "background: linear-gradient(135deg, {}, transparent 50%); opacity: {};",
        props.glow,
        if *hovered { 1 } else { 0 }
    );

    html! {
        <div
            ref={node}
            class={classes!("card-3d", "is-tilting", props.class.clone())}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="card-3d-inner" style={inner_style}>
                <div class="card-3d-glow" style={glow_style} aria-hidden="true" />
                { for props.children.iter() }
            </div>
        </div>
    }
}
