use yew::prelude::*;

use crate::hooks::{use_in_view, use_motion};
use crate::motion::split_text::{split, SplitMode};

#[derive(Properties, PartialEq)]
pub struct SplitTextProps {
    pub text: AttrValue,
    #[prop_or(SplitMode::Words)]
    pub mode: SplitMode,
    /// Seconds between consecutive fragments.
    #[prop_or(0.05)]
    pub stagger: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// A heading whose words (or letters) rise in one after another once it
/// scrolls into view.
#[function_component(SplitText)]
pub fn split_text(props: &SplitTextProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2);
    let motion = use_motion();

    if !motion.staggered_text {
        return html! {
            <span ref={node} class={props.class.clone()}>{props.text.clone()}</span>
        };
    }

    let fragments = split(&props.text, props.mode, props.stagger, props.delay);

    html! {
        <span
            ref={node}
            class={classes!("split-text", in_view.then_some("is-revealed"), props.class.clone())}
            aria-label={props.text.clone()}
        >
            {
                fragments.into_iter().map(|fragment| {
                    if fragment.is_space {
                        html! { <span class="split-space" aria-hidden="true">{" "}</span> }
                    } else {
                        html! {
                            <span class="split-mask" aria-hidden="true">
                                <span
                                    class="split-fragment"
                                    style={format!("transition-delay: {:.3}s;", fragment.delay)}
                                >
                                    {fragment.text}
                                </span>
                            </span>
                        }
                    }
                }).collect::<Html>()
            }
        </span>
    }
}
