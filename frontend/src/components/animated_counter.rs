use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::hooks::{use_in_view, use_motion};
use crate::motion::counter::{count_up, format_thousands, scramble_digits};
use crate::motion::frame_loop::{AnimationFrames, AnimationLoop};

const COUNT_UP_MS: f64 = 2000.0;
const SCRAMBLE_MS: f64 = 800.0;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// A number that animates in the first time it scrolls into view: a
/// count-up on small screens, a digit scramble elsewhere.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.1);
    let motion = use_motion();
    let shown = use_state(|| format_thousands(0));

    {
        let shown = shown.clone();
        let value = props.value;
        let count_up_mode = motion.capabilities.is_handheld();
        use_effect_with_deps(
            move |(in_view, value)| {
                let value = *value;
                let animation = in_view.then(|| {
                    let target = format_thousands(value);
                    let started = Cell::new(None::<f64>);
                    let rng = RefCell::new(SmallRng::seed_from_u64(Date::now() as u64));
                    let animation = AnimationLoop::new(AnimationFrames, move |now| {
                        let start = started.get().unwrap_or(now);
                        started.set(Some(start));
                        let elapsed = now - start;

                        if count_up_mode {
                            shown.set(format_thousands(count_up(value, elapsed, COUNT_UP_MS)));
                            if elapsed >= COUNT_UP_MS {
                                return ControlFlow::Break(());
                            }
                        } else if elapsed >= SCRAMBLE_MS {
                            shown.set(target.clone());
                            return ControlFlow::Break(());
                        } else {
                            let progress = elapsed / SCRAMBLE_MS;
                            shown.set(scramble_digits(&target, progress, &mut *rng.borrow_mut()));
                        }
                        ControlFlow::Continue(())
                    });
                    animation.start();
                    animation
                });
                move || drop(animation)
            },
            (in_view, value),
        );
    }

    html! {
        <span ref={node} class="animated-counter">
            {(*shown).clone()}{props.suffix.clone()}
        </span>
    }
}
