use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SECTION_SCROLL_DELAY_MS;
use crate::motion::capabilities::MotionConfig;
use crate::motion::frame_loop::AnimationFrames;
use crate::motion::scroll::{ScrollMetrics, ScrollSpan, ScrollTracker};
use crate::motion::visibility::IntersectionWatcher;
use crate::Route;

#[hook]
pub fn use_motion() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

/// Wires a frame-coalesced tracker to window scroll/resize and returns the
/// teardown for the effect.
fn track_scroll(
    measure: impl Fn() -> Option<f64> + 'static,
    progress: UseStateHandle<f64>,
) -> impl FnOnce() + 'static {
    let tracker = ScrollTracker::new(AnimationFrames, measure);
    let subscription = tracker.subscribe(move |value| progress.set(value));
    tracker.refresh_now();

    let listeners: Vec<EventListener> = web_sys::window()
        .map(|window| {
            ["scroll", "resize"]
                .into_iter()
                .map(|event| {
                    let tracker = tracker.clone();
                    EventListener::new(&window, event, move |_| tracker.notify())
                })
                .collect()
        })
        .unwrap_or_default();

    move || {
        drop(listeners);
        drop(subscription);
        tracker.cancel();
    }
}

/// Whole-page scroll progress in `[0, 1]`.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                track_scroll(
                    || {
                        let window = web_sys::window()?;
                        Some(ScrollMetrics::read(&window)?.page_progress())
                    },
                    progress,
                )
            },
            (),
        );
    }
    *progress
}

/// Scroll progress through the element behind `node`.
#[hook]
pub fn use_element_progress(node: NodeRef, span: ScrollSpan) -> f64 {
    let progress = use_state_eq(|| 0.0);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, span)| {
                let (node, span) = (node.clone(), *span);
                track_scroll(
                    move || {
                        let window = web_sys::window()?;
                        let element = node.cast::<Element>()?;
                        span.measure(&element, &window)
                    },
                    progress,
                )
            },
            (node, span),
        );
    }
    *progress
}

/// Flips to `true` the first time the element is at least `threshold`
/// visible, and stays there.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state_eq(|| false);
    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node| {
                let watcher = node.cast::<Element>().and_then(|element| {
                    let seen = seen.clone();
                    IntersectionWatcher::observe(&element, threshold, move |visible| {
                        if visible {
                            seen.set(true);
                        }
                    })
                    .map_err(|err| warn!("cannot observe element visibility: {:?}", err))
                    .ok()
                });
                if watcher.is_none() {
                    seen.set(true);
                }
                move || drop(watcher)
            },
            node,
        );
    }
    *seen
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scrolls to a home-page section, navigating home first when needed.
#[hook]
pub fn use_section_nav() -> Callback<&'static str> {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    Callback::from(move |id: &'static str| {
        if route == Some(Route::Home) {
            scroll_to_section(id);
            return;
        }
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
        Timeout::new(SECTION_SCROLL_DELAY_MS, move || scroll_to_section(id)).forget();
    })
}
