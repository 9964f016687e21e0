use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::frame_loop::{AnimationFrames, AnimationLoop, FrameScheduler};

/// Pauses a frame loop while its target is off-screen.
pub struct VisibilityGate<S: FrameScheduler + 'static> {
    frames: AnimationLoop<S>,
    visible: Cell<bool>,
}

impl<S: FrameScheduler + 'static> VisibilityGate<S> {
    pub fn new(frames: AnimationLoop<S>) -> Self {
        Self {
            frames,
            visible: Cell::new(false),
        }
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
        if visible {
            self.frames.start();
        } else {
            self.frames.stop();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn frames(&self) -> &AnimationLoop<S> {
        &self.frames
    }
}

/// Reports whether an element intersects the viewport.
///
/// The observer is disconnected when the watcher is dropped.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            if let Some(entry) = latest {
                on_change(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A browser frame loop that only runs while `target` is on screen.
///
/// Starts immediately; the first intersection report then pauses it if the
/// target turns out to be off-screen. When `IntersectionObserver` is not
/// available the loop simply runs until dropped.
pub struct ObservedLoop {
    gate: Rc<VisibilityGate<AnimationFrames>>,
    _watcher: Option<IntersectionWatcher>,
}

impl ObservedLoop {
    pub fn new(target: &Element, on_frame: impl FnMut(f64) -> ControlFlow<()> + 'static) -> Self {
        let gate = Rc::new(VisibilityGate::new(AnimationLoop::new(AnimationFrames, on_frame)));
        gate.set_visible(true);

        let weak = Rc::downgrade(&gate);
        let watcher = IntersectionWatcher::observe(target, 0.0, move |visible| {
            if let Some(gate) = weak.upgrade() {
                gate.set_visible(visible);
            }
        });
        let watcher = match watcher {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                warn!("IntersectionObserver unavailable, animating unconditionally: {:?}", err);
                None
            }
        };

        Self { gate, _watcher: watcher }
    }

    /// Resumes the loop if the target was last reported on screen.
    pub fn start(&self) {
        if self.gate.is_visible() {
            self.gate.frames().start();
        }
    }

    /// Pauses the loop until the next `start` or intersection report.
    pub fn stop(&self) {
        self.gate.frames().stop();
    }
}

#[cfg(test)]
mod tests {
    use super::super::frame_loop::testing::ManualFrames;
    use super::*;

    fn gated(frames: &ManualFrames) -> (VisibilityGate<ManualFrames>, Rc<Cell<usize>>) {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let animation = AnimationLoop::new(frames.clone(), move |_| {
            counter.set(counter.get() + 1);
            ControlFlow::Continue(())
        });
        (VisibilityGate::new(animation), ticks)
    }

    #[test]
    fn no_frames_fire_while_hidden() {
        let frames = ManualFrames::default();
        let (gate, ticks) = gated(&frames);

        gate.set_visible(true);
        frames.run_frames(4);
        assert_eq!(ticks.get(), 4);

        gate.set_visible(false);
        assert_eq!(frames.pending(), 0);
        frames.run_frames(20);
        assert_eq!(ticks.get(), 4);
        assert!(!gate.frames().has_pending_frame());

        gate.set_visible(true);
        frames.run_frames(2);
        assert_eq!(ticks.get(), 6);
    }

    #[test]
    fn repeated_reports_are_idempotent() {
        let frames = ManualFrames::default();
        let (gate, ticks) = gated(&frames);

        gate.set_visible(true);
        gate.set_visible(true);
        gate.set_visible(true);
        assert_eq!(frames.pending(), 1);

        gate.set_visible(false);
        gate.set_visible(false);
        assert_eq!(frames.pending(), 0);
        assert!(!gate.is_visible());

        frames.run_frame(0.0);
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn hiding_mid_stream_drops_the_queued_frame() {
        let frames = ManualFrames::default();
        let (gate, ticks) = gated(&frames);

        gate.set_visible(true);
        frames.run_frame(0.0);
        assert_eq!(frames.pending(), 1);

        gate.set_visible(false);
        frames.run_frame(16.0);
        assert_eq!(ticks.get(), 1);
        assert_eq!(frames.fired(), 1);
    }
}
