use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

/// Something that can run a callback once before the next repaint.
///
/// Dropping the returned handle cancels the request if it has not fired yet.
pub trait FrameScheduler {
    type Handle: 'static;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// The browser's `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

type FrameCallback = Box<dyn FnMut(f64) -> ControlFlow<()>>;

struct LoopInner<S: FrameScheduler> {
    scheduler: S,
    running: Cell<bool>,
    pending: RefCell<Option<S::Handle>>,
    on_frame: RefCell<FrameCallback>,
}

/// A recurring per-frame callback that can be started and stopped.
///
/// At most one frame request is outstanding at any time, so `start` on a
/// running loop and `stop` on a stopped one are both no-ops. The callback
/// returns `ControlFlow::Break` to end the loop from the inside, e.g. when
/// the element it draws into has been unmounted.
pub struct AnimationLoop<S: FrameScheduler + 'static> {
    inner: Rc<LoopInner<S>>,
}

impl<S: FrameScheduler + 'static> AnimationLoop<S> {
    pub fn new(scheduler: S, on_frame: impl FnMut(f64) -> ControlFlow<()> + 'static) -> Self {
        Self {
            inner: Rc::new(LoopInner {
                scheduler,
                running: Cell::new(false),
                pending: RefCell::new(None),
                on_frame: RefCell::new(Box::new(on_frame)),
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        if self.inner.pending.borrow().is_none() {
            schedule(&self.inner);
        }
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        // dropping the handle cancels the outstanding request
        self.inner.pending.borrow_mut().take();
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    #[cfg(test)]
    pub fn has_pending_frame(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl<S: FrameScheduler + 'static> Drop for AnimationLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S: FrameScheduler + 'static>(inner: &Rc<LoopInner<S>>) {
    let weak: Weak<LoopInner<S>> = Rc::downgrade(inner);
    let handle = inner.scheduler.request(Box::new(move |timestamp| {
        if let Some(inner) = weak.upgrade() {
            tick(&inner, timestamp);
        }
    }));
    *inner.pending.borrow_mut() = Some(handle);
}

fn tick<S: FrameScheduler + 'static>(inner: &Rc<LoopInner<S>>, timestamp: f64) {
    inner.pending.borrow_mut().take();
    if !inner.running.get() {
        return;
    }
    let flow = {
        let mut on_frame = inner.on_frame.borrow_mut();
        (*on_frame)(timestamp)
    };
    match flow {
        ControlFlow::Continue(()) => {
            if inner.running.get() && inner.pending.borrow().is_none() {
                schedule(inner);
            }
        }
        ControlFlow::Break(()) => inner.running.set(false),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    struct Request {
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce(f64)>,
    }

    /// In-memory scheduler: requests queue up until the test fires a frame.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        queue: Rc<RefCell<Vec<Request>>>,
        fired: Rc<Cell<usize>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualHandle;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Request {
                cancelled: cancelled.clone(),
                callback,
            });
            ManualHandle { cancelled }
        }
    }

    impl ManualFrames {
        /// Requests that are still live.
        pub fn pending(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|request| !request.cancelled.get())
                .count()
        }

        /// Number of callbacks actually invoked so far.
        pub fn fired(&self) -> usize {
            self.fired.get()
        }

        /// Runs every live callback queued before this call.
        pub fn run_frame(&self, timestamp: f64) {
            let due: Vec<Request> = self.queue.borrow_mut().drain(..).collect();
            for request in due {
                if request.cancelled.get() {
                    continue;
                }
                self.fired.set(self.fired.get() + 1);
                (request.callback)(timestamp);
            }
        }

        pub fn run_frames(&self, count: usize) {
            for n in 0..count {
                self.run_frame(n as f64 * 16.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualFrames;
    use super::*;

    fn counting_loop(frames: &ManualFrames) -> (AnimationLoop<ManualFrames>, Rc<Cell<usize>>) {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let animation = AnimationLoop::new(frames.clone(), move |_| {
            counter.set(counter.get() + 1);
            ControlFlow::Continue(())
        });
        (animation, ticks)
    }

    #[test]
    fn start_requests_one_frame_and_keeps_going() {
        let frames = ManualFrames::default();
        let (animation, ticks) = counting_loop(&frames);

        animation.start();
        assert_eq!(frames.pending(), 1);

        frames.run_frames(3);
        assert_eq!(ticks.get(), 3);
        assert_eq!(frames.pending(), 1);
        assert!(animation.is_running());
    }

    #[test]
    fn start_twice_does_not_double_schedule() {
        let frames = ManualFrames::default();
        let (animation, ticks) = counting_loop(&frames);

        animation.start();
        animation.start();
        assert_eq!(frames.pending(), 1);

        frames.run_frame(0.0);
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let frames = ManualFrames::default();
        let (animation, ticks) = counting_loop(&frames);

        animation.start();
        animation.stop();
        animation.stop();
        assert_eq!(frames.pending(), 0);

        frames.run_frames(5);
        assert_eq!(ticks.get(), 0);
        assert_eq!(frames.fired(), 0);
    }

    #[test]
    fn break_ends_the_loop() {
        let frames = ManualFrames::default();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let animation = AnimationLoop::new(frames.clone(), move |_| {
            counter.set(counter.get() + 1);
            if counter.get() == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        animation.start();
        frames.run_frames(10);
        assert_eq!(ticks.get(), 2);
        assert!(!animation.is_running());
        assert_eq!(frames.pending(), 0);

        animation.start();
        frames.run_frame(0.0);
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn dropping_the_loop_cancels_it() {
        let frames = ManualFrames::default();
        let (animation, ticks) = counting_loop(&frames);

        animation.start();
        drop(animation);
        frames.run_frames(3);
        assert_eq!(ticks.get(), 0);
    }
}
