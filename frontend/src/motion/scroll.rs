use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use web_sys::{Element, Window};

use super::frame_loop::FrameScheduler;

/// Raw page scroll measurements, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn read(window: &Window) -> Option<Self> {
        let document = window.document()?.document_element()?;
        Some(Self {
            scroll_top: window.scroll_y().ok()?,
            document_height: f64::from(document.scroll_height()),
            viewport_height: window.inner_height().ok()?.as_f64()?,
        })
    }

    /// `scroll_top / (document_height - viewport_height)`, clamped to `[0, 1]`.
    /// A page that cannot scroll reports zero.
    pub fn page_progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range).clamp(0.0, 1.0)
    }
}

/// How an element's bounding box is turned into a progress value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollSpan {
    /// 0 when the element's top meets the viewport bottom, 1 when its
    /// bottom leaves through the viewport top.
    Passing,
    /// 0 when the element's top reaches the viewport top, 1 when its
    /// bottom reaches the viewport bottom. Used for tall tracks that hold
    /// a sticky child.
    Pinned,
}

impl ScrollSpan {
    pub fn progress(self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let (travelled, range) = match self {
            ScrollSpan::Passing => (viewport_height - top, height + viewport_height),
            ScrollSpan::Pinned => (-top, height - viewport_height),
        };
        if range <= 0.0 {
            return 0.0;
        }
        (travelled / range).clamp(0.0, 1.0)
    }

    pub fn measure(self, element: &Element, window: &Window) -> Option<f64> {
        let rect = element.get_bounding_client_rect();
        let viewport_height = window.inner_height().ok()?.as_f64()?;
        Some(self.progress(rect.top(), rect.height(), viewport_height))
    }
}

type Measure = Box<dyn Fn() -> Option<f64>>;
type Subscriber = Rc<dyn Fn(f64)>;

struct TrackerInner<S: FrameScheduler> {
    scheduler: S,
    measure: Measure,
    pending: RefCell<Option<S::Handle>>,
    subscribers: RefCell<Vec<(usize, Subscriber)>>,
    next_id: Cell<usize>,
    last: Cell<Option<f64>>,
}

impl<S: FrameScheduler> TrackerInner<S> {
    fn recompute(&self) {
        let Some(progress) = (self.measure)() else {
            return;
        };
        if self.last.get() == Some(progress) {
            return;
        }
        self.last.set(Some(progress));

        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(progress);
        }
    }
}

/// Publishes a progress scalar at most once per animation frame.
///
/// Scroll events only mark the value dirty; the measurement runs on the
/// next frame, so a burst of events between two frames costs one
/// recomputation. Subscribers only hear about values that changed.
pub struct ScrollTracker<S: FrameScheduler + 'static> {
    inner: Rc<TrackerInner<S>>,
}

impl<S: FrameScheduler + 'static> Clone for ScrollTracker<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: FrameScheduler + 'static> ScrollTracker<S> {
    pub fn new(scheduler: S, measure: impl Fn() -> Option<f64> + 'static) -> Self {
        Self {
            inner: Rc::new(TrackerInner {
                scheduler,
                measure: Box::new(measure),
                pending: RefCell::new(None),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                last: Cell::new(None),
            }),
        }
    }

    /// Call from the scroll/resize listener.
    pub fn notify(&self) {
        if self.inner.pending.borrow().is_some() {
            return;
        }
        let weak: Weak<TrackerInner<S>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.request(Box::new(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.pending.borrow_mut().take();
                inner.recompute();
            }
        }));
        *self.inner.pending.borrow_mut() = Some(handle);
    }

    /// Measures synchronously, e.g. right after mounting.
    pub fn refresh_now(&self) {
        self.inner.recompute();
    }

    /// Drops any scheduled recomputation.
    pub fn cancel(&self) {
        self.inner.pending.borrow_mut().take();
    }

    /// Last published value.
    #[cfg(test)]
    pub fn progress(&self) -> f64 {
        self.inner.last.get().unwrap_or(0.0)
    }

    pub fn subscribe(&self, subscriber: impl Fn(f64) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(subscriber)));

        let weak: Weak<TrackerInner<S>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.subscribers.borrow_mut().retain(|(other, _)| *other != id);
                }
            })),
        }
    }
}

/// Removes its subscriber when dropped.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
