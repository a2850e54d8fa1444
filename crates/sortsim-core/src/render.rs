//! The [`Renderer`] collaborator and frame-rate adapters.

use std::time::{Duration, Instant};

use crate::highlight::HighlightSet;

/// Draws one frame of the array as a bar chart.
///
/// Called synchronously on the host thread between steps, as often as
/// once per configured delay (1 ms at the fastest). Implementations must
/// not queue frames without bound; dropping or coalescing intermediate
/// frames is acceptable. Wrap a slow renderer in [`ThrottledRenderer`]
/// to get that for free.
pub trait Renderer {
    /// Draw `snapshot` with `highlights` under `title`.
    fn render(&mut self, snapshot: &[i32], highlights: &HighlightSet, title: &str);

    /// Draw the final frame of a completed session.
    ///
    /// Default: a plain [`render`](Self::render) with no highlights.
    fn finish(&mut self, snapshot: &[i32], title: &str) {
        self.render(snapshot, &HighlightSet::new(), title);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, snapshot: &[i32], highlights: &HighlightSet, title: &str) {
        (**self).render(snapshot, highlights, title);
    }

    fn finish(&mut self, snapshot: &[i32], title: &str) {
        (**self).finish(snapshot, title);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, snapshot: &[i32], highlights: &HighlightSet, title: &str) {
        (**self).render(snapshot, highlights, title);
    }

    fn finish(&mut self, snapshot: &[i32], title: &str) {
        (**self).finish(snapshot, title);
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &[i32], _highlights: &HighlightSet, _title: &str) {}
}

/// Drops intermediate frames that arrive faster than `min_interval`.
///
/// The first frame is always forwarded, as is every
/// [`finish`](Renderer::finish) frame, so the completed array is never
/// lost to throttling.
#[derive(Debug)]
pub struct ThrottledRenderer<R> {
    inner: R,
    min_interval: Duration,
    last_frame: Option<Instant>,
    dropped: u64,
}

impl<R: Renderer> ThrottledRenderer<R> {
    /// Forward at most one frame per `min_interval` to `inner`.
    pub fn new(inner: R, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            last_frame: None,
            dropped: 0,
        }
    }

    /// Frames dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Borrow the wrapped renderer.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Unwrap, returning the inner renderer.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Renderer> Renderer for ThrottledRenderer<R> {
    fn render(&mut self, snapshot: &[i32], highlights: &HighlightSet, title: &str) {
        let now = Instant::now();
        let due = self
            .last_frame
            .is_none_or(|last| now.duration_since(last) >= self.min_interval);
        if due {
            self.last_frame = Some(now);
            self.inner.render(snapshot, highlights, title);
        } else {
            self.dropped += 1;
        }
    }

    fn finish(&mut self, snapshot: &[i32], title: &str) {
        self.last_frame = Some(Instant::now());
        self.inner.finish(snapshot, title);
    }
}
