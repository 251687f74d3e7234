//! Looping carousel controller
//!
//! Presents a finite list of slides as an apparently infinite horizontally
//! paged strip. The rendered sequence is the real items with a sentinel
//! clone at each end: the last item prepended and the first item appended.
//! Paging across a seam lands on a clone that is pixel-identical to the
//! real item on the far side, and the settle handler repositions there
//! without animation, so the loop never shows a backward jump.
//!
//! State machine: `Settled(i)` for i in `[1, N]`, and `Transitioning` while
//! an animated scroll is in flight. Every scroll, whether started by the
//! auto-advance timer or by manual paging, ends in the same settle path.
//!
//! Time is injected (`tick(now)`) rather than read from the clock, so the
//! timer protocol is testable under simulated time.

use std::time::{Duration, Instant};

use tracing::debug;

/// Default auto-advance interval
pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);

/// Fraction of the remaining distance covered per animation tick
const ANIM_SMOOTHING: f32 = 0.35;

/// Distance below which an animated scroll is considered at rest
const SNAP_EPSILON: f32 = 0.5;

/// Controller for an auto-advancing, seamlessly wrapping pager.
///
/// `N = items.len()`. The extended sequence has length `N + 2` whenever
/// `N >= 1`. Once settled, the physical offset always equals
/// `current_index * viewport_width` with `current_index` in `[1, N]`.
#[derive(Debug, Clone)]
pub struct LoopingCarousel<T> {
    items: Vec<T>,
    /// `[items[N-1], items[0], ..., items[N-1], items[0]]` - the rendered strip
    extended: Vec<T>,
    viewport_width: f32,
    interval: Duration,
    current_index: usize,
    offset: f32,
    /// Target offset of the in-flight animated scroll, if any
    target: Option<f32>,
    /// Next auto-advance time; `None` when stopped or when N < 2
    deadline: Option<Instant>,
}

impl<T: Clone> LoopingCarousel<T> {
    /// Mount the carousel.
    ///
    /// The offset is positioned on the first real item immediately, before
    /// anything is rendered, so the prepended clone is never seen. The
    /// auto-advance timer is armed only when there are at least two items;
    /// a single item degenerates to a static display.
    pub fn new(items: Vec<T>, viewport_width: f32, interval: Duration, now: Instant) -> Self {
        let viewport_width = viewport_width.max(1.0);
        let extended = match items.as_slice() {
            [] => Vec::new(),
            [.., last] => {
                let mut seq = Vec::with_capacity(items.len() + 2);
                seq.push(last.clone());
                seq.extend(items.iter().cloned());
                seq.push(items[0].clone());
                seq
            }
        };
        let (current_index, offset) = if items.is_empty() {
            (0, 0.0)
        } else {
            (1, viewport_width)
        };
        let deadline = (items.len() >= 2).then(|| now + interval);

        Self {
            items,
            extended,
            viewport_width,
            interval,
            current_index,
            offset,
            target: None,
            deadline,
        }
    }

    /// Mount with the default 4-second advance interval
    pub fn with_default_interval(items: Vec<T>, viewport_width: f32, now: Instant) -> Self {
        Self::new(items, viewport_width, DEFAULT_ADVANCE_INTERVAL, now)
    }

    /// Number of real items (N)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Settled index into the extended sequence; in `[1, N]` once at rest
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Current physical offset of the strip
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether an animated scroll is in flight
    pub fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Whether the auto-advance timer is armed
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// The rendered sequence (real items plus the two sentinel clones)
    pub fn extended_items(&self) -> &[T] {
        &self.extended
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The settled item
    pub fn current_item(&self) -> Option<&T> {
        self.extended.get(self.current_index)
    }

    /// Zero-based index of the settled item among the real items
    pub fn real_index(&self) -> usize {
        self.current_index.saturating_sub(1)
    }

    /// Index into the extended sequence nearest the current offset.
    ///
    /// During a transition this is the page most of the viewport shows;
    /// renderers draw it so mid-scroll frames stay page-aligned.
    pub fn visible_extended_index(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        let max = (self.items.len() + 1) as i64;
        ((self.offset / self.viewport_width).round() as i64).clamp(0, max) as usize
    }

    /// Zero-based real item nearest the current offset; the sentinel
    /// clones map to the real items they duplicate
    pub fn visible_real_index(&self) -> usize {
        let n = self.items.len();
        if n == 0 {
            return 0;
        }
        match self.visible_extended_index() {
            0 => n - 1,
            i if i == n + 1 => 0,
            i => i - 1,
        }
    }

    /// Drive timers and animation.
    ///
    /// Returns `true` when the visible state changed (a redraw is needed).
    /// With fewer than two items there is nothing to drive. After [`stop`]
    /// this is a no-op.
    ///
    /// [`stop`]: LoopingCarousel::stop
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.items.len() < 2 {
            return false;
        }

        if let Some(target) = self.target {
            let remaining = target - self.offset;
            if remaining.abs() <= SNAP_EPSILON {
                self.offset = target;
                self.settle_at(target, now);
            } else {
                self.offset += remaining * ANIM_SMOOTHING;
            }
            return true;
        }

        if self.deadline.is_some_and(|d| now >= d) {
            // The advance request does not touch current_index; only the
            // settle handler does.
            self.target = Some(self.viewport_width * (self.current_index + 1) as f32);
            return true;
        }

        false
    }

    /// Manual paging to the next slide (same settle path as the timer)
    pub fn advance(&mut self) {
        if self.items.len() < 2 || self.target.is_some() {
            return;
        }
        self.target = Some(self.viewport_width * (self.current_index + 1) as f32);
    }

    /// Manual paging to the previous slide
    pub fn retreat(&mut self) {
        if self.items.len() < 2 || self.target.is_some() {
            return;
        }
        self.target = Some(self.viewport_width * (self.current_index - 1) as f32);
    }

    /// Settle handling, the core of the wrap illusion.
    ///
    /// Computes the page the scroll came to rest on and applies the wrap
    /// correction: landing on the prepended clone repositions, without
    /// animation, onto the real last item; landing on the appended clone
    /// repositions onto the real first item. Any out-of-range index from
    /// extreme overscroll clamps to `[1, N]`.
    ///
    /// The auto-advance deadline is re-armed on every settle, anchored to
    /// the settle time: manual paging resets the cadence (pause-on-
    /// interaction semantics).
    ///
    /// Returns `true` when a wrap correction was applied.
    pub fn settle_at(&mut self, offset_x: f32, now: Instant) -> bool {
        let n = self.items.len() as i64;
        if n == 0 {
            return false;
        }

        let settled = (offset_x / self.viewport_width).round() as i64;
        let (index, wrapped) = if settled == 0 {
            (n, true) // end clone: jump to the real last item
        } else if settled == n + 1 {
            (1, true) // start clone: jump to the real first item
        } else {
            (settled.clamp(1, n), false)
        };

        if wrapped {
            debug!(settled, index, "carousel wrap correction");
        }

        self.current_index = index as usize;
        self.offset = self.viewport_width * index as f32;
        self.target = None;
        if n >= 2 {
            self.deadline = Some(now + self.interval);
        }
        wrapped
    }

    /// Cancel the timer and any in-flight scroll.
    ///
    /// Called on unmount; later `tick` calls are guaranteed no-ops.
    pub fn stop(&mut self) {
        self.deadline = None;
        self.target = None;
    }
}
