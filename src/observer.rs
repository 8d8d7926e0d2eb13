//! Notifications emitted by the heap engine
//!
//! An [`Observer`] is a pure sink: it sees the heap after every swap but
//! cannot influence the engine. The unit type `()` is the detached observer
//! and costs nothing; the engine checks [`Observer::is_attached`] and skips
//! building events altogether when it returns false.
//!
//! After each swap of positions `i` and `j` the engine emits one frame:
//!
//! 1. [`Event::Step`]
//! 2. for every node `k` of the logical heap, [`Event::Relabel`] and, when
//!    `k` has a parent, [`Event::AddEdge`]
//! 3. [`Event::HighlightEdge`] between the two swapped positions
//!
//! Every public mutating operation (`build`, `heapsort`, `insert`,
//! `delete`, `extract`, `update`) ends with exactly one [`Event::Op`]
//! naming it, whether or not it swapped anything. `refresh` does not.
//!
//! All positions are 1-based (root = 1).

use crate::tree;

/// A single notification
#[derive(Debug, PartialEq, Eq)]
pub enum Event<'a, T> {
    /// Start of a fresh frame; previous labels and edges are stale
    Step,
    /// Tree position `position` currently holds `value`
    Relabel {
        /// 1-based tree position
        position: usize,
        /// Current value at that position
        value: &'a T,
    },
    /// `parent` is the parent of `child`
    AddEdge {
        /// 1-based parent position
        parent: usize,
        /// 1-based child position
        child: usize,
    },
    /// The values at `from` and `to` were just exchanged
    HighlightEdge {
        /// 1-based position nearer the root
        from: usize,
        /// 1-based position farther from the root
        to: usize,
    },
    /// Public operation `name` has completed
    Op {
        /// Operation name, e.g. `"insert"`
        name: &'static str,
        /// The whole backing sequence after the operation
        heap: &'a [T],
        /// Logical heap size after the operation
        size: usize,
    },
}

impl<T> Clone for Event<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Event<'_, T> {}

/// Sink for heap notifications
pub trait Observer<T> {
    /// Receives one event
    fn on_event(&mut self, event: Event<'_, T>);

    /// Returns false if events would be discarded anyway
    fn is_attached(&self) -> bool {
        true
    }
}

impl<T> Observer<T> for () {
    #[inline]
    fn on_event(&mut self, _event: Event<'_, T>) {}

    #[inline]
    fn is_attached(&self) -> bool {
        false
    }
}

impl<T, O: Observer<T> + ?Sized> Observer<T> for &mut O {
    fn on_event(&mut self, event: Event<'_, T>) {
        (**self).on_event(event)
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }
}

impl<T, O: Observer<T> + ?Sized> Observer<T> for Box<O> {
    fn on_event(&mut self, event: Event<'_, T>) {
        (**self).on_event(event)
    }

    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }
}

/// Fan-out: both observers see every event, `A` first
impl<T, A: Observer<T>, B: Observer<T>> Observer<T> for (A, B) {
    fn on_event(&mut self, event: Event<'_, T>) {
        self.0.on_event(event);
        self.1.on_event(event);
    }

    fn is_attached(&self) -> bool {
        self.0.is_attached() || self.1.is_attached()
    }
}

/// Emits a full frame for `heap` (the logical heap) without a highlight
pub(crate) fn publish_frame<T, O: Observer<T> + ?Sized>(observer: &mut O, heap: &[T]) {
    observer.on_event(Event::Step);
    let size = heap.len();
    for (k, value) in heap.iter().enumerate() {
        observer.on_event(Event::Relabel {
            position: k + 1,
            value,
        });
        if let Some(p) = tree::parent(k, size) {
            observer.on_event(Event::AddEdge {
                parent: p + 1,
                child: k + 1,
            });
        }
    }
}
