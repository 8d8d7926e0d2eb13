//! Structured logging of heap operations via `slog`
//!
//! [`SlogObserver`] forwards engine notifications to a [`slog::Logger`].
//! Completed operations and swaps are logged at `debug`; frame boundaries,
//! relabels and edges at `trace`. Which levels survive compilation is up to
//! the final binary's slog level features.
//!
//! ```rust
//! use rust_array_heap::logging::SlogObserver;
//! use rust_array_heap::{MinFirst, MinHeap};
//!
//! let logger = slog::Logger::root(slog::Discard, slog::o!("heap" => "jobs"));
//! let mut heap = MinHeap::new(MinFirst).with_observer(SlogObserver::new(logger));
//! heap.insert(3);
//! heap.insert(1);
//! assert_eq!(heap.observer().swaps(), 1);
//! ```

use std::fmt;

use slog::{debug, o, trace, Logger};

use crate::observer::{Event, Observer};

/// Observer that logs every event
#[derive(Debug, Clone)]
pub struct SlogObserver {
    logger: Logger,
    frames: u64,
    swaps: u64,
    ops: u64,
}

impl SlogObserver {
    /// Logs to `logger`, with all counters at zero
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            frames: 0,
            swaps: 0,
            ops: 0,
        }
    }

    /// An observer whose records go nowhere
    pub fn discard() -> Self {
        Self::new(Logger::root(slog::Discard, o!()))
    }

    /// Frames seen so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Swaps seen so far
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Completed public operations seen so far
    pub fn ops(&self) -> u64 {
        self.ops
    }

    /// The logger records are sent to
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl<T: fmt::Debug> Observer<T> for SlogObserver {
    fn on_event(&mut self, event: Event<'_, T>) {
        match event {
            Event::Step => {
                self.frames += 1;
                trace!(self.logger, "frame"; "frame" => self.frames);
            }
            Event::Relabel { position, value } => {
                trace!(self.logger, "relabel"; "position" => position, "value" => ?value);
            }
            Event::AddEdge { parent, child } => {
                trace!(self.logger, "edge"; "parent" => parent, "child" => child);
            }
            Event::HighlightEdge { from, to } => {
                self.swaps += 1;
                debug!(self.logger, "swap"; "frame" => self.frames, "from" => from, "to" => to);
            }
            Event::Op { name, heap, size } => {
                self.ops += 1;
                debug!(self.logger, "op";
                    "op" => name,
                    "size" => size,
                    "state" => format!("{heap:?}, heapsize: {size}"));
            }
        }
    }
}
