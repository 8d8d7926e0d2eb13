//! Frame-by-frame recording of heap operations
//!
//! [`Animation`] is an [`Observer`] that turns the engine's notifications
//! into a list of [`Frame`]s, one per swap (plus one per explicit
//! [`refresh`](crate::BinaryHeap::refresh)). Each frame is a complete
//! picture of the logical heap and can be rendered as a Graphviz digraph
//! with [`Frame::to_dot`]; the edge touched by the swap is drawn in green.
//!
//! # Example
//!
//! ```rust
//! use rust_array_heap::animation::Animation;
//! use rust_array_heap::{MaxFirst, MaxHeap};
//!
//! let mut heap = MaxHeap::new(MaxFirst).with_observer(Animation::new());
//! heap.insert(1);
//! heap.insert(2);
//!
//! let frames = heap.observer().frames();
//! assert_eq!(frames.len(), 1);
//! assert_eq!(frames[0].highlighted, vec![(1, 2)]);
//! assert!(frames[0].to_dot().contains("1 -> 2 [color=green];"));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::observer::{Event, Observer};

/// One picture of the logical heap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Label of every node, by 1-based position
    pub nodes: BTreeMap<usize, String>,
    /// Parent → child edges
    pub edges: BTreeSet<(usize, usize)>,
    /// Edges highlighted in this frame, in arrival order
    pub highlighted: Vec<(usize, usize)>,
}

impl Frame {
    /// Renders the frame as a Graphviz `digraph`
    pub fn to_dot(&self) -> String {
        let mut lines = vec!["digraph heap {".to_string()];
        for (position, label) in &self.nodes {
            lines.push(format!("  {position} [label=\"{}\"];", escape(label)));
        }
        for (parent, child) in &self.edges {
            if self.highlighted.contains(&(*parent, *child)) {
                lines.push(format!("  {parent} -> {child} [color=green];"));
            } else {
                lines.push(format!("  {parent} -> {child};"));
            }
        }
        // A swap between non-adjacent positions (heapsort) has no tree edge.
        for (from, to) in &self.highlighted {
            if !self.edges.contains(&(*from, *to)) {
                lines.push(format!("  {from} -> {to} [color=green, style=dashed];"));
            }
        }
        lines.push("}\n".to_string());
        lines.join("\n")
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Observer that records every frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animation {
    frames: Vec<Frame>,
}

impl Animation {
    /// An empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded frames, oldest first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of recorded frames
    pub fn steps(&self) -> usize {
        self.frames.len()
    }

    /// Most recent frame
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Drops all recorded frames
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Renders every frame, oldest first
    pub fn to_dot(&self) -> Vec<String> {
        self.frames.iter().map(Frame::to_dot).collect()
    }

    fn current(&mut self) -> &mut Frame {
        if self.frames.is_empty() {
            self.frames.push(Frame::default());
        }
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
}

impl<T: fmt::Display> Observer<T> for Animation {
    fn on_event(&mut self, event: Event<'_, T>) {
        match event {
            Event::Step => self.frames.push(Frame::default()),
            Event::Relabel { position, value } => {
                self.current().nodes.insert(position, value.to_string());
            }
            Event::AddEdge { parent, child } => {
                self.current().edges.insert((parent, child));
            }
            Event::HighlightEdge { from, to } => {
                self.current().highlighted.push((from, to));
            }
            // Completion markers carry no drawing.
            Event::Op { .. } => {}
        }
    }
}
