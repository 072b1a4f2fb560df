//! Inbound events from the page, queued until the next frame.

use crate::viewport::Viewport;
use glam::Vec2;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
    /// Dataset tab selected; the payload is the profile key.
    SelectProfile(String),
    /// Surface resized; carries the freshly measured viewport.
    Resize(Viewport),
    PointerDown(Vec2),
    PointerMove(Vec2),
    /// Release, cancel and leave all end a drag.
    PointerUp,
}

/// Shared FIFO the DOM listeners push into and the frame loop drains.
///
/// Cloning gives another handle to the same queue.
#[derive(Clone, Debug, Default)]
pub struct SignalQueue {
    inner: Rc<RefCell<VecDeque<Signal>>>,
}

impl SignalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, signal: Signal) {
        self.inner.borrow_mut().push_back(signal);
    }

    /// Take everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<Signal> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
