// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Simple handle for submitting work to the UI thread from elsewhere.

use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use static_assertions as sa;

use crate::widget::Widget;
use crate::WidgetId;

/// A deferred mutation of one widget.
pub type ExtUpdate = Box<dyn FnOnce(&mut dyn Widget) + Send>;

/// Called by a sink after it queues something, so the host can schedule
/// [`Window::process_external`](crate::Window::process_external).
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub(crate) enum ExtMessage {
    Update(WidgetId, ExtUpdate),
    Repaint,
}

sa::assert_impl_all!(ExtMessage: Send);

/// A thing that can move into other threads and be used to send work back
/// to a window.
///
/// Widgets themselves never leave the UI thread. Instead a sink carries a
/// closure over, and the window runs it against the target widget the next
/// time it processes external events.
#[derive(Clone)]
pub struct ExtEventSink {
    tx: Sender<ExtMessage>,
    waker: Option<Waker>,
}

sa::assert_impl_all!(ExtEventSink: Send);

/// The window's end of the channel.
pub(crate) struct ExtEventHost {
    rx: Receiver<ExtMessage>,
    /// Kept so we can hand out sinks.
    tx: Sender<ExtMessage>,
    waker: Option<Waker>,
}

/// An error that occurs if external work cannot be submitted.
/// This means the window has gone away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtEventError;

impl ExtEventHost {
    pub(crate) fn new() -> Self {
        let (tx, rx) = channel();
        ExtEventHost {
            rx,
            tx,
            waker: None,
        }
    }

    /// Set the waker given to sinks created from now on.
    pub(crate) fn set_waker(&mut self, waker: Option<Waker>) {
        self.waker = waker;
    }

    pub(crate) fn make_sink(&self) -> ExtEventSink {
        ExtEventSink {
            tx: self.tx.clone(),
            waker: self.waker.clone(),
        }
    }

    /// Everything queued so far, without blocking.
    pub(crate) fn drain(&self) -> impl Iterator<Item = ExtMessage> + '_ {
        self.rx.try_iter()
    }
}

impl ExtEventSink {
    /// Queue `update` to run against the widget `target` on the UI thread.
    ///
    /// The target is repainted after the update runs. If the target is no
    /// longer in the tree by then, the update is dropped.
    pub fn submit(
        &self,
        target: WidgetId,
        update: impl FnOnce(&mut dyn Widget) + Send + 'static,
    ) -> Result<(), ExtEventError> {
        self.send(ExtMessage::Update(target, Box::new(update)))
    }

    /// Ask for a repaint. Safe to call from any thread.
    pub fn request_repaint(&self) -> Result<(), ExtEventError> {
        self.send(ExtMessage::Repaint)
    }

    fn send(&self, message: ExtMessage) -> Result<(), ExtEventError> {
        self.tx.send(message).map_err(|_| ExtEventError)?;
        if let Some(waker) = &self.waker {
            waker();
        }
        Ok(())
    }
}

impl fmt::Debug for ExtEventSink {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ExtEventSink")
            .field("waker", &self.waker.is_some())
            .finish()
    }
}

impl fmt::Display for ExtEventError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Window missing for external event")
    }
}

impl std::error::Error for ExtEventError {}
