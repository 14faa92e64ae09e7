// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Helper types for test writing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::*;

/// A widget that records each time one of its methods is called.
///
/// Several recorders can share one [`Recording`], which then holds their
/// calls in the order they happened.
pub struct Recorder<W> {
    recording: Recording,
    inner: W,
}

/// A recording of widget method calls.
#[derive(Debug, Clone, Default)]
pub struct Recording(Rc<RefCell<VecDeque<Record>>>);

/// A recording of a method call on a widget, tagged with the widget's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    E(WidgetId, EventType),
    Focus(WidgetId),
    Blur(WidgetId),
    Tick(WidgetId),
    Paint(WidgetId),
    // instead of always returning an Option<Record>, we have a none variant;
    // this makes the tests easier to read.
    None,
}

/// like `Widget` but just for this one thing
pub trait TestWidgetExt: Widget + Sized + 'static {
    fn record(self, recording: &Recording) -> Recorder<Self> {
        Recorder {
            inner: self,
            recording: recording.clone(),
        }
    }

    /// Move the widget to `rect` before it is added anywhere.
    fn placed(mut self, rect: Rect) -> Self {
        self.set_bounds(rect);
        self
    }
}

impl<W: Widget + 'static> TestWidgetExt for W {}

impl Recording {
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear()
    }

    /// Returns the next event in the recording, if one exists.
    ///
    /// This consumes the event.
    pub fn next(&self) -> Record {
        self.0.borrow_mut().pop_front().unwrap_or(Record::None)
    }

    /// Everything recorded so far, consumed.
    pub fn drain(&self) -> Vec<Record> {
        self.0.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: Record) {
        self.0.borrow_mut().push_back(event)
    }
}

impl<W: Widget> Recorder<W> {
    pub fn inner(&self) -> &W {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }
}

impl<W: Widget + 'static> Widget for Recorder<W> {
    fn base(&self) -> &BaseState {
        self.inner.base()
    }

    fn base_mut(&mut self) -> &mut BaseState {
        self.inner.base_mut()
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        self.recording.push(Record::Paint(self.inner.id()));
        self.inner.paint(canvas)
    }

    fn event(&mut self, event: &Event) -> bool {
        self.recording.push(Record::E(self.inner.id(), event.kind));
        self.inner.event(event)
    }

    fn preferred_size(&self) -> Size {
        self.inner.preferred_size()
    }

    fn on_focus(&mut self) {
        self.recording.push(Record::Focus(self.inner.id()));
        self.inner.on_focus()
    }

    fn on_blur(&mut self) {
        self.recording.push(Record::Blur(self.inner.id()));
        self.inner.on_blur()
    }

    fn tick(&mut self, now: Duration) {
        self.recording.push(Record::Tick(self.inner.id()));
        self.inner.tick(now)
    }

    fn set_bounds(&mut self, rect: Rect) {
        self.inner.set_bounds(rect)
    }

    fn hit_test(&self, x: i32, y: i32) -> Option<WidgetId> {
        self.inner.hit_test(x, y)
    }

    fn find_descendant(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.inner.find_descendant(id)
    }

    fn find_descendant_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        self.inner.find_descendant_mut(id)
    }

    fn needs_repaint(&self) -> bool {
        self.inner.needs_repaint()
    }

    fn discard_repaint(&mut self) {
        self.inner.discard_repaint()
    }
}
