// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! The per-window dispatch context.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace};

use crate::ext_event::{ExtEventHost, ExtEventSink, ExtMessage};
use crate::widget::{Panel, Widget};
use crate::{theme, Canvas, Event, EventType, Payload, Rect, WidgetId};

/// Settings for a new [`Window`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Requested position. The host may pick its own if both are zero.
    pub x: i32,
    pub y: i32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: String::from("larch"),
            width: 800,
            height: 600,
            x: 0,
            y: 0,
            resizable: true,
        }
    }
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: i32, height: i32) -> WindowConfig {
        WindowConfig {
            title: title.into(),
            width,
            height,
            ..WindowConfig::default()
        }
    }
}

/// A widget tree together with its focus state.
///
/// The host owns the native window. It feeds each translated input event
/// to [`dispatch`], calls [`tick`] periodically, and calls [`paint`]
/// whenever [`needs_paint`] returns `true`.
///
/// Pointer presses move focus to the widget under the pointer before any
/// widget sees the press. Keyboard, character and wheel events go only to
/// the focused widget. Everything else is offered to the tree from the
/// root down, topmost child first.
///
/// [`dispatch`]: Window::dispatch
/// [`tick`]: Window::tick
/// [`paint`]: Window::paint
/// [`needs_paint`]: Window::needs_paint
pub struct Window {
    config: WindowConfig,
    root: Panel,
    focus: Option<WidgetId>,
    ext_host: ExtEventHost,
    external_repaint: bool,
    closed: bool,
}

impl Window {
    pub fn new(config: WindowConfig) -> Window {
        let root = Panel::new(Rect::new(0, 0, config.width, config.height))
            .with_background(theme::WINDOW_BACKGROUND);
        Window {
            config,
            root,
            focus: None,
            ext_host: ExtEventHost::new(),
            external_repaint: false,
            closed: false,
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn root(&self) -> &Panel {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Panel {
        &mut self.root
    }

    /// Add a widget to the root panel.
    pub fn add(&mut self, widget: impl Widget + 'static) -> WidgetId {
        self.root.add(widget)
    }

    /// Look up a widget in the tree by id and type.
    pub fn widget<W: Widget + 'static>(&self, id: WidgetId) -> Option<&W> {
        self.root.find(id)?.downcast_ref()
    }

    pub fn widget_mut<W: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.root.find_mut(id)?.downcast_mut()
    }

    /// Route an event through the tree. Returns `true` if a widget
    /// consumed it.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        trace!("dispatch {:?}", event.kind);
        match event.kind {
            EventType::Resize => match event.payload {
                Payload::Size(size) => {
                    self.resize(size.width, size.height);
                    true
                }
                _ => false,
            },
            EventType::Close => {
                debug!("window {:?} closed", self.config.title);
                self.closed = true;
                true
            }
            EventType::Paint => {
                self.root.request_repaint();
                true
            }
            _ if event.is_focus_routed() => self.dispatch_to_focus(event),
            EventType::MouseDown => {
                if let Some(mouse) = event.mouse() {
                    let target = self.root.hit_test(mouse.x, mouse.y);
                    self.set_focus(target);
                }
                self.root.event(event)
            }
            _ => self.root.event(event),
        }
    }

    fn dispatch_to_focus(&mut self, event: &Event) -> bool {
        let id = match self.focus {
            Some(id) => id,
            None => {
                trace!("no focus, dropping {:?}", event.kind);
                return false;
            }
        };
        match self.root.find_mut(id) {
            Some(widget) => widget.event(event),
            None => {
                trace!("focused {:?} is not in the tree, dropping {:?}", id, event.kind);
                false
            }
        }
    }

    /// The currently focused widget.
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Move focus to `target`, or clear it with `None`.
    ///
    /// The previous holder is blurred before the new one is focused.
    /// Setting the focus it already has does nothing.
    pub fn set_focus(&mut self, target: Option<WidgetId>) {
        if self.focus == target {
            return;
        }
        debug!("focus {:?} -> {:?}", self.focus, target);
        if let Some(old) = self.focus.take() {
            if let Some(widget) = self.root.find_mut(old) {
                widget.on_blur();
            }
        }
        self.focus = target;
        if let Some(new) = target {
            if let Some(widget) = self.root.find_mut(new) {
                widget.on_focus();
            }
        }
    }

    /// Resize the root panel, which re-runs its layout.
    pub fn resize(&mut self, width: i32, height: i32) {
        debug!("resize to {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
        self.root.set_bounds(Rect::new(0, 0, width, height));
    }

    /// Forward the host's periodic tick to the focused widget.
    pub fn tick(&mut self, now: Duration) {
        if let Some(id) = self.focus {
            if let Some(widget) = self.root.find_mut(id) {
                widget.tick(now);
            }
        }
    }

    /// Whether anything has changed since the last [`paint`](Window::paint).
    pub fn needs_paint(&self) -> bool {
        self.external_repaint || self.root.needs_repaint()
    }

    /// Paint the whole tree. Afterwards no repaint request is outstanding.
    pub fn paint(&mut self, canvas: &mut dyn Canvas) {
        canvas.clear(self.root.background());
        if self.root.is_visible() {
            self.root.render(canvas);
        } else {
            self.root.discard_repaint();
        }
        self.external_repaint = false;
    }

    /// A handle other threads can use to send work to this window.
    pub fn ext_event_sink(&self) -> ExtEventSink {
        self.ext_host.make_sink()
    }

    /// Install a function that sinks call after queueing work, so the host
    /// can wake its loop. Only affects sinks created afterwards.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.ext_host.set_waker(Some(Arc::new(waker)));
    }

    /// Run all work queued through [`ExtEventSink`]s. Returns `true` if
    /// anything was applied.
    pub fn process_external(&mut self) -> bool {
        let mut applied = false;
        for message in self.ext_host.drain() {
            match message {
                ExtMessage::Update(id, update) => match self.root.find_mut(id) {
                    Some(widget) => {
                        update(widget);
                        widget.request_repaint();
                        applied = true;
                    }
                    None => debug!("dropping external update for missing {:?}", id),
                },
                ExtMessage::Repaint => {
                    self.external_repaint = true;
                    applied = true;
                }
            }
        }
        applied
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
