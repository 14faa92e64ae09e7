// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! A small retained-mode UI toolkit.
//!
//! Larch keeps a tree of widgets, arranges them with pluggable layouts,
//! routes input through hit-testing and focus, and paints through a
//! [`Canvas`] supplied by the host. The host owns the native window and the
//! message loop; it translates input into [`Event`]s for a [`Window`] and
//! paints when [`Window::needs_paint`] says so.
//!
//! ```
//! use larch::widget::{Button, Label};
//! use larch::layout::VBox;
//! use larch::{FixedMetrics, TextMeasurer, Window, WindowConfig};
//!
//! let measure = TextMeasurer::new(FixedMetrics::default());
//! let mut window = Window::new(WindowConfig::new("hello", 320, 240));
//! window.root_mut().set_layout(VBox::new(8));
//! window.add(Label::new("Hello, world", &measure));
//! window.add(Button::new("Quit", &measure).with_on_click(|| println!("bye")));
//! assert!(window.needs_paint());
//! ```

pub mod layout;
pub mod text;
pub mod theme;
pub mod widget;

mod canvas;
mod color;
mod event;
mod ext_event;
mod geometry;
mod image;
mod keycodes;
mod widget_id;
mod window;

#[cfg(test)]
mod tests;

pub use canvas::{Canvas, FixedMetrics, Font, TextMeasure, TextMeasurer};
pub use color::Color;
pub use event::{Event, EventType, KeyEvent, KeyModifiers, MouseButton, MouseEvent, Payload};
pub use ext_event::{ExtEventError, ExtEventSink, ExtUpdate, Waker};
pub use geometry::{Axis, Point, Rect, Size};
pub use image::{ImageBuf, ImageError};
pub use keycodes::KeyCode;
pub use widget::{BaseState, Widget};
pub use widget_id::WidgetId;
pub use window::{Window, WindowConfig};

/// Send `log` output to stderr.
///
/// Call this once, early. Does nothing if a logger is already installed.
#[cfg(feature = "default-logger")]
pub fn log_to_console() {
    simple_logger::SimpleLogger::new().init().ok();
}
