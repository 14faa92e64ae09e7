// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Additional unit tests that cross file or module boundaries.

mod helpers;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::layout::VBox;
use crate::text::Selection;
use crate::widget::*;
use crate::*;
use harness::*;
use helpers::*;

fn textbox_at(measure: &TextMeasurer, rect: Rect) -> TextBox {
    TextBox::new(rect.width, measure).placed(rect)
}

/// Focusing B while A holds focus blurs A first.
#[test_log::test]
fn blur_before_focus() {
    let mut harness = Harness::new(400, 300);
    let recording = Recording::default();
    let measure = harness.measure.clone();
    let a = harness.add(textbox_at(&measure, Rect::new(0, 0, 100, 24)).record(&recording));
    let b = harness.add(textbox_at(&measure, Rect::new(0, 50, 100, 24)).record(&recording));

    harness.window.set_focus(Some(a));
    assert_eq!(recording.drain(), vec![Record::Focus(a)]);

    harness.window.set_focus(Some(b));
    assert_eq!(recording.drain(), vec![Record::Blur(a), Record::Focus(b)]);

    harness.window.set_focus(Some(b));
    assert!(recording.is_empty());

    harness.window.set_focus(None);
    assert_eq!(recording.drain(), vec![Record::Blur(b)]);
    assert_eq!(harness.window.focus(), None);

    harness.window.set_focus(None);
    assert!(recording.is_empty());
}

/// A press moves focus before any widget sees the press itself.
#[test_log::test]
fn press_focuses_before_dispatch() {
    let mut harness = Harness::new(400, 300);
    let recording = Recording::default();
    let measure = harness.measure.clone();
    let a = harness.add(textbox_at(&measure, Rect::new(0, 0, 100, 24)).record(&recording));
    let b = harness.add(textbox_at(&measure, Rect::new(0, 50, 100, 24)).record(&recording));
    harness.window.set_focus(Some(a));
    recording.clear();

    assert!(harness.event(Event::mouse_down(20, 60)));
    assert_eq!(recording.len(), 3);
    assert_eq!(
        recording.drain(),
        vec![
            Record::Blur(a),
            Record::Focus(b),
            Record::E(b, EventType::MouseDown)
        ]
    );
    assert_eq!(harness.window.focus(), Some(b));
}

#[test_log::test]
fn keys_only_reach_the_focused_widget() {
    let mut harness = Harness::new(400, 300);
    let recording = Recording::default();
    let measure = harness.measure.clone();
    let a = harness.add(textbox_at(&measure, Rect::new(0, 0, 100, 24)).record(&recording));
    let b = harness.add(textbox_at(&measure, Rect::new(0, 50, 100, 24)).record(&recording));

    // Nothing focused: dropped without a tree walk.
    assert!(!harness.event(Event::char_input('x')));
    assert!(recording.is_empty());

    harness.click(10, 10);
    recording.clear();
    harness.type_text("hi");
    assert_eq!(
        recording.drain(),
        vec![
            Record::E(a, EventType::CharInput),
            Record::E(a, EventType::CharInput)
        ]
    );

    let text = |harness: &Harness, id| {
        harness
            .window
            .widget::<Recorder<TextBox>>(id)
            .map(|r| r.inner().text().to_owned())
    };
    assert_eq!(text(&harness, a).as_deref(), Some("hi"));
    assert_eq!(text(&harness, b).as_deref(), Some(""));

    // The wheel is focus-routed too, even when the pointer is elsewhere.
    harness.event(Event::wheel(120));
    assert_eq!(recording.next(), Record::E(a, EventType::MouseWheel));
}

#[test]
fn press_on_background_focuses_root_or_nothing() {
    let mut harness = Harness::new(400, 300);
    let measure = harness.measure.clone();
    let a = harness.add(textbox_at(&measure, Rect::new(0, 0, 100, 24)));
    harness.click(10, 10);
    assert_eq!(harness.window.focus(), Some(a));

    harness.click(300, 200);
    assert_eq!(harness.window.focus(), Some(harness.window.root().id()));
    assert!(!harness
        .window
        .widget::<TextBox>(a)
        .map_or(true, |t| t.is_focused()));

    harness.click(10, 10);
    harness.click(-5, 10);
    assert_eq!(harness.window.focus(), None);
}

#[test]
fn nested_hit_test_finds_the_leaf() {
    let mut outer = Panel::new(Rect::new(0, 0, 300, 300));
    let mut inner = Panel::new(Rect::new(100, 100, 100, 100));
    let leaf = inner.add(ProgressBar::new(20, 20).placed(Rect::new(120, 120, 20, 20)));
    let inner_id = outer.add(inner);

    assert_eq!(outer.hit_test(125, 125), Some(leaf));
    assert_eq!(outer.hit_test(150, 150), Some(inner_id));
    assert_eq!(outer.hit_test(10, 10), Some(outer.id()));
    assert_eq!(outer.hit_test(300, 10), None);
}

#[test]
fn topmost_child_wins_hit_test_and_events() {
    let clicks = Rc::new(Cell::new((0, 0)));
    let (under, over) = (clicks.clone(), clicks.clone());
    let mut harness = Harness::new(200, 200);
    let measure = harness.measure.clone();
    harness.add(
        Button::new("under", &measure)
            .with_on_click(move || under.set((under.get().0 + 1, under.get().1))),
    );
    let top = harness.add(
        Button::new("over", &measure)
            .with_on_click(move || over.set((over.get().0, over.get().1 + 1))),
    );

    assert_eq!(harness.window.root().hit_test(5, 5), Some(top));
    harness.click(5, 5);
    assert_eq!(clicks.get(), (0, 1));
}

#[test]
fn invisible_children_are_skipped() {
    let mut harness = Harness::new(200, 200);
    let recording = Recording::default();
    let measure = harness.measure.clone();
    let below = harness.add(Button::new("below", &measure).record(&recording));
    let hidden = harness.add(Button::new("hidden", &measure).record(&recording));
    if let Some(w) = harness.window.root_mut().child_mut(hidden) {
        w.set_visible(false);
    }

    assert_eq!(harness.window.root().hit_test(5, 5), Some(below));
    harness.event(Event::mouse_move(5, 5));
    assert_eq!(recording.drain(), vec![Record::E(below, EventType::MouseMove)]);

    harness.paint();
    assert_eq!(recording.drain(), vec![Record::Paint(below)]);
}

#[test]
fn button_clicks_through_the_window() {
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let mut harness = Harness::new(200, 200);
    let measure = harness.measure.clone();
    let button = harness.add(
        Button::new("OK", &measure)
            .with_on_click(move || counter.set(counter.get() + 1))
            .placed(Rect::new(50, 50, 60, 30)),
    );

    harness.click(60, 60);
    assert_eq!(clicks.get(), 1);
    assert_eq!(harness.window.focus(), Some(button));

    harness.event(Event::mouse_down(60, 60));
    harness.event(Event::mouse_move(150, 150));
    harness.event(Event::mouse_up(150, 150));
    assert_eq!(clicks.get(), 1);
    let pressed = harness.window.widget::<Button>(button).map(|b| b.is_pressed());
    assert_eq!(pressed, Some(false));
}

#[test]
fn checkbox_toggles_on_press_through_the_window() {
    let seen = Rc::new(Cell::new(None));
    let sink = seen.clone();
    let mut harness = Harness::new(200, 200);
    let measure = harness.measure.clone();
    let id = harness.add(CheckBox::new("On", &measure).with_on_check(move |on| sink.set(Some(on))));

    harness.event(Event::mouse_down(4, 4));
    assert_eq!(seen.get(), Some(true));
    assert_eq!(harness.window.widget::<CheckBox>(id).map(|c| c.is_checked()), Some(true));
}

#[test]
fn editing_a_textbox_end_to_end() {
    let mut harness = Harness::new(400, 100);
    let measure = harness.measure.clone();
    let id = harness.add(TextBox::new(200, &measure).with_text("hello world"));

    harness.click(10 + 16, 10);
    harness.key(KeyCode::ArrowRight, KeyModifiers::shift());
    harness.key(KeyCode::ArrowRight, KeyModifiers::shift());
    harness.key(KeyCode::ArrowRight, KeyModifiers::shift());
    assert_eq!(
        harness.window.widget::<TextBox>(id).map(|t| t.selection()),
        Some(Selection::new(2, 5))
    );
    harness.key(KeyCode::Backspace, KeyModifiers::NONE);
    harness.type_text("y,");
    let text = harness.window.widget::<TextBox>(id).map(|t| t.text().to_owned());
    assert_eq!(text.as_deref(), Some("hey, world"));
}

#[test]
fn tick_blinks_the_focused_caret() {
    let mut harness = Harness::new(400, 100);
    let recording = Recording::default();
    let measure = harness.measure.clone();
    let id = harness.add(TextBox::new(200, &measure).record(&recording));

    harness.advance(Duration::from_millis(600));
    assert!(recording.is_empty());

    harness.click(10, 10);
    harness.paint();
    recording.clear();
    harness.advance(Duration::from_millis(100));
    assert!(!harness.paint_if_needed());
    harness.advance(Duration::from_millis(500));
    assert_eq!(recording.next(), Record::Tick(id));
    assert!(harness.paint_if_needed());
}

#[test]
fn resize_relayouts_the_root() {
    let mut harness = Harness::new(200, 100);
    harness.window.root_mut().set_layout(VBox::new(0));
    let bar = harness.add(ProgressBar::new(0, 10));
    assert_eq!(
        harness.window.root().child(bar).map(|w| w.bounds()),
        Some(Rect::new(0, 0, 200, 10))
    );

    assert!(harness.event(Event::resize(320, 240)));
    assert_eq!(harness.window.root().bounds(), Rect::new(0, 0, 320, 240));
    assert_eq!(
        harness.window.root().child(bar).map(|w| w.bounds()),
        Some(Rect::new(0, 0, 320, 10))
    );
    assert_eq!(harness.window.config().width, 320);

    let bogus = Event::new(EventType::Resize, Payload::None);
    assert!(!harness.event(bogus));
}

#[test]
fn close_is_recorded() {
    let mut harness = Harness::new(10, 10);
    assert!(!harness.window.is_closed());
    harness.event(Event::close());
    assert!(harness.window.is_closed());
}

#[test_log::test]
fn external_updates_run_on_the_ui_thread() {
    let mut harness = Harness::new(200, 200);
    let wakes = Arc::new(AtomicUsize::new(0));
    let counter = wakes.clone();
    harness.window.set_waker(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let bar = harness.add(ProgressBar::new(100, 10));
    let sink = harness.window.ext_event_sink();
    harness.paint();

    let worker = thread::spawn(move || {
        sink.submit(bar, |w| {
            if let Some(bar) = w.downcast_mut::<ProgressBar>() {
                bar.set_value(0.75);
            }
        })
        .unwrap();
        sink.submit(WidgetId::next(), |_| panic!("no such widget"))
            .unwrap();
    });
    worker.join().unwrap();
    assert_eq!(wakes.load(Ordering::SeqCst), 2);

    // Nothing changes until the UI thread processes the queue.
    assert!(!harness.window.needs_paint());
    assert!(harness.window.process_external());
    assert_eq!(harness.window.widget::<ProgressBar>(bar).map(|b| b.value()), Some(0.75));
    assert!(harness.window.needs_paint());
    assert!(!harness.window.process_external());
}

#[test]
fn external_repaint_request() {
    let mut harness = Harness::new(200, 200);
    let sink = harness.window.ext_event_sink();
    harness.paint();
    sink.request_repaint().unwrap();
    assert!(harness.window.process_external());
    assert!(harness.paint_if_needed());
    assert!(!harness.paint_if_needed());
}

#[test]
fn submitting_after_the_window_is_gone_fails() {
    let window = Window::new(WindowConfig::default());
    let sink = window.ext_event_sink();
    drop(window);
    assert_eq!(sink.request_repaint(), Err(ExtEventError));
    assert!(sink.submit(WidgetId::next(), |_| ()).is_err());
}

#[test]
fn default_config() {
    let config = WindowConfig::default();
    assert_eq!((config.width, config.height), (800, 600));
    assert!(config.resizable);
}
