// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Built-in colors and metrics.
//!
//! These are plain constants: there is no theme lookup, and each widget
//! reads the values it needs directly.

use crate::Color;

pub const WINDOW_BACKGROUND: Color = Color::WHITE;
pub const PANEL_BACKGROUND: Color = Color::WHITE;

pub const TEXT_COLOR: Color = Color::BLACK;
pub const PLACEHOLDER_COLOR: Color = Color::rgb24(0x88_88_88);
pub const TITLE_COLOR: Color = Color::rgb24(0x33_33_33);

pub const BUTTON_COLOR: Color = Color::rgb24(0xdd_dd_dd);
pub const BUTTON_HOVER_COLOR: Color = Color::rgb24(0xee_ee_ee);
pub const BUTTON_PRESSED_COLOR: Color = Color::rgb24(0xaa_aa_aa);

pub const CHECKBOX_COLOR: Color = Color::WHITE;
pub const CHECKBOX_HOVER_COLOR: Color = Color::rgb24(0xee_ee_ee);
pub const CHECKBOX_MARK_COLOR: Color = Color::BLACK;

pub const INPUT_BACKGROUND: Color = Color::WHITE;
pub const INPUT_INACTIVE_BACKGROUND: Color = Color::rgb24(0xf8_f8_f8);
pub const BORDER_COLOR: Color = Color::rgb24(0xaa_aa_aa);
pub const FOCUS_BORDER_COLOR: Color = Color::rgb24(0x00_78_d7);
pub const SELECTION_COLOR: Color = Color::rgb24(0xad_d8_e6);
pub const CURSOR_COLOR: Color = Color::BLACK;

pub const ACCENT_COLOR: Color = Color::rgb24(0x00_78_d7);
pub const TRACK_COLOR: Color = Color::rgb24(0xe0_e0_e0);

pub const CARD_BORDER_COLOR: Color = Color::rgb24(0xdd_dd_dd);
pub const SEPARATOR_COLOR: Color = Color::rgb24(0xee_ee_ee);

/// Width of the text caret.
pub const CURSOR_WIDTH: i32 = 2;
