// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Packed 32-bit colors.

use std::fmt;

/// A color packed as `0xAARRGGBB`, alpha in the most significant byte.
///
/// Backends translate this to their native channel order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color::argb32(0x00_00_00_00);
    pub const BLACK: Color = Color::rgb24(0x00_00_00);
    pub const WHITE: Color = Color::rgb24(0xff_ff_ff);

    /// Create a color from a packed `0xAARRGGBB` value.
    pub const fn argb32(argb: u32) -> Color {
        Color(argb)
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    pub const fn rgb24(rgb: u32) -> Color {
        Color(0xff_00_00_00 | (rgb & 0x00_ff_ff_ff))
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::rgba8(r, g, b, 0xff)
    }

    /// The packed `0xAARRGGBB` value.
    pub const fn as_argb32(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Color {
        Color(argb)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Color(#{:08x})", self.0)
    }
}
