// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Decoded image data.
//!
//! Decoding is left to the host; this only holds the pixels.

use std::fmt;

use crate::{Color, Size};

/// An error constructing an [`ImageBuf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    /// The buffer does not hold `width * height` pixels.
    WrongLength { expected: usize, actual: usize },
    /// `width * height` overflows.
    TooLarge,
}

/// A rectangle of ARGB pixels, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBuf {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl ImageBuf {
    /// An empty image.
    pub fn empty() -> ImageBuf {
        ImageBuf {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Create an image from packed ARGB pixels.
    pub fn from_raw(
        pixels: impl Into<Vec<Color>>,
        width: usize,
        height: usize,
    ) -> Result<ImageBuf, ImageError> {
        let pixels = pixels.into();
        let expected = width.checked_mul(height).ok_or(ImageError::TooLarge)?;
        if pixels.len() != expected {
            return Err(ImageError::WrongLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(ImageBuf {
            pixels,
            width,
            height,
        })
    }

    /// Create an image from bytes in `R, G, B, A` order, as most decoders
    /// produce them.
    pub fn from_rgba8(bytes: &[u8], width: usize, height: usize) -> Result<ImageBuf, ImageError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ImageError::TooLarge)?;
        if bytes.len() != expected {
            return Err(ImageError::WrongLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Color::rgba8(px[0], px[1], px[2], px[3]))
            .collect::<Vec<_>>();
        ImageBuf::from_raw(pixels, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The size in pixels, saturating at `i32::MAX`.
    pub fn size(&self) -> Size {
        let clamp = |n: usize| i32::try_from(n).unwrap_or(i32::MAX);
        Size::new(clamp(self.width), clamp(self.height))
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}

impl Default for ImageBuf {
    fn default() -> Self {
        ImageBuf::empty()
    }
}

impl fmt::Debug for ImageBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImageBuf")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImageError::WrongLength { expected, actual } => write!(
                f,
                "image buffer has {} elements, expected {}",
                actual, expected
            ),
            ImageError::TooLarge => write!(f, "image dimensions overflow"),
        }
    }
}

impl std::error::Error for ImageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_is_packed_as_argb() {
        let image = ImageBuf::from_rgba8(&[0x11, 0x22, 0x33, 0x44, 1, 2, 3, 255], 2, 1).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Color::argb32(0x44_11_22_33)));
        assert_eq!(image.pixel(1, 0), Some(Color::argb32(0xff_01_02_03)));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.size(), Size::new(2, 1));
    }

    #[test]
    fn length_is_checked() {
        assert_eq!(
            ImageBuf::from_raw(vec![Color::BLACK; 5], 2, 3),
            Err(ImageError::WrongLength {
                expected: 6,
                actual: 5
            })
        );
        assert!(ImageBuf::from_rgba8(&[0; 7], 1, 2).is_err());
        assert_eq!(
            ImageBuf::from_raw(Vec::new(), usize::MAX, 2),
            Err(ImageError::TooLarge)
        );
    }
}
