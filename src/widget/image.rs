// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! An image widget.

use crate::image::ImageBuf;
use crate::widget::Widget;
use crate::{BaseState, Canvas, Rect, Size};

/// Draws an [`ImageBuf`] at its natural size.
///
/// The image is not scaled; anything outside the widget's bounds is cut off.
pub struct Image {
    base: BaseState,
    image: ImageBuf,
}

impl Image {
    /// Create an image widget sized to the image.
    pub fn new(image: ImageBuf) -> Image {
        Image {
            base: BaseState::new(Rect::from_origin_size((0, 0), image.size())),
            image,
        }
    }

    pub fn image(&self) -> &ImageBuf {
        &self.image
    }

    /// Replace the image. The widget keeps its current bounds.
    pub fn set_image(&mut self, image: ImageBuf) {
        self.image = image;
        self.base.repaint_requested = true;
    }
}

impl Widget for Image {
    fn base(&self) -> &BaseState {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseState {
        &mut self.base
    }

    fn preferred_size(&self) -> Size {
        self.image.size()
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) {
        let r = self.base.bounds;
        let size = self.image.size();
        let width = r.width.min(size.width);
        let height = r.height.min(size.height);
        for y in 0..height {
            for x in 0..width {
                if let Some(color) = self.image.pixel(x as usize, y as usize) {
                    canvas.set_pixel(r.x + x, r.y + y, color);
                }
            }
        }
    }
}
