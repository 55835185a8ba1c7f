//! Pixel data, opacity mask, and PNG output operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::{Canvas2dError, Canvas2dResult};

impl Canvas2dContext {
    // --- Opacity masks ---

    /// Paint the current fill color through a single-channel opacity mask.
    ///
    /// `mask` holds `width * height` coverage bytes in row-major order. Its
    /// top-left corner lands at device pixel (`dx`, `dy`); the current
    /// transform is not applied. Mask pixels outside the canvas are dropped.
    pub fn fill_alpha_mask(
        &mut self,
        mask: &[u8],
        width: u32,
        height: u32,
        dx: i32,
        dy: i32,
    ) -> Canvas2dResult<()> {
        log::debug!(target: "canvas", "fillAlphaMask {}x{} at {} {}", width, height, dx, dy);
        let expected = width as usize * height as usize;
        if mask.len() != expected {
            return Err(Canvas2dError::MaskSizeMismatch {
                len: mask.len(),
                width,
                height,
            });
        }
        if expected == 0 {
            return Ok(());
        }

        // Intersection of the mask rectangle with the canvas
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = dx.saturating_add(width as i32).min(self.width as i32);
        let y1 = dy.saturating_add(height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        let Some(mut device_mask) = tiny_skia::Mask::new(self.width, self.height) else {
            return Ok(());
        };
        let canvas_width = self.width as usize;
        let mask_data = device_mask.data_mut();
        for y in y0..y1 {
            let src_row = (y - dy) as usize * width as usize;
            let dst_row = y as usize * canvas_width;
            let src_start = src_row + (x0 - dx) as usize;
            let src_end = src_row + (x1 - dx) as usize;
            let dst_start = dst_row + x0 as usize;
            let dst_end = dst_row + x1 as usize;
            mask_data[dst_start..dst_end].copy_from_slice(&mask[src_start..src_end]);
        }

        let Some(rect) =
            tiny_skia::Rect::from_xywh(x0 as f32, y0 as f32, (x1 - x0) as f32, (y1 - y0) as f32)
        else {
            return Ok(());
        };
        let _ = self.with_fill_paint(|ctx, paint| {
            ctx.pixmap.fill_rect(
                rect,
                paint,
                tiny_skia::Transform::identity(),
                Some(&device_mask),
            );
        });
        Ok(())
    }

    // --- Image data ---

    /// Premultiplied RGBA8 pixel buffer, row-major.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Mutable premultiplied RGBA8 pixel buffer for direct pixel writes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_mut()
    }

    /// Get image data for a region of the canvas as straight-alpha RGBA.
    ///
    /// Pixels outside the canvas read as transparent black.
    pub fn get_image_data(&self, x: i32, y: i32, width: u32, height: u32) -> Vec<u8> {
        let mut data = vec![0u8; (width * height * 4) as usize];

        for dy in 0..height {
            for dx in 0..width {
                let src_x = x + dx as i32;
                let src_y = y + dy as i32;

                let dst_idx = ((dy * width + dx) * 4) as usize;

                if src_x >= 0
                    && src_x < self.width as i32
                    && src_y >= 0
                    && src_y < self.height as i32
                {
                    let src_idx = (src_y as u32 * self.width + src_x as u32) as usize * 4;
                    let pixel = &self.pixmap.data()[src_idx..src_idx + 4];

                    // Convert from premultiplied alpha to straight alpha
                    let a = pixel[3];
                    if a == 0 {
                        data[dst_idx..dst_idx + 4].copy_from_slice(&[0, 0, 0, 0]);
                    } else if a == 255 {
                        data[dst_idx..dst_idx + 4].copy_from_slice(pixel);
                    } else {
                        let alpha_f = a as f32 / 255.0;
                        data[dst_idx] = (pixel[0] as f32 / alpha_f).min(255.0) as u8;
                        data[dst_idx + 1] = (pixel[1] as f32 / alpha_f).min(255.0) as u8;
                        data[dst_idx + 2] = (pixel[2] as f32 / alpha_f).min(255.0) as u8;
                        data[dst_idx + 3] = a;
                    }
                }
            }
        }

        data
    }

    /// Export the canvas as PNG data.
    ///
    /// # Arguments
    /// * `ppi` - Optional pixels per inch for PNG metadata. Defaults to 72 if not specified.
    pub fn to_png(&self, ppi: Option<f32>) -> Canvas2dResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Set pixel density metadata (pixels per meter)
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data(0, 0, self.width, self.height);
            writer.write_image_data(&data)?;
        }
        Ok(buf)
    }
}
