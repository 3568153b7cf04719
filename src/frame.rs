use crate::camera::ViewAngles;

/// Tightly packed 8-bit RGB image
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Expected buffer length for the given size
    pub fn buffer_size(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Number of pixels that differ from the given colour
    pub fn count_not(&self, rgb: [u8; 3]) -> usize {
        self.pixels.chunks_exact(3).filter(|px| *px != rgb).count()
    }
}

/// Result of one interaction cycle
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// Cycle number within the session, starting at 1
    pub number: u64,
    pub angles: ViewAngles,
    pub object_count: usize,
    pub image: RgbImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size() {
        assert_eq!(RgbImage::buffer_size(4, 3), 36);
    }

    #[test]
    fn test_pixel_lookup() {
        let mut pixels = vec![0u8; RgbImage::buffer_size(2, 2)];
        pixels[9..12].copy_from_slice(&[10, 20, 30]);
        let image = RgbImage::new(2, 2, pixels);
        assert_eq!(image.pixel(1, 1), Some([10, 20, 30]));
        assert_eq!(image.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn test_count_not() {
        let image = RgbImage::new(2, 1, vec![255, 255, 255, 1, 2, 3]);
        assert_eq!(image.count_not([255, 255, 255]), 1);
    }
}
