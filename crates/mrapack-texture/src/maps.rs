//! 8-bit texture buffers.
//!
//! Both buffers store pixels row-major with no padding between rows.

/// Grayscale texture buffer (single channel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<u8>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: u8) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Wrap existing pixel data. Returns `None` if the length does not match.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Raw 8-bit samples.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// RGB texture buffer, one byte per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGB, row-major).
    pub data: Vec<[u8; 3]>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: [u8; 3]) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = rgb;
    }

    /// Convert to interleaved 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for rgb in &self.data {
            bytes.extend_from_slice(rgb);
        }
        bytes
    }

    /// Extract one channel (0 = R, 1 = G, 2 = B) as a grayscale buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    pub fn channel(&self, index: usize) -> GrayscaleBuffer {
        assert!(index < 3, "channel index {} out of range", index);
        GrayscaleBuffer {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|p| p[index]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_get_set() {
        let mut buffer = GrayscaleBuffer::new(4, 3, 0);
        buffer.set(3, 2, 200);
        assert_eq!(buffer.get(3, 2), 200);
        assert_eq!(buffer.get(0, 0), 0);
        assert_eq!(buffer.data[2 * 4 + 3], 200);
    }

    #[test]
    fn test_grayscale_from_raw_length_check() {
        assert!(GrayscaleBuffer::from_raw(2, 2, vec![0; 4]).is_some());
        assert!(GrayscaleBuffer::from_raw(2, 2, vec![0; 5]).is_none());
    }

    #[test]
    fn test_texture_rgb8_layout() {
        let mut buffer = TextureBuffer::new(2, 1, [0, 0, 0]);
        buffer.set(1, 0, [1, 2, 3]);
        assert_eq!(buffer.to_rgb8(), vec![0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_texture_channel_extraction() {
        let buffer = TextureBuffer::new(3, 3, [10, 20, 30]);
        assert_eq!(buffer.channel(0), GrayscaleBuffer::new(3, 3, 10));
        assert_eq!(buffer.channel(1), GrayscaleBuffer::new(3, 3, 20));
        assert_eq!(buffer.channel(2), GrayscaleBuffer::new(3, 3, 30));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_texture_channel_out_of_range() {
        TextureBuffer::new(1, 1, [0, 0, 0]).channel(3);
    }
}
