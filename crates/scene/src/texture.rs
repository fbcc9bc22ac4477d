use foundation::math::Pixel;

/// Square grid of star intensities in `[0, 1]`, row-major with row 0 at the
/// north pole.
///
/// Writes keep the brighter value, so texels never decrease.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureBuffer {
    size: u32,
    texels: Vec<f32>,
}

impl TextureBuffer {
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;
        Self {
            size,
            texels: vec![0.0; len],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    fn offset_of(&self, pixel: Pixel) -> Option<usize> {
        (pixel.x < self.size && pixel.y < self.size)
            .then(|| pixel.y as usize * self.size as usize + pixel.x as usize)
    }

    pub fn get(&self, pixel: Pixel) -> Option<f32> {
        self.offset_of(pixel).map(|i| self.texels[i])
    }

    /// `texel = max(texel, intensity)`.
    ///
    /// Returns `true` if the stored value increased. Out-of-grid pixels and NaN
    /// intensities are ignored; other values are clamped into `[0, 1]`.
    pub fn write(&mut self, pixel: Pixel, intensity: f32) -> bool {
        if intensity.is_nan() {
            return false;
        }
        let Some(i) = self.offset_of(pixel) else {
            return false;
        };
        let value = intensity.clamp(0.0, 1.0);
        let texel = &mut self.texels[i];
        if value > *texel {
            *texel = value;
            true
        } else {
            false
        }
    }

    /// Read-only row-major view of the whole grid.
    pub fn snapshot(&self) -> &[f32] {
        &self.texels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.texels.chunks_exact(self.size.max(1) as usize)
    }

    pub fn lit_texels(&self) -> usize {
        self.texels.iter().filter(|v| **v > 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::TextureBuffer;
    use foundation::math::Pixel;

    #[test]
    fn starts_dark() {
        let tex = TextureBuffer::new(4);
        assert_eq!(tex.snapshot().len(), 16);
        assert_eq!(tex.lit_texels(), 0);
        assert_eq!(tex.rows().count(), 4);
    }

    #[test]
    fn keeps_the_brighter_value() {
        let p = Pixel::new(1, 2);
        let mut tex = TextureBuffer::new(4);
        assert!(tex.write(p, 0.3));
        assert!(tex.write(p, 0.8));
        assert!(!tex.write(p, 0.5));
        assert_eq!(tex.get(p), Some(0.8));
    }

    #[test]
    fn write_order_does_not_matter() {
        let p = Pixel::new(3, 0);
        let mut ab = TextureBuffer::new(4);
        ab.write(p, 0.25);
        ab.write(p, 0.75);
        let mut ba = TextureBuffer::new(4);
        ba.write(p, 0.75);
        ba.write(p, 0.25);
        assert_eq!(ab, ba);
        assert_eq!(ab.get(p), Some(0.75));
    }

    #[test]
    fn row_major_layout() {
        let mut tex = TextureBuffer::new(3);
        tex.write(Pixel::new(2, 1), 1.0);
        assert_eq!(tex.snapshot()[5], 1.0);
        let row1: Vec<f32> = tex.rows().nth(1).unwrap().to_vec();
        assert_eq!(row1, vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn rejects_out_of_grid_and_nan() {
        let mut tex = TextureBuffer::new(2);
        assert!(!tex.write(Pixel::new(2, 0), 1.0));
        assert!(!tex.write(Pixel::new(0, 0), f32::NAN));
        assert!(tex.write(Pixel::new(0, 0), 7.0));
        assert_eq!(tex.get(Pixel::new(0, 0)), Some(1.0));
        assert_eq!(tex.get(Pixel::new(0, 5)), None);
    }
}
