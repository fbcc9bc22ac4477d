//! Greyscale image export of the star texture.
//!
//! Binary PGM (`P5`), 8 bits per sample, row 0 first so the north pole is at
//! the top, matching the 2D view.

use std::io::Write;

use scene::TextureBuffer;

use crate::error::FormatError;

const MAX_GREY: u8 = 255;

fn to_grey(intensity: f32) -> u8 {
    (intensity.clamp(0.0, 1.0) * MAX_GREY as f32).round() as u8
}

pub fn encode_pgm(texture: &TextureBuffer) -> Vec<u8> {
    let size = texture.size();
    let header = format!("P5\n{size} {size}\n{MAX_GREY}\n");
    let mut out = Vec::with_capacity(header.len() + texture.snapshot().len());
    out.extend_from_slice(header.as_bytes());
    for row in texture.rows() {
        out.extend(row.iter().copied().map(to_grey));
    }
    out
}

pub fn write_pgm<W: Write>(texture: &TextureBuffer, mut writer: W) -> Result<(), FormatError> {
    writer.write_all(&encode_pgm(texture))?;
    writer.flush()?;
    Ok(())
}
