use std::io::Write;

use serde::Serialize;

use scene::{Highlight, Session, StarPoint};

use crate::error::FormatError;

pub const FRAME_VERSION: &str = "1.0";

/// Display-surface view of a session after a transaction.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameDump {
    pub version: String,
    pub base_radius: f64,
    pub texture_size: u32,
    pub lit_texels: usize,
    pub stars: Vec<StarRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StarRecord {
    pub index: usize,
    pub position: [f64; 3],
    pub offset: f64,
    pub polar: f64,
    pub azimuth: f64,
    pub pixel: [u32; 2],
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HighlightRecord {
    pub index: usize,
    pub position: [f64; 3],
    pub pixel: [u32; 2],
}

impl StarRecord {
    fn new(index: usize, star: &StarPoint) -> Self {
        Self {
            index,
            position: star.position().as_array(),
            offset: star.offset(),
            polar: star.polar(),
            azimuth: star.azimuth(),
            pixel: [star.pixel().x, star.pixel().y],
        }
    }
}

impl From<Highlight> for HighlightRecord {
    fn from(h: Highlight) -> Self {
        Self {
            index: h.index.index(),
            position: h.position.as_array(),
            pixel: [h.pixel.x, h.pixel.y],
        }
    }
}

impl FrameDump {
    pub fn capture(session: &Session) -> Self {
        Self {
            version: FRAME_VERSION.to_string(),
            base_radius: session.base_radius(),
            texture_size: session.texture().size(),
            lit_texels: session.texture().lit_texels(),
            stars: session
                .store()
                .all()
                .iter()
                .enumerate()
                .map(|(i, s)| StarRecord::new(i, s))
                .collect(),
            highlight: session.highlight().map(HighlightRecord::from),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), FormatError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
