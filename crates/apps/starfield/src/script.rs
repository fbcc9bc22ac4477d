use std::fmt;
use std::str::FromStr;

use foundation::math::Vec2;
use scene::{ClickEvent, ScreenProjector, ViewTag};

/// One scripted click, written `2d:X,Y` or `3d:X,Y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClickSpec {
    pub view: ViewTag,
    pub at: Vec2,
}

impl ClickSpec {
    pub fn to_event<'a>(&self, projector: &'a dyn ScreenProjector) -> ClickEvent<'a> {
        match self.view {
            ViewTag::View2D => ClickEvent::View2D { at: self.at },
            ViewTag::View3D => ClickEvent::View3D {
                at: self.at,
                projector,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickParseError {
    MissingView(String),
    UnknownView(String),
    BadCoordinates(String),
}

impl fmt::Display for ClickParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickParseError::MissingView(s) => {
                write!(f, "click `{s}` needs a view prefix, e.g. 2d:10,20")
            }
            ClickParseError::UnknownView(v) => write!(f, "unknown view `{v}` (expected 2d or 3d)"),
            ClickParseError::BadCoordinates(c) => write!(f, "bad click coordinates `{c}`"),
        }
    }
}

impl std::error::Error for ClickParseError {}

impl FromStr for ClickSpec {
    type Err = ClickParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (view, coords) = s
            .split_once(':')
            .ok_or_else(|| ClickParseError::MissingView(s.to_string()))?;
        let view = match view.trim().to_ascii_lowercase().as_str() {
            "2d" => ViewTag::View2D,
            "3d" => ViewTag::View3D,
            other => return Err(ClickParseError::UnknownView(other.to_string())),
        };
        let bad = || ClickParseError::BadCoordinates(coords.to_string());
        let (x, y) = coords.split_once(',').ok_or_else(bad)?;
        let x: f64 = x.trim().parse().map_err(|_| bad())?;
        let y: f64 = y.trim().parse().map_err(|_| bad())?;
        Ok(Self {
            view,
            at: Vec2::new(x, y),
        })
    }
}
