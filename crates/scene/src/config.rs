use std::fmt;

use foundation::math::EquirectGrid;
use rand::Rng;

pub const DEFAULT_BASE_RADIUS: f64 = 10.0;
pub const DEFAULT_OFFSET_LOWER: f64 = 0.0;
pub const DEFAULT_OFFSET_UPPER: f64 = 5.0;
pub const DEFAULT_INITIAL_STARS: usize = 5;
pub const DEFAULT_TEXTURE_SIZE: u32 = 512;
pub const DEFAULT_SNAP_TOLERANCE: f64 = 8.0;
/// Largest accepted texture side; the buffer holds `size²` texels.
pub const MAX_TEXTURE_SIZE: u32 = 16_384;

/// Closed interval of radial offsets added to the base radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OffsetRange {
    pub lower: f64,
    pub upper: f64,
}

impl Default for OffsetRange {
    fn default() -> Self {
        Self::new(DEFAULT_OFFSET_LOWER, DEFAULT_OFFSET_UPPER)
    }
}

impl OffsetRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Uniform draw from `[lower, upper)`; a collapsed range yields `lower`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.upper > self.lower {
            rng.gen_range(self.lower..self.upper)
        } else {
            self.lower
        }
    }

    /// Texture intensity for an offset: `offset / upper`, clamped to `[0, 1]`.
    pub fn intensity(&self, offset: f64) -> f32 {
        if self.upper <= 0.0 {
            return 0.0;
        }
        (offset / self.upper).clamp(0.0, 1.0) as f32
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.lower && offset <= self.upper
    }
}

/// Session configuration, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub base_radius: f64,
    pub offset_range: OffsetRange,
    pub initial_stars: usize,
    pub texture_size: u32,
    /// Snap radius in texels (2D view) or screen units (3D view).
    pub snap_tolerance: f64,
    /// Whether an unmatched 3D-view click creates a star.
    pub allow_insert_from_view3d: bool,
    /// Fixed RNG seed for reproducible sessions; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            base_radius: DEFAULT_BASE_RADIUS,
            offset_range: OffsetRange::default(),
            initial_stars: DEFAULT_INITIAL_STARS,
            texture_size: DEFAULT_TEXTURE_SIZE,
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
            allow_insert_from_view3d: false,
            seed: None,
        }
    }
}

impl StarfieldConfig {
    /// Checks every geometric constraint and returns the texture grid.
    pub fn validate(&self) -> Result<EquirectGrid, ConfigError> {
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 {
            return Err(ConfigError::BaseRadius(self.base_radius));
        }

        let OffsetRange { lower, upper } = self.offset_range;
        if !lower.is_finite() || !upper.is_finite() || lower < 0.0 || lower > upper {
            return Err(ConfigError::OffsetRange { lower, upper });
        }

        if !self.snap_tolerance.is_finite() || self.snap_tolerance < 0.0 {
            return Err(ConfigError::SnapTolerance(self.snap_tolerance));
        }

        if self.texture_size > MAX_TEXTURE_SIZE {
            return Err(ConfigError::TextureSize(self.texture_size));
        }
        EquirectGrid::new(self.texture_size).ok_or(ConfigError::TextureSize(self.texture_size))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    BaseRadius(f64),
    OffsetRange { lower: f64, upper: f64 },
    TextureSize(u32),
    SnapTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BaseRadius(r) => {
                write!(f, "invalid configuration: base radius must be > 0, got {r}")
            }
            ConfigError::OffsetRange { lower, upper } => write!(
                f,
                "invalid configuration: offset range needs 0 <= lower <= upper, \
                 got [{lower}, {upper}]"
            ),
            ConfigError::TextureSize(size) => write!(
                f,
                "invalid configuration: texture size must be in 2..={MAX_TEXTURE_SIZE}, \
                 got {size}"
            ),
            ConfigError::SnapTolerance(t) => {
                write!(f, "invalid configuration: snap tolerance must be >= 0, got {t}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
