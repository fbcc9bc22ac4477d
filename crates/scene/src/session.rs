use foundation::math::{EquirectGrid, Pixel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::{ConfigError, StarfieldConfig};
use crate::point::{PointIndex, StarPoint};
use crate::sampler::SphereSampler;
use crate::selection::{Highlight, Selection};
use crate::store::PointStore;
use crate::texture::TextureBuffer;

/// Everything a click transaction reads or changes.
///
/// Built once at startup and moved through each
/// [`InteractionController::handle_click`] call.
///
/// [`InteractionController::handle_click`]: crate::interaction::InteractionController::handle_click
#[derive(Debug, Clone)]
pub struct Session {
    sampler: SphereSampler,
    store: PointStore,
    texture: TextureBuffer,
    selection: Selection,
    rng: ChaCha8Rng,
}

impl Session {
    /// Validates `config` and populates the initial stars.
    ///
    /// Seeds from `config.seed` when present, otherwise from OS entropy.
    pub fn new(config: &StarfieldConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &StarfieldConfig, mut rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        let sampler = SphereSampler::new(config.base_radius, config.offset_range, grid);
        let initial = sampler.sample(config.initial_stars, &mut rng);

        let mut session = Self {
            sampler,
            store: PointStore::new(),
            texture: TextureBuffer::new(grid.size()),
            selection: Selection::new(),
            rng,
        };
        for star in initial {
            session.add_star(star);
        }

        info!(
            stars = session.store.len(),
            texture_size = grid.size(),
            base_radius = config.base_radius,
            "starfield session ready"
        );
        Ok(session)
    }

    /// Appends a star and records its intensity in the texture.
    pub fn add_star(&mut self, star: StarPoint) -> PointIndex {
        let intensity = self.sampler.offsets().intensity(star.offset());
        self.texture.write(star.pixel(), intensity);
        self.store.add(star)
    }

    /// Creates a star at the direction of `pixel` with a random offset.
    ///
    /// The new star's own pixel is `pixel` exactly.
    pub fn insert_at_pixel(&mut self, pixel: Pixel) -> PointIndex {
        let direction = self.sampler.grid().to_spherical(pixel);
        let star = self.sampler.star_towards(direction, &mut self.rng);
        debug_assert_eq!(star.pixel(), pixel);
        self.add_star(star)
    }

    pub fn store(&self) -> &PointStore {
        &self.store
    }

    pub fn texture(&self) -> &TextureBuffer {
        &self.texture
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.selection.highlight(&self.store)
    }

    pub fn grid(&self) -> &EquirectGrid {
        self.sampler.grid()
    }

    pub fn base_radius(&self) -> f64 {
        self.sampler.base_radius()
    }
}
