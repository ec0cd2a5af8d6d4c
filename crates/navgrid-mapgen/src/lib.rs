//! Random obstacle fields for pathfinding demos and tests.
//!
//! The only generator here is [`scatter`]: every cell rolls once against
//! a wall probability, independently of its neighbours. There is no
//! smoothing pass and no connectivity guarantee; callers that need usable
//! endpoints clear them afterwards.

use navgrid_core::{Cell, Grid, Point};
use rand::{Rng, RngExt};

/// Parameters for [`scatter`].
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub width: i32,
    pub height: i32,
    /// Chance for each cell to come out as a wall, in `0.0..=1.0`.
    pub wall_probability: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            wall_probability: 0.2,
        }
    }
}

/// Build a grid whose cells are independently walls with the configured
/// probability.
///
/// Cells are rolled in row-major order, so a seeded `rng` reproduces the
/// same field every time.
pub fn scatter<R: Rng>(config: &ScatterConfig, rng: &mut R) -> Grid {
    let mut grid = Grid::new(config.width, config.height);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let r: f64 = rng.random();
            if r < config.wall_probability {
                grid.set(Point::new(x, y), Cell::Wall);
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_probability_leaves_grid_open() {
        let config = ScatterConfig {
            width: 8,
            height: 8,
            wall_probability: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let grid = scatter(&config, &mut rng);
        assert_eq!(grid.count(Cell::Wall), 0);
    }

    #[test]
    fn full_probability_walls_everything() {
        let config = ScatterConfig {
            width: 8,
            height: 8,
            wall_probability: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let grid = scatter(&config, &mut rng);
        assert_eq!(grid.count(Cell::Wall), 64);
    }

    #[test]
    fn wall_fraction_tracks_probability() {
        let config = ScatterConfig {
            width: 64,
            height: 64,
            wall_probability: 0.2,
        };
        let mut rng = StdRng::seed_from_u64(42);
        let grid = scatter(&config, &mut rng);
        let fraction = grid.count(Cell::Wall) as f64 / (64.0 * 64.0);
        assert!((0.15..0.25).contains(&fraction), "fraction {fraction}");
    }

    #[test]
    fn same_seed_rebuilds_the_same_field() {
        let config = ScatterConfig {
            width: 32,
            height: 32,
            wall_probability: 0.3,
        };
        let mut a_rng = StdRng::seed_from_u64(7);
        let mut b_rng = StdRng::seed_from_u64(7);
        assert_eq!(scatter(&config, &mut a_rng), scatter(&config, &mut b_rng));
    }

    #[test]
    fn default_config_is_a_512_square() {
        let config = ScatterConfig::default();
        assert_eq!((config.width, config.height), (512, 512));
        assert!((config.wall_probability - 0.2).abs() < f64::EPSILON);
    }
}
