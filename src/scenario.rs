use anyhow::Result;
use rand::prelude::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Write};
use tracing::info;

use crate::world::{Cell, World};

/// Replaces the dirt layout of `world` with `num_dirt` cells drawn uniformly
/// from its open cells. The start cell is a legal target.
pub fn scatter_dirt<R: Rng + ?Sized>(
    world: &World,
    num_dirt: usize,
    rng: &mut R,
) -> Result<World, String> {
    let mut candidates: Vec<(usize, usize)> = Vec::new();
    for row in 0..world.height {
        for col in 0..world.width {
            if world.is_open(row, col) {
                candidates.push((row, col));
            }
        }
    }

    if candidates.len() < num_dirt {
        return Err(format!(
            "Cannot place {} dirt cells on {} open cells",
            num_dirt,
            candidates.len()
        ));
    }

    candidates.shuffle(rng);
    let dirt: BTreeSet<(usize, usize)> = candidates.into_iter().take(num_dirt).collect();

    info!("Scatter dirt: {dirt:?}");
    Ok(world.with_dirt(dirt))
}

/// Builds a world with walls drawn independently per cell at `wall_density`,
/// a start cell picked among the open cells, and `num_dirt` dirt cells.
pub fn random_world<R: Rng + ?Sized>(
    height: usize,
    width: usize,
    wall_density: f64,
    num_dirt: usize,
    rng: &mut R,
) -> Result<World, String> {
    if height == 0 || width == 0 {
        return Err("World dimensions must be positive".to_string());
    }
    if !(0.0..=1.0).contains(&wall_density) {
        return Err(format!("Wall density {wall_density} outside [0, 1]"));
    }

    let grid: Vec<Vec<Cell>> = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    if rng.gen_bool(wall_density) {
                        Cell::Wall
                    } else {
                        Cell::Open
                    }
                })
                .collect()
        })
        .collect();

    let mut open_cells: Vec<(usize, usize)> = Vec::new();
    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if cell.is_open() {
                open_cells.push((row, col));
            }
        }
    }

    let start = *open_cells
        .choose(rng)
        .ok_or("Random world has no open cell for the start")?;

    let world = World::new(grid, start, BTreeSet::new());
    scatter_dirt(&world, num_dirt, rng)
}

pub fn write_dirt_to_yaml(path: &str, dirt: &BTreeSet<(usize, usize)>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    let cells: Vec<[usize; 2]> = dirt.iter().map(|&(row, col)| [row, col]).collect();
    let yaml_data = serde_yaml::to_string(&cells)?;
    writer.write_all(yaml_data.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_dirt_deterministic() {
        let world = World::from_file("worlds/lobby-7x5.vw").expect("Error loading world");

        let mut rng = StdRng::seed_from_u64(7);
        let scattered = scatter_dirt(&world, 4, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let repeat = scatter_dirt(&world, 4, &mut rng).unwrap();

        assert_eq!(scattered.dirt(), repeat.dirt());
        assert_eq!(scattered.dirt().len(), 4);
        assert_eq!(scattered.start(), world.start());
        assert!(scattered.verify());
        // the source world keeps its own dirt
        assert_eq!(world.dirt().len(), 1);
    }

    #[test]
    fn test_scatter_dirt_rejects_overfull() {
        let world = World::from_text("2\n1\n@_\n").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(scatter_dirt(&world, 3, &mut rng).is_err());
    }

    #[test]
    fn test_random_world_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = random_world(6, 8, 0.2, 3, &mut rng).unwrap();

        assert_eq!(world.height, 6);
        assert_eq!(world.width, 8);
        assert_eq!(world.dirt().len(), 3);
        assert!(world.verify());
    }
}
