use crate::memory::{Memory, TILE_DATA_START, TILE_MAP_START};
use crate::BACKGROUND_SIZE;

use super::tile::{Tile, TILE_BYTES};

/// Tiles per row (and column) of the background map.
const MAP_TILES: usize = BACKGROUND_SIZE / 8;

/// The full 256x256 background plane of 2-bit color indices.
#[derive(Clone, PartialEq, Eq)]
pub struct Background {
    pixels: Vec<u8>,
}

impl Background {
    /// Rebuild the whole plane from the tile map at `0x9800` and tile data
    /// at `0x8000` (unsigned indexing).
    pub fn compose(memory: &Memory) -> Self {
        let mut pixels = vec![0u8; BACKGROUND_SIZE * BACKGROUND_SIZE];

        for map_y in 0..MAP_TILES {
            for map_x in 0..MAP_TILES {
                let map_addr = TILE_MAP_START + (map_y * MAP_TILES + map_x) as u16;
                let index = memory.read8(map_addr);
                let base = TILE_DATA_START + index as u16 * TILE_BYTES as u16;
                let tile = Tile::from_memory(memory, base);

                for (row, line) in tile.rows().iter().enumerate() {
                    let start = (map_y * 8 + row) * BACKGROUND_SIZE + map_x * 8;
                    pixels[start..start + 8].copy_from_slice(line);
                }
            }
        }

        Self { pixels }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * BACKGROUND_SIZE + x]
    }
}

impl std::fmt::Debug for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Background")
            .field("size", &BACKGROUND_SIZE)
            .finish_non_exhaustive()
    }
}
