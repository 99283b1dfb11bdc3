use crate::memory::Memory;

/// Bytes per 8x8 tile: two bit planes per row.
pub const TILE_BYTES: usize = 16;

/// A decoded 8x8 tile of 2-bit color indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pixels: [[u8; 8]; 8],
}

impl Tile {
    /// Decode a tile from its 16 raw bytes.
    ///
    /// Row `r` is stored as two consecutive bytes: plane 0 at `2r`, plane 1
    /// at `2r + 1`. Bit 7 is the leftmost pixel.
    pub fn decode(bytes: &[u8; TILE_BYTES]) -> Self {
        let mut pixels = [[0u8; 8]; 8];
        for (row, out) in pixels.iter_mut().enumerate() {
            let plane0 = bytes[row * 2];
            let plane1 = bytes[row * 2 + 1];
            for (col, pixel) in out.iter_mut().enumerate() {
                let bit = 7 - col;
                let low = (plane0 >> bit) & 0x01;
                let high = (plane1 >> bit) & 0x01;
                *pixel = (high << 1) | low;
            }
        }
        Self { pixels }
    }

    pub fn from_memory(memory: &Memory, base: u16) -> Self {
        Self::decode(&memory.read_array::<TILE_BYTES>(base))
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y][x]
    }

    pub fn rows(&self) -> &[[u8; 8]; 8] {
        &self.pixels
    }
}
