use crate::{BACKGROUND_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::Background;

/// One visible 160x144 frame of 2-bit color indices.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: Vec<u8>,
}

impl Frame {
    /// Cut the visible window out of `background`, starting at
    /// (`scx`, `scy`) and wrapping around both edges.
    pub fn extract(background: &Background, scx: u8, scy: u8) -> Self {
        let mut pixels = Vec::with_capacity(SCREEN_WIDTH * SCREEN_HEIGHT);
        for y in 0..SCREEN_HEIGHT {
            let bg_y = (scy as usize + y) % BACKGROUND_SIZE;
            for x in 0..SCREEN_WIDTH {
                let bg_x = (scx as usize + x) % BACKGROUND_SIZE;
                pixels.push(background.pixel(bg_x, bg_y));
            }
        }
        Self { pixels }
    }

    #[inline]
    pub fn width(&self) -> usize {
        SCREEN_WIDTH
    }

    #[inline]
    pub fn height(&self) -> usize {
        SCREEN_HEIGHT
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * SCREEN_WIDTH + x]
    }

    /// Rows top to bottom, each `SCREEN_WIDTH` indices long.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(SCREEN_WIDTH)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit = self.pixels.iter().filter(|&&p| p != 0).count();
        f.debug_struct("Frame")
            .field("width", &SCREEN_WIDTH)
            .field("height", &SCREEN_HEIGHT)
            .field("lit", &lit)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::memory::{Memory, TILE_MAP_START};

    /// Memory with distinct tiles in every map cell, so each background
    /// position carries some structure.
    fn patterned_memory() -> Memory {
        let mut memory = Memory::new();
        for offset in 0..0x1000u16 {
            memory.write8(
                0x8000 + offset,
                (offset as u8).wrapping_mul(37) ^ (offset >> 4) as u8,
            );
        }
        for cell in 0..0x400u16 {
            memory.write8(TILE_MAP_START + cell, (cell as u8).wrapping_mul(13));
        }
        memory
    }

    #[test]
    fn scx_wraps_horizontally() {
        let background = Background::compose(&patterned_memory());
        let frame = Frame::extract(&background, 250, 0);
        assert_eq!(frame.pixel(8, 0), background.pixel(2, 0));
        assert_eq!(frame.pixel(0, 0), background.pixel(250, 0));
    }

    #[test]
    fn rows_cover_the_screen() {
        let frame = Frame::extract(&Background::compose(&Memory::new()), 0, 0);
        let rows: Vec<&[u8]> = frame.rows().collect();
        assert_eq!(rows.len(), SCREEN_HEIGHT);
        assert!(rows.iter().all(|row| row.len() == SCREEN_WIDTH));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn viewport_samples_background_modulo_256(
            scx in any::<u8>(),
            scy in any::<u8>(),
            x in 0..SCREEN_WIDTH,
            y in 0..SCREEN_HEIGHT,
        ) {
            let background = Background::compose(&patterned_memory());
            let frame = Frame::extract(&background, scx, scy);
            let bg_x = (scx as usize + x) % BACKGROUND_SIZE;
            let bg_y = (scy as usize + y) % BACKGROUND_SIZE;
            prop_assert_eq!(frame.pixel(x, y), background.pixel(bg_x, bg_y));
        }
    }
}
