pub mod hexdump;

pub use hexdump::hexdump;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    /// Background tint of the original DMG screen.
    pub const PALE_GREEN: Color = Color::new_rgb(222, 249, 208);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Two-tone palette used when rendering 2-bit color indices: index 0 is
    /// the screen background, every other shade is drawn as black.
    #[inline]
    pub const fn for_color_index(index: u8) -> Color {
        if index == 0 {
            Color::PALE_GREEN
        } else {
            Color::BLACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_index_zero_is_background() {
        assert_eq!(Color::for_color_index(0), Color::PALE_GREEN);
        for index in 1..=3 {
            assert_eq!(Color::for_color_index(index), Color::BLACK);
        }
    }
}
