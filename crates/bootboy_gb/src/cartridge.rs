//! Cartridge images and the parts of their header the boot ROM cares about.

use std::fmt;
use std::path::Path;

use crate::error::{EmuError, LoadTarget, Result};

/// Header logo bitmap, checked by the boot ROM.
pub const LOGO_START: usize = 0x104;
pub const LOGO_END: usize = 0x133;
/// Upper-case ASCII title, padded with NULs.
pub const TITLE_START: usize = 0x134;
pub const TITLE_END: usize = 0x143;

/// Raw cartridge bytes as read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cartridge {
    bytes: Vec<u8>,
}

impl Cartridge {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| EmuError::io(LoadTarget::Cartridge, e))?;
        log::info!("Read {} byte cartridge from {}", bytes.len(), path.display());
        Ok(Self::new(bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Game title with trailing NUL padding removed. Bytes outside
    /// printable ASCII are replaced with `?`. Empty if the image is too
    /// short to carry a header.
    pub fn title(&self) -> String {
        let Some(raw) = self.bytes.get(TITLE_START..=TITLE_END) else {
            return String::new();
        };
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        raw[..end]
            .iter()
            .map(|&b| {
                if (0x20..0x7F).contains(&b) {
                    b as char
                } else {
                    '?'
                }
            })
            .collect()
    }

    pub fn logo(&self) -> Option<&[u8]> {
        self.bytes.get(LOGO_START..=LOGO_END)
    }

    pub fn logo_preview(&self) -> Option<LogoPreview> {
        self.logo().map(LogoPreview::decode)
    }
}

/// The 48x8 monochrome image encoded by the header logo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoPreview {
    rows: [[bool; LogoPreview::WIDTH]; LogoPreview::HEIGHT],
}

impl LogoPreview {
    pub const WIDTH: usize = 48;
    pub const HEIGHT: usize = 8;

    /// Decode the 48 logo bytes.
    ///
    /// Each nibble is four pixels. The first 24 bytes carry rows 0-3, the
    /// last 24 rows 4-7. Within a half, rows come in pairs: even bytes feed
    /// the first pair, odd bytes the second, high nibble first.
    pub fn decode(logo: &[u8]) -> Self {
        let mut rows = [[false; Self::WIDTH]; Self::HEIGHT];
        for (y, row) in rows.iter_mut().enumerate() {
            let half = (y / 4) * 24;
            let first = half + (y % 4) / 2;
            for column in 0..Self::WIDTH / 4 {
                let byte = logo.get(first + column * 2).copied().unwrap_or(0);
                let nibble = if y % 2 == 0 { byte >> 4 } else { byte & 0x0F };
                for bit in 0..4 {
                    row[column * 4 + bit] = nibble & (0x08 >> bit) != 0;
                }
            }
        }
        Self { rows }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.rows[y][x]
    }
}

impl fmt::Display for LogoPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &set in row {
                f.write_str(if set { "█" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
