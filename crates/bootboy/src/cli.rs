use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Run a Game Boy boot ROM and dump every rendered frame.
#[derive(Debug, Parser)]
#[command(name = "bootboy", version, about)]
pub struct Args {
    /// Boot ROM image mapped at 0x0000 (at most 256 bytes).
    pub boot: PathBuf,

    /// Cartridge image; bytes from offset 0x100 are mapped at 0x0100.
    pub cartridge: PathBuf,

    /// Directory that receives `frame-NNNNN.<format>` files.
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,

    #[arg(short, long, value_enum, default_value_t = ImageFormat::Pbm)]
    pub format: ImageFormat,

    /// Pause before every instruction and wait for input on stdin.
    #[arg(long)]
    pub step: bool,

    /// Stop after this many instructions.
    #[arg(long)]
    pub max_steps: Option<u64>,

    /// Stop when PC reaches this address (hex, e.g. 0x0100).
    #[arg(long, value_parser = parse_address)]
    pub stop_at: Option<u16>,

    /// Leave HalfCarry untouched in arithmetic instructions.
    #[arg(long)]
    pub legacy_flags: bool,

    /// Print the cartridge title and logo, then exit.
    #[arg(long)]
    pub header: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    /// Monochrome plain PBM (`P1`).
    Pbm,
    /// Plain PPM (`P3`) with a pale green background.
    Ppm,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Pbm => "pbm",
            ImageFormat::Ppm => "ppm",
        }
    }
}

fn parse_address(value: &str) -> Result<u16, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid address '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_hex() {
        assert_eq!(parse_address("0x0100"), Ok(0x0100));
        assert_eq!(parse_address("FF50"), Ok(0xFF50));
        assert!(parse_address("0x10000").is_err());
        assert!(parse_address("zz").is_err());
    }

    #[test]
    fn parses_full_command_line() {
        let args = Args::try_parse_from([
            "bootboy",
            "dmg_boot.bin",
            "tetris.gb",
            "--format",
            "ppm",
            "--stop-at",
            "0x100",
            "--max-steps",
            "50000",
            "--legacy-flags",
        ])
        .unwrap();
        assert_eq!(args.format, ImageFormat::Ppm);
        assert_eq!(args.stop_at, Some(0x0100));
        assert_eq!(args.max_steps, Some(50_000));
        assert!(args.legacy_flags);
        assert!(!args.step);
        assert_eq!(args.output, PathBuf::from("frames"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
