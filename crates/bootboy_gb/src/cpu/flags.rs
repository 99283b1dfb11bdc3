use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    ///
    /// Only these four bits exist in the type; [`Flags::from_byte`] drops the
    /// low nibble, so no instruction can smuggle extra bits into F.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 1 << 7;
        const SUBTRACTION = 1 << 6;
        const HALF_CARRY = 1 << 5;
        const CARRY = 1 << 4;
    }
}

impl Flags {
    /// Unpack a raw F byte (e.g. from `POP AF`).
    #[inline]
    pub const fn from_byte(value: u8) -> Self {
        Self::from_bits_truncate(value)
    }

    #[inline]
    pub const fn to_byte(self) -> u8 {
        self.bits()
    }

    #[inline]
    pub const fn zero(self) -> bool {
        self.contains(Flags::ZERO)
    }

    #[inline]
    pub const fn subtraction(self) -> bool {
        self.contains(Flags::SUBTRACTION)
    }

    #[inline]
    pub const fn half_carry(self) -> bool {
        self.contains(Flags::HALF_CARRY)
    }

    #[inline]
    pub const fn carry(self) -> bool {
        self.contains(Flags::CARRY)
    }
}

/// How arithmetic instructions treat the HalfCarry flag.
///
/// Carry, Zero and Subtraction are always computed exactly. The two policies
/// only differ for `ADD`/`ADC`/`SUB`/`SBC`/`CP` and 8-bit `INC`/`DEC`:
///
/// - [`FlagPolicy::Accurate`] applies the hardware nibble rule (carry out of
///   bit 3, or borrow into bit 4).
/// - [`FlagPolicy::Legacy`] leaves HalfCarry untouched, matching the partial
///   behaviour existing boot traces were recorded with.
///
/// The default is `Accurate` unless the `legacy-flags` cargo feature is
/// enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagPolicy {
    Accurate,
    Legacy,
}

impl Default for FlagPolicy {
    fn default() -> Self {
        if cfg!(feature = "legacy-flags") {
            FlagPolicy::Legacy
        } else {
            FlagPolicy::Accurate
        }
    }
}
