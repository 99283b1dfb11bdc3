use super::{Cpu, FlagPolicy, Flags};

impl Cpu {
    /// Update HalfCarry for an arithmetic result, honouring the flag policy.
    #[inline]
    fn set_half_carry(&mut self, value: bool) {
        if self.flag_policy == FlagPolicy::Accurate {
            self.regs.f.set(Flags::HALF_CARRY, value);
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.regs.f.carry());

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;

        self.regs.f.set(Flags::ZERO, result == 0);
        self.regs.f.remove(Flags::SUBTRACTION);
        self.set_half_carry(half > 0x0F);
        self.regs.f.set(Flags::CARRY, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.compare(value, use_carry);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.compare(value, false);
    }

    fn compare(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.regs.f.carry());

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.f.set(Flags::ZERO, result == 0);
        self.regs.f.insert(Flags::SUBTRACTION);
        self.set_half_carry(half < 0);
        self.regs.f.set(Flags::CARRY, full < 0);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.regs.f = Flags::HALF_CARRY;
        self.regs.f.set(Flags::ZERO, result == 0);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.regs.f = Flags::empty();
        self.regs.f.set(Flags::ZERO, result == 0);
    }

    /// `XOR A` is the idiomatic way to clear A: it always leaves A = 0 with
    /// only Zero set.
    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.regs.f = Flags::empty();
        self.regs.f.set(Flags::ZERO, result == 0);
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.f.set(Flags::ZERO, result == 0);
        self.regs.f.remove(Flags::SUBTRACTION);
        self.set_half_carry((value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.f.set(Flags::ZERO, result == 0);
        self.regs.f.insert(Flags::SUBTRACTION);
        self.set_half_carry((value & 0x0F) == 0);
        result
    }

    /// Rotate left through carry, shared by `RLA` and `CB RL r`.
    ///
    /// Returns the rotated value; C receives the old bit 7, N and H are
    /// cleared. Z is left to the caller since `RLA` always clears it.
    #[inline]
    pub(super) fn alu_rl(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.f.carry());
        let carry_out = (value & 0x80) != 0;
        let result = (value << 1) | carry_in;

        self.regs.f.remove(Flags::SUBTRACTION | Flags::HALF_CARRY);
        self.regs.f.set(Flags::CARRY, carry_out);
        result
    }
}
