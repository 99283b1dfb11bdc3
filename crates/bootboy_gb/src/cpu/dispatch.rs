//! Opcode lookup tables.
//!
//! Both the primary opcode space and the `0xCB` extended space are plain
//! 256-entry arrays from opcode byte to handler. Handlers decode register
//! fields from the opcode they are given, so one function usually covers a
//! whole family. Supporting a new instruction means writing its handler and
//! adding one line here.

use super::{Bus, Cpu};
use crate::error::Opcode;

/// Outcome of executing one handler. The error is the opcode that could not
/// be decoded; [`Cpu::step`] turns it into a full diagnostic.
pub(crate) type ExecResult = Result<(), Opcode>;

pub(crate) type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> ExecResult;

pub(crate) type OpcodeTable = [Option<Handler>; 256];

pub(crate) static PRIMARY: OpcodeTable = primary_table();
pub(crate) static EXTENDED: OpcodeTable = extended_table();

/// Whether the interpreter has a handler for `opcode`.
pub fn is_supported(opcode: Opcode) -> bool {
    match opcode {
        Opcode::Primary(op) => PRIMARY[op as usize].is_some(),
        Opcode::Extended(op) => EXTENDED[op as usize].is_some(),
    }
}

macro_rules! register {
    ($table:ident, $handler:path, [$($opcode:expr),+ $(,)?]) => {
        $( $table[$opcode] = Some($handler as Handler); )+
    };
    ($table:ident, $handler:path, $from:literal ..= $to:literal $(, except $skip:literal)?) => {{
        let mut opcode = $from;
        while opcode <= $to {
            $( if opcode == $skip { opcode += 1; continue; } )?
            $table[opcode] = Some($handler as Handler);
            opcode += 1;
        }
    }};
}

const fn primary_table() -> OpcodeTable {
    let mut table: OpcodeTable = [None; 256];

    // NOP
    register!(table, Cpu::exec_nop, [0x00]);

    // LD rr, d16
    register!(table, Cpu::exec_ld_rr_d16, [0x01, 0x11, 0x21, 0x31]);

    // LD r, d8 (and LD (HL), d8)
    register!(
        table,
        Cpu::exec_ld_r_d8,
        [0x06, 0x0E, 0x16, 0x1E, 0x26, 0x2E, 0x36, 0x3E]
    );

    // LD (BC/DE/HL+/HL-), A
    register!(table, Cpu::exec_ld_indirect_a, [0x02, 0x12, 0x22, 0x32]);

    // LD A, (BC/DE/HL+/HL-)
    register!(table, Cpu::exec_ld_a_indirect, [0x0A, 0x1A, 0x2A, 0x3A]);

    // LD r1, r2. 0x76 is HALT, which needs interrupts to ever wake up.
    register!(table, Cpu::exec_ld_r_r, 0x40..=0x7F, except 0x76);

    // LDH (a8),A / LDH A,(a8)
    register!(table, Cpu::exec_ldh_a8, [0xE0, 0xF0]);

    // LD (C),A / LD A,(C)
    register!(table, Cpu::exec_ldh_c, [0xE2, 0xF2]);

    // LD (a16),A / LD A,(a16)
    register!(table, Cpu::exec_ld_a16_a, [0xEA, 0xFA]);

    // INC r / DEC r
    register!(
        table,
        Cpu::exec_inc8_reg,
        [0x04, 0x0C, 0x14, 0x1C, 0x24, 0x2C, 0x34, 0x3C]
    );
    register!(
        table,
        Cpu::exec_dec8_reg,
        [0x05, 0x0D, 0x15, 0x1D, 0x25, 0x2D, 0x35, 0x3D]
    );

    // INC rr / DEC rr
    register!(table, Cpu::exec_inc16_rr, [0x03, 0x13, 0x23, 0x33]);
    register!(table, Cpu::exec_dec16_rr, [0x0B, 0x1B, 0x2B, 0x3B]);

    // RLA
    register!(table, Cpu::exec_rla, [0x17]);

    // ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r
    register!(table, Cpu::exec_alu_reg_group, 0x80..=0xBF);

    // ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, d8
    register!(
        table,
        Cpu::exec_alu_imm,
        [0xC6, 0xCE, 0xD6, 0xDE, 0xE6, 0xEE, 0xF6, 0xFE]
    );

    // JR r8 / JR cc, r8
    register!(table, Cpu::exec_jr, [0x18]);
    register!(table, Cpu::exec_jr_cc, [0x20, 0x28, 0x30, 0x38]);

    // JP a16
    register!(table, Cpu::exec_jp_a16, [0xC3]);

    // CALL a16 / RET
    register!(table, Cpu::exec_call_a16, [0xCD]);
    register!(table, Cpu::exec_ret, [0xC9]);

    // PUSH rr / POP rr
    register!(table, Cpu::exec_push_rr, [0xC5, 0xD5, 0xE5, 0xF5]);
    register!(table, Cpu::exec_pop_rr, [0xC1, 0xD1, 0xE1, 0xF1]);

    // CB prefix
    register!(table, Cpu::exec_prefix_cb, [0xCB]);

    table
}

const fn extended_table() -> OpcodeTable {
    let mut table: OpcodeTable = [None; 256];

    // RL r
    register!(table, Cpu::exec_cb_rl, 0x10..=0x17);

    // BIT b, r
    register!(table, Cpu::exec_cb_bit, 0x40..=0x7F);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halt_and_opcode_holes_are_unsupported() {
        for op in [
            0x76, 0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
        ] {
            assert!(!is_supported(Opcode::Primary(op)), "0x{op:02X}");
        }
    }

    #[test]
    fn boot_sequence_opcodes_are_supported() {
        let boot_ops = [
            0x31, 0xAF, 0x21, 0x32, 0xCB, 0x20, 0x0E, 0x3E, 0xE2, 0x0C, 0x77, 0xE0, 0x11, 0x1A,
            0xCD, 0x13, 0x7B, 0xFE, 0x06, 0x22, 0x05, 0xEA, 0x3D, 0x28, 0x0D, 0x2E, 0x18, 0x67,
            0x57, 0xF0, 0x1E, 0x1D, 0x15, 0x04, 0x90, 0x4F, 0xC5, 0x17, 0xC1, 0x23, 0xC9, 0xBE,
            0x7D, 0x86, 0x24, 0x50,
        ];
        for op in boot_ops {
            assert!(is_supported(Opcode::Primary(op)), "0x{op:02X}");
        }
        assert!(is_supported(Opcode::Extended(0x7C)));
        assert!(is_supported(Opcode::Extended(0x11)));
    }

    #[test]
    fn extended_table_is_sparse() {
        assert!(!is_supported(Opcode::Extended(0x00)));
        assert!(!is_supported(Opcode::Extended(0x37)));
        assert!(!is_supported(Opcode::Extended(0xFF)));
    }
}
