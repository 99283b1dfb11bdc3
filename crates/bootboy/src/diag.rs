use bootboy_gb::cpu::Registers;
use bootboy_gb::error::UnsupportedOpcode;

/// Multi-line report for a decode failure: registers, flags and the memory
/// around the failing address.
pub fn report(info: &UnsupportedOpcode) -> String {
    let mut out = format!("{info}\n");
    out.push_str(&registers(&info.registers));
    out.push_str(&info.window.to_string());
    out
}

pub fn registers(regs: &Registers) -> String {
    let f = regs.f;
    format!(
        "PC=0x{:04X} SP=0x{:04X}\n\
         A={:02X} F={:02X} B={:02X} C={:02X} D={:02X} E={:02X} H={:02X} L={:02X}\n\
         Z={} N={} H={} C={}\n",
        regs.pc,
        regs.sp,
        regs.a,
        f.to_byte(),
        regs.b,
        regs.c,
        regs.d,
        regs.e,
        regs.h,
        regs.l,
        u8::from(f.zero()),
        u8::from(f.subtraction()),
        u8::from(f.half_carry()),
        u8::from(f.carry()),
    )
}
