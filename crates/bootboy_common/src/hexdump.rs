use std::fmt::Write;

const BYTES_PER_ROW: usize = 16;
const GROUP_SIZE: usize = BYTES_PER_ROW / 2;

/// Render `bytes` as a classic hex/ASCII dump.
///
/// `base` is the address of `bytes[0]`; each row is prefixed with the address
/// of its first byte. Rows hold 16 bytes split into two groups of 8, followed
/// by the printable characters between pipes:
///
/// ```text
/// 0104  ce ed 66 66 cc 0d 00 0b  03 73 00 83 00 0c 00 0d  |..ff.....s......|
/// ```
pub fn hexdump(bytes: &[u8], base: usize) -> String {
    let mut out = String::new();
    for (row_index, row) in bytes.chunks(BYTES_PER_ROW).enumerate() {
        let address = base + row_index * BYTES_PER_ROW;
        let _ = write!(out, "{address:04X}  ");

        for column in 0..BYTES_PER_ROW {
            if column == GROUP_SIZE {
                out.push(' ');
            }
            match row.get(column) {
                Some(byte) => {
                    let _ = write!(out, "{byte:02x} ");
                }
                // Keep the ASCII column aligned on a short final row.
                None => out.push_str("   "),
            }
        }

        out.push(' ');
        out.push('|');
        out.extend(row.iter().map(|&byte| printable(byte)));
        out.push('|');
        out.push('\n');
    }
    out
}

#[inline]
fn printable(byte: u8) -> char {
    if (0x20..0x7F).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}
