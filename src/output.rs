use std::io::{self, Write};

/// Write each code on its own line, in the order given, and flush.
///
/// Returns the number of lines written.
pub fn emit_codes<W: Write>(mut writer: W, codes: &[String]) -> io::Result<usize> {
    for code in codes {
        writeln!(writer, "{code}")?;
    }
    writer.flush()?;
    Ok(codes.len())
}
