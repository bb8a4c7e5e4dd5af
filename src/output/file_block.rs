use crate::constants::BLOCK_TERMINATOR;
use crate::core_types::CollectedFile;
use crate::errors::{Error, Result};
use crate::output::content_reader::read_file_content;
use crate::output::formatter::delimiter_line;
use log::{debug, warn};
use std::io::Write;

/// Writes a single file's delimiter line and content block to the writer.
///
/// The delimiter and the two trailing newlines are always written. If the
/// file cannot be read, the read error is logged and returned as `Ok(Some(_))`
/// so the caller can record it; only write failures are returned as `Err`.
pub fn write_file_block(writer: &mut dyn Write, file: &CollectedFile) -> Result<Option<Error>> {
    writeln!(writer, "{}", delimiter_line(&file.display_path))?;

    let read_error = match read_file_content(file) {
        Ok(content) => {
            writer.write_all(content.as_bytes())?;
            debug!("Wrote {} bytes for {}", content.len(), file.display_path);
            None
        }
        Err(e) => {
            warn!("{}", e);
            Some(e)
        }
    };

    writer.write_all(BLOCK_TERMINATOR.as_bytes())?;
    Ok(read_error)
}
