// WHY: Both converters emit the same IMPlus word list, one `word<TAB>frequency` per line

use crate::error::{DictError, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write entries in the given order to `writer`. Returns the number of lines written.
pub fn write_entries<W, S, F, I>(writer: &mut W, entries: I) -> std::io::Result<usize>
where
    W: Write,
    S: AsRef<str>,
    F: Display,
    I: IntoIterator<Item = (S, F)>,
{
    let mut count = 0;
    for (word, frequency) in entries {
        writeln!(writer, "{}\t{}", word.as_ref(), frequency)?;
        count += 1;
    }
    Ok(count)
}

/// Create `output_path` and write the word list into it.
///
/// The file is created even when `entries` is empty, and is always flushed
/// before returning so that write errors surface here rather than on drop.
pub fn write_word_list<S, F, I>(output_path: &Path, entries: I) -> Result<usize>
where
    S: AsRef<str>,
    F: Display,
    I: IntoIterator<Item = (S, F)>,
{
    let file = File::create(output_path).map_err(|e| DictError::write(output_path, e))?;
    let mut writer = BufWriter::new(file);

    let count = write_entries(&mut writer, entries).map_err(|e| DictError::write(output_path, e))?;
    writer.flush().map_err(|e| DictError::write(output_path, e))?;

    debug!("Wrote {} entries to {}", count, output_path.display());
    Ok(count)
}
