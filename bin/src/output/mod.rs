use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;

/// Writes `value` as pretty printed JSON to `path`, replacing any existing file only once the
/// whole document has been written.
pub fn write_json<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let mut file =
        AtomicWriteFile::open(path).with_context(|| format!("opening {path:?} for writing"))?;
    serde_json::to_writer_pretty(&mut file, value)
        .with_context(|| format!("writing JSON to {path:?}"))?;
    file.write_all(b"\n")?;
    file.commit()
        .with_context(|| format!("committing {path:?}"))?;
    log::info!("Wrote report to {path:?}.");
    Ok(())
}
