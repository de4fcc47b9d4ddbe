//! Single-column CSV export.
//!
//! Output is a header row `url` followed by one row per URL, sorted byte-wise
//! ascending, so the same set of URLs always produces byte-identical output.
//! Fields are quoted only when they contain a comma, a quote, or a line break.

use crate::{Error, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument};

/// Column header of the exported table.
pub const HEADER: &str = "url";

/// Render URLs as CSV bytes.
///
/// ```
/// use sitemap_csv_core::export::to_table;
///
/// let csv = to_table(["https://b.com/", "https://a.com/x,y"])?;
/// assert_eq!(
///     String::from_utf8(csv).unwrap(),
///     "url\n\"https://a.com/x,y\"\nhttps://b.com/\n"
/// );
/// # Ok::<(), sitemap_csv_core::Error>(())
/// ```
pub fn to_table<I, S>(urls: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buffer = Vec::new();
    write_rows(urls, &mut buffer)?;
    Ok(buffer)
}

/// Write URLs as CSV to `destination`, creating or truncating the file.
#[instrument(skip_all, fields(destination = %destination.display()))]
pub fn write_table<I, S>(urls: I, destination: &Path) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = std::fs::File::create(destination)
        .map_err(|e| Error::Write(format!("{}: {e}", destination.display())))?;
    let rows = write_rows(urls, file)?;
    debug!(rows, "Wrote CSV");
    Ok(())
}

/// Write header and sorted rows to any writer, returning the data row count.
fn write_rows<I, S, W>(urls: I, sink: W) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut rows: Vec<S> = urls.into_iter().collect();
    rows.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));
    rows.dedup_by(|a, b| a.as_ref() == b.as_ref());

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record([HEADER])?;
    for url in &rows {
        writer.write_record([url.as_ref()])?;
    }
    writer
        .flush()
        .map_err(|e| Error::Write(e.to_string()))?;

    Ok(rows.len())
}
