//! Pulls the endpoint column out of the tester's ranked CSV.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Writes the first field of every data row in `input` to `output`, one
/// per line, in ranked order. The first row is a header and is skipped;
/// blank rows are ignored.
///
/// Returns the number of endpoints written.
pub fn extract_results(input: &Path, output: &Path) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input)
        .with_context(|| format!("failed to open {}", input.display()))?;

    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?,
    );

    let mut count = 0;
    for record in reader.records() {
        let record = record.with_context(|| format!("failed to read {}", input.display()))?;
        let first = record.get(0).unwrap_or_default();
        writeln!(writer, "{first}")
            .with_context(|| format!("failed to write {}", output.display()))?;
        count += 1;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(count)
}
