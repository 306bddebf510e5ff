use std::path::Path;

use anyhow::Result;
use edgesift_common::success;
use edgesift_core::convert;

pub fn convert(input: &Path, output: &Path) -> Result<()> {
    let count = convert::convert_scan_results(input, output)?;
    success!("{count} endpoints written to {}", output.display());
    Ok(())
}
