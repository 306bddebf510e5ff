use std::path::Path;

use anyhow::Result;
use edgesift_common::success;
use edgesift_core::extract;

pub fn extract(input: &Path, output: &Path) -> Result<()> {
    let count = extract::extract_results(input, output)?;
    success!("{count} ranked endpoints written to {}", output.display());
    Ok(())
}
