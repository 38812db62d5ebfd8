use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub static BUNDLE_NAME: &str = "upload_bundle.zip";

fn is_zip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Reuse a lone zip input as-is; otherwise write a fresh archive of all
/// inputs, flattened to their base names.
pub fn assemble(files: &[PathBuf], output_dir: &Path) -> Result<PathBuf> {
    if files.is_empty() {
        bail!("No input files were given");
    }
    if files.len() == 1 && is_zip(&files[0]) {
        return Ok(files[0].clone());
    }

    let bundle_path = output_dir.join(BUNDLE_NAME);
    let bundle = File::create(&bundle_path)
        .with_context(|| format!("Failed to create archive at {}", bundle_path.display()))?;
    let mut writer = ZipWriter::new(bundle);
    let options = SimpleFileOptions::default();

    for path in files {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Input {} has no usable file name", path.display()))?;
        let mut input = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        writer.start_file(name, options)?;
        io::copy(&mut input, &mut writer)
            .with_context(|| format!("Failed to add {} to the archive", path.display()))?;
    }
    writer.finish()?;

    println!(
        "Created archive '{}' with {} files.",
        bundle_path.display(),
        files.len(),
    );
    Ok(bundle_path)
}
