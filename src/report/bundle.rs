use anyhow::{Context, Result};
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::report::ReportFile;

/// Pack the report files into a ZIP archive written to `writer`.
pub fn write_zip<W: Write + Seek>(files: &[ReportFile], writer: W) -> Result<W> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(writer);

    for file in files {
        zip.start_file(file.name.as_str(), options)
            .with_context(|| format!("Failed to add {} to archive", file.name))?;
        zip.write_all(file.html.as_bytes())?;
    }

    zip.finish().context("Failed to finish archive")
}

pub fn write_zip_to_path(files: &[ReportFile], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let out = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_zip(files, out)?;
    log::info!("wrote {} file(s) to {}", files.len(), path.display());
    Ok(())
}

/// Write the report files unpacked into `dir`, for previewing in a browser.
pub fn write_dir(files: &[ReportFile], dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    for file in files {
        let path = dir.join(&file.name);
        std::fs::write(&path, &file.html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    log::info!("wrote {} file(s) to {}", files.len(), dir.display());
    Ok(())
}
