use crate::core::log::audit;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the store to `dest_file`, or with `compress` to the same path
    /// with a `.zip` extension. Returns the path of the file produced.
    pub fn backup(store: &RecordStore, dest_file: &str, compress: bool) -> AppResult<PathBuf> {
        let src = store.path();
        let dest = Path::new(dest_file);

        // 1️⃣ Check store exists
        if !src.exists() {
            return Err(AppError::Persistence(format!(
                "Store not found: {}",
                src.display()
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Copy store, or write it straight into a .zip next to `dest`
        let final_path = if compress {
            compress_backup(src, &dest.with_extension("zip"))?
        } else {
            fs::copy(src, dest)?;
            dest.to_path_buf()
        };

        // 4️⃣ Audit
        audit(
            src,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Compress the store into a .zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "registro_orari.json".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path.to_path_buf())
}
