use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or write it straight into a
    /// zip archive next to it when `compress` is set.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let written = if compress {
            let zip_path = dest.with_extension("zip");
            ensure_writable(&zip_path, false)?;
            write_zip(src, &zip_path)?;
            success(format!("Compressed: {}", zip_path.display()));
            zip_path
        } else {
            ensure_writable(dest, false)?;
            fs::copy(src, dest)?;
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", written.display()));

        if let Ok(conn) = Connection::open(src) {
            let _ = crate::db::log::ttlog(
                &conn,
                "backup",
                &written.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(())
    }
}

/// Store the database file as the single entry of a new zip archive.
fn write_zip(src: &Path, zip_path: &Path) -> AppResult<()> {
    let archive = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(archive);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    zip.start_file(entry_name, options)
        .map_err(|e| AppError::Other(format!("zip error: {e}")))?;

    let mut db_file = fs::File::open(src)?;
    std::io::copy(&mut db_file, &mut zip)?;

    zip.finish()
        .map_err(|e| AppError::Other(format!("zip error: {e}")))?;

    Ok(())
}
