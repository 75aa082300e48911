use std::path::Path;

use image::Luma;
use qrcode::QrCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("failed to encode {url}: {message}")]
    Encode { url: String, message: String },

    #[error("failed to create output directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Deep link to the ordering page of `table`.
#[must_use]
pub fn table_url(host: &str, port: u16, table: u32) -> String {
    format!("http://{host}:{port}/order.html?table={table}")
}

#[must_use]
pub fn table_file_name(table: u32) -> String {
    format!("table-{table}.png")
}

/// Encode `url` and write it to `path` as a PNG, creating parent directories
/// as needed. An existing file is overwritten.
///
/// # Errors
/// Returns [`QrError`] if the URL cannot be encoded or the file cannot be
/// written.
pub fn render_png(url: &str, path: &Path) -> Result<(), QrError> {
    let code = QrCode::new(url.as_bytes()).map_err(|e| QrError::Encode {
        url: url.to_owned(),
        message: e.to_string(),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    code.render::<Luma<u8>>().build().save(path)?;
    Ok(())
}
