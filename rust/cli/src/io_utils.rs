//! File helpers shared by the command handlers.

use std::path::Path;

/// Reads a UTF-8 text file, dropping a leading byte order mark.
///
/// Editors on some platforms add the BOM to JSON and TOML files, and both
/// parsers reject it.
pub fn read_text(path: &Path) -> Result<String, String> {
    let mut content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use pokerview_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("out/renders/table.jpeg");
/// ensure_parent_dir(path).unwrap();
/// // Now "out/renders/" directory exists
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

/// Writes an encoded image, creating parent directories first.
pub fn write_image(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    ensure_parent_dir(path).map_err(std::io::Error::other)?;
    std::fs::write(path, bytes)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
