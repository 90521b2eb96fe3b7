// src/picker.rs
//! Icon picking collaborator.
//!
//! The form never talks to the platform directly. It asks an [`IconPicker`]
//! through [`pick_stock_icon`], which turns every failure into `None`.

use crate::error::{Result, TickerError};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// File extensions accepted as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// A successfully picked icon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedIcon {
    pub uri: String,
    pub name: String,
}

impl PickedIcon {
    pub fn new(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
        }
    }

    /// File name up to the first `.`, used to pre-fill the symbol field.
    pub fn symbol_hint(&self) -> &str {
        self.name.split('.').next().unwrap_or_default()
    }
}

/// Something that can hand back a single image file.
///
/// `Ok(None)` means the user cancelled.
pub trait IconPicker {
    fn pick(&mut self) -> Result<Option<PickedIcon>>;
}

/// Runs the picker and swallows errors. Failures are only logged.
pub fn pick_stock_icon(picker: &mut dyn IconPicker) -> Option<PickedIcon> {
    match picker.pick() {
        Ok(Some(icon)) => {
            info!(name = %icon.name, uri = %icon.uri, "icon picked");
            Some(icon)
        }
        Ok(None) => {
            debug!("icon picking cancelled");
            None
        }
        Err(err) => {
            error!(%err, "error picking icon");
            None
        }
    }
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Strips the `file://` scheme from an icon URI.
pub fn uri_to_path(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix("file://").unwrap_or(uri))
}

/// Desktop picker fed with a path, either dropped onto the window or typed in.
///
/// Each offered path is consumed by the next `pick`.
#[derive(Debug, Default)]
pub struct PathPicker {
    pending: Option<PathBuf>,
}

impl PathPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, path: impl Into<PathBuf>) {
        self.pending = Some(path.into());
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl IconPicker for PathPicker {
    fn pick(&mut self) -> Result<Option<PickedIcon>> {
        let Some(path) = self.pending.take() else {
            return Ok(None);
        };

        let metadata = std::fs::metadata(&path)?;
        if !metadata.is_file() || !is_image_path(&path) {
            return Err(TickerError::UnsupportedIcon(path.display().to_string()));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| TickerError::UnsupportedIcon(path.display().to_string()))?
            .to_string();

        Ok(Some(PickedIcon::new(
            format!("file://{}", path.display()),
            name,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct FailingPicker;

    impl IconPicker for FailingPicker {
        fn pick(&mut self) -> Result<Option<PickedIcon>> {
            Err(TickerError::UnsupportedIcon("broken".into()))
        }
    }

    fn temp_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stock_ticker_picker_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, b"not really an image").unwrap();
        path
    }

    #[test]
    fn symbol_hint_strips_at_first_dot() {
        assert_eq!(PickedIcon::new("u", "TSLA.png").symbol_hint(), "TSLA");
        assert_eq!(PickedIcon::new("u", "brk.b.logo.png").symbol_hint(), "brk");
        assert_eq!(PickedIcon::new("u", "NOEXT").symbol_hint(), "NOEXT");
    }

    #[test]
    fn image_extensions_are_case_insensitive() {
        assert!(is_image_path(Path::new("/a/b/logo.PNG")));
        assert!(is_image_path(Path::new("logo.jpeg")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("README")));
    }

    #[test]
    fn path_picker_without_offer_is_a_cancel() {
        let mut picker = PathPicker::new();
        assert_eq!(pick_stock_icon(&mut picker), None);
    }

    #[test]
    fn path_picker_returns_uri_and_name() {
        let path = temp_file("ACME.png");
        let mut picker = PathPicker::new();
        picker.offer(&path);
        assert!(picker.has_pending());

        let picked = pick_stock_icon(&mut picker).unwrap();
        assert_eq!(picked.name, "ACME.png");
        assert_eq!(picked.uri, format!("file://{}", path.display()));
        assert_eq!(uri_to_path(&picked.uri), path);
        assert!(!picker.has_pending());
    }

    #[test]
    fn errors_are_swallowed_into_none() {
        let mut picker = PathPicker::new();
        picker.offer(temp_file("notes.txt"));
        assert_eq!(pick_stock_icon(&mut picker), None);

        picker.offer("/definitely/not/here.png");
        assert_eq!(pick_stock_icon(&mut picker), None);

        assert_eq!(pick_stock_icon(&mut FailingPicker), None);
    }
}
