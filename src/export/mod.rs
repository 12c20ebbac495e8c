pub mod icon_dir;

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::error::{validate_size, IconError, Result};
use crate::icon::render;

/// What a successful export wrote, printed as the closing report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub png_path: PathBuf,
    pub png_size: u32,
    pub ico_path: PathBuf,
    pub ico_sizes: Vec<u32>,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Icon files created successfully!")?;
        writeln!(f, "  - {} (multi-resolution ICO)", self.ico_path.display())?;
        writeln!(
            f,
            "  - {} ({}x{} PNG)",
            self.png_path.display(),
            self.png_size,
            self.png_size
        )?;
        writeln!(f, "Number of sizes: {}", self.ico_sizes.len())?;
        write!(f, "Sizes included: {:?}", self.ico_sizes)
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Render a single icon at `size` and write it as PNG, replacing any existing file.
pub fn export_png(path: &Path, size: u32) -> Result<()> {
    let size = validate_size(size)?;
    info!("Creating {}x{} PNG icon...", size, size);
    let img = render(size);

    ensure_parent(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    info!("PNG icon created: {}", path.display());
    Ok(())
}

/// Render one frame per size and write them all into a single ICO file.
///
/// Sizes are validated, sorted ascending and de-duplicated first; the
/// returned list is the frame order actually written.
pub fn export_ico(path: &Path, sizes: &[u32]) -> Result<Vec<u32>> {
    let sizes = icon_dir::frame_sizes(sizes)?;
    info!("Generating icon at multiple resolutions...");

    let frames: Vec<_> = sizes
        .iter()
        .map(|&size| {
            info!("  Creating {}x{} icon...", size, size);
            render(size)
        })
        .collect();

    info!("Saving ICO file to {}...", path.display());
    let dir = icon_dir::build_icon_dir(frames).map_err(|e| IconError::io(path, e))?;
    debug!("Encoded {} ICO entries", dir.entries().len());

    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    icon_dir::write_icon_dir(&dir, BufWriter::new(file)).map_err(|e| IconError::io(path, e))?;
    info!("Successfully created {}", path.display());
    Ok(sizes)
}

/// Write the PNG, then the ICO. A PNG already on disk is kept if the ICO fails.
pub fn export_all(config: &ExportConfig) -> Result<ExportSummary> {
    // Reject bad sizes before touching the filesystem.
    validate_size(config.png_size)?;
    icon_dir::frame_sizes(&config.ico_sizes)?;

    export_png(&config.png_path, config.png_size)?;
    let ico_sizes = export_ico(&config.ico_path, &config.ico_sizes)?;

    Ok(ExportSummary {
        png_path: config.png_path.clone(),
        png_size: config.png_size,
        ico_path: config.ico_path.clone(),
        ico_sizes,
    })
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use ico::IconDir;
    use image::ColorType;

    use super::*;

    fn read_ico(path: &Path) -> IconDir {
        IconDir::read(BufReader::new(File::open(path).unwrap())).unwrap()
    }

    #[test]
    fn test_export_png_decodes_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.png");
        export_png(&path, 48).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (48, 48));
        assert_eq!(img.color(), ColorType::Rgba8);
        assert_eq!(img.to_rgba8(), render(48));
    }

    #[test]
    fn test_export_png_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.png");
        std::fs::write(&path, b"stale").unwrap();
        export_png(&path, 24).unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 24);
    }

    #[test]
    fn test_export_png_not_bound_by_ico_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("large.png");
        export_png(&path, 320).unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 320);

        assert!(matches!(
            export_png(&dir.path().join("empty.png"), 0),
            Err(IconError::InvalidSize(0))
        ));
        assert!(!dir.path().join("empty.png").exists());
    }

    #[test]
    fn test_export_ico_has_all_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.ico");
        let sizes = [16, 24, 32, 48, 256];
        assert_eq!(export_ico(&path, &sizes).unwrap(), sizes.to_vec());

        let icon = read_ico(&path);
        assert_eq!(icon.entries().len(), 5);
        for (entry, &size) in icon.entries().iter().zip(&sizes) {
            assert_eq!((entry.width(), entry.height()), (size, size));
            let frame = entry.decode().unwrap();
            assert_eq!((frame.width(), frame.height()), (size, size));
        }
    }

    #[test]
    fn test_export_ico_orders_smallest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.ico");
        export_ico(&path, &[48, 16, 32]).unwrap();

        let widths: Vec<u32> = read_ico(&path).entries().iter().map(|e| e.width()).collect();
        assert_eq!(widths, vec![16, 32, 48]);
    }

    #[test]
    fn test_export_all_on_clean_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig::default().rooted_at(dir.path());
        let summary = export_all(&config).unwrap();

        let src = dir.path().join("src");
        let mut created: Vec<_> = std::fs::read_dir(&src)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        created.sort();
        assert_eq!(created, vec!["app.ico", "app.png"]);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        assert_eq!(image::open(src.join("app.png")).unwrap().width(), 48);
        assert_eq!(read_ico(&src.join("app.ico")).entries().len(), 5);

        let report = summary.to_string();
        assert!(report.contains("Sizes included: [16, 24, 32, 48, 256]"));
        assert!(report.contains("Number of sizes: 5"));
        assert!(report.contains("(48x48 PNG)"));
    }

    #[test]
    fn test_export_all_rejects_bad_sizes_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            ico_sizes: vec![16, 300],
            ..ExportConfig::default()
        }
        .rooted_at(dir.path());

        assert!(matches!(
            export_all(&config),
            Err(IconError::IcoFrameSize(300))
        ));
        assert!(!config.png_path.exists());
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_png_kept_when_ico_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the ICO file should go makes File::create fail.
        let ico_path = dir.path().join("app.ico");
        std::fs::create_dir(&ico_path).unwrap();
        let config = ExportConfig {
            png_path: dir.path().join("app.png"),
            ico_path,
            ..ExportConfig::default()
        };

        assert!(matches!(export_all(&config), Err(IconError::Io { .. })));
        assert!(config.png_path.exists());
    }
}
