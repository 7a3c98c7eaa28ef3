//! Batch saving with collision-avoiding output names.
//!
//! Each processed image is written as `processed_<name>`; if that name is
//! taken, `_<N>` is inserted before the extension (N counting up from 1)
//! until a free name is found, so a run never overwrites existing files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use huebatch_core::{encode_image, ImagePair, OutputFormat};

/// Outcome of a batch save: everything written before the first failure,
/// plus the failure itself if one occurred.
#[derive(Debug, Default)]
pub struct SaveReport {
    /// Paths written, in batch order.
    pub saved: Vec<PathBuf>,
    /// The source path that failed and the reason, if the batch aborted.
    pub failed: Option<(PathBuf, String)>,
}

impl SaveReport {
    pub fn all_saved(&self) -> bool {
        self.failed.is_none()
    }
}

/// Save every pair's processed image into `out_dir`, sequentially.
///
/// The first failure aborts the remaining batch; everything already
/// written stays on disk and is listed in the report.
pub fn save_all(pairs: &[ImagePair], out_dir: &Path, jpeg_quality: u8) -> SaveReport {
    let mut report = SaveReport::default();

    for pair in pairs {
        match save_pair(pair, out_dir, jpeg_quality) {
            Ok(path) => {
                log::info!("saved {}", path.display());
                report.saved.push(path);
            }
            Err(e) => {
                log::error!("saving {} failed: {e:#}", pair.source.display());
                report.failed = Some((pair.source.clone(), format!("{e:#}")));
                break;
            }
        }
    }

    report
}

fn save_pair(pair: &ImagePair, out_dir: &Path, jpeg_quality: u8) -> Result<PathBuf> {
    let name = pair
        .file_name()
        .ok_or_else(|| anyhow!("source path has no file name: {}", pair.source.display()))?;
    let format = OutputFormat::for_file_name(name)
        .ok_or_else(|| anyhow!("unsupported output extension: {name}"))?;

    let bytes = encode_image(&pair.processed, format, jpeg_quality)?;
    let path = unique_target(out_dir, name);
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Build `processed_<stem><ext>` inside `out_dir`, inserting `_<N>` before
/// the extension while the name is already taken.
fn unique_target(out_dir: &Path, file_name: &str) -> PathBuf {
    let (stem, ext) = split_name(file_name);
    let mut path = out_dir.join(format!("processed_{stem}{ext}"));
    let mut counter = 1;
    while path.exists() {
        path = out_dir.join(format!("processed_{stem}_{counter}{ext}"));
        counter += 1;
    }
    path
}

/// Split a file name at its last dot; the extension keeps the dot.
fn split_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => file_name.split_at(idx),
        None => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huebatch_core::{decode_bytes, RgbaData};

    fn pair(name: &str, pixels: Vec<u8>) -> ImagePair {
        ImagePair::new(PathBuf::from(name), RgbaData::new(1, 1, pixels))
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("foo.png"), ("foo", ".png"));
        assert_eq!(split_name("archive.tar.jpeg"), ("archive.tar", ".jpeg"));
        assert_eq!(split_name("noext"), ("noext", ""));
    }

    #[test]
    fn test_save_writes_processed_name() {
        let dir = tempfile::tempdir().unwrap();
        let report = save_all(&[pair("foo.png", vec![1, 2, 3, 255])], dir.path(), 90);

        assert!(report.all_saved());
        assert_eq!(report.saved, vec![dir.path().join("processed_foo.png")]);
        assert!(dir.path().join("processed_foo.png").exists());
    }

    #[test]
    fn test_save_round_trips_png_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let pixels = vec![10, 20, 30, 128];
        save_all(&[pair("foo.png", pixels.clone())], dir.path(), 90);

        let bytes = fs::read(dir.path().join("processed_foo.png")).unwrap();
        assert_eq!(decode_bytes(&bytes).unwrap().pixels, pixels);
    }

    #[test]
    fn test_save_collision_appends_counter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("processed_foo.png"), b"occupied").unwrap();

        let report = save_all(&[pair("foo.png", vec![1, 2, 3, 255])], dir.path(), 90);
        assert_eq!(report.saved, vec![dir.path().join("processed_foo_1.png")]);

        // The pre-existing file is untouched.
        let kept = fs::read(dir.path().join("processed_foo.png")).unwrap();
        assert_eq!(kept, b"occupied");
    }

    #[test]
    fn test_save_collision_counter_increments() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("processed_foo.png"), b"a").unwrap();
        fs::write(dir.path().join("processed_foo_1.png"), b"b").unwrap();

        let report = save_all(&[pair("foo.png", vec![1, 2, 3, 255])], dir.path(), 90);
        assert_eq!(report.saved, vec![dir.path().join("processed_foo_2.png")]);
    }

    #[test]
    fn test_save_jpeg_flattens_alpha() {
        let dir = tempfile::tempdir().unwrap();
        save_all(&[pair("shot.jpg", vec![200, 100, 50, 7])], dir.path(), 90);

        let bytes = fs::read(dir.path().join("processed_shot.jpg")).unwrap();
        let decoded = decode_bytes(&bytes).unwrap();
        assert!(decoded.pixels.iter().skip(3).step_by(4).all(|&a| a == 255));
    }

    #[test]
    fn test_save_aborts_on_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = [
            pair("ok.png", vec![1, 2, 3, 255]),
            pair("bad.gif", vec![4, 5, 6, 255]),
            pair("never.png", vec![7, 8, 9, 255]),
        ];

        let report = save_all(&pairs, dir.path(), 90);
        assert_eq!(report.saved.len(), 1);
        let (failed_path, reason) = report.failed.as_ref().unwrap();
        assert!(failed_path.ends_with("bad.gif"));
        assert!(reason.contains("unsupported"));
        // The third pair is never attempted.
        assert!(!dir.path().join("processed_never.png").exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not_created");
        let report = save_all(&[pair("foo.png", vec![1, 2, 3, 255])], &missing, 90);

        assert!(report.saved.is_empty());
        assert!(report.failed.is_some());
    }
}
