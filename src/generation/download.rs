//! Saving a generated logo to the host environment.
//!
//! The browser form hands the fetched bytes to the save dialog; here the
//! equivalent seam is the [`FileSink`] trait, with a directory-backed sink
//! for the CLI. Download failures are surfaced as a non-fatal UI error and
//! never move the generation state machine.
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::generation::client::{GenerationClient, UiPort};

/// Destination for downloaded logo bytes.
pub trait FileSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> AppResult<PathBuf>;
}

/// Sink that writes into a directory on disk.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        DirSink { dir: dir.as_ref().to_path_buf() }
    }
}

impl FileSink for DirSink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        let path = self.dir.join(filename);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}

/// Derive the download filename from the project name: trimmed, lowercased,
/// whitespace runs collapsed to hyphens, suffixed `-logo.png`.
pub fn logo_filename(project_name: &str) -> String {
    let slug = project_name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-logo.png", slug)
}

impl<U: UiPort> GenerationClient<U> {
    /// Fetch the displayed image and hand it to `sink` under the derived
    /// filename. Returns the saved path.
    pub async fn download(
        &mut self,
        image_url: &str,
        project_name: &str,
        sink: &mut dyn FileSink,
    ) -> AppResult<PathBuf> {
        let outcome = self.fetch_image(image_url).await
            .and_then(|bytes| sink.save(&logo_filename(project_name), &bytes));
        match outcome {
            Ok(path) => Ok(path),
            Err(err) => {
                tracing::error!("Download error: {:?}", err);
                self.ui_mut().show_error("Failed to download logo");
                Err(err)
            }
        }
    }

    async fn fetch_image(&self, image_url: &str) -> AppResult<Vec<u8>> {
        let response = self.http().get(image_url)
            .send()
            .await
            .map_err(AppError::HttpClient)?;
        if !response.status().is_success() {
            return Err(AppError::Generation(format!(
                "Failed to fetch image: {}",
                response.status()
            )));
        }
        response.bytes().await
            .map(|b| b.to_vec())
            .map_err(AppError::HttpClient)
    }
}
