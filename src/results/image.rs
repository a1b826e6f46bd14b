//! Saving a result's image to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

use super::SavedResult;

/// Timeout for image downloads.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads result images over HTTP, or copies them when the URL is a
/// local path.
pub struct ImageFetcher {
    client: reqwest::blocking::Client,
}

impl ImageFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch the bytes behind `url`.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if !is_remote(url) {
            return fs::read(url).with_context(|| format!("Failed to read {}", url));
        }

        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response from {}", url))?;
        Ok(bytes.to_vec())
    }

    /// Write the result's image into `out_dir` as `<title>.png`.
    ///
    /// The after image is preferred over the before image.
    pub fn save(&self, result: &SavedResult, out_dir: &Path) -> Result<PathBuf> {
        let Some(url) = result.image_url() else {
            bail!("Result '{}' has no image URL", result.title);
        };

        let bytes = self.fetch(url)?;
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create directory {:?}", out_dir))?;

        let path = out_dir.join(result.image_file_name());
        fs::write(&path, bytes).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::debug!("Saved image for {} to {:?}", result.id, path);
        Ok(path)
    }
}

fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{ResultFields, SavedResult};
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn result_with_images(before: &str, after: &str) -> SavedResult {
        let fields = ResultFields::new("Logo  A", "share")
            .with_images(before, after)
            .validate()
            .unwrap();
        SavedResult::new("r1", fields, 0)
    }

    fn fetcher() -> ImageFetcher {
        ImageFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn saves_after_image_under_title() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/after.png");
            then.status(200).body("png-bytes");
        });

        let temp = TempDir::new().unwrap();
        let result = result_with_images(&server.url("/before.png"), &server.url("/after.png"));
        let path = fetcher().save(&result, temp.path()).unwrap();

        mock.assert();
        assert_eq!(path.file_name().unwrap(), "Logo-A.png");
        assert_eq!(fs::read(&path).unwrap(), b"png-bytes");
    }

    #[test]
    fn falls_back_to_before_image() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/before.png");
            then.status(200).body("before");
        });

        let temp = TempDir::new().unwrap();
        let result = result_with_images(&server.url("/before.png"), "");
        fetcher().save(&result, temp.path()).unwrap();

        mock.assert();
    }

    #[test]
    fn http_error_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.png");
            then.status(404);
        });

        let temp = TempDir::new().unwrap();
        let result = result_with_images("", &server.url("/missing.png"));
        let err = fetcher().save(&result, temp.path()).unwrap_err();

        assert!(err.to_string().contains("404"), "unexpected error: {}", err);
        assert!(!temp.path().join("Logo-A.png").exists());
    }

    #[test]
    fn missing_url_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = result_with_images("", "");
        assert!(fetcher().save(&result, temp.path()).is_err());
    }

    #[test]
    fn copies_local_files() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("source.png");
        fs::write(&source, "local").unwrap();

        let result = result_with_images("", source.to_str().unwrap());
        let path = fetcher().save(&result, &temp.path().join("out")).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "local");
    }
}
