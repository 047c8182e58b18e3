//! Probe for site-relative images served from a local public directory.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use percent_encoding::percent_decode_str;
use tokio::fs;
use tracing::debug;

use crate::domain::entities::BasePath;
use crate::domain::errors::LoadFailureReason;
use crate::domain::ports::{ImageInfo, ImageProbePort};

use super::decode::decode_image;

/// Reads site-relative images from the directory the site is served from.
#[derive(Debug, Clone)]
pub struct LocalImageProbe {
    public_dir: PathBuf,
    base: BasePath,
}

impl LocalImageProbe {
    /// Creates a probe rooted at `public_dir`; `base` is stripped from urls.
    #[must_use]
    pub fn new(public_dir: impl Into<PathBuf>, base: BasePath) -> Self {
        Self {
            public_dir: public_dir.into(),
            base,
        }
    }

    /// Returns the public directory.
    #[must_use]
    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Maps a site-relative url to a file under the public directory.
    ///
    /// # Errors
    /// Returns `InvalidUrl` for urls that are not site-relative or that try to
    /// leave the public directory.
    pub fn file_path(&self, url: &str) -> Result<PathBuf, LoadFailureReason> {
        if !url.starts_with('/') {
            return Err(LoadFailureReason::invalid_url(format!(
                "not a site-relative url: {url}"
            )));
        }

        let path = url.split(['?', '#']).next().unwrap_or(url);
        let relative = path
            .strip_prefix(self.base.as_str())
            .unwrap_or_else(|| path.trim_start_matches('/'));

        let escapes = || {
            LoadFailureReason::invalid_url(format!("path escapes public directory: {url}"))
        };

        let mut file = self.public_dir.clone();
        for segment in relative.split('/') {
            let segment = percent_decode_str(segment)
                .decode_utf8()
                .map_err(|e| LoadFailureReason::invalid_url(format!("{url}: {e}")))?;

            match &*segment {
                "" | "." => {}
                ".." => return Err(escapes()),
                name if name.contains(['/', '\\']) => return Err(escapes()),
                name => {
                    if !matches!(Path::new(name).components().next(), Some(Component::Normal(_))) {
                        return Err(escapes());
                    }
                    file.push(name);
                }
            }
        }

        Ok(file)
    }
}

#[async_trait]
impl ImageProbePort for LocalImageProbe {
    async fn probe(&self, url: &str) -> Result<ImageInfo, LoadFailureReason> {
        let path = self.file_path(url)?;
        debug!(url = %url, path = %path.display(), "Reading local image");

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadFailureReason::NotFound);
            }
            Err(e) => return Err(LoadFailureReason::Io(e.to_string())),
        };

        decode_image(Bytes::from(bytes)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::image::decode::fixtures::png_bytes;
    use tempfile::TempDir;
    use test_case::test_case;

    fn public_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        std::fs::create_dir_all(dir.path().join("images/webcam"))?;
        std::fs::write(dir.path().join("images/webcam/harbor.jpg"), png_bytes(3, 2))?;
        std::fs::write(dir.path().join("images/webcam/broken.jpg"), b"not an image")?;
        std::fs::write(dir.path().join("images/webcam/north pier.jpg"), png_bytes(4, 4))?;
        Ok(dir)
    }

    #[test_case("/", "/images/a.jpg", "images/a.jpg" ; "root_base")]
    #[test_case("/app/", "/app/images/a.jpg", "images/a.jpg" ; "strips_base")]
    #[test_case("/app/", "/images/a.jpg", "images/a.jpg" ; "outside_base")]
    #[test_case("/", "/images/a.jpg?t=12#top", "images/a.jpg" ; "drops_query")]
    #[test_case("/", "/images/my%20cam.jpg", "images/my cam.jpg" ; "decodes_space")]
    #[test_case("/app/", "/app/images/caf%C3%A9.jpg", "images/café.jpg" ; "decodes_utf8")]
    fn test_file_path(base: &str, url: &str, expected: &str) {
        let probe = LocalImageProbe::new("/srv/www", BasePath::new(base));
        assert_eq!(
            probe.file_path(url),
            Ok(PathBuf::from("/srv/www").join(expected))
        );
    }

    #[test_case("/../etc/passwd" ; "parent_dir")]
    #[test_case("/images/../../secret.jpg" ; "nested_parent")]
    #[test_case("https://example.com/a.jpg" ; "absolute_url")]
    #[test_case("/images/%2e%2e/%2E%2E/secret.jpg" ; "encoded_parent")]
    #[test_case("/images/..%2f..%2fsecret.jpg" ; "encoded_slash")]
    #[test_case("/images/%FF.jpg" ; "invalid_utf8")]
    fn test_file_path_rejected(url: &str) {
        let probe = LocalImageProbe::new("/srv/www", BasePath::root());
        assert!(matches!(
            probe.file_path(url),
            Err(LoadFailureReason::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_probe_existing_image() -> Result<(), Box<dyn std::error::Error>> {
        let dir = public_dir()?;
        let probe = LocalImageProbe::new(dir.path(), BasePath::root());

        let info = probe.probe("/images/webcam/harbor.jpg?t=5").await?;
        assert_eq!((info.width, info.height), (3, 2));
        Ok(())
    }

    #[tokio::test]
    async fn test_probe_encoded_file_name() -> Result<(), Box<dyn std::error::Error>> {
        let dir = public_dir()?;
        let probe = LocalImageProbe::new(dir.path(), BasePath::root());

        let info = probe.probe("/images/webcam/north%20pier.jpg").await?;
        assert_eq!((info.width, info.height), (4, 4));
        Ok(())
    }

    #[tokio::test]
    async fn test_probe_missing_image() -> Result<(), Box<dyn std::error::Error>> {
        let dir = public_dir()?;
        let probe = LocalImageProbe::new(dir.path(), BasePath::root());

        let result = probe.probe("/images/webcam/nowhere.jpg").await;
        assert_eq!(result, Err(LoadFailureReason::NotFound));
        Ok(())
    }

    #[tokio::test]
    async fn test_probe_corrupt_image() -> Result<(), Box<dyn std::error::Error>> {
        let dir = public_dir()?;
        let probe = LocalImageProbe::new(dir.path(), BasePath::root());

        let result = probe.probe("/images/webcam/broken.jpg").await;
        assert!(matches!(result, Err(LoadFailureReason::Decode(_))));
        Ok(())
    }
}
