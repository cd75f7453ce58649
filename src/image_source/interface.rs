use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    Camera,
    Gallery,
}

/// A picked image on local storage. Each new pick replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub mime_type: String,
    pub size_bytes: u64,
    pub origin: ImageOrigin,
}

#[derive(Debug, Error)]
pub enum ImageSourceError {
    #[error("unsupported image uri {0:?}")]
    UnsupportedUri(String),

    #[error("cannot read image {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    NotAFile(PathBuf),
}

impl SelectedImage {
    /// Accepts `file://` URIs and plain paths.
    pub fn from_uri(uri: &str, origin: ImageOrigin) -> Result<Self, ImageSourceError> {
        let path = uri_to_path(uri)?;

        let metadata = std::fs::metadata(&path).map_err(|source| ImageSourceError::Unreadable {
            path: path.clone(),
            source,
        })?;

        if !metadata.is_file() {
            return Err(ImageSourceError::NotAFile(path));
        }

        Ok(Self {
            mime_type: mime_type_for(&path),
            size_bytes: metadata.len(),
            path,
            origin,
        })
    }
}

fn uri_to_path(uri: &str) -> Result<PathBuf, ImageSourceError> {
    match Url::parse(uri) {
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map_err(|_| ImageSourceError::UnsupportedUri(uri.to_string())),
        // single letter schemes are windows drive prefixes
        Ok(url) if url.scheme().len() > 1 => Err(ImageSourceError::UnsupportedUri(uri.to_string())),
        _ => Ok(PathBuf::from(uri)),
    }
}

fn mime_type_for(path: &Path) -> String {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| DEFAULT_MIME_TYPE.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerOptions {
    pub aspect: (u32, u32),
    pub quality: f32,
    pub allows_editing: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            aspect: (4, 3),
            quality: 1.0,
            allows_editing: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerAsset {
    pub uri: String,
}

/// What the platform picker hands back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerResponse {
    pub canceled: bool,
    pub assets: Option<Vec<PickerAsset>>,
}

impl PickerResponse {
    pub fn canceled() -> Self {
        Self {
            canceled: true,
            assets: None,
        }
    }

    pub fn picked(uri: &str) -> Self {
        Self {
            canceled: false,
            assets: Some(vec![PickerAsset {
                uri: uri.to_string(),
            }]),
        }
    }

    /// The first asset's uri, unless the pick was canceled or came back empty.
    pub fn first_uri(&self) -> Option<&str> {
        if self.canceled {
            return None;
        }
        self.assets
            .as_ref()
            .and_then(|assets| assets.first())
            .map(|asset| asset.uri.as_str())
    }
}

pub trait ImagePicker {
    fn launch_camera(
        &self,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>>;

    fn launch_gallery(
        &self,
        options: &PickerOptions,
    ) -> Result<PickerResponse, Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_uri() {
        assert_eq!(PickerResponse::picked("/a.jpg").first_uri(), Some("/a.jpg"));
        assert_eq!(PickerResponse::canceled().first_uri(), None);

        let empty = PickerResponse {
            canceled: false,
            assets: Some(vec![]),
        };
        assert_eq!(empty.first_uri(), None);

        let missing = PickerResponse {
            canceled: false,
            assets: None,
        };
        assert_eq!(missing.first_uri(), None);

        // canceled wins over a stray asset
        let canceled_with_asset = PickerResponse {
            canceled: true,
            assets: Some(vec![PickerAsset {
                uri: "/a.jpg".to_string(),
            }]),
        };
        assert_eq!(canceled_with_asset.first_uri(), None);
    }

    #[test]
    fn test_picker_response_from_json() {
        let response: PickerResponse =
            serde_json::from_str(r#"{"canceled": false, "assets": [{"uri": "file:///tmp/a.jpg"}]}"#)
                .unwrap();
        assert_eq!(response.first_uri(), Some("file:///tmp/a.jpg"));
    }

    #[test]
    fn test_default_options() {
        let options = PickerOptions::default();
        assert_eq!(options.aspect, (4, 3));
        assert_eq!(options.quality, 1.0);
        assert!(options.allows_editing);
    }

    #[test]
    fn test_mime_type_for() {
        assert_eq!(mime_type_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("a.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("a.unknown")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("no_extension")), "image/jpeg");
    }

    #[test]
    fn test_from_uri_rejects_remote_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.jpg");

        assert!(matches!(
            SelectedImage::from_uri("https://example.com/a.jpg", ImageOrigin::Gallery),
            Err(ImageSourceError::UnsupportedUri(_))
        ));
        assert!(matches!(
            SelectedImage::from_uri(missing.to_str().unwrap(), ImageOrigin::Gallery),
            Err(ImageSourceError::Unreadable { .. })
        ));
        assert!(matches!(
            SelectedImage::from_uri(dir.path().to_str().unwrap(), ImageOrigin::Gallery),
            Err(ImageSourceError::NotAFile(_))
        ));
    }

    #[test]
    fn test_from_file_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, [1u8, 2, 3, 4]).unwrap();
        let uri = Url::from_file_path(&path).unwrap();

        let image = SelectedImage::from_uri(uri.as_str(), ImageOrigin::Camera).unwrap();

        assert_eq!(image.path, path);
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.size_bytes, 4);
        assert_eq!(image.origin, ImageOrigin::Camera);
    }
}
