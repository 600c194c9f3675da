//! Certificate viewer: images are shown inline, anything else in a frame.

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    Image,
    Document,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateView {
    pub src: String,
    pub media: Media,
}

/// Lower-cased text after the last `.`; the whole path if there is none.
pub fn extension(path: &str) -> String {
    path.rsplit('.').next().unwrap_or_default().to_lowercase()
}

impl CertificateView {
    pub fn from_path(path: &str) -> Self {
        let media = if IMAGE_EXTENSIONS.contains(&extension(path).as_str()) {
            Media::Image
        } else {
            Media::Document
        };
        Self {
            src: path.to_string(),
            media,
        }
    }

    /// CSS `display` for the image element.
    pub fn image_display(&self) -> &'static str {
        match self.media {
            Media::Image => "block",
            Media::Document => "none",
        }
    }

    /// CSS `display` for the document frame.
    pub fn frame_display(&self) -> &'static str {
        match self.media {
            Media::Image => "none",
            Media::Document => "block",
        }
    }
}
