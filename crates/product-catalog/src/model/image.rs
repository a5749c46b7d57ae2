use serde::{Deserialize, Serialize};

/// Images shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BundledImage {
    Notebook,
    CadeiraGamer,
    Apple,
}

impl BundledImage {
    /// Every bundled image, in the order the product form offers them.
    pub const ALL: [BundledImage; 3] = [
        BundledImage::Notebook,
        BundledImage::CadeiraGamer,
        BundledImage::Apple,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BundledImage::Notebook => "Notebook",
            BundledImage::CadeiraGamer => "Cadeira Gamer",
            BundledImage::Apple => "Apple",
        }
    }

    /// Path the asset is served from.
    pub fn path(self) -> &'static str {
        match self {
            BundledImage::Notebook => "/assets/img/notebook.jpg",
            BundledImage::CadeiraGamer => "/assets/img/cadeira-gamer.jpg",
            BundledImage::Apple => "/assets/img/apple.jpg",
        }
    }
}

/// Where a product's picture comes from.
///
/// Both variants can be rendered as an image source through [`ImageSource::src`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    Asset(BundledImage),
    Url(String),
}

impl ImageSource {
    pub fn src(&self) -> &str {
        match self {
            ImageSource::Asset(image) => image.path(),
            ImageSource::Url(url) => url,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        ImageSource::Asset(BundledImage::ALL[0])
    }
}

impl From<BundledImage> for ImageSource {
    fn from(image: BundledImage) -> Self {
        ImageSource::Asset(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_src_for_both_variants() {
        assert_eq!(
            ImageSource::Asset(BundledImage::Apple).src(),
            "/assets/img/apple.jpg"
        );
        let url = ImageSource::Url("https://img.example.com/watch.png".into());
        assert_eq!(url.src(), "https://img.example.com/watch.png");
        assert!(url.is_url());
    }

    #[test]
    fn test_default_is_first_bundled_image() {
        assert_eq!(
            ImageSource::default(),
            ImageSource::Asset(BundledImage::Notebook)
        );
    }
}
