//! Thumbnail sources for grid entries and the viewer

use crate::catalog::MediaType;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::LazyLock;

/// Placeholder artwork for PDFs, which have no cheap raster preview
const PDF_PLACEHOLDER_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='800' height='600'>\
<defs><linearGradient id='g' x1='0' x2='1'>\
<stop offset='0' stop-color='#0ea5b7'/><stop offset='1' stop-color='#a78bfa'/>\
</linearGradient></defs>\
<rect width='100%' height='100%' fill='#0b1220'/>\
<rect x='120' y='80' width='560' height='440' rx='12' fill='url(#g)' opacity='0.2' stroke='#334155'/>\
<text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' font-family='sans-serif' \
font-size='48' fill='#e5e7eb'>PDF</text></svg>";

static PDF_PLACEHOLDER_URI: LazyLock<String> =
    LazyLock::new(|| format!("data:image/svg+xml;base64,{}", STANDARD.encode(PDF_PLACEHOLDER_SVG)));

/// Raw SVG markup of the PDF placeholder
#[must_use]
pub const fn pdf_placeholder_svg() -> &'static str {
    PDF_PLACEHOLDER_SVG
}

/// `data:` URI embedding the PDF placeholder
#[must_use]
pub fn pdf_placeholder_uri() -> &'static str {
    PDF_PLACEHOLDER_URI.as_str()
}

/// Where a grid entry's thumbnail comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    /// The asset itself (images)
    Asset(String),
    /// Generated placeholder graphic (PDFs)
    Placeholder(String),
}

impl Thumbnail {
    /// Thumbnail for an asset of `media_type` located at `asset_url`
    #[must_use]
    pub fn for_asset(media_type: MediaType, asset_url: &str) -> Self {
        match media_type {
            MediaType::Image => Self::Asset(asset_url.to_string()),
            MediaType::Pdf => Self::Placeholder(pdf_placeholder_uri().to_string()),
        }
    }

    /// Image source string
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Asset(src) | Self::Placeholder(src) => src,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_thumbnail_is_asset() {
        let thumb = Thumbnail::for_asset(MediaType::Image, "Trips/a.jpg");
        assert_eq!(thumb, Thumbnail::Asset("Trips/a.jpg".into()));
        assert_eq!(thumb.src(), "Trips/a.jpg");
    }

    #[test]
    fn test_pdf_thumbnail_is_placeholder() {
        let thumb = Thumbnail::for_asset(MediaType::Pdf, "Docs/a.pdf");
        assert!(matches!(thumb, Thumbnail::Placeholder(_)));
        assert!(thumb.src().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_placeholder_uri_decodes_to_svg() {
        let encoded = pdf_placeholder_uri()
            .strip_prefix("data:image/svg+xml;base64,")
            .unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), pdf_placeholder_svg());
        assert!(pdf_placeholder_svg().contains(">PDF<"));
    }
}
