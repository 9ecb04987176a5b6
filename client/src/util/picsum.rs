//! Seed-addressed placeholder image URLs.
//!
//! The image host returns the same picture for the same seed and size, so
//! every image on the page is stable across reloads without shipping assets.

#[cfg(test)]
#[path = "picsum_test.rs"]
mod picsum_test;

pub const PICSUM_BASE_URL: &str = "https://picsum.photos";

/// Requested size and treatment of a placeholder image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    pub blur: Option<u8>,
}

impl ImageSpec {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height, blur: None }
    }

    #[must_use]
    pub const fn blurred(self, amount: u8) -> Self {
        Self { blur: Some(amount), ..self }
    }
}

pub const AVATAR: ImageSpec = ImageSpec::new(400, 400);
pub const BANNER: ImageSpec = ImageSpec::new(1920, 600).blurred(2);
pub const UPDATE_THUMB: ImageSpec = ImageSpec::new(600, 400);
pub const ARTICLE_THUMB: ImageSpec = ImageSpec::new(400, 300);
pub const PORTFOLIO_TILE: ImageSpec = ImageSpec::new(500, 500);

/// Build the URL for `seed` at `size`.
pub fn seed_url(seed: &str, size: ImageSpec) -> String {
    let mut url = format!("{PICSUM_BASE_URL}/seed/{seed}/{}/{}", size.width, size.height);
    if let Some(blur) = size.blur {
        url.push_str(&format!("?blur={blur}"));
    }
    url
}
