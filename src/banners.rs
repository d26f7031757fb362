// Promotional banners shown alongside the game catalog.

/// Banner image URLs, served from the static `/images` prefix.
pub const BANNERS: [&str; 3] = [
    "/images/banners/summer-sale.jpg",
    "/images/banners/new-releases.jpg",
    "/images/banners/retro-classics.jpg",
];

pub fn banners() -> &'static [&'static str] {
    &BANNERS
}
