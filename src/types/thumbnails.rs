use serde::{Deserialize, Serialize};

/// Pixel sizes the thumbnail service can render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThumbnailSize {
    S30x30,
    S42x42,
    S50x50,
    S60x62,
    S75x75,
    S110x110,
    S140x140,
    #[default]
    S150x150,
    S160x100,
    S160x600,
    S250x250,
    S256x144,
    S300x250,
    S304x166,
    S384x216,
    S396x216,
    S420x420,
    S480x270,
    S512x512,
    S576x324,
    S700x700,
    S728x90,
    S768x432,
    S1200x80,
}

impl ThumbnailSize {
    /// Width and height in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::S30x30 => (30, 30),
            Self::S42x42 => (42, 42),
            Self::S50x50 => (50, 50),
            Self::S60x62 => (60, 62),
            Self::S75x75 => (75, 75),
            Self::S110x110 => (110, 110),
            Self::S140x140 => (140, 140),
            Self::S150x150 => (150, 150),
            Self::S160x100 => (160, 100),
            Self::S160x600 => (160, 600),
            Self::S250x250 => (250, 250),
            Self::S256x144 => (256, 144),
            Self::S300x250 => (300, 250),
            Self::S304x166 => (304, 166),
            Self::S384x216 => (384, 216),
            Self::S396x216 => (396, 216),
            Self::S420x420 => (420, 420),
            Self::S480x270 => (480, 270),
            Self::S512x512 => (512, 512),
            Self::S576x324 => (576, 324),
            Self::S700x700 => (700, 700),
            Self::S728x90 => (728, 90),
            Self::S768x432 => (768, 432),
            Self::S1200x80 => (1200, 80),
        }
    }
}

/// What kind of asset a thumbnail id refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThumbnailType {
    Avatar,
    #[default]
    AvatarHeadshot,
    Asset,
    GameIcon,
    GameThumbnail,
}
