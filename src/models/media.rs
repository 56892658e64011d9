use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;

/// Image row. The picture itself lives encrypted in blob storage under
/// `blob_name`; the row only carries metadata.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: i32,
    pub blob_name: String,
    pub mime_type: String,
    pub title: Option<String>,
    pub alt: Option<String>,
}

impl Entity for Image {
    const TABLE: &'static str = "images";
    const NAME: &'static str = "Image";

    fn id(&self) -> i32 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Audio {
    pub id: i32,
    pub blob_name: String,
    pub mime_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Entity for Audio {
    const TABLE: &'static str = "audios";
    const NAME: &'static str = "Audio";

    fn id(&self) -> i32 {
        self.id
    }
}

/// External video link (no blob storage involved).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Video {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub streetcode_id: i32,
}

impl Entity for Video {
    const TABLE: &'static str = "videos";
    const NAME: &'static str = "Video";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Artwork wrapping an image; linked to streetcodes through streetcode_arts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Art {
    pub id: i32,
    pub image_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Entity for Art {
    const TABLE: &'static str = "arts";
    const NAME: &'static str = "Art";

    fn id(&self) -> i32 {
        self.id
    }
}
