use serde::{Deserialize, Serialize};

use crate::models::{Art, Audio, Image, Video};

#[derive(Debug, Clone, Serialize)]
pub struct ImageDto {
    pub id: i32,
    pub blob_name: String,
    /// Decrypted payload; populated on single/by-streetcode reads.
    pub base64: Option<String>,
    pub mime_type: String,
    pub title: Option<String>,
    pub alt: Option<String>,
}

impl ImageDto {
    pub fn from_entity(image: Image, base64: Option<String>) -> Self {
        Self {
            id: image.id,
            blob_name: image.blob_name,
            base64,
            mime_type: image.mime_type,
            title: image.title,
            alt: image.alt,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateImageRequest {
    pub title: Option<String>,
    pub alt: Option<String>,
    pub base64: String,
    pub mime_type: String,
    pub extension: String,
    /// When present, the image is linked to the streetcode.
    pub streetcode_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AudioDto {
    pub id: i32,
    pub blob_name: String,
    pub base64: Option<String>,
    pub mime_type: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl AudioDto {
    pub fn from_entity(audio: Audio, base64: Option<String>) -> Self {
        Self {
            id: audio.id,
            blob_name: audio.blob_name,
            base64,
            mime_type: audio.mime_type,
            title: audio.title,
            description: audio.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAudioRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub base64: String,
    pub mime_type: String,
    pub extension: String,
    /// When present, the audio becomes the streetcode's narration track.
    pub streetcode_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDto {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub streetcode_id: i32,
}

impl From<Video> for VideoDto {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            title: v.title,
            description: v.description,
            url: v.url,
            streetcode_id: v.streetcode_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub streetcode_id: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub streetcode_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtDto {
    pub id: i32,
    pub image_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<Art> for ArtDto {
    fn from(a: Art) -> Self {
        Self {
            id: a.id,
            image_id: a.image_id,
            title: a.title,
            description: a.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtRequest {
    pub image_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub streetcode_id: i32,
}
