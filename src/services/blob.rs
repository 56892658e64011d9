//! Encrypted file storage for media payloads. Files are AES-256-CBC
//! encrypted at rest; the random 16-byte IV is prepended to the ciphertext.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::config;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const IV_LEN: usize = 16;
const KEY_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("blob storage key must be 32 bytes")]
    InvalidKey,

    #[error("blob {0} is corrupt")]
    Corrupt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct BlobService {
    root: PathBuf,
    key: [u8; KEY_LEN],
}

impl BlobService {
    pub fn new(root: impl Into<PathBuf>, key: &str) -> Result<Self, BlobError> {
        let key_bytes = key.as_bytes();
        if key_bytes.len() != KEY_LEN {
            return Err(BlobError::InvalidKey);
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(key_bytes);
        Ok(Self {
            root: root.into(),
            key,
        })
    }

    pub fn from_config() -> Result<Self, BlobError> {
        let cfg = &config::config().blob;
        Self::new(&cfg.store_path, &cfg.store_key)
    }

    /// Decode, encrypt and persist a base64 payload. Returns the generated
    /// blob name (`<digest>.<extension>`).
    pub async fn save_base64(
        &self,
        payload: &str,
        name: &str,
        extension: &str,
    ) -> Result<String, BlobError> {
        let bytes = BASE64.decode(payload)?;
        let blob_name = generate_blob_name(name, extension);
        let sealed = self.encrypt(&bytes);

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.root.join(&blob_name), sealed).await?;
        Ok(blob_name)
    }

    pub async fn load_bytes(&self, blob_name: &str) -> Result<Vec<u8>, BlobError> {
        let sealed = tokio::fs::read(self.root.join(blob_name)).await?;
        self.decrypt(&sealed)
            .ok_or_else(|| BlobError::Corrupt(blob_name.to_string()))
    }

    pub async fn load_base64(&self, blob_name: &str) -> Result<String, BlobError> {
        let bytes = self.load_bytes(blob_name).await?;
        Ok(BASE64.encode(bytes))
    }

    /// Remove a stored file; a missing file is not an error.
    pub async fn delete(&self, blob_name: &str) -> Result<(), BlobError> {
        match tokio::fs::remove_file(self.root.join(blob_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete every file in the store that no image or audio row references.
    /// Returns the number of files removed.
    pub async fn clean_unused(&self, pool: &PgPool) -> Result<usize, BlobError> {
        let referenced: Vec<(String,)> = sqlx::query_as(
            "SELECT blob_name FROM images UNION SELECT blob_name FROM audios",
        )
        .fetch_all(pool)
        .await?;
        let referenced: std::collections::HashSet<String> =
            referenced.into_iter().map(|(name,)| name).collect();

        let mut removed = 0usize;
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            // Nothing stored yet.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !referenced.contains(&file_name) {
                info!("Removing unused blob {}", file_name);
                tokio::fs::remove_file(entry.path()).await?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn encrypt(&self, bytes: &[u8]) -> Vec<u8> {
        let mut iv = [0u8; IV_LEN];
        rand::thread_rng().fill_bytes(&mut iv);

        // Key and IV lengths are checked at construction, so this cannot fail.
        let ciphertext = Aes256CbcEnc::new_from_slices(&self.key, &iv)
            .map(|enc| enc.encrypt_padded_vec_mut::<Pkcs7>(bytes))
            .unwrap_or_default();

        let mut sealed = Vec::with_capacity(IV_LEN + ciphertext.len());
        sealed.extend_from_slice(&iv);
        sealed.extend_from_slice(&ciphertext);
        sealed
    }

    fn decrypt(&self, sealed: &[u8]) -> Option<Vec<u8>> {
        if sealed.len() < IV_LEN {
            return None;
        }
        let (iv, ciphertext) = sealed.split_at(IV_LEN);
        Aes256CbcDec::new_from_slices(&self.key, iv)
            .ok()?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .ok()
    }
}

/// SHA-256 over the logical name plus a random salt, so identical uploads
/// never collide.
fn generate_blob_name(name: &str, extension: &str) -> String {
    let mut salt = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(salt);
    let digest = hasher.finalize();

    format!("{:x}.{}", digest, normalize_extension(extension))
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789abcdef0123456789abcdef";

    fn service(dir: &std::path::Path) -> BlobService {
        BlobService::new(dir, KEY).unwrap()
    }

    #[test]
    fn rejects_short_keys() {
        assert!(matches!(
            BlobService::new("/tmp", "short"),
            Err(BlobError::InvalidKey)
        ));
    }

    #[test]
    fn encrypt_decrypt_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let blob = service(dir.path());

        let plaintext = b"media bytes".to_vec();
        let sealed = blob.encrypt(&plaintext);
        assert_ne!(&sealed[IV_LEN..], plaintext.as_slice());
        assert_eq!(blob.decrypt(&sealed).unwrap(), plaintext);
    }

    #[test]
    fn same_input_gets_fresh_iv() {
        let dir = tempfile::tempdir().unwrap();
        let blob = service(dir.path());
        let sealed_a = blob.encrypt(b"data");
        let sealed_b = blob.encrypt(b"data");
        assert_ne!(sealed_a, sealed_b);
    }

    #[test]
    fn truncated_file_reports_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let blob = service(dir.path());
        assert!(blob.decrypt(&[0u8; 4]).is_none());
    }

    #[test]
    fn blob_names_carry_extension_and_differ() {
        let a = generate_blob_name("portrait", "PNG");
        let b = generate_blob_name("portrait", "PNG");
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn save_load_delete_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let blob = service(dir.path());

        let payload = BASE64.encode(b"picture bytes");
        let name = blob.save_base64(&payload, "portrait", "png").await.unwrap();

        // Stored file is not the plaintext.
        let on_disk = std::fs::read(dir.path().join(&name)).unwrap();
        assert_ne!(on_disk, b"picture bytes");

        let restored = blob.load_base64(&name).await.unwrap();
        assert_eq!(restored, payload);

        blob.delete(&name).await.unwrap();
        assert!(blob.load_bytes(&name).await.is_err());
        // Deleting again is fine.
        blob.delete(&name).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_base64_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blob = service(dir.path());
        let result = blob.save_base64("!!!", "x", "png").await;
        assert!(matches!(result, Err(BlobError::Base64(_))));
    }
}
