use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::application::dto::pins::PinDto;
use crate::application::ports::image_store::ImageStore;
use crate::domain::pins::pin::Pin;

/// 16 random bytes rendered as 32 lowercase hex chars; used as the object key
/// for every uploaded image.
pub fn random_image_key() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

pub async fn with_signed_url<S: ImageStore + ?Sized>(
    images: &S,
    pin: Pin,
) -> anyhow::Result<PinDto> {
    let image_url = images.signed_url(&pin.image_key).await?;
    Ok(PinDto {
        id: pin.id,
        owner_id: pin.owner_id,
        title: pin.title,
        description: pin.description,
        tags: pin.tags,
        image_url,
        content_hash: pin.content_hash,
        created_at: pin.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_keys_are_32_hex_chars() {
        let key = random_image_key();
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn image_keys_do_not_repeat() {
        assert_ne!(random_image_key(), random_image_key());
    }

    #[test]
    fn content_hash_is_sha256_hex() {
        let h = content_hash(b"hello");
        assert_eq!(
            h,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
