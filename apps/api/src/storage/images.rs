//! Profile photo uploads. Size and content-type are validated before the
//! object store is touched, so an oversize payload never costs a network
//! round-trip. The store returns a stable public URL; assigning it to the
//! document is the caller's business.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

/// Upload cap, matching the limit the editor advertises to users.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

pub fn validate_image(content_type: &str, size: usize) -> Result<(), AppError> {
    if !content_type.starts_with("image/") {
        return Err(AppError::Validation(
            "Please upload an image file".to_string(),
        ));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(AppError::Validation(
            "Image size must be less than 2MB".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the bytes under the user's namespace and returns a publicly
    /// dereferenceable URL.
    async fn put_image(
        &self,
        user_id: Uuid,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, AppError>;
}

/// Validate-then-store. Validation failures never reach the store.
pub async fn upload_image(
    store: &dyn ImageStore,
    user_id: Uuid,
    content_type: &str,
    bytes: Bytes,
) -> Result<String, AppError> {
    validate_image(content_type, bytes.len())?;
    store.put_image(user_id, content_type, bytes).await
}

pub struct S3ImageStore {
    s3: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl S3ImageStore {
    pub fn new(s3: aws_sdk_s3::Client, bucket: String, endpoint: String) -> Self {
        Self {
            s3,
            bucket,
            endpoint,
        }
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn put_image(
        &self,
        user_id: Uuid,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<String, AppError> {
        let key = format!(
            "avatars/{user_id}/{}.{}",
            Uuid::new_v4(),
            extension_for(content_type)
        );
        self.s3
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Uploaded profile photo to s3://{}/{}", self.bucket, key);

        Ok(format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.bucket,
            key
        ))
    }
}

fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "img",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageStore for CountingStore {
        async fn put_image(
            &self,
            user_id: Uuid,
            _content_type: &str,
            _bytes: Bytes,
        ) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("https://cdn.example.com/avatars/{user_id}/x.png"))
        }
    }

    #[tokio::test]
    async fn test_oversize_upload_never_reaches_the_store() {
        let store = CountingStore {
            calls: AtomicUsize::new(0),
        };
        let bytes = Bytes::from(vec![0u8; MAX_IMAGE_BYTES + 1]);

        let result = upload_image(&store, Uuid::new_v4(), "image/png", bytes).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_image_content_type_is_rejected_up_front() {
        let store = CountingStore {
            calls: AtomicUsize::new(0),
        };
        let result =
            upload_image(&store, Uuid::new_v4(), "application/pdf", Bytes::from_static(b"x")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_upload_returns_url() {
        let store = CountingStore {
            calls: AtomicUsize::new(0),
        };
        let url = upload_image(&store, Uuid::new_v4(), "image/png", Bytes::from_static(b"png"))
            .await
            .unwrap();
        assert!(url.starts_with("https://"));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_exactly_two_megabytes_is_accepted() {
        assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES).is_ok());
        assert!(validate_image("image/jpeg", MAX_IMAGE_BYTES + 1).is_err());
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for("image/png"), "png");
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("image/tiff"), "img");
    }
}
