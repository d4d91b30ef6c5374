use std::time::Duration;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::operation::create_bucket::CreateBucketError;
use aws_sdk_s3::operation::head_bucket::HeadBucketError;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::{Client, error::SdkError};

use crate::application::ports::image_store::ImageStore;
use crate::bootstrap::config::Config;

pub struct S3ImageStore {
    client: Client,
    bucket: String,
    signed_url_expires: Duration,
}

impl S3ImageStore {
    pub async fn new(cfg: &Config) -> anyhow::Result<Self> {
        let bucket = cfg.s3_bucket.clone();

        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &cfg.s3_region {
            loader = loader.region(Region::new(region.clone()));
        }

        let shared_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared_config);

        if let (Some(access), Some(secret)) = (&cfg.s3_access_key, &cfg.s3_secret_key) {
            let creds = Credentials::new(
                access.clone(),
                secret.clone(),
                None,
                None,
                "pinboard-s3-static",
            );
            builder = builder.credentials_provider(creds);
        }

        if let Some(endpoint) = &cfg.s3_endpoint {
            builder = builder.endpoint_url(endpoint.clone());
        }

        if cfg.s3_use_path_style {
            builder = builder.force_path_style(true);
        }

        let client = Client::from_conf(builder.build());

        ensure_bucket(&client, &bucket).await?;

        Ok(Self {
            client,
            bucket,
            signed_url_expires: Duration::from_secs(cfg.signed_url_expires_secs),
        })
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn put_image(
        &self,
        key: &str,
        bytes: &[u8],
        content_type: Option<&str>,
    ) -> anyhow::Result<()> {
        let mut req = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes.to_vec()));
        if let Some(ct) = content_type {
            req = req.content_type(ct);
        }
        req.send()
            .await
            .with_context(|| format!("failed to upload object {key}"))?;
        Ok(())
    }

    async fn signed_url(&self, key: &str) -> anyhow::Result<String> {
        let presigning = PresigningConfig::expires_in(self.signed_url_expires)
            .map_err(|e| anyhow!(e.to_string()))?;
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .with_context(|| format!("failed to presign object {key}"))?;
        Ok(presigned.uri().to_string())
    }

    async fn delete_image(&self, key: &str) -> anyhow::Result<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .with_context(|| format!("failed to delete object {key}"))?;
        Ok(())
    }
}

async fn ensure_bucket(client: &Client, bucket: &str) -> anyhow::Result<()> {
    match client.head_bucket().bucket(bucket).send().await {
        Ok(_) => return Ok(()),
        Err(SdkError::ServiceError(service_err)) => {
            if !matches!(service_err.err(), HeadBucketError::NotFound(_)) {
                return Err(anyhow!(service_err.err().to_string()));
            }
        }
        Err(err) => return Err(anyhow!(err.to_string())),
    }

    match client.create_bucket().bucket(bucket).send().await {
        Ok(_) => Ok(()),
        Err(SdkError::ServiceError(service_err)) => match service_err.err() {
            CreateBucketError::BucketAlreadyOwnedByYou(_) => Ok(()),
            CreateBucketError::BucketAlreadyExists(_) => Ok(()),
            other => Err(anyhow!(other.to_string())),
        },
        Err(err) => Err(anyhow!(err.to_string())),
    }
}
