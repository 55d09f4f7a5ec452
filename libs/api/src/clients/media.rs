use anyhow::Context;
use aws_sdk_s3::primitives::ByteStream;

/// Media-host client. Uploaded objects are publicly reachable under the
/// configured base URL.
#[derive(Clone, Debug)]
pub struct Client {
    s3: aws_sdk_s3::Client,
    bucket: String,
    public_url: String,
}

impl Client {
    pub fn new(
        s3: aws_sdk_s3::Client,
        bucket: String,
        public_url: String,
    ) -> Self {
        Self {
            s3,
            bucket,
            public_url,
        }
    }

    /// Uploads image bytes and returns the public URL of the stored object.
    pub async fn upload_image(
        &self,
        key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> anyhow::Result<String> {
        self.s3
            .put_object()
            .bucket(&self.bucket)
            .content_type(content_type)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .context("failed to put object")?;

        Ok(format!("{}/{}", self.public_url, key))
    }
}
