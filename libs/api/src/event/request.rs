use axum::extract::multipart::{Multipart, MultipartError};

use crate::ApiError;

pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    /// Extension for the stored object key, falling back to the
    /// content-type subtype when the upload has no usable file name.
    pub fn extension(&self) -> String {
        if let Some((_, ext)) = self.file_name.rsplit_once('.') {
            if !ext.is_empty() {
                return ext.to_lowercase();
            }
        }

        self.content_type
            .strip_prefix("image/")
            .unwrap_or("bin")
            .to_string()
    }
}

/// Explicit schema for the event creation form. Every field is required;
/// `tags` and `agenda` arrive as JSON-encoded string arrays inside the
/// multipart body.
pub struct CreateEventForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: String,
    pub tags: Vec<String>,
    pub agenda: Vec<String>,
    pub image: ImageFile,
}

impl CreateEventForm {
    pub async fn from_multipart(
        mut multipart: Multipart,
    ) -> Result<Self, ApiError> {
        let mut title = None;
        let mut description = None;
        let mut location = None;
        let mut date = None;
        let mut tags = None;
        let mut agenda = None;
        let mut image = None;

        while let Some(field) =
            multipart.next_field().await.map_err(malformed)?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "image" => {
                    let file_name =
                        field.file_name().unwrap_or("upload").to_string();
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field.bytes().await.map_err(malformed)?;
                    image = Some(ImageFile {
                        file_name,
                        content_type,
                        data: data.to_vec(),
                    });
                }
                "tags" => {
                    let raw = field.text().await.map_err(malformed)?;
                    tags = Some(string_array(&raw, "tags")?);
                }
                "agenda" => {
                    let raw = field.text().await.map_err(malformed)?;
                    agenda = Some(string_array(&raw, "agenda")?);
                }
                "title" => {
                    title = Some(field.text().await.map_err(malformed)?);
                }
                "description" => {
                    description =
                        Some(field.text().await.map_err(malformed)?);
                }
                "location" => {
                    location = Some(field.text().await.map_err(malformed)?);
                }
                "date" => {
                    date = Some(field.text().await.map_err(malformed)?);
                }
                // unknown fields are dropped instead of stored blindly
                _ => {}
            }
        }

        let Some(image) = image else {
            return Err(ApiError::FormError(
                "Image file is required".to_string(),
            ));
        };

        Ok(Self {
            title: required(title, "title")?,
            description: required(description, "description")?,
            location: required(location, "location")?,
            date: required(date, "date")?,
            tags: required(tags, "tags")?,
            agenda: required(agenda, "agenda")?,
            image,
        })
    }
}

fn malformed(e: MultipartError) -> ApiError {
    ApiError::FormError(format!("Malformed multipart form: {}", e))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| {
        ApiError::FormError(format!("Field \"{}\" is required", name))
    })
}

fn string_array(raw: &str, name: &str) -> Result<Vec<String>, ApiError> {
    serde_json::from_str(raw).map_err(|_| {
        ApiError::FormError(format!(
            "Field \"{}\" must be a JSON array of strings",
            name
        ))
    })
}
