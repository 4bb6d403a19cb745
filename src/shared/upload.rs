use axum::extract::Multipart;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};

use crate::shared::error::{AppError, AppResult};

/// A file part pulled out of a multipart body, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Text fields and file parts of a multipart form, keyed by field name.
#[derive(Debug, Default)]
pub struct FormData {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, Vec<UploadedFile>>,
}

impl FormData {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = FormData::default();

        while let Some(field) = multipart.next_field().await? {
            let name = match field.name() {
                Some(name) => name.to_string(),
                None => continue,
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content = field.bytes().await?;
                    // Browsers send an empty part for an untouched file input.
                    if file_name.is_empty() && content.is_empty() {
                        continue;
                    }
                    form.files.entry(name).or_default().push(UploadedFile {
                        file_name,
                        content: content.to_vec(),
                    });
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn require_text(&self, name: &str) -> AppResult<String> {
        self.text(name)
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
    }

    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> AppResult<Option<T>> {
        match self.text(name).map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("{} must be a number", name))),
            None => Ok(None),
        }
    }

    pub fn require<T: std::str::FromStr>(&self, name: &str) -> AppResult<T> {
        self.parse(name)?
            .ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
    }

    pub fn take_files(&mut self, name: &str) -> Vec<UploadedFile> {
        self.files.remove(name).unwrap_or_default()
    }
}

/// Writes an upload under `dir` as `<unix-timestamp>-<basename>` and returns that file name.
pub async fn save_uploaded_file(dir: &Path, file: &UploadedFile) -> AppResult<String> {
    let base = Path::new(&file.file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest("Uploaded file has no name".to_string()))?;

    fs::create_dir_all(dir).await.map_err(|e| {
        AppError::InternalServerError(format!("failed to create upload directory: {}", e))
    })?;

    let file_name = format!("{}-{}", chrono::Utc::now().timestamp(), base);
    let path: PathBuf = dir.join(&file_name);

    let mut dst = fs::File::create(&path).await.map_err(|e| {
        AppError::InternalServerError(format!("failed to create destination file: {}", e))
    })?;
    dst.write_all(&file.content)
        .await
        .map_err(|e| AppError::InternalServerError(format!("failed to copy file: {}", e)))?;
    dst.flush()
        .await
        .map_err(|e| AppError::InternalServerError(format!("failed to copy file: {}", e)))?;

    tracing::debug!("Saved upload {}", path.display());
    Ok(file_name)
}
