//! Upload execution: deterministic file naming, blob upload, row insert.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::blob::BlobStore;
use crate::metrics::{UPLOADS_TOTAL, UPLOAD_FILES_TOTAL};
use crate::resource::{NewResource, Resource, ResourceStore};

use super::types::{ResourceKind, UploadError, UploadForm, UploadedFile, ValidatedUpload};

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]").unwrap());

/// Build the stored file name for one attachment.
///
/// `{unit}_PastPaper_{year}_Sem{semester}_{id}.{ext}` for past papers,
/// `{unit}_Lesson_Week{week}_{id}.{ext}` for lesson notes. The 8-char uuid
/// suffix keeps repeated uploads of the same form distinct.
pub fn generate_file_name(upload: &ValidatedUpload, file: &UploadedFile) -> String {
    let safe_unit = UNSAFE_CHARS.replace_all(&upload.unit_name, "_");
    let unique_id: String = Uuid::new_v4().simple().to_string()[..8].to_string();
    let extension = file
        .name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_else(|| {
            file.content_type
                .rsplit('/')
                .next()
                .unwrap_or("bin")
                .to_string()
        });

    match upload.kind {
        ResourceKind::LessonNotes => {
            let week = upload.week_number.unwrap_or_default();
            format!("{safe_unit}_Lesson_Week{week}_{unique_id}.{extension}")
        }
        ResourceKind::PastPaper => {
            let year = upload.year_completed.unwrap_or_default();
            let semester = upload.semester.as_deref().unwrap_or_default();
            format!("{safe_unit}_PastPaper_{year}_Sem{semester}_{unique_id}.{extension}")
        }
    }
}

/// Validates a form, pushes each file into the blob store and inserts the
/// metadata rows. Rows are created unverified.
pub struct Uploader {
    blobs: Arc<dyn BlobStore>,
    resources: Arc<dyn ResourceStore>,
}

impl Uploader {
    pub fn new(blobs: Arc<dyn BlobStore>, resources: Arc<dyn ResourceStore>) -> Self {
        Self { blobs, resources }
    }

    /// Run the full upload: validate, store blobs, insert rows.
    ///
    /// Validation failures stop before anything is stored. A blob or
    /// database failure mid-batch leaves earlier files in place; the rows
    /// for them exist and remain unverified.
    pub async fn upload(&self, form: UploadForm) -> Result<Vec<Resource>, UploadError> {
        let validated = match form.validate() {
            Ok(validated) => validated,
            Err(issues) => {
                UPLOADS_TOTAL.with_label_values(&["validation_failed"]).inc();
                return Err(UploadError::Validation(issues));
            }
        };

        let mut created = Vec::with_capacity(validated.files.len());
        for file in &validated.files {
            let file_name = generate_file_name(&validated, file);
            let file_path = format!("{}/{}", validated.kind.as_str(), file_name);

            if let Err(e) = self.blobs.upload(&file_path, &file.bytes).await {
                warn!("Blob upload failed for {}: {}", file_path, e);
                UPLOADS_TOTAL.with_label_values(&["storage_failed"]).inc();
                return Err(e.into());
            }

            let resource = self.resources.insert(&NewResource {
                unit_name: validated.unit_name.clone(),
                resource_type: validated.kind.as_str().to_string(),
                file_name: file_name.clone(),
                file_path: file_path.clone(),
                file_size: file.size(),
                file_type: file.content_type.clone(),
                public_url: self.blobs.public_url(&file_path),
                year_completed: validated.year_completed,
                year_of_candidates: validated.year_of_candidates.clone(),
                semester: validated.semester.clone(),
                week_number: validated.week_number,
            })?;

            info!(
                "Stored resource {} ({}, {} bytes)",
                resource.id, file_path, resource.file_size
            );
            UPLOAD_FILES_TOTAL.inc();
            created.push(resource);
        }

        UPLOADS_TOTAL.with_label_values(&["success"]).inc();
        Ok(created)
    }
}
