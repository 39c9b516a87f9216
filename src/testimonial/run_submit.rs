use log::info;
use tokio::fs;

use crate::error::{AppError, Result};
use crate::testimonial::helpers::validate_draft;
use crate::testimonial::models::{Config, NewTestimonial, Testimonial, TestimonialDraft};
use crate::testimonial::photo_uploader::PhotoUploader;
use crate::testimonial::record_sender::RecordSender;

/// Run the submission pipeline: validate, upload the photo, submit the
/// composed record. A failed upload aborts the whole submission; no record
/// reaches the backend without a photo URL.
pub async fn run<PU: PhotoUploader, RS: RecordSender>(
    photo_uploader: &PU,
    record_sender: &RS,
    config: &Config,
    draft: TestimonialDraft,
) -> Result<Testimonial> {
    validate_draft(&draft)?;

    let bytes = fs::read(&draft.photo_path)
        .await
        .map_err(|source| AppError::Photo {
            path: draft.photo_path.clone(),
            source,
        })?;
    let file_name = draft
        .photo_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());
    let photo_url = photo_uploader
        .upload_photo(config, &file_name, bytes)
        .await?;
    info!("Photo stored at {}", photo_url);

    let record = NewTestimonial {
        name: draft.name,
        branch: draft.branch,
        roll_no: draft.roll_no,
        mentor: draft.mentor,
        message: draft.message,
        remark: draft.remark,
        photo: photo_url,
    };
    let created = record_sender.send_testimonial(config, &record).await?;
    info!("Testimonial {} submitted", created.id);
    Ok(created)
}
