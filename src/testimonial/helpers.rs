use log::debug;
use reqwest::Client;

use crate::api;
use crate::error::{AppError, Result};
use crate::testimonial::models::{Config, NewTestimonial, Testimonial, TestimonialDraft};

/* the deployed backend spells its testimonial routes "testinomial" */

pub async fn get_testimonials(http_client: &Client, config: &Config) -> Result<Vec<Testimonial>> {
    let request_url = format!("{}/api/testinomial", config.api_base_url);
    api::fetch_collection(http_client, &request_url).await
}

pub async fn submit_testimonial(
    http_client: &Client,
    config: &Config,
    record: &NewTestimonial,
) -> Result<Testimonial> {
    let request_url = format!("{}/api/testinomial", config.api_base_url);
    api::submit_record(http_client, &request_url, record).await
}

/// The free-tier backend sleeps between visits; poke it before the real
/// calls. Failures only get logged.
pub async fn wake_backend(http_client: &Client, config: &Config) -> () {
    match http_client.get(&config.api_base_url).send().await {
        Ok(response) => debug!("Backend awake, status {}", response.status()),
        Err(err) => debug!("Wake-up call failed: {}", err),
    }
}

/// Required-field check, nothing more. Runs before any network call.
pub fn validate_draft(draft: &TestimonialDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::Validation("name"));
    }
    if draft.branch.trim().is_empty() {
        return Err(AppError::Validation("branch"));
    }
    if draft.roll_no.trim().is_empty() {
        return Err(AppError::Validation("roll_no"));
    }
    if draft.mentor.trim().is_empty() {
        return Err(AppError::Validation("mentor"));
    }
    if draft.message.trim().is_empty() {
        return Err(AppError::Validation("message"));
    }
    Ok(())
}

pub fn format_testimonial(testimonial: &Testimonial) -> String {
    let mut block = format!(
        "{} ({})\n  Roll No: {}\n  Mentor: {}\n  {}\n",
        testimonial.name,
        testimonial.branch,
        testimonial.roll_no,
        testimonial.mentor,
        testimonial.message
    );
    if let Some(remark) = &testimonial.remark {
        block.push_str(&format!("  Remark: {}\n", remark));
    }
    block.push_str(&format!("  Photo: {}\n", testimonial.photo));
    block
}
