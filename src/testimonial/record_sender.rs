use reqwest::Client;

use crate::error::Result;
use crate::testimonial::helpers::submit_testimonial;
use crate::testimonial::models::{Config, NewTestimonial, Testimonial};

/// A trait, necessary for every entity that will deliver the composed
/// testimonial to the backend.
#[allow(async_fn_in_trait)]
pub trait RecordSender {
    async fn send_testimonial(
        &self,
        config: &Config,
        record: &NewTestimonial,
    ) -> Result<Testimonial>;
}

/// Allows to use Client for delivering testimonials via the backend API.
impl RecordSender for Client {
    async fn send_testimonial(
        &self,
        config: &Config,
        record: &NewTestimonial,
    ) -> Result<Testimonial> {
        submit_testimonial(self, config, record).await
    }
}
