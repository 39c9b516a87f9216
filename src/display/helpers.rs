use chrono::{DateTime, Utc};
use log::debug;
use reqwest::Client;

use crate::api;
use crate::display::models::{Activity, Config, Image, NewActivity};
use crate::display::slides::{Slide, SlideContent};
use crate::error::Result;

pub async fn get_images(http_client: &Client, config: &Config) -> Result<Vec<Image>> {
    let request_url = format!("{}/api/images", config.api_base_url);
    api::fetch_collection(http_client, &request_url).await
}

pub async fn get_activities(http_client: &Client, config: &Config) -> Result<Vec<Activity>> {
    let request_url = format!("{}/api/activities", config.api_base_url);
    api::fetch_collection(http_client, &request_url).await
}

pub async fn create_activity(
    http_client: &Client,
    config: &Config,
    activity: &NewActivity,
) -> Result<Activity> {
    let request_url = format!("{}/api/activities", config.api_base_url);
    api::submit_record(http_client, &request_url, activity).await
}

pub async fn delete_activity(http_client: &Client, config: &Config, id: &str) -> Result<()> {
    let request_url = format!("{}/api/activities/{}", config.api_base_url, id);
    api::delete_record(http_client, &request_url).await
}

pub fn log_all_activities(activities: &[Activity]) -> () {
    for activity in activities.iter() {
        debug!(
            "Got activity {} ({} - {}), year {:?}",
            activity.name, activity.start_date, activity.end_date, activity.year
        );
    }
}

/// "Jun 01, 2024" - the date format the old board rendered.
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_activity(activity: &Activity) -> String {
    format!(
        "  {}\n  {} - {}\n  {}",
        activity.name,
        format_display_date(&activity.start_date),
        format_display_date(&activity.end_date),
        activity.description
    )
}

/// Render one slide as the text block the console display shows.
pub fn format_slide(slide: &Slide) -> String {
    let rule = "=".repeat(56);
    match &slide.content {
        SlideContent::Image { url } => format!("{}\n[photo] {}\n{}", rule, url, rule),
        SlideContent::ActivityGroup { label, activities } => {
            let body = if activities.is_empty() {
                "  No Activity for now".to_string()
            } else {
                activities
                    .iter()
                    .map(format_activity)
                    .collect::<Vec<_>>()
                    .join("\n\n")
            };
            format!("{}\n{}\n\n{}\n{}", rule, label, body, rule)
        }
    }
}
