use futures::future;
use log::info;
use reqwest::Client;

use crate::display::helpers::{get_activities, get_images, log_all_activities};
use crate::display::models::{Activity, Config, Image};
use crate::error::Result;

/// A trait, necessary for every entity that will be used for getting the
/// content shown on the board.
#[allow(async_fn_in_trait)]
pub trait BoardGetter {
    async fn get_board(&self, config: &Config) -> Result<(Vec<Image>, Vec<Activity>)>;
}

/// Allows to use Client for getting board content via requests to the backend.
impl BoardGetter for Client {
    async fn get_board(&self, config: &Config) -> Result<(Vec<Image>, Vec<Activity>)> {
        /* The two collections are independent; fetch both at once */
        let (images, activities) =
            future::try_join(get_images(self, config), get_activities(self, config)).await?;
        info!(
            "Collected {} images and {} activities",
            images.len(),
            activities.len()
        );
        log_all_activities(&activities);
        Ok((images, activities))
    }
}
