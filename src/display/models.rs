use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{command, Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// A model for describing ARGS of the board tool.
/// Consists of:
/// 1. Path to config.json, that contains the backend address and the display tuning table.
/// 2. The operation to perform: run the slideshow, or one of the admin actions on activities.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rotate photos and current activities on the attached display
    Run,
    /// Create a new activity
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_name = "YYYY-MM-DD")]
        start_date: NaiveDate,
        #[arg(long, value_name = "YYYY-MM-DD")]
        end_date: NaiveDate,
        #[arg(long)]
        description: String,
    },
    /// Delete an activity by its id
    Remove { id: String },
    /// Print every activity known to the backend
    List,
}

/// A model for describing configuration of the board tool.
/// Consists of:
/// 1. Base URL of the backend serving images and activities
/// 2. Display tuning table (per-slide durations and activity grouping)
#[derive(Debug, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Per-slide display durations and the activity grouping mode.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_image_slide_ms")]
    pub image_slide_ms: u64,
    #[serde(default = "default_activity_slide_ms")]
    pub activity_slide_ms: u64,
    #[serde(default)]
    pub grouping: Grouping,
}

fn default_image_slide_ms() -> u64 {
    3000
}

fn default_activity_slide_ms() -> u64 {
    6000
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            image_slide_ms: default_image_slide_ms(),
            activity_slide_ms: default_activity_slide_ms(),
            grouping: Grouping::default(),
        }
    }
}

/// How current activities are split into slides: one slide per study year,
/// or a single slide pooling everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    #[default]
    ByYear,
    Pooled,
}

/// A dated announcement with a display window and an optional study-year tag.
/// Start is assumed to be no later than end; the backend owns that invariant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub description: String,
    pub year: Option<u8>,
}

/// Payload for creating an activity. The admin form never tags a year;
/// year-tagged records arrive from elsewhere and are honoured on read.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(rename = "_id")]
    pub id: String,
    pub image_url: String,
}
