use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{command, Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Branches offered by the submission form.
pub const BRANCHES: [&str; 9] = [
    "CSE", "CS", "IT", "CSIT", "CS-AI", "CS-AIML", "EEE", "ECE", "ME",
];

/// A model for describing ARGS of the testimonial tool.
/// Consists of:
/// 1. Path to config.json, that contains the backend address, the image host
///    endpoint and the listing passwords.
/// 2. The operation to perform: submit a testimonial or show the listing.
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
    /// Upload the photo and submit a testimonial
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long, value_parser = PossibleValuesParser::new(BRANCHES))]
        branch: String,
        #[arg(long)]
        roll_no: String,
        #[arg(long)]
        mentor: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        remark: Option<String>,
        #[arg(long, value_name = "FILE")]
        photo: PathBuf,
    },
    /// Show every submitted testimonial (password protected)
    List {
        #[arg(long)]
        password: String,
    },
}

/// A model for describing configuration of the testimonial tool.
/// Consists of:
/// 1. Base URL of the backend storing testimonials
/// 2. Image host endpoint the photos are uploaded to (key embedded in the URL)
/// 3. Passwords that unlock the listing
#[derive(Debug, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub image_upload_url: String,
    #[serde(default = "default_list_passwords")]
    pub list_passwords: Vec<String>,
}

fn default_list_passwords() -> Vec<String> {
    vec!["Rudra07".to_string(), "kieteee".to_string()]
}

/// A testimonial as stored by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub branch: String,
    pub roll_no: String,
    pub mentor: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub photo: String,
}

/// Payload for creating a testimonial; `photo` holds the URL the image host
/// handed back, never a local path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub branch: String,
    pub roll_no: String,
    pub mentor: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub photo: String,
}

/// Form input as collected, before the photo has been uploaded anywhere.
#[derive(Debug, Clone)]
pub struct TestimonialDraft {
    pub name: String,
    pub branch: String,
    pub roll_no: String,
    pub mentor: String,
    pub message: String,
    pub remark: Option<String>,
    pub photo_path: PathBuf,
}

/// Answer of the image host. Only the URL matters; a response without one
/// counts as a failed upload.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub data: Option<UploadedImage>,
}

#[derive(Debug, Deserialize)]
pub struct UploadedImage {
    pub url: Option<String>,
}
