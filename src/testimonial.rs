pub mod gate;
pub mod helpers;
pub mod models;
pub mod photo_uploader;
pub mod record_sender;
pub mod run_submit;
