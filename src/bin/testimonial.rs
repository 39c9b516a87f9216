use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use kiet_display_board::testimonial::gate::check_password;
use kiet_display_board::testimonial::helpers::{
    format_testimonial, get_testimonials, wake_backend,
};
use kiet_display_board::testimonial::models::{Args, Command, Config, TestimonialDraft};
use kiet_display_board::testimonial::run_submit;
use log::{error, info};

#[tokio::main]
async fn main() {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let http_client = reqwest::Client::new();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("KIET_"))
        .extract()
        .unwrap();
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)
            .unwrap()
            .display()
    );

    match args.command {
        Command::Submit {
            name,
            branch,
            roll_no,
            mentor,
            message,
            remark,
            photo,
        } => {
            /* The backend may be asleep; poke it before the real calls */
            wake_backend(&http_client, &config).await;

            let draft = TestimonialDraft {
                name,
                branch,
                roll_no,
                mentor,
                message,
                remark,
                photo_path: photo,
            };
            match run_submit::run(&http_client, &http_client, &config, draft).await {
                Ok(created) => info!("Testimonial submitted with id {}", created.id),
                Err(err) => {
                    error!("Failed to submit testimonial: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Command::List { password } => {
            if check_password(&password, &config.list_passwords).is_err() {
                error!("Incorrect Password");
                std::process::exit(1);
            }
            match get_testimonials(&http_client, &config).await {
                Ok(testimonials) => {
                    info!("Found {} testimonials", testimonials.len());
                    for testimonial in &testimonials {
                        println!("{}", format_testimonial(testimonial));
                    }
                }
                Err(err) => {
                    error!("Failed to load testimonials: {}", err);
                    std::process::exit(1);
                }
            }
        }
    }
}
