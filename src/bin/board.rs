use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use kiet_display_board::display::helpers::{
    create_activity, delete_activity, format_activity, get_activities,
};
use kiet_display_board::display::models::{Args, Command, Config, NewActivity};
use kiet_display_board::display::run_board;
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
        Command::Run => {
            /* Rotate slides until ctrl-c */
            info!("Starting the display against {}", config.api_base_url);
            run_board::run(http_client, std::io::stdout(), &config, async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await;
        }
        Command::Add {
            name,
            start_date,
            end_date,
            description,
        } => {
            let activity = NewActivity {
                name,
                start_date,
                end_date,
                description,
            };
            match create_activity(&http_client, &config, &activity).await {
                Ok(created) => info!("Created activity {} with id {}", created.name, created.id),
                Err(err) => {
                    error!("Failed to add activity: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Command::Remove { id } => match delete_activity(&http_client, &config, &id).await {
            Ok(()) => info!("Deleted activity {}", id),
            Err(err) => {
                error!("Failed to delete activity {}: {}", id, err);
                std::process::exit(1);
            }
        },
        Command::List => match get_activities(&http_client, &config).await {
            Ok(activities) => {
                info!("Found {} activities", activities.len());
                for activity in &activities {
                    println!("{}\n{}\n", activity.id, format_activity(activity));
                }
            }
            Err(err) => {
                error!("Failed to fetch activities: {}", err);
                std::process::exit(1);
            }
        },
    }
}
