use std::future::Future;
use std::time::Duration;

use chrono::Local;
use log::{info, warn};
use tokio::time::sleep;

use crate::display::board_getter::BoardGetter;
use crate::display::models::Config;
use crate::display::slide_renderer::SlideRenderer;
use crate::display::slides::{build_slides, Advance, Scheduler, Slide};

/// How long to wait before asking the backend again while nothing is on
/// screen yet.
const IDLE_RETRY: Duration = Duration::from_secs(10);

/// Fetch both collections and derive a fresh slide sequence from them.
/// `None` on any failure; the caller keeps whatever it was already showing.
async fn fetch_slides<BG: BoardGetter>(board_getter: &BG, config: &Config) -> Option<Vec<Slide>> {
    match board_getter.get_board(config).await {
        Ok((images, activities)) => {
            let today = Local::now().date_naive();
            Some(build_slides(&images, &activities, today, &config.display))
        }
        Err(err) => {
            warn!("Board fetch failed: {}", err);
            None
        }
    }
}

/// Drive the display until `shutdown` resolves.
///
/// One timer at a time: the loop shows a slide, sleeps its duration, then
/// advances. A wrap back to slide 0 is the refresh point; a failed refresh
/// leaves the previous sequence on rotation. Shutdown cancels whichever
/// sleep or fetch is pending, so nothing fires after the loop returns.
pub async fn run<BG: BoardGetter, SR: SlideRenderer>(
    board_getter: BG,
    mut renderer: SR,
    config: &Config,
    shutdown: impl Future<Output = ()>,
) -> () {
    tokio::pin!(shutdown);
    let mut scheduler = Scheduler::new();

    loop {
        if scheduler.is_idle() {
            /* Nothing on screen yet: keep asking until the first fill */
            tokio::select! {
                _ = &mut shutdown => break,
                slides = fetch_slides(&board_getter, config) => match slides {
                    Some(slides) => scheduler.replace_slides(slides),
                    None => {
                        tokio::select! {
                            _ = &mut shutdown => break,
                            _ = sleep(IDLE_RETRY) => {}
                        }
                    }
                }
            }
            continue;
        }

        let duration = match scheduler.current() {
            Some(slide) => {
                renderer.show(slide);
                slide.duration
            }
            None => continue,
        };

        tokio::select! {
            _ = &mut shutdown => break,
            _ = sleep(duration) => {}
        }

        if scheduler.advance() == Advance::Wrapped {
            /* Full cycle complete: refresh before slide 0 goes up again */
            tokio::select! {
                _ = &mut shutdown => break,
                slides = fetch_slides(&board_getter, config) => {
                    if let Some(slides) = slides {
                        scheduler.replace_slides(slides);
                    }
                }
            }
        }
    }

    scheduler.stop();
    info!("Display loop stopped");
}
