use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use kiet_display_board::display::board_getter::BoardGetter;
use kiet_display_board::display::models::{Activity, Config, DisplayConfig, Grouping, Image};
use kiet_display_board::display::run_board;
use kiet_display_board::display::slide_renderer::SlideRenderer;
use kiet_display_board::display::slides::{Slide, SlideContent};
use kiet_display_board::error::{AppError, Result};

fn test_config() -> Config {
    Config {
        api_base_url: "http://localhost:5000".to_string(),
        display: DisplayConfig {
            image_slide_ms: 2000,
            activity_slide_ms: 8000,
            grouping: Grouping::Pooled,
        },
    }
}

fn image(id: &str) -> Image {
    Image {
        id: id.to_string(),
        image_url: format!("https://images.example/{}.jpg", id),
    }
}

/// An activity whose window comfortably contains today.
fn current_activity(name: &str) -> Activity {
    let now = Utc::now();
    Activity {
        id: name.to_string(),
        name: name.to_string(),
        start_date: now - ChronoDuration::days(30),
        end_date: now + ChronoDuration::days(30),
        description: "on campus".to_string(),
        year: None,
    }
}

/// A reqwest error built without touching the network (empty host never
/// parses), wrapped the way the real getter would wrap it.
async fn network_error() -> AppError {
    let err = reqwest::Client::new().get("http://").send().await.unwrap_err();
    AppError::Network {
        url: "http://".to_string(),
        source: err,
    }
}

/// Serves fixed board content; fails every call past `fail_after` to model a
/// backend that goes away mid-session.
struct TestGetter {
    calls: Arc<AtomicUsize>,
    images: Vec<Image>,
    activities: Vec<Activity>,
    fail_after: usize,
}

impl BoardGetter for TestGetter {
    async fn get_board(&self, _config: &Config) -> Result<(Vec<Image>, Vec<Activity>)> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call > self.fail_after {
            return Err(network_error().await);
        }
        Ok((self.images.clone(), self.activities.clone()))
    }
}

#[derive(Clone, Default)]
struct TestRenderer {
    shown: Arc<Mutex<Vec<String>>>,
}

impl SlideRenderer for TestRenderer {
    fn show(&mut self, slide: &Slide) {
        let label = match &slide.content {
            SlideContent::Image { url } => url.clone(),
            SlideContent::ActivityGroup { label, .. } => label.clone(),
        };
        self.shown.lock().unwrap().push(label);
    }
}

#[tokio::test(start_paused = true)]
async fn one_refresh_per_full_cycle() {
    let calls = Arc::new(AtomicUsize::new(0));
    let getter = TestGetter {
        calls: calls.clone(),
        images: vec![image("a"), image("b")],
        activities: vec![current_activity("Sports Week")],
        fail_after: usize::MAX,
    };
    let renderer = TestRenderer::default();
    let shown = renderer.shown.clone();
    let config = test_config();

    /* Two 2000 ms images plus one 8000 ms group: a 12 s cycle. Stop just
    after the wrap so exactly one refresh has happened. */
    run_board::run(
        getter,
        renderer,
        &config,
        tokio::time::sleep(Duration::from_millis(12_500)),
    )
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let shown = shown.lock().unwrap();
    assert_eq!(
        *shown,
        vec![
            "https://images.example/a.jpg".to_string(),
            "https://images.example/b.jpg".to_string(),
            "Ongoing Activities".to_string(),
            "https://images.example/a.jpg".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn idle_loop_keeps_retrying_and_never_renders() {
    let calls = Arc::new(AtomicUsize::new(0));
    let getter = TestGetter {
        calls: calls.clone(),
        images: Vec::new(),
        activities: Vec::new(),
        fail_after: 0,
    };
    let renderer = TestRenderer::default();
    let shown = renderer.shown.clone();
    let config = test_config();

    run_board::run(
        getter,
        renderer,
        &config,
        tokio::time::sleep(Duration::from_millis(25_000)),
    )
    .await;

    /* Initial attempt plus one retry every 10 s */
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(shown.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_refresh_keeps_previous_slides() {
    let calls = Arc::new(AtomicUsize::new(0));
    let getter = TestGetter {
        calls: calls.clone(),
        images: vec![image("a")],
        activities: Vec::new(),
        fail_after: 1,
    };
    let renderer = TestRenderer::default();
    let shown = renderer.shown.clone();
    let config = test_config();

    /* 2000 ms image + 8000 ms group; the refresh at 10 s fails but the
    board must keep rotating the sequence it already has. */
    run_board::run(
        getter,
        renderer,
        &config,
        tokio::time::sleep(Duration::from_millis(11_000)),
    )
    .await;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let shown = shown.lock().unwrap();
    assert_eq!(
        *shown,
        vec![
            "https://images.example/a.jpg".to_string(),
            "Ongoing Activities".to_string(),
            "https://images.example/a.jpg".to_string(),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn empty_board_still_shows_the_group_slide() {
    let calls = Arc::new(AtomicUsize::new(0));
    let getter = TestGetter {
        calls: calls.clone(),
        images: Vec::new(),
        activities: Vec::new(),
        fail_after: usize::MAX,
    };
    let renderer = TestRenderer::default();
    let shown = renderer.shown.clone();
    let config = test_config();

    run_board::run(
        getter,
        renderer,
        &config,
        tokio::time::sleep(Duration::from_millis(8_500)),
    )
    .await;

    /* Loaded-but-empty is a real slide, not the idle state */
    let shown = shown.lock().unwrap();
    assert!(!shown.is_empty());
    assert_eq!(shown[0], "Ongoing Activities");
}
