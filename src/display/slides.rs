use std::time::Duration;

use chrono::NaiveDate;

use crate::display::filter::{current_activities, current_activities_for_year};
use crate::display::models::{Activity, DisplayConfig, Grouping, Image};

/// Study-year tags with the ordinal labels the display shows.
pub const YEARS: [(u8, &str); 4] = [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th")];

/// One unit of rotating display content.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Image {
        url: String,
    },
    ActivityGroup {
        label: String,
        activities: Vec<Activity>,
    },
}

/// A slide plus how long it stays on screen. Slides are derived state,
/// rebuilt from scratch on every refresh and owned by the [`Scheduler`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub content: SlideContent,
    pub duration: Duration,
}

/// Compose the slide sequence for one refresh cycle: every photo first, then
/// the activity-group slides. Group slides are emitted even when no activity
/// is current; the renderer shows the empty state instead of skipping them.
pub fn build_slides(
    images: &[Image],
    activities: &[Activity],
    today: NaiveDate,
    config: &DisplayConfig,
) -> Vec<Slide> {
    let image_duration = Duration::from_millis(config.image_slide_ms);
    let group_duration = Duration::from_millis(config.activity_slide_ms);

    let mut slides: Vec<Slide> = images
        .iter()
        .map(|image| Slide {
            content: SlideContent::Image {
                url: image.image_url.clone(),
            },
            duration: image_duration,
        })
        .collect();

    match config.grouping {
        Grouping::ByYear => {
            for (year, label) in YEARS {
                slides.push(Slide {
                    content: SlideContent::ActivityGroup {
                        label: format!("{} Year Activities", label),
                        activities: current_activities_for_year(activities, today, year),
                    },
                    duration: group_duration,
                });
            }
        }
        Grouping::Pooled => {
            slides.push(Slide {
                content: SlideContent::ActivityGroup {
                    label: "Ongoing Activities".to_string(),
                    activities: current_activities(activities, today),
                },
                duration: group_duration,
            });
        }
    }

    slides
}

/// What a call to [`Scheduler::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Nothing to rotate.
    Idle,
    /// Moved on to the slide at this index.
    Moved(usize),
    /// Came back around to slide 0; one full cycle is complete and the
    /// caller should refresh its data.
    Wrapped,
}

/// Owns the current slide sequence and the rotation position.
///
/// The scheduler is clock-free: the display loop sleeps for
/// `current().duration` and then calls [`advance`](Scheduler::advance).
/// The refresh policy lives with the caller, keyed off [`Advance::Wrapped`].
#[derive(Debug, Default)]
pub struct Scheduler {
    slides: Vec<Slide>,
    current: usize,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler::default()
    }

    /// Idle means there is nothing to show yet: either no data has arrived
    /// or [`stop`](Scheduler::stop) was called.
    pub fn is_idle(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn current_index(&self) -> Option<usize> {
        if self.is_idle() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Swap in a freshly built slide sequence. The position is kept when it
    /// still points inside the new sequence and reset to the front otherwise.
    pub fn replace_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        if self.current >= self.slides.len() {
            self.current = 0;
        }
    }

    /// Step to the next slide, wrapping at the end of the sequence.
    pub fn advance(&mut self) -> Advance {
        if self.slides.is_empty() {
            return Advance::Idle;
        }
        self.current = (self.current + 1) % self.slides.len();
        if self.current == 0 {
            Advance::Wrapped
        } else {
            Advance::Moved(self.current)
        }
    }

    /// Jump back to the first slide without touching the slide sequence.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Drop the slide sequence and go idle.
    pub fn stop(&mut self) {
        self.slides.clear();
        self.current = 0;
    }
}
