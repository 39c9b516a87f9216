use std::io::{Stdout, Write};

use crate::display::helpers::format_slide;
use crate::display::slides::Slide;

/// A trait, necessary for every entity that will present one slide to the
/// audience.
pub trait SlideRenderer {
    fn show(&mut self, slide: &Slide);
}

/// Allows stdout to act as the display surface; the attached screen mirrors
/// the terminal.
impl SlideRenderer for Stdout {
    fn show(&mut self, slide: &Slide) {
        let _ = writeln!(self, "{}", format_slide(slide));
    }
}
