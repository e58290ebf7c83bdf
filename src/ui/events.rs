//! Terminal rendering of console events
//!
//! Banner and summary lines go to stdout so they interleave correctly with
//! the output of the test binaries, which share the console's stdout.

use cobaltb::domain::ports::{ConsoleEvent, EventSink};

use crate::ui::theme::{banners, colors, icons, paint, paint_bold};

/// Prints console events as they happen
pub struct TerminalEventSink {
    color: bool,
}

impl TerminalEventSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl EventSink for TerminalEventSink {
    fn on_event(&self, event: ConsoleEvent) {
        for line in render_event(&event, self.color) {
            println!("{}", line);
        }
    }
}

/// Lines printed for one event
pub fn render_event(event: &ConsoleEvent, color: bool) -> Vec<String> {
    match event {
        ConsoleEvent::TestsPlanned { suites } => {
            let dirs: Vec<String> = suites.iter().map(ToString::to_string).collect();
            vec![format!(
                "Will run tests in the following directories: {}.",
                dirs.join(", ")
            )]
        }
        ConsoleEvent::SuiteStarted { suite } => vec![
            String::new(),
            banners::SUITE.to_string(),
            format!("Running all tests in {}", paint(suite.dir(), colors::INFO, color)),
        ],
        ConsoleEvent::SuiteFinished { suite, passed } => {
            let (icon, tint, word) = if *passed {
                (icons::SUCCESS, colors::SUCCESS, "passed")
            } else {
                (icons::ERROR, colors::ERROR, "failed")
            };
            vec![format!("{} {} {}", paint(icon, tint, color), suite, word)]
        }
        ConsoleEvent::SuiteMisconfigured { message, .. } => vec![
            String::new(),
            format!("{} {}", paint(icons::ERROR, colors::ERROR, color), message),
        ],
        ConsoleEvent::TestsFinished { passed } => {
            let (banner, tint) = if *passed {
                (banners::ALL_PASSED, colors::SUCCESS)
            } else {
                (banners::SOME_FAILED, colors::ERROR)
            };
            vec![String::new(), paint_bold(banner, tint, color)]
        }
        ConsoleEvent::ImageBuilding { image } => vec![format!(
            "{} Building {}...",
            paint(icons::PROGRESS, colors::INFO, color),
            image
        )],
        ConsoleEvent::ImagePublishing { image, tag } => vec![format!(
            "{} Publishing {} as {}...",
            paint(icons::PROGRESS, colors::INFO, color),
            image,
            paint(tag, colors::DIM, color)
        )],
        ConsoleEvent::ImageStarting { image } => vec![format!("Starting {}", image)],
        ConsoleEvent::ImageStopping { image } => vec![format!("Stopping {}", image)],
    }
}
