//! Cluster lifecycle command handlers
//!
//! `gce_build`, `gce_push`, `gce_start` and `gce_stop` all select images the
//! same way and fail fast on the first tool error.

use anyhow::{Context, Result};

use cobaltb::application::deploy::{DeployOptions, DeploymentController, LifecycleResult};
use cobaltb::domain::services::ImageSelector;
use cobaltb::domain::value_objects::ImageSet;
use cobaltb::infrastructure::{LocalFs, SystemCommandRunner};

use super::session::Session;
use crate::cli::ImageFlags;
use crate::ui::events::TerminalEventSink;
use crate::ui::theme::{colors, icons, paint};

type Controller = DeploymentController<SystemCommandRunner, LocalFs, TerminalEventSink>;

fn controller(session: &Session) -> Controller {
    DeploymentController::new(
        session.layout.clone(),
        DeployOptions::new(
            session.config.gce.cluster_target(),
            session.config.analyzer_table(),
        ),
        session.runner(),
        LocalFs::new(),
        TerminalEventSink::new(session.color),
    )
}

fn select(flags: ImageFlags) -> ImageSet {
    if flags.analyzer_only && flags.shuffler_only {
        log::warn!("Both --a and --s given; only the shuffler is selected");
    }
    ImageSelector::new().select(flags.analyzer_only, flags.shuffler_only)
}

fn report(session: &Session, result: &LifecycleResult) -> i32 {
    println!(
        "{} {}",
        paint(icons::SUCCESS, colors::SUCCESS, session.color),
        result.summary()
    );
    0
}

/// Execute `gce_build`
pub fn cmd_gce_build(session: &Session, flags: ImageFlags) -> Result<i32> {
    let images = select(flags);
    let controller = controller(session);
    let staged = controller
        .stage_base_image()
        .context("Failed to stage the base image")?;
    let result = controller.build(&staged, &images)?;
    Ok(report(session, &result))
}

/// Execute `gce_push`
pub fn cmd_gce_push(session: &Session, flags: ImageFlags) -> Result<i32> {
    let images = select(flags);
    let controller = controller(session);
    let credentials = controller
        .establish_credentials()
        .context("Failed to fetch cluster credentials")?;
    let result = controller.publish(&credentials, &images)?;
    Ok(report(session, &result))
}

/// Execute `gce_start`
pub fn cmd_gce_start(session: &Session, flags: ImageFlags) -> Result<i32> {
    let images = select(flags);
    let controller = controller(session);
    let credentials = controller
        .establish_credentials()
        .context("Failed to fetch cluster credentials")?;
    let result = controller.start(&credentials, &images)?;
    Ok(report(session, &result))
}

/// Execute `gce_stop`
pub fn cmd_gce_stop(session: &Session, flags: ImageFlags) -> Result<i32> {
    let images = select(flags);
    let controller = controller(session);
    let credentials = controller
        .establish_credentials()
        .context("Failed to fetch cluster credentials")?;
    let result = controller.stop(&credentials, &images)?;
    Ok(report(session, &result))
}
