//! Clean command handler
//!
//! Removes build output, keeping the generated build system unless `--full`.

use anyhow::Result;

use cobaltb::application::clean::{CleanOptions, CleanUseCase};
use cobaltb::infrastructure::LocalFs;

use super::session::Session;
use crate::ui::theme::{colors, icons, paint};

/// Execute the clean command
pub fn cmd_clean(session: &Session, full: bool) -> Result<i32> {
    if full {
        println!("Deleting the out directory...");
    } else {
        println!("Doing a partial clean. Pass --full for a full clean.");
    }

    let out_dir = session.layout.out_dir();
    let result =
        CleanUseCase::new(LocalFs::new()).execute(out_dir, &CleanOptions::new().with_full(full));

    if result.nothing_to_clean {
        log::info!("{} does not exist, nothing to clean", out_dir.display());
    } else {
        log::info!(
            "Deleted {} entries, kept {}",
            result.deleted.len(),
            result.preserved.len()
        );
    }

    for error in &result.errors {
        eprintln!("{} {}", paint(icons::ERROR, colors::ERROR, session.color), error);
    }
    Ok(if result.is_success() { 0 } else { 1 })
}
