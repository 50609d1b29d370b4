use std::path::Path;

use super::config::Config;
use super::constants::NUMBER_OF_VFATS;
use super::error::LinkError;

#[cfg(target_family = "unix")]
fn symlink_file(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(target_family = "windows")]
fn symlink_file(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(original, link)
}

/// Point one slot's active configuration filename at a fresh calibration file.
///
/// Copies the master template over the slot's calibration file, then replaces
/// the active configuration filename with a symlink to that calibration file.
fn link_slot(config: &Config, template: &Path, gtx: i32, vfat: i32) -> Result<(), LinkError> {
    let oh = gtx.to_string();
    let cal_file = config.calibration_file(&oh, vfat);
    let active_file = config.active_config_file(&oh, vfat);

    std::fs::copy(template, &cal_file)?;

    // ln -sf: whatever currently holds the active name goes first
    if active_file.symlink_metadata().is_ok() {
        std::fs::remove_file(&active_file)?;
    }
    symlink_file(&cal_file, &active_file)?;

    Ok(())
}

/// Recreate the calibration file and active-config symlink for every slot of a board.
///
/// A failure on one slot is logged and the remaining slots are still processed,
/// so an interrupted run leaves the already-linked slots in place.
pub fn set_links(config: &Config, gtx: i32) -> Result<(), LinkError> {
    let template = config.template_path()?;

    for vfat in 0..NUMBER_OF_VFATS {
        match link_slot(config, &template, gtx, vfat) {
            Ok(()) => log::info!(
                "Linked config_OH{gtx}_VFAT{vfat}.txt -> config_OH{gtx}_VFAT{vfat}_cal.txt"
            ),
            Err(e) => log::warn!("Failed to set link for VFAT {vfat}: {e}"),
        }
    }

    Ok(())
}
