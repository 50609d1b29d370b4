//! # libvfat3_config
//!
//! libvfat3_config manages the per-channel VFAT3 calibration configuration
//! files used by the CMS GEM detector readout. It backs two command line
//! tools:
//!
//! - `vfat3_set_links`: for a chosen optohybrid (GTX) and all 24 VFAT slots,
//!   copies the master template config into a per-slot calibration file and
//!   force-creates a symlink from the slot's active configuration filename to
//!   that calibration file.
//! - `vfat3_write_dacs`: reads a manifest of DAC register names and
//!   nominal-value files, clamps each value against the hardware maximum for
//!   its register, and patches the value into the matching line of each slot's
//!   calibration file (or previews the patch with `--dry_run`).
//!
//! ## Filesystem layout
//!
//! All files live in a single directory (by default
//! `/mnt/persistent/gemdaq/vfat3` on the CTP7). For optohybrid `G` and VFAT
//! slot `V`:
//!
//! ```text
//! conf.txt                         master template
//! config_OH<G>_VFAT<V>_cal.txt     per-slot calibration file
//! config_OH<G>_VFAT<V>.txt         active config, symlink to the _cal file
//! ```
//!
//! The layout can be overridden with a YAML config file:
//!
//! ```yml
//! vfat3_dir: /mnt/persistent/gemdaq/vfat3
//! template_name: conf.txt
//! ```
//!
//! ## Input formats
//!
//! The manifest passed to `vfat3_write_dacs` lists one register and one
//! nominal-value file per line; `#` starts a comment:
//!
//! ```text
//! # register        nominal value file
//! THR_ARM_DAC       /path/to/NominalDACValues_THR_ARM_DAC.txt
//! HYST              /path/to/NominalDACValues_HYST.txt
//! ```
//!
//! Each nominal-value file holds one tab-separated `slot value` pair per
//! line. Values are clamped to `0..=max` for registers with a known maximum;
//! a register without one is passed through unclamped (with a warning at
//! manifest parse time). VFAT slots 11 and 12 are never patched.
pub mod config;
pub mod constants;
pub mod dac_writer;
pub mod error;
pub mod link_setter;
pub mod manifest;
pub mod nominal;
pub mod registers;
