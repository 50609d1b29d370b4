use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use libvfat3_config::config::Config;
use libvfat3_config::dac_writer::write_dac_values;
use libvfat3_config::manifest::NominalDacManifest;
use libvfat3_config::registers::max_dac_values;

fn main() {
    // Create a cli
    let matches = Command::new("vfat3_write_dacs")
        .about("Write nominal DAC values into the VFAT3 calibration config files")
        .arg(
            Arg::new("OH")
                .required(true)
                .value_name("OH")
                .help("OH number"),
        )
        .arg(
            Arg::new("nominalDacFileList")
                .required(true)
                .value_name("nominalDacFileList")
                .help(
                    "File listing register names and nominal DAC value files. Format: \
                     register_name1 <space> /path/to/nominal/DAC/file1 <newline> ...",
                ),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry_run")
                .action(ArgAction::SetTrue)
                .help("Print the patched lines instead of overwriting the config files"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a YAML layout config; defaults to the production layout"),
        )
        .get_matches();

    // Initialize feedback
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("Could not create logging!");

    // Parse the cli
    let oh = matches.get_one::<String>("OH").expect("OH is required");
    let manifest_path = PathBuf::from(
        matches
            .get_one::<String>("nominalDacFileList")
            .expect("nominalDacFileList is required"),
    );
    let dry_run = matches.get_flag("dry_run");

    let config = match matches.get_one::<String>("config") {
        Some(path) => match Config::read_config_file(&PathBuf::from(path)) {
            Ok(c) => c,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        },
        None => Config::default(),
    };

    log::info!("VFAT3 directory: {}", config.vfat3_dir.to_string_lossy());
    log::info!("Manifest: {}", manifest_path.to_string_lossy());
    log::info!("OH: {oh} Dry run: {dry_run}");

    let manifest = match NominalDacManifest::from_file(&manifest_path, &max_dac_values()) {
        Ok(m) => m,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    if manifest.is_empty() {
        log::warn!("Manifest {} names no registers", manifest_path.to_string_lossy());
        return;
    }

    match write_dac_values(&config, oh, &manifest, dry_run) {
        Ok(()) => log::info!("Done."),
        Err(e) => log::error!("{e}"),
    }
}
