use clap::{Arg, Command};
use std::path::PathBuf;

use libvfat3_config::config::Config;
use libvfat3_config::link_setter::set_links;

fn main() {
    // Create a cli
    let matches = Command::new("vfat3_set_links")
        .about("Point every VFAT slot's active config at a fresh calibration file")
        .arg(
            Arg::new("gtx")
                .short('g')
                .long("gtx")
                .help("GTX on the AMC")
                .value_parser(clap::value_parser!(i32))
                .default_value("0"),
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
    let gtx = *matches.get_one::<i32>("gtx").expect("gtx has a default");

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
    log::info!("Template file: {}", config.template_name);
    log::info!("Setting links for GTX {gtx}...");

    match set_links(&config, gtx) {
        Ok(()) => log::info!("Done."),
        Err(e) => log::error!("{e}"),
    }
}
