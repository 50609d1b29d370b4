/// Number of VFAT slots on a single optohybrid board
pub const NUMBER_OF_VFATS: i32 = 24;

/// VFAT slots that the DAC value writer never patches
pub const MASKED_VFATS: [i32; 2] = [11, 12];

/// Production location of the VFAT3 configuration tree on the CTP7
pub const DEFAULT_VFAT3_DIR: &str = "/mnt/persistent/gemdaq/vfat3";

/// Name of the master template configuration file
pub const DEFAULT_TEMPLATE_NAME: &str = "conf.txt";
