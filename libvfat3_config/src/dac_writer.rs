use std::path::Path;

use super::config::Config;
use super::constants::MASKED_VFATS;
use super::error::DacWriterError;
use super::manifest::NominalDacManifest;
use super::nominal::read_nominal_values;
use super::registers::{clamp_dac_value, max_dac_values};

/// Replace the first whitespace-delimited run of digits after the first token
/// with `value`. Returns None if the line has no such numeric field.
fn replace_numeric_field(line: &str, value: u32) -> Option<String> {
    let bytes = line.as_bytes();
    let token_end = line
        .find(|c: char| c.is_whitespace())
        .unwrap_or(line.len());

    let mut start = None;
    for index in token_end.max(1)..bytes.len() {
        if bytes[index].is_ascii_digit() && bytes[index - 1].is_ascii_whitespace() {
            start = Some(index);
            break;
        }
    }
    let start = start?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    Some(format!("{}{}{}", &line[..start], value, &line[end..]))
}

/// Rewrite the numeric field of every line whose first token equals `register`.
///
/// Returns the patched contents along with the rewritten lines. Delimiters and
/// any trailing content on a line are preserved; a matching line without a
/// numeric field is left alone.
pub fn patch_config_contents(
    contents: &str,
    register: &str,
    value: u32,
) -> (String, Vec<String>) {
    let mut patched_lines: Vec<String> = Vec::new();
    let mut output = String::with_capacity(contents.len());

    for line in contents.lines() {
        let is_match = matches!(line.split_whitespace().next(), Some(token) if token == register);
        match is_match.then(|| replace_numeric_field(line, value)).flatten() {
            Some(patched) => {
                output.push_str(&patched);
                patched_lines.push(patched);
            }
            None => output.push_str(line),
        }
        output.push('\n');
    }

    // lines() swallows the final newline, so only keep it if the input had one
    if !contents.ends_with('\n') && output.ends_with('\n') {
        output.pop();
    }

    (output, patched_lines)
}

/// Patch one register's line(s) in a config file.
///
/// In dry-run mode the rewritten lines are logged and the file is untouched.
/// Returns the lines that were (or would have been) rewritten.
pub fn patch_config_file(
    path: &Path,
    register: &str,
    value: u32,
    dry_run: bool,
) -> Result<Vec<String>, std::io::Error> {
    let contents = std::fs::read_to_string(path)?;
    let (patched, lines) = patch_config_contents(&contents, register, value);

    if dry_run {
        for line in &lines {
            log::info!("[dry run] {}: {line}", path.display());
        }
    } else {
        std::fs::write(path, patched)?;
    }

    Ok(lines)
}

/// Apply a nominal-DAC manifest to the calibration files of one board.
///
/// Masked slots are skipped outright. A calibration file that cannot be read or
/// written is reported and the remaining slots are still processed; a manifest
/// or nominal-file problem stops the run at that point, leaving earlier patches
/// in place.
pub fn write_dac_values(
    config: &Config,
    oh: &str,
    manifest: &NominalDacManifest,
    dry_run: bool,
) -> Result<(), DacWriterError> {
    let max_values = max_dac_values();

    for entry in manifest.entries() {
        log::info!(
            "Setting the register {} using the file: {}",
            entry.register,
            entry.path.display()
        );

        let nominals = read_nominal_values(&entry.path)?;
        let max = max_values.get(entry.register.as_str()).copied();

        for nominal in nominals {
            if MASKED_VFATS.contains(&nominal.vfat) {
                continue;
            }

            let requested = nominal.value.max(0) as u32;
            let value = clamp_dac_value(nominal.value, max);
            if value != requested {
                log::info!("{}: {} --> {}", nominal.vfat, requested, value);
            } else {
                log::info!("{}: {}", nominal.vfat, requested);
            }

            let cal_file = config.calibration_file(oh, nominal.vfat);
            match patch_config_file(&cal_file, &entry.register, value, dry_run) {
                Ok(lines) if lines.is_empty() => log::warn!(
                    "No {} line found in {}",
                    entry.register,
                    cal_file.display()
                ),
                Ok(_) => (),
                Err(e) => log::warn!("Could not patch {}: {e}", cal_file.display()),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::max_dac_values;

    fn test_config(name: &str) -> Config {
        let dir = std::env::temp_dir().join(format!(
            "libvfat3_config_{}_{}",
            name,
            std::process::id()
        ));
        if dir.exists() {
            std::fs::remove_dir_all(&dir).unwrap();
        }
        std::fs::create_dir_all(&dir).unwrap();
        Config {
            vfat3_dir: dir,
            template_name: String::from("conf.txt"),
        }
    }

    #[test]
    fn test_patch_replaces_numeric_field() {
        let contents = "THR_ARM_DAC 100\nHYST 5\n";
        let (patched, lines) = patch_config_contents(contents, "THR_ARM_DAC", 255);
        assert_eq!(patched, "THR_ARM_DAC 255\nHYST 5\n");
        assert_eq!(lines, vec![String::from("THR_ARM_DAC 255")]);
    }

    #[test]
    fn test_patch_requires_exact_first_token() {
        let contents = "THR_ARM_DAC_EXT 100\nTHR_ARM_DAC 100\n";
        let (patched, lines) = patch_config_contents(contents, "THR_ARM_DAC", 7);
        assert_eq!(patched, "THR_ARM_DAC_EXT 100\nTHR_ARM_DAC 7\n");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_patch_preserves_delimiters_and_trailing_content() {
        let contents = "HYST\t10 keep this\n";
        let (patched, _) = patch_config_contents(contents, "HYST", 63);
        assert_eq!(patched, "HYST\t63 keep this\n");
    }

    #[test]
    fn test_patch_rewrites_every_matching_line() {
        let contents = "HYST 1\nTHR_ARM_DAC 2\nHYST 3\n";
        let (patched, lines) = patch_config_contents(contents, "HYST", 9);
        assert_eq!(patched, "HYST 9\nTHR_ARM_DAC 2\nHYST 9\n");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_patch_without_matching_line_is_identity() {
        let contents = "HYST 5\n";
        let (patched, lines) = patch_config_contents(contents, "THR_ARM_DAC", 1);
        assert_eq!(patched, contents);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_patch_keeps_missing_trailing_newline() {
        let (patched, _) = patch_config_contents("HYST 5", "HYST", 6);
        assert_eq!(patched, "HYST 6");
    }

    #[test]
    fn test_register_name_digits_are_not_a_value_field() {
        let (patched, _) = patch_config_contents("BIAS_CFD_DAC_1 30\n", "BIAS_CFD_DAC_1", 63);
        assert_eq!(patched, "BIAS_CFD_DAC_1 63\n");
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let config = test_config("dry_run");
        let cal_file = config.calibration_file("0", 5);
        std::fs::write(&cal_file, "THR_ARM_DAC 100\n").unwrap();

        let lines = patch_config_file(&cal_file, "THR_ARM_DAC", 255, true).unwrap();
        assert_eq!(lines, vec![String::from("THR_ARM_DAC 255")]);
        assert_eq!(
            std::fs::read_to_string(&cal_file).unwrap(),
            "THR_ARM_DAC 100\n"
        );
    }

    #[test]
    fn test_write_clamps_and_skips_masked_slots() {
        let config = test_config("write_dacs");
        for vfat in [5, 11, 12] {
            std::fs::write(
                config.calibration_file("0", vfat),
                "THR_ARM_DAC 100\nHYST 5\n",
            )
            .unwrap();
        }

        let nominal_file = config.vfat3_dir.join("thr_arm.txt");
        std::fs::write(&nominal_file, "5\t300\n11\t10\n12\t10\n").unwrap();
        let manifest_text = format!("THR_ARM_DAC {}\n", nominal_file.display());
        let manifest = NominalDacManifest::parse(&manifest_text, &max_dac_values()).unwrap();

        write_dac_values(&config, "0", &manifest, false).unwrap();

        // slot 5 clamped from 300 down to the 0xff register maximum
        assert_eq!(
            std::fs::read_to_string(config.calibration_file("0", 5)).unwrap(),
            "THR_ARM_DAC 255\nHYST 5\n"
        );
        // masked slots keep their original contents
        for vfat in [11, 12] {
            assert_eq!(
                std::fs::read_to_string(config.calibration_file("0", vfat)).unwrap(),
                "THR_ARM_DAC 100\nHYST 5\n"
            );
        }
    }

    #[test]
    fn test_write_negative_value_clamps_to_zero() {
        let config = test_config("write_negative");
        std::fs::write(config.calibration_file("3", 0), "HYST 5\n").unwrap();

        let nominal_file = config.vfat3_dir.join("hyst.txt");
        std::fs::write(&nominal_file, "0\t-20\n").unwrap();
        let manifest_text = format!("HYST {}\n", nominal_file.display());
        let manifest = NominalDacManifest::parse(&manifest_text, &max_dac_values()).unwrap();

        write_dac_values(&config, "3", &manifest, false).unwrap();

        assert_eq!(
            std::fs::read_to_string(config.calibration_file("3", 0)).unwrap(),
            "HYST 0\n"
        );
    }

    #[test]
    fn test_write_missing_nominal_file_is_fatal() {
        let config = test_config("write_missing_nominal");
        let manifest =
            NominalDacManifest::parse("THR_ARM_DAC /does/not/exist.txt\n", &max_dac_values())
                .unwrap();

        match write_dac_values(&config, "0", &manifest, false) {
            Err(DacWriterError::NominalError(_)) => (),
            _ => panic!(),
        }
    }
}
