use std::path::Path;

use super::error::NominalFileError;

/// One slot/value pair from a nominal DAC value file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NominalDacValue {
    pub vfat: i32,
    pub value: i32,
}

/// Read a nominal DAC value file: one `slot<TAB>value` pair per line
pub fn read_nominal_values(path: &Path) -> Result<Vec<NominalDacValue>, NominalFileError> {
    if !path.exists() {
        return Err(NominalFileError::BadFilePath(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path)?;
    parse_nominal_values(&contents)
}

/// Parse nominal value text into slot/value pairs
pub fn parse_nominal_values(contents: &str) -> Result<Vec<NominalDacValue>, NominalFileError> {
    let mut values = Vec::new();

    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split('\t');
        let vfat = fields
            .next()
            .ok_or(NominalFileError::BadLineFormat(number + 1))?;
        let value = fields
            .next()
            .ok_or(NominalFileError::BadLineFormat(number + 1))?;

        values.push(NominalDacValue {
            vfat: vfat.trim().parse()?,
            value: value.trim().parse()?,
        });
    }

    Ok(values)
}
