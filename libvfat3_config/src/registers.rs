use fxhash::FxHashMap;

/// Maximum permissible value for each VFAT3 DAC register.
///
/// Limits taken from the AMC user-functions register table of cmsgemos.
const MAX_DAC_VALUES: [(&str, u32); 14] = [
    ("BIAS_PRE_I_BIT", 0xff),
    ("BIAS_PRE_I_BLCC", 0x3f),
    ("BIAS_SH_I_BFCAS", 0xff),
    ("BIAS_SH_I_BDIFF", 0xff),
    ("BIAS_SD_I_BDIFF", 0xff),
    ("BIAS_SD_I_BFCAS", 0xff),
    ("BIAS_SD_I_BSF", 0x3f),
    ("BIAS_CFD_DAC_1", 0x3f),
    ("BIAS_CFD_DAC_2", 0x3f),
    ("HYST", 0x3f),
    ("THR_ARM_DAC", 0xff),
    ("THR_ZCC_DAC", 0xff),
    ("BIAS_PRE_VREF", 0xff),
    ("ADC_VREF", 0x3),
];

/// Build the register name -> maximum value lookup table
pub fn max_dac_values() -> FxHashMap<&'static str, u32> {
    MAX_DAC_VALUES.iter().copied().collect()
}

/// Clamp a nominal DAC value against the hardware limits.
///
/// Negative values are raised to zero. If the register has a known maximum
/// the value is lowered to it; a register without a maximum passes through.
pub fn clamp_dac_value(value: i32, max: Option<u32>) -> u32 {
    let value = value.max(0) as u32;
    match max {
        Some(max) if value > max => max,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contents() {
        let max_values = max_dac_values();
        assert_eq!(max_values.len(), 14);
        assert_eq!(max_values["THR_ARM_DAC"], 0xff);
        assert_eq!(max_values["HYST"], 0x3f);
        assert_eq!(max_values["ADC_VREF"], 0x3);
        assert!(!max_values.contains_key("CFG_PULSE_STRETCH"));
    }

    #[test]
    fn test_clamp_above_maximum() {
        assert_eq!(clamp_dac_value(300, Some(0xff)), 255);
        assert_eq!(clamp_dac_value(0x3f, Some(0x3f)), 0x3f);
        assert_eq!(clamp_dac_value(17, Some(0xff)), 17);
    }

    #[test]
    fn test_clamp_negative_to_zero() {
        assert_eq!(clamp_dac_value(-1, Some(0xff)), 0);
        assert_eq!(clamp_dac_value(-100, None), 0);
    }

    #[test]
    fn test_unknown_register_passes_through() {
        assert_eq!(clamp_dac_value(100_000, None), 100_000);
    }
}
