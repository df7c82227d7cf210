use serde::{Deserialize, Serialize};
use shared::{
    domain::{BottleCode, BOTTLE_BITS, MAX_BOTTLE},
    input::parse_integer_saturating,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clamped {
    pub value: u8,
    /// Set when the requested bottle was outside `0..=15`.
    pub corrected: bool,
}

pub fn clamp_bottle(requested: i64) -> Clamped {
    let value = requested.clamp(0, i64::from(MAX_BOTTLE));
    Clamped {
        value: value as u8,
        corrected: value != requested,
    }
}

/// Four bits of `value`, most significant first. Values above 15 are clamped.
pub fn bottle_code(value: u8) -> BottleCode {
    let value = value.min(MAX_BOTTLE);
    let mut bits = [false; BOTTLE_BITS];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = value & (1 << (BOTTLE_BITS - 1 - i)) != 0;
    }
    BottleCode { value, bits }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottleReading {
    pub code: BottleCode,
    /// Text to write back into the input control after clamping.
    pub corrected_input: Option<String>,
}

/// Reads a bottle number from a text control. Never fails: empty or
/// non-numeric text shows bottle 0 without touching the control, and any
/// out-of-range number, however long, is clamped with the clamped value handed
/// back for the control.
pub fn read_bottle(raw: &str) -> BottleReading {
    let Ok(requested) = parse_integer_saturating(raw) else {
        return BottleReading {
            code: bottle_code(0),
            corrected_input: None,
        };
    };
    let clamped = clamp_bottle(requested);
    if clamped.corrected {
        warn!(requested, clamped = clamped.value, "bottle number clamped");
    }
    BottleReading {
        code: bottle_code(clamped.value),
        corrected_input: clamped.corrected.then(|| clamped.value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_lights_the_two_low_odd_cups() {
        let code = bottle_code(5);
        assert_eq!(code.binary(), "0101");
        assert_eq!(code.bits, [false, true, false, true]);
        let cups: Vec<_> = code.cups().collect();
        assert_eq!(cups, vec![(3, false), (2, true), (1, false), (0, true)]);
    }

    #[test]
    fn every_bottle_reads_back_big_endian() {
        for value in 0..=MAX_BOTTLE {
            let code = bottle_code(value);
            let decoded = code.bits.iter().fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit));
            assert_eq!(decoded, value);
            assert_eq!(code.binary(), format!("{value:04b}"));
        }
    }

    #[test]
    fn out_of_range_values_are_clamped_silently() {
        assert_eq!(clamp_bottle(-3), Clamped { value: 0, corrected: true });
        assert_eq!(clamp_bottle(99), Clamped { value: 15, corrected: true });
        assert_eq!(clamp_bottle(7), Clamped { value: 7, corrected: false });

        let reading = read_bottle("42");
        assert_eq!(reading.code.binary(), "1111");
        assert_eq!(reading.corrected_input.as_deref(), Some("15"));
    }

    #[test]
    fn numbers_past_any_integer_width_still_clamp() {
        let reading = read_bottle("99999999999999999999");
        assert_eq!(reading.code.value, MAX_BOTTLE);
        assert_eq!(reading.corrected_input.as_deref(), Some("15"));

        let reading = read_bottle("-99999999999999999999");
        assert_eq!(reading.code.value, 0);
        assert_eq!(reading.corrected_input.as_deref(), Some("0"));
    }

    #[test]
    fn blank_input_shows_bottle_zero_without_correction() {
        let reading = read_bottle("");
        assert_eq!(reading.code.value, 0);
        assert_eq!(reading.corrected_input, None);
    }
}
