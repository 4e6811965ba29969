//! Display formatting and coloring rules for quote fields.

/// Direction cue attached to a rendered value. Down renders red, Up renders
/// green, Flat keeps the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Down,
    Up,
    #[default]
    Flat,
}

/// Price and price-change use the default decimal rendering; no fixed
/// precision is applied to either.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Change percent is a fraction on the wire; render as a 5-decimal
/// percentage, e.g. 0.012345 -> "1.23450%".
pub fn format_change_percent(change_percent: f64) -> String {
    format!("{:.5}%", change_percent * 100.0)
}

pub fn change_tone(change: f64) -> Tone {
    if change < 0.0 {
        Tone::Down
    } else if change > 0.0 {
        Tone::Up
    } else {
        Tone::Flat
    }
}

/// Tone for the change-percent field. The positive branch is keyed on the
/// absolute change, not the percentage: a positive percentage paired with a
/// non-positive change stays Flat. Inherited behavior, kept as-is.
pub fn change_percent_tone(change: f64, change_percent: f64) -> Tone {
    if change_percent < 0.0 {
        Tone::Down
    } else if change > 0.0 {
        Tone::Up
    } else {
        Tone::Flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_change_percent_with_five_decimals() {
        assert_eq!(format_change_percent(0.012345), "1.23450%");
        assert_eq!(format_change_percent(-0.01123), "-1.12300%");
        assert_eq!(format_change_percent(0.0), "0.00000%");
    }

    #[test]
    fn renders_numbers_with_default_precision() {
        assert_eq!(format_number(132.05), "132.05");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn tone_table_matches_inherited_rules() {
        let cases = [
            (-1.0, -0.01, Tone::Down, Tone::Down),
            (1.0, 0.01, Tone::Up, Tone::Up),
            (0.0, 0.0, Tone::Flat, Tone::Flat),
            // Positive percentage with a non-positive change stays Flat.
            (-1.0, 0.02, Tone::Down, Tone::Flat),
            (1.0, -0.01, Tone::Up, Tone::Down),
        ];

        for (change, change_percent, expected_change, expected_percent) in cases {
            assert_eq!(
                change_tone(change),
                expected_change,
                "change tone for ({change}, {change_percent})"
            );
            assert_eq!(
                change_percent_tone(change, change_percent),
                expected_percent,
                "percent tone for ({change}, {change_percent})"
            );
        }
    }
}
