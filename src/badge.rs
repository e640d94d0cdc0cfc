//! Presentation of the `origem` tag and the numeric result fields.

/// Display mapping for one origin tag. `class` is the style class the badge
/// is rendered with; the terminal panel maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
    pub title: &'static str,
}

const UNKNOWN: Badge = Badge { label: "?", class: "badge", title: "" };

/// Static origin→badge table. Unrecognized or absent tags get the `?` badge
/// with an empty tooltip.
pub fn badge_for(origem: Option<&str>) -> Badge {
    match origem {
        Some("hf") => Badge { label: "HF", class: "badge b-hf", title: "via Hugging Face" },
        Some("modelo") => Badge { label: "Local", class: "badge b-ml", title: "via Modelo Local" },
        Some("heuristica") => Badge { label: "Heurística", class: "badge b-h", title: "via Heurística" },
        _ => UNKNOWN,
    }
}

/// Confidence rendered as a percentage with one decimal digit, `-` when the
/// API did not return a number.
pub fn format_confidence(confianca: Option<f64>) -> String {
    match confianca {
        Some(c) if c.is_finite() => format!("{:.1}%", c * 100.0),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_hf() {
        let badge = badge_for(Some("hf"));
        assert_eq!(badge.label, "HF");
        assert_eq!(badge.class, "badge b-hf");
        assert_eq!(badge.title, "via Hugging Face");
    }

    #[test]
    fn test_badge_modelo() {
        let badge = badge_for(Some("modelo"));
        assert_eq!(badge.label, "Local");
        assert_eq!(badge.class, "badge b-ml");
        assert_eq!(badge.title, "via Modelo Local");
    }

    #[test]
    fn test_badge_heuristica() {
        let badge = badge_for(Some("heuristica"));
        assert_eq!(badge.label, "Heurística");
        assert_eq!(badge.class, "badge b-h");
        assert_eq!(badge.title, "via Heurística");
    }

    #[test]
    fn test_badge_unknown() {
        for origem in [None, Some("gpt"), Some("")] {
            let badge = badge_for(origem);
            assert_eq!(badge.label, "?");
            assert_eq!(badge.class, "badge");
            assert_eq!(badge.title, "");
        }
    }

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(Some(0.873)), "87.3%");
        assert_eq!(format_confidence(Some(1.0)), "100.0%");
        assert_eq!(format_confidence(Some(0.62)), "62.0%");
        assert_eq!(format_confidence(Some(0.0)), "0.0%");
        assert_eq!(format_confidence(None), "-");
        assert_eq!(format_confidence(Some(f64::NAN)), "-");
    }
}
