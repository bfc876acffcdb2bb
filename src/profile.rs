//! Reading-need profiles and the CSS display variables each one applies.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingNeed {
    #[default]
    General,
    Dyslexia,
    Adhd,
    Visual,
}

impl ReadingNeed {
    pub const ALL: [ReadingNeed; 4] = [
        ReadingNeed::General,
        ReadingNeed::Dyslexia,
        ReadingNeed::Adhd,
        ReadingNeed::Visual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReadingNeed::General => "general",
            ReadingNeed::Dyslexia => "dyslexia",
            ReadingNeed::Adhd => "adhd",
            ReadingNeed::Visual => "visual",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ReadingNeed::General => "General / Optimized Reading",
            ReadingNeed::Dyslexia => "Dyslexia / Reading Difficulty",
            ReadingNeed::Adhd => "ADHD / Focus Issues",
            ReadingNeed::Visual => "Visual Impairment / Sensitive Eyes",
        }
    }
}

impl fmt::Display for ReadingNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingNeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|need| need.as_str() == s)
            .ok_or_else(|| Error::Validation("Invalid reading need choice".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartSettings {
    pub settings: BTreeMap<String, String>,
    pub applied_profile: ReadingNeed,
}

struct Palette {
    font: &'static str,
    font_size: &'static str,
    line_height: &'static str,
    letter_spacing: &'static str,
    bg_primary: &'static str,
    bg_card: &'static str,
    text_primary: &'static str,
}

fn palette(need: ReadingNeed) -> Palette {
    match need {
        ReadingNeed::Dyslexia => Palette {
            font: "'Atkinson Hyperlegible', sans-serif",
            font_size: "20px",
            line_height: "2.0",
            letter_spacing: "0.06em",
            // warm background reduces glare
            bg_primary: "#f7f1e3",
            bg_card: "#ffffff",
            text_primary: "#2d3436",
        },
        ReadingNeed::Adhd => Palette {
            font: "'DM Sans', sans-serif",
            font_size: "18px",
            line_height: "1.8",
            letter_spacing: "0.02em",
            bg_primary: "#1e272e",
            bg_card: "#2d3436",
            text_primary: "#d2dae2",
        },
        ReadingNeed::Visual => Palette {
            font: "'Syne', sans-serif",
            font_size: "26px",
            line_height: "1.6",
            letter_spacing: "0.04em",
            bg_primary: "#000000",
            bg_card: "#111111",
            text_primary: "#ffffff",
        },
        ReadingNeed::General => Palette {
            font: "'Lexend', sans-serif",
            font_size: "20px",
            line_height: "1.9",
            letter_spacing: "0.04em",
            bg_primary: "#faf8f3",
            bg_card: "#ffffff",
            text_primary: "#2c2a26",
        },
    }
}

/// CSS variables for a reader's profile.
pub fn smart_settings(need: ReadingNeed) -> SmartSettings {
    let p = palette(need);
    let mut settings: BTreeMap<String, String> = [
        ("--font-reading", p.font),
        ("--font-body", p.font),
        ("--reading-font-size", p.font_size),
        ("--reading-line-height", p.line_height),
        ("--reading-letter-spacing", p.letter_spacing),
        ("--bg-primary", p.bg_primary),
        ("--bg-card", p.bg_card),
        ("--text-primary", p.text_primary),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    // frontend flag
    if need == ReadingNeed::Adhd {
        settings.insert("--focus-mode-default".to_string(), "true".to_string());
    }

    SmartSettings {
        settings,
        applied_profile: need,
    }
}
