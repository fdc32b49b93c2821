use serde::{Deserialize, Serialize};

/// Time-of-day bucket used to pick a presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Sunrise,
    Day,
    Sunset,
    Night,
}

impl TimeOfDay {
    /// Classify a local `YYYY-MM-DDTHH:MM` timestamp by its hour.
    ///
    /// Anything that does not carry a readable hour at characters 11-12
    /// classifies as [`TimeOfDay::Night`].
    pub fn classify(local_time: &str) -> Self {
        match hour_of(local_time) {
            Some(5..=7) => Self::Sunrise,
            Some(8..=17) => Self::Day,
            Some(18..=19) => Self::Sunset,
            _ => Self::Night,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Day => "day",
            Self::Sunset => "sunset",
            Self::Night => "night",
        }
    }

    /// Background image a graphical front end loads for this bucket.
    pub fn background_asset(&self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise.jpg",
            Self::Day => "day.jpg",
            Self::Sunset => "sunset.jpg",
            Self::Night => "night.jpg",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

pub fn classify(local_time: &str) -> TimeOfDay {
    TimeOfDay::classify(local_time)
}

fn hour_of(local_time: &str) -> Option<u8> {
    let digits = local_time.get(11..13)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
