use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed vocabulary of timings the time service may return for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Imsak,
    Midnight,
    Firstthird,
    Lastthird,
}

impl Prayer {
    /// The five prayers that are eligible for notifications and that make up
    /// the visible list, in their daily order.
    pub const RELEVANT: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn is_relevant(&self) -> bool {
        Self::RELEVANT.contains(self)
    }

    /// Maps a key from the service's timings object. Unknown keys yield
    /// `None` so new vocabulary on the wire is ignored rather than rejected.
    pub fn from_wire(key: &str) -> Option<Prayer> {
        let prayer = match key {
            "Fajr" => Prayer::Fajr,
            "Sunrise" => Prayer::Sunrise,
            "Dhuhr" => Prayer::Dhuhr,
            "Asr" => Prayer::Asr,
            "Sunset" => Prayer::Sunset,
            "Maghrib" => Prayer::Maghrib,
            "Isha" => Prayer::Isha,
            "Imsak" => Prayer::Imsak,
            "Midnight" => Prayer::Midnight,
            "Firstthird" => Prayer::Firstthird,
            "Lastthird" => Prayer::Lastthird,
            _ => return None,
        };
        Some(prayer)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Sunset => "Sunset",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
            Prayer::Imsak => "Imsak",
            Prayer::Midnight => "Midnight",
            Prayer::Firstthird => "Firstthird",
            Prayer::Lastthird => "Lastthird",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
