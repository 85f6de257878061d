// Hijri calendar model
// Display-only date shown in the header

use serde::{Deserialize, Serialize};

/// Months of the Hijri year, numbered 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HijriMonth {
    Muharram = 1,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlUla,
    JumadaAlThaniyah,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQadah,
    DhuAlHijjah,
}

impl HijriMonth {
    const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlUla,
        HijriMonth::JumadaAlThaniyah,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQadah,
        HijriMonth::DhuAlHijjah,
    ];

    pub fn from_number(month: u32) -> Option<Self> {
        month
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muḥarram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi Al-Awwal",
            HijriMonth::RabiAlThani => "Rabi Al-Thani",
            HijriMonth::JumadaAlUla => "Jumada Al-Ula",
            HijriMonth::JumadaAlThaniyah => "Jumada Al-Thaniyah",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Shaban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQadah => "Du Al-Qadah",
            HijriMonth::DhuAlHijjah => "Du Al-Hijjah",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriDate {
    pub day: u32,
    pub month: HijriMonth,
    pub year: u32,
}
