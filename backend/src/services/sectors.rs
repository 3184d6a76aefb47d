//! Longitude to Raasi / Nakshatra mapping with bilingual names.

use serde::Serialize;

use crate::models::{MansionIndex, ZodiacIndex};

/// Raasi names in Tamil, from Mesham (0°) eastward.
pub const RAASI_TAMIL: [&str; 12] = [
    "மேஷம்",
    "ரிஷபம்",
    "மிதுனம்",
    "கடகம்",
    "சிம்மம்",
    "கன்னி",
    "துலாம்",
    "விருச்சிகம்",
    "தனுசு",
    "மகரம்",
    "கும்பம்",
    "மீனம்",
];

/// Raasi names transliterated to English, index-aligned with [`RAASI_TAMIL`].
pub const RAASI_ENGLISH: [&str; 12] = [
    "Mesham",
    "Rishabam",
    "Mithunam",
    "Kadagam",
    "Simmam",
    "Kanni",
    "Thulam",
    "Viruchigam",
    "Dhanusu",
    "Magaram",
    "Kumbam",
    "Meenam",
];

/// Nakshatra names in Tamil, from Ashwini (0°) eastward.
pub const NAKSHATRA_TAMIL: [&str; 27] = [
    "அசுவினி",
    "பரணி",
    "கிருத்திகை",
    "ரோகிணி",
    "மிருகசீரிஷம்",
    "திருவாதிரை",
    "புனர்பூசம்",
    "பூசம்",
    "ஆயில்யம்",
    "மகம்",
    "பூரம்",
    "உத்திரம்",
    "ஹஸ்தம்",
    "சித்திரை",
    "சுவாதி",
    "விசாகம்",
    "அனுராதா",
    "ஜ்யேஷ்டா",
    "மூலம்",
    "பூராடம்",
    "உத்திராடம்",
    "திருவோணம்",
    "அவிட்டம்",
    "சதயம்",
    "பூரட்டாதி",
    "உத்திரட்டாதி",
    "ரேவதி",
];

/// Nakshatra names transliterated to English, index-aligned with [`NAKSHATRA_TAMIL`].
pub const NAKSHATRA_ENGLISH: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashirsha",
    "Thiruvathirai",
    "Punarpoosam",
    "Poosam",
    "Aayilyam",
    "Magam",
    "Pooram",
    "Uthiram",
    "Hastham",
    "Chithirai",
    "Swathi",
    "Visakam",
    "Anuradha",
    "Jyeshta",
    "Moolam",
    "Pooradam",
    "Uthradam",
    "Thiruvonam",
    "Avittam",
    "Sathayam",
    "Pooratathi",
    "Uthratathi",
    "Revathi",
];

/// A sector name in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectorNames {
    pub tamil: &'static str,
    pub english: &'static str,
}

impl ZodiacIndex {
    pub fn names(&self) -> SectorNames {
        let i = usize::from(*self);
        SectorNames {
            tamil: RAASI_TAMIL[i],
            english: RAASI_ENGLISH[i],
        }
    }
}

impl MansionIndex {
    pub fn names(&self) -> SectorNames {
        let i = usize::from(*self);
        SectorNames {
            tamil: NAKSHATRA_TAMIL[i],
            english: NAKSHATRA_ENGLISH[i],
        }
    }
}

/// Raasi containing the given ecliptic longitude (any real degrees).
pub fn zodiac_index(longitude_deg: f64) -> ZodiacIndex {
    ZodiacIndex::from_longitude(longitude_deg)
}

/// Nakshatra containing the given ecliptic longitude (any real degrees).
pub fn mansion_index(longitude_deg: f64) -> MansionIndex {
    MansionIndex::from_longitude(longitude_deg)
}

/// Both placements of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub raasi: ZodiacIndex,
    pub nakshatra: MansionIndex,
}

impl Placement {
    pub fn from_longitude(longitude_deg: f64) -> Self {
        Self {
            raasi: zodiac_index(longitude_deg),
            nakshatra: mansion_index(longitude_deg),
        }
    }
}
