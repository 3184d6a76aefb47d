//! Birth reading pipeline.
//!
//! ```text
//! ReadingRequest ─► BirthMoment ─► JulianDay ─► Moon λ ─► Placement ─► Reading
//! ```
//!
//! Pure and synchronous; identical input always yields identical output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::lunar::moon_longitude;
use super::sectors::Placement;
use crate::error::{AstroError, AstroResult};
use crate::models::sector::normalize_degrees;
use crate::models::BirthMoment;

/// Incoming reading request. Every field is optional on the wire so that
/// absence can be reported uniformly instead of as a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Date of birth, `YYYY-MM-DD`.
    #[serde(default)]
    pub dob: Option<String>,
    /// Time of birth, `HH:MM` in UTC.
    #[serde(default)]
    pub tob: Option<String>,
    /// Place of birth. Echoed back but not used in the computation.
    #[serde(default)]
    pub place: Option<String>,
}

/// Bilingual reading returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub raasi_tamil: String,
    pub natchathiram_tamil: String,
    pub prediction_tamil: String,
    pub raasi_english: String,
    pub natchathiram_english: String,
    pub prediction_english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> AstroResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AstroError::MissingField(field)),
    }
}

/// Validated view of a request: all required fields are present.
#[derive(Debug, Clone, Copy)]
pub struct ValidRequest<'a> {
    pub name: &'a str,
    pub dob: &'a str,
    pub tob: &'a str,
    pub place: Option<&'a str>,
}

impl ReadingRequest {
    /// Presence check only. Fails on the first missing field, in
    /// `name`, `dob`, `tob` order.
    pub fn validate(&self) -> AstroResult<ValidRequest<'_>> {
        Ok(ValidRequest {
            name: required(&self.name, "name")?,
            dob: required(&self.dob, "dob")?,
            tob: required(&self.tob, "tob")?,
            place: self
                .place
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty()),
        })
    }
}

pub fn tamil_greeting(name: &str, raasi: &str, natchathiram: &str) -> String {
    format!(
        "வணக்கம் {}, உங்கள் ராசி {}, நட்சத்திரம் {}. இனிய நாள் வாழ்த்துகள்!",
        name, raasi, natchathiram
    )
}

pub fn english_greeting(name: &str, raasi: &str, natchathiram: &str) -> String {
    format!(
        "Hello {}, your Raasi is {} and Nakshatra is {}. Have a great day!",
        name, raasi, natchathiram
    )
}

/// Lunar placement for a birth moment.
pub fn placement_for(moment: &BirthMoment) -> AstroResult<Placement> {
    let jd = moment.julian_day();
    let raw = moon_longitude(jd).value();
    if !raw.is_finite() {
        return Err(AstroError::NonFiniteLongitude(raw));
    }

    let placement = Placement::from_longitude(raw);
    debug!(
        jd = jd.value(),
        longitude = normalize_degrees(raw),
        raasi = placement.raasi.value(),
        nakshatra = placement.nakshatra.value(),
        "computed lunar placement"
    );
    Ok(placement)
}

/// Run the whole pipeline for one request.
pub fn compute_reading(request: &ReadingRequest) -> AstroResult<Reading> {
    let valid = request.validate()?;
    let moment = BirthMoment::parse(valid.dob, valid.tob)?;
    let placement = placement_for(&moment)?;

    let raasi = placement.raasi.names();
    let star = placement.nakshatra.names();

    Ok(Reading {
        raasi_tamil: raasi.tamil.to_string(),
        natchathiram_tamil: star.tamil.to_string(),
        prediction_tamil: tamil_greeting(valid.name, raasi.tamil, star.tamil),
        raasi_english: raasi.english.to_string(),
        natchathiram_english: star.english.to_string(),
        prediction_english: english_greeting(valid.name, raasi.english, star.english),
        place: valid.place.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, dob: &str, tob: &str) -> ReadingRequest {
        ReadingRequest {
            name: Some(name.to_string()),
            dob: Some(dob.to_string()),
            tob: Some(tob.to_string()),
            place: None,
        }
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut req = request("Anu", "2000-01-01", "00:00");
        req.name = None;
        assert!(matches!(req.validate(), Err(AstroError::MissingField("name"))));

        let mut req = request("Anu", "2000-01-01", "00:00");
        req.tob = Some(String::new());
        assert!(matches!(req.validate(), Err(AstroError::MissingField("tob"))));

        let req = ReadingRequest::default();
        assert!(matches!(req.validate(), Err(AstroError::MissingField("name"))));
    }

    #[test]
    fn test_validate_blank_place_is_absent() {
        let mut req = request("Anu", "2000-01-01", "00:00");
        req.place = Some("   ".to_string());
        assert_eq!(req.validate().unwrap().place, None);

        req.place = Some(" Chennai ".to_string());
        assert_eq!(req.validate().unwrap().place, Some("Chennai"));
    }

    #[test]
    fn test_greetings() {
        assert_eq!(
            english_greeting("Anu", "Mesham", "Ashwini"),
            "Hello Anu, your Raasi is Mesham and Nakshatra is Ashwini. Have a great day!"
        );
        assert_eq!(
            tamil_greeting("Anu", "மேஷம்", "அசுவினி"),
            "வணக்கம் Anu, உங்கள் ராசி மேஷம், நட்சத்திரம் அசுவினி. இனிய நாள் வாழ்த்துகள்!"
        );
    }

    #[test]
    fn test_reading_fixture() {
        let mut req = request("Anu", "2000-01-01", "00:00");
        req.place = Some("Chennai".to_string());
        let reading = compute_reading(&req).unwrap();

        assert_eq!(reading.raasi_english, "Viruchigam");
        assert_eq!(reading.raasi_tamil, "விருச்சிகம்");
        assert_eq!(reading.natchathiram_english, "Anuradha");
        assert_eq!(reading.natchathiram_tamil, "அனுராதா");
        assert_eq!(
            reading.prediction_english,
            "Hello Anu, your Raasi is Viruchigam and Nakshatra is Anuradha. Have a great day!"
        );
        assert_eq!(
            reading.prediction_tamil,
            "வணக்கம் Anu, உங்கள் ராசி விருச்சிகம், நட்சத்திரம் அனுராதா. இனிய நாள் வாழ்த்துகள்!"
        );
        assert_eq!(reading.place.as_deref(), Some("Chennai"));
    }

    #[test]
    fn test_reading_is_deterministic() {
        let req = request("Kavin", "1990-06-15", "12:30");
        let first = compute_reading(&req).unwrap();
        for _ in 0..5 {
            assert_eq!(compute_reading(&req).unwrap(), first);
        }
        assert_eq!(first.raasi_english, "Meenam");
        assert_eq!(first.natchathiram_english, "Uthratathi");
    }

    #[test]
    fn test_malformed_date_is_computation_error() {
        let err = compute_reading(&request("Anu", "01/01/2000", "00:00")).unwrap_err();
        assert!(matches!(err, AstroError::InvalidDate { .. }));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_place_does_not_change_placement() {
        let mut a = request("Anu", "2024-01-01", "10:00");
        let mut b = a.clone();
        a.place = Some("Chennai".to_string());
        b.place = Some("Madurai".to_string());
        let ra = compute_reading(&a).unwrap();
        let rb = compute_reading(&b).unwrap();
        assert_eq!(ra.raasi_english, rb.raasi_english);
        assert_eq!(ra.natchathiram_english, rb.natchathiram_english);
        assert_eq!(ra.raasi_english, "Kanni");
        assert_eq!(ra.natchathiram_english, "Hastham");
    }

    #[test]
    fn test_reading_serializes_without_absent_place() {
        let reading = compute_reading(&request("Anu", "2000-01-01", "00:00")).unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 6);
        assert!(obj.contains_key("raasi_tamil"));
        assert!(obj.contains_key("prediction_english"));
        assert!(!obj.contains_key("place"));
    }
}
