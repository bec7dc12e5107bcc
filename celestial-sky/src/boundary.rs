//! Interfaces to the services that surround the engine.
//!
//! Place-name search and sky narration live outside this crate. They are
//! described here as traits so that a caller can plug in an HTTP client, a
//! fixture or a cache without the engine knowing which.

use crate::moment::ObserverMoment;
use crate::SkyResult;
use celestial_time::ClockTime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geocoder hit. Longitude is east-positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

impl GeoLocation {
    pub fn moment(&self, date: NaiveDate, time: ClockTime) -> SkyResult<ObserverMoment> {
        ObserverMoment::new(date, time, self.latitude, self.longitude)
    }
}

pub trait Geocoder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Forward search by free-text place name, best match first.
    fn search(&self, query: &str) -> Result<Vec<GeoLocation>, Self::Error>;

    /// Reverse lookup of the place nearest a coordinate.
    fn reverse(&self, latitude: f64, longitude: f64) -> Result<GeoLocation, Self::Error>;
}

pub trait Narrator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Free-text description of the sky for the request.
    fn narrate(&self, request: &NarrationRequest) -> Result<String, Self::Error>;
}

const SYSTEM_PROMPT: &str =
    "You are an expert astronomer providing accurate and engaging information about the night sky.";

/// What a narrator is asked to describe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrationRequest {
    pub moment: ObserverMoment,
    pub location_name: String,
}

impl NarrationRequest {
    pub fn new(moment: ObserverMoment, location_name: impl Into<String>) -> Self {
        Self {
            moment,
            location_name: location_name.into(),
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    pub fn user_prompt(&self) -> String {
        format!(
            "Provide a detailed explanation of what would be visible in the night sky \
             on {date} at {time} from the location: {name} (coordinates: {lat}, {lon}).\n\
             \n\
             Include information about:\n\
             - Visible planets and their positions\n\
             - Notable stars and constellations\n\
             - Moon phase and position (if visible)\n\
             - Any special astronomical events (meteor showers, eclipses, etc.)\n\
             - Brief interesting facts about some of the visible celestial objects\n\
             \n\
             Format your response in a conversational, engaging way that would help a stargazer \
             understand what they're looking at. Keep your response under 400 words.",
            date = self.moment.date().format("%Y-%m-%d"),
            time = self.moment.time(),
            name = self.location_name,
            lat = self.moment.latitude_deg(),
            lon = self.moment.longitude_deg(),
        )
    }
}
