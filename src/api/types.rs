//! Wire types for the RTPI `routeinformation` endpoint.

use serde::{Deserialize, Serialize};

/// A single transit stop.
///
/// The six name fields are required; a payload missing any of them is
/// rejected when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusStop {
    /// Unique identifier within a loaded set.
    pub stopid: String,
    pub displaystopid: String,
    pub shortname: String,
    pub shortnamelocalized: String,
    pub fullname: String,
    pub fullnamelocalized: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub operators: Vec<StopOperator>,
}

impl BusStop {
    /// The fields a search text is matched against, in display order.
    pub fn text_fields(&self) -> [&str; 6] {
        [
            self.stopid.as_str(),
            self.displaystopid.as_str(),
            self.shortname.as_str(),
            self.shortnamelocalized.as_str(),
            self.fullname.as_str(),
            self.fullnamelocalized.as_str(),
        ]
    }

    /// Case-sensitive substring match against any of the text fields.
    ///
    /// An empty needle matches every stop.
    pub fn matches(&self, needle: &str) -> bool {
        self.text_fields().iter().any(|field| field.contains(needle))
    }
}

/// An operator serving a stop, with the routes it runs there.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StopOperator {
    pub name: String,
    #[serde(default)]
    pub routes: Vec<String>,
}

/// One direction/variant of a route with its ordered stops.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusLine {
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub originlocalized: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub destinationlocalized: String,
    #[serde(default)]
    pub lastupdated: String,
    pub stops: Vec<BusStop>,
}

/// Response envelope shared by the RTPI endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteInformationResponse {
    pub errorcode: String,
    #[serde(default)]
    pub errormessage: String,
    #[serde(default)]
    pub numberofresults: u32,
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub results: Vec<BusLine>,
}

/// Service-level result codes carried in `errorcode`.
pub mod error_codes {
    pub const SUCCESS: &str = "0";
    pub const NO_RESULTS: &str = "1";
}
