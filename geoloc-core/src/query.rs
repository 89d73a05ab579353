use crate::error::ResolveError;

/// A raw input string that passed classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationQuery {
    /// `"<City>, <State>"`, kept verbatim.
    CityState(String),
    /// Five ASCII digits.
    Zip(String),
}

impl LocationQuery {
    /// Decide the shape of `raw` without touching the network.
    ///
    /// Only the comma count is checked for the city/state form, so `", WI"`
    /// is accepted and left for the provider to reject.
    pub fn classify(raw: &str) -> Result<Self, ResolveError> {
        if raw.split(',').count() == 2 {
            Ok(LocationQuery::CityState(raw.to_owned()))
        } else if is_zip(raw) {
            Ok(LocationQuery::Zip(raw.to_owned()))
        } else if raw.is_empty() {
            Err(ResolveError::NoInput)
        } else {
            Err(ResolveError::InvalidFormat {
                input: raw.to_owned(),
            })
        }
    }

    /// The input string this query was classified from.
    pub fn raw(&self) -> &str {
        match self {
            LocationQuery::CityState(s) | LocationQuery::Zip(s) => s,
        }
    }

    /// Provider query parameter for this location.
    pub fn query_param(&self) -> (&'static str, String) {
        match self {
            LocationQuery::CityState(s) => ("q", format!("{s}, US")),
            LocationQuery::Zip(zip) => ("zip", zip.clone()),
        }
    }
}

fn is_zip(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}
