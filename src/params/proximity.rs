//! Proximity bias point
//!
//! A longitude/latitude point the remote service uses to rank nearby
//! results higher. Wire order is `lng,lat`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated proximity point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Proximity {
    pub lng: f64,
    pub lat: f64,
}

impl Proximity {
    /// Validate and store a point
    ///
    /// Longitude must be finite and within [-180, 180], latitude within
    /// [-90, 90].
    pub fn new(lng: f64, lat: f64) -> Result<Self> {
        if !lng.is_finite()
            || !lat.is_finite()
            || !(-180.0..=180.0).contains(&lng)
            || !(-90.0..=90.0).contains(&lat)
        {
            return Err(Error::Validation("Invalid proximity value".to_string()));
        }

        Ok(Self { lng, lat })
    }

    /// Validate a point given as a 2-element sequence
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            &[lng, lat] => Self::new(lng, lat),
            _ => Err(Error::Validation("Invalid proximity syntax".to_string())),
        }
    }
}

impl FromStr for Proximity {
    type Err = Error;

    /// Parse `"lng,lat"`, failing on any non-numeric part
    fn from_str(s: &str) -> Result<Self> {
        let values: Vec<f64> = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| Error::Validation("Invalid proximity value".to_string()))
            })
            .collect::<Result<_>>()?;

        Self::from_slice(&values)
    }
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_proximity() {
        let point = Proximity::from_slice(&[13.4, 52.5]).unwrap();
        assert_relative_eq!(point.lng, 13.4);
        assert_relative_eq!(point.lat, 52.5);
    }

    #[test]
    fn test_out_of_range() {
        assert!(Proximity::from_slice(&[200.0, 0.0]).is_err());
        assert!(Proximity::from_slice(&[0.0, 91.0]).is_err());
        assert!(Proximity::from_slice(&[-180.5, 0.0]).is_err());
    }

    #[test]
    fn test_wrong_length() {
        assert!(Proximity::from_slice(&[]).is_err());
        assert!(Proximity::from_slice(&[1.0]).is_err());
        assert!(Proximity::from_slice(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Proximity::new(f64::NAN, 0.0).is_err());
        assert!(Proximity::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_parse_from_str() {
        let point: Proximity = "0,0".parse().unwrap();
        assert_relative_eq!(point.lng, 0.0);
        assert!("13.4,abc".parse::<Proximity>().is_err());
    }

    #[test]
    fn test_display() {
        let point = Proximity::new(13.4, 52.5).unwrap();
        assert_eq!(point.to_string(), "13.4,52.5");
    }
}
