//! Bounding-box filter region
//!
//! A rectangle expressed as min/max longitude and latitude, in the fixed
//! order the geocoding API expects: `minLng,minLat,maxLng,maxLat`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Validate and store a box from its four ordered coordinates
    ///
    /// Longitudes must be finite and within [-180, 180], latitudes within
    /// [-90, 90], and each minimum no greater than its maximum.
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Result<Self> {
        let finite = [min_lng, min_lat, max_lng, max_lat]
            .iter()
            .all(|n| n.is_finite());

        if !finite
            || !(-180.0..=180.0).contains(&min_lng)
            || !(-90.0..=90.0).contains(&min_lat)
            || !(-180.0..=180.0).contains(&max_lng)
            || !(-90.0..=90.0).contains(&max_lat)
            || min_lng > max_lng
            || min_lat > max_lat
        {
            return Err(Error::Validation("Invalid bounds".to_string()));
        }

        Ok(Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        })
    }

    /// Validate a box given as a 4-element sequence
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            &[min_lng, min_lat, max_lng, max_lat] => {
                Self::new(min_lng, min_lat, max_lng, max_lat)
            }
            _ => Err(Error::Validation("Invalid bounds".to_string())),
        }
    }
}

impl FromStr for Bounds {
    type Err = Error;

    /// Parse `"minLng,minLat,maxLng,maxLat"`, failing on any non-numeric part
    fn from_str(s: &str) -> Result<Self> {
        let values: Vec<f64> = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| Error::Validation("Invalid bounds".to_string()))
            })
            .collect::<Result<_>>()?;

        Self::from_slice(&values)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lng, self.min_lat, self.max_lng, self.max_lat
        )
    }
}
