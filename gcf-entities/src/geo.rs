use std::fmt;

/// A coordinate value in decimal degrees.
///
/// The value is kept in the textual form it was delivered in,
/// e.g. `"45.2040307639451"`. Converting it into a float is up
/// to the caller (see [`Degrees::to_f64`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Degrees(String);

impl Degrees {
    pub fn new(deg: impl Into<String>) -> Self {
        Self(deg.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.trim().parse().ok().filter(|deg: &f64| deg.is_finite())
    }
}

impl From<f64> for Degrees {
    fn from(deg: f64) -> Self {
        Self(deg.to_string())
    }
}

impl From<String> for Degrees {
    fn from(deg: String) -> Self {
        Self(deg)
    }
}

impl From<&str> for Degrees {
    fn from(deg: &str) -> Self {
        Self(deg.to_owned())
    }
}

impl AsRef<str> for Degrees {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A valid position on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    pub const LAT_DEG_MAX: f64 = 90.0;
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LNG_DEG_MAX: f64 = 180.0;
    pub const LNG_DEG_MIN: f64 = -180.0;

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if (Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&lat)
            && (Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&lng)
        {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// The bounding box of a result.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub south : Degrees,
    pub west  : Degrees,
    pub north : Degrees,
    pub east  : Degrees,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_keep_their_textual_form() {
        let lat = Degrees::new("45.2040307639451");
        assert_eq!("45.2040307639451", lat.as_str());
        assert_eq!("45.2040307639451", lat.to_string());
        assert_eq!(Some(45.2040307639451), lat.to_f64());
    }

    #[test]
    fn degrees_that_are_not_numbers() {
        assert_eq!(None, Degrees::new("").to_f64());
        assert_eq!(None, Degrees::new("north").to_f64());
        assert_eq!(None, Degrees::new("NaN").to_f64());
        assert_eq!(Some(-93.5), Degrees::new(" -93.5 ").to_f64());
    }

    #[test]
    fn coordinates_within_range() {
        let pos = Coordinates::try_from_lat_lng_deg(45.2, -93.4).unwrap();
        assert_eq!(45.2, pos.lat());
        assert_eq!(-93.4, pos.lng());
        assert!(Coordinates::try_from_lat_lng_deg(90.0, 180.0).is_some());
        assert!(Coordinates::try_from_lat_lng_deg(-90.0, -180.0).is_some());
    }

    #[test]
    fn coordinates_out_of_range() {
        assert!(Coordinates::try_from_lat_lng_deg(90.1, 0.0).is_none());
        assert!(Coordinates::try_from_lat_lng_deg(0.0, -180.1).is_none());
        assert!(Coordinates::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
    }
}
