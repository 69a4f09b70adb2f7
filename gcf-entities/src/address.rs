use crate::geo::{Bounds, Coordinates, Degrees};

/// The provider-agnostic result of a lookup.
///
/// Every field is optional. The [`Default`] value is the empty
/// baseline that providers fill with whatever the upstream
/// service delivered.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedAddress {
    pub latitude          : Option<Degrees>,
    pub longitude         : Option<Degrees>,
    pub bounds            : Option<Bounds>,
    pub street_number     : Option<String>,
    pub street_name       : Option<String>,
    pub city              : Option<String>,
    pub zipcode           : Option<String>,
    pub county            : Option<String>,
    pub region_code       : Option<String>,
    pub country           : Option<String>,
    pub timezone          : Option<String>,
    pub formatted_address : Option<String>,
}

impl NormalizedAddress {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The position, if both coordinates are present and valid.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.latitude.as_ref().and_then(Degrees::to_f64)?;
        let lng = self.longitude.as_ref().and_then(Degrees::to_f64)?;
        Coordinates::try_from_lat_lng_deg(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(NormalizedAddress::default().is_empty());
        let addr = NormalizedAddress {
            city: Some("Anoka".into()),
            ..Default::default()
        };
        assert!(!addr.is_empty());
    }

    #[test]
    fn coordinates_from_degrees() {
        let mut addr = NormalizedAddress {
            latitude: Some("45.2040307639451".into()),
            longitude: Some("-93.3995726274743".into()),
            ..Default::default()
        };
        let pos = addr.coordinates().unwrap();
        assert_eq!(45.2040307639451, pos.lat());
        assert_eq!(-93.3995726274743, pos.lng());

        addr.longitude = None;
        assert!(addr.coordinates().is_none());

        addr.longitude = Some("999".into());
        assert!(addr.coordinates().is_none());
    }
}
