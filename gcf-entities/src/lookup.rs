use crate::geo::Coordinates;

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Forward geocoding of a free-text address
    Address(String),
    /// Reverse geocoding of a position
    Coordinates(Coordinates),
}

/// Country and language hints of a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupOptions {
    pub country: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub query: Query,
    pub options: LookupOptions,
}

impl LookupRequest {
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            query: Query::Address(address.into()),
            options: Default::default(),
        }
    }

    pub fn coordinates(pos: Coordinates) -> Self {
        Self {
            query: Query::Coordinates(pos),
            options: Default::default(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.options.country = Some(country.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.options.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_address_request() {
        let req = LookupRequest::address("Anoka").with_country("us");
        assert_eq!(Query::Address("Anoka".into()), req.query);
        assert_eq!(Some("us"), req.options.country.as_deref());
        assert!(req.options.language.is_none());
    }

    #[test]
    fn build_coordinates_request() {
        let pos = Coordinates::try_from_lat_lng_deg(1.0, 2.0).unwrap();
        let req = LookupRequest::coordinates(pos).with_language("de");
        assert_eq!(Query::Coordinates(pos), req.query);
        assert_eq!(Some("de"), req.options.language.as_deref());
    }
}
