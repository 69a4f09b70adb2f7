use crate::{
    entities::{Coordinates, LookupOptions, LookupRequest, NormalizedAddress, Query},
    Result,
};

/// A geocoding service that resolves addresses and positions
/// into a [`NormalizedAddress`].
///
/// Only the first candidate of the upstream service is returned.
pub trait GeocodeProvider {
    /// A constant identifier of the provider.
    fn name(&self) -> &'static str;

    fn geocode(&self, address: &str, options: &LookupOptions) -> Result<NormalizedAddress>;

    fn reverse(&self, pos: Coordinates, options: &LookupOptions) -> Result<NormalizedAddress>;

    fn lookup(&self, req: &LookupRequest) -> Result<NormalizedAddress> {
        let LookupRequest { query, options } = req;
        match query {
            Query::Address(address) => self.geocode(address, options),
            Query::Coordinates(pos) => self.reverse(*pos, options),
        }
    }
}

impl<T> GeocodeProvider for Box<T>
where
    T: GeocodeProvider + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }
    fn geocode(&self, address: &str, options: &LookupOptions) -> Result<NormalizedAddress> {
        (**self).geocode(address, options)
    }
    fn reverse(&self, pos: Coordinates, options: &LookupOptions) -> Result<NormalizedAddress> {
        (**self).reverse(pos, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct DummyGeoGW;

    impl GeocodeProvider for DummyGeoGW {
        fn name(&self) -> &'static str {
            "dummy"
        }
        fn geocode(&self, address: &str, options: &LookupOptions) -> Result<NormalizedAddress> {
            Ok(NormalizedAddress {
                formatted_address: Some(address.to_owned()),
                country: options.country.clone(),
                ..Default::default()
            })
        }
        fn reverse(&self, _: Coordinates, _: &LookupOptions) -> Result<NormalizedAddress> {
            Err(Error::NoResult("reverse".into()))
        }
    }

    #[test]
    fn lookup_address() {
        let gw: Box<dyn GeocodeProvider> = Box::new(DummyGeoGW);
        let req = LookupRequest::address("Anoka").with_country("us");
        let addr = gw.lookup(&req).unwrap();
        assert_eq!(Some("Anoka"), addr.formatted_address.as_deref());
        assert_eq!(Some("us"), addr.country.as_deref());
    }

    #[test]
    fn lookup_coordinates() {
        let pos = Coordinates::try_from_lat_lng_deg(1.0, 2.0).unwrap();
        let req = LookupRequest::coordinates(pos);
        assert!(matches!(DummyGeoGW.lookup(&req), Err(Error::NoResult(_))));
    }
}
