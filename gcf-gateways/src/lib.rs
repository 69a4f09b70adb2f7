pub mod geocode_farm;
pub mod http;
