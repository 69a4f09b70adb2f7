pub mod error;
pub mod gateways;
pub mod validate;

pub mod entities {
    pub use gcf_entities::{address::*, geo::*, lookup::*};
}

pub use self::error::{Error, Result};
