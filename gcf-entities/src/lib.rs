#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # gcf-entities
//!
//! Reusable, provider-agnostic entities for geocoding.
//!
//! The entities only describe the shape of requests and results.
//! They neither know how to talk to a geocoding service nor how
//! a particular service encodes its responses.

pub mod address;
pub mod geo;
pub mod lookup;
