//! IANA definitions for DNS.
//!
//! This module contains types for parameters defined in IANA registries
//! that are relevant for this crate.
//!
//! All types defined herein follow the same basic structure: a newtype
//! around the raw integer value with all well-defined values available as
//! associated constants. Since the registries can and do grow, the types
//! accept the full set of possible integer values. A well-defined constant
//! and a raw value carrying the same integer compare as equal.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` trait
//! for these. `FromStr` and `Display` are implemented to convert from
//! string representations and back. Types also implement `parse()` and
//! `compose()` for wire format data.
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here.

pub use self::digestalg::DigestAlg;
pub use self::rtype::Rtype;
pub use self::secalg::SecAlg;

#[macro_use]
mod macros;

pub mod digestalg;
pub mod rtype;
pub mod secalg;
