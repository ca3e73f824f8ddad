//! Basics.
//!
//! This module provides the types and traits record data implementations
//! are built from.
//!
//! Record data has to deal with octet sequences of variable length. Since
//! there is no single best type for such data – slices, vecs, or byte
//! arrays may all be preferred in certain cases –, the crate uses the
//! traits of the [octseq] crate to be generic over byte sequences. We call
//! types that provide these traits ‘octet sequences’ or simply ‘octets.’
//!
//! Extracting data from its wire-format representation is called *parsing*
//! and happens through a bounds-checked cursor over the underlying octets,
//! [`Parser`][octseq::parse::Parser]. Producing the wire format is called
//! *composing* and appends to an octets builder. The traits and helper
//! types for both live in the [wire] module.
//!
//! The capabilities every record data type provides – knowing its encoded
//! length, writing itself out, being parsed from its record data bytes –
//! are defined by the traits in the [rdata] module. The [iana] module
//! contains types for the numeric parameters assigned by IANA registries,
//! and [cmp] defines the canonical ordering used within RRsets.

pub mod cmp;
pub mod iana;
pub mod rdata;
pub mod wire;

pub use self::iana::{DigestAlg, Rtype, SecAlg};
pub use self::wire::ParseError;
