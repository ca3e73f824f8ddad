//! Record data for the delegation signer family of DNS record types.
//!
//! The four record types DS, CDS, TA, and DLV are registered as distinct
//! types but share a single wire format: a fixed four octet header carrying
//! the key tag, security algorithm, and digest type, followed by the digest
//! of a DNSKEY record. This crate provides a strongly typed implementation
//! of that record data together with the base layer such implementations
//! are built on.
//!
//! # Modules
//!
//! * [base] contains the fundamental types and traits for dealing with
//!   record data in wire format,
//! * [rdata] contains the record data implementation itself and the
//!   registration of the record types it serves,
//! * [utils] contains encoding helpers.
//!
//! # Reference of Feature Flags
//!
//! The following feature flags are available:
//!
//! * `bytes`: Enables using the types `Bytes` and `BytesMut` from the
//!   [bytes](https://github.com/tokio-rs/bytes) crate as octet sequences.
//! * `serde`: Enables serde serialization support.
//! * `smallvec`: Enables the use of the `SmallVec` type from the
//!   [smallvec](https://github.com/servo/rust-smallvec) crate as octet
//!   sequences.
//! * `std`: Support for the Rust std library. This feature is enabled by
//!   default.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod base;
pub mod rdata;
pub mod utils;
