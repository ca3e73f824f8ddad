//! Resource data implementations.
//!
//! This module contains the record data implementation for the delegation
//! signer family of record types and the registration of the record types
//! it serves:
//!
//! * [ds] provides [`Ds`], the record data shared by the DS, CDS, TA, and
//!   DLV record types,
//! * [registry] associates those record types with their decoder so a
//!   message parser can dispatch on the numeric type value.
//!
//! The record data type is re-exported at the top level here.

pub mod ds;
pub mod registry;

pub use self::ds::Ds;
