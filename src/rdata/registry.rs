//! Registration of record types with their record data decoders.
//!
//! A message parser that encounters a resource record knows the numeric
//! record type and the record data octets delimited by the RDLENGTH field.
//! To construct typed record data, it needs a mapping from the type value
//! to a decoder for that type. This module provides that mapping for the
//! record types implemented by this crate: a static registration list
//! associating each type value with a decoder factory.
//!
//! All four registered types share [`Ds`] as their record data. The wire
//! format is identical and the record data does not retain which type it
//! was decoded for, so a single factory serves all registrations.

use super::ds::Ds;
use crate::base::iana::Rtype;
use crate::base::wire::ParseError;
use octseq::parse::Parser;
#[cfg(feature = "std")]
use std::vec::Vec;

//------------ Factory -------------------------------------------------------

/// A decoder factory for the record data of one record type.
///
/// The factory receives a parser positioned at the beginning of the
/// record data and delimited to exactly its length. The returned record
/// data borrows from the underlying message.
pub type Factory =
    for<'a> fn(&mut Parser<'a, [u8]>) -> Result<Ds<&'a [u8]>, ParseError>;

/// Decodes delegation signer record data.
fn decode_ds<'a>(
    parser: &mut Parser<'a, [u8]>,
) -> Result<Ds<&'a [u8]>, ParseError> {
    Ds::parse(parser)
}

/// The static registration list: one entry per registered record type.
///
/// The list is immutable data, so lookups need no initialization guard.
static REGISTRATIONS: &[(Rtype, Factory)] = &[
    (Rtype::DS, decode_ds),
    (Rtype::CDS, decode_ds),
    (Rtype::TA, decode_ds),
    (Rtype::DLV, decode_ds),
];

/// Returns the decoder factory registered for a record type.
///
/// Returns `None` for record types this crate has no decoder for. The
/// caller then has to treat the record data as opaque octets.
pub fn decoder_for(rtype: Rtype) -> Option<Factory> {
    REGISTRATIONS
        .iter()
        .find(|&&(registered, _)| registered == rtype)
        .map(|&(_, factory)| factory)
}

/// Returns an iterator over all registered record types.
pub fn registered_rtypes() -> impl Iterator<Item = Rtype> {
    REGISTRATIONS.iter().map(|&(rtype, _)| rtype)
}

//------------ Registry ------------------------------------------------------

/// An owned mapping from record types to decoder factories.
///
/// Dispatchers that want to combine the decoders of this crate with their
/// own can assemble their own registry. Registering a factory for a type
/// value that already has one replaces the earlier registration, so
/// registering the same mapping repeatedly is harmless.
#[cfg(feature = "std")]
pub struct Registry {
    entries: Vec<(Rtype, Factory)>,
}

#[cfg(feature = "std")]
impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Registry {
            entries: Vec::new(),
        }
    }

    /// Creates a registry seeded with the well-known registrations.
    #[must_use]
    pub fn well_known() -> Self {
        Registry {
            entries: REGISTRATIONS.into(),
        }
    }

    /// Registers a decoder factory for a record type.
    pub fn register(&mut self, rtype: Rtype, factory: Factory) {
        match self.entries.iter_mut().find(|entry| entry.0 == rtype) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((rtype, factory)),
        }
    }

    /// Returns the decoder factory registered for a record type.
    pub fn decoder_for(&self, rtype: Rtype) -> Option<Factory> {
        self.entries
            .iter()
            .find(|&&(registered, _)| registered == rtype)
            .map(|&(_, factory)| factory)
    }
}

#[cfg(feature = "std")]
impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

//============ Test ==========================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use crate::base::iana::{DigestAlg, SecAlg};

    const SAMPLE: &[u8] = b"\x00\x0A\x08\x02\xde\xad\xbe\xef";

    #[test]
    fn dispatch() {
        for rtype in [Rtype::DS, Rtype::CDS, Rtype::TA, Rtype::DLV] {
            let factory = decoder_for(rtype).unwrap();
            let mut parser = Parser::from_ref(SAMPLE);
            let ds = factory(&mut parser).unwrap();
            assert_eq!(parser.remaining(), 0);
            assert_eq!(ds.key_tag(), 10);
            assert_eq!(ds.algorithm(), SecAlg::RSASHA256);
            assert_eq!(ds.digest_type(), DigestAlg::SHA256);
            assert_eq!(ds.digest(), b"\xde\xad\xbe\xef");
        }

        assert!(decoder_for(Rtype::MX).is_none());
        assert!(decoder_for(Rtype::from_int(4711)).is_none());
    }

    #[test]
    fn registered() {
        let rtypes: Vec<_> = registered_rtypes().collect();
        assert_eq!(
            rtypes,
            [Rtype::DS, Rtype::CDS, Rtype::TA, Rtype::DLV]
        );
    }

    #[test]
    fn registry() {
        let mut registry = Registry::well_known();
        assert!(registry.decoder_for(Rtype::DS).is_some());
        assert!(registry.decoder_for(Rtype::MX).is_none());

        fn refuse<'a>(
            _: &mut Parser<'a, [u8]>,
        ) -> Result<Ds<&'a [u8]>, ParseError> {
            Err(ParseError::Truncated)
        }

        registry.register(Rtype::DS, refuse);
        let mut parser = Parser::from_ref(SAMPLE);
        assert_eq!(
            registry.decoder_for(Rtype::DS).unwrap()(&mut parser)
                .unwrap_err(),
            ParseError::Truncated
        );

        // Registering again only replaces the entry.
        registry.register(Rtype::DS, decode_ds);
        registry.register(Rtype::DS, decode_ds);
        assert_eq!(
            registry
                .entries
                .iter()
                .filter(|entry| entry.0 == Rtype::DS)
                .count(),
            1
        );
        let mut parser = Parser::from_ref(SAMPLE);
        assert!(registry.decoder_for(Rtype::DS).unwrap()(&mut parser)
            .is_ok());
    }
}
