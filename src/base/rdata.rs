//! Resource record data.
//!
//! Each resource record type has its own definition of the content and
//! formatting of its data. This module provides the basics for
//! implementing specific types for this record data. The concrete
//! implementation for the delegation signer family lives in the top-level
//! [rdata][crate::rdata] module.
//!
//! There are three traits herein: Any type that represents record data
//! that can be placed into a message implements [`ComposeRecordData`]:
//! it knows the length of its wire format and can append that format to
//! an octets builder. A type that can also be created from the record
//! data section of an existing message implements [`ParseRecordData`],
//! which dispatches on the numeric record type and leaves the data
//! untouched for foreign types. Finally, [`FlatRecordData`] marks the
//! family of record data types whose wire format is one flat structure
//! without compressed domain names: such data can be recreated from the
//! record data octets alone, without access to the rest of the message.

use super::iana::Rtype;
use super::wire::{Compose, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ ComposeRecordData ---------------------------------------------

/// A type of record data that can be composed into wire format.
pub trait ComposeRecordData {
    /// Returns the length of the wire format of the record data.
    ///
    /// Since none of the record data types in this crate contain
    /// compressible domain names, the length is always known up front.
    /// The value is used by message builders as the RDLENGTH of the
    /// enclosing record.
    fn rdlen(&self) -> u16;

    /// Appends the wire format of the record data to `target`.
    ///
    /// The method appends exactly [`rdlen`][Self::rdlen] octets.
    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;

    /// Appends the record data prefixed with its length.
    fn compose_len_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.rdlen().compose(target)?;
        self.compose_rdata(target)
    }
}

impl<'a, T: ComposeRecordData> ComposeRecordData for &'a T {
    fn rdlen(&self) -> u16 {
        (*self).rdlen()
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose_rdata(target)
    }
}

//------------ ParseRecordData -----------------------------------------------

/// A record data type that can be parsed from a message.
///
/// This is the entry point used by a dispatcher that walks over the
/// records of a message: it knows the numeric record type and has a
/// parser delimited to the record data and asks each candidate type to
/// parse the data.
pub trait ParseRecordData<'a, Octs: ?Sized>: Sized {
    /// Parses the record data.
    ///
    /// The record data is for a record of type `rtype`. The function may
    /// decide whether it wants to parse data for that type. It should
    /// return `Ok(None)` if it doesn’t.
    ///
    /// The `parser` is positioned at the beginning of the record data and
    /// is limited to the length of the data.
    ///
    /// If the function doesn’t want to process the data, it must not touch
    /// the parser. In particular, it must not advance it.
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, Octs>,
    ) -> Result<Option<Self>, ParseError>;
}

//------------ FlatRecordData ------------------------------------------------

/// Record data with a flat, self-contained wire format.
///
/// Most record types – among them the complete delegation signer family –
/// carry their data as a single flat structure: fixed-width fields and
/// uncompressed octet sequences. Such data can be parsed from a parser
/// that is delimited to exactly the record data of one record, as a pure
/// function of those octets, and its canonical form used for DNSSEC
/// processing is identical to its plain wire format.
///
/// For well-formed input, parsing consumes the parser completely and the
/// [`rdlen`][ComposeRecordData::rdlen] of the returned value equals the
/// length of the parsed data.
pub trait FlatRecordData<'a, Octs: ?Sized>:
    ComposeRecordData + Sized
{
    /// Parses the record data from the beginning of `parser`.
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError>;
}

//------------ LongRecordData ------------------------------------------------

/// The octets sequence to be used for record data is too long.
///
/// The length of record data is limited by the 16 bit RDLENGTH field of
/// the enclosing record, so no more than 65,535 octets can ever be
/// written. Constructors of record data types enforce this limit.
#[derive(Clone, Copy, Debug)]
pub struct LongRecordData(());

impl LongRecordData {
    /// Checks that `len` is an acceptable length of record data.
    pub fn check_len(len: usize) -> Result<(), Self> {
        if len > usize::from(u16::MAX) {
            Err(LongRecordData(()))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for LongRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("record data too long")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LongRecordData {}

//============ Testing ======================================================

#[cfg(test)]
#[cfg(all(feature = "std", feature = "bytes"))]
pub(crate) mod test {
    use super::*;
    use bytes::{Bytes, BytesMut};
    use core::fmt::Debug;
    use octseq::builder::infallible;

    /// Check that `rdlen` produces the correct length.
    ///
    /// The test composes `data` and checks that the length of the composed
    /// data matches what `rdlen` returns.
    pub fn test_rdlen<R: ComposeRecordData>(data: R) {
        let mut buf = std::vec::Vec::new();
        infallible(data.compose_rdata(&mut buf));
        assert_eq!(buf.len(), usize::from(data.rdlen()));
    }

    /// Check that composing and parsing are reverse operations.
    pub fn test_compose_parse<In, F, Out>(data: &In, parse: F)
    where
        In: ComposeRecordData + PartialEq<Out> + Debug,
        F: FnOnce(&mut Parser<Bytes>) -> Result<Out, ParseError>,
        Out: Debug,
    {
        let mut buf = BytesMut::new();
        infallible(data.compose_rdata(&mut buf));
        let buf = buf.freeze();
        let mut parser = Parser::from_ref(&buf);
        let parsed = (parse)(&mut parser).unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(*data, parsed);
    }
}

#[cfg(test)]
mod misc_test {
    use super::*;

    #[test]
    fn long_record_data() {
        assert!(LongRecordData::check_len(0).is_ok());
        assert!(LongRecordData::check_len(0xFFFF).is_ok());
        assert!(LongRecordData::check_len(0x1_0000).is_err());
    }
}
