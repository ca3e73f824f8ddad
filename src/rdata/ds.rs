//! Record data for the delegation signer family of record types.
//!
//! The DS record type from [RFC 4034] refers a validator from a zone to
//! the key material of a delegated child zone. Three further record types
//! reuse its wire format unchanged: CDS from [RFC 7344], and the trust
//! anchor types TA and DLV ([RFC 4431]). This module provides [`Ds`]
//! which implements the record data of all four.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034
//! [RFC 4431]: https://tools.ietf.org/html/rfc4431
//! [RFC 7344]: https://tools.ietf.org/html/rfc7344

use crate::base::cmp::CanonicalOrd;
use crate::base::iana::{DigestAlg, Rtype, SecAlg};
use crate::base::rdata::{
    ComposeRecordData, FlatRecordData, LongRecordData, ParseRecordData,
};
use crate::base::wire::{Compose, Parse, ParseError};
use crate::utils::base16;
use core::cmp::Ordering;
use core::{fmt, hash};
use octseq::builder::OctetsBuilder;
use octseq::octets::{Octets, OctetsFrom};
use octseq::parse::Parser;

//------------ Ds ------------------------------------------------------------

#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "
            Octs: octseq::serde::SerializeOctets + AsRef<[u8]>
        ",
        deserialize = "
            Octs:
                octseq::builder::FromBuilder
                + octseq::serde::DeserializeOctets<'de>,
            <Octs as octseq::builder::FromBuilder>::Builder:
                octseq::builder::OctetsBuilder
                + octseq::builder::EmptyBuilder,
        ",
    ))
)]
pub struct Ds<Octs> {
    key_tag: u16,
    algorithm: SecAlg,
    digest_type: DigestAlg,
    #[cfg_attr(
        feature = "serde",
        serde(with = "crate::utils::base16::serde")
    )]
    digest: Octs,
}

impl Ds<()> {
    /// The record types using this record data.
    ///
    /// All four types are registered separately but share the wire format.
    /// The record data itself does not retain which of them it was parsed
    /// for.
    pub const RTYPES: &'static [Rtype] =
        &[Rtype::DS, Rtype::CDS, Rtype::TA, Rtype::DLV];
}

impl<Octs> Ds<Octs> {
    /// Creates new record data from its components.
    ///
    /// The `digest` argument is the complete digest-bearing portion of the
    /// record data. If it is longer than the digest length defined for
    /// `digest_type`, the surplus octets are kept and re-encoded but are
    /// not part of the digest proper – see [`digest`][Self::digest] and
    /// [`extra_digest`][Self::extra_digest]. Any combination of digest
    /// length and digest type is accepted.
    ///
    /// The function will return an error if the wire format of the record
    /// data would exceed the length limit of 65,535 octets.
    pub fn new(
        key_tag: u16,
        algorithm: SecAlg,
        digest_type: DigestAlg,
        digest: Octs,
    ) -> Result<Self, LongRecordData>
    where
        Octs: AsRef<[u8]>,
    {
        LongRecordData::check_len(
            usize::from(
                u16::COMPOSE_LEN
                    + SecAlg::COMPOSE_LEN
                    + DigestAlg::COMPOSE_LEN,
            )
            .checked_add(digest.as_ref().len())
            .expect("long digest"),
        )?;
        Ok(unsafe {
            Ds::new_unchecked(key_tag, algorithm, digest_type, digest)
        })
    }

    /// Creates new DS record data without checking.
    ///
    /// # Safety
    ///
    /// The caller needs to ensure that the wire format representation of
    /// the record data is at most 65,535 octets long.
    pub unsafe fn new_unchecked(
        key_tag: u16,
        algorithm: SecAlg,
        digest_type: DigestAlg,
        digest: Octs,
    ) -> Self {
        Ds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    /// Returns the key tag of the referenced DNSKEY record.
    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    /// Returns the security algorithm of the referenced DNSKEY record.
    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the digest type used by the digest.
    pub fn digest_type(&self) -> DigestAlg {
        self.digest_type
    }

    /// Converts the record data into the digest-bearing octets.
    ///
    /// This returns the complete portion following the fixed header,
    /// including any surplus octets beyond the digest proper.
    pub fn into_digest(self) -> Octs {
        self.digest
    }

    /// Parses the record data from the beginning of `parser`.
    ///
    /// The parser needs to be delimited to exactly the record data.
    /// Everything after the fixed four octet header is taken as the
    /// digest-bearing octets, however long it may be.
    pub fn parse<'a, Src: Octets<Range<'a> = Octs> + ?Sized>(
        parser: &mut Parser<'a, Src>,
    ) -> Result<Self, ParseError> {
        let len = match parser.remaining().checked_sub(4) {
            Some(len) => len,
            None => return Err(ParseError::Truncated),
        };
        Ok(unsafe {
            Self::new_unchecked(
                u16::parse(parser)?,
                SecAlg::parse(parser)?,
                DigestAlg::parse(parser)?,
                parser.parse_octets(len)?,
            )
        })
    }
}

impl<Octs: AsRef<[u8]>> Ds<Octs> {
    /// Returns the digest.
    ///
    /// If the record data carries more digest octets than defined for its
    /// digest type, only the digest proper is returned. The surplus is
    /// available through [`extra_digest`][Self::extra_digest]. For digest
    /// types without a defined digest length all octets are considered
    /// part of the digest.
    pub fn digest(&self) -> &[u8] {
        &self.digest.as_ref()[..self.split_len()]
    }

    /// Returns the surplus octets following the digest.
    ///
    /// This is empty unless the record data was created from more digest
    /// octets than defined for its digest type. The surplus takes part in
    /// composing the record data but is disregarded when comparing record
    /// data for equality.
    pub fn extra_digest(&self) -> &[u8] {
        &self.digest.as_ref()[self.split_len()..]
    }

    /// Returns the length of the digest proper.
    fn split_len(&self) -> usize {
        let len = self.digest.as_ref().len();
        match digest_len(self.digest_type) {
            Some(expected) if expected < len => expected,
            _ => len,
        }
    }
}

/// Returns the digest length defined for a digest type.
///
/// Returns `None` for digest types without a defined length.
fn digest_len(digest_type: DigestAlg) -> Option<usize> {
    match digest_type {
        DigestAlg::SHA1 => Some(20),
        DigestAlg::SHA256 => Some(32),
        _ => None,
    }
}

//--- OctetsFrom

impl<Octs, SrcOcts> OctetsFrom<Ds<SrcOcts>> for Ds<Octs>
where
    Octs: OctetsFrom<SrcOcts>,
{
    type Error = Octs::Error;

    fn try_octets_from(source: Ds<SrcOcts>) -> Result<Self, Self::Error> {
        Ok(unsafe {
            Ds::new_unchecked(
                source.key_tag,
                source.algorithm,
                source.digest_type,
                Octs::try_octets_from(source.digest)?,
            )
        })
    }
}

//--- PartialEq and Eq

impl<Octs, Other> PartialEq<Ds<Other>> for Ds<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn eq(&self, other: &Ds<Other>) -> bool {
        self.key_tag == other.key_tag
            && self.algorithm == other.algorithm
            && self.digest_type == other.digest_type
            && self.digest().eq(other.digest())
    }
}

impl<Octs: AsRef<[u8]>> Eq for Ds<Octs> {}

//--- PartialOrd, CanonicalOrd, and Ord

impl<Octs, Other> PartialOrd<Ds<Other>> for Ds<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn partial_cmp(&self, other: &Ds<Other>) -> Option<Ordering> {
        match self.key_tag.partial_cmp(&other.key_tag) {
            Some(Ordering::Equal) => {}
            other => return other,
        }
        match self.algorithm.partial_cmp(&other.algorithm) {
            Some(Ordering::Equal) => {}
            other => return other,
        }
        match self.digest_type.partial_cmp(&other.digest_type) {
            Some(Ordering::Equal) => {}
            other => return other,
        }
        self.digest().partial_cmp(other.digest())
    }
}

impl<Octs, Other> CanonicalOrd<Ds<Other>> for Ds<Octs>
where
    Octs: AsRef<[u8]>,
    Other: AsRef<[u8]>,
{
    fn canonical_cmp(&self, other: &Ds<Other>) -> Ordering {
        match self.key_tag.cmp(&other.key_tag) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.algorithm.cmp(&other.algorithm) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.digest_type.cmp(&other.digest_type) {
            Ordering::Equal => {}
            other => return other,
        }
        // Canonical order is defined over the composed wire format, so the
        // comparison includes any surplus digest octets.
        self.digest.as_ref().cmp(other.digest.as_ref())
    }
}

impl<Octs: AsRef<[u8]>> Ord for Ds<Octs> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.key_tag.cmp(&other.key_tag) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.algorithm.cmp(&other.algorithm) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.digest_type.cmp(&other.digest_type) {
            Ordering::Equal => {}
            other => return other,
        }
        self.digest().cmp(other.digest())
    }
}

//--- Hash

impl<Octs: AsRef<[u8]>> hash::Hash for Ds<Octs> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.key_tag.hash(state);
        self.algorithm.hash(state);
        self.digest_type.hash(state);
        self.digest().hash(state);
    }
}

//--- ComposeRecordData, ParseRecordData, FlatRecordData

impl<Octs: AsRef<[u8]>> ComposeRecordData for Ds<Octs> {
    fn rdlen(&self) -> u16 {
        u16::checked_add(
            u16::COMPOSE_LEN + SecAlg::COMPOSE_LEN + DigestAlg::COMPOSE_LEN,
            self.digest.as_ref().len().try_into().expect("long digest"),
        )
        .expect("long digest")
    }

    fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.key_tag.compose(target)?;
        self.algorithm.compose(target)?;
        self.digest_type.compose(target)?;
        target.append_slice(self.digest.as_ref())
    }
}

impl<'a, Octs> ParseRecordData<'a, Octs> for Ds<Octs::Range<'a>>
where
    Octs: Octets + ?Sized,
{
    fn parse_rdata(
        rtype: Rtype,
        parser: &mut Parser<'a, Octs>,
    ) -> Result<Option<Self>, ParseError> {
        if Ds::RTYPES.contains(&rtype) {
            Self::parse(parser).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<'a, Octs> FlatRecordData<'a, Octs> for Ds<Octs::Range<'a>>
where
    Octs: Octets + ?Sized,
{
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        Ds::parse(parser)
    }
}

//--- Display

impl<Octs: AsRef<[u8]>> fmt::Display for Ds<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.key_tag, self.algorithm, self.digest_type
        )?;
        base16::display(&self.digest, f)
    }
}

//--- Debug

impl<Octs: AsRef<[u8]>> fmt::Debug for Ds<Octs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Ds")
            .field("key_tag", &self.key_tag)
            .field("algorithm", &self.algorithm)
            .field("digest_type", &self.digest_type)
            .field("digest", &self.digest())
            .field("extra_digest", &self.extra_digest())
            .finish()
    }
}

//============ Test ==========================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use octseq::builder::infallible;
    use std::vec::Vec;

    #[cfg(feature = "bytes")]
    #[test]
    #[allow(clippy::redundant_closure)] // lifetimes ...
    fn ds_compose_parse() {
        use crate::base::rdata::test::{test_compose_parse, test_rdlen};

        let rdata =
            Ds::new(10, SecAlg::RSASHA1, DigestAlg::SHA256, b"key").unwrap();
        test_rdlen(&rdata);
        test_compose_parse(&rdata, |parser| Ds::parse(parser));

        // A digest with surplus octets survives the round trip, too.
        let raw = [0x11u8; 25];
        let rdata =
            Ds::new(12, SecAlg::RSASHA256, DigestAlg::SHA1, raw.as_ref())
                .unwrap();
        test_rdlen(&rdata);
        test_compose_parse(&rdata, |parser| Ds::parse(parser));
    }

    #[test]
    fn sample_record_round_trip() {
        let mut data = Vec::from(&b"\x00\x0A\x08\x01"[..]);
        data.extend(core::iter::repeat(0x11).take(20));

        let mut parser = Parser::from_ref(data.as_slice());
        let ds = Ds::parse(&mut parser).unwrap();
        assert_eq!(parser.remaining(), 0);
        assert_eq!(ds.key_tag(), 10);
        assert_eq!(ds.algorithm(), SecAlg::RSASHA256);
        assert_eq!(ds.digest_type(), DigestAlg::SHA1);
        assert_eq!(ds.digest(), &[0x11u8; 20][..]);
        assert!(ds.extra_digest().is_empty());
        assert_eq!(usize::from(ds.rdlen()), data.len());

        let mut buf = Vec::new();
        infallible(ds.compose_rdata(&mut buf));
        assert_eq!(buf, data);

        // The length-prefixed form is the record data preceded by its
        // RDLENGTH.
        let mut buf = Vec::new();
        infallible(ds.compose_len_rdata(&mut buf));
        assert_eq!(&buf[..2], b"\x00\x18");
        assert_eq!(&buf[2..], data);
    }

    #[test]
    fn oversized_digest_splits() {
        let raw = [0x11u8; 25];

        let rdata = Ds::new(
            12, SecAlg::RSASHA256, DigestAlg::SHA1, raw.as_ref()
        ).unwrap();
        assert_eq!(rdata.digest().len(), 20);
        assert_eq!(rdata.extra_digest(), &[0x11u8; 5][..]);

        // An unknown digest type has no defined length, so nothing is
        // split off.
        let rdata = Ds::new(
            12, SecAlg::RSASHA256, DigestAlg::from_int(99), raw.as_ref()
        ).unwrap();
        assert_eq!(rdata.digest().len(), 25);
        assert!(rdata.extra_digest().is_empty());
    }

    #[test]
    fn digest_length_boundaries() {
        let raw = [0x23u8; 33];

        let rdata = Ds::new(
            1, SecAlg::ED25519, DigestAlg::SHA256, &raw[..32]
        ).unwrap();
        assert_eq!(rdata.digest().len(), 32);
        assert!(rdata.extra_digest().is_empty());

        let rdata = Ds::new(
            1, SecAlg::ED25519, DigestAlg::SHA256, &raw[..]
        ).unwrap();
        assert_eq!(rdata.digest().len(), 32);
        assert_eq!(rdata.extra_digest().len(), 1);
    }

    #[test]
    fn oversized_digest_round_trips() {
        let mut data = Vec::from(&b"\x30\x39\x05\x01"[..]);
        data.extend(core::iter::repeat(0xAB).take(25));

        let mut parser = Parser::from_ref(data.as_slice());
        let ds = Ds::parse(&mut parser).unwrap();
        assert_eq!(usize::from(ds.rdlen()), data.len());
        assert_eq!(ds.extra_digest().len(), 5);

        // Composing reproduces the original octets including the surplus.
        let mut buf = Vec::new();
        infallible(ds.compose_rdata(&mut buf));
        assert_eq!(buf, data);
    }

    #[test]
    fn unknown_digest_type_round_trips() {
        let mut data = Vec::from(&b"\x00\x63\x03\x63"[..]);
        data.extend_from_slice(&[0x55; 25]);

        let mut parser = Parser::from_ref(data.as_slice());
        let ds = Ds::parse(&mut parser).unwrap();
        assert_eq!(ds.digest_type(), DigestAlg::from_int(99));
        assert_eq!(ds.digest().len(), 25);
        assert!(ds.extra_digest().is_empty());

        let mut buf = Vec::new();
        infallible(ds.compose_rdata(&mut buf));
        assert_eq!(buf, data);
    }

    #[test]
    fn equality_ignores_extra_digest() {
        let mut left = Vec::from(&[0x42u8; 20][..]);
        let mut right = left.clone();
        left.extend_from_slice(b"\x01\x02");
        right.extend_from_slice(b"\xfa\xfb\xfc");

        let left =
            Ds::new(7, SecAlg::RSASHA256, DigestAlg::SHA1, left).unwrap();
        let right =
            Ds::new(7, SecAlg::RSASHA256, DigestAlg::SHA1, right).unwrap();
        assert_eq!(left, right);

        // The canonical order considers the composed wire format and thus
        // does see the difference.
        assert_ne!(left.canonical_cmp(&right), Ordering::Equal);

        // A difference in the digest proper breaks equality.
        let raw = [0x43u8; 20];
        let other = Ds::new(
            7, SecAlg::RSASHA256, DigestAlg::SHA1, raw.as_ref()
        ).unwrap();
        assert_ne!(left, other);
    }

    #[test]
    fn short_input() {
        let mut parser = Parser::from_ref(b"\x00\x0A\x08".as_ref());
        assert_eq!(
            Ds::parse(&mut parser).unwrap_err(),
            ParseError::Truncated
        );

        let mut parser = Parser::from_ref(b"".as_ref());
        assert_eq!(
            Ds::parse(&mut parser).unwrap_err(),
            ParseError::Truncated
        );

        // Exactly four octets are fine and leave an empty digest.
        let mut parser = Parser::from_ref(b"\x00\x0A\x08\x01".as_ref());
        let ds = Ds::parse(&mut parser).unwrap();
        assert!(ds.digest().is_empty());
        assert!(ds.extra_digest().is_empty());
    }

    #[test]
    fn parse_rdata_dispatch() {
        let data = b"\x00\x0A\x08\x02\xde\xad\xbe\xef";
        for rtype in Ds::RTYPES {
            let mut parser = Parser::from_ref(data.as_ref());
            let ds = Ds::parse_rdata(*rtype, &mut parser).unwrap().unwrap();
            assert_eq!(ds.key_tag(), 10);
        }

        let mut parser = Parser::from_ref(data.as_ref());
        assert_eq!(Ds::parse_rdata(Rtype::MX, &mut parser), Ok(None));
        assert_eq!(parser.remaining(), data.len());
    }

    #[test]
    fn flat_parse() {
        fn parse<'a, T: FlatRecordData<'a, [u8]>>(
            data: &'a [u8],
        ) -> Result<T, ParseError> {
            let mut parser = Parser::from_ref(data);
            let res = T::parse(&mut parser)?;
            assert_eq!(parser.remaining(), 0);
            Ok(res)
        }

        let ds: Ds<&[u8]> =
            parse(b"\x00\x0A\x08\x01\x11\x22".as_ref()).unwrap();
        assert_eq!(ds.digest(), b"\x11\x22");
    }

    #[test]
    fn display() {
        let rdata = Ds::new(
            10, SecAlg::RSASHA256, DigestAlg::SHA1, b"\xbe\xef".as_ref()
        ).unwrap();
        assert_eq!(format!("{}", rdata), "10 8 1 BEEF");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ds_ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        let ds = Ds::new(
            10,
            SecAlg::RSASHA256,
            DigestAlg::SHA1,
            Vec::from(&b"\xbe\xef"[..]),
        )
        .unwrap();
        assert_tokens(
            &ds.readable(),
            &[
                Token::Struct { name: "Ds", len: 4 },
                Token::Str("key_tag"),
                Token::U16(10),
                Token::Str("algorithm"),
                Token::U8(8),
                Token::Str("digest_type"),
                Token::U8(1),
                Token::Str("digest"),
                Token::Str("BEEF"),
                Token::StructEnd,
            ],
        );
    }
}
