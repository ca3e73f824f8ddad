//! Creating and consuming data in wire format.

use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::{Parser, ShortInput};

//------------ Compose -------------------------------------------------------

/// A type that knows how to compose itself into wire format.
///
/// All integers are written in network byte order, i.e., big-endian.
pub trait Compose {
    /// The length in octets of the wire format of a value.
    ///
    /// This is a constant since all types implementing this trait have a
    /// fixed-length wire format.
    const COMPOSE_LEN: u16 = 0;

    /// Appends the wire format of the value to the end of `target`.
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for i8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self as u8])
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(i16);
compose_to_be_bytes!(u16);
compose_to_be_bytes!(i32);
compose_to_be_bytes!(u32);

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a parser.
///
/// The trait is a companion to [`Parser`]: it allows a type to use a parser
/// to create a value of itself. Because types may be generic over octets
/// types, the trait is generic over the octets sequence of the parser in
/// question. Implementations should use minimal trait bounds matching the
/// parser methods they use.
pub trait Parse<'a, Octs: ?Sized>: Sized {
    /// Extracts a value from the beginning of `parser`.
    ///
    /// If parsing fails and an error is returned, the parser’s position
    /// should be considered to be undefined. If it is supposed to be reused
    /// in this case, you should store the position before attempting to
    /// parse and seek to that position again before continuing.
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError>;

    /// Skips over a value of this type at the beginning of `parser`.
    ///
    /// This function is the same as `parse` but doesn’t return the result.
    /// It can be used to check if the content of `parser` is correct or to
    /// skip over unneeded parts of the parser.
    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError>;
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for i8 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_i8().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError> {
        parser.advance(1).map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u8 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u8().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError> {
        parser.advance(1).map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for i16 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_i16_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError> {
        parser.advance(2).map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u16 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u16_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError> {
        parser.advance(2).map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for i32 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_i32_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError> {
        parser.advance(4).map_err(Into::into)
    }
}

impl<'a, Octs: AsRef<[u8]> + ?Sized> Parse<'a, Octs> for u32 {
    fn parse(parser: &mut Parser<'a, Octs>) -> Result<Self, ParseError> {
        parser.parse_u32_be().map_err(Into::into)
    }

    fn skip(parser: &mut Parser<'a, Octs>) -> Result<(), ParseError> {
        parser.advance(4).map_err(Into::into)
    }
}

//------------ sub_parser ----------------------------------------------------

/// Returns a parser for a sub-range of a parser’s remaining data.
///
/// The range starts at `offset` octets from the current position of
/// `parser` and is `len` octets long. The returned parser is limited to
/// exactly that range. `parser` itself is not advanced.
///
/// Returns an [`OutOfRange`][ParseError::OutOfRange] error if the requested
/// range extends past the end of the data of `parser`.
pub fn sub_parser<'a, Octs: AsRef<[u8]> + ?Sized>(
    parser: &Parser<'a, Octs>,
    offset: usize,
    len: usize,
) -> Result<Parser<'a, Octs>, ParseError> {
    let mut sub = *parser;
    sub.advance(offset).map_err(|_| ParseError::OutOfRange)?;
    sub.parse_parser(len).map_err(|_| ParseError::OutOfRange)
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to read past the end of the input.
    Truncated,

    /// An explicitly requested range lies outside the underlying data.
    OutOfRange,
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::Truncated
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Truncated => f.write_str("unexpected end of input"),
            ParseError::OutOfRange => {
                f.write_str("range outside of the underlying data")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

//============ Test ==========================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn compose_ints() {
        fn compose<T: Compose>(value: T) -> Vec<u8> {
            let mut target = Vec::new();
            octseq::builder::infallible(value.compose(&mut target));
            assert_eq!(target.len(), usize::from(T::COMPOSE_LEN));
            target
        }

        assert_eq!(compose(0x12u8), b"\x12");
        assert_eq!(compose(0x1234u16), b"\x12\x34");
        assert_eq!(compose(0x12345678u32), b"\x12\x34\x56\x78");
        assert_eq!(compose(-1i16), b"\xff\xff");
    }

    #[test]
    fn parse_ints() {
        let data = b"\x12\x34\x56\x78".as_ref();
        let mut parser = Parser::from_ref(data);
        assert_eq!(u16::parse(&mut parser), Ok(0x1234));
        assert_eq!(u8::parse(&mut parser), Ok(0x56));
        assert_eq!(u8::parse(&mut parser), Ok(0x78));
        assert_eq!(u8::parse(&mut parser), Err(ParseError::Truncated));

        let mut parser = Parser::from_ref(data);
        assert_eq!(u32::skip(&mut parser), Ok(()));
        assert_eq!(u32::skip(&mut parser), Err(ParseError::Truncated));
    }

    #[test]
    fn sub_parser_ranges() {
        let data = b"\x00\x01\x02\x03\x04\x05".as_ref();
        let parser = Parser::from_ref(data);

        let mut sub = sub_parser(&parser, 2, 3).unwrap();
        assert_eq!(sub.remaining(), 3);
        assert_eq!(u8::parse(&mut sub), Ok(2));

        // The original parser must not move.
        assert_eq!(parser.remaining(), 6);

        assert_eq!(
            sub_parser(&parser, 4, 3).unwrap_err(),
            ParseError::OutOfRange
        );
        assert_eq!(
            sub_parser(&parser, 7, 0).unwrap_err(),
            ParseError::OutOfRange
        );
        assert!(sub_parser(&parser, 6, 0).is_ok());
    }
}
