//! Resource Record (RR) TYPEs.

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource record types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. This type represents those
    /// values. Since this crate only implements record data for the
    /// delegation signer family, the set of named constants is limited to
    /// the well-known core types and the DNSSEC related types; all other
    /// values are represented as raw integers.
    ///
    /// The currently assigned values are maintained in an [IANA registry].
    ///
    /// [IANA registry]: http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4
    ///
    /// In order to avoid confusion over capitalization, the mnemonics are
    /// treated as single acronyms and therefore all variant names are
    /// spelled with an initial capital letter in accordance with the Rust
    /// naming guidelines.
    =>
    Rtype, u16;

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// See RFC 3596.
    (AAAA => 28, "AAAA")

    /// Server selection.
    ///
    /// See RFC 2782.
    (SRV => 33, "SRV")

    /// Option.
    ///
    /// See RFC 6891.
    (OPT => 41, "OPT")

    /// Delegation signer.
    ///
    /// See RFC 4034.
    (DS => 43, "DS")

    /// SSH key fingerprint.
    ///
    /// See RFC 4255.
    (SSHFP => 44, "SSHFP")

    /// Resource record signature.
    ///
    /// See RFC 4034.
    (RRSIG => 46, "RRSIG")

    /// Next secure.
    ///
    /// See RFC 4034.
    (NSEC => 47, "NSEC")

    /// DNS public key.
    ///
    /// See RFC 4034.
    (DNSKEY => 48, "DNSKEY")

    /// NSEC3.
    ///
    /// See RFC 5155.
    (NSEC3 => 50, "NSEC3")

    /// NSEC3 parameters.
    ///
    /// See RFC 5155.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// Child DS.
    ///
    /// See RFC 7344.
    (CDS => 59, "CDS")

    /// DNSKEY(s) the child wants reflected in DS.
    ///
    /// See RFC 7344.
    (CDNSKEY => 60, "CDNSKEY")

    /// A request for all records the server/cache has available.
    ///
    /// See RFC 1035 and RFC 6895.
    (ANY => 255, "ANY")

    /// DNSSEC trust authorities.
    (TA => 32768, "TA")

    /// DNSSEC lookaside validation.
    ///
    /// See RFC 4431.
    (DLV => 32769, "DLV")
}

int_enum_str_with_prefix!(Rtype, "TYPE", b"TYPE", u16, "unknown record type");

//============ Tests =========================================================

#[cfg(test)]
#[cfg(feature = "std")]
mod test {
    use super::Rtype;
    use core::str::FromStr;
    use std::string::ToString;

    #[test]
    fn from_str() {
        assert_eq!(Rtype::from_str("DS"), Ok(Rtype::DS));
        assert_eq!(Rtype::from_str("cds"), Ok(Rtype::CDS));
        assert_eq!(Rtype::from_str("TYPE32769"), Ok(Rtype::DLV));
        assert_eq!(Rtype::from_str("type1234"), Ok(Rtype::from_int(1234)));
        assert!(Rtype::from_str("TYPE").is_err());
        assert!(Rtype::from_str("frobnicate").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Rtype::TA.to_string(), "TA");
        assert_eq!(Rtype::from_int(1234).to_string(), "TYPE1234");
    }
}
