//! Additional traits for comparisons.
//!
//! When DNSSEC constructs or validates signatures over a set of resource
//! records, the records are sorted into the canonical order defined in
//! [RFC 4034]: records within an RRset are ordered by comparing the
//! canonical wire-format representation of their record data as octet
//! sequences. This order can differ from the ‘normal’ order implemented
//! through the `PartialOrd` and `Ord` traits. To make it clear when this
//! mode of comparison is used, this module defines a separate trait
//! [`CanonicalOrd`] that types implement to define how they are compared
//! in the context of DNSSEC.
//!
//! For the record data in this crate, the canonical wire format is the
//! plain wire format – there are no embedded domain names that would need
//! to be lowercased. The difference to `Ord` remains relevant: equality
//! and ordering of delegation signer record data disregard surplus digest
//! octets while the canonical order, being defined over the composed wire
//! format, takes them into account.
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034
use core::cmp::Ordering;

//------------ CanonicalOrd --------------------------------------------------

/// A trait for the canonical sort order of values.
///
/// The canonical sort order is used in DNS security when multiple values
/// are part of constructing or validating a signature. To avoid confusion,
/// only this trait should be used when DNSSEC signatures are involved.
pub trait CanonicalOrd<Rhs: ?Sized = Self> {
    /// Returns the canonical ordering between `self` and `other`.
    #[must_use]
    fn canonical_cmp(&self, other: &Rhs) -> Ordering;

    /// Returns whether `self` is canonically less than `other`.
    #[inline]
    #[must_use]
    fn canonical_lt(&self, other: &Rhs) -> bool {
        matches!(self.canonical_cmp(other), Ordering::Less)
    }

    /// Returns whether `self` is canonically less than or equal to `other`.
    #[inline]
    #[must_use]
    fn canonical_le(&self, other: &Rhs) -> bool {
        matches!(
            self.canonical_cmp(other),
            Ordering::Less | Ordering::Equal
        )
    }

    /// Returns whether `self` is canonically greater than `other`.
    #[inline]
    #[must_use]
    fn canonical_gt(&self, other: &Rhs) -> bool {
        matches!(self.canonical_cmp(other), Ordering::Greater)
    }

    /// Returns whether `self` is canonically greater than or equal to
    /// `other`.
    #[inline]
    #[must_use]
    fn canonical_ge(&self, other: &Rhs) -> bool {
        matches!(
            self.canonical_cmp(other),
            Ordering::Greater | Ordering::Equal
        )
    }
}
