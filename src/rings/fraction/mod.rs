use crate::divisibility::{DivisibilityRing, DivisibilityRingStore};
use crate::field::Field;
use crate::ring::*;

///
/// Trait for fields that are the field of fractions over a base ring.
///
/// Note that a field of fractions is usually the field of fractions of
/// many rings - in particular, every field is technically its own field
/// of fractions. However, such cases don't add any value, and this trait
/// is mainly designed and implemented for fields that have a "canonical" or
/// "natural" subring whose field of fractions they represent, like `QQ`
/// and `ZZ`.
///
/// The inclusion of the base ring is given by [`RingExtension`], and is always
/// injective.
///
pub trait FractionField: Field + RingExtension {

    ///
    /// Returns `a, b` such that the given element is `a/b`.
    ///
    /// The return value does not have to be reduced, i.e. `gcd(a, b)` is not
    /// guaranteed to be a unit. However, `b` is never zero.
    ///
    fn as_fraction(&self, el: Self::Element) -> (El<Self::BaseRing>, El<Self::BaseRing>);

    ///
    /// Computes `num / den`.
    ///
    /// This is functionally equivalent, but may be faster than combining
    /// [`RingExtension::from()`] and [`Field::div()`].
    ///
    fn from_fraction(&self, num: El<Self::BaseRing>, den: El<Self::BaseRing>) -> Self::Element {
        self.div(&self.from(num), &self.from(den))
    }
}

///
/// [`RingStore`] corresponding to [`FractionField`]
///
pub trait FractionFieldStore: RingStore
    where Self::Type: FractionField
{
    delegate!{ FractionField, fn as_fraction(&self, el: El<Self>) -> (El<BaseRing<Self>>, El<BaseRing<Self>>) }
    delegate!{ FractionField, fn from_fraction(&self, num: El<BaseRing<Self>>, den: El<BaseRing<Self>>) -> El<Self> }

    ///
    /// Returns the preimage of the given element under the inclusion of the
    /// base ring, if it exists.
    ///
    fn as_base_element(&self, el: &El<Self>) -> Option<El<BaseRing<Self>>>
        where <BaseRing<Self> as RingStore>::Type: DivisibilityRing
    {
        let (num, den) = self.as_fraction(self.clone_el(el));
        self.get_ring().base_ring().checked_div(&num, &den)
    }
}

impl<R: RingStore> FractionFieldStore for R
    where R::Type: FractionField
{}
