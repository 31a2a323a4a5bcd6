use crate::ring::*;
use crate::divisibility::*;
use crate::pid::*;

///
/// The arbitrary-precision integer ring used by default, see [`crate::rings::rust_bigint::RustBigintRing`].
///
pub type BigIntRing = crate::rings::rust_bigint::RustBigintRing;

///
/// Trait for rings that are isomorphic to the ring of integers `ZZ = { ..., -2, -1, 0, 1, 2, ... }`.
///
/// Euclidean division in these rings is expected to round towards zero, i.e. the remainder
/// has the same sign as the dividend. The canonical representative of the ideal `(a, b)`
/// computed by [`PrincipalIdealRing::ideal_gen()`] is expected to be nonnegative.
///
pub trait IntegerRing: Domain + EuclideanRing {

    fn is_neg(&self, value: &Self::Element) -> bool;

    fn is_pos(&self, value: &Self::Element) -> bool {
        !self.is_neg(value) && !self.is_zero(value)
    }

    fn abs(&self, value: Self::Element) -> Self::Element {
        if self.is_neg(&value) {
            self.negate(value)
        } else {
            value
        }
    }

    ///
    /// Parses the decimal representation of an integer, as produced by [`RingBase::dbg()`].
    ///
    fn parse(&self, string: &str) -> Option<Self::Element>;
}

///
/// [`RingStore`] for [`IntegerRing`]s
///
pub trait IntegerRingStore: RingStore
    where Self::Type: IntegerRing
{
    delegate!{ IntegerRing, fn is_neg(&self, value: &El<Self>) -> bool }
    delegate!{ IntegerRing, fn is_pos(&self, value: &El<Self>) -> bool }
    delegate!{ IntegerRing, fn abs(&self, value: El<Self>) -> El<Self> }
    delegate!{ IntegerRing, fn parse(&self, string: &str) -> Option<El<Self>> }
}

impl<R> IntegerRingStore for R
    where R: RingStore,
        R::Type: IntegerRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_integer_axioms<R: IntegerRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: IntegerRing
    {
        assert!(ring.is_domain());
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            assert!(!ring.is_neg(&ring.abs(ring.clone_el(a))));
            assert!(ring.is_neg(a) != ring.is_neg(&ring.negate(ring.clone_el(a))) || ring.is_zero(a));
            let formatted = format!("{}", ring.format(a));
            assert_el_eq!(ring, a, ring.parse(&formatted).unwrap());
        }
        for a in &elements {
            for b in &elements {
                let (_, _, d) = ring.ideal_gen(a, b);
                assert!(!ring.is_neg(&d));
                if ring.is_zero(b) {
                    continue;
                }
                let (_, r) = ring.euclidean_div_rem(ring.clone_el(a), b);
                assert!(ring.is_zero(&r) || ring.is_neg(&r) == ring.is_neg(a));
            }
        }
    }
}
