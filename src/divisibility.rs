use crate::ring::*;

///
/// Trait for rings that support checking divisibility, i.e.
/// whether for `x, y` there is `k` such that `x = ky`.
///
pub trait DivisibilityRing: RingBase {

    ///
    /// Checks whether there is an element `x` such that `rhs * x = lhs`, and
    /// returns it if it exists. Note that this does not have to be unique, if
    /// rhs is a left zero-divisor. In particular, this function will return any
    /// element in the ring if `lhs = rhs = 0`.
    ///
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element>;

    fn is_unit(&self, x: &Self::Element) -> bool {
        self.checked_left_div(&self.one(), x).is_some()
    }
}

///
/// Trait for rings that are integral domains, i.e. have no zero-divisors and
/// satisfy `1 != 0`, for every instance.
///
/// Rings for which this depends on the instance (like `Z/nZ`) should not
/// implement this trait, but report it through [`RingBase::is_domain()`].
///
pub trait Domain: DivisibilityRing {}

///
/// [`RingStore`] for [`DivisibilityRing`]s
///
pub trait DivisibilityRingStore: RingStore
    where Self::Type: DivisibilityRing
{
    delegate!{ DivisibilityRing, fn checked_left_div(&self, lhs: &El<Self>, rhs: &El<Self>) -> Option<El<Self>> }
    delegate!{ DivisibilityRing, fn is_unit(&self, x: &El<Self>) -> bool }

    fn checked_div(&self, lhs: &El<Self>, rhs: &El<Self>) -> Option<El<Self>> {
        assert!(self.is_commutative());
        self.checked_left_div(lhs, rhs)
    }

    fn invert(&self, lhs: &El<Self>) -> Option<El<Self>> {
        self.checked_div(&self.one(), lhs)
    }

    fn divides(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool {
        self.checked_div(rhs, lhs).is_some()
    }
}

impl<R> DivisibilityRingStore for R
    where R: RingStore, R::Type: DivisibilityRing
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_divisibility_axioms<R: DivisibilityRingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: DivisibilityRing
    {
        let elements = edge_case_elements.collect::<Vec<_>>();

        for a in &elements {
            for b in &elements {
                let ab = ring.mul_ref(a, b);
                let c = ring.checked_left_div(&ab, a);
                assert!(c.is_some(), "Divisibility existence failed: there should exist b = {} such that {} = b * {}, but none was found", ring.format(b), ring.format(&ab), ring.format(a));
                if let Some(c) = c {
                    assert!(ring.eq_el(&ab, &ring.mul_ref_snd(ring.clone_el(a), &c)), "Division failed: {} * {} != {} but {} = checked_div({}, {})", ring.format(a), ring.format(&c), ring.format(&ab), ring.format(&c), ring.format(&ab), ring.format(a));
                }
            }
        }

        for a in &elements {
            if let Some(inv) = ring.invert(a) {
                assert!(ring.is_unit(a));
                assert_el_eq!(ring, ring.one(), ring.mul_ref(a, &inv));
            } else {
                assert!(!ring.is_unit(a));
            }
        }
    }
}
