use crate::ring::*;
use crate::divisibility::*;
use crate::pid::*;

///
/// Trait for rings that are fields, i.e. where every nonzero element has an inverse.
///
/// Fields are trivially euclidean rings, with the degree of every nonzero
/// element being `0`.
///
pub trait Field: Domain + EuclideanRing {

    fn div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        assert!(!self.is_zero(rhs));
        assert!(self.is_commutative());
        let inv = self.checked_left_div(&self.one(), rhs);
        assert!(inv.is_some(), "division by nonzero element failed in a field");
        return self.mul_ref_fst(lhs, inv.unwrap());
    }
}

///
/// [`RingStore`] for [`Field`]s
///
pub trait FieldStore: RingStore + EuclideanRingStore
    where Self::Type: Field
{
    delegate!{ Field, fn div(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
}

impl<R> FieldStore for R
    where R: RingStore, R::Type: Field
{}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_field_axioms<R: FieldStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I)
        where R::Type: Field
    {
        assert!(ring.is_commutative());
        assert!(ring.is_domain());
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            for b in &elements {
                if ring.is_zero(b) {
                    continue;
                }
                assert!(ring.is_unit(b));
                assert_el_eq!(ring, a, ring.mul(ring.div(a, b), ring.clone_el(b)));
            }
        }
    }
}
