use std::cmp::Ordering;

use crate::divisibility::DivisibilityRingStore;
use crate::field::{Field, FieldStore};
use crate::homomorphism::*;
use crate::pid::{PrincipalIdealRing, PrincipalIdealRingStore};
use crate::ring::*;

///
/// Contains [`dense_poly::DensePolyRing`], the implementation of univariate polynomial
/// rings used throughout this crate.
///
pub mod dense_poly;

///
/// Trait for all rings that represent the polynomial ring `R[X]` with
/// any base ring R.
///
pub trait PolyRing: RingExtension {

    type TermsIterator<'a>: Iterator<Item = (&'a El<Self::BaseRing>, usize)>
        where Self: 'a;

    ///
    /// Returns the indeterminate `X` generating this polynomial ring.
    ///
    fn indeterminate(&self) -> Self::Element;

    ///
    /// Returns all the nonzero terms of the given polynomial, as pairs of
    /// coefficient and exponent. The order is not specified.
    ///
    fn terms<'a>(&'a self, f: &'a Self::Element) -> Self::TermsIterator<'a>;

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: IntoIterator<Item = (El<Self::BaseRing>, usize)>
    {
        let self_ring = RingRef::new(self);
        self.add_assign(lhs, self_ring.sum(
            rhs.into_iter().map(|(c, i)| self.mul(self.from(c), self_ring.pow(self.indeterminate(), i)))
        ));
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing>;

    ///
    /// Returns the degree of the polynomial, or `None` for the zero polynomial.
    ///
    fn degree(&self, f: &Self::Element) -> Option<usize>;

    ///
    /// Computes `(q, r)` with `lhs = q * rhs + r` and `deg r < deg rhs`.
    /// Panics if `rhs` is not monic.
    ///
    fn div_rem_monic(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element);

    ///
    /// Evaluates `f` at `value`, after mapping its coefficients into the ring
    /// of `value` via `hom`.
    ///
    fn evaluate<S, H>(&self, f: &Self::Element, value: &S::Element, hom: H) -> S::Element
        where S: ?Sized + RingBase,
            H: Homomorphism<<Self::BaseRing as RingStore>::Type, S>
    {
        let Some(d) = self.degree(f) else {
            return hom.codomain().zero();
        };
        let mut current = hom.map_ref(self.coefficient_at(f, d));
        for i in (0..d).rev() {
            hom.codomain().mul_assign_ref(&mut current, value);
            hom.codomain().add_assign(&mut current, hom.map_ref(self.coefficient_at(f, i)));
        }
        return current;
    }
}

///
/// [`RingStore`] corresponding to [`PolyRing`].
///
pub trait PolyRingStore: RingStore
    where Self::Type: PolyRing
{
    delegate!{ PolyRing, fn indeterminate(&self) -> El<Self> }
    delegate!{ PolyRing, fn degree(&self, f: &El<Self>) -> Option<usize> }
    delegate!{ PolyRing, fn div_rem_monic(&self, lhs: El<Self>, rhs: &El<Self>) -> (El<Self>, El<Self>) }

    fn coefficient_at<'a>(&'a self, f: &'a El<Self>, i: usize) -> &'a El<BaseRing<Self>> {
        self.get_ring().coefficient_at(f, i)
    }

    fn terms<'a>(&'a self, f: &'a El<Self>) -> <Self::Type as PolyRing>::TermsIterator<'a> {
        self.get_ring().terms(f)
    }

    fn from_terms<I>(&self, iter: I) -> El<Self>
        where I: IntoIterator<Item = (El<BaseRing<Self>>, usize)>
    {
        let mut result = self.zero();
        self.get_ring().add_assign_from_terms(&mut result, iter);
        return result;
    }

    ///
    /// Returns the leading coefficient of `f`, or `None` if `f` is zero.
    ///
    fn lc<'a>(&'a self, f: &'a El<Self>) -> Option<&'a El<BaseRing<Self>>> {
        Some(self.coefficient_at(f, self.degree(f)?))
    }

    ///
    /// Returns whether `f` is nonzero with leading coefficient `1`.
    ///
    fn is_monic(&self, f: &El<Self>) -> bool {
        self.lc(f).map(|c| self.base_ring().is_one(c)).unwrap_or(false)
    }

    ///
    /// Compares two polynomials by their degree, where the zero polynomial is
    /// strictly smaller than any nonzero polynomial.
    ///
    /// This is a total preorder on polynomials, and since it is based on the
    /// well-ordered set `{ None } ∪ N`, every nonempty set of polynomials has
    /// an element of minimal degree.
    ///
    fn cmp_degree(&self, f: &El<Self>, g: &El<Self>) -> Ordering {
        self.degree(f).cmp(&self.degree(g))
    }

    fn evaluate<S, H>(&self, f: &El<Self>, value: &S::Element, hom: H) -> S::Element
        where S: ?Sized + RingBase,
            H: Homomorphism<<BaseRing<Self> as RingStore>::Type, S>
    {
        self.get_ring().evaluate(f, value, hom)
    }

    ///
    /// Computes a gcd of all coefficients of `f`. This is zero if and only if
    /// `f` is zero.
    ///
    fn content(&self, f: &El<Self>) -> El<BaseRing<Self>>
        where <BaseRing<Self> as RingStore>::Type: PrincipalIdealRing
    {
        let base_ring = self.base_ring();
        self.terms(f).fold(base_ring.zero(), |d, (c, _)| base_ring.gcd(&d, c))
    }

    ///
    /// Returns whether the coefficients of `f` generate the unit ideal.
    ///
    fn is_primitive(&self, f: &El<Self>) -> bool
        where <BaseRing<Self> as RingStore>::Type: PrincipalIdealRing
    {
        self.base_ring().is_unit(&self.content(f))
    }

    ///
    /// Divides `f` by its leading coefficient. The zero polynomial is returned
    /// unchanged.
    ///
    fn normalize(&self, f: El<Self>) -> El<Self>
        where <BaseRing<Self> as RingStore>::Type: Field
    {
        let Some(lc) = self.lc(&f) else {
            return f;
        };
        let base_ring = self.base_ring();
        let lc_inv = base_ring.div(&base_ring.one(), lc);
        self.from_terms(self.terms(&f).map(|(c, i)| (base_ring.mul_ref(c, &lc_inv), i)).collect::<Vec<_>>())
    }

    ///
    /// Returns the homomorphism `from -> self` that applies `hom` to every coefficient.
    ///
    fn lifted_hom<P, H>(&self, from: P, hom: H) -> CoefficientHom<P, &Self, H>
        where P: RingStore,
            P::Type: PolyRing,
            H: Homomorphism<<BaseRing<P> as RingStore>::Type, <BaseRing<Self> as RingStore>::Type>
    {
        self.into_lifted_hom(from, hom)
    }

    ///
    /// Same as [`PolyRingStore::lifted_hom()`], but takes ownership of `self`.
    ///
    fn into_lifted_hom<P, H>(self, from: P, hom: H) -> CoefficientHom<P, Self, H>
        where P: RingStore,
            P::Type: PolyRing,
            H: Homomorphism<<BaseRing<P> as RingStore>::Type, <BaseRing<Self> as RingStore>::Type>
    {
        assert!(hom.domain().get_ring() == from.base_ring().get_ring());
        assert!(hom.codomain().get_ring() == self.base_ring().get_ring());
        CoefficientHom { from, to: self, hom }
    }
}

impl<R: RingStore> PolyRingStore for R
    where R::Type: PolyRing
{}

///
/// The homomorphism `R[X] -> S[X]` induced by a homomorphism `R -> S` on
/// the coefficients. Created by [`PolyRingStore::lifted_hom()`].
///
pub struct CoefficientHom<PFrom, PTo, H>
    where PFrom: RingStore,
        PTo: RingStore,
        PFrom::Type: PolyRing,
        PTo::Type: PolyRing,
        H: Homomorphism<<BaseRing<PFrom> as RingStore>::Type, <BaseRing<PTo> as RingStore>::Type>
{
    from: PFrom,
    to: PTo,
    hom: H
}

impl<PFrom, PTo, H> Homomorphism<PFrom::Type, PTo::Type> for CoefficientHom<PFrom, PTo, H>
    where PFrom: RingStore,
        PTo: RingStore,
        PFrom::Type: PolyRing,
        PTo::Type: PolyRing,
        H: Homomorphism<<BaseRing<PFrom> as RingStore>::Type, <BaseRing<PTo> as RingStore>::Type>
{
    type DomainStore = PFrom;
    type CodomainStore = PTo;

    fn domain<'a>(&'a self) -> &'a Self::DomainStore {
        &self.from
    }

    fn codomain<'a>(&'a self) -> &'a Self::CodomainStore {
        &self.to
    }

    fn map(&self, x: El<PFrom>) -> El<PTo> {
        self.map_ref(&x)
    }

    fn map_ref(&self, x: &El<PFrom>) -> El<PTo> {
        self.to.from_terms(self.from.terms(x).map(|(c, i)| (self.hom.map_ref(c), i)).collect::<Vec<_>>())
    }
}

pub mod generic_impls {

    use crate::ring::*;
    use super::PolyRing;

    ///
    /// Formats a polynomial as sum of its terms, from the highest to the lowest degree.
    ///
    pub fn dbg_poly<P: ?Sized + PolyRing>(ring: &P, el: &P::Element, out: &mut std::fmt::Formatter, unknown_name: &str) -> std::fmt::Result {
        let mut terms = ring.terms(el).collect::<Vec<_>>();
        if terms.is_empty() {
            return write!(out, "0");
        }
        terms.sort_by_key(|(_, i)| std::cmp::Reverse(*i));
        for (k, (c, i)) in terms.into_iter().enumerate() {
            if k > 0 {
                write!(out, " + ")?;
            }
            if i == 0 || !ring.base_ring().is_one(c) {
                ring.base_ring().get_ring().dbg(c, out)?;
            }
            match i {
                0 => {},
                1 => write!(out, "{}", unknown_name)?,
                _ => write!(out, "{}^{}", unknown_name, i)?
            }
        }
        return Ok(());
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_poly_ring_axioms<R: PolyRingStore, I: Iterator<Item = El<BaseRing<R>>>>(ring: R, interesting_base_ring_elements: I)
        where R::Type: PolyRing
    {
        let x = ring.indeterminate();
        let base_ring = ring.base_ring();
        let elements = interesting_base_ring_elements.collect::<Vec<_>>();

        // linear independence of 1, X
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    for d in &elements {
                        let a_bx = ring.add(ring.from_ref(a), ring.mul_ref_snd(ring.from_ref(b), &x));
                        let c_dx = ring.add(ring.from_ref(c), ring.mul_ref_snd(ring.from_ref(d), &x));
                        assert!(ring.eq_el(&a_bx, &c_dx) == (base_ring.eq_el(a, c) && base_ring.eq_el(b, d)));
                    }
                }
            }
        }

        // terms(), from_terms(), degree() and evaluate()
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    let f = ring.sum([
                        ring.from_ref(a),
                        ring.mul_ref_snd(ring.from_ref(b), &x),
                        ring.mul(ring.from_ref(c), ring.pow(ring.clone_el(&x), 3))
                    ]);
                    let actual = ring.from_terms([(base_ring.clone_el(a), 0), (base_ring.clone_el(c), 3), (base_ring.clone_el(b), 1)]);
                    assert_el_eq!(ring, f, actual);
                    assert_el_eq!(ring, f, ring.from_terms(ring.terms(&f).map(|(c, i)| (base_ring.clone_el(c), i)).collect::<Vec<_>>()));

                    let expected_degree = if !base_ring.is_zero(c) { Some(3) } else if !base_ring.is_zero(b) { Some(1) } else if !base_ring.is_zero(a) { Some(0) } else { None };
                    assert_eq!(expected_degree, ring.degree(&f));

                    let value = base_ring.add_ref(a, b);
                    let expected_value = base_ring.sum([
                        base_ring.clone_el(a),
                        base_ring.mul_ref(b, &value),
                        base_ring.mul_ref_fst(c, base_ring.pow(base_ring.clone_el(&value), 3))
                    ]);
                    assert_el_eq!(base_ring, expected_value, ring.evaluate(&f, &value, base_ring.identity()));
                }
            }
        }

        // div_rem_monic() by X - c
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    let f = ring.from_terms([(base_ring.clone_el(a), 0), (base_ring.clone_el(b), 3)]);
                    let g = ring.from_terms([(base_ring.negate(base_ring.clone_el(c)), 0), (base_ring.one(), 1)]);
                    let (quo, rem) = ring.div_rem_monic(ring.clone_el(&f), &g);
                    assert_el_eq!(ring, ring.from_ref(&ring.evaluate(&f, c, base_ring.identity())), rem);
                    assert_el_eq!(ring, f, ring.add(rem, ring.mul(quo, g)));
                }
            }
        }
    }
}
