use std::cmp::min;
use std::convert::Infallible;

use serde::{Deserializer, Serializer};

use crate::algorithms::poly_div::poly_div_rem;
use crate::divisibility::*;
use crate::ring::*;
use crate::rings::poly::*;
use crate::serialization::*;

///
/// The univariate polynomial ring `R[X]`. Polynomials are stored as dense vectors of
/// coefficients.
///
/// # Example
/// ```
/// # use minpoly::assert_el_eq;
/// # use minpoly::ring::*;
/// # use minpoly::integer::*;
/// # use minpoly::rings::poly::*;
/// # use minpoly::rings::poly::dense_poly::*;
/// let ZZ = BigIntRing::RING;
/// let P = DensePolyRing::new(ZZ, "X");
/// let x_plus_1 = P.add(P.indeterminate(), P.one());
/// let binomial_coefficients = P.pow(x_plus_1, 10);
/// assert_el_eq!(ZZ, ZZ.from_int(10 * 9 * 8 * 7 * 6 / 120), P.coefficient_at(&binomial_coefficients, 5));
/// ```
///
pub struct DensePolyRingBase<R: RingStore> {
    base_ring: R,
    unknown_name: &'static str,
    zero: El<R>
}

impl<R: RingStore + Clone> Clone for DensePolyRingBase<R> {

    fn clone(&self) -> Self {
        DensePolyRingBase {
            base_ring: <R as Clone>::clone(&self.base_ring),
            unknown_name: self.unknown_name,
            zero: self.base_ring.zero()
        }
    }
}

impl<R: RingStore> std::fmt::Debug for DensePolyRingBase<R>
    where R::Type: std::fmt::Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}[{}]", self.base_ring.get_ring(), self.unknown_name)
    }
}

///
/// The univariate polynomial ring `R[X]`, with polynomials being stored as dense vectors of coefficients.
/// For details, see [`DensePolyRingBase`].
///
pub type DensePolyRing<R> = RingValue<DensePolyRingBase<R>>;

impl<R: RingStore> DensePolyRing<R> {

    pub fn new(base_ring: R, unknown_name: &'static str) -> Self {
        let zero = base_ring.zero();
        RingValue::from(DensePolyRingBase { base_ring, unknown_name, zero })
    }
}

impl<R: RingStore> DensePolyRingBase<R> {

    pub fn unknown_name(&self) -> &'static str {
        self.unknown_name
    }
}

///
/// An element of [`DensePolyRing`].
///
pub struct DensePolyRingEl<R: RingStore> {
    data: Vec<El<R>>
}

impl<R: RingStore> RingBase for DensePolyRingBase<R> {

    type Element = DensePolyRingEl<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        DensePolyRingEl { data: val.data.iter().map(|c| self.base_ring.clone_el(c)).collect() }
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            self.base_ring.add_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        for i in min(lhs.data.len(), rhs.data.len())..rhs.data.len() {
            lhs.data.push(self.base_ring.clone_el(&rhs.data[i]));
        }
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.add_assign_ref(lhs, &rhs);
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            self.base_ring.sub_assign_ref(&mut lhs.data[i], &rhs.data[i]);
        }
        for i in min(lhs.data.len(), rhs.data.len())..rhs.data.len() {
            lhs.data.push(self.base_ring.negate(self.base_ring.clone_el(&rhs.data[i])));
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        for c in &mut lhs.data {
            self.base_ring.negate_inplace(c);
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.mul_assign_ref(lhs, &rhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs = self.mul_ref(lhs, rhs);
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let (Some(lhs_deg), Some(rhs_deg)) = (self.degree(lhs), self.degree(rhs)) else {
            return self.zero();
        };
        let mut result = (0..=(lhs_deg + rhs_deg)).map(|_| self.base_ring.zero()).collect::<Vec<_>>();
        for i in 0..=lhs_deg {
            if self.base_ring.is_zero(&lhs.data[i]) {
                continue;
            }
            for j in 0..=rhs_deg {
                self.base_ring.add_assign(&mut result[i + j], self.base_ring.mul_ref(&lhs.data[i], &rhs.data[j]));
            }
        }
        return DensePolyRingEl { data: result };
    }

    fn zero(&self) -> Self::Element {
        DensePolyRingEl { data: Vec::new() }
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.from(self.base_ring.from_int(value))
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        for i in 0..min(lhs.data.len(), rhs.data.len()) {
            if !self.base_ring.eq_el(&lhs.data[i], &rhs.data[i]) {
                return false;
            }
        }
        let longer = if lhs.data.len() > rhs.data.len() { lhs } else { rhs };
        for i in min(lhs.data.len(), rhs.data.len())..longer.data.len() {
            if !self.base_ring.is_zero(&longer.data[i]) {
                return false;
            }
        }
        return true;
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        self.degree(value).is_none()
    }

    fn is_commutative(&self) -> bool {
        self.base_ring.is_commutative()
    }

    fn is_noetherian(&self) -> bool {
        // by Hilbert's basis theorem
        self.base_ring.is_noetherian()
    }

    fn is_domain(&self) -> bool {
        self.base_ring.is_domain()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        super::generic_impls::dbg_poly(self, value, out, self.unknown_name)
    }

    fn mul_assign_int(&self, lhs: &mut Self::Element, rhs: i32) {
        for c in &mut lhs.data {
            self.base_ring.mul_assign_int(c, rhs);
        }
    }
}

impl<R: RingStore> PartialEq for DensePolyRingBase<R> {

    fn eq(&self, other: &Self) -> bool {
        self.base_ring.get_ring() == other.base_ring.get_ring()
    }
}

impl<R: RingStore> RingExtension for DensePolyRingBase<R> {

    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base_ring
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        DensePolyRingEl { data: vec![x] }
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        for c in &mut lhs.data {
            self.base_ring.mul_assign_ref(c, rhs);
        }
    }
}

///
/// Iterator over all nonzero terms of an element of [`DensePolyRing`].
///
pub struct TermIterator<'a, R>
    where R: RingStore
{
    iter: std::iter::Enumerate<std::slice::Iter<'a, El<R>>>,
    ring: &'a R
}

impl<'a, R> Clone for TermIterator<'a, R>
    where R: RingStore
{
    fn clone(&self) -> Self {
        TermIterator { iter: self.iter.clone(), ring: self.ring }
    }
}

impl<'a, R> Iterator for TermIterator<'a, R>
    where R: RingStore
{
    type Item = (&'a El<R>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((i, c)) = self.iter.next() {
            if !self.ring.is_zero(c) {
                return Some((c, i));
            }
        }
        return None;
    }
}

impl<R> PolyRing for DensePolyRingBase<R>
    where R: RingStore
{
    type TermsIterator<'a> = TermIterator<'a, R>
        where Self: 'a;

    fn indeterminate(&self) -> Self::Element {
        DensePolyRingEl { data: vec![self.base_ring.zero(), self.base_ring.one()] }
    }

    fn terms<'a>(&'a self, f: &'a Self::Element) -> TermIterator<'a, R> {
        TermIterator { iter: f.data.iter().enumerate(), ring: &self.base_ring }
    }

    fn add_assign_from_terms<I>(&self, lhs: &mut Self::Element, rhs: I)
        where I: IntoIterator<Item = (El<Self::BaseRing>, usize)>
    {
        for (c, i) in rhs {
            if lhs.data.len() <= i {
                lhs.data.resize_with(i + 1, || self.base_ring.zero());
            }
            self.base_ring.add_assign(&mut lhs.data[i], c);
        }
    }

    fn coefficient_at<'a>(&'a self, f: &'a Self::Element, i: usize) -> &'a El<Self::BaseRing> {
        f.data.get(i).unwrap_or(&self.zero)
    }

    fn degree(&self, f: &Self::Element) -> Option<usize> {
        (0..f.data.len()).rev().find(|i| !self.base_ring.is_zero(&f.data[*i]))
    }

    fn div_rem_monic(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        assert!(self.degree(rhs).is_some() && self.base_ring.is_one(&rhs.data[self.degree(rhs).unwrap()]), "divisor must be monic");
        match poly_div_rem::<_, _, Infallible>(RingRef::new(self), lhs, rhs, |c| Ok(self.base_ring.clone_el(c))) {
            Ok(result) => result,
            Err(e) => match e {}
        }
    }
}

impl<R> Domain for DensePolyRingBase<R>
    where R: RingStore, R::Type: Domain
{}

impl<R> DivisibilityRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: DivisibilityRing
{
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        let Some(d) = self.degree(rhs) else {
            return if self.is_zero(lhs) { Some(self.zero()) } else { None };
        };
        let lc = &rhs.data[d];
        let (quo, rem) = poly_div_rem(RingRef::new(self), self.clone_el(lhs), rhs, |c| self.base_ring.checked_left_div(c, lc).ok_or(())).ok()?;
        if self.is_zero(&rem) {
            Some(quo)
        } else {
            None
        }
    }
}

impl<R> SerializableElementRing for DensePolyRingBase<R>
    where R: RingStore, R::Type: SerializableElementRing
{
    ///
    /// Deserializes a polynomial from the sequence of its coefficients, starting
    /// with the constant coefficient.
    ///
    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        let mut data = Vec::new();
        deserialize_seq_helper(deserializer, |c| data.push(c), DeserializeWithRing::new(&self.base_ring))?;
        return Ok(DensePolyRingEl { data });
    }

    fn serialize<S>(&self, el: &Self::Element, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        let len = self.degree(el).map(|d| d + 1).unwrap_or(0);
        serialize_seq_helper(serializer, el.data[..len].iter().map(|c| SerializeWithRing::new(c, &self.base_ring)))
    }
}

#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::zn::Zn;
#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::rings::fraction::FractionFieldStore;
#[cfg(test)]
use crate::homomorphism::Homomorphism;

#[cfg(test)]
fn edge_case_elements<P: PolyRingStore>(poly_ring: P) -> impl Iterator<Item = El<P>>
    where P::Type: PolyRing
{
    let base_ring = poly_ring.base_ring();
    vec![
        poly_ring.zero(),
        poly_ring.from_terms([(base_ring.from_int(1), 0)]),
        poly_ring.from_terms([(base_ring.from_int(1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(1), 0), (base_ring.from_int(1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(-1), 0)]),
        poly_ring.from_terms([(base_ring.from_int(-1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(-1), 0), (base_ring.from_int(1), 1)]),
        poly_ring.from_terms([(base_ring.from_int(2), 0), (base_ring.from_int(-1), 2)])
    ].into_iter()
}

#[test]
fn test_ring_axioms() {
    let poly_ring = DensePolyRing::new(BigIntRing::RING, "X");
    crate::ring::generic_tests::test_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
    let poly_ring = DensePolyRing::new(Zn::new(6), "X");
    crate::ring::generic_tests::test_ring_axioms(&poly_ring, edge_case_elements(&poly_ring));
    assert!(!poly_ring.is_domain());
}

#[test]
fn test_poly_ring_axioms() {
    let base_ring = Zn::new(7);
    let poly_ring = DensePolyRing::new(base_ring, "X");
    crate::rings::poly::generic_tests::test_poly_ring_axioms(&poly_ring, 0..7);
}

#[test]
fn test_divisibility_ring_axioms() {
    let poly_ring = DensePolyRing::new(BigIntRing::RING, "X");
    crate::divisibility::generic_tests::test_divisibility_axioms(&poly_ring, edge_case_elements(&poly_ring));
}

#[test]
fn test_serialization() {
    let poly_ring = DensePolyRing::new(BigIntRing::RING, "X");
    crate::serialization::generic_tests::test_serialization(&poly_ring, edge_case_elements(&poly_ring));
}

#[test]
fn test_format() {
    let ZZ = BigIntRing::RING;
    let P = DensePolyRing::new(ZZ, "X");
    assert_eq!("X^2 + -2", format!("{}", P.format(&P.from_terms([(ZZ.from_int(-2), 0), (ZZ.one(), 2)]))));
    assert_eq!("3X + 1", format!("{}", P.format(&P.from_terms([(ZZ.one(), 0), (ZZ.from_int(3), 1)]))));
    assert_eq!("0", format!("{}", P.format(&P.zero())));
}

#[test]
fn test_monic_and_degree_order() {
    let ZZ = BigIntRing::RING;
    let P = DensePolyRing::new(ZZ, "X");
    let f = P.from_terms([(ZZ.from_int(-4), 0), (ZZ.one(), 2)]);
    let g = P.from_terms([(ZZ.from_int(-8), 0), (ZZ.from_int(2), 2)]);
    assert!(P.is_monic(&f));
    assert!(!P.is_monic(&g));
    assert!(!P.is_monic(&P.zero()));
    assert_el_eq!(ZZ, ZZ.from_int(2), P.lc(&g).unwrap());
    assert!(P.lc(&P.zero()).is_none());
    assert_eq!(std::cmp::Ordering::Equal, P.cmp_degree(&f, &g));
    assert_eq!(std::cmp::Ordering::Less, P.cmp_degree(&P.zero(), &P.one()));
    assert_eq!(std::cmp::Ordering::Greater, P.cmp_degree(&f, &P.indeterminate()));
}

#[test]
fn test_content_and_normalize() {
    let ZZ = BigIntRing::RING;
    let P = DensePolyRing::new(ZZ, "X");
    let f = P.from_terms([(ZZ.from_int(-8), 0), (ZZ.from_int(6), 1), (ZZ.from_int(2), 2)]);
    assert_el_eq!(ZZ, ZZ.from_int(2), P.content(&f));
    assert!(!P.is_primitive(&f));
    assert!(P.is_primitive(&P.indeterminate()));
    assert_el_eq!(ZZ, ZZ.zero(), P.content(&P.zero()));

    let QQ = RationalField::new(ZZ);
    let QQX = DensePolyRing::new(&QQ, "X");
    let f_QQ = QQX.lifted_hom(&P, QQ.inclusion()).map_ref(&f);
    let expected = QQX.from_terms([(QQ.from_int(-4), 0), (QQ.from_int(3), 1), (QQ.one(), 2)]);
    assert_el_eq!(QQX, expected, QQX.normalize(f_QQ));
    let half = QQ.from_fraction(ZZ.one(), ZZ.from_int(2));
    assert_el_eq!(QQX, QQX.indeterminate(), QQX.normalize(QQX.from_terms([(half, 1)])));
}

#[test]
fn test_div_rem_and_checked_div() {
    let ZZ = BigIntRing::RING;
    let P = DensePolyRing::new(ZZ, "X");
    let f = P.from_terms([(ZZ.from_int(-4), 0), (ZZ.one(), 2)]);
    let g = P.from_terms([(ZZ.from_int(-2), 0), (ZZ.one(), 1)]);
    let (quo, rem) = P.div_rem_monic(P.clone_el(&f), &g);
    assert_el_eq!(P, P.from_terms([(ZZ.from_int(2), 0), (ZZ.one(), 1)]), quo);
    assert!(P.is_zero(&rem));

    let two_g = P.mul_ref_snd(P.from_int(2), &g);
    assert!(P.checked_div(&f, &two_g).is_none());
    assert_el_eq!(P, P.from_terms([(ZZ.from_int(2), 0), (ZZ.one(), 1)]), P.checked_div(&P.mul_ref_snd(P.from_int(2), &f), &two_g).unwrap());
}

#[test]
fn test_evaluate() {
    let ZZ = BigIntRing::RING;
    let P = DensePolyRing::new(ZZ, "X");
    let f = P.from_terms([(ZZ.from_int(-4), 0), (ZZ.one(), 2)]);
    assert_el_eq!(ZZ, ZZ.from_int(21), P.evaluate(&f, &ZZ.from_int(5), ZZ.identity()));
    assert_el_eq!(ZZ, ZZ.zero(), P.evaluate(&f, &ZZ.from_int(-2), ZZ.identity()));
    let QQ = RationalField::new(ZZ);
    let half = QQ.from_fraction(ZZ.one(), ZZ.from_int(2));
    assert_el_eq!(QQ, QQ.from_fraction(ZZ.from_int(-15), ZZ.from_int(4)), P.evaluate(&f, &half, QQ.inclusion()));
}
