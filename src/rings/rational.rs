use std::fmt::Debug;

use serde::de::Error as _;
use serde::{Deserializer, Serializer};

use crate::divisibility::{DivisibilityRing, DivisibilityRingStore, Domain};
use crate::field::Field;
use crate::integer::*;
use crate::pid::{EuclideanRing, PrincipalIdealRing, PrincipalIdealRingStore};
use crate::ring::*;
use crate::rings::fraction::FractionField;
use crate::serialization::*;

///
/// An implementation of the rational numbers `Q`, based on representing them
/// as a reduced tuple `(numerator, denominator)` with positive denominator.
///
/// # Example
/// ```rust
/// # use minpoly::assert_el_eq;
/// # use minpoly::ring::*;
/// # use minpoly::integer::*;
/// # use minpoly::rings::rational::*;
/// # use minpoly::field::FieldStore;
/// let ZZ = BigIntRing::RING;
/// let QQ = RationalField::new(ZZ);
/// let one_half = QQ.div(&QQ.one(), &QQ.from_int(2));
/// assert_el_eq!(QQ, QQ.div(&QQ.one(), &QQ.from_int(4)), QQ.pow(QQ.clone_el(&one_half), 2));
/// assert_el_eq!(ZZ, ZZ.from_int(2), QQ.get_ring().den(&one_half));
/// ```
///
pub struct RationalFieldBase<I: RingStore>
    where I::Type: IntegerRing
{
    integers: I
}

impl<I> Clone for RationalFieldBase<I>
    where I: RingStore + Clone,
        I::Type: IntegerRing
{
    fn clone(&self) -> Self {
        Self { integers: self.integers.clone() }
    }
}

impl<I> Copy for RationalFieldBase<I>
    where I: RingStore + Copy,
        I::Type: IntegerRing
{}

impl<I> Debug for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q")
    }
}

impl<I> PartialEq for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    fn eq(&self, other: &Self) -> bool {
        self.integers.get_ring() == other.integers.get_ring()
    }
}

///
/// [`RingStore`] corresponding to [`RationalFieldBase`]
///
pub type RationalField<I> = RingValue<RationalFieldBase<I>>;

///
/// An element of [`RationalField`], i.e. a reduced fraction of two integers.
///
pub struct RationalFieldEl<I>(El<I>, El<I>)
    where I: RingStore,
        I::Type: IntegerRing;

impl<I> Debug for RationalFieldEl<I>
    where I: RingStore,
        I::Type: IntegerRing,
        El<I>: Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RationalFieldEl")
            .field("num", &self.0)
            .field("den", &self.1)
            .finish()
    }
}

impl<I> RationalField<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    pub fn new(integers: I) -> Self {
        RingValue::from(RationalFieldBase { integers })
    }
}

impl<I> RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    pub fn num<'a>(&self, el: &'a RationalFieldEl<I>) -> &'a El<I> {
        &el.0
    }

    pub fn den<'a>(&self, el: &'a RationalFieldEl<I>) -> &'a El<I> {
        &el.1
    }

    fn reduce(&self, num: El<I>, den: El<I>) -> RationalFieldEl<I> {
        assert!(!self.integers.is_zero(&den));
        let gcd = self.integers.gcd(&num, &den);
        let mut num = self.integers.checked_div(&num, &gcd).unwrap();
        let mut den = self.integers.checked_div(&den, &gcd).unwrap();
        if self.integers.is_neg(&den) {
            self.integers.negate_inplace(&mut num);
            self.integers.negate_inplace(&mut den);
        }
        return RationalFieldEl(num, den);
    }
}

impl<I> RingBase for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    type Element = RationalFieldEl<I>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        RationalFieldEl(self.integers.clone_el(&val.0), self.integers.clone_el(&val.1))
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        let ZZ = &self.integers;
        let num = ZZ.add(ZZ.mul_ref(&lhs.0, &rhs.1), ZZ.mul_ref(&rhs.0, &lhs.1));
        let den = ZZ.mul_ref(&lhs.1, &rhs.1);
        *lhs = self.reduce(num, den);
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.add_assign_ref(lhs, &rhs)
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        self.integers.negate_inplace(&mut lhs.0);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        let ZZ = &self.integers;
        let num = ZZ.mul_ref(&lhs.0, &rhs.0);
        let den = ZZ.mul_ref(&lhs.1, &rhs.1);
        *lhs = self.reduce(num, den);
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.mul_assign_ref(lhs, &rhs)
    }

    fn from_int(&self, value: i32) -> Self::Element {
        RationalFieldEl(self.integers.from_int(value), self.integers.one())
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        // both are reduced with positive denominator
        self.integers.eq_el(&lhs.0, &rhs.0) && self.integers.eq_el(&lhs.1, &rhs.1)
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        self.integers.is_zero(&value.0)
    }

    fn is_commutative(&self) -> bool { true }

    fn is_noetherian(&self) -> bool { true }

    fn is_domain(&self) -> bool { true }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        if self.integers.is_one(&value.1) {
            write!(out, "{}", self.integers.format(&value.0))
        } else {
            write!(out, "{}/{}", self.integers.format(&value.0), self.integers.format(&value.1))
        }
    }
}

impl<I> RingExtension for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    type BaseRing = I;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.integers
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        RationalFieldEl(x, self.integers.one())
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        let num = self.integers.mul_ref(&lhs.0, rhs);
        let den = std::mem::replace(&mut lhs.1, self.integers.zero());
        *lhs = self.reduce(num, den);
    }
}

impl<I> DivisibilityRing for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if self.is_zero(lhs) {
            Some(self.zero())
        } else if self.is_zero(rhs) {
            None
        } else {
            let ZZ = &self.integers;
            Some(self.reduce(ZZ.mul_ref(&lhs.0, &rhs.1), ZZ.mul_ref(&lhs.1, &rhs.0)))
        }
    }

    fn is_unit(&self, x: &Self::Element) -> bool {
        !self.is_zero(x)
    }
}

impl<I> Domain for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{}

impl<I> PrincipalIdealRing for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    fn ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        if !self.is_zero(lhs) {
            (self.checked_left_div(&self.one(), lhs).unwrap(), self.zero(), self.one())
        } else if !self.is_zero(rhs) {
            (self.zero(), self.checked_left_div(&self.one(), rhs).unwrap(), self.one())
        } else {
            (self.zero(), self.zero(), self.zero())
        }
    }
}

impl<I> EuclideanRing for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        assert!(!self.is_zero(rhs));
        (self.checked_left_div(&lhs, rhs).unwrap(), self.zero())
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        if self.is_zero(val) { Some(0) } else { Some(1) }
    }
}

impl<I> Field for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{}

impl<I> FractionField for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing
{
    fn as_fraction(&self, el: Self::Element) -> (El<Self::BaseRing>, El<Self::BaseRing>) {
        (el.0, el.1)
    }

    fn from_fraction(&self, num: El<Self::BaseRing>, den: El<Self::BaseRing>) -> Self::Element {
        self.reduce(num, den)
    }
}

impl<I> SerializableElementRing for RationalFieldBase<I>
    where I: RingStore,
        I::Type: IntegerRing + SerializableElementRing
{
    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        let mut parts = Vec::with_capacity(2);
        deserialize_seq_helper(deserializer, |x| parts.push(x), DeserializeWithRing::new(&self.integers))?;
        if parts.len() != 2 {
            return Err(D::Error::invalid_length(parts.len(), &"a numerator and a denominator"));
        }
        let den = parts.pop().unwrap();
        let num = parts.pop().unwrap();
        if self.integers.is_zero(&den) {
            return Err(D::Error::custom("denominator must not be zero"));
        }
        return Ok(self.reduce(num, den));
    }

    fn serialize<S>(&self, el: &Self::Element, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serialize_seq_helper(serializer, [&el.0, &el.1].into_iter().map(|x| SerializeWithRing::new(x, &self.integers)))
    }
}

#[cfg(test)]
use crate::rings::fraction::FractionFieldStore;

#[cfg(test)]
fn edge_case_elements<'a>(QQ: &'a RationalField<BigIntRing>) -> impl 'a + Iterator<Item = RationalFieldEl<BigIntRing>> {
    [(0, 1), (1, 1), (-1, 1), (1, 2), (-3, 2), (7, 5), (-8, 9), (100, 3)].into_iter()
        .map(|(num, den)| QQ.from_fraction(BigIntRing::RING.from_int(num), BigIntRing::RING.from_int(den)))
}

#[test]
fn test_ring_axioms() {
    let QQ = RationalField::new(BigIntRing::RING);
    crate::ring::generic_tests::test_ring_axioms(&QQ, edge_case_elements(&QQ));
    crate::divisibility::generic_tests::test_divisibility_axioms(&QQ, edge_case_elements(&QQ));
    crate::pid::generic_tests::test_principal_ideal_ring_axioms(&QQ, edge_case_elements(&QQ));
    crate::pid::generic_tests::test_euclidean_ring_axioms(&QQ, edge_case_elements(&QQ));
    crate::field::generic_tests::test_field_axioms(&QQ, edge_case_elements(&QQ));
}

#[test]
fn test_serialization() {
    let QQ = RationalField::new(BigIntRing::RING);
    crate::serialization::generic_tests::test_serialization(&QQ, edge_case_elements(&QQ));
}

#[test]
fn test_reduced_representation() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let x = QQ.from_fraction(ZZ.from_int(6), ZZ.from_int(-4));
    assert_el_eq!(ZZ, ZZ.from_int(-3), QQ.get_ring().num(&x));
    assert_el_eq!(ZZ, ZZ.from_int(2), QQ.get_ring().den(&x));
    assert_el_eq!(QQ, QQ.from_fraction(ZZ.from_int(-3), ZZ.from_int(2)), x);
    assert_eq!("-3/2", format!("{}", QQ.format(&x)));
}

#[test]
fn test_as_base_element() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    assert_el_eq!(ZZ, ZZ.from_int(-5), QQ.as_base_element(&QQ.from_int(-5)).unwrap());
    assert!(QQ.as_base_element(&QQ.from_fraction(ZZ.from_int(1), ZZ.from_int(3))).is_none());
}
