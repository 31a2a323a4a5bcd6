use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero, One};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::divisibility::{DivisibilityRing, Domain};
use crate::integer::IntegerRing;
use crate::pid::{EuclideanRing, PrincipalIdealRing};
use crate::ring::*;
use crate::serialization::SerializableElementRing;

///
/// Arbitrary-precision integer implementation, based on [`num_bigint::BigInt`].
///
/// For the difference to [`RustBigintRing`], see the documentation of [`crate::ring::RingStore`].
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RustBigintRingBase;

///
/// Arbitrary-precision integer implementation, based on [`num_bigint::BigInt`].
///
pub type RustBigintRing = RingValue<RustBigintRingBase>;

impl RustBigintRing {

    pub const RING: RustBigintRing = RingValue::from(RustBigintRingBase);
}

impl RustBigintRingBase {

    pub fn map_i64(&self, val: &BigInt) -> Option<i64> {
        val.to_i64()
    }
}

impl RingBase for RustBigintRingBase {

    type Element = BigInt;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        val.clone()
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs += rhs;
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs += rhs;
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs -= rhs;
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        *lhs = -std::mem::take(lhs);
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs *= rhs;
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs *= rhs;
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        lhs * rhs
    }

    fn zero(&self) -> Self::Element {
        BigInt::zero()
    }

    fn one(&self) -> Self::Element {
        BigInt::one()
    }

    fn from_int(&self, value: i32) -> Self::Element {
        BigInt::from(value)
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        lhs == rhs
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.is_zero()
    }

    fn is_one(&self, value: &Self::Element) -> bool {
        value.is_one()
    }

    fn is_commutative(&self) -> bool {
        true
    }

    fn is_noetherian(&self) -> bool {
        true
    }

    fn is_domain(&self) -> bool {
        true
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", value)
    }
}

impl DivisibilityRing for RustBigintRingBase {

    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        if rhs.is_zero() {
            if lhs.is_zero() {
                return Some(self.zero());
            } else {
                return None;
            }
        }
        let (quo, rem) = lhs.div_rem(rhs);
        if rem.is_zero() {
            Some(quo)
        } else {
            None
        }
    }

    fn is_unit(&self, x: &Self::Element) -> bool {
        x.abs().is_one()
    }
}

impl Domain for RustBigintRingBase {}

impl PrincipalIdealRing for RustBigintRingBase {

    fn ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        let result = lhs.extended_gcd(rhs);
        (result.x, result.y, result.gcd)
    }
}

impl EuclideanRing for RustBigintRingBase {

    fn euclidean_div_rem(&self, lhs: Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element) {
        assert!(!rhs.is_zero());
        lhs.div_rem(rhs)
    }

    fn euclidean_deg(&self, val: &Self::Element) -> Option<usize> {
        Some(val.abs().to_usize().unwrap_or(usize::MAX))
    }
}

impl IntegerRing for RustBigintRingBase {

    fn is_neg(&self, value: &Self::Element) -> bool {
        value.is_negative()
    }

    fn abs(&self, value: Self::Element) -> Self::Element {
        value.abs()
    }

    fn parse(&self, string: &str) -> Option<Self::Element> {
        string.trim().parse::<BigInt>().ok()
    }
}

impl SerializableElementRing for RustBigintRingBase {

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        let string = <String as Deserialize>::deserialize(deserializer)?;
        self.parse(&string).ok_or_else(|| D::Error::custom(format!("expected a decimal integer, got \"{}\"", string)))
    }

    fn serialize<S>(&self, el: &Self::Element, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_str(&el.to_string())
    }
}

#[cfg(test)]
use crate::divisibility::DivisibilityRingStore;
#[cfg(test)]
use crate::pid::PrincipalIdealRingStore;

#[cfg(test)]
fn edge_case_elements() -> impl Iterator<Item = BigInt> {
    [-1000000007i64, -8, -3, -1, 0, 1, 2, 5, 7, 1 << 40].into_iter().map(BigInt::from)
}

#[test]
fn test_ring_axioms() {
    crate::ring::generic_tests::test_ring_axioms(RustBigintRing::RING, edge_case_elements());
}

#[test]
fn test_divisibility_axioms() {
    crate::divisibility::generic_tests::test_divisibility_axioms(RustBigintRing::RING, edge_case_elements());
}

#[test]
fn test_pid_axioms() {
    crate::pid::generic_tests::test_principal_ideal_ring_axioms(RustBigintRing::RING, edge_case_elements());
    crate::pid::generic_tests::test_euclidean_ring_axioms(RustBigintRing::RING, edge_case_elements());
}

#[test]
fn test_integer_axioms() {
    crate::integer::generic_tests::test_integer_axioms(RustBigintRing::RING, edge_case_elements());
}

#[test]
fn test_serialization() {
    crate::serialization::generic_tests::test_serialization(RustBigintRing::RING, edge_case_elements());
}

#[test]
fn test_lcm() {
    let ZZ = RustBigintRing::RING;
    assert_el_eq!(ZZ, ZZ.from_int(12), ZZ.lcm(&ZZ.from_int(4), &ZZ.from_int(-6)).abs());
    assert_el_eq!(ZZ, ZZ.zero(), ZZ.lcm(&ZZ.from_int(4), &ZZ.zero()));
    assert!(ZZ.checked_div(&ZZ.from_int(7), &ZZ.from_int(2)).is_none());
    assert_el_eq!(ZZ, ZZ.zero(), ZZ.checked_div(&ZZ.zero(), &ZZ.zero()).unwrap());
}
