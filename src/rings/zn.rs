use num_integer::{ExtendedGcd, Integer};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::divisibility::DivisibilityRing;
use crate::pid::PrincipalIdealRing;
use crate::ring::*;
use crate::serialization::SerializableElementRing;

///
/// The ring `Z/nZ` for a modulus `n` that fits into 62 bits, with elements
/// represented by their smallest nonnegative representative.
///
/// Whether this ring is a field (i.e. `n` is prime) is only known at runtime,
/// so it does not implement [`crate::field::Field`], but it reports
/// [`RingBase::is_domain()`] correctly. This makes it useful as a base ring
/// that is a principal ideal ring, but in general not a domain.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ZnBase {
    modulus: u64,
    is_prime: bool
}

///
/// [`RingStore`] for [`ZnBase`]
///
pub type Zn = RingValue<ZnBase>;

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    return true;
}

///
/// Returns `(s, t, d)` with `d = gcd(a, b) >= 0` and `d = s a + t b`.
///
fn signed_eea(a: i64, b: i64) -> (i64, i64, i64) {
    let ExtendedGcd { gcd, x, y, .. } = a.extended_gcd(&b);
    if gcd < 0 {
        (-x, -y, -gcd)
    } else {
        (x, y, gcd)
    }
}

impl Zn {

    pub fn new(modulus: u64) -> Self {
        assert!(modulus >= 1);
        assert!(modulus < (1 << 62));
        RingValue::from(ZnBase { modulus, is_prime: is_prime(modulus) })
    }
}

impl ZnBase {

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    fn reduce(&self, value: i128) -> u64 {
        value.rem_euclid(self.modulus as i128) as u64
    }
}

impl RingBase for ZnBase {

    type Element = u64;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        *val
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs += rhs;
        if *lhs >= self.modulus {
            *lhs -= self.modulus;
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        if *lhs != 0 {
            *lhs = self.modulus - *lhs;
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs = ((*lhs as u128 * rhs as u128) % self.modulus as u128) as u64;
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.reduce(value as i128)
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        *lhs == *rhs
    }

    fn is_commutative(&self) -> bool { true }

    fn is_noetherian(&self) -> bool { true }

    fn is_domain(&self) -> bool {
        self.is_prime
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", *value)
    }
}

impl DivisibilityRing for ZnBase {

    ///
    /// Returns the smallest nonnegative solution `y` of `rhs * y = lhs`, if any.
    /// In particular, if `rhs` divides `lhs` as integers, the integer quotient is
    /// returned.
    ///
    fn checked_left_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Option<Self::Element> {
        let n = self.modulus as i64;
        // d > 0 since n > 0
        let (s, _, d) = signed_eea(*rhs as i64, n);
        if *lhs as i64 % d != 0 {
            return None;
        }
        let reduced_modulus = (n / d) as i128;
        let result = ((*lhs as i64 / d) as i128 * s as i128).rem_euclid(reduced_modulus);
        return Some(result as u64);
    }

    fn is_unit(&self, x: &Self::Element) -> bool {
        signed_eea(*x as i64, self.modulus as i64).2 == 1
    }
}

impl PrincipalIdealRing for ZnBase {

    fn ideal_gen(&self, lhs: &Self::Element, rhs: &Self::Element) -> (Self::Element, Self::Element, Self::Element) {
        let (s, t, d) = signed_eea(*lhs as i64, *rhs as i64);
        (self.reduce(s as i128), self.reduce(t as i128), self.reduce(d as i128))
    }
}

impl SerializableElementRing for ZnBase {

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        let value = <u64 as Deserialize>::deserialize(deserializer)?;
        if value >= self.modulus {
            return Err(D::Error::custom(format!("{} is not a reduced representative modulo {}", value, self.modulus)));
        }
        return Ok(value);
    }

    fn serialize<S>(&self, el: &Self::Element, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer
    {
        serializer.serialize_u64(*el)
    }
}

#[cfg(test)]
use crate::divisibility::DivisibilityRingStore;

#[cfg(test)]
fn elements(ring: &Zn) -> impl Iterator<Item = u64> {
    0..ring.get_ring().modulus()
}

#[test]
fn test_ring_axioms() {
    for n in [1, 2, 9, 12, 17] {
        let ring = Zn::new(n);
        crate::ring::generic_tests::test_ring_axioms(&ring, elements(&ring));
    }
}

#[test]
fn test_divisibility_axioms() {
    for n in [1, 2, 9, 12, 17] {
        let ring = Zn::new(n);
        crate::divisibility::generic_tests::test_divisibility_axioms(&ring, elements(&ring));
    }
}

#[test]
fn test_pid_axioms() {
    for n in [2, 9, 12, 17] {
        let ring = Zn::new(n);
        crate::pid::generic_tests::test_principal_ideal_ring_axioms(&ring, elements(&ring));
    }
}

#[test]
fn test_serialization() {
    let ring = Zn::new(45);
    crate::serialization::generic_tests::test_serialization(&ring, elements(&ring));
}

#[test]
fn test_is_domain() {
    assert!(Zn::new(17).is_domain());
    assert!(!Zn::new(12).is_domain());
    assert!(!Zn::new(1).is_domain());
    assert!(Zn::new(1).is_trivial());
}

#[test]
fn test_checked_div_smallest_solution() {
    let ring = Zn::new(45);
    assert_eq!(Some(2), ring.checked_div(&6, &3));
    assert_eq!(Some(13), ring.checked_div(&39, &3));
    assert_eq!(None, ring.checked_div(&4, &3));
    assert_eq!(Some(0), ring.checked_div(&0, &0));
    assert_eq!(None, ring.checked_div(&1, &0));
}
