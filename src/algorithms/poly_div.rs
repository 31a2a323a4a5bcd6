use tracing::instrument;

use crate::ring::*;
use crate::rings::poly::*;

///
/// Computes the polynomial division of `lhs` by `rhs`, i.e. `lhs = q * rhs + r` with
/// `deg(r) < deg(rhs)`.
///
/// This requires a function `left_div_lc` that divides an element of the base ring by
/// the leading coefficient of `rhs`. For monic `rhs`, this is just cloning the element,
/// over a field it is standard division. If `left_div_lc` fails, the error is returned.
///
/// Note that if the leading coefficient of `rhs` is a zero-divisor, the result is not
/// necessarily unique, and `left_div_lc` is expected to pick some quotient.
///
#[instrument(skip_all, level = "trace")]
pub fn poly_div_rem<P, F, E>(poly_ring: P, mut lhs: El<P>, rhs: &El<P>, mut left_div_lc: F) -> Result<(El<P>, El<P>), E>
    where P: RingStore,
        P::Type: PolyRing,
        F: FnMut(&El<BaseRing<P>>) -> Result<El<BaseRing<P>>, E>
{
    let rhs_deg = poly_ring.degree(rhs).expect("division by zero polynomial");
    let Some(lhs_deg) = poly_ring.degree(&lhs) else {
        return Ok((poly_ring.zero(), lhs));
    };
    if lhs_deg < rhs_deg {
        return Ok((poly_ring.zero(), lhs));
    }
    let base_ring = poly_ring.base_ring();
    let mut quotient_terms = Vec::with_capacity(lhs_deg + 1 - rhs_deg);
    for i in (0..(lhs_deg + 1 - rhs_deg)).rev() {
        let quo = left_div_lc(poly_ring.coefficient_at(&lhs, i + rhs_deg))?;
        if base_ring.is_zero(&quo) {
            continue;
        }
        let neg_quo = base_ring.negate(base_ring.clone_el(&quo));
        poly_ring.get_ring().add_assign_from_terms(
            &mut lhs,
            poly_ring.terms(rhs).map(|(c, j)| (base_ring.mul_ref(&neg_quo, c), i + j))
        );
        quotient_terms.push((quo, i));
    }
    return Ok((poly_ring.from_terms(quotient_terms), lhs));
}

#[cfg(test)]
use std::convert::Infallible;
#[cfg(test)]
use crate::divisibility::DivisibilityRingStore;
#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::zn::Zn;
#[cfg(test)]
use crate::tracing::LogAlgorithmSubscriber;

#[test]
fn test_poly_div_rem_monic() {
    LogAlgorithmSubscriber::init_test();
    let ZZ = BigIntRing::RING;
    let ZZX = DensePolyRing::new(ZZ, "X");
    // X^4 + 3X + 1 = (X^2 + 2)(X^2 - 2) + 3X + 5
    let f = ZZX.from_terms([(ZZ.from_int(1), 4), (ZZ.from_int(3), 1), (ZZ.from_int(1), 0)]);
    let g = ZZX.from_terms([(ZZ.from_int(1), 2), (ZZ.from_int(-2), 0)]);
    let (q, r) = poly_div_rem::<_, _, Infallible>(&ZZX, ZZX.clone_el(&f), &g, |c| Ok(ZZ.clone_el(c))).unwrap_or_else(|e| match e {});
    assert_el_eq!(&ZZX, ZZX.from_terms([(ZZ.from_int(1), 2), (ZZ.from_int(2), 0)]), &q);
    assert_el_eq!(&ZZX, ZZX.from_terms([(ZZ.from_int(3), 1), (ZZ.from_int(5), 0)]), &r);
    assert_el_eq!(&ZZX, f, ZZX.add(ZZX.mul(q, g), r));
}

#[test]
fn test_poly_div_rem_small_lhs() {
    let ZZ = BigIntRing::RING;
    let ZZX = DensePolyRing::new(ZZ, "X");
    let f = ZZX.from_terms([(ZZ.from_int(7), 1)]);
    let g = ZZX.from_terms([(ZZ.from_int(1), 2)]);
    let (q, r) = poly_div_rem(&ZZX, ZZX.clone_el(&f), &g, |c| Ok::<_, ()>(ZZ.clone_el(c))).unwrap();
    assert!(ZZX.is_zero(&q));
    assert_el_eq!(&ZZX, f, r);

    let (q, r) = poly_div_rem(&ZZX, ZZX.zero(), &g, |c| Ok::<_, ()>(ZZ.clone_el(c))).unwrap();
    assert!(ZZX.is_zero(&q));
    assert!(ZZX.is_zero(&r));
}

#[test]
fn test_poly_div_rem_failing_division() {
    let ring = Zn::new(6);
    let poly_ring = DensePolyRing::new(ring, "X");
    let f = poly_ring.from_terms([(ring.from_int(1), 1)]);
    let g = poly_ring.from_terms([(ring.from_int(2), 1)]);
    assert!(poly_div_rem(&poly_ring, poly_ring.clone_el(&f), &g, |c| ring.checked_div(c, &2).ok_or(())).is_err());

    let f = poly_ring.from_terms([(ring.from_int(4), 1), (ring.from_int(1), 0)]);
    let (q, r) = poly_div_rem(&poly_ring, f, &g, |c| ring.checked_div(c, &2).ok_or(())).unwrap();
    assert_el_eq!(&poly_ring, poly_ring.from_terms([(ring.from_int(2), 0)]), q);
    assert_el_eq!(&poly_ring, poly_ring.from_terms([(ring.from_int(1), 0)]), r);
}
