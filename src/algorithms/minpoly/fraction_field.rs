use std::borrow::Borrow;

use crate::algebra::{AlgebraStructure, FreeAlgebraStructure, ScalarTower, TowerIntegers};
use crate::homomorphism::Homomorphism;
use crate::integer::BigIntRing;
use crate::pid::PrincipalIdealRing;
use crate::ring::*;
use crate::rings::extension::FreeAlgebra;
use crate::rings::fraction::{FractionField, FractionFieldStore};
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::poly::*;
use crate::rings::rational::RationalField;

use super::{IntegralityWitness, MinimalPolynomial, MinpolyError};

///
/// Available for minimal polynomials w.r.t. a [`ScalarTower`], owned or borrowed.
///
impl<R, S> MinimalPolynomial<S>
    where R: RingStore,
        R::Type: FreeAlgebra,
        BaseRing<R>: Clone,
        TowerIntegers<R>: Clone,
        <BaseRing<R> as RingStore>::Type: FractionField,
        <TowerIntegers<R> as RingStore>::Type: PrincipalIdealRing,
        S: AlgebraStructure<BaseRing = TowerIntegers<R>, Algebra = R> + Borrow<ScalarTower<R>>
{
    fn tower(&self) -> &ScalarTower<R> {
        self.structure().borrow()
    }

    ///
    /// Computes the minimal polynomial of `x` over the fraction field `K` of `A`, and checks
    /// that it is equal to `m` (mapped into `K[X]`).
    ///
    /// Both polynomials are monic factors of the characteristic polynomial of `x`, which has
    /// coefficients in `A` since `x` is integral. By Gauss' lemma, they both have coefficients
    /// in `A`, and so they have the same degree. Then they are equal by uniqueness over `K`.
    ///
    pub fn gcd_domain_eq_field_fractions<'a>(&'a self) -> Result<MinimalPolynomial<FreeAlgebraStructure<&'a R>>, MinpolyError> {
        let over_field = self.tower().over_fraction_field();
        let fraction_field = self.tower().fraction_field();
        let KX = DensePolyRing::new(fraction_field.clone(), "X");
        let mapped = KX.lifted_hom(self.poly_ring(), fraction_field.inclusion()).map_ref(self.poly());
        let witness = IntegralityWitness::new(&over_field, self.x(), &KX, &mapped)?;
        let algebra = self.structure().algebra();
        let result = MinimalPolynomial::compute(over_field, algebra.clone_el(self.x()), &witness)?;

        let mapped = result.poly_ring().lifted_hom(self.poly_ring(), fraction_field.inclusion()).map_ref(self.poly());
        if algebra.is_domain() {
            // m is primitive and irreducible over A, thus irreducible over K
            result.unique_of_irreducible(&mapped)?;
        } else {
            assert!(result.unique(&mapped)?);
        }
        return Ok(result);
    }

    ///
    /// Computes the quotient `P / m` in `A[X]` for a primitive polynomial `P` vanishing at `x`.
    ///
    /// This is done by dividing in `K[X]`. Since `m` is monic, the quotient has coefficients
    /// in `A`.
    ///
    pub fn gcd_domain_dvd(&self, P: &El<DensePolyRing<TowerIntegers<R>>>) -> Result<El<DensePolyRing<TowerIntegers<R>>>, MinpolyError> {
        let poly_ring = self.poly_ring();
        if !poly_ring.is_primitive(P) {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not primitive", poly_ring.format(P))));
        }
        self.check_root(P)?;

        let field_minpoly = self.gcd_domain_eq_field_fractions()?;
        let fraction_field = self.tower().fraction_field();
        let KX = field_minpoly.poly_ring();
        let quotient = field_minpoly.divides(&KX.lifted_hom(poly_ring, fraction_field.inclusion()).map_ref(P))?;
        let quotient = poly_ring.from_terms(KX.terms(&quotient).map(|(c, i)| (fraction_field.as_base_element(c).unwrap(), i)));
        assert!(poly_ring.eq_el(&poly_ring.mul_ref(self.poly(), &quotient), P));
        return Ok(quotient);
    }
}

///
/// [`MinimalPolynomial::gcd_domain_eq_field_fractions()`] for the integers and the rationals.
///
pub fn over_int_eq_over_rat<'a, R, S>(minpoly: &'a MinimalPolynomial<S>) -> Result<MinimalPolynomial<FreeAlgebraStructure<&'a R>>, MinpolyError>
    where R: RingStore,
        R::Type: FreeAlgebra<BaseRing = RationalField<BigIntRing>>,
        S: AlgebraStructure<BaseRing = BigIntRing, Algebra = R> + Borrow<ScalarTower<R>>
{
    minpoly.gcd_domain_eq_field_fractions()
}

///
/// [`MinimalPolynomial::gcd_domain_dvd()`] for the integers and the rationals.
///
pub fn integer_dvd<R, S>(minpoly: &MinimalPolynomial<S>, P: &El<DensePolyRing<BigIntRing>>) -> Result<El<DensePolyRing<BigIntRing>>, MinpolyError>
    where R: RingStore,
        R::Type: FreeAlgebra<BaseRing = RationalField<BigIntRing>>,
        S: AlgebraStructure<BaseRing = BigIntRing, Algebra = R> + Borrow<ScalarTower<R>>
{
    minpoly.gcd_domain_dvd(P)
}

#[cfg(test)]
use crate::rings::extension::FreeAlgebraStore;
#[cfg(test)]
use crate::rings::extension::extension_impl::FreeAlgebraImpl;

#[cfg(test)]
fn poly_from<P>(poly_ring: P, coefficients: &[i32]) -> El<P>
    where P: RingStore, P::Type: PolyRing
{
    let base_ring = poly_ring.base_ring();
    poly_ring.from_terms(coefficients.iter().enumerate().map(|(i, c)| (base_ring.from_int(*c), i)))
}

#[test]
fn test_integer_dvd() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    // Q[t]/(t^2 - 4) has zero divisors, x = t is a root of X^2 - 4 and 2X^2 - 8
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(4)]);
    let tower = ScalarTower::new(&ring).unwrap();
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&tower, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(tower, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-4, 0, 1]), minpoly.poly());

    assert_el_eq!(P, P.one(), integer_dvd(&minpoly, &poly_from(P, &[-4, 0, 1])).unwrap());
    assert!(matches!(integer_dvd(&minpoly, &poly_from(P, &[-8, 0, 2])), Err(MinpolyError::PreconditionViolated(_))));
    // (X^2 - 4)(3X - 1) = 3X^3 - X^2 - 12X + 4
    assert_el_eq!(P, poly_from(P, &[-1, 3]), integer_dvd(&minpoly, &poly_from(P, &[4, -12, -1, 3])).unwrap());
    assert!(integer_dvd(&minpoly, &poly_from(P, &[-2, 1])).is_err());

    let over_rat = over_int_eq_over_rat(&minpoly).unwrap();
    let QQX = over_rat.poly_ring();
    assert_el_eq!(QQX, poly_from(QQX, &[-4, 0, 1]), over_rat.poly());
}

#[test]
fn test_golden_ratio() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(5)]).promise_is_domain();
    let tower = ScalarTower::new(&ring).unwrap();
    let half = QQ.from_fraction(ZZ.one(), ZZ.from_int(2));
    let x = ring.from_canonical_basis([QQ.clone_el(&half), half]);
    let witness = IntegralityWitness::from_finite_rank(&tower, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(tower, x, &witness).unwrap();
    let P = minpoly.poly_ring();

    let over_rat = minpoly.gcd_domain_eq_field_fractions().unwrap();
    let QQX = over_rat.poly_ring();
    assert_el_eq!(QQX, poly_from(QQX, &[-1, -1, 1]), over_rat.poly());
    assert_el_eq!(QQX, QQX.lifted_hom(P, QQ.inclusion()).map_ref(minpoly.poly()), over_rat.poly());

    // X^3 - 2X^2 + 1 = (X^2 - X - 1)(X - 1)
    assert_el_eq!(P, poly_from(P, &[-1, 1]), minpoly.gcd_domain_dvd(&poly_from(P, &[1, 0, -2, 1])).unwrap());
    assert!(minpoly.gcd_domain_dvd(&P.zero()).is_err());
}

#[test]
fn test_borrowed_tower() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let ring = FreeAlgebraImpl::new(QQ, 3, [QQ.from_int(3)]).promise_is_domain();
    let tower = ScalarTower::new(&ring).unwrap();
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&tower, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(&tower, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-3, 0, 0, 1]), minpoly.poly());

    let over_rat = minpoly.gcd_domain_eq_field_fractions().unwrap();
    assert_eq!(3, over_rat.degree());
    assert_eq!(3, over_int_eq_over_rat(&minpoly).unwrap().degree());
    // X^4 - 3X = (X^3 - 3) X
    assert_el_eq!(P, poly_from(P, &[0, 1]), minpoly.gcd_domain_dvd(&poly_from(P, &[0, -3, 0, 0, 1])).unwrap());
    assert_el_eq!(P, poly_from(P, &[0, 1]), integer_dvd(&minpoly, &poly_from(P, &[0, -3, 0, 0, 1])).unwrap());
    // the tower stays usable after computing with it
    assert!(tower.is_injective());
}

#[test]
fn test_sqrt2() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]).promise_is_domain();
    let tower = ScalarTower::new(&ring).unwrap();
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&tower, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(tower, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-2, 0, 1]), minpoly.poly());

    let over_rat = over_int_eq_over_rat(&minpoly).unwrap();
    assert_eq!(2, over_rat.degree());
    // X^4 - 4 = (X^2 - 2)(X^2 + 2)
    assert_el_eq!(P, poly_from(P, &[2, 0, 1]), minpoly.gcd_domain_dvd(&poly_from(P, &[-4, 0, 0, 0, 1])).unwrap());
}
