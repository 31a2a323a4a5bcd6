use crate::algebra::AlgebraStructure;
use crate::divisibility::DivisibilityRingStore;
use crate::field::Field;
use crate::pid::PrincipalIdealRing;
use crate::ring::*;
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::poly::*;

use super::{MinimalPolynomial, MinpolyError};

///
/// The result of [`MinimalPolynomial::factorization_of()`].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factorization<P> {
    /// The polynomial has no factorization into two monic polynomials of positive degree.
    Irreducible,
    /// The polynomial is the product of the two given factors, the first one being the
    /// minimal polynomial.
    Factors(P, P)
}

///
/// The result of [`MinimalPolynomial::unit_factor_of()`], i.e. which factor of a
/// factorization `m = a * b` is a unit.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitFactor {
    Left,
    Right
}

///
/// The result of [`MinimalPolynomial::prime()`], i.e. the factor of `f * g` that is
/// divisible by the minimal polynomial, together with the quotient.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivisorOfProduct<P> {
    Left(P),
    Right(P)
}

impl<S> MinimalPolynomial<S>
    where S: AlgebraStructure,
        S::BaseRing: Clone
{
    fn check_domain(&self) -> Result<(), MinpolyError> {
        let algebra = self.structure().algebra();
        if algebra.is_trivial() {
            return Err(MinpolyError::PreconditionViolated("the algebra is the zero ring".to_owned()));
        }
        if !algebra.is_domain() {
            return Err(MinpolyError::PreconditionViolated("the algebra has zero divisors".to_owned()));
        }
        return Ok(());
    }

    fn check_injective(&self) -> Result<(), MinpolyError> {
        if !self.structure().is_injective() {
            return Err(MinpolyError::PreconditionViolated("algebra map is not injective".to_owned()));
        }
        return Ok(());
    }

    ///
    /// Checks that `m` is not a unit, which is the case since it is monic of positive degree.
    ///
    pub fn not_is_unit(&self) -> Result<bool, MinpolyError> {
        self.check_domain()?;
        return Ok(self.degree() > 0);
    }

    fn evaluate_at_x(&self, a: &El<DensePolyRing<S::BaseRing>>) -> El<S::Algebra> {
        self.poly_ring().evaluate(a, self.x(), self.structure().as_hom())
    }

    ///
    /// Checks that a monic proper divisor `a` of `m` does not vanish at `x`. Here proper means
    /// that `m = a * b` for some `b` of positive degree.
    ///
    pub fn aeval_ne_zero_of_dvd_not_unit(&self, a: &El<DensePolyRing<S::BaseRing>>) -> Result<bool, MinpolyError> {
        self.check_domain()?;
        let poly_ring = self.poly_ring();
        if !poly_ring.is_monic(a) {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not monic", poly_ring.format(a))));
        }
        let (quotient, remainder) = poly_ring.div_rem_monic(poly_ring.clone_el(self.poly()), a);
        if !poly_ring.is_zero(&remainder) {
            return Err(MinpolyError::PreconditionViolated(format!("{} does not divide {}", poly_ring.format(a), poly_ring.format(self.poly()))));
        }
        if poly_ring.degree(&quotient).unwrap() == 0 {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not a proper divisor of {}", poly_ring.format(a), poly_ring.format(self.poly()))));
        }
        return Ok(!self.structure().algebra().is_zero(&self.evaluate_at_x(a)));
    }

    ///
    /// Checks that a root `y` of `m` in the base ring is mapped to `x`.
    ///
    /// Since `m(y) = 0`, we have `m = (X - y) q` for a monic `q` of smaller degree.
    /// Thus `q(x) != 0`, and `x - y` must be zero in the domain `B`.
    ///
    pub fn root(&self, y: &El<S::BaseRing>) -> Result<bool, MinpolyError> {
        self.check_domain()?;
        let base_ring = self.structure().base_ring();
        let value = self.poly_ring().evaluate(self.poly(), y, base_ring.identity());
        if !base_ring.is_zero(&value) {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not a root of {}", base_ring.format(y), self.poly_ring().format(self.poly()))));
        }
        let algebra = self.structure().algebra();
        return Ok(algebra.eq_el(&self.structure().algebra_map(y), self.x()));
    }

    ///
    /// Returns whether the constant coefficient of `m` is zero, which is the case if and
    /// only if `x = 0`. This requires the algebra map to be injective, as otherwise
    /// `m = X - a` for some nonzero `a` in the kernel is possible.
    ///
    pub fn coeff_zero_eq_zero(&self) -> Result<bool, MinpolyError> {
        self.check_domain()?;
        self.check_injective()?;
        let result = self.structure().base_ring().is_zero(self.poly_ring().coefficient_at(self.poly(), 0));
        assert_eq!(result, self.structure().algebra().is_zero(self.x()));
        return Ok(result);
    }
}

impl<S> MinimalPolynomial<S>
    where S: AlgebraStructure,
        S::BaseRing: Clone,
        <S::BaseRing as RingStore>::Type: PrincipalIdealRing
{
    ///
    /// Decides whether a monic polynomial `f` vanishing at `x` is irreducible. Since `B`
    /// is a domain, a factorization of `f` into monic factors of positive degree has a
    /// factor vanishing at `x`, so if `f` has minimal degree, it is irreducible. Otherwise,
    /// `f = m * (f / m)`.
    ///
    /// The latter requires the algebra map to be injective. Indeed, if `A = Z` and `B = Z/7Z`,
    /// both `X - 3` and `X - 10` are minimal polynomials of `3`, but do not divide each other.
    ///
    pub fn factorization_of(&self, f: &El<DensePolyRing<S::BaseRing>>) -> Result<Factorization<El<DensePolyRing<S::BaseRing>>>, MinpolyError> {
        self.check_domain()?;
        self.check_monic_root(f)?;
        let poly_ring = self.poly_ring();
        if poly_ring.cmp_degree(f, self.poly()).is_eq() {
            return Ok(Factorization::Irreducible);
        }
        self.check_injective()?;
        let (quotient, remainder) = poly_ring.div_rem_monic(poly_ring.clone_el(f), self.poly());
        assert!(poly_ring.is_zero(&remainder), "the minimal polynomial does not divide {}", poly_ring.format(f));
        return Ok(Factorization::Factors(poly_ring.clone_el(self.poly()), quotient));
    }

    ///
    /// Returns [`Factorization::Irreducible`], the result of [`MinimalPolynomial::factorization_of()`]
    /// for `m` itself.
    ///
    /// Since `m` has minimal degree, this always returns [`Factorization::Irreducible`] once the
    /// preconditions hold, so it does not decide irreducibility of arbitrary polynomials. Given a
    /// concrete factorization `m = a * b`, use [`MinimalPolynomial::unit_factor_of()`] to find the
    /// factor that is a unit.
    ///
    pub fn irreducible(&self) -> Result<Factorization<El<DensePolyRing<S::BaseRing>>>, MinpolyError> {
        self.factorization_of(self.poly())
    }

    ///
    /// Given a factorization `m = a * b`, returns which of the two factors is a unit.
    ///
    /// One of `a(x)` and `b(x)` is zero, say `a(x)`. Since the leading coefficients of
    /// `a` and `b` multiply to one, `a` can be made monic, and so `deg a >= deg m` by
    /// minimality. Hence `b` is a constant unit.
    ///
    pub fn unit_factor_of(&self, a: &El<DensePolyRing<S::BaseRing>>, b: &El<DensePolyRing<S::BaseRing>>) -> Result<UnitFactor, MinpolyError> {
        self.check_domain()?;
        let base_ring = self.structure().base_ring();
        if !base_ring.is_domain() {
            return Err(MinpolyError::PreconditionViolated("the base ring has zero divisors".to_owned()));
        }
        let poly_ring = self.poly_ring();
        if !poly_ring.eq_el(&poly_ring.mul_ref(a, b), self.poly()) {
            return Err(MinpolyError::PreconditionViolated(format!("{} * {} is not the minimal polynomial", poly_ring.format(a), poly_ring.format(b))));
        }
        let (result, unit) = if self.structure().algebra().is_zero(&self.evaluate_at_x(a)) {
            (UnitFactor::Right, b)
        } else {
            assert!(self.structure().algebra().is_zero(&self.evaluate_at_x(b)));
            (UnitFactor::Left, a)
        };
        assert_eq!(Some(0), poly_ring.degree(unit));
        assert!(base_ring.is_unit(poly_ring.coefficient_at(unit, 0)));
        return Ok(result);
    }
}

impl<S> MinimalPolynomial<S>
    where S: AlgebraStructure,
        S::BaseRing: Clone,
        <S::BaseRing as RingStore>::Type: Field
{
    ///
    /// Given `f` and `g` such that `f * g` vanishes at `x`, returns a factor that is
    /// divisible by `m`, together with the quotient. In other words, `m` is prime.
    ///
    pub fn prime(&self, f: &El<DensePolyRing<S::BaseRing>>, g: &El<DensePolyRing<S::BaseRing>>) -> Result<DivisorOfProduct<El<DensePolyRing<S::BaseRing>>>, MinpolyError> {
        self.check_domain()?;
        let poly_ring = self.poly_ring();
        let product = poly_ring.mul_ref(f, g);
        if !self.is_root(&product) {
            return Err(MinpolyError::PreconditionViolated(format!("{} does not vanish at {}", poly_ring.format(&product), self.structure().algebra().format(self.x()))));
        }
        if self.is_root(f) {
            return Ok(DivisorOfProduct::Left(self.divides(f)?));
        } else {
            return Ok(DivisorOfProduct::Right(self.divides(g)?));
        }
    }
}

#[cfg(test)]
use crate::algebra::{FreeAlgebraStructure, ModularReduction};
#[cfg(test)]
use crate::algorithms::minpoly::IntegralityWitness;
#[cfg(test)]
use crate::field::FieldStore;
#[cfg(test)]
use crate::homomorphism::Homomorphism;
#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::extension::FreeAlgebraStore;
#[cfg(test)]
use crate::rings::extension::extension_impl::FreeAlgebraImpl;
#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::rings::zn::Zn;

#[cfg(test)]
fn poly_from<P>(poly_ring: P, coefficients: &[i32]) -> El<P>
    where P: RingStore, P::Type: PolyRing
{
    let base_ring = poly_ring.base_ring();
    poly_ring.from_terms(coefficients.iter().enumerate().map(|(i, c)| (base_ring.from_int(*c), i)))
}

#[test]
fn test_sqrt2_irreducible() {
    let QQ = RationalField::new(BigIntRing::RING);
    let K = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]).promise_is_domain();
    let structure = FreeAlgebraStructure::new(&K);
    let x = K.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();

    assert!(minpoly.not_is_unit().unwrap());
    assert!(matches!(minpoly.irreducible().unwrap(), Factorization::Irreducible));
    assert!(!minpoly.coeff_zero_eq_zero().unwrap());

    // X^4 - 4 = (X^2 - 2)(X^2 + 2)
    match minpoly.factorization_of(&poly_from(P, &[-4, 0, 0, 0, 1])).unwrap() {
        Factorization::Factors(m, q) => {
            assert_el_eq!(P, minpoly.poly(), m);
            assert_el_eq!(P, poly_from(P, &[2, 0, 1]), q);
        },
        Factorization::Irreducible => panic!()
    }
    assert!(minpoly.factorization_of(&poly_from(P, &[-4, 0, 1])).is_err());

    // X^2 - 2 = (2X^2 - 4) * 1/2
    let half = QQ.div(&QQ.one(), &QQ.from_int(2));
    assert_eq!(UnitFactor::Right, minpoly.unit_factor_of(&poly_from(P, &[-4, 0, 2]), &P.inclusion().map(QQ.clone_el(&half))).unwrap());
    assert_eq!(UnitFactor::Left, minpoly.unit_factor_of(&P.inclusion().map(half), &poly_from(P, &[-4, 0, 2])).unwrap());
    assert!(minpoly.unit_factor_of(&poly_from(P, &[-2, 0, 1]), &poly_from(P, &[1, 1])).is_err());

    // sqrt 2 is no rational number
    assert!(minpoly.root(&QQ.from_int(2)).is_err());
}

#[test]
fn test_prime() {
    let QQ = RationalField::new(BigIntRing::RING);
    let K = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]).promise_is_domain();
    let structure = FreeAlgebraStructure::new(&K);
    let x = K.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();

    let f = poly_from(P, &[1, 1]);
    // 2X^3 - 4X = 2X (X^2 - 2)
    let g = poly_from(P, &[0, -4, 0, 2]);
    match minpoly.prime(&f, &g).unwrap() {
        DivisorOfProduct::Right(q) => assert_el_eq!(P, poly_from(P, &[0, 2]), q),
        DivisorOfProduct::Left(_) => panic!()
    }
    match minpoly.prime(&g, &f).unwrap() {
        DivisorOfProduct::Left(q) => assert_el_eq!(P, poly_from(P, &[0, 2]), q),
        DivisorOfProduct::Right(_) => panic!()
    }
    assert!(minpoly.prime(&f, &f).is_err());
}

#[test]
fn test_integers() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 2, [ZZ.from_int(3)]).promise_is_domain();
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.from_int(3);
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();

    assert_el_eq!(P, poly_from(P, &[-3, 1]), minpoly.poly());
    assert!(minpoly.root(&ZZ.from_int(3)).unwrap());
    assert!(minpoly.root(&ZZ.from_int(2)).is_err());
    assert!(!minpoly.coeff_zero_eq_zero().unwrap());
    assert!(matches!(minpoly.irreducible().unwrap(), Factorization::Irreducible));

    // X^2 - 9 = (X - 3)(X + 3)
    // the only proper monic divisor of X - 3 is 1
    assert!(minpoly.aeval_ne_zero_of_dvd_not_unit(&P.one()).unwrap());
    assert!(minpoly.aeval_ne_zero_of_dvd_not_unit(&poly_from(P, &[-3, 1])).is_err());
    assert!(minpoly.aeval_ne_zero_of_dvd_not_unit(&poly_from(P, &[3, 1])).is_err());
    assert!(matches!(
        minpoly.factorization_of(&poly_from(P, &[-9, 0, 1])).unwrap(),
        Factorization::Factors(_, _)
    ));

    let zero = MinimalPolynomial::of_base_element(FreeAlgebraStructure::new(&ring), &ZZ.zero()).unwrap();
    assert!(zero.coeff_zero_eq_zero().unwrap());
    assert!(zero.root(&ZZ.zero()).unwrap());
}

#[test]
fn test_irreducible_and_unit_factor() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 2, [ZZ.from_int(3)]).promise_is_domain();
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-3, 0, 1]), minpoly.poly());
    assert!(matches!(minpoly.irreducible().unwrap(), Factorization::Irreducible));

    // X^2 - 3 = (-1) * (3 - X^2)
    let neg_one = P.neg_one();
    assert_eq!(UnitFactor::Left, minpoly.unit_factor_of(&neg_one, &poly_from(P, &[3, 0, -1])).unwrap());
    assert_eq!(UnitFactor::Right, minpoly.unit_factor_of(&poly_from(P, &[3, 0, -1]), &neg_one).unwrap());
    assert!(minpoly.unit_factor_of(&poly_from(P, &[-1, 1]), &poly_from(P, &[1, 1])).is_err());
}

#[test]
fn test_proper_divisor() {
    let ZZ = BigIntRing::RING;
    // Z[a]/(a^3 - 2) is a domain, x = a has minimal polynomial X^3 - 2
    let ring = FreeAlgebraImpl::new(ZZ, 3, [ZZ.from_int(2)]).promise_is_domain();
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();

    // 1 is a proper monic divisor
    assert!(minpoly.aeval_ne_zero_of_dvd_not_unit(&P.one()).unwrap());
    // m itself is not a proper divisor
    assert!(minpoly.aeval_ne_zero_of_dvd_not_unit(minpoly.poly()).is_err());
    // X - 1 does not divide m
    assert!(minpoly.aeval_ne_zero_of_dvd_not_unit(&poly_from(P, &[-1, 1])).is_err());
}

#[test]
fn test_modular_reduction() {
    let ZZ = BigIntRing::RING;
    let structure = ModularReduction::new(Zn::new(7));
    let witness = IntegralityWitness::from_finite_rank(&structure, &3).unwrap();
    let minpoly = MinimalPolynomial::compute(&structure, 3, &witness).unwrap();
    let P = minpoly.poly_ring();

    assert!(minpoly.not_is_unit().unwrap());
    assert!(matches!(minpoly.irreducible().unwrap(), Factorization::Irreducible));
    // X - 10 also vanishes, but is not divisible by m
    assert!(matches!(minpoly.factorization_of(&poly_from(P, &[-10, 1])).unwrap(), Factorization::Irreducible));
    assert!(minpoly.factorization_of(&poly_from(P, &[-30, -7, 1])).is_err());
    assert!(minpoly.coeff_zero_eq_zero().is_err());

    let root = ZZ.negate(ZZ.clone_el(P.coefficient_at(minpoly.poly(), 0)));
    assert!(minpoly.root(&root).unwrap());
}

#[test]
fn test_zero_divisors() {
    let ZZ = BigIntRing::RING;
    // Z[a]/(a^2 - 1) has zero divisors
    let ring = FreeAlgebraImpl::new(ZZ, 2, [ZZ.one()]);
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();

    assert!(matches!(minpoly.not_is_unit(), Err(MinpolyError::PreconditionViolated(_))));
    assert!(matches!(minpoly.irreducible(), Err(MinpolyError::PreconditionViolated(_))));
    assert!(matches!(minpoly.coeff_zero_eq_zero(), Err(MinpolyError::PreconditionViolated(_))));
}
