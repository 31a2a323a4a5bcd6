use std::iter::once;

use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::algebra::AlgebraStructure;
use crate::algorithms::smith::solve_right;
use crate::matrix::dense::DenseMatrix;
use crate::matrix::Matrix;
use crate::pid::PrincipalIdealRing;
use crate::ring::*;
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::poly::*;

///
/// Contains the statements that only hold over fields, like uniqueness of the minimal
/// polynomial and the fact that it divides every polynomial vanishing at `x`.
///
pub mod divisibility;
///
/// Contains the statements that hold if the algebra is an integral domain, like
/// irreducibility of the minimal polynomial.
///
pub mod irreducible;
///
/// Contains the comparison of minimal polynomials over a principal ideal domain and over
/// its field of fractions.
///
pub mod fraction_field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MinpolyError {
    #[error("precondition violated: {0}")]
    PreconditionViolated(String)
}

///
/// A certificate that an element `x` of an `A`-algebra is integral over `A`, i.e. a monic
/// polynomial over `A` that vanishes at `x`. Its degree bounds the degree of the minimal
/// polynomial.
///
/// The witness does not store `x` or the algebra, so it is the responsibility of the caller
/// to only use it for the element it was created for.
///
pub struct IntegralityWitness<A>
    where A: RingStore
{
    coefficients: Vec<El<A>>
}

impl<A> IntegralityWitness<A>
    where A: RingStore
{
    ///
    /// Creates the witness given by the polynomial `p`, which must be monic and vanish
    /// at `x`.
    ///
    pub fn new<S, P>(structure: &S, x: &El<S::Algebra>, poly_ring: P, p: &El<P>) -> Result<Self, MinpolyError>
        where S: AlgebraStructure<BaseRing = A>,
            P: RingStore,
            P::Type: PolyRing,
            BaseRing<P>: RingStore<Type = A::Type>
    {
        if !poly_ring.is_monic(p) {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not monic", poly_ring.format(p))));
        }
        let degree = poly_ring.degree(p).unwrap();
        let base_ring = structure.base_ring();
        let coefficients = (0..=degree).map(|i| base_ring.clone_el(poly_ring.coefficient_at(p, i))).collect();
        return Self::create_checked(structure, x, coefficients);
    }

    ///
    /// Creates the witness given by [`AlgebraStructure::integral_equation()`], which is usually
    /// the characteristic polynomial of the multiplication by `x`.
    ///
    pub fn from_finite_rank<S>(structure: &S, x: &El<S::Algebra>) -> Result<Self, MinpolyError>
        where S: AlgebraStructure<BaseRing = A>
    {
        let Some(coefficients) = structure.integral_equation(x) else {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not integral", structure.algebra().format(x))));
        };
        return Self::create_checked(structure, x, coefficients);
    }

    fn create_checked<S>(structure: &S, x: &El<S::Algebra>, coefficients: Vec<El<A>>) -> Result<Self, MinpolyError>
        where S: AlgebraStructure<BaseRing = A>
    {
        let base_ring = structure.base_ring();
        if base_ring.is_trivial() {
            return Err(MinpolyError::PreconditionViolated("there are no monic polynomials over the zero ring".to_owned()));
        }
        if !coefficients.last().is_some_and(|lc| base_ring.is_one(lc)) {
            return Err(MinpolyError::PreconditionViolated("integral equation is not monic".to_owned()));
        }
        if !structure.algebra().is_zero(&evaluate_at(structure, &coefficients, x)) {
            return Err(MinpolyError::PreconditionViolated(format!("integral equation does not vanish at {}", structure.algebra().format(x))));
        }
        return Ok(Self { coefficients });
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    ///
    /// Returns the coefficients of the witness polynomial, starting with the constant one.
    ///
    pub fn coefficients(&self) -> &[El<A>] {
        &self.coefficients
    }

    pub fn poly<P>(&self, poly_ring: P) -> El<P>
        where P: RingStore,
            P::Type: PolyRing,
            BaseRing<P>: RingStore<Type = A::Type>
    {
        let base_ring = poly_ring.base_ring();
        poly_ring.from_terms(self.coefficients.iter().enumerate().map(|(i, c)| (base_ring.clone_el(c), i)))
    }
}

///
/// Evaluates the polynomial with the given coefficients (constant coefficient first) at `x`.
///
fn evaluate_at<S>(structure: &S, coefficients: &[El<S::BaseRing>], x: &El<S::Algebra>) -> El<S::Algebra>
    where S: AlgebraStructure
{
    let algebra = structure.algebra();
    let mut current = algebra.zero();
    for c in coefficients.iter().rev() {
        algebra.mul_assign_ref(&mut current, x);
        algebra.add_assign(&mut current, structure.algebra_map(c));
    }
    return current;
}

///
/// Finds `c_0, ..., c_(k - 1)` with `sum_i c_i x^i = -x^k`, where `powers` contains `x^0, ..., x^k`,
/// and returns them followed by `1`.
///
fn find_monic_relation<S>(structure: &S, powers: &[El<S::Algebra>], relations: &DenseMatrix<<S::BaseRing as RingStore>::Type>) -> Option<Vec<El<S::BaseRing>>>
    where S: AlgebraStructure,
        <S::BaseRing as RingStore>::Type: PrincipalIdealRing
{
    let base_ring = structure.base_ring();
    let k = powers.len() - 1;
    let coordinates = structure.coordinates(powers);
    let rows = coordinates.row_count();
    assert_eq!(rows, relations.row_count());

    let mut lhs = DenseMatrix::from_fn(rows, k + relations.col_count(), |i, j| if j < k {
        base_ring.clone_el(coordinates.at(i, j))
    } else {
        base_ring.clone_el(relations.at(i, j - k))
    });
    let rhs = DenseMatrix::from_fn(rows, 1, |i, _| base_ring.negate(base_ring.clone_el(coordinates.at(i, k))));
    let solution = solve_right(&mut lhs, rhs, base_ring)?;
    return Some((0..k).map(|i| base_ring.clone_el(solution.at(i, 0))).chain(once(base_ring.one())).collect());
}

///
/// The minimal polynomial `m` of an element `x` of an `A`-algebra `B`, i.e. a monic polynomial
/// of smallest degree over `A` with `m(x) = 0`.
///
/// Over a field, `m` is unique, and the operations in [`divisibility`] are available. Over a
/// general ring, only the degree of `m` is determined, and `m` is some monic polynomial of that
/// degree vanishing at `x`.
///
/// # Example
/// ```
/// # use minpoly::assert_el_eq;
/// # use minpoly::ring::*;
/// # use minpoly::integer::*;
/// # use minpoly::algebra::*;
/// # use minpoly::rings::poly::*;
/// # use minpoly::rings::rational::*;
/// # use minpoly::rings::extension::*;
/// # use minpoly::rings::extension::extension_impl::*;
/// # use minpoly::algorithms::minpoly::*;
/// let QQ = RationalField::new(BigIntRing::RING);
/// let K = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
/// let structure = FreeAlgebraStructure::new(&K);
/// let sqrt2 = K.canonical_gen();
/// let witness = IntegralityWitness::from_finite_rank(&structure, &sqrt2).unwrap();
/// let minpoly = MinimalPolynomial::compute(structure, sqrt2, &witness).unwrap();
/// let P = minpoly.poly_ring();
/// assert_el_eq!(P, P.from_terms([(QQ.one(), 2), (QQ.from_int(-2), 0)]), minpoly.poly());
/// ```
///
pub struct MinimalPolynomial<S>
    where S: AlgebraStructure,
        S::BaseRing: Clone
{
    structure: S,
    x: El<S::Algebra>,
    poly_ring: DensePolyRing<S::BaseRing>,
    poly: El<DensePolyRing<S::BaseRing>>
}

impl<S> MinimalPolynomial<S>
    where S: AlgebraStructure,
        S::BaseRing: Clone,
        <S::BaseRing as RingStore>::Type: PrincipalIdealRing
{
    ///
    /// Computes the minimal polynomial of `x`.
    ///
    /// A monic polynomial of degree `k` vanishing at `x` exists if and only if `-x^k` is an
    /// `A`-linear combination of `1, x, ..., x^(k - 1)`. This is monotone in `k`, so the smallest
    /// such `k` is found by bisection between `0` and the degree of `witness`.
    ///
    /// Since the witness does not know its element, it is checked again that it vanishes
    /// at `x`.
    ///
    #[instrument(skip_all, level = "trace")]
    pub fn compute(structure: S, x: El<S::Algebra>, witness: &IntegralityWitness<S::BaseRing>) -> Result<Self, MinpolyError> {
        let algebra = structure.algebra();
        let base_ring = structure.base_ring();
        if !algebra.is_zero(&evaluate_at(&structure, witness.coefficients(), &x)) {
            return Err(MinpolyError::PreconditionViolated(format!("integrality witness does not vanish at {}", algebra.format(&x))));
        }
        let bound = witness.degree();

        let mut powers = Vec::with_capacity(bound + 1);
        powers.push(algebra.one());
        for i in 1..=bound {
            let next = algebra.mul_ref(&powers[i - 1], &x);
            powers.push(next);
        }
        let relations = structure.coordinate_relations();

        let mut lower = 0;
        let mut upper = bound;
        let mut best = None;
        while lower < upper {
            let mid = lower + (upper - lower) / 2;
            if let Some(coefficients) = find_monic_relation(&structure, &powers[..=mid], &relations) {
                debug!(degree = mid, feasible = true, "tested degree");
                upper = mid;
                best = Some(coefficients);
            } else {
                debug!(degree = mid, feasible = false, "tested degree");
                lower = mid + 1;
            }
        }
        let coefficients = best.unwrap_or_else(|| witness.coefficients().iter().map(|c| base_ring.clone_el(c)).collect());
        debug_assert_eq!(upper + 1, coefficients.len());
        debug_assert!(algebra.is_zero(&evaluate_at(&structure, &coefficients, &x)));
        trace!(degree = upper, "found minimal polynomial");

        let poly_ring = DensePolyRing::new(base_ring.clone(), "X");
        let poly = poly_ring.from_terms(coefficients.into_iter().enumerate().map(|(i, c)| (c, i)));
        return Ok(Self { structure, x, poly_ring, poly });
    }
}

impl<S> MinimalPolynomial<S>
    where S: AlgebraStructure,
        S::BaseRing: Clone
{
    ///
    /// Returns the minimal polynomial `X - a` of the image of `a` under the algebra map.
    /// This requires the algebra map to be injective, as otherwise there might be monic
    /// polynomials of degree `0` vanishing at the image.
    ///
    pub fn of_base_element(structure: S, a: &El<S::BaseRing>) -> Result<Self, MinpolyError> {
        if !structure.is_injective() {
            return Err(MinpolyError::PreconditionViolated("algebra map is not injective".to_owned()));
        }
        let base_ring = structure.base_ring();
        if base_ring.is_trivial() {
            return Err(MinpolyError::PreconditionViolated("there are no monic polynomials over the zero ring".to_owned()));
        }
        let x = structure.algebra_map(a);
        let poly_ring = DensePolyRing::new(base_ring.clone(), "X");
        let poly = poly_ring.from_terms([(base_ring.one(), 1), (base_ring.negate(base_ring.clone_el(a)), 0)]);
        return Ok(Self { structure, x, poly_ring, poly });
    }

    pub fn structure(&self) -> &S {
        &self.structure
    }

    pub fn x(&self) -> &El<S::Algebra> {
        &self.x
    }

    pub fn poly_ring(&self) -> &DensePolyRing<S::BaseRing> {
        &self.poly_ring
    }

    pub fn poly(&self) -> &El<DensePolyRing<S::BaseRing>> {
        &self.poly
    }

    pub fn degree(&self) -> usize {
        // the minimal polynomial is monic over a nontrivial ring
        self.poly_ring.degree(&self.poly).unwrap()
    }

    pub fn is_root(&self, p: &El<DensePolyRing<S::BaseRing>>) -> bool {
        self.structure.algebra().is_zero(&self.poly_ring.evaluate(p, &self.x, self.structure.as_hom()))
    }

    ///
    /// Checks that `p` is monic and vanishes at `x`.
    ///
    fn check_monic_root(&self, p: &El<DensePolyRing<S::BaseRing>>) -> Result<(), MinpolyError> {
        if !self.poly_ring.is_monic(p) {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not monic", self.poly_ring.format(p))));
        }
        self.check_root(p)
    }

    fn check_root(&self, p: &El<DensePolyRing<S::BaseRing>>) -> Result<(), MinpolyError> {
        if !self.is_root(p) {
            return Err(MinpolyError::PreconditionViolated(format!("{} does not vanish at {}", self.poly_ring.format(p), self.structure.algebra().format(&self.x))));
        }
        return Ok(());
    }

    ///
    /// Checks whether `deg m <= deg p` for a monic polynomial `p` vanishing at `x`, which
    /// is the defining property of `m`. Thus this always returns `true` for valid input.
    ///
    pub fn degree_le_of_monic(&self, p: &El<DensePolyRing<S::BaseRing>>) -> Result<bool, MinpolyError> {
        self.check_monic_root(p)?;
        return Ok(self.poly_ring.cmp_degree(&self.poly, p).is_le());
    }
}

#[cfg(test)]
use crate::algebra::{FreeAlgebraStructure, ModularReduction, ScalarTower};
#[cfg(test)]
use crate::homomorphism::Homomorphism;
#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::extension::FreeAlgebraStore;
#[cfg(test)]
use crate::rings::extension::extension_impl::FreeAlgebraImpl;
#[cfg(test)]
use crate::rings::fraction::FractionFieldStore;
#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::rings::zn::Zn;
#[cfg(test)]
use crate::serialization::{DeserializeWithRing, SerializeWithRing};
#[cfg(test)]
use crate::tracing::LogAlgorithmSubscriber;
#[cfg(test)]
use serde::de::DeserializeSeed;

#[cfg(test)]
fn poly_from<P>(poly_ring: P, coefficients: &[i32]) -> El<P>
    where P: RingStore, P::Type: PolyRing
{
    let base_ring = poly_ring.base_ring();
    poly_ring.from_terms(coefficients.iter().enumerate().map(|(i, c)| (base_ring.from_int(*c), i)))
}

#[test]
fn test_sqrt2_over_rationals() {
    LogAlgorithmSubscriber::init_test();
    let QQ = RationalField::new(BigIntRing::RING);
    let K = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&K);
    let sqrt2 = K.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &sqrt2).unwrap();
    assert_eq!(2, witness.degree());

    let minpoly = MinimalPolynomial::compute(structure, sqrt2, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-2, 0, 1]), minpoly.poly());
    assert!(P.is_monic(minpoly.poly()));
    assert!(minpoly.is_root(minpoly.poly()));
    assert_eq!(2, minpoly.degree());
}

#[test]
fn test_base_elements() {
    LogAlgorithmSubscriber::init_test();
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 3, [ZZ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&ring);

    for a in [3, 0, 1, -5] {
        let x = ring.from_int(a);
        let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
        let searched = MinimalPolynomial::compute(&structure, x, &witness).unwrap();
        let closed_form = MinimalPolynomial::of_base_element(&structure, &ZZ.from_int(a)).unwrap();
        let P = searched.poly_ring();
        assert_el_eq!(P, poly_from(P, &[-a, 1]), searched.poly());
        assert_el_eq!(P, closed_form.poly(), searched.poly());
        assert_el_eq!(ring, ring.from_int(a), closed_form.x());
    }
}

#[test]
fn test_witness_independence() {
    let ZZ = BigIntRing::RING;
    // Z[a]/(a^2 - 1), x = 1
    let ring = FreeAlgebraImpl::new(ZZ, 2, [ZZ.one()]);
    let structure = FreeAlgebraStructure::new(&ring);
    let ZZX = DensePolyRing::new(ZZ, "X");
    let x = ring.one();

    let witnesses = [
        IntegralityWitness::from_finite_rank(&structure, &x).unwrap(),
        IntegralityWitness::new(&structure, &x, &ZZX, &poly_from(&ZZX, &[-1, 0, 1])).unwrap(),
        IntegralityWitness::new(&structure, &x, &ZZX, &poly_from(&ZZX, &[0, -1, 1])).unwrap(),
        IntegralityWitness::new(&structure, &x, &ZZX, &poly_from(&ZZX, &[0, 0, 0, 0, -1, 1])).unwrap()
    ];
    for witness in &witnesses {
        let minpoly = MinimalPolynomial::compute(&structure, ring.clone_el(&x), witness).unwrap();
        assert_el_eq!(minpoly.poly_ring(), poly_from(minpoly.poly_ring(), &[-1, 1]), minpoly.poly());
    }
}

#[test]
fn test_minimality() {
    let ZZ = BigIntRing::RING;
    // Z[a]/(a^4 - 2), x = a^2 has minimal polynomial X^2 - 2
    let ring = FreeAlgebraImpl::new(ZZ, 4, [ZZ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.pow(ring.canonical_gen(), 2);
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    assert_eq!(4, witness.degree());
    assert!(ZZ.is_one(&witness.coefficients()[4]));

    let minpoly = MinimalPolynomial::compute(&structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-2, 0, 1]), minpoly.poly());
    assert!(minpoly.degree_le_of_monic(&witness.poly(P)).unwrap());
    assert!(minpoly.degree_le_of_monic(&poly_from(P, &[-2, 0, 1])).unwrap());
    assert!(minpoly.degree_le_of_monic(&poly_from(P, &[-4, 0, 0, 0, 1])).unwrap());
}

#[test]
fn test_invalid_witness() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 2, [ZZ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&ring);
    let ZZX = DensePolyRing::new(ZZ, "X");
    let x = ring.canonical_gen();

    assert!(matches!(
        IntegralityWitness::new(&structure, &x, &ZZX, &poly_from(&ZZX, &[-4, 0, 2])),
        Err(MinpolyError::PreconditionViolated(_))
    ));
    assert!(matches!(
        IntegralityWitness::new(&structure, &x, &ZZX, &poly_from(&ZZX, &[-3, 0, 1])),
        Err(MinpolyError::PreconditionViolated(_))
    ));
    assert!(matches!(
        IntegralityWitness::new(&structure, &x, &ZZX, &ZZX.zero()),
        Err(MinpolyError::PreconditionViolated(_))
    ));
}

#[test]
fn test_witness_of_other_element() {
    let QQ = RationalField::new(BigIntRing::RING);
    let K = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&K);
    let QQX = DensePolyRing::new(QQ, "X");
    // X - 1 is a valid witness for 1, but not for sqrt 2
    let witness = IntegralityWitness::new(&structure, &K.one(), &QQX, &poly_from(&QQX, &[-1, 1])).unwrap();
    assert!(matches!(
        MinimalPolynomial::compute(&structure, K.canonical_gen(), &witness),
        Err(MinpolyError::PreconditionViolated(_))
    ));
    // a witness of large degree for another element is rejected as well
    let witness = IntegralityWitness::new(&structure, &K.one(), &QQX, &poly_from(&QQX, &[0, -1, 0, 1])).unwrap();
    assert!(matches!(
        MinimalPolynomial::compute(&structure, K.canonical_gen(), &witness),
        Err(MinpolyError::PreconditionViolated(_))
    ));
}

#[test]
fn test_not_integral() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(5)]);
    let tower = ScalarTower::new(&ring).unwrap();
    let half = QQ.from_fraction(ZZ.one(), ZZ.from_int(2));
    let x = ring.mul_ref_snd(ring.canonical_gen(), &ring.inclusion().map(half));
    assert!(matches!(IntegralityWitness::from_finite_rank(&tower, &x), Err(MinpolyError::PreconditionViolated(_))));
}

#[test]
fn test_golden_ratio_over_integers() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(5)]);
    let tower = ScalarTower::new(&ring).unwrap();
    let half = QQ.from_fraction(ZZ.one(), ZZ.from_int(2));
    let x = ring.from_canonical_basis([QQ.clone_el(&half), half]);
    let witness = IntegralityWitness::from_finite_rank(&tower, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(&tower, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-1, -1, 1]), minpoly.poly());
}

#[test]
fn test_non_uniqueness_over_general_ring() {
    let ring = Zn::new(4);
    // Z/4[t]/(t^2), x = 2t
    let algebra = FreeAlgebraImpl::new(ring, 2, []);
    let structure = FreeAlgebraStructure::new(&algebra);
    let x = algebra.mul(algebra.from_int(2), algebra.canonical_gen());
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(&structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_eq!(2, minpoly.degree());

    // both X^2 and X^2 + 2X vanish at x and have minimal degree
    let other = poly_from(P, &[0, 2, 1]);
    assert!(minpoly.is_root(&other));
    assert!(minpoly.degree_le_of_monic(&other).unwrap());
    assert!(minpoly.is_root(&poly_from(P, &[0, 0, 1])));
    assert!(!minpoly.is_root(&poly_from(P, &[2, 1])));
}

#[test]
fn test_modular_reduction() {
    let ZZ = BigIntRing::RING;
    let structure = ModularReduction::new(Zn::new(7));
    let witness = IntegralityWitness::from_finite_rank(&structure, &3).unwrap();
    let minpoly = MinimalPolynomial::compute(&structure, 3, &witness).unwrap();
    assert_eq!(1, minpoly.degree());
    assert!(minpoly.is_root(minpoly.poly()));
    assert!(ZZ.is_one(minpoly.poly_ring().lc(minpoly.poly()).unwrap()));

    assert!(matches!(
        MinimalPolynomial::of_base_element(&structure, &ZZ.from_int(3)),
        Err(MinpolyError::PreconditionViolated(_))
    ));
}

#[test]
fn test_trivial_algebra() {
    // the only monic polynomial of degree 0 vanishes in the zero ring
    let structure = ModularReduction::new(Zn::new(1));
    let witness = IntegralityWitness::from_finite_rank(&structure, &0).unwrap();
    let minpoly = MinimalPolynomial::compute(&structure, 0, &witness).unwrap();
    assert_eq!(0, minpoly.degree());
}

#[test]
fn test_export_json() {
    let QQ = RationalField::new(BigIntRing::RING);
    let K = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&K);
    let sqrt2 = K.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &sqrt2).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, sqrt2, &witness).unwrap();
    let P = minpoly.poly_ring();

    let json = serde_json::to_string(&SerializeWithRing::new(minpoly.poly(), P)).unwrap();
    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let result = DeserializeWithRing::new(P).deserialize(&mut deserializer).unwrap();
    assert_el_eq!(P, minpoly.poly(), result);
}

#[test]
fn test_charpoly_is_witness_for_powers() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 3, [ZZ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.add(ring.canonical_gen(), ring.pow(ring.canonical_gen(), 2));
    let coefficients = ring.charpoly_coefficients(&x);
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    assert!(coefficients.iter().zip(witness.coefficients().iter()).all(|(l, r)| ZZ.eq_el(l, r)));
    let minpoly = MinimalPolynomial::compute(&structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();
    assert_el_eq!(P, poly_from(P, &[-6, -6, 0, 1]), minpoly.poly());
}
