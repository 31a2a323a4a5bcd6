use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

use crate::algorithms::minpoly::MinpolyError;
use crate::divisibility::DivisibilityRingStore;
use crate::homomorphism::Homomorphism;
use crate::integer::BigIntRing;
use crate::matrix::dense::DenseMatrix;
use crate::pid::{PrincipalIdealRing, PrincipalIdealRingStore};
use crate::ring::*;
use crate::rings::extension::{FreeAlgebra, FreeAlgebraStore};
use crate::rings::fraction::{FractionField, FractionFieldStore};
use crate::rings::zn::Zn;

///
/// The structure of an `A`-algebra on a ring `B`, i.e. a ring homomorphism `A -> B`
/// (the algebra map), together with enough information about `B` as an `A`-module
/// to decide whether a system of `A`-linear equations in `B` has a solution.
///
/// The module structure is described by a presentation: [`AlgebraStructure::coordinates()`]
/// maps elements `b_0, ..., b_(k - 1)` to a matrix `M` over `A` with `k` columns, and
/// [`AlgebraStructure::coordinate_relations()`] gives a matrix `N` with the same number
/// of rows, such that for all `c in A^k` we have
/// ```text
///   sum_i c_i b_i = 0    <=>    M c in span(columns of N)
/// ```
/// For free modules, `N` has no columns.
///
/// Both `A` and `B` are assumed to be commutative.
///
pub trait AlgebraStructure {

    type BaseRing: RingStore;
    type Algebra: RingStore;

    fn base_ring(&self) -> &Self::BaseRing;

    fn algebra(&self) -> &Self::Algebra;

    fn algebra_map(&self, a: &El<Self::BaseRing>) -> El<Self::Algebra>;

    fn is_injective(&self) -> bool;

    fn coordinates(&self, elements: &[El<Self::Algebra>]) -> DenseMatrix<<Self::BaseRing as RingStore>::Type>;

    fn coordinate_relations(&self) -> DenseMatrix<<Self::BaseRing as RingStore>::Type>;

    ///
    /// Returns the coefficients (constant coefficient first) of a monic polynomial over
    /// `A` that vanishes at `x`, or `None` if no such polynomial can be found. Implementations
    /// should only return `None` if `x` is not integral over `A`.
    ///
    fn integral_equation(&self, x: &El<Self::Algebra>) -> Option<Vec<El<Self::BaseRing>>>;

    ///
    /// Returns the algebra map as a [`Homomorphism`].
    ///
    fn as_hom<'a>(&'a self) -> AlgebraHom<&'a Self>
        where Self: Sized
    {
        AlgebraHom { structure: self }
    }
}

impl<'a, S> AlgebraStructure for &'a S
    where S: AlgebraStructure
{
    type BaseRing = S::BaseRing;
    type Algebra = S::Algebra;

    fn base_ring(&self) -> &Self::BaseRing { (**self).base_ring() }
    fn algebra(&self) -> &Self::Algebra { (**self).algebra() }
    fn algebra_map(&self, a: &El<Self::BaseRing>) -> El<Self::Algebra> { (**self).algebra_map(a) }
    fn is_injective(&self) -> bool { (**self).is_injective() }

    fn coordinates(&self, elements: &[El<Self::Algebra>]) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        (**self).coordinates(elements)
    }

    fn coordinate_relations(&self) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        (**self).coordinate_relations()
    }

    fn integral_equation(&self, x: &El<Self::Algebra>) -> Option<Vec<El<Self::BaseRing>>> {
        (**self).integral_equation(x)
    }
}

///
/// The algebra map `A -> B` of an [`AlgebraStructure`], as a [`Homomorphism`].
///
pub struct AlgebraHom<S>
    where S: AlgebraStructure
{
    structure: S
}

impl<S> Homomorphism<<S::BaseRing as RingStore>::Type, <S::Algebra as RingStore>::Type> for AlgebraHom<S>
    where S: AlgebraStructure
{
    type DomainStore = S::BaseRing;
    type CodomainStore = S::Algebra;

    fn domain<'a>(&'a self) -> &'a Self::DomainStore {
        self.structure.base_ring()
    }

    fn codomain<'a>(&'a self) -> &'a Self::CodomainStore {
        self.structure.algebra()
    }

    fn map(&self, x: El<S::BaseRing>) -> El<S::Algebra> {
        self.structure.algebra_map(&x)
    }

    fn map_ref(&self, x: &El<S::BaseRing>) -> El<S::Algebra> {
        self.structure.algebra_map(x)
    }
}

///
/// A [`FreeAlgebra`] considered as an algebra over its base ring.
///
pub struct FreeAlgebraStructure<R>
    where R: RingStore,
        R::Type: FreeAlgebra
{
    algebra: R
}

impl<R> FreeAlgebraStructure<R>
    where R: RingStore,
        R::Type: FreeAlgebra
{
    pub fn new(algebra: R) -> Self {
        Self { algebra }
    }
}

impl<R> AlgebraStructure for FreeAlgebraStructure<R>
    where R: RingStore,
        R::Type: FreeAlgebra
{
    type BaseRing = BaseRing<R>;
    type Algebra = R;

    fn base_ring(&self) -> &Self::BaseRing {
        self.algebra.base_ring()
    }

    fn algebra(&self) -> &Self::Algebra {
        &self.algebra
    }

    fn algebra_map(&self, a: &El<Self::BaseRing>) -> El<Self::Algebra> {
        self.algebra.from_ref(a)
    }

    fn is_injective(&self) -> bool {
        // 1 is part of the canonical basis
        self.algebra.rank() > 0
    }

    fn coordinates(&self, elements: &[El<Self::Algebra>]) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        let columns = elements.iter().map(|b| self.algebra.wrt_canonical_basis(b)).collect::<Vec<_>>();
        let base_ring = self.base_ring();
        DenseMatrix::from_fn(self.algebra.rank(), elements.len(), |i, j| base_ring.clone_el(&columns[j][i]))
    }

    fn coordinate_relations(&self) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        DenseMatrix::zero(self.algebra.rank(), 0, self.base_ring())
    }

    fn integral_equation(&self, x: &El<Self::Algebra>) -> Option<Vec<El<Self::BaseRing>>> {
        Some(self.algebra.charpoly_coefficients(x))
    }
}

///
/// The integral domain of [`ScalarTower`], i.e. the base ring of the base ring of `R`.
///
pub type TowerIntegers<R> = BaseRing<BaseRing<R>>;

///
/// The scalar tower `A -> K -> R`, where `K` is the field of fractions of a principal
/// ideal domain `A`, and `R` is a free `K`-algebra of finite rank. This makes `R`
/// an `A`-algebra, and an element of `R` is integral over `A` if and only if its
/// characteristic polynomial over `K` has coefficients in `A`.
///
/// The consistency of the tower is checked once, during [`ScalarTower::new()`].
///
/// Only principal ideal domains are supported as `A`, since [`crate::algorithms::smith::solve_right()`]
/// relies on Bezout identities. GCD domains that are not principal, like `Z[y]`, are not
/// supported.
///
pub struct ScalarTower<R>
    where R: RingStore,
        R::Type: FreeAlgebra,
        <BaseRing<R> as RingStore>::Type: FractionField,
        <TowerIntegers<R> as RingStore>::Type: PrincipalIdealRing
{
    algebra: R
}

impl<R> ScalarTower<R>
    where R: RingStore,
        R::Type: FreeAlgebra,
        <BaseRing<R> as RingStore>::Type: FractionField,
        <TowerIntegers<R> as RingStore>::Type: PrincipalIdealRing
{
    pub fn new(algebra: R) -> Result<Self, MinpolyError> {
        let fraction_field = algebra.base_ring();
        let integers = fraction_field.base_ring();
        if !integers.is_domain() || !integers.is_commutative() {
            return Err(MinpolyError::PreconditionViolated("the base ring of a scalar tower must be an integral domain".to_owned()));
        }
        if algebra.rank() == 0 {
            return Err(MinpolyError::PreconditionViolated("the top ring of a scalar tower must have positive rank".to_owned()));
        }
        // the inclusion A -> K must be the one of the fraction field
        for a in [integers.one(), integers.neg_one(), integers.from_int(2)] {
            let roundtrip = fraction_field.as_base_element(&fraction_field.from_ref(&a));
            if !roundtrip.is_some_and(|b| integers.eq_el(&a, &b)) {
                return Err(MinpolyError::PreconditionViolated("fraction field is inconsistent with its base ring".to_owned()));
            }
        }
        return Ok(Self { algebra });
    }

    ///
    /// Returns `R` as algebra over the fraction field `K`.
    ///
    pub fn over_fraction_field<'a>(&'a self) -> FreeAlgebraStructure<&'a R> {
        FreeAlgebraStructure::new(&self.algebra)
    }

    pub fn fraction_field(&self) -> &BaseRing<R> {
        self.algebra.base_ring()
    }
}

impl<R> AlgebraStructure for ScalarTower<R>
    where R: RingStore,
        R::Type: FreeAlgebra,
        <BaseRing<R> as RingStore>::Type: FractionField,
        <TowerIntegers<R> as RingStore>::Type: PrincipalIdealRing
{
    type BaseRing = TowerIntegers<R>;
    type Algebra = R;

    fn base_ring(&self) -> &Self::BaseRing {
        self.algebra.base_ring().base_ring()
    }

    fn algebra(&self) -> &Self::Algebra {
        &self.algebra
    }

    fn algebra_map(&self, a: &El<Self::BaseRing>) -> El<Self::Algebra> {
        self.algebra.inclusion().compose(self.fraction_field().inclusion()).map_ref(a)
    }

    fn is_injective(&self) -> bool {
        true
    }

    ///
    /// Computes the coordinates over `K`, and clears the denominators in every row
    /// separately. This does not change the `A`-linear relations.
    ///
    fn coordinates(&self, elements: &[El<Self::Algebra>]) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        let fraction_field = self.fraction_field();
        let integers = self.base_ring();
        let columns = elements.iter()
            .map(|b| self.algebra.wrt_canonical_basis(b).into_iter().map(|c| fraction_field.as_fraction(c)).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let row_denominators = (0..self.algebra.rank())
            .map(|i| columns.iter().fold(integers.one(), |current, column| integers.lcm(&current, &column[i].1)))
            .collect::<Vec<_>>();
        DenseMatrix::from_fn(self.algebra.rank(), elements.len(), |i, j| {
            let (num, den) = &columns[j][i];
            // the lcm is a multiple of den
            let factor = integers.checked_div(&row_denominators[i], den).unwrap();
            integers.mul_ref_snd(factor, num)
        })
    }

    fn coordinate_relations(&self) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        DenseMatrix::zero(self.algebra.rank(), 0, self.base_ring())
    }

    ///
    /// Since principal ideal domains are integrally closed, `x` is integral over `A` if and
    /// only if its characteristic polynomial over `K` has coefficients in `A`.
    ///
    fn integral_equation(&self, x: &El<Self::Algebra>) -> Option<Vec<El<Self::BaseRing>>> {
        let fraction_field = self.fraction_field();
        self.algebra.charpoly_coefficients(x).iter().map(|c| fraction_field.as_base_element(c)).collect()
    }
}

///
/// The reduction map `Z -> Z/nZ`, making [`Zn`] a `Z`-algebra. As a `Z`-module, `Z/nZ`
/// is not free, and the reduction map is not injective.
///
#[stability::unstable(feature = "enable")]
pub struct ModularReduction {
    integers: BigIntRing,
    quotient: Zn
}

impl ModularReduction {

    #[stability::unstable(feature = "enable")]
    pub fn new(quotient: Zn) -> Self {
        Self { integers: BigIntRing::RING, quotient }
    }
}

impl AlgebraStructure for ModularReduction {

    type BaseRing = BigIntRing;
    type Algebra = Zn;

    fn base_ring(&self) -> &Self::BaseRing {
        &self.integers
    }

    fn algebra(&self) -> &Self::Algebra {
        &self.quotient
    }

    fn algebra_map(&self, a: &BigInt) -> u64 {
        let modulus = BigInt::from(self.quotient.get_ring().modulus());
        // the result is in [0, n), so it fits into u64
        a.mod_floor(&modulus).to_u64().unwrap()
    }

    fn is_injective(&self) -> bool {
        false
    }

    fn coordinates(&self, elements: &[u64]) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        DenseMatrix::from_fn(1, elements.len(), |_, j| BigInt::from(elements[j]))
    }

    fn coordinate_relations(&self) -> DenseMatrix<<Self::BaseRing as RingStore>::Type> {
        DenseMatrix::from_fn(1, 1, |_, _| BigInt::from(self.quotient.get_ring().modulus()))
    }

    fn integral_equation(&self, x: &u64) -> Option<Vec<BigInt>> {
        Some(vec![-BigInt::from(*x), BigInt::from(1)])
    }
}

#[cfg(test)]
use crate::rings::extension::extension_impl::FreeAlgebraImpl;
#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::matrix::Matrix;
#[cfg(test)]
use crate::integer::IntegerRingStore;

#[test]
fn test_free_algebra_structure() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 2, [ZZ.from_int(3)]);
    let structure = FreeAlgebraStructure::new(&ring);
    let a = ring.canonical_gen();

    assert!(structure.is_injective());
    assert_el_eq!(ring, ring.from_int(-4), structure.algebra_map(&ZZ.from_int(-4)));
    assert_el_eq!(ring, ring.from_int(6), structure.as_hom().map(ZZ.from_int(6)));

    let coordinates = structure.coordinates(&[ring.one(), ring.clone_el(&a), ring.mul_ref(&a, &a)]);
    assert_eq!(2, coordinates.row_count());
    assert_eq!(3, coordinates.col_count());
    assert_el_eq!(ZZ, ZZ.from_int(3), coordinates.at(0, 2));
    assert_el_eq!(ZZ, ZZ.zero(), coordinates.at(1, 2));
    assert_eq!(0, structure.coordinate_relations().col_count());

    let equation = structure.integral_equation(&a).unwrap();
    assert_eq!(3, equation.len());
    assert_el_eq!(ZZ, ZZ.from_int(-3), &equation[0]);
    assert_el_eq!(ZZ, ZZ.one(), &equation[2]);
}

#[test]
fn test_scalar_tower_clears_denominators() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(5)]);
    let tower = ScalarTower::new(&ring).unwrap();
    let a = ring.canonical_gen();
    let half = QQ.from_fraction(ZZ.one(), ZZ.from_int(2));
    // x = (1 + sqrt 5) / 2
    let x = ring.from_canonical_basis([QQ.clone_el(&half), QQ.clone_el(&half)]);

    let coordinates = tower.coordinates(&[ring.one(), ring.clone_el(&x)]);
    assert_el_eq!(ZZ, ZZ.from_int(2), coordinates.at(0, 0));
    assert_el_eq!(ZZ, ZZ.from_int(1), coordinates.at(0, 1));
    assert_el_eq!(ZZ, ZZ.from_int(0), coordinates.at(1, 0));
    assert_el_eq!(ZZ, ZZ.from_int(1), coordinates.at(1, 1));

    let equation = tower.integral_equation(&x).unwrap();
    assert_el_eq!(ZZ, ZZ.from_int(-1), &equation[0]);
    assert_el_eq!(ZZ, ZZ.from_int(-1), &equation[1]);
    assert_el_eq!(ZZ, ZZ.from_int(1), &equation[2]);

    assert!(tower.integral_equation(&ring.mul_ref_snd(ring.inclusion().map(half), &a)).is_none());
}

#[test]
fn test_modular_reduction() {
    let ZZ = BigIntRing::RING;
    let structure = ModularReduction::new(Zn::new(7));
    assert!(!structure.is_injective());
    assert_eq!(5, structure.algebra_map(&ZZ.from_int(-2)));
    assert_eq!(0, structure.algebra_map(&ZZ.from_int(14)));
    let relations = structure.coordinate_relations();
    assert_el_eq!(ZZ, ZZ.from_int(7), relations.at(0, 0));
}

#[test]
fn test_scalar_tower_bezout_coordinates() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
    let tower = ScalarTower::new(&ring).unwrap();
    let integers = tower.base_ring();

    let (s, t, d) = integers.ideal_gen(&integers.from_int(4), &integers.from_int(6));
    assert_el_eq!(ZZ, &d, integers.add(integers.mul(s, integers.from_int(4)), integers.mul(t, integers.from_int(6))));
    assert_el_eq!(ZZ, ZZ.from_int(2), ZZ.abs(d));

    // coordinates w.r.t. 1, sqrt 2 are scaled by the common denominator 3
    let third = QQ.from_fraction(ZZ.one(), ZZ.from_int(3));
    let x = ring.from_canonical_basis([QQ.clone_el(&third), third]);
    let coordinates = tower.coordinates(&[ring.one(), x]);
    assert_el_eq!(ZZ, ZZ.from_int(3), coordinates.at(0, 0));
    assert_el_eq!(ZZ, ZZ.from_int(0), coordinates.at(1, 0));
    assert_el_eq!(ZZ, ZZ.from_int(1), coordinates.at(0, 1));
    assert_el_eq!(ZZ, ZZ.from_int(1), coordinates.at(1, 1));
}
