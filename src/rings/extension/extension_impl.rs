use std::fmt::Debug;

use crate::ring::*;
use super::*;

///
/// Implementation of the ring `R[X]/(f)` for a monic polynomial `f`. Elements are
/// stored by their coordinates w.r.t. the basis `1, a, ..., a^(n - 1)`, where `a`
/// is the image of `X`.
///
/// The polynomial `f` is given by the values `c_i` such that `X^n = sum_i c_i X^i`
/// in the quotient, i.e. `f = X^n - sum_i c_i X^i`.
///
/// # Example
/// ```
/// # use minpoly::assert_el_eq;
/// # use minpoly::ring::*;
/// # use minpoly::integer::*;
/// # use minpoly::rings::rational::*;
/// # use minpoly::rings::extension::*;
/// # use minpoly::rings::extension::extension_impl::*;
/// let QQ = RationalField::new(BigIntRing::RING);
/// // Q(sqrt 2) = Q[X]/(X^2 - 2)
/// let K = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
/// let sqrt2 = K.canonical_gen();
/// assert_el_eq!(K, K.from_int(2), K.mul_ref(&sqrt2, &sqrt2));
/// ```
///
/// # Domains
///
/// Whether `R[X]/(f)` is a domain depends on the irreducibility of `f`, which
/// is not decided here. Instead, the creator of the ring can promise it via
/// [`FreeAlgebraImpl::promise_is_domain()`]. Without that promise,
/// [`RingBase::is_domain()`] returns `false`.
///
pub struct FreeAlgebraImplBase<R>
    where R: RingStore
{
    base_ring: R,
    rank: usize,
    x_pow_rank: Vec<El<R>>,
    gen_name: &'static str,
    is_domain: bool
}

///
/// [`RingStore`] for [`FreeAlgebraImplBase`]
///
pub type FreeAlgebraImpl<R> = RingValue<FreeAlgebraImplBase<R>>;

pub struct FreeAlgebraImplEl<R>
    where R: RingStore
{
    values: Vec<El<R>>
}

impl<R> Debug for FreeAlgebraImplEl<R>
    where R: RingStore,
        El<R>: Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl<R> FreeAlgebraImpl<R>
    where R: RingStore
{
    ///
    /// Creates the ring `R[X]/(X^rank - sum_i x_pow_rank[i] X^i)`. If fewer than `rank`
    /// values are given, the remaining ones are zero.
    ///
    pub fn new<V>(base_ring: R, rank: usize, x_pow_rank: V) -> Self
        where V: IntoIterator<Item = El<R>>
    {
        Self::new_with_name(base_ring, rank, x_pow_rank, "θ")
    }

    pub fn new_with_name<V>(base_ring: R, rank: usize, x_pow_rank: V, gen_name: &'static str) -> Self
        where V: IntoIterator<Item = El<R>>
    {
        assert!(rank >= 1);
        let mut x_pow_rank = x_pow_rank.into_iter().collect::<Vec<_>>();
        assert!(x_pow_rank.len() <= rank);
        x_pow_rank.resize_with(rank, || base_ring.zero());
        RingValue::from(FreeAlgebraImplBase { base_ring, rank, x_pow_rank, gen_name, is_domain: false })
    }

    ///
    /// Marks this ring as a domain, i.e. the caller promises that the modulus is
    /// irreducible over a base ring that is a domain. This is only trusted if the base
    /// ring itself is a domain.
    ///
    pub fn promise_is_domain(self) -> Self {
        let mut result = self.into();
        result.is_domain = true;
        RingValue::from(result)
    }
}

impl<R> FreeAlgebraImplBase<R>
    where R: RingStore
{
    ///
    /// Returns the coefficients `c_i` with `a^n = sum_i c_i a^i`.
    ///
    pub fn x_pow_rank(&self) -> &[El<R>] {
        &self.x_pow_rank
    }
}

impl<R> Clone for FreeAlgebraImplBase<R>
    where R: RingStore + Clone
{
    fn clone(&self) -> Self {
        Self {
            base_ring: self.base_ring.clone(),
            rank: self.rank,
            x_pow_rank: self.x_pow_rank.iter().map(|c| self.base_ring.clone_el(c)).collect(),
            gen_name: self.gen_name,
            is_domain: self.is_domain
        }
    }
}

impl<R> Debug for FreeAlgebraImplBase<R>
    where R: RingStore
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R[{}]/({}^{}", self.gen_name, self.gen_name, self.rank)?;
        for (i, c) in self.x_pow_rank.iter().enumerate().rev() {
            if !self.base_ring.is_zero(c) {
                write!(f, " - ({}){}^{}", self.base_ring.format(c), self.gen_name, i)?;
            }
        }
        write!(f, ")")
    }
}

impl<R> PartialEq for FreeAlgebraImplBase<R>
    where R: RingStore
{
    fn eq(&self, other: &Self) -> bool {
        self.base_ring.get_ring() == other.base_ring.get_ring() &&
            self.rank == other.rank &&
            self.x_pow_rank.iter().zip(other.x_pow_rank.iter()).all(|(l, r)| self.base_ring.eq_el(l, r))
    }
}

impl<R> RingBase for FreeAlgebraImplBase<R>
    where R: RingStore
{
    type Element = FreeAlgebraImplEl<R>;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        FreeAlgebraImplEl { values: val.values.iter().map(|c| self.base_ring.clone_el(c)).collect() }
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for (l, r) in lhs.values.iter_mut().zip(rhs.values.iter()) {
            self.base_ring.add_assign_ref(l, r);
        }
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        for (l, r) in lhs.values.iter_mut().zip(rhs.values.into_iter()) {
            self.base_ring.add_assign(l, r);
        }
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        for (l, r) in lhs.values.iter_mut().zip(rhs.values.iter()) {
            self.base_ring.sub_assign_ref(l, r);
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        for c in &mut lhs.values {
            self.base_ring.negate_inplace(c);
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        self.mul_assign_ref(lhs, &rhs)
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        let n = self.rank;
        let mut product = (0..(2 * n - 1)).map(|_| self.base_ring.zero()).collect::<Vec<_>>();
        for i in 0..n {
            if self.base_ring.is_zero(&lhs.values[i]) {
                continue;
            }
            for j in 0..n {
                self.base_ring.add_assign(&mut product[i + j], self.base_ring.mul_ref(&lhs.values[i], &rhs.values[j]));
            }
        }
        // reduce using a^n = sum_i c_i a^i, starting from the top
        for k in (n..(2 * n - 1)).rev() {
            let c = std::mem::replace(&mut product[k], self.base_ring.zero());
            if self.base_ring.is_zero(&c) {
                continue;
            }
            for i in 0..n {
                self.base_ring.add_assign(&mut product[k - n + i], self.base_ring.mul_ref(&c, &self.x_pow_rank[i]));
            }
        }
        product.truncate(n);
        lhs.values = product;
    }

    fn from_int(&self, value: i32) -> Self::Element {
        self.from(self.base_ring.from_int(value))
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        lhs.values.iter().zip(rhs.values.iter()).all(|(l, r)| self.base_ring.eq_el(l, r))
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.values.iter().all(|c| self.base_ring.is_zero(c))
    }

    fn is_commutative(&self) -> bool {
        self.base_ring.is_commutative()
    }

    fn is_noetherian(&self) -> bool {
        self.base_ring.is_noetherian()
    }

    fn is_domain(&self) -> bool {
        self.is_domain && self.base_ring.is_domain()
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result {
        let mut first = true;
        for (i, c) in value.values.iter().enumerate().rev() {
            if self.base_ring.is_zero(c) {
                continue;
            }
            if !first {
                write!(out, " + ")?;
            }
            first = false;
            match i {
                0 => write!(out, "{}", self.base_ring.format(c))?,
                1 if self.base_ring.is_one(c) => write!(out, "{}", self.gen_name)?,
                1 => write!(out, "{}{}", self.base_ring.format(c), self.gen_name)?,
                _ if self.base_ring.is_one(c) => write!(out, "{}^{}", self.gen_name, i)?,
                _ => write!(out, "{}{}^{}", self.base_ring.format(c), self.gen_name, i)?
            }
        }
        if first {
            write!(out, "0")?;
        }
        Ok(())
    }
}

impl<R> RingExtension for FreeAlgebraImplBase<R>
    where R: RingStore
{
    type BaseRing = R;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing {
        &self.base_ring
    }

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element {
        let mut values = Vec::with_capacity(self.rank);
        values.push(x);
        values.extend((1..self.rank).map(|_| self.base_ring.zero()));
        FreeAlgebraImplEl { values }
    }

    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        for c in &mut lhs.values {
            self.base_ring.mul_assign_ref(c, rhs);
        }
    }
}

impl<R> FreeAlgebra for FreeAlgebraImplBase<R>
    where R: RingStore
{
    fn canonical_gen(&self) -> Self::Element {
        if self.rank == 1 {
            FreeAlgebraImplEl { values: vec![self.base_ring.clone_el(&self.x_pow_rank[0])] }
        } else {
            self.from_canonical_basis((0..self.rank).map(|i| if i == 1 { self.base_ring.one() } else { self.base_ring.zero() }))
        }
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn wrt_canonical_basis(&self, el: &Self::Element) -> Vec<El<Self::BaseRing>> {
        el.values.iter().map(|c| self.base_ring.clone_el(c)).collect()
    }

    fn from_canonical_basis<V>(&self, vec: V) -> Self::Element
        where V: IntoIterator<Item = El<Self::BaseRing>>
    {
        let values = vec.into_iter().collect::<Vec<_>>();
        assert_eq!(self.rank, values.len());
        FreeAlgebraImplEl { values }
    }
}

#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::rings::zn::Zn;

#[cfg(test)]
fn test_elements<R: RingStore>(ring: &FreeAlgebraImpl<R>, base_elements: &[i32]) -> Vec<FreeAlgebraImplEl<R>> {
    let base_ring = ring.base_ring();
    let mut result = Vec::new();
    for a in base_elements {
        for b in base_elements {
            result.push(ring.from_canonical_basis((0..ring.rank()).map(|i| match i {
                0 => base_ring.from_int(*a),
                1 => base_ring.from_int(*b),
                _ => base_ring.from_int(*a - *b)
            })));
        }
    }
    return result;
}

#[test]
fn test_ring_axioms() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 3, [ZZ.from_int(2)]);
    crate::ring::generic_tests::test_ring_axioms(&ring, test_elements(&ring, &[-2, 0, 1, 3]).into_iter());

    let ring = FreeAlgebraImpl::new(Zn::new(4), 2, []);
    crate::ring::generic_tests::test_ring_axioms(&ring, test_elements(&ring, &[0, 1, 2, 3]).into_iter());

    let ring = FreeAlgebraImpl::new(Zn::new(5), 1, [Zn::new(5).from_int(3)]);
    crate::ring::generic_tests::test_ring_axioms(&ring, test_elements(&ring, &[0, 1, 2, 3, 4]).into_iter());
}

#[test]
fn test_canonical_gen() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 3, [ZZ.from_int(2)]);
    let a = ring.canonical_gen();
    assert_el_eq!(ring, ring.from_int(2), ring.pow(ring.clone_el(&a), 3));
    assert_el_eq!(ring, ring.mul(ring.from_int(2), ring.clone_el(&a)), ring.pow(a, 4));

    let ring = FreeAlgebraImpl::new(ZZ, 1, [ZZ.from_int(-7)]);
    assert_el_eq!(ring, ring.from_int(-7), ring.canonical_gen());
}

#[test]
fn test_is_domain() {
    let QQ = RationalField::new(BigIntRing::RING);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
    assert!(!ring.is_domain());
    assert!(ring.promise_is_domain().is_domain());

    let ring = FreeAlgebraImpl::new(Zn::new(6), 2, [Zn::new(6).from_int(5)]).promise_is_domain();
    assert!(!ring.is_domain());
}

#[test]
fn test_format() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 3, [ZZ.from_int(2)]);
    assert_eq!("2θ^2 + θ + -1", format!("{}", ring.format(&ring.from_canonical_basis([ZZ.from_int(-1), ZZ.from_int(1), ZZ.from_int(2)]))));
    assert_eq!("0", format!("{}", ring.format(&ring.zero())));
}

#[test]
fn test_multiplication_matrix_and_charpoly() {
    let ZZ = BigIntRing::RING;
    let ring = FreeAlgebraImpl::new(ZZ, 3, [ZZ.from_int(2)]);
    let a = ring.canonical_gen();

    let expected = [-2, 0, 0, 1].map(|c| ZZ.from_int(c));
    let actual = ring.charpoly_coefficients(&a);
    assert!(expected.iter().zip(actual.iter()).all(|(e, a)| ZZ.eq_el(e, a)));

    let expected = [-4, 0, 0, 1].map(|c| ZZ.from_int(c));
    let actual = ring.charpoly_coefficients(&ring.pow(ring.clone_el(&a), 2));
    assert!(expected.iter().zip(actual.iter()).all(|(e, a)| ZZ.eq_el(e, a)));

    let expected = [-6, -6, 0, 1].map(|c| ZZ.from_int(c));
    let actual = ring.charpoly_coefficients(&ring.add(ring.clone_el(&a), ring.pow(a, 2)));
    assert!(expected.iter().zip(actual.iter()).all(|(e, a)| ZZ.eq_el(e, a)));
}
