use std::marker::PhantomData;

use crate::ring::*;

///
/// The user-facing trait for ring homomorphisms, i.e. maps `R -> S`
/// between rings that respect the ring structure. Since all considered
/// rings are unital, ring homomorphisms also must be unital.
///
/// Objects are expected to know their domain and codomain rings and
/// can thus make sense without an implicit ambient ring (unlike e.g.
/// ring elements).
///
/// Main examples include
///  - [`RingExtension`]s give an (injective) homomorphism `R -> S`
///    which can be obtained by [`RingExtensionStore::inclusion()`].
///  - Every algebra structure `A -> B` gives a homomorphism, see
///    [`crate::algebra::AlgebraStructure::as_hom()`].
///  - Homomorphisms between base rings can be lifted to polynomial rings,
///    see [`crate::rings::poly::PolyRingStore::lifted_hom()`].
///
pub trait Homomorphism<Domain: ?Sized, Codomain: ?Sized>
    where Domain: RingBase, Codomain: RingBase
{
    type DomainStore: RingStore<Type = Domain>;
    type CodomainStore: RingStore<Type = Codomain>;

    fn domain<'a>(&'a self) -> &'a Self::DomainStore;

    fn codomain<'a>(&'a self) -> &'a Self::CodomainStore;

    fn map(&self, x: Domain::Element) -> Codomain::Element;

    fn map_ref(&self, x: &Domain::Element) -> Codomain::Element {
        self.map(self.domain().clone_el(x))
    }

    ///
    /// Multiplies the given element in the codomain ring with an element obtained
    /// by applying this homomorphism to a given element from the domain ring.
    ///
    /// This is equivalent to, but may be faster than, first mapping the domain
    /// ring element via this homomorphism, and then performing ring multiplication.
    ///
    fn mul_assign_map(&self, lhs: &mut Codomain::Element, rhs: Domain::Element) {
        self.codomain().mul_assign(lhs, self.map(rhs))
    }

    fn mul_assign_ref_map(&self, lhs: &mut Codomain::Element, rhs: &Domain::Element) {
        self.codomain().mul_assign(lhs, self.map_ref(rhs))
    }

    fn mul_ref_snd_map(&self, mut lhs: Codomain::Element, rhs: &Domain::Element) -> Codomain::Element {
        self.mul_assign_ref_map(&mut lhs, rhs);
        lhs
    }

    ///
    /// Constructs the homomorphism `x -> self.map(prev.map(x))`.
    ///
    fn compose<F, PrevDomain: ?Sized + RingBase>(self, prev: F) -> ComposedHom<PrevDomain, Domain, Codomain, F, Self>
        where Self: Sized, F: Homomorphism<PrevDomain, Domain>
    {
        assert!(prev.codomain().get_ring() == self.domain().get_ring());
        ComposedHom { f: prev, g: self, domain: PhantomData, intermediate: PhantomData, codomain: PhantomData }
    }
}

///
/// The canonical inclusion `R -> S` of the base ring `R` of a [`RingExtension`] `S`.
///
#[derive(Clone, Debug)]
pub struct Inclusion<R>
    where R: RingStore, R::Type: RingExtension
{
    ring: R
}

impl<R: RingStore> Copy for Inclusion<R>
    where R: Copy, El<R>: Copy, R::Type: RingExtension
{}

impl<R> Inclusion<R>
    where R: RingStore, R::Type: RingExtension
{
    pub fn new(ring: R) -> Self {
        Inclusion { ring }
    }
}

impl<R> Homomorphism<<BaseRing<R> as RingStore>::Type, R::Type> for Inclusion<R>
    where R: RingStore, R::Type: RingExtension
{
    type CodomainStore = R;
    type DomainStore = BaseRing<R>;

    fn domain<'a>(&'a self) -> &'a Self::DomainStore {
        self.ring.base_ring()
    }

    fn codomain<'a>(&'a self) -> &'a Self::CodomainStore {
        &self.ring
    }

    fn map(&self, x: El<BaseRing<R>>) -> El<R> {
        self.ring.get_ring().from(x)
    }

    fn map_ref(&self, x: &El<BaseRing<R>>) -> El<R> {
        self.ring.get_ring().from_ref(x)
    }

    fn mul_assign_ref_map(&self, lhs: &mut El<R>, rhs: &El<BaseRing<R>>) {
        self.ring.get_ring().mul_assign_base(lhs, rhs)
    }

    fn mul_assign_map(&self, lhs: &mut El<R>, rhs: El<BaseRing<R>>) {
        self.mul_assign_ref_map(lhs, &rhs)
    }
}

///
/// The identity homomorphism `R -> R, x -> x` on the given ring `R`.
///
#[derive(Clone)]
pub struct Identity<R: RingStore> {
    ring: R
}

impl<R: RingStore> Copy for Identity<R>
    where R: Copy, El<R>: Copy
{}

impl<R: RingStore> Identity<R> {

    pub fn new(ring: R) -> Self {
        Identity { ring }
    }
}

impl<R: RingStore> Homomorphism<R::Type, R::Type> for Identity<R> {

    type CodomainStore = R;
    type DomainStore = R;

    fn codomain<'a>(&'a self) -> &'a Self::CodomainStore {
        &self.ring
    }

    fn domain<'a>(&'a self) -> &'a Self::DomainStore {
        &self.ring
    }

    fn map(&self, x: El<R>) -> El<R> {
        x
    }

    fn mul_assign_ref_map(&self, lhs: &mut El<R>, rhs: &El<R>) {
        self.ring.mul_assign_ref(lhs, rhs)
    }
}

impl<'a, S, R, H> Homomorphism<S, R> for &'a H
    where S: ?Sized + RingBase, R: ?Sized + RingBase, H: Homomorphism<S, R>
{
    type CodomainStore = H::CodomainStore;
    type DomainStore = H::DomainStore;

    fn codomain<'b>(&'b self) -> &'b Self::CodomainStore {
        (*self).codomain()
    }

    fn domain<'b>(&'b self) -> &'b Self::DomainStore {
        (*self).domain()
    }

    fn map(&self, x: <S as RingBase>::Element) -> <R as RingBase>::Element {
        (*self).map(x)
    }

    fn map_ref(&self, x: &<S as RingBase>::Element) -> <R as RingBase>::Element {
        (*self).map_ref(x)
    }

    fn mul_assign_map(&self, lhs: &mut <R as RingBase>::Element, rhs: <S as RingBase>::Element) {
        (*self).mul_assign_map(lhs, rhs)
    }

    fn mul_assign_ref_map(&self, lhs: &mut <R as RingBase>::Element, rhs: &<S as RingBase>::Element) {
        (*self).mul_assign_ref_map(lhs, rhs)
    }
}

///
/// The function composition of two homomorphisms `f: R -> S` and `g: S -> T`.
///
/// More concretely, this is the homomorphism `R -> T` that maps `x` to `g(f(x))`.
/// The best way to create a [`ComposedHom`] is through [`Homomorphism::compose()`].
///
pub struct ComposedHom<R, S, T, F, G>
    where F: Homomorphism<R, S>,
        G: Homomorphism<S, T>,
        R: ?Sized + RingBase,
        S: ?Sized + RingBase,
        T: ?Sized + RingBase
{
    f: F,
    g: G,
    domain: PhantomData<R>,
    intermediate: PhantomData<S>,
    codomain: PhantomData<T>
}

impl<R, S, T, F, G> Clone for ComposedHom<R, S, T, F, G>
    where F: Clone + Homomorphism<R, S>,
        G: Clone + Homomorphism<S, T>,
        R: ?Sized + RingBase,
        S: ?Sized + RingBase,
        T: ?Sized + RingBase
{
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            g: self.g.clone(),
            domain: PhantomData,
            codomain: PhantomData,
            intermediate: PhantomData
        }
    }
}

impl<R, S, T, F, G> Homomorphism<R, T> for ComposedHom<R, S, T, F, G>
    where F: Homomorphism<R, S>,
        G: Homomorphism<S, T>,
        R: ?Sized + RingBase,
        S: ?Sized + RingBase,
        T: ?Sized + RingBase
{
    type DomainStore = <F as Homomorphism<R, S>>::DomainStore;
    type CodomainStore = <G as Homomorphism<S, T>>::CodomainStore;

    fn domain<'a>(&'a self) -> &'a Self::DomainStore {
        self.f.domain()
    }

    fn codomain<'a>(&'a self) -> &'a Self::CodomainStore {
        self.g.codomain()
    }

    fn map(&self, x: <R as RingBase>::Element) -> <T as RingBase>::Element {
        self.g.map(self.f.map(x))
    }

    fn map_ref(&self, x: &<R as RingBase>::Element) -> <T as RingBase>::Element {
        self.g.map(self.f.map_ref(x))
    }

    fn mul_assign_map(&self, lhs: &mut <T as RingBase>::Element, rhs: <R as RingBase>::Element) {
        self.g.mul_assign_map(lhs, self.f.map(rhs))
    }

    fn mul_assign_ref_map(&self, lhs: &mut <T as RingBase>::Element, rhs: &<R as RingBase>::Element) {
        self.g.mul_assign_map(lhs, self.f.map_ref(rhs))
    }
}

#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::rings::poly::dense_poly::DensePolyRing;
#[cfg(test)]
use crate::rings::poly::PolyRingStore;

#[test]
fn test_compose_inclusions() {
    let ZZ = BigIntRing::RING;
    let QQ = RationalField::new(ZZ);
    let P = DensePolyRing::new(&QQ, "X");
    let hom = P.inclusion().compose(QQ.inclusion());
    assert_el_eq!(P, P.from_int(-3), hom.map(ZZ.from_int(-3)));
    assert_el_eq!(P, P.from_int(6), hom.map_ref(&ZZ.from_int(6)));

    let mut x = P.indeterminate();
    hom.mul_assign_map(&mut x, ZZ.from_int(2));
    assert_el_eq!(P, P.mul(P.from_int(2), P.indeterminate()), x);
}

#[test]
fn test_identity() {
    let ZZ = BigIntRing::RING;
    let id = ZZ.identity();
    assert_el_eq!(ZZ, ZZ.from_int(5), id.map(ZZ.from_int(5)));
    assert_el_eq!(ZZ, ZZ.from_int(10), id.mul_ref_snd_map(ZZ.from_int(2), &ZZ.from_int(5)));
}
