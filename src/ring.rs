use std::fmt::{Debug, Display};

use crate::homomorphism::*;

///
/// Basic trait for objects that have a ring structure.
///
/// Implementors of this trait should provide the basic ring operations,
/// and additionally operators for displaying and equality testing. If
/// a performance advantage can be achieved by accepting some arguments by
/// reference instead of by value, the default-implemented functions for
/// ring operations on references should be overwritten.
///
/// Note that usually, this trait will not be used directly, but always
/// through a [`RingStore`]. In more detail, while this trait defines the
/// functionality, [`RingStore`] allows abstracting the storage - everything
/// that allows access to a ring then is a [`RingStore`], for example references
/// or shared pointers to rings. If you want to use rings directly by value,
/// some technical details make it necessary to use the no-op container
/// [`RingValue`].
///
/// # Ring elements
///
/// Elements are plain data without any reference to their ring. In particular,
/// they cannot be cloned without the ring (see [`RingBase::clone_el()`]), since
/// e.g. the coefficients of a polynomial might only be clonable by their own ring.
///
pub trait RingBase: PartialEq {

    type Element: Sized;

    fn clone_el(&self, val: &Self::Element) -> Self::Element;
    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.add_assign(lhs, self.clone_el(rhs)) }
    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.sub_assign(lhs, self.clone_el(rhs)) }
    fn negate_inplace(&self, lhs: &mut Self::Element);
    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { self.mul_assign(lhs, self.clone_el(rhs)) }
    fn zero(&self) -> Self::Element { self.from_int(0) }
    fn one(&self) -> Self::Element { self.from_int(1) }
    fn neg_one(&self) -> Self::Element { self.from_int(-1) }
    fn from_int(&self, value: i32) -> Self::Element;
    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;
    fn is_zero(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.zero()) }
    fn is_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.one()) }
    fn is_neg_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.neg_one()) }
    fn is_commutative(&self) -> bool;
    fn is_noetherian(&self) -> bool;

    ///
    /// Returns whether the ring is an integral domain, i.e. `1 != 0` and
    /// `ab = 0` implies `a = 0` or `b = 0`.
    ///
    /// As opposed to the marker trait [`crate::divisibility::Domain`], this is
    /// a runtime property, since for many rings (e.g. `Z/nZ` or `R[X]/(f)`) it
    /// depends on the concrete instance. If it cannot be decided cheaply, this
    /// should return `false`.
    ///
    fn is_domain(&self) -> bool;

    ///
    /// Returns whether the ring is the zero ring, i.e. `1 = 0`.
    ///
    fn is_trivial(&self) -> bool {
        self.is_zero(&self.one())
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut std::fmt::Formatter<'a>) -> std::fmt::Result;

    fn square(&self, value: &mut Self::Element) {
        *value = self.mul_ref(value, value);
    }

    fn negate(&self, mut value: Self::Element) -> Self::Element {
        self.negate_inplace(&mut value);
        return value;
    }

    fn sub_assign(&self, lhs: &mut Self::Element, mut rhs: Self::Element) {
        self.negate_inplace(&mut rhs);
        self.add_assign(lhs, rhs);
    }

    fn mul_assign_int(&self, lhs: &mut Self::Element, rhs: i32) {
        self.mul_assign(lhs, self.from_int(rhs));
    }

    fn add_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.add_assign_ref(&mut result, rhs);
        return result;
    }

    fn add_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.add_assign_ref(&mut rhs, lhs);
        return rhs;
    }

    fn add_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn add(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.add_assign(&mut lhs, rhs);
        return lhs;
    }

    fn sub_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.sub_assign_ref(&mut result, rhs);
        return result;
    }

    fn sub_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut rhs, lhs);
        self.negate_inplace(&mut rhs);
        return rhs;
    }

    fn sub_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.sub_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn sub(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.sub_assign(&mut lhs, rhs);
        return lhs;
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.mul_assign_ref(&mut result, rhs);
        return result;
    }

    fn mul_ref_fst(&self, lhs: &Self::Element, mut rhs: Self::Element) -> Self::Element {
        if self.is_commutative() {
            self.mul_assign_ref(&mut rhs, lhs);
            return rhs;
        } else {
            let mut result = self.clone_el(lhs);
            self.mul_assign(&mut result, rhs);
            return result;
        }
    }

    fn mul_ref_snd(&self, mut lhs: Self::Element, rhs: &Self::Element) -> Self::Element {
        self.mul_assign_ref(&mut lhs, rhs);
        return lhs;
    }

    fn mul(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.mul_assign(&mut lhs, rhs);
        return lhs;
    }
}

///
/// Used to easily implement functions in the trait definition of
/// [`RingStore`] and its subtraits to delegate the call to the same
/// function of the underlying [`RingBase`].
///
#[macro_export]
macro_rules! delegate {
    ($base_trait:ty, fn $name:ident (&self, $($pname:ident: $ptype:ty),*) -> $rtype:ty) => {
        #[doc = concat!(" See [`", stringify!($base_trait), "::", stringify!($name), "()`]")]
        fn $name (&self, $($pname: $ptype),*) -> $rtype {
            <Self::Type as $base_trait>::$name(self.get_ring(), $($pname),*)
        }
    };
    ($base_trait:ty, fn $name:ident (&self) -> $rtype:ty) => {
        #[doc = concat!(" See [`", stringify!($base_trait), "::", stringify!($name), "()`]")]
        fn $name (&self) -> $rtype {
            <Self::Type as $base_trait>::$name(self.get_ring())
        }
    };
}

///
/// Asserts that two ring elements are equal, w.r.t. the equality of the given ring.
/// On failure, both elements are printed using [`RingStore::format()`].
///
#[macro_export]
macro_rules! assert_el_eq {
    ($ring:expr, $lhs:expr, $rhs:expr) => {
        match (&$ring, &$lhs, &$rhs) {
            (ring_val, lhs_val, rhs_val) => {
                assert!(<_ as $crate::ring::RingStore>::eq_el(ring_val, lhs_val, rhs_val), "Assertion failed: {} != {}", <_ as $crate::ring::RingStore>::format(ring_val, lhs_val), <_ as $crate::ring::RingStore>::format(ring_val, rhs_val));
            }
        }
    }
}

///
/// Basic trait for objects that store (in some sense) a ring. This can
/// be a ring-by-value, a reference to a ring, or a box to a ring.
///
/// As opposed to [`RingBase`], which is responsible for the functionality
/// and ring operations, this trait is solely responsible for the storage.
/// All algorithms in this crate take rings as [`RingStore`]s, which allows
/// them to be called both with owned rings and references.
///
pub trait RingStore: Sized {

    type Type: RingBase + ?Sized;

    fn get_ring<'a>(&'a self) -> &'a Self::Type;

    delegate!{ RingBase, fn clone_el(&self, val: &El<Self>) -> El<Self> }
    delegate!{ RingBase, fn add_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ RingBase, fn add_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ RingBase, fn sub_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ RingBase, fn sub_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ RingBase, fn negate_inplace(&self, lhs: &mut El<Self>) -> () }
    delegate!{ RingBase, fn mul_assign(&self, lhs: &mut El<Self>, rhs: El<Self>) -> () }
    delegate!{ RingBase, fn mul_assign_ref(&self, lhs: &mut El<Self>, rhs: &El<Self>) -> () }
    delegate!{ RingBase, fn mul_assign_int(&self, lhs: &mut El<Self>, rhs: i32) -> () }
    delegate!{ RingBase, fn zero(&self) -> El<Self> }
    delegate!{ RingBase, fn one(&self) -> El<Self> }
    delegate!{ RingBase, fn neg_one(&self) -> El<Self> }
    delegate!{ RingBase, fn from_int(&self, value: i32) -> El<Self> }
    delegate!{ RingBase, fn eq_el(&self, lhs: &El<Self>, rhs: &El<Self>) -> bool }
    delegate!{ RingBase, fn is_zero(&self, value: &El<Self>) -> bool }
    delegate!{ RingBase, fn is_one(&self, value: &El<Self>) -> bool }
    delegate!{ RingBase, fn is_neg_one(&self, value: &El<Self>) -> bool }
    delegate!{ RingBase, fn is_commutative(&self) -> bool }
    delegate!{ RingBase, fn is_noetherian(&self) -> bool }
    delegate!{ RingBase, fn is_domain(&self) -> bool }
    delegate!{ RingBase, fn is_trivial(&self) -> bool }
    delegate!{ RingBase, fn negate(&self, value: El<Self>) -> El<Self> }
    delegate!{ RingBase, fn add_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ RingBase, fn add_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ RingBase, fn add_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ RingBase, fn add(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ RingBase, fn sub_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ RingBase, fn sub_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ RingBase, fn sub_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ RingBase, fn sub(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ RingBase, fn mul_ref(&self, lhs: &El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ RingBase, fn mul_ref_fst(&self, lhs: &El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ RingBase, fn mul_ref_snd(&self, lhs: El<Self>, rhs: &El<Self>) -> El<Self> }
    delegate!{ RingBase, fn mul(&self, lhs: El<Self>, rhs: El<Self>) -> El<Self> }
    delegate!{ RingBase, fn square(&self, value: &mut El<Self>) -> () }

    ///
    /// Returns the identity map `self -> self`.
    ///
    fn identity<'a>(&'a self) -> Identity<&'a Self> {
        Identity::new(self)
    }

    ///
    /// Raises the given element to the given power, using square-and-multiply.
    ///
    fn pow(&self, mut x: El<Self>, power: usize) -> El<Self> {
        let mut result = self.one();
        let mut remaining = power;
        while remaining > 0 {
            if remaining & 1 == 1 {
                self.mul_assign_ref(&mut result, &x);
            }
            remaining >>= 1;
            if remaining > 0 {
                self.square(&mut x);
            }
        }
        return result;
    }

    fn sum<I>(&self, els: I) -> El<Self>
        where I: IntoIterator<Item = El<Self>>
    {
        els.into_iter().fold(self.zero(), |a, b| self.add(a, b))
    }

    fn prod<I>(&self, els: I) -> El<Self>
        where I: IntoIterator<Item = El<Self>>
    {
        els.into_iter().fold(self.one(), |a, b| self.mul(a, b))
    }

    fn format<'a>(&'a self, value: &'a El<Self>) -> RingElementDisplayWrapper<'a, Self> {
        RingElementDisplayWrapper { ring: self, element: value }
    }

    fn println(&self, value: &El<Self>) {
        println!("{}", self.format(value));
    }
}

///
/// Wrapper around a ring and one of its elements that implements [`std::fmt::Display`]
/// and [`std::fmt::Debug`], using [`RingBase::dbg()`].
///
pub struct RingElementDisplayWrapper<'a, R: RingStore + ?Sized> {
    ring: &'a R,
    element: &'a El<R>
}

impl<'a, R: RingStore + ?Sized> Display for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.ring.get_ring().dbg(self.element, f)
    }
}

impl<'a, R: RingStore + ?Sized> Debug for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.ring.get_ring().dbg(self.element, f)
    }
}

///
/// Trait for rings `R` that have a canonical homomorphism `S -> R`.
/// A ring can only be an extension of one ring, and this homomorphism
/// is always assumed to be injective.
///
/// The homomorphism itself is available as [`RingExtensionStore::inclusion()`].
///
pub trait RingExtension: RingBase {

    type BaseRing: RingStore;

    fn base_ring<'a>(&'a self) -> &'a Self::BaseRing;

    fn from(&self, x: El<Self::BaseRing>) -> Self::Element;

    fn from_ref(&self, x: &El<Self::BaseRing>) -> Self::Element {
        self.from(self.base_ring().clone_el(x))
    }

    ///
    /// Computes `lhs := lhs * rhs`, where `rhs` is mapped into this
    /// ring via [`RingExtension::from_ref()`].
    ///
    fn mul_assign_base(&self, lhs: &mut Self::Element, rhs: &El<Self::BaseRing>) {
        self.mul_assign(lhs, self.from_ref(rhs));
    }
}

///
/// [`RingStore`] for [`RingExtension`]s
///
pub trait RingExtensionStore: RingStore
    where Self::Type: RingExtension
{
    delegate!{ RingExtension, fn from(&self, x: El<BaseRing<Self>>) -> El<Self> }
    delegate!{ RingExtension, fn from_ref(&self, x: &El<BaseRing<Self>>) -> El<Self> }
    delegate!{ RingExtension, fn mul_assign_base(&self, lhs: &mut El<Self>, rhs: &El<BaseRing<Self>>) -> () }

    fn base_ring<'a>(&'a self) -> &'a BaseRing<Self> {
        self.get_ring().base_ring()
    }

    ///
    /// Returns the inclusion map of the base ring `R -> self`.
    ///
    fn inclusion<'a>(&'a self) -> Inclusion<&'a Self> {
        Inclusion::new(self)
    }

    ///
    /// Returns the inclusion map of the base ring `R -> self`, taking
    /// ownership of the ring.
    ///
    fn into_inclusion(self) -> Inclusion<Self> {
        Inclusion::new(self)
    }
}

impl<R: RingStore> RingExtensionStore for R
    where R::Type: RingExtension
{}

///
/// The element type of the ring stored by the [`RingStore`] `R`.
///
pub type El<R> = <<R as RingStore>::Type as RingBase>::Element;

///
/// The [`RingStore`] storing the base ring of the [`RingExtension`] stored by `R`.
///
pub type BaseRing<R> = <<R as RingStore>::Type as RingExtension>::BaseRing;

///
/// The most fundamental [`RingStore`]. It is basically a no-op container,
/// i.e. stores a [`RingBase`] object by value, and allows accessing it.
///
/// # Why is this necessary?
///
/// We cannot implement
/// ```ignore
/// impl<R: RingBase> RingStore for R {}
/// impl<'a, R: RingStore> RingStore for &'a R {}
/// ```
/// since this might cause conflicting implementations. Instead, we implement
/// ```ignore
/// impl<R: RingBase> RingStore for RingValue<R> {}
/// impl<'a, R: RingStore> RingStore for &'a R {}
/// ```
/// The common pattern is hence to create your ring type as
/// ```ignore
/// struct ABase { ... }
/// impl RingBase for ABase { ... }
/// ```
/// and then provide a type alias
/// ```ignore
/// type A = RingValue<ABase>;
/// ```
///
#[derive(Copy, Clone, Debug)]
pub struct RingValue<R: RingBase> {
    ring: R
}

impl<R: RingBase> RingValue<R> {

    pub const fn from(value: R) -> Self {
        RingValue { ring: value }
    }

    pub fn into(self) -> R {
        self.ring
    }
}

impl<R: RingBase> RingStore for RingValue<R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        &self.ring
    }
}

///
/// The second most basic [`RingStore`]. Similarly to [`RingValue`] it is
/// just a no-op container, which stores a reference to a [`RingBase`].
///
/// This is mainly used when implementing [`RingBase`]-functions (or traits on the
/// same level, e.g. [`crate::divisibility::DivisibilityRing`]) via algorithms that
/// expect a [`RingStore`]. In this case, we only have a reference `&self` to
/// a [`RingBase`] object.
///
pub struct RingRef<'a, R: RingBase + ?Sized> {
    ring: &'a R
}

impl<'a, R: RingBase + ?Sized> Clone for RingRef<'a, R> {

    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R: RingBase + ?Sized> Copy for RingRef<'a, R> {}

impl<'a, R: RingBase + ?Sized> RingRef<'a, R> {

    pub const fn new(value: &'a R) -> Self {
        RingRef { ring: value }
    }
}

impl<'a, R: RingBase + ?Sized> RingStore for RingRef<'a, R> {

    type Type = R;

    fn get_ring(&self) -> &R {
        self.ring
    }
}

impl<'a, R: RingStore> RingStore for &'a R {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

impl<R: RingStore> RingStore for std::sync::Arc<R> {

    type Type = <R as RingStore>::Type;

    fn get_ring(&self) -> &Self::Type {
        (**self).get_ring()
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    pub fn test_ring_axioms<R: RingStore, I: Iterator<Item = El<R>>>(ring: R, edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = ring.zero();
        let one = ring.one();

        // check self-subtraction
        for a in &elements {
            let a_minus_a = ring.sub(ring.clone_el(a), ring.clone_el(a));
            assert!(ring.eq_el(&zero, &a_minus_a), "Additive inverse failed: {} - {} = {} != {}", ring.format(a), ring.format(a), ring.format(&a_minus_a), ring.format(&zero));
        }

        // check identity elements
        for a in &elements {
            assert_el_eq!(ring, a, ring.add_ref_fst(a, ring.zero()));
            assert_el_eq!(ring, a, ring.mul_ref_fst(a, ring.one()));
            assert_el_eq!(ring, ring.negate(ring.clone_el(a)), ring.mul_ref_fst(a, ring.neg_one()));
        }
        assert!(ring.is_one(&one));
        assert!(ring.is_zero(&zero));
        assert!(ring.is_neg_one(&ring.neg_one()));

        // check commutativity
        for a in &elements {
            for b in &elements {
                assert_el_eq!(ring, ring.add_ref(a, b), ring.add_ref(b, a));
                if ring.is_commutative() {
                    assert_el_eq!(ring, ring.mul_ref(a, b), ring.mul_ref(b, a));
                }
            }
        }

        // check associativity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_el_eq!(ring, ring.add_ref_snd(ring.add_ref(a, b), c), ring.add_ref_fst(a, ring.add_ref(b, c)));
                    assert_el_eq!(ring, ring.mul_ref_snd(ring.mul_ref(a, b), c), ring.mul_ref_fst(a, ring.mul_ref(b, c)));
                }
            }
        }

        // check distributivity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_el_eq!(ring, ring.mul_ref_fst(a, ring.add_ref(b, c)), ring.add(ring.mul_ref(a, b), ring.mul_ref(a, c)));
                    assert_el_eq!(ring, ring.mul_ref_snd(ring.add_ref(a, b), c), ring.add(ring.mul_ref(a, c), ring.mul_ref(b, c)));
                }
            }
        }

        // check powers
        for a in &elements {
            assert_el_eq!(ring, ring.one(), ring.pow(ring.clone_el(a), 0));
            assert_el_eq!(ring, a, ring.pow(ring.clone_el(a), 1));
            assert_el_eq!(ring, ring.mul_ref(a, &ring.mul_ref(a, a)), ring.pow(ring.clone_el(a), 3));
        }

        // check domain property
        if ring.is_domain() {
            assert!(!ring.is_trivial());
            for a in &elements {
                for b in &elements {
                    if !ring.is_zero(a) && !ring.is_zero(b) {
                        assert!(!ring.is_zero(&ring.mul_ref(a, b)), "Ring claims to be a domain, but {} * {} = 0", ring.format(a), ring.format(b));
                    }
                }
            }
        }
    }
}
