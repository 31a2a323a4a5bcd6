use crate::algebra::AlgebraStructure;
use crate::field::Field;
use crate::ring::*;
use crate::rings::poly::dense_poly::DensePolyRing;
use crate::rings::poly::*;

use super::{MinimalPolynomial, MinpolyError};

impl<S> MinimalPolynomial<S>
    where S: AlgebraStructure,
        S::BaseRing: Clone,
        <S::BaseRing as RingStore>::Type: Field
{
    ///
    /// Checks whether `deg m <= deg p` for a nonzero polynomial `p` vanishing at `x`. Since `p`
    /// can be made monic, this always returns `true` for valid input.
    ///
    pub fn degree_le_of_ne_zero(&self, p: &El<DensePolyRing<S::BaseRing>>) -> Result<bool, MinpolyError> {
        let poly_ring = self.poly_ring();
        if poly_ring.is_zero(p) {
            return Err(MinpolyError::PreconditionViolated("the zero polynomial vanishes everywhere".to_owned()));
        }
        return self.degree_le_of_monic(&poly_ring.normalize(poly_ring.clone_el(p)));
    }

    ///
    /// Checks whether a monic polynomial `p` of minimal degree vanishing at `x` equals `m`.
    /// Over a field, this always returns `true` for valid input, since `p - m` vanishes at `x`
    /// and has smaller degree than `m`.
    ///
    pub fn unique(&self, p: &El<DensePolyRing<S::BaseRing>>) -> Result<bool, MinpolyError> {
        self.check_monic_root(p)?;
        let poly_ring = self.poly_ring();
        if poly_ring.cmp_degree(p, self.poly()).is_gt() {
            return Err(MinpolyError::PreconditionViolated(format!("{} is not of minimal degree", poly_ring.format(p))));
        }
        let difference = poly_ring.sub_ref(p, self.poly());
        if !poly_ring.is_zero(&difference) {
            // a nonzero difference could be made monic, contradicting minimality
            assert!(self.is_root(&difference));
            assert!(poly_ring.cmp_degree(&difference, self.poly()).is_lt());
        }
        return Ok(poly_ring.is_zero(&difference));
    }

    ///
    /// Computes the quotient `p / m` for a polynomial `p` vanishing at `x`. The remainder of the
    /// division vanishes at `x` and has smaller degree than `m`, so it is zero.
    ///
    pub fn divides(&self, p: &El<DensePolyRing<S::BaseRing>>) -> Result<El<DensePolyRing<S::BaseRing>>, MinpolyError> {
        self.check_root(p)?;
        let poly_ring = self.poly_ring();
        let (quotient, remainder) = poly_ring.div_rem_monic(poly_ring.clone_el(p), self.poly());
        assert!(poly_ring.is_zero(&remainder), "the remainder {} of a polynomial vanishing at x is not zero", poly_ring.format(&remainder));
        return Ok(quotient);
    }

    ///
    /// Checks that an irreducible monic polynomial `p` vanishing at `x` is equal to `m`. If
    /// `p` turns out to be reducible, since `m` is a proper factor, an error is returned.
    ///
    pub fn unique_of_irreducible(&self, p: &El<DensePolyRing<S::BaseRing>>) -> Result<(), MinpolyError> {
        if self.structure().algebra().is_trivial() {
            return Err(MinpolyError::PreconditionViolated("the algebra is the zero ring".to_owned()));
        }
        self.check_monic_root(p)?;
        let poly_ring = self.poly_ring();
        let quotient = self.divides(p)?;
        // in a nontrivial algebra, m has positive degree and is thus not a unit
        if poly_ring.degree(&quotient).unwrap() > 0 {
            return Err(MinpolyError::PreconditionViolated(format!("{} is reducible, it has the factor {}", poly_ring.format(p), poly_ring.format(self.poly()))));
        }
        assert!(poly_ring.eq_el(p, self.poly()));
        return Ok(());
    }
}

#[cfg(test)]
use crate::algebra::FreeAlgebraStructure;
#[cfg(test)]
use crate::algorithms::minpoly::IntegralityWitness;
#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::extension::FreeAlgebraStore;
#[cfg(test)]
use crate::rings::extension::extension_impl::FreeAlgebraImpl;
#[cfg(test)]
use crate::rings::rational::RationalField;

#[cfg(test)]
fn poly_from<P>(poly_ring: P, coefficients: &[i32]) -> El<P>
    where P: RingStore, P::Type: PolyRing
{
    let base_ring = poly_ring.base_ring();
    poly_ring.from_terms(coefficients.iter().enumerate().map(|(i, c)| (base_ring.from_int(*c), i)))
}

#[test]
fn test_divides_over_rationals() {
    let QQ = RationalField::new(BigIntRing::RING);
    // Q[a]/(a^3 - 2), x = a has minimal polynomial X^3 - 2
    let ring = FreeAlgebraImpl::new(QQ, 3, [QQ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();

    // (X^3 - 2)(2X + 1) = 2X^4 + X^3 - 4X - 2
    let p = poly_from(P, &[-2, -4, 0, 1, 2]);
    assert_el_eq!(P, poly_from(P, &[1, 2]), minpoly.divides(&p).unwrap());
    assert!(P.is_zero(&minpoly.divides(&P.zero()).unwrap()));
    assert!(matches!(minpoly.divides(&poly_from(P, &[-2, 0, 1])), Err(MinpolyError::PreconditionViolated(_))));

    assert!(minpoly.degree_le_of_ne_zero(&p).unwrap());
    assert!(minpoly.degree_le_of_ne_zero(&poly_from(P, &[-6, 0, 0, 3])).unwrap());
    assert!(minpoly.degree_le_of_ne_zero(&P.zero()).is_err());
}

#[test]
fn test_unique() {
    let QQ = RationalField::new(BigIntRing::RING);
    let ring = FreeAlgebraImpl::new(QQ, 2, [QQ.from_int(2)]);
    let structure = FreeAlgebraStructure::new(&ring);
    let x = ring.canonical_gen();
    let witness = IntegralityWitness::from_finite_rank(&structure, &x).unwrap();
    let minpoly = MinimalPolynomial::compute(structure, x, &witness).unwrap();
    let P = minpoly.poly_ring();

    assert!(minpoly.unique(&poly_from(P, &[-2, 0, 1])).unwrap());
    // vanishes, but not of minimal degree
    assert!(minpoly.unique(&poly_from(P, &[0, -2, 0, 1])).is_err());
    // not monic
    assert!(minpoly.unique(&poly_from(P, &[-4, 0, 2])).is_err());

    assert!(minpoly.unique_of_irreducible(&poly_from(P, &[-2, 0, 1])).is_ok());
    assert!(matches!(
        minpoly.unique_of_irreducible(&poly_from(P, &[-2, 0, -1, 0, 1])),
        Err(MinpolyError::PreconditionViolated(_))
    ));
}
