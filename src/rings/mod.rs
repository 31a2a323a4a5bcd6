///
/// This module contains [`rust_bigint::RustBigintRing`], the arbitrary precision integers
/// based on `num-bigint`.
///
pub mod rust_bigint;

///
/// This module contains [`zn::Zn`], the ring `Z/nZ` for a modulus `n` that fits into a `u64`.
///
pub mod zn;

///
/// This module contains the trait [`poly::PolyRing`] for all rings that represent a
/// univariate polynomial ring `R[X]` over any base ring, and the implementation
/// [`poly::dense_poly::DensePolyRing`].
///
pub mod poly;

///
/// This module contains the trait [`fraction::FractionField`] for fields that are the field
/// of fractions of a canonical subring.
///
pub mod fraction;

///
/// This module contains [`rational::RationalField`], which provides an implementation of the field of
/// rational numbers `Q`.
///
pub mod rational;

///
/// This module contains the trait [`extension::FreeAlgebra`] for rings that are free modules of finite
/// rank over a base ring. It also provides one implementation in [`extension::extension_impl`] based
/// on reduction modulo a monic polynomial.
///
pub mod extension;
