#![allow(non_snake_case)]

//!
//! A library for computing and certifying minimal polynomials of integral elements.
//!
//! Given an algebra `B` over a commutative ring `A` (see [`algebra::AlgebraStructure`]) and an
//! element `x` of `B` that is integral over `A`, the minimal polynomial of `x` is a monic
//! polynomial of smallest degree over `A` that vanishes at `x`. It is computed by
//! [`algorithms::minpoly::MinimalPolynomial::compute()`], and the statements about it (uniqueness
//! over fields, divisibility, irreducibility, compatibility with fractions) are available as
//! checked operations on the result.
//!
//! Rings follow a two-layer design: a ring object implementing [`ring::RingBase`] performs all
//! arithmetic, and elements are plain data. The ring objects are usually accessed through
//! [`ring::RingStore`], which is implemented for owned rings and references alike.
//!

#[macro_use]
pub mod ring;
pub mod homomorphism;
pub mod divisibility;
pub mod pid;
pub mod field;
pub mod integer;
///
/// Contains [`serialization::SerializableElementRing`] and the seeds for (de)serializing
/// ring elements with serde.
///
pub mod serialization;
#[macro_use]
pub mod matrix;
pub mod rings;
pub mod algorithms;
///
/// Contains [`algebra::AlgebraStructure`], describing a ring `B` as algebra over a base ring `A`,
/// together with its implementations.
///
pub mod algebra;
///
/// Contains [`tracing::LogAlgorithmSubscriber`], a minimal subscriber for the logs of
/// the algorithms in this crate.
///
pub mod tracing;
