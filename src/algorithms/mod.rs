///
/// Contains algorithms for computing (partial) Smith normal forms, and based on that
/// [`smith::solve_right()`] and [`smith::determinant()`] over principal ideal rings.
///
pub mod smith;
///
/// Contains [`poly_div::poly_div_rem()`] for computing polynomial division. In most cases,
/// you will instead use this functionality through [`crate::rings::poly::PolyRing::div_rem_monic()`].
///
pub mod poly_div;
///
/// Contains [`charpoly::charpoly()`] for computing the characteristic polynomial of a matrix
/// without divisions.
///
pub mod charpoly;
///
/// Contains [`minpoly::MinimalPolynomial`], the minimal polynomial of an integral element,
/// together with the statements about it.
///
pub mod minpoly;
