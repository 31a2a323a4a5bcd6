use std::fmt::Display;

use crate::ring::*;

///
/// Read access to a matrix whose entries are elements of the ring `R`.
///
/// As with ring elements, the matrix does not know its ring, so every operation
/// that needs the ring structure takes it as parameter.
///
pub trait Matrix<R>
    where R: ?Sized + RingBase
{
    fn row_count(&self) -> usize;
    fn col_count(&self) -> usize;
    fn at(&self, i: usize, j: usize) -> &R::Element;

    fn format<'a, S>(&'a self, ring: &'a S) -> MatrixDisplayWrapper<'a, R, Self>
        where S: RingStore<Type = R>
    {
        MatrixDisplayWrapper { matrix: self, ring: ring.get_ring() }
    }

    fn matrix_eq<M, S>(&self, other: &M, ring: S) -> bool
        where M: ?Sized + Matrix<R>, S: RingStore<Type = R>
    {
        self.row_count() == other.row_count() &&
            self.col_count() == other.col_count() &&
            (0..self.row_count()).all(|i| (0..self.col_count()).all(|j| ring.eq_el(self.at(i, j), other.at(i, j))))
    }
}

///
/// Asserts that two matrices are equal, printing both on failure.
///
#[macro_export]
macro_rules! assert_matrix_eq {
    ($ring:expr, $lhs:expr, $rhs:expr) => {
        match (&$ring, &$lhs, &$rhs) {
            (ring_val, lhs_val, rhs_val) => {
                assert!(
                    $crate::matrix::Matrix::matrix_eq(lhs_val, rhs_val, ring_val),
                    "Assertion failed: Expected\n{}\nto be\n{}",
                    $crate::matrix::Matrix::format(lhs_val, ring_val),
                    $crate::matrix::Matrix::format(rhs_val, ring_val)
                );
            }
        }
    }
}

// declared after `assert_matrix_eq!`, which its tests use
///
/// Contains [`dense::DenseMatrix`], the row-major matrix used by the linear algebra
/// algorithms of this crate.
///
pub mod dense;

pub struct MatrixDisplayWrapper<'a, R, M>
    where R: ?Sized + RingBase, M: ?Sized + Matrix<R>
{
    matrix: &'a M,
    ring: &'a R
}

impl<'a, R, M> Display for MatrixDisplayWrapper<'a, R, M>
    where R: ?Sized + RingBase, M: ?Sized + Matrix<R>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ring = RingRef::new(self.ring);
        let entries = (0..self.matrix.row_count())
            .map(|i| (0..self.matrix.col_count()).map(|j| format!("{}", ring.format(self.matrix.at(i, j)))).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = entries.iter().flat_map(|row| row.iter()).map(|s| s.chars().count()).max().unwrap_or(0).max(2);
        for (i, row) in entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for (j, entry) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{:>width$}", entry, width = width)?;
            }
            write!(f, "|")?;
        }
        return Ok(());
    }
}

///
/// Something that can record elementary row (or column) operations, e.g.
/// a matrix whose rows are transformed, or an accumulator for the determinant
/// of the transformation.
///
/// `transform(i, j, [a, b, c, d])` replaces the pair `(v_i, v_j)` by
/// `(a v_i + b v_j, c v_i + d v_j)`.
///
pub trait TransformTarget<R>
    where R: ?Sized + RingBase
{
    fn transform(&mut self, ring: &R, i: usize, j: usize, transform: &[R::Element; 4]);

    ///
    /// Replaces `v_dst` by `v_dst - factor * v_src`.
    ///
    fn subtract(&mut self, ring: &R, src: usize, dst: usize, factor: &R::Element) {
        self.transform(ring, src, dst, &[ring.one(), ring.zero(), ring.negate(ring.clone_el(factor)), ring.one()])
    }

    fn swap(&mut self, ring: &R, i: usize, j: usize) {
        self.transform(ring, i, j, &[ring.zero(), ring.one(), ring.one(), ring.zero()])
    }
}
