use std::cmp::min;

use tracing::instrument;

use crate::divisibility::DivisibilityRingStore;
use crate::matrix::dense::{DenseMatrix, TransformCols, TransformRows};
use crate::matrix::{Matrix, TransformTarget};
use crate::pid::{PrincipalIdealRing, PrincipalIdealRingStore};
use crate::ring::*;

///
/// Transforms `A` into `A'` via invertible transformations `L, R` such that
/// `L A R = A'` and `A'` is diagonal. The row operations are also applied to
/// `L`, and the column operations to `R`.
///
/// # (Non-)Uniqueness of the solution
///
/// This is not the complete Smith normal form, as that additionally requires
/// the diagonal entries to divide each other. It is however cheaper to compute,
/// and sufficient for solving linear systems.
///
/// # Coefficient growth
///
/// Over infinite rings like `Z`, no care is taken to keep intermediate entries
/// small, so the entries of `L` and `R` may grow quickly for larger matrices.
///
#[instrument(skip_all, level = "trace")]
pub fn pre_smith<R, TL, TR>(ring: R, L: &mut TL, R: &mut TR, A: &mut DenseMatrix<R::Type>)
    where R: RingStore + Copy,
        R::Type: PrincipalIdealRing,
        TL: TransformTarget<R::Type>,
        TR: TransformTarget<R::Type>
{
    // otherwise we might not terminate
    assert!(ring.is_noetherian());
    assert!(ring.is_commutative());

    for k in 0..min(A.row_count(), A.col_count()) {
        let mut changed = true;
        while changed {
            changed = false;

            for i in (k + 1)..A.row_count() {
                if ring.is_zero(A.at(i, k)) {
                    continue;
                } else if let Some(quo) = ring.checked_div(A.at(i, k), A.at(k, k)) {
                    TransformRows(A).subtract(ring.get_ring(), k, i, &quo);
                    L.subtract(ring.get_ring(), k, i, &quo);
                } else {
                    let (s, t, d) = ring.ideal_gen(A.at(k, k), A.at(i, k));
                    let transform = [
                        s,
                        t,
                        ring.negate(ring.checked_div(A.at(i, k), &d).unwrap()),
                        ring.checked_div(A.at(k, k), &d).unwrap()
                    ];
                    TransformRows(A).transform(ring.get_ring(), k, i, &transform);
                    L.transform(ring.get_ring(), k, i, &transform);
                }
            }

            for j in (k + 1)..A.col_count() {
                if ring.is_zero(A.at(k, j)) {
                    continue;
                }
                // eliminating in the row might create new nonzero entries in the column
                changed = true;
                if let Some(quo) = ring.checked_div(A.at(k, j), A.at(k, k)) {
                    TransformCols(A).subtract(ring.get_ring(), k, j, &quo);
                    R.subtract(ring.get_ring(), k, j, &quo);
                } else {
                    let (s, t, d) = ring.ideal_gen(A.at(k, k), A.at(k, j));
                    let transform = [
                        s,
                        t,
                        ring.negate(ring.checked_div(A.at(k, j), &d).unwrap()),
                        ring.checked_div(A.at(k, k), &d).unwrap()
                    ];
                    TransformCols(A).transform(ring.get_ring(), k, j, &transform);
                    R.transform(ring.get_ring(), k, j, &transform);
                }
            }
        }
    }
}

///
/// Finds a solution to the system `A X = B`, if it exists. In the case that
/// there are multiple solutions, an unspecified one is returned.
///
/// The matrix `A` is used as scratch space, and contains a diagonal form of
/// the original `A` afterwards.
///
pub fn solve_right<R>(A: &mut DenseMatrix<R::Type>, mut rhs: DenseMatrix<R::Type>, ring: R) -> Option<DenseMatrix<R::Type>>
    where R: RingStore + Copy,
        R::Type: PrincipalIdealRing
{
    assert_eq!(A.row_count(), rhs.row_count());
    let mut R = DenseMatrix::identity(A.col_count(), ring);
    pre_smith(ring, &mut TransformRows(&mut rhs), &mut TransformCols(&mut R), A);

    // rows of the diagonal form below the last column are zero
    for i in A.col_count()..A.row_count() {
        for j in 0..rhs.col_count() {
            if !ring.is_zero(rhs.at(i, j)) {
                return None;
            }
        }
    }
    rhs.set_row_count(A.col_count(), ring);

    for i in 0..min(A.row_count(), A.col_count()) {
        for j in 0..rhs.col_count() {
            *rhs.at_mut(i, j) = ring.checked_div(rhs.at(i, j), A.at(i, i))?;
        }
    }
    return Some(R.mul(&rhs, ring));
}

///
/// Computes the determinant of the square matrix `A`. As [`solve_right()`], this
/// uses `A` as scratch space.
///
pub fn determinant<R>(A: &mut DenseMatrix<R::Type>, ring: R) -> El<R>
    where R: RingStore + Copy,
        R::Type: PrincipalIdealRing
{
    assert_eq!(A.row_count(), A.col_count());
    let mut unit_part_rows = ring.one();
    let mut unit_part_cols = ring.one();
    pre_smith(ring, &mut DetUnit { current_unit: &mut unit_part_rows }, &mut DetUnit { current_unit: &mut unit_part_cols }, A);
    let diag_prod = ring.prod((0..A.row_count()).map(|i| ring.clone_el(A.at(i, i))));
    // the transformations have unit determinant, so dividing by them is exact
    let unit = ring.mul(unit_part_rows, unit_part_cols);
    return ring.checked_div(&diag_prod, &unit).unwrap();
}

///
/// Tracks the determinant of the product of all applied transformations.
///
struct DetUnit<'a, R: ?Sized + RingBase> {
    current_unit: &'a mut R::Element
}

impl<'a, R> TransformTarget<R> for DetUnit<'a, R>
    where R: ?Sized + RingBase
{
    fn subtract(&mut self, _ring: &R, _src: usize, _dst: usize, _factor: &R::Element) {}

    fn swap(&mut self, ring: &R, _i: usize, _j: usize) {
        ring.negate_inplace(self.current_unit)
    }

    fn transform(&mut self, ring: &R, _i: usize, _j: usize, transform: &[R::Element; 4]) {
        let det = ring.sub(ring.mul_ref(&transform[0], &transform[3]), ring.mul_ref(&transform[1], &transform[2]));
        ring.mul_assign(self.current_unit, det);
    }
}

#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::zn::Zn;

#[cfg(test)]
fn matrix_from<R: RingStore>(ring: R, rows: &[&[i32]]) -> DenseMatrix<R::Type> {
    DenseMatrix::from_fn(rows.len(), rows[0].len(), |i, j| ring.from_int(rows[i][j]))
}

#[test]
fn test_pre_smith_integers() {
    let ZZ = BigIntRing::RING;
    let mut A = matrix_from(ZZ, &[
        &[1, 2, 3, 4],
        &[2, 3, 4, 5],
        &[3, 4, 5, 6]
    ]);
    let original_A = A.clone_matrix(ZZ);
    let mut L = DenseMatrix::identity(3, ZZ);
    let mut R = DenseMatrix::identity(4, ZZ);
    pre_smith(ZZ, &mut TransformRows(&mut L), &mut TransformCols(&mut R), &mut A);

    assert_matrix_eq!(ZZ, matrix_from(ZZ, &[
        &[1, 0, 0, 0],
        &[0, -1, 0, 0],
        &[0, 0, 0, 0]
    ]), A);
    assert_matrix_eq!(ZZ, L.mul(&original_A, ZZ).mul(&R, ZZ), A);
}

#[test]
fn test_pre_smith_zn() {
    let ring = Zn::new(45);
    let mut A = matrix_from(&ring, &[
        &[8, 3, 5, 8],
        &[0, 9, 0, 9],
        &[5, 9, 5, 14],
        &[8, 3, 5, 23],
        &[3, 39, 0, 39]
    ]);
    let original_A = A.clone_matrix(&ring);
    let mut L = DenseMatrix::identity(5, &ring);
    let mut R = DenseMatrix::identity(4, &ring);
    pre_smith(&ring, &mut TransformRows(&mut L), &mut TransformCols(&mut R), &mut A);

    for i in 0..5 {
        for j in 0..4 {
            assert!(i == j || ring.is_zero(A.at(i, j)));
        }
    }
    assert_matrix_eq!(&ring, L.mul(&original_A, &ring).mul(&R, &ring), A);
}

#[test]
fn test_solve_zn() {
    let ring = Zn::new(45);
    let A = matrix_from(&ring, &[
        &[8, 3, 5, 8],
        &[0, 9, 0, 9],
        &[5, 9, 5, 14],
        &[8, 3, 5, 23],
        &[3, 39, 0, 39]
    ]);
    let B = matrix_from(&ring, &[
        &[11, 43, 10, 22],
        &[18, 9, 27, 27],
        &[8, 34, 7, 22],
        &[41, 13, 40, 37],
        &[3, 9, 3, 0]
    ]);
    let solution = solve_right(&mut A.clone_matrix(&ring), B.clone_matrix(&ring), &ring).unwrap();
    assert_matrix_eq!(&ring, B, A.mul(&solution, &ring));
}

#[test]
fn test_solve_int() {
    let ZZ = BigIntRing::RING;
    let A = matrix_from(ZZ, &[
        &[3, 6, 2, 0, 4, 7],
        &[5, 5, 4, 5, 5, 5]
    ]);
    let B = DenseMatrix::identity(2, ZZ);
    let solution = solve_right(&mut A.clone_matrix(ZZ), B.clone_matrix(ZZ), ZZ).unwrap();
    assert_matrix_eq!(ZZ, B, A.mul(&solution, ZZ));
}

#[test]
fn test_solve_overdetermined() {
    let ZZ = BigIntRing::RING;
    let A = matrix_from(ZZ, &[
        &[1, 0],
        &[0, 2],
        &[1, 1]
    ]);
    let consistent = matrix_from(ZZ, &[&[1], &[4], &[3]]);
    let solution = solve_right(&mut A.clone_matrix(ZZ), consistent.clone_matrix(ZZ), ZZ).unwrap();
    assert_matrix_eq!(ZZ, matrix_from(ZZ, &[&[1], &[2]]), solution);

    let inconsistent = matrix_from(ZZ, &[&[1], &[4], &[4]]);
    assert!(solve_right(&mut A.clone_matrix(ZZ), inconsistent, ZZ).is_none());

    let not_integral = matrix_from(ZZ, &[&[1], &[3], &[1]]);
    assert!(solve_right(&mut A.clone_matrix(ZZ), not_integral, ZZ).is_none());
}

#[test]
fn test_solve_no_columns() {
    let ZZ = BigIntRing::RING;
    let A = DenseMatrix::zero(2, 0, ZZ);
    let zero_rhs = DenseMatrix::zero(2, 1, ZZ);
    let solution = solve_right(&mut A.clone_matrix(ZZ), zero_rhs, ZZ).unwrap();
    assert_eq!(0, solution.row_count());
    assert!(solve_right(&mut A.clone_matrix(ZZ), matrix_from(ZZ, &[&[0], &[1]]), ZZ).is_none());
}

#[test]
fn test_solve_large_zn() {
    let ring = Zn::new(16);
    let mut A = DenseMatrix::zero(6, 11, &ring);
    *A.at_mut(0, 8) = ring.from_int(11);
    *A.at_mut(2, 10) = ring.from_int(10);
    *A.at_mut(4, 10) = ring.from_int(8);
    assert!(solve_right(&mut A.clone_matrix(&ring), A, &ring).is_some());
}

#[test]
fn test_determinant() {
    let ZZ = BigIntRing::RING;
    let A = matrix_from(ZZ, &[
        &[1, 0, 3],
        &[2, 1, 0],
        &[9, 8, 7]
    ]);
    assert_el_eq!(ZZ, ZZ.from_int(7 + 48 - 27), determinant(&mut A.clone_matrix(ZZ), ZZ));
}
