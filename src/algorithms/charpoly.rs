use tracing::instrument;

use crate::matrix::dense::DenseMatrix;
use crate::matrix::Matrix;
use crate::ring::*;

///
/// Computes the characteristic polynomial `det(X I - A)` of the square matrix `A`
/// over a commutative ring, using Berkowitz' algorithm. In particular, no divisions
/// are performed.
///
/// The result is returned as the list of coefficients, starting with the constant
/// coefficient. It always has length `n + 1` and its last entry is `1`.
///
/// # Example
/// ```
/// # use minpoly::ring::*;
/// # use minpoly::integer::*;
/// # use minpoly::matrix::dense::*;
/// # use minpoly::algorithms::charpoly::*;
/// let ZZ = BigIntRing::RING;
/// let A = DenseMatrix::from_fn(2, 2, |i, j| ZZ.from_int([[0, 2], [1, 0]][i][j]));
/// let coefficients = charpoly(&A, ZZ);
/// assert!(ZZ.eq_el(&ZZ.from_int(-2), &coefficients[0]));
/// assert!(ZZ.is_zero(&coefficients[1]));
/// assert!(ZZ.is_one(&coefficients[2]));
/// ```
///
#[instrument(skip_all, level = "trace")]
pub fn charpoly<R>(A: &DenseMatrix<R::Type>, ring: R) -> Vec<El<R>>
    where R: RingStore
{
    assert!(ring.is_commutative());
    assert_eq!(A.row_count(), A.col_count());
    let n = A.row_count();

    // coefficients of the charpoly of the lower right submatrix, highest degree first
    let mut current = vec![ring.one()];
    for k in (0..n).rev() {
        let m = n - k;
        // first column of the Toeplitz matrix: 1, -a, -R C, -R A' C, ..., -R A'^(m - 2) C
        let mut toeplitz = Vec::with_capacity(m + 1);
        toeplitz.push(ring.one());
        toeplitz.push(ring.negate(ring.clone_el(A.at(k, k))));
        let mut power_times_col: Vec<El<R>> = ((k + 1)..n).map(|i| ring.clone_el(A.at(i, k))).collect();
        for _ in 0..m.saturating_sub(1) {
            let row_times = ring.sum(((k + 1)..n).zip(power_times_col.iter()).map(|(j, c)| ring.mul_ref(A.at(k, j), c)));
            toeplitz.push(ring.negate(row_times));
            power_times_col = ((k + 1)..n).map(|i|
                ring.sum(((k + 1)..n).zip(power_times_col.iter()).map(|(j, c)| ring.mul_ref(A.at(i, j), c)))
            ).collect();
        }
        debug_assert_eq!(m + 1, toeplitz.len());

        current = (0..=m).map(|i|
            ring.sum((0..=i.min(m - 1)).map(|j| ring.mul_ref(&toeplitz[i - j], &current[j])))
        ).collect();
    }
    current.reverse();
    return current;
}

#[cfg(test)]
use crate::integer::BigIntRing;
#[cfg(test)]
use crate::rings::zn::Zn;
#[cfg(test)]
use crate::algorithms::smith::determinant;

#[cfg(test)]
fn matrix_from<R: RingStore>(ring: R, rows: &[&[i32]]) -> DenseMatrix<R::Type> {
    DenseMatrix::from_fn(rows.len(), rows[0].len(), |i, j| ring.from_int(rows[i][j]))
}

#[cfg(test)]
fn assert_coefficients<R: RingStore>(ring: R, expected: &[i32], actual: &[El<R>]) {
    assert_eq!(expected.len(), actual.len());
    for (e, a) in expected.iter().zip(actual.iter()) {
        assert_el_eq!(&ring, ring.from_int(*e), a);
    }
}

#[test]
fn test_charpoly_small() {
    let ZZ = BigIntRing::RING;
    assert_coefficients(ZZ, &[1], &charpoly(&DenseMatrix::zero(0, 0, ZZ), ZZ));
    assert_coefficients(ZZ, &[-5, 1], &charpoly(&matrix_from(ZZ, &[&[5]]), ZZ));
    // X^2 - (a + d) X + ad - bc
    assert_coefficients(ZZ, &[-2, -5, 1], &charpoly(&matrix_from(ZZ, &[&[1, 2], &[3, 4]]), ZZ));
}

#[test]
fn test_charpoly_companion_matrix() {
    let ZZ = BigIntRing::RING;
    // companion matrix of X^3 - 6X - 6
    let A = matrix_from(ZZ, &[
        &[0, 0, 6],
        &[1, 0, 6],
        &[0, 1, 0]
    ]);
    assert_coefficients(ZZ, &[-6, -6, 0, 1], &charpoly(&A, ZZ));
}

#[test]
fn test_charpoly_constant_term_is_determinant() {
    let ZZ = BigIntRing::RING;
    let A = matrix_from(ZZ, &[
        &[1, 0, 3, 2],
        &[2, 1, 0, -1],
        &[9, 8, 7, 0],
        &[-3, 5, 1, 1]
    ]);
    let coefficients = charpoly(&A, ZZ);
    assert_eq!(5, coefficients.len());
    assert_el_eq!(ZZ, determinant(&mut A.clone_matrix(ZZ), ZZ), &coefficients[0]);
    // trace
    assert_el_eq!(ZZ, ZZ.from_int(-10), &coefficients[3]);
}

#[test]
fn test_charpoly_zn() {
    let ring = Zn::new(4);
    // nilpotent matrix of 2t on Z/4[t]/(t^2)
    let A = matrix_from(&ring, &[
        &[0, 0],
        &[2, 0]
    ]);
    assert_coefficients(&ring, &[0, 0, 1], &charpoly(&A, &ring));
}

#[test]
fn test_charpoly_random_matrices() {
    let ring = Zn::new(17);
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..20 {
        let A = DenseMatrix::from_fn(4, 4, |_, _| rng.rand_range(0..17));
        let coefficients = charpoly(&A, &ring);
        assert_el_eq!(&ring, determinant(&mut A.clone_matrix(&ring), &ring), &coefficients[0]);
        let trace = ring.sum((0..4).map(|i| *A.at(i, i)));
        assert_el_eq!(&ring, ring.negate(trace), &coefficients[3]);
        assert!(ring.is_one(&coefficients[4]));
    }
}
