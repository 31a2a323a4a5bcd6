use super::*;

///
/// A matrix stored as a row-major vector of ring elements.
///
/// The number of rows is stored explicitly, so matrices with zero columns
/// (which arise e.g. when looking for relations between zero elements)
/// are supported.
///
pub struct DenseMatrix<R>
    where R: ?Sized + RingBase
{
    data: Vec<R::Element>,
    row_count: usize,
    col_count: usize
}

impl<R> DenseMatrix<R>
    where R: ?Sized + RingBase
{
    pub fn new(data: Vec<R::Element>, row_count: usize, col_count: usize) -> Self {
        assert_eq!(row_count * col_count, data.len());
        Self { data, row_count, col_count }
    }

    pub fn from_fn<F>(row_count: usize, col_count: usize, mut f: F) -> Self
        where F: FnMut(usize, usize) -> R::Element
    {
        let data = (0..row_count).flat_map(|i| (0..col_count).map(move |j| (i, j))).map(|(i, j)| f(i, j)).collect();
        Self { data, row_count, col_count }
    }

    pub fn zero<S>(row_count: usize, col_count: usize, ring: S) -> Self
        where S: RingStore<Type = R>
    {
        Self::from_fn(row_count, col_count, |_, _| ring.zero())
    }

    pub fn identity<S>(n: usize, ring: S) -> Self
        where S: RingStore<Type = R>
    {
        Self::from_fn(n, n, |i, j| if i == j { ring.one() } else { ring.zero() })
    }

    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut R::Element {
        assert!(i < self.row_count && j < self.col_count);
        &mut self.data[i * self.col_count + j]
    }

    pub fn clone_matrix<S>(&self, ring: S) -> Self
        where S: RingStore<Type = R>
    {
        Self {
            data: self.data.iter().map(|x| ring.clone_el(x)).collect(),
            row_count: self.row_count,
            col_count: self.col_count
        }
    }

    ///
    /// Returns the entries of the `j`-th column, from top to bottom.
    ///
    pub fn col<'a>(&'a self, j: usize) -> impl 'a + ExactSizeIterator<Item = &'a R::Element> {
        assert!(j < self.col_count);
        (0..self.row_count).map(move |i| self.at(i, j))
    }

    ///
    /// Removes rows from the bottom, or appends zero rows, until the matrix
    /// has exactly `new_count` rows.
    ///
    pub fn set_row_count<S>(&mut self, new_count: usize, ring: S)
        where S: RingStore<Type = R>
    {
        self.data.resize_with(new_count * self.col_count, || ring.zero());
        self.row_count = new_count;
    }

    pub fn mul<S>(&self, other: &DenseMatrix<R>, ring: S) -> Self
        where S: RingStore<Type = R>
    {
        assert_eq!(self.col_count, other.row_count);
        Self::from_fn(self.row_count, other.col_count, |i, j|
            ring.sum((0..self.col_count).map(|k| ring.mul_ref(self.at(i, k), other.at(k, j))))
        )
    }
}

impl<R> Matrix<R> for DenseMatrix<R>
    where R: ?Sized + RingBase
{
    fn row_count(&self) -> usize {
        self.row_count
    }

    fn col_count(&self) -> usize {
        self.col_count
    }

    fn at(&self, i: usize, j: usize) -> &R::Element {
        assert!(i < self.row_count && j < self.col_count);
        &self.data[i * self.col_count + j]
    }
}

///
/// Applies elementary operations to the rows of the wrapped matrix.
///
pub struct TransformRows<'a, R>(pub &'a mut DenseMatrix<R>)
    where R: ?Sized + RingBase;

///
/// Applies elementary operations to the columns of the wrapped matrix.
///
pub struct TransformCols<'a, R>(pub &'a mut DenseMatrix<R>)
    where R: ?Sized + RingBase;

impl<'a, R> TransformTarget<R> for TransformRows<'a, R>
    where R: ?Sized + RingBase
{
    fn transform(&mut self, ring: &R, i: usize, j: usize, transform: &[R::Element; 4]) {
        assert!(i != j);
        let A = &mut *self.0;
        for l in 0..A.col_count() {
            let new_i = ring.add(ring.mul_ref(&transform[0], A.at(i, l)), ring.mul_ref(&transform[1], A.at(j, l)));
            let new_j = ring.add(ring.mul_ref(&transform[2], A.at(i, l)), ring.mul_ref(&transform[3], A.at(j, l)));
            *A.at_mut(i, l) = new_i;
            *A.at_mut(j, l) = new_j;
        }
    }

    fn subtract(&mut self, ring: &R, src: usize, dst: usize, factor: &R::Element) {
        let A = &mut *self.0;
        for l in 0..A.col_count() {
            let to_sub = ring.mul_ref(factor, A.at(src, l));
            ring.sub_assign(A.at_mut(dst, l), to_sub);
        }
    }

    fn swap(&mut self, _ring: &R, i: usize, j: usize) {
        if i == j {
            return;
        }
        let A = &mut *self.0;
        for l in 0..A.col_count {
            A.data.swap(i * A.col_count + l, j * A.col_count + l);
        }
    }
}

impl<'a, R> TransformTarget<R> for TransformCols<'a, R>
    where R: ?Sized + RingBase
{
    fn transform(&mut self, ring: &R, i: usize, j: usize, transform: &[R::Element; 4]) {
        assert!(i != j);
        let A = &mut *self.0;
        for l in 0..A.row_count() {
            let new_i = ring.add(ring.mul_ref(A.at(l, i), &transform[0]), ring.mul_ref(A.at(l, j), &transform[1]));
            let new_j = ring.add(ring.mul_ref(A.at(l, i), &transform[2]), ring.mul_ref(A.at(l, j), &transform[3]));
            *A.at_mut(l, i) = new_i;
            *A.at_mut(l, j) = new_j;
        }
    }

    fn subtract(&mut self, ring: &R, src: usize, dst: usize, factor: &R::Element) {
        let A = &mut *self.0;
        for l in 0..A.row_count() {
            let to_sub = ring.mul_ref(A.at(l, src), factor);
            ring.sub_assign(A.at_mut(l, dst), to_sub);
        }
    }

    fn swap(&mut self, _ring: &R, i: usize, j: usize) {
        if i == j {
            return;
        }
        let A = &mut *self.0;
        for l in 0..A.row_count {
            A.data.swap(l * A.col_count + i, l * A.col_count + j);
        }
    }
}

#[cfg(test)]
use crate::integer::BigIntRing;

#[cfg(test)]
fn int_matrix(ZZ: BigIntRing, rows: &[&[i32]]) -> DenseMatrix<<BigIntRing as RingStore>::Type> {
    DenseMatrix::from_fn(rows.len(), rows[0].len(), |i, j| ZZ.from_int(rows[i][j]))
}

#[test]
fn test_mul() {
    let ZZ = BigIntRing::RING;
    let A = int_matrix(ZZ, &[&[1, 2], &[3, 4], &[5, 6]]);
    let B = int_matrix(ZZ, &[&[1, 0, -1], &[0, 2, 1]]);
    assert_matrix_eq!(ZZ, int_matrix(ZZ, &[&[1, 4, 1], &[3, 8, 1], &[5, 12, 1]]), A.mul(&B, ZZ));
    assert_matrix_eq!(ZZ, A, DenseMatrix::identity(3, ZZ).mul(&A, ZZ));
}

#[test]
fn test_zero_columns() {
    let ZZ = BigIntRing::RING;
    let mut A = DenseMatrix::zero(3, 0, ZZ);
    assert_eq!(3, A.row_count());
    assert_eq!(0, A.col_count());
    A.set_row_count(5, ZZ);
    assert_eq!(5, A.row_count());
}

#[test]
fn test_transform_rows_cols() {
    let ZZ = BigIntRing::RING;
    let mut A = int_matrix(ZZ, &[&[1, 2], &[3, 4]]);
    TransformRows(&mut A).subtract(ZZ.get_ring(), 0, 1, &ZZ.from_int(3));
    assert_matrix_eq!(ZZ, int_matrix(ZZ, &[&[1, 2], &[0, -2]]), A);
    TransformCols(&mut A).subtract(ZZ.get_ring(), 0, 1, &ZZ.from_int(2));
    assert_matrix_eq!(ZZ, int_matrix(ZZ, &[&[1, 0], &[0, -2]]), A);
    TransformRows(&mut A).swap(ZZ.get_ring(), 0, 1);
    assert_matrix_eq!(ZZ, int_matrix(ZZ, &[&[0, -2], &[1, 0]]), A);
    TransformCols(&mut A).transform(ZZ.get_ring(), 0, 1, &[ZZ.zero(), ZZ.one(), ZZ.one(), ZZ.zero()]);
    assert_matrix_eq!(ZZ, int_matrix(ZZ, &[&[-2, 0], &[0, 1]]), A);
}

#[test]
fn test_format() {
    let ZZ = BigIntRing::RING;
    let A = int_matrix(ZZ, &[&[1, -20], &[300, 4]]);
    assert_eq!("|  1,-20|\n|300,  4|", format!("{}", A.format(&ZZ)));
}
