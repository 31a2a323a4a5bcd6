use crate::algorithms::charpoly::charpoly;
use crate::matrix::dense::DenseMatrix;
use crate::ring::*;

pub mod extension_impl;

///
/// A ring `R` that is a free module of finite rank over its base ring `S`, with a
/// basis of the form `1, a, a^2, ..., a^(n - 1)`. The element `a` is called the
/// canonical generator.
///
/// In other words, `R ~ S[X]/(f)` for some monic polynomial `f` of degree `n`.
///
pub trait FreeAlgebra: RingExtension {

    fn canonical_gen(&self) -> Self::Element;

    fn rank(&self) -> usize;

    ///
    /// Returns the coordinates of `el` w.r.t. the basis `1, a, ..., a^(n - 1)`,
    /// where `a` is the canonical generator.
    ///
    fn wrt_canonical_basis(&self, el: &Self::Element) -> Vec<El<Self::BaseRing>>;

    ///
    /// Inverse of [`FreeAlgebra::wrt_canonical_basis()`]. The iterator must yield
    /// exactly [`FreeAlgebra::rank()`] elements.
    ///
    fn from_canonical_basis<V>(&self, vec: V) -> Self::Element
        where V: IntoIterator<Item = El<Self::BaseRing>>;
}

///
/// [`RingStore`] corresponding to [`FreeAlgebra`].
///
pub trait FreeAlgebraStore: RingStore
    where Self::Type: FreeAlgebra
{
    delegate!{ FreeAlgebra, fn canonical_gen(&self) -> El<Self> }
    delegate!{ FreeAlgebra, fn rank(&self) -> usize }
    delegate!{ FreeAlgebra, fn wrt_canonical_basis(&self, el: &El<Self>) -> Vec<El<BaseRing<Self>>> }

    fn from_canonical_basis<V>(&self, vec: V) -> El<Self>
        where V: IntoIterator<Item = El<BaseRing<Self>>>
    {
        self.get_ring().from_canonical_basis(vec)
    }

    ///
    /// Returns the matrix of the `S`-linear map `y -> el * y` w.r.t. the canonical basis.
    ///
    fn multiplication_matrix(&self, el: &El<Self>) -> DenseMatrix<<BaseRing<Self> as RingStore>::Type> {
        create_multiplication_matrix(self, el)
    }

    ///
    /// Returns the coefficients of the characteristic polynomial of the multiplication
    /// by `el`, starting with the constant coefficient. By Cayley-Hamilton, this is a monic
    /// polynomial vanishing at `el`.
    ///
    fn charpoly_coefficients(&self, el: &El<Self>) -> Vec<El<BaseRing<Self>>> {
        charpoly(&self.multiplication_matrix(el), self.base_ring())
    }
}

impl<R: RingStore> FreeAlgebraStore for R
    where R::Type: FreeAlgebra
{}

///
/// Computes the matrix whose `i`-th column contains the coordinates of `el * a^i`,
/// where `a` is the canonical generator.
///
pub fn create_multiplication_matrix<R>(ring: R, el: &El<R>) -> DenseMatrix<<BaseRing<R> as RingStore>::Type>
    where R: RingStore,
        R::Type: FreeAlgebra
{
    let n = ring.rank();
    let g = ring.canonical_gen();
    let mut current = ring.clone_el(el);
    let mut columns = Vec::with_capacity(n);
    for _ in 0..n {
        columns.push(ring.wrt_canonical_basis(&current));
        ring.mul_assign_ref(&mut current, &g);
    }
    let base_ring = ring.base_ring();
    DenseMatrix::from_fn(n, n, |i, j| base_ring.clone_el(&columns[j][i]))
}
