use std::{array, fmt};

use crate::{Shape, ShapeError, Vector, Zero};

mod ops;

macro_rules! aliases {
    (square: $($n:literal => $alias:ident, $alias_f:ident;)+ rect: $($r:literal x $c:literal => $rect:ident;)+) => {
        $(
            #[doc = concat!("A square ", $n, "x", $n, " [`Matrix`].")]
            pub type $alias<T> = Matrix<T, $n, $n>;
            #[doc = concat!("A square ", $n, "x", $n, " [`Matrix`] of [`f32`]s.")]
            pub type $alias_f = $alias<f32>;
        )+
        $(
            #[doc = concat!("A [`Matrix`] of ", $r, " rows by ", $c, " columns.")]
            pub type $rect<T> = Matrix<T, $r, $c>;
        )+
    };
}

aliases! {
    square:
        1 => Mat1, Mat1f;
        2 => Mat2, Mat2f;
        3 => Mat3, Mat3f;
        4 => Mat4, Mat4f;
    rect:
        2 x 3 => Mat2x3;
        2 x 4 => Mat2x4;
        3 x 2 => Mat3x2;
        3 x 4 => Mat3x4;
        4 x 2 => Mat4x2;
        4 x 3 => Mat4x3;
}

/// An `R` by `C` matrix of `T`s, stored column by column.
///
/// The storage is an array of `C` column vectors of type [`Vector<T, R>`], and element-wise
/// operations visit the matrix column by column.
///
/// # Creating matrices
///
/// - From raw elements or vectors with [`Matrix::from_rows`] or [`Matrix::from_columns`].
/// - From a closure receiving `(row, col)` with [`Matrix::from_fn`].
/// - By repeating one value with [`Matrix::splat`], or using [`Matrix::ZERO`].
/// - From a column-major slice of `R * C` elements with [`TryFrom`].
///
/// # Indexing
///
/// `mat[(row, col)]` reads and writes single elements. The row comes first, as in mathematical
/// notation, and both indices start at 0.
///
/// ```
/// # use zipmath::*;
/// let mut mat = Mat2x3::from_rows([
///     [1, 2, 3],
///     [4, 5, 6],
/// ]);
/// mat[(1, 2)] *= 10;
/// assert_eq!(mat[(1, 2)], 60);
/// assert_eq!(mat[(0, 2)], 3);
/// ```
///
/// Indexing with a single `usize` yields a column vector.
///
/// Out-of-range indices panic. Use [`Matrix::get`] and [`Matrix::get_mut`] to check them instead.
///
/// # Operators
///
/// The arithmetic and bitwise operators work element-wise, between two matrices of the same
/// dimensions or between a matrix and a scalar. The exception is `*` and `/` between two matrices
/// (and between a matrix and a vector), whose linear algebra meaning differs from the element-wise
/// one. These are not implemented:
///
/// ```compile_fail
/// # use zipmath::*;
/// let _ = Mat2f::ZERO * Mat2f::ZERO;
/// ```
///
/// ```compile_fail
/// # use zipmath::*;
/// let _ = Mat2f::ZERO * Vec2f::ZERO;
/// ```
///
/// [`comp_mul`][crate::functions::comp_mul] and [`comp_div`][crate::functions::comp_div] compute
/// the element-wise product and quotient instead.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([Vector<T, R>; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The all-zero matrix.
    pub const ZERO: Self = Self([Vector::<T, R>::ZERO; C]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from its rows, written top to bottom.
    ///
    /// ```
    /// # use zipmath::*;
    /// let m: Mat3x2<i32> = Matrix::from_rows([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]);
    /// assert_eq!(m.column(0), &vec3(1, 2, 3));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from its columns, written left to right.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(Into::into))
    }

    /// Builds a matrix by calling `cb(row, col)` for every element.
    ///
    /// Elements are produced column by column.
    ///
    /// ```
    /// # use zipmath::*;
    /// let diagonal: Mat3<u8> = Matrix::from_fn(|row, col| (row == col) as u8);
    /// assert_eq!(diagonal[(1, 1)], 1);
    /// assert_eq!(diagonal[(2, 0)], 0);
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| Vector::from_fn(|row| cb(row, col))))
    }

    /// Creates a matrix with each element initialized to `elem`.
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([Vector::splat(elem); C])
    }

    /// Transforms every element with `f`, keeping the dimensions.
    ///
    /// ```
    /// # use zipmath::*;
    /// let signs = Matrix::from_rows([[-2, 0], [5, -1]]).map(|x: i32| x.signum());
    /// assert_eq!(signs, Matrix::from_rows([[-1, 0], [1, -1]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Applies a binary function to the elements at the same position in `self` and `other`.
    ///
    /// Combination is done column by column, using [`Vector::zip_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use zipmath::*;
    /// let a = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let b = Matrix::from_rows([
    ///     [true, false],
    ///     [false, true],
    /// ]);
    /// assert_eq!(a.zip_with(b, |a, keep| if keep { a } else { 0 }), Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 4],
    /// ]));
    /// ```
    pub fn zip_with<U, V, F>(self, other: Matrix<U, R, C>, mut f: F) -> Matrix<V, R, C>
    where
        F: FnMut(T, U) -> V,
    {
        let columns = Vector::from(self.0).zip_with(Vector::from(other.0), |a, b| {
            a.zip_with(b, &mut f)
        });
        Matrix(columns.into_array())
    }

    /// Applies a ternary function to the elements at the same position in `self`, `b` and `c`.
    pub fn zip_with3<U, V, W, F>(
        self,
        b: Matrix<U, R, C>,
        c: Matrix<V, R, C>,
        mut f: F,
    ) -> Matrix<W, R, C>
    where
        F: FnMut(T, U, V) -> W,
    {
        let columns = Vector::from(self.0).zip_with3(
            Vector::from(b.0),
            Vector::from(c.0),
            |a, b, c| a.zip_with3(b, c, &mut f),
        );
        Matrix(columns.into_array())
    }

    /// Combines `other` into `self` in place, column by column.
    ///
    /// Returns `self`, so that several in-place combinations can be chained.
    pub fn zip_with_mut<U, F>(&mut self, other: Matrix<U, R, C>, mut f: F) -> &mut Self
    where
        F: FnMut(&mut T, U),
    {
        self.0
            .iter_mut()
            .zip(other.0)
            .for_each(|(lhs, rhs)| {
                lhs.zip_with_mut(rhs, &mut f);
            });
        self
    }

    /// Mirrors the matrix along its diagonal, turning rows into columns.
    ///
    /// ```
    /// # use zipmath::*;
    /// let wide = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(wide.transpose(), Matrix::from_columns([[1, 2, 3], [4, 5, 6]]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Checked element access. Returns [`None`] when `row` or `col` is out of range.
    ///
    /// ```
    /// # use zipmath::*;
    /// let m = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.get(1, 2), Some(&6));
    /// assert_eq!(m.get(2, 1), None);
    /// assert_eq!(m.get(0, 3), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.as_slice().get(row))
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0
            .get_mut(col)
            .and_then(|col| col.as_mut_slice().get_mut(row))
    }

    /// Returns a reference to the column vector at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[inline]
    pub fn column(&self, col: usize) -> &Vector<T, R> {
        &self.0[col]
    }

    /// Returns the column vectors of this matrix.
    #[inline]
    pub fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    #[inline]
    pub fn into_columns(self) -> [Vector<T, R>; C] {
        self.0
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Builds a matrix from a slice of `R * C` elements in column-major order.
///
/// # Examples
///
/// ```
/// # use zipmath::*;
/// let data = [1, 2, 3, 4, 5, 6];
/// let mat = Mat2x3::try_from(&data[..]).unwrap();
/// assert_eq!(mat, Matrix::from_columns([[1, 2], [3, 4], [5, 6]]));
///
/// assert!(Mat2::<i32>::try_from(&data[..]).is_err());
/// ```
impl<T: Copy, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = ShapeError;

    fn try_from(slice: &[T]) -> Result<Self, ShapeError> {
        let shape = Shape::Matrix { rows: R, cols: C };
        if slice.len() != shape.len() {
            return Err(ShapeError::ElementCount {
                shape,
                expected: shape.len(),
                found: slice.len(),
            });
        }
        Ok(Self::from_fn(|row, col| slice[col * R + row]))
    }
}

/// Formats the matrix row by row, the way it is usually written down.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize> {
            matrix: &'a Matrix<T, R, C>,
            index: usize,
        }

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for (i, column) in self.matrix.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // Elements stay on one line even with `{:#?}`.
                    write!(f, "{:?}", column[self.index])?;
                }
                f.write_str("]")
            }
        }

        f.debug_list()
            .entries((0..R).map(|index| Row {
                matrix: self,
                index,
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, Vec2};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2::from_columns([vec2(1, 2), vec2(3, 4)]).column(1),
            &vec2(3, 4)
        );
    }

    #[test]
    fn fmt() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(format!("{mat:?}"), "[[1, 2, 3], [4, 5, 6]]");
        assert_eq!(format!("{mat:#?}"), "[\n    [1, 2, 3],\n    [4, 5, 6],\n]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(Mat2x3::<u8>::ZERO, Mat2x3::splat(0));
        assert_eq!(Mat3::<i32>::default(), Mat3::ZERO);
    }

    #[test]
    fn zip_with_is_columnwise() {
        let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        let b = Mat2x3::from_rows([[10, 20, 30], [40, 50, 60]]);
        let mut seen = Vec::new();
        let sum = a.zip_with(b, |a, b| {
            seen.push((a, b));
            a + b
        });
        assert_eq!(sum, Matrix::from_rows([[11, 22, 33], [44, 55, 66]]));
        assert_eq!(
            seen,
            [(1, 10), (4, 40), (2, 20), (5, 50), (3, 30), (6, 60)]
        );
    }

    #[test]
    fn zip_with_mut() {
        let mut a = Mat2::from_rows([[1, 2], [3, 4]]);
        a.zip_with_mut(Mat2::splat(1), |a, b| *a -= b)
            .zip_with_mut(Mat2::from_rows([[1, 2], [3, 4]]), |a, b| *a *= b);
        assert_eq!(a, Matrix::from_rows([[0, 2], [6, 12]]));
    }

    #[test]
    fn access() {
        let mut mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat[(1, 2)], 6);
        assert_eq!(mat[2], vec2(3, 6));
        assert_eq!(mat.get(1, 3), None);
        *mat.get_mut(0, 0).unwrap() = 7;
        mat[1].y = 8;
        assert_eq!(mat.columns(), &[vec2(7, 4), vec2(2, 8), vec2(3, 6)]);
        let columns: [Vec2<i32>; 3] = mat.into_columns();
        assert_eq!(columns[0], [7, 4]);
    }

    #[test]
    fn try_from_slice() {
        let err = Mat2::<f32>::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::ElementCount {
                shape: Shape::Matrix { rows: 2, cols: 2 },
                expected: 4,
                found: 3,
            }
        );
        assert_eq!(err.to_string(), "cannot build a mat2 from 3 elements (expected 4)");
    }
}
