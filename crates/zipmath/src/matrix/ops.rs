//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

/// Column access.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, col: usize) -> &Self::Output {
        &self.0[col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        &mut self.0[col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation (for `bool` elements) or bitwise complement (for integers).
impl<T, const R: usize, const C: usize> Not for Matrix<T, R, C>
where
    T: Not,
{
    type Output = Matrix<T::Output, R, C>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

/// Matrix-matrix operators.
///
/// `Mul` and `Div` are not part of this list, see the type-level docs of [`Matrix`].
macro_rules! matrix_ops {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident;)+) => {
        $(
            impl<T, const R: usize, const C: usize> $op<Matrix<T, R, C>> for Matrix<T, R, C>
            where
                T: $op,
            {
                type Output = Matrix<T::Output, R, C>;

                fn $method(self, rhs: Matrix<T, R, C>) -> Self::Output {
                    self.zip_with(rhs, T::$method)
                }
            }

            impl<T, const R: usize, const C: usize> $op_assign<Matrix<T, R, C>> for Matrix<T, R, C>
            where
                T: $op_assign,
            {
                fn $method_assign(&mut self, rhs: Matrix<T, R, C>) {
                    self.zip_with_mut(rhs, T::$method_assign);
                }
            }
        )+
    };
}

matrix_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Rem::rem, RemAssign::rem_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
}

/// Matrix-scalar operators. The scalar is used for every element.
macro_rules! scalar_rhs_ops {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident;)+) => {
        $(
            impl<T, const R: usize, const C: usize> $op<T> for Matrix<T, R, C>
            where
                T: $op + Copy,
            {
                type Output = Matrix<T::Output, R, C>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem.$method(rhs))
                }
            }

            impl<T, const R: usize, const C: usize> $op_assign<T> for Matrix<T, R, C>
            where
                T: $op_assign + Copy,
            {
                fn $method_assign(&mut self, rhs: T) {
                    for column in &mut self.0 {
                        <Vector<T, R> as $op_assign<T>>::$method_assign(column, rhs);
                    }
                }
            }
        )+
    };
}

scalar_rhs_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
}

macro_rules! scalar_lhs_ops {
    ($($op:ident::$method:ident),+ for $types:tt) => {
        $(
            scalar_lhs_ops!(@each $op::$method $types);
        )+
    };
    (@each $op:ident::$method:ident [$($types:ty),+]) => {
        $(
            impl<const R: usize, const C: usize> $op<Matrix<$types, R, C>> for $types {
                type Output = Matrix<$types, R, C>;

                fn $method(self, rhs: Matrix<$types, R, C>) -> Self::Output {
                    rhs.map(|elem| <$types as $op>::$method(self, elem))
                }
            }
        )+
    };
}

scalar_lhs_ops!(Add::add, Sub::sub, Mul::mul, Div::div, Rem::rem for [
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
]);
scalar_lhs_ops!(Shl::shl, Shr::shr for [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
]);
scalar_lhs_ops!(BitAnd::bitand, BitOr::bitor, BitXor::bitxor for [
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool
]);

#[cfg(test)]
mod tests {
    use crate::{Mat2, Mat2f, Mat2x3, Matrix};

    #[test]
    fn matrix_matrix() {
        let a: Mat2f = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b: Mat2f = Matrix::from_rows([[4.0, 3.0], [2.0, 1.0]]);
        assert_eq!(a + b, Mat2f::splat(5.0));
        assert_eq!(a - b, Matrix::from_rows([[-3.0, -1.0], [1.0, 3.0]]));
        assert_eq!(b % a, Matrix::from_rows([[0.0, 1.0], [2.0, 1.0]]));

        let x: Mat2<u8> = Matrix::from_rows([[0b01, 0b10], [0b11, 0b00]]);
        let y: Mat2<u8> = Mat2::splat(0b01);
        assert_eq!(x & y, Matrix::from_rows([[1, 0], [1, 0]]));
        assert_eq!(x | y, Matrix::from_rows([[1, 3], [3, 1]]));
        assert_eq!(x ^ y, Matrix::from_rows([[0, 3], [2, 1]]));
        assert_eq!(x << y, Matrix::from_rows([[2, 4], [6, 0]]));
        assert_eq!(x >> y, Matrix::from_rows([[0, 1], [1, 0]]));
    }

    #[test]
    fn matrix_scalar() {
        let a: Mat2x3<i32> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(a * 2, Matrix::from_rows([[2, 4, 6], [8, 10, 12]]));
        assert_eq!(a / 2, Matrix::from_rows([[0, 1, 1], [2, 2, 3]]));
        assert_eq!(a % 2, Matrix::from_rows([[1, 0, 1], [0, 1, 0]]));
        assert_eq!(a - 1, Matrix::from_rows([[0, 1, 2], [3, 4, 5]]));
        assert_eq!(10 - a, Matrix::from_rows([[9, 8, 7], [6, 5, 4]]));
        assert_eq!(12 / a, Matrix::from_rows([[12, 6, 4], [3, 2, 2]]));
        assert_eq!(1 << a, Matrix::from_rows([[2, 4, 8], [16, 32, 64]]));
        assert_eq!(!Mat2::splat(false), Mat2::splat(true));
        assert_eq!(-(-a), a);
    }

    #[test]
    fn compound_assignment() {
        let mut a: Mat2f = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = a;
        a += b;
        assert_eq!(a, b * 2.0);
        a -= 1.0;
        assert_eq!(a, Matrix::from_rows([[1.0, 3.0], [5.0, 7.0]]));
        a *= 0.5;
        a /= 0.5;
        a %= b;
        assert_eq!(a, Matrix::from_rows([[0.0, 1.0], [2.0, 3.0]]));

        let mut x: Mat2<u32> = Mat2::splat(1);
        x <<= Matrix::from_rows([[0, 1], [2, 3]]);
        x |= 1;
        assert_eq!(x, Matrix::from_rows([[1, 3], [5, 9]]));
    }

    #[test]
    fn approx_eq() {
        let a: Mat2f = Matrix::from_rows([[0.1, 0.2], [0.3, 0.4]]);
        approx::assert_relative_eq!(a * 3.0, Matrix::from_rows([[0.3, 0.6], [0.9, 1.2]]));
        approx::assert_abs_diff_ne!(a, a + 1e-3);
    }
}
