//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
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

impl<T, const N: usize> RelativeEq for Vector<T, N>
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

impl<T, const N: usize> UlpsEq for Vector<T, N>
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
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation (for `bool` elements) or bitwise complement (for integers).
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

// NB: every binary operator comes in a vector-vector and a vector-scalar flavor. Having both rules out
// a fully generic `Add<U> for Vector<T, N> where T: Add<U>` impl.
macro_rules! binary_ops {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident, $desc:literal;)+) => {
        $(
            #[doc = concat!("Element-wise ", $desc, ".")]
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip_with(rhs, T::$method)
                }
            }

            #[doc = concat!("Vector-scalar ", $desc, ". The scalar is used for every element.")]
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem.$method(rhs))
                }
            }

            #[doc = concat!("In-place element-wise ", $desc, ".")]
            impl<T, const N: usize> $op_assign<Vector<T, N>> for Vector<T, N>
            where
                T: $op_assign,
            {
                fn $method_assign(&mut self, rhs: Vector<T, N>) {
                    self.zip_with_mut(rhs, T::$method_assign);
                }
            }

            #[doc = concat!("In-place vector-scalar ", $desc, ".")]
            impl<T, const N: usize> $op_assign<T> for Vector<T, N>
            where
                T: $op_assign + Copy,
            {
                fn $method_assign(&mut self, rhs: T) {
                    self.as_mut_slice()
                        .iter_mut()
                        .for_each(|lhs| lhs.$method_assign(rhs));
                }
            }
        )+
    };
}

binary_ops! {
    Add::add, AddAssign::add_assign, "addition";
    Sub::sub, SubAssign::sub_assign, "subtraction";
    Mul::mul, MulAssign::mul_assign, "multiplication";
    Div::div, DivAssign::div_assign, "division";
    Rem::rem, RemAssign::rem_assign, "remainder";
    Shl::shl, ShlAssign::shl_assign, "left shift";
    Shr::shr, ShrAssign::shr_assign, "right shift";
    BitAnd::bitand, BitAndAssign::bitand_assign, "bitwise and";
    BitOr::bitor, BitOrAssign::bitor_assign, "bitwise or";
    BitXor::bitxor, BitXorAssign::bitxor_assign, "bitwise xor";
}

// Scalar-vector forms have to name the scalar type, since `impl<T> Add<Vector<T, N>> for T` is not
// allowed by the orphan rules.
macro_rules! scalar_lhs_ops {
    ($($op:ident::$method:ident),+ for $types:tt) => {
        $(
            scalar_lhs_ops!(@each $op::$method $types);
        )+
    };
    (@each $op:ident::$method:ident [$($types:ty),+]) => {
        $(
            impl<const N: usize> $op<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn $method(self, rhs: Vector<$types, N>) -> Self::Output {
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
