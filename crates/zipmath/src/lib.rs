//! Fixed-size vectors and matrices with element-wise arithmetic.
//!
//! # Overview
//!
//! This library provides [`Vector`] and [`Matrix`] types whose dimensions are part of their type,
//! together with an operator and function surface that applies scalar operations *element-wise*.
//! Every operator and every function funnels through a single combinator, the [`Elementwise`]
//! trait, which applies a 1-, 2- or 3-ary scalar function position-wise across containers of the
//! same shape.
//!
//! Scalars may appear in any argument position (as long as at least one argument is a container).
//! They are *broadcast* to the shape of the container arguments first (see [`Broadcast`]).
//!
//! ```
//! # use zipmath::*;
//! let a: Vec3f = vec3(1.0, 2.0, 3.0);
//! let b: Vec3f = vec3(4.0, 5.0, 6.0);
//! assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
//! assert_eq!(a + 2.0, vec3(3.0, 4.0, 5.0));
//! assert_eq!(2.0 + a, vec3(3.0, 4.0, 5.0));
//!
//! let x: Vec3f = vec3(-2.0, 0.5, 2.0);
//! assert_eq!(functions::clamp(x, 0.0, 1.0), vec3(0.0, 0.5, 1.0));
//! ```
//!
//! # Shapes
//!
//! Operand shapes are checked by the type system. Combining a 3-element vector with a 4-element
//! vector, or a vector with a matrix, does not compile:
//!
//! ```compile_fail
//! # use zipmath::*;
//! let _ = Vec3f::ZERO + Vec4f::ZERO;
//! ```
//!
//! ```compile_fail
//! # use zipmath::*;
//! let _ = functions::pow(Vec3f::ZERO, Vec2f::ZERO);
//! ```
//!
//! The same holds for compound assignment, for every argument of the ternary functions, and for
//! matrices of different dimensions:
//!
//! ```compile_fail
//! # use zipmath::*;
//! let mut a = Vec3f::ZERO;
//! a += Vec4f::ZERO;
//! ```
//!
//! ```compile_fail
//! # use zipmath::*;
//! let _ = functions::clamp(Vec3f::ZERO, Vec4f::ZERO, 1.0);
//! ```
//!
//! ```compile_fail
//! # use zipmath::*;
//! let _ = Vec2f::ZERO + Mat2f::ZERO;
//! ```
//!
//! ```compile_fail
//! # use zipmath::*;
//! let _ = Mat2x3::<f32>::ZERO + Mat3x2::<f32>::ZERO;
//! ```
//!
//! Matching shapes, or a scalar in place of a container, are accepted:
//!
//! ```
//! # use zipmath::*;
//! let mut a = Vec3f::ZERO;
//! a += Vec3f::X;
//! let _ = functions::clamp(a, Vec3f::ZERO, 1.0);
//! let _ = Mat2f::ZERO + 1.0;
//! let _ = Mat2x3::<f32>::ZERO + Mat2x3::<f32>::ZERO;
//! ```
//!
//! [`Shape`] describes shapes at runtime, which is only needed when building containers from
//! dynamically sized data (see [`ShapeError`]).
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Relying on const generics makes shape
//!   mismatches a compile-time error rather than something that has to be checked (or silently
//!   truncated) at runtime.
//! - Support only a single, column-major, unpadded data layout for matrices.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types.
//! - Only define *element-wise* semantics. The linear-algebra meaning of matrix-matrix
//!   multiplication, matrix division, and matrix-vector products is not decided, so `Matrix * Matrix`,
//!   `Matrix / Matrix` and `Matrix * Vector` are deliberately not implemented. Use
//!   [`functions::comp_mul`] and [`functions::comp_div`] for the element-wise product and quotient
//!   of two matrices.

mod elementwise;
mod error;
pub mod functions;
mod matrix;
pub mod scalar;
mod shape;
mod traits;
mod vector;

pub use elementwise::*;
pub use error::*;
pub use matrix::*;
pub use shape::*;
pub use traits::*;
pub use vector::*;
