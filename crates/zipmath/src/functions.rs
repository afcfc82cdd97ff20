//! Element-wise functions on [`Vector`]s and [`Matrix`]es.
//!
//! Every function here is a scalar function lifted through the [`Elementwise`] combinator. Where a
//! function takes more than one argument, each argument may be a container or a scalar (see
//! [`Broadcast`]), as long as at least one argument is a container. All container arguments must
//! have the same shape.
//!
//! ```
//! # use zipmath::*;
//! use zipmath::functions::*;
//!
//! let x: Vec3f = vec3(-2.0, 0.5, 2.0);
//! assert_eq!(clamp(x, 0.0, 1.0), vec3(0.0, 0.5, 1.0));
//! assert_eq!(abs(x), vec3(2.0, 0.5, 2.0));
//! assert_eq!(step(0.0, x), vec3(0.0, 1.0, 1.0));
//! assert_eq!(mix(x, 0.0, 0.5), vec3(-1.0, 0.25, 1.0));
//! ```
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix
//! [`Elementwise`]: crate::Elementwise
//! [`Broadcast`]: crate::Broadcast

/// Defines functions that apply a unary capability-trait method to every element.
macro_rules! unary {
    ($($(#[$attr:meta])* $name:ident => $tr:ident::$method:ident;)+) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name<C>(x: C) -> C::Output<C::Elem>
            where
                C: crate::Elementwise,
                C::Elem: $tr,
            {
                x.map(<C::Elem as $tr>::$method)
            }
        )+
    };
}

/// Defines functions that apply a binary capability-trait method position-wise.
macro_rules! binary {
    ($($(#[$attr:meta])* $name:ident($a:ident, $b:ident) => $tr:ident::$method:ident;)+) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name<C, A, B>($a: A, $b: B) -> C::Output<C::Elem>
            where
                C: crate::Elementwise,
                C::Elem: $tr,
                A: crate::Broadcast<C>,
                B: crate::Broadcast<C>,
            {
                crate::combine2::<C, _, _, _, _>($a, $b, <C::Elem as $tr>::$method)
            }
        )+
    };
}

mod common;
mod exponential;
mod geometric;
mod relational;
mod trig;

pub use common::*;
pub use exponential::*;
pub use geometric::*;
pub use relational::*;
pub use trig::*;
