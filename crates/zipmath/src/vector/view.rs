//! Named field access for small vectors.
//!
//! `Vector<T, 1..=4>` dereferences to a `#[repr(C)]` struct with fields `x`, `y`, `z` and `w`,
//! which in turn dereferences to one with the color aliases `r`, `g`, `b` and `a`.

use std::ops::{Deref, DerefMut};

use crate::Vector;

macro_rules! views {
    ($($name:ident { $($field:ident),+ })+) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $(pub $field: T,)+
                _priv: (), // prevent external construction
            }
        )+
    };
}

views! {
    X { x }
    XY { x, y }
    XYZ { x, y, z }
    XYZW { x, y, z, w }
    R { r }
    RG { r, g }
    RGB { r, g, b }
    RGBA { r, g, b, a }
}

macro_rules! deref {
    ($($from:ty => $to:ident,)+) => {
        $(
            impl<T> Deref for $from {
                type Target = $to<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // Safety: both types consist of the same number of `T`s with the same alignment
                    // (plus a ZST at the end), and `$to` is `#[repr(C)]`.
                    unsafe { &*(self as *const Self as *const $to<T>) }
                }
            }

            impl<T> DerefMut for $from {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // Safety: see above.
                    unsafe { &mut *(self as *mut Self as *mut $to<T>) }
                }
            }
        )+
    };
}

deref! {
    Vector<T, 1> => X,
    Vector<T, 2> => XY,
    Vector<T, 3> => XYZ,
    Vector<T, 4> => XYZW,
    X<T> => R,
    XY<T> => RG,
    XYZ<T> => RGB,
    XYZW<T> => RGBA,
}
