//! Named coordinate access (`v.x`, `v.y`, ...) for vectors of dimension 1 through 4.

use std::ops::{Deref, DerefMut};

use crate::Vector;

macro_rules! coords {
    ($($n:literal => $name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            /// Coordinate view of a
            #[doc = concat!(stringify!($n), "-dimensional")]
            /// [`Vector`], reached through `Deref`.
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                // Zero-sized; keeps the view from being constructed outside this module.
                _sealed: (),
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &$name<T> {
                    // Safety: `Vector<T, N>` is `repr(transparent)` over `[T; N]`, which has the
                    // same layout as a `repr(C)` struct of `N` fields of type `T` followed by a ZST.
                    unsafe { &*(self as *const Self).cast::<$name<T>>() }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut $name<T> {
                    // Safety: see `deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$name<T>>() }
                }
            }
        )+
    };
}

coords! {
    1 => X { x },
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}
