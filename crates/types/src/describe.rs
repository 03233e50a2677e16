//! The `Describe` trait and its implementations for standard library types

use crate::schema::Shape;
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::{OsStr, OsString};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Types that can describe their own structure without an instance
///
/// Records implement this with `#[derive(Schema)]`. Everything else is a
/// leaf, except pointer-like wrappers which describe one level of
/// indirection around their target.
pub trait Describe {
    fn shape() -> Shape;
}

macro_rules! leaf_shapes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn shape() -> Shape {
                    Shape::Leaf
                }
            }
        )*
    };
}

leaf_shapes!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    str,
    String,
    Path,
    PathBuf,
    OsStr,
    OsString,
    Duration,
    SystemTime,
    IpAddr,
    Ipv4Addr,
    Ipv6Addr,
    SocketAddr,
);

// Sequences and maps are bound as a whole; their elements are never walked.

impl<T> Describe for [T] {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

impl<T, const N: usize> Describe for [T; N] {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

impl<T> Describe for Vec<T> {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

impl<T> Describe for VecDeque<T> {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

impl<T, S> Describe for HashSet<T, S> {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

impl<T> Describe for BTreeSet<T> {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

impl<K, V, S> Describe for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

impl<K, V> Describe for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Leaf
    }
}

macro_rules! indirect_shapes {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Describe + ?Sized> Describe for $wrapper<T> {
                fn shape() -> Shape {
                    Shape::Indirect(T::shape)
                }
            }
        )*
    };
}

indirect_shapes!(Box, Rc, Arc, RefCell);

impl<T: Describe + ToOwned + ?Sized> Describe for Cow<'_, T> {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

impl<T: Describe> Describe for Option<T> {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

impl<T: Describe + ?Sized> Describe for &mut T {
    fn shape() -> Shape {
        Shape::Indirect(T::shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, Record};

    struct Server;

    impl Describe for Server {
        fn shape() -> Shape {
            Shape::Record(Record::new(
                "Server",
                vec![FieldDescriptor::of::<u16>("port").key("port")],
            ))
        }
    }

    #[test]
    fn test_scalars_are_leaves() {
        assert!(!u16::shape().is_record());
        assert!(!String::shape().is_record());
        assert!(!str::shape().is_record());
        assert!(!<Vec<Server>>::shape().is_record());
        assert!(!<HashMap<String, Server>>::shape().is_record());
        assert!(!NonZeroU16::shape().is_record());
        assert!(!OsString::shape().is_record());
        assert!(!SystemTime::shape().is_record());
        assert!(!<Cow<'static, str>>::shape().is_record());
    }

    #[test]
    fn test_wrappers_are_transparent_once() {
        assert!(Server::shape().is_record());
        assert!(<Option<Server>>::shape().is_record());
        assert!(<Box<Server>>::shape().is_record());
        assert!(<Arc<Server>>::shape().is_record());
        assert!(<&Server>::shape().is_record());
        assert!(!<Option<Box<Server>>>::shape().is_record());
        assert!(!<&&Server>::shape().is_record());
    }
}
