use std::fmt;

use crate::graph::index_vec::Idx;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, stringify!($name))?;
                f.debug_tuple("").field(&self.0).finish()
            }
        }

        impl Idx for $name {
            fn index(self) -> usize {
                self.0 as usize
            }

            fn from_usize(idx: usize) -> Self {
                debug_assert!(idx <= u32::MAX as usize, "{} overflow", stringify!($name));
                Self(idx as u32)
            }
        }
    };
}

define_id!(NodeId);
define_id!(EdgeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_names_the_id_kind() {
        assert_eq!(format!("{:?}", NodeId::new(3)), "NodeId(3)");
        assert_eq!(format!("{:?}", EdgeId::new(0)), "EdgeId(0)");
        assert_eq!(NodeId::from_usize(7).index(), 7);
    }
}
