/// Implements [`crate::State`] for a type.
///
/// `impl_state!(Foo)` keeps `Foo` out of command snapshots;
/// `impl_state!(Foo, snapshot)` clones it into every snapshot and requires `Clone`.
#[macro_export]
macro_rules! impl_state {
    (@state $ty:ty) => {
        impl $crate::State for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn assign_box(&mut self, new_self: ::std::boxed::Box<dyn ::std::any::Any + Send>) {
                $crate::state_assign_impl(self, new_self);
            }
        }
    };
    ($ty:ty, snapshot) => {
        impl $crate::SnapshotClone for $ty {
            fn clone_boxed(
                &self,
            ) -> ::std::option::Option<::std::boxed::Box<dyn ::std::any::Any + Send>> {
                ::std::option::Option::Some(::std::boxed::Box::new(
                    ::std::clone::Clone::clone(self),
                ))
            }
        }
        $crate::impl_state!(@state $ty);
    };
    ($ty:ty) => {
        impl $crate::SnapshotClone for $ty {}
        $crate::impl_state!(@state $ty);
    };
}

/// Implements [`crate::Compute`] for a `Clone` type. Computes are always
/// visible to commands.
#[macro_export]
macro_rules! impl_compute {
    ($ty:ty) => {
        $crate::impl_state!($ty, snapshot);
        impl $crate::Compute for $ty {}
    };
}
