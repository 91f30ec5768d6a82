/// A callback that can be attached to an [`crate::Event`] carrying `Args`.
///
/// `Args` is a tuple; any `Fn` whose parameter list matches the tuple
/// elements implements `Slot` for it, so a closure with the wrong shape is
/// rejected at compile time.
pub trait Slot<Args> {
    fn call(&self, args: Args);
}

macro_rules! impl_slot {
    ($($arg:ident),*) => {
        impl<Func, $($arg,)*> Slot<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*),
        {
            #[allow(non_snake_case, clippy::unused_unit)]
            fn call(&self, ($($arg,)*): ($($arg,)*)) {
                (self)($($arg),*)
            }
        }
    };
}

impl_slot!();
impl_slot!(A);
impl_slot!(A, B);
impl_slot!(A, B, C);
impl_slot!(A, B, C, D);
impl_slot!(A, B, C, D, E);
impl_slot!(A, B, C, D, E, F);
