//! The [`sdl3_fn!`] declaration macro used by every binding module.

/// Declare forwarding stubs for native SDL3 entry points.
///
/// Each declared function becomes a public `unsafe fn` with the exact C
/// signature. Its body resolves the symbol of the same name from the loaded
/// SDL3 library once (cached in a `Lazy` function pointer) and forwards the
/// call. Calling convention is C; symbol names keep their `SDL_` prefix so
/// dynamic resolution finds them verbatim.
macro_rules! sdl3_fn {
    ($(
        $(#[$meta:meta])*
        pub fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )+) => {$(
        $(#[$meta])*
        pub unsafe fn $name($($arg: $ty),*) $(-> $ret)? {
            static SYMBOL: ::once_cell::sync::Lazy<unsafe extern "C" fn($($ty),*) $(-> $ret)?> =
                ::once_cell::sync::Lazy::new(|| unsafe {
                    $crate::loader::resolve(stringify!($name))
                });
            (*SYMBOL)($($arg),*)
        }
    )+};
}
