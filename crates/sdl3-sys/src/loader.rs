//! Runtime loading of the SDL3 shared library.
//!
//! The library is opened once, lazily, on the first bound call. The probe
//! order is: the `SDL3_DYNAMIC_LIB` environment variable if set, then the
//! platform's conventional names. A missing library or symbol is a
//! deployment error, not a runtime condition the caller can recover from,
//! so both panic with the offending name.

use libloading::Library;
use once_cell::sync::Lazy;

/// Environment variable naming an explicit path to the SDL3 shared library.
pub const ENV_OVERRIDE: &str = "SDL3_DYNAMIC_LIB";

#[cfg(target_os = "windows")]
const CANDIDATES: &[&str] = &["SDL3.dll"];

#[cfg(target_os = "macos")]
const CANDIDATES: &[&str] = &["libSDL3.dylib", "libSDL3.0.dylib", "SDL3.framework/SDL3"];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const CANDIDATES: &[&str] = &["libSDL3.so.0", "libSDL3.so"];

static LIBRARY: Lazy<Library> = Lazy::new(|| {
    if let Ok(path) = std::env::var(ENV_OVERRIDE) {
        match unsafe { Library::new(&path) } {
            Ok(lib) => {
                tracing::debug!(%path, "loaded SDL3 from {ENV_OVERRIDE}");
                return lib;
            }
            Err(err) => panic!("failed to load SDL3 from {ENV_OVERRIDE}={path}: {err}"),
        }
    }

    for name in CANDIDATES {
        if let Ok(lib) = unsafe { Library::new(name) } {
            tracing::debug!(name, "loaded SDL3");
            return lib;
        }
    }

    panic!("failed to load the SDL3 shared library (tried {CANDIDATES:?}; set {ENV_OVERRIDE} to override)")
});

/// Resolve a named symbol from the loaded SDL3 library as a function pointer.
///
/// # Panics
///
/// Panics if the library cannot be loaded or does not export `name`.
pub(crate) unsafe fn resolve<T: Copy>(name: &'static str) -> T {
    match unsafe { LIBRARY.get::<T>(name.as_bytes()) } {
        Ok(symbol) => {
            tracing::trace!(name, "resolved SDL3 symbol");
            *symbol
        }
        Err(err) => panic!("missing SDL3 symbol `{name}`: {err}"),
    }
}
