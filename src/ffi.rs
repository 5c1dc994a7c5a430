//! C boundary: the cache as an opaque handle.
//!
//! Three operations form the contract: [`fuzz_cached_init`] creates a
//! handle, [`fuzz_cached_ratio`] scores candidates against it, and
//! [`fuzz_cached_deinit`] consumes it. The handle is a [`CachedRatio`]
//! behind `Box::into_raw` — no struct layout is shared with the caller, and
//! the handle is only ever created by one call and destroyed by exactly one
//! other. [`fuzz_cached_init_cstr`] adapts null-terminated strings onto the
//! explicit-length, binary-safe entry point.
//!
//! Common misuse is defined rather than undefined: scoring a null handle
//! returns `1.0` (maximal dissimilarity) and releasing a null handle is a
//! no-op, so callers that
//! null their pointer after release get an idempotent second release.
//! Passing a handle that was already released (without nulling it) remains
//! the caller's responsibility, as does keeping any release from racing an
//! in-flight scoring call on the same handle.

use std::ffi::{CStr, c_char};
use std::ptr;
use std::slice;

use crate::CachedRatio;

/// Borrows `(ptr, len)` as a byte slice, tolerating the null-with-zero-length
/// convention for "no bytes". Null with a nonzero length is refused.
#[inline]
unsafe fn bytes<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        Some(&[])
    } else if ptr.is_null() {
        None
    } else {
        Some(unsafe { slice::from_raw_parts(ptr, len) })
    }
}

/// Copies `len` bytes at `pattern` into a new cache and returns an owned
/// opaque handle. The caller's buffer may be freed or mutated afterwards.
/// Returns a null handle if `pattern` is null with a nonzero `len`; a zero
/// `len` produces a valid empty-pattern cache.
///
/// # Safety
///
/// `pattern` must point to `len` readable bytes when non-null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fuzz_cached_init(pattern: *const u8, len: usize) -> *mut CachedRatio {
    match unsafe { bytes(pattern, len) } {
        Some(pattern) => Box::into_raw(Box::new(CachedRatio::new(pattern))),
        None => {
            warn!("fuzz_cached_init: null pattern with length {len}");
            ptr::null_mut()
        }
    }
}

/// Null-terminated convenience adapter: computes the length up to the first
/// zero byte, then delegates to [`fuzz_cached_init`]'s code path. Returns a
/// null handle for a null string.
///
/// # Safety
///
/// `pattern`, when non-null, must point to a null-terminated sequence of
/// readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fuzz_cached_init_cstr(pattern: *const c_char) -> *mut CachedRatio {
    if pattern.is_null() {
        warn!("fuzz_cached_init_cstr: null pattern");
        return ptr::null_mut();
    }
    let pattern = unsafe { CStr::from_ptr(pattern) };
    Box::into_raw(Box::new(CachedRatio::new(pattern.to_bytes())))
}

/// Scores `len` bytes at `candidate` against the cached pattern, returning
/// the dissimilarity in `[0, 1]` — `0.0` for an exact match, `1.0` for
/// maximal dissimilarity. A null handle, or a null candidate with nonzero
/// length, scores as `1.0`. The cache is only read; the call is safe to
/// issue concurrently from multiple threads on one handle.
///
/// # Safety
///
/// `cache` must be null or a live handle from one of the init calls;
/// `candidate` must point to `len` readable bytes when non-null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fuzz_cached_ratio(
    cache: *const CachedRatio,
    candidate: *const u8,
    len: usize,
) -> f64 {
    let Some(cache) = (unsafe { cache.as_ref() }) else {
        warn!("fuzz_cached_ratio: null handle");
        return 1.0;
    };
    match unsafe { bytes(candidate, len) } {
        Some(candidate) => cache.score(candidate),
        None => 1.0,
    }
}

/// Consumes the handle, freeing the pattern copy and its bitmask structure
/// together. A null handle is ignored.
///
/// # Safety
///
/// `cache` must be null or a live handle from one of the init calls, and no
/// other call may use the handle during or after this one.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fuzz_cached_deinit(cache: *mut CachedRatio) {
    if !cache.is_null() {
        drop(unsafe { Box::from_raw(cache) });
    }
}
