//! Exports over host-provided `i32` buffers.
//!
//! A buffer is a pointer plus an element count. A null pointer or a
//! non-positive count is treated as an empty buffer.

use wasmath_core::arrays;

/// Borrows a host buffer as a slice, or `None` if it is empty or null.
///
/// # Safety
///
/// When non-null, `ptr` must point to `len` initialised `i32`s that stay
/// valid and unaliased for `'a`.
unsafe fn host_slice<'a>(ptr: *const i32, len: i32) -> Option<&'a [i32]> {
    let len = usize::try_from(len).ok().filter(|&len| len > 0)?;
    if ptr.is_null() {
        log::warn!("null buffer with length {}", len);
        return None;
    }
    // SAFETY: non-null, and the caller guarantees `len` readable elements.
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// Mutable counterpart of [`host_slice`].
///
/// # Safety
///
/// As [`host_slice`], and the buffer must also be writable.
unsafe fn host_slice_mut<'a>(ptr: *mut i32, len: i32) -> Option<&'a mut [i32]> {
    let len = usize::try_from(len).ok().filter(|&len| len > 0)?;
    if ptr.is_null() {
        log::warn!("null buffer with length {}", len);
        return None;
    }
    // SAFETY: non-null, and the caller guarantees `len` writable elements.
    Some(unsafe { std::slice::from_raw_parts_mut(ptr, len) })
}

/// Wrapping sum of the buffer; `0` when empty.
///
/// # Safety
///
/// `ptr` must be null or point to `len` readable `i32`s.
#[no_mangle]
pub unsafe extern "C" fn sumArray(ptr: *const i32, len: i32) -> i32 {
    unsafe { host_slice(ptr, len) }.map_or(0, arrays::sum_array)
}

/// Largest element of the buffer; `0` when empty.
///
/// # Safety
///
/// `ptr` must be null or point to `len` readable `i32`s.
#[no_mangle]
pub unsafe extern "C" fn findMax(ptr: *const i32, len: i32) -> i32 {
    unsafe { host_slice(ptr, len) }.map_or(0, arrays::find_max)
}

/// Sorts the buffer ascending in place.
///
/// # Safety
///
/// `ptr` must be null or point to `len` readable and writable `i32`s.
#[no_mangle]
pub unsafe extern "C" fn bubbleSort(ptr: *mut i32, len: i32) {
    if let Some(values) = unsafe { host_slice_mut(ptr, len) } {
        arrays::bubble_sort(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_negative_lengths() {
        assert_eq!(unsafe { sumArray(std::ptr::null(), 4) }, 0);
        assert_eq!(unsafe { findMax(std::ptr::null(), 4) }, 0);
        unsafe { bubbleSort(std::ptr::null_mut(), 4) };

        let values = [1, 2, 3];
        assert_eq!(unsafe { sumArray(values.as_ptr(), -1) }, 0);
        assert_eq!(unsafe { sumArray(values.as_ptr(), 0) }, 0);
    }
}
