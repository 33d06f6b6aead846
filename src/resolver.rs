//! Offset and container-recovery operations for [`Record`].
//!
//! Everything here is stateless address arithmetic: no allocation, no writes,
//! reentrant from any number of threads. Operations taking a raw field
//! pointer trust the caller completely; there is no validation layer, and a
//! pointer that does not address the named field of a live `Record` makes the
//! recovered address undefined.

use crate::record::{Record, RecordPtr};

/// Offset of `c`, measured on a zeroed stack instance as the byte distance
/// between the first field and `c`. The value holds for every instance of
/// `Record`, the scratch one only donates addresses.
#[inline]
pub fn c_offset_by_instance() -> isize {
    let temp = Record::default();
    &temp.c as *const u8 as isize - &temp.a as *const u8 as isize
}

/// Offset of `c` from the compile-time layout query; needs neither an
/// instance nor a null base.
#[inline]
pub fn c_offset_static() -> isize {
    memoffset::offset_of!(Record, c) as isize
}

/// Recovers the record owning the `c` field at `ptr`, subtracting the
/// instance-measured offset.
///
/// # Safety
///
/// `ptr` must address the `c` field of a live `Record`; any other input
/// yields a pointer that must not be dereferenced.
#[inline]
pub unsafe fn record_of_c_by_instance(ptr: *const u8) -> RecordPtr {
    (ptr as isize - c_offset_by_instance()) as RecordPtr
}

/// Recovers the record owning the `c` field at `ptr`, subtracting the
/// null-base offset.
///
/// # Safety
///
/// `ptr` must address the `c` field of a live `Record`; any other input
/// yields a pointer that must not be dereferenced.
#[inline]
pub unsafe fn record_of_c_by_null_base(ptr: *const u8) -> RecordPtr {
    (ptr as isize - offset_of!(Record, c)) as RecordPtr
}
