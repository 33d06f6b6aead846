/// Fixed-layout record every demonstration runs against.
///
/// `repr(C)` pins declaration-order layout, so on a platform with 4-byte
/// `i32` alignment the memory image is
/// `a/x/x/x b/b/b/b c/x/x/x d/d/d/d` (`x` = padding). Each field's offset is
/// a compile-time constant, identical for every instance.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct Record {
    pub a: u8,
    pub b: i32,
    pub c: u8,
    pub d: i32,
}

impl Default for Record {
    fn default() -> Self {
        Record {
            a: 0,
            b: 0,
            c: 0,
            d: 0,
        }
    }
}

pub type RecordPtr = *mut Record;

/// Field reads through a recovered record pointer. The pointer must address a
/// live `Record`.
pub trait RecordPtrOps {
    fn a(self) -> u8;
    fn b(self) -> i32;
    fn c(self) -> u8;
    fn d(self) -> i32;
}

impl RecordPtrOps for RecordPtr {
    #[inline]
    fn a(self) -> u8 {
        unsafe { (*self).a }
    }

    #[inline]
    fn b(self) -> i32 {
        unsafe { (*self).b }
    }

    #[inline]
    fn c(self) -> u8 {
        unsafe { (*self).c }
    }

    #[inline]
    fn d(self) -> i32 {
        unsafe { (*self).d }
    }
}
