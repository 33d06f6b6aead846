/// Byte offset of `$MEMBER` within `$TYPE`, taken against a null base.
///
/// Address zero is treated as a fictitious instance of `$TYPE` and the member
/// address relative to it is reinterpreted as an integer. No load happens, the
/// whole expression is address arithmetic, but member access through a null
/// pointer is formally undefined behavior; it is kept here because it is the
/// classic formulation of the idiom. Callers must wrap the invocation in
/// `unsafe`. For a strategy without the hazard see [`offset_of_instance!`].
#[macro_export]
macro_rules! offset_of {
    ($TYPE: ty, $MEMBER: tt) => {{
        #[allow(deref_nullptr)]
        let offset = &(*(0 as *const $TYPE)).$MEMBER as *const _ as isize;
        offset
    }};
}

/// Byte offset of `$MEMBER` within `$TYPE`, measured on a scratch instance.
///
/// A `MaybeUninit` instance donates valid addresses; the member address minus
/// the base address is the offset. The instance is never read, so this is
/// safe to call anywhere an expression is allowed.
#[macro_export]
macro_rules! offset_of_instance {
    ($TYPE: ty, $MEMBER: tt) => {{
        let temp = core::mem::MaybeUninit::<$TYPE>::uninit();
        let base = temp.as_ptr();
        unsafe { core::ptr::addr_of!((*base).$MEMBER) as *const u8 as isize - base as isize }
    }};
}

/// Recovers a `*mut $TYPE` to the record whose `$MEMBER` field `$PTR`
/// addresses, by subtracting the member's null-base offset.
///
/// The result is only meaningful when `$PTR` really addresses the `$MEMBER`
/// field of a live `$TYPE`; nothing is validated, and dereferencing the
/// pointer produced from a wrong input is undefined behavior.
#[macro_export]
macro_rules! container_of {
    ($PTR: expr, $TYPE: ty, $MEMBER: tt) => {
        ($PTR as *const _ as isize - unsafe { $crate::offset_of!($TYPE, $MEMBER) }) as *mut $TYPE
    };
}
