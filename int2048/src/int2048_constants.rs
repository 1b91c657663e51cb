/// Every limb holds a value in `[0, LIMB_BASE)`.
pub const LIMB_BASE: u32 = 10000;

/// Decimal digits printed per limb.
pub const LIMB_DIGITS: usize = 4;

pub const MAX_CONSTANT: usize = 16;

/// Enough limbs for the magnitude of any `i64`/`u64`.
pub const MAX_NATIVE_LIMBS: usize = 5;
