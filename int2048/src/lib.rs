//! Int2048 \
//! This crate provides:
//! - [`Int2048`]: arbitrary-precision signed integers stored as base-10000 limbs, with
//!   the four arithmetic operations (truncating division), ordering and decimal text I/O.
//! - [`Int2048Error`]: parse, division-by-zero and stream failures.

mod error;
mod int2048;
mod int2048_cache;
mod int2048_constants;
mod int2048_io;

pub use crate::error::{Int2048Error, ParseErrorKind};
pub use crate::int2048::Int2048;
pub use crate::int2048_constants::{LIMB_BASE, LIMB_DIGITS};

#[cfg(test)]
mod tests {
    use crate::Int2048;

    #[test]
    fn it_works() {
        let a: Int2048 = "10000000000000".parse().unwrap();
        let b: Int2048 = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
    }
}
