use lazy_static::*;

use crate::Int2048;
use crate::int2048_constants::*;

lazy_static! {
    pub static ref POS_CACHE: Vec<Int2048> = (0..=MAX_CONSTANT as u32)
        .map(|n| Int2048::from_limbs(vec![n], true))
        .collect();
    pub static ref NEG_CACHE: Vec<Int2048> = (0..=MAX_CONSTANT as u32)
        .map(|n| Int2048::from_limbs(vec![n], false))
        .collect();
    /// The limb base as a value; dividing by it drops the lowest limb.
    pub static ref BASE: Int2048 = Int2048::from_limbs(vec![0, 1], true);
}

#[test]
fn test_cache_is_canonical() {
    assert_eq!(POS_CACHE[0], NEG_CACHE[0]);
    assert!(!NEG_CACHE[0].is_negative());
    for n in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[n], -&NEG_CACHE[n]);
        assert_eq!(POS_CACHE[n].to_string(), n.to_string());
    }
    assert_eq!(BASE.to_string(), "10000");
}
