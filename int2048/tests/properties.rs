use std::cmp::Ordering;

use int2048::Int2048;
use proptest::prelude::*;

fn big(val: &str) -> Int2048 {
    val.parse().unwrap()
}

/// Canonical decimal text: no leading zeros, no negative zero.
fn canonical() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just("0".to_string()),
        9 => "-?[1-9][0-9]{0,60}",
    ]
}

fn value() -> impl Strategy<Value = Int2048> {
    canonical().prop_map(|s| big(&s))
}

proptest! {
    #[test]
    fn prop_round_trip(s in canonical()) {
        prop_assert_eq!(big(&s).to_string(), s);
    }

    #[test]
    fn prop_leading_zeros_ignored(s in "[0-9]{1,30}", zeros in 0usize..6) {
        let padded = format!("{}{}", "0".repeat(zeros), s);
        prop_assert_eq!(big(&padded), big(&s));
        prop_assert_eq!(big(&format!("-{}", padded)), -big(&s));
    }

    #[test]
    fn prop_commutative(a in value(), b in value()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn prop_associative(a in value(), b in value(), c in value()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn prop_additive_inverse(a in value()) {
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert_eq!(&a - &a, Int2048::zero());
        prop_assert_eq!((&a - &a).to_string(), "0");
    }

    #[test]
    fn prop_division_identity(a in value(), b in value()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert_eq!(r.compare_mag(&b), Ordering::Less);
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        prop_assert_eq!(&a / &b, q);
        prop_assert_eq!(&a % &b, r);
    }

    #[test]
    fn prop_total_order(a in value(), b in value()) {
        let held = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
        prop_assert_eq!(held, 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a <= b, !(a > b));
        prop_assert_eq!(a >= b, !(a < b));
        prop_assert_eq!(a != b, !(a == b));
    }

    #[test]
    fn prop_matches_native(x in any::<i64>(), y in any::<i64>()) {
        let (a, b) = (Int2048::from(x), Int2048::from(y));
        let (x, y) = (x as i128, y as i128);
        prop_assert_eq!((&a + &b).to_string(), (x + y).to_string());
        prop_assert_eq!((&a - &b).to_string(), (x - y).to_string());
        prop_assert_eq!((&a * &b).to_string(), (x * y).to_string());
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        if y != 0 {
            prop_assert_eq!((&a / &b).to_string(), (x / y).to_string());
            prop_assert_eq!((&a % &b).to_string(), (x % y).to_string());
        }
    }

    #[test]
    fn prop_small_divisors(x in any::<i64>(), y in -20000i64..20000) {
        prop_assume!(y != 0 && !(x == i64::MIN && y == -1));
        let (a, b) = (Int2048::from(x), Int2048::from(y));
        prop_assert_eq!((&a / &b).to_i64(), Some(x / y));
        prop_assert_eq!((&a % &b).to_i64(), Some(x % y));
    }

    #[test]
    fn prop_compound_assign(a in value(), b in value()) {
        let mut c = a.clone();
        c += &b;
        prop_assert_eq!(&c, &(&a + &b));
        c -= b.clone();
        prop_assert_eq!(&c, &a);
        c *= &b;
        prop_assert_eq!(&c, &(&a * &b));
        if !b.is_zero() {
            c /= &b;
            prop_assert_eq!(&c, &a);
            c %= &b;
            prop_assert_eq!(&c, &(&a % &b));
        }
    }

    #[test]
    fn prop_product_digit_count(a in "[1-9][0-9]{0,120}", b in "[1-9][0-9]{0,120}") {
        let p = big(&a) * big(&b);
        let sum = a.len() + b.len();
        prop_assert!(p.digit_len() == sum || p.digit_len() + 1 == sum);
    }
}

#[test]
fn canonical_zero() {
    assert_eq!(big("0"), big("-0"));
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(big("-000").to_string(), "0");
}

#[test]
fn stream_round_trip() {
    let values = ["0", "-1", "10000", "-99999999", "123456789012345678901234567890"];
    let mut out = Vec::new();
    for v in values {
        big(v).write_to(&mut out).unwrap();
        out.push(b'\n');
    }
    let mut input = out.as_slice();
    let mut read = Vec::new();
    while let Some(v) = Int2048::read_from(&mut input).unwrap() {
        read.push(v.to_string());
    }
    assert_eq!(read, values);
}
