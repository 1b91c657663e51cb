//! # Int2048
//! Signed arbitrary-precision integers stored as base-10000 limbs.
//! Every value is kept in canonical form: no trailing zero limbs and no negative zero.
//! # Example
//! ```
//! use int2048::Int2048;
//!
//! let a: Int2048 = "10000000000000".parse().unwrap();
//! let b = Int2048::from(900000000000_i64);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display, Write as _};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::str::FromStr;

use log::trace;

use crate::error::{Int2048Error, ParseErrorKind};
use crate::int2048_cache::*;
use crate::int2048_constants::*;

#[derive(Debug, Clone)]
pub struct Int2048 {
    /// `true` for non-negative values.
    sign: bool,
    /// Limbs in `[0, LIMB_BASE)`, least significant first.
    mag: Vec<u32>,
}

// 实现构造
impl Int2048 {
    pub(crate) fn from_limbs(mag: Vec<u32>, sign: bool) -> Self {
        let mut val = Int2048 { sign, mag };
        val.normalize();
        val
    }

    pub fn zero() -> Self {
        Int2048 { sign: true, mag: vec![0] }
    }

    /// Trims trailing zero limbs down to one limb and clears the sign of zero.
    fn normalize(&mut self) {
        while self.mag.len() > 1 && self.mag.last() == Some(&0) {
            self.mag.pop();
        }
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        if self.is_zero() {
            self.sign = true;
        }
    }

    fn value_of(val: u64, sign: bool) -> Self {
        if val <= MAX_CONSTANT as u64 {
            return if sign {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            };
        }
        let mut mag = Vec::with_capacity(MAX_NATIVE_LIMBS);
        let mut rest = val;
        while rest != 0 {
            mag.push((rest % LIMB_BASE as u64) as u32);
            rest /= LIMB_BASE as u64;
        }
        Int2048::from_limbs(mag, sign)
    }
}

impl Default for Int2048 {
    fn default() -> Self {
        Int2048::zero()
    }
}

macro_rules! impl_unsigned_to_int2048 {
    ($($u: ty),*) => {
    $(
    impl From<$u> for Int2048 {
        fn from(val: $u) -> Self {
            Int2048::value_of(val as u64, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_int2048 {
    ($($i: ty),*) => {
    $(
    impl From<$i> for Int2048 {
        fn from(val: $i) -> Self {
            Int2048::value_of((val as i64).unsigned_abs(), val >= 0)
        }
    }
    )*
    };
}
impl_unsigned_to_int2048!(u8, u16, u32, usize, u64);
impl_signed_to_int2048!(i8, i16, i32, isize, i64);

// 杂项
impl Int2048 {
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.sign {
            1
        } else {
            -1
        }
    }

    pub fn abs(&self) -> Int2048 {
        Int2048 { sign: true, mag: self.mag.clone() }
    }

    /// Number of decimal digits in the magnitude. Zero has one digit.
    pub fn digit_len(&self) -> usize {
        let top = self.mag[self.mag.len() - 1];
        let top_digits = if top == 0 { 1 } else { top.ilog10() as usize + 1 };
        (self.mag.len() - 1) * LIMB_DIGITS + top_digits
    }

    pub fn to_i64(&self) -> Option<i64> {
        if self.mag.len() > MAX_NATIVE_LIMBS {
            return None;
        }
        let mag = self
            .mag
            .iter()
            .rev()
            .fold(0_i128, |acc, &limb| acc * LIMB_BASE as i128 + limb as i128);
        i64::try_from(if self.sign { mag } else { -mag }).ok()
    }
}

// 实现打印
impl Display for Int2048 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.mag.len() * LIMB_DIGITS);
        let mut limbs = self.mag.iter().rev();
        if let Some(top) = limbs.next() {
            write!(digits, "{}", top)?;
        }
        for limb in limbs {
            write!(digits, "{:0width$}", limb, width = LIMB_DIGITS)?;
        }
        f.pad_integral(self.sign, "", &digits)
    }
}

// 实现解析
impl FromStr for Int2048 {
    type Err = Int2048Error;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if val.is_empty() {
            return Err(Int2048Error::parse(val, ParseErrorKind::Empty));
        }
        let (sign, digits, offset) = match val.strip_prefix('-') {
            Some(rest) => (false, rest, 1),
            None => (true, val, 0),
        };
        if digits.is_empty() {
            return Err(Int2048Error::parse(val, ParseErrorKind::MissingDigits));
        }
        if let Some((index, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            let kind = ParseErrorKind::InvalidDigit { ch, index: index + offset };
            return Err(Int2048Error::parse(val, kind));
        }

        // group digits into limbs from the least significant end
        let mag = digits
            .as_bytes()
            .rchunks(LIMB_DIGITS)
            .map(|group| {
                group
                    .iter()
                    .fold(0_u32, |acc, &b| acc * 10 + (b - b'0') as u32)
            })
            .collect();
        Ok(Int2048::from_limbs(mag, sign))
    }
}

impl TryFrom<&str> for Int2048 {
    type Error = Int2048Error;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        val.parse()
    }
}

// 实现大小比较
impl Int2048 {
    /// Compares magnitudes, ignoring signs. Both sides must be normalized.
    pub fn compare_mag(&self, other: &Int2048) -> Ordering {
        let self_len = self.mag.len();
        let other_len = other.mag.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.mag.iter().rev().zip(other.mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for Int2048 {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.compare_mag(other).is_eq()
    }
}
impl Eq for Int2048 {}

impl PartialOrd for Int2048 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int2048 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.compare_mag(other),
            (false, false) => self.compare_mag(other).reverse(),
        }
    }
}

// 运算符: 以 `&a op &b` 为核心实现, 其余组合转发
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident) => {
        impl $imp for Int2048 {
            type Output = Int2048;

            fn $method(self, rhs: Int2048) -> Int2048 {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Int2048> for Int2048 {
            type Output = Int2048;

            fn $method(self, rhs: &Int2048) -> Int2048 {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Int2048> for &Int2048 {
            type Output = Int2048;

            fn $method(self, rhs: Int2048) -> Int2048 {
                $imp::$method(self, &rhs)
            }
        }

        impl $imp_assign for Int2048 {
            fn $method_assign(&mut self, rhs: Int2048) {
                *self = $imp::$method(&*self, &rhs);
            }
        }

        impl $imp_assign<&Int2048> for Int2048 {
            fn $method_assign(&mut self, rhs: &Int2048) {
                *self = $imp::$method(&*self, rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

// 实现取反
impl Neg for Int2048 {
    type Output = Int2048;

    fn neg(mut self) -> Self::Output {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl Neg for &Int2048 {
    type Output = Int2048;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl Add<&Int2048> for &Int2048 {
    type Output = Int2048;

    fn add(self, val: &Int2048) -> Self::Output {
        if self.sign == val.sign {
            return Int2048::from_limbs(Int2048::add_mag(&self.mag, &val.mag), self.sign);
        }

        match self.compare_mag(val) {
            Ordering::Less => Int2048::from_limbs(Int2048::sub_mag(&val.mag, &self.mag), val.sign),
            Ordering::Equal => Int2048::zero(),
            Ordering::Greater => Int2048::from_limbs(Int2048::sub_mag(&self.mag, &val.mag), self.sign),
        }
    }
}

impl Int2048 {
    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0;
        for (i, &limb) in long.iter().enumerate() {
            let mut sum = limb + short.get(i).copied().unwrap_or(0) + carry;
            if sum >= LIMB_BASE {
                sum -= LIMB_BASE;
                carry = 1;
            } else {
                carry = 0;
            }
            result.push(sum);
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }

    /// `big - little`, requires `|big| >= |little|`.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0_i64;
        for (i, &limb) in big.iter().enumerate() {
            let mut difference = limb as i64 - little.get(i).copied().unwrap_or(0) as i64 - borrow;
            if difference < 0 {
                difference += LIMB_BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference as u32);
        }
        debug_assert_eq!(borrow, 0, "sub_mag requires |big| >= |little|");

        result
    }
}

// 实现减法
impl Sub<&Int2048> for &Int2048 {
    type Output = Int2048;

    fn sub(self, val: &Int2048) -> Self::Output {
        self + &(-val)
    }
}

// 实现乘法
impl Mul<&Int2048> for &Int2048 {
    type Output = Int2048;

    fn mul(self, val: &Int2048) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return Int2048::zero();
        }
        Int2048::from_limbs(Int2048::mul_mag(&self.mag, &val.mag), self.sign == val.sign)
    }
}

impl Int2048 {
    /// Grade-school multiplication: accumulate every limb product first,
    /// then resolve all carries in a single pass.
    fn mul_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let mut acc = vec![0_u64; x.len() + y.len()];
        for (i, &a) in x.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in y.iter().enumerate() {
                acc[i + j] += a as u64 * b as u64;
            }
        }

        let mut result = Vec::with_capacity(acc.len() + 1);
        let mut carry = 0_u64;
        for limb in acc {
            let total = limb + carry;
            result.push((total % LIMB_BASE as u64) as u32);
            carry = total / LIMB_BASE as u64;
        }
        while carry != 0 {
            result.push((carry % LIMB_BASE as u64) as u32);
            carry /= LIMB_BASE as u64;
        }

        result
    }
}

// 实现除法
impl Div<&Int2048> for &Int2048 {
    type Output = Int2048;

    fn div(self, rhs: &Int2048) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Int2048 {
    /// Quotient truncated toward zero.
    pub fn checked_div(&self, rhs: &Int2048) -> Result<Int2048, Int2048Error> {
        if rhs.is_zero() {
            return Err(Int2048Error::DivisionByZero);
        }

        if self.compare_mag(rhs).is_lt() {
            return Ok(Int2048::zero());
        }

        let sign = self.sign == rhs.sign;
        let mag = if rhs.compare_mag(&BASE).is_eq() {
            self.mag[1..].to_vec()
        } else if rhs.mag.len() == 1 {
            Int2048::divide_one_limb(&self.mag, rhs.mag[0]).0
        } else {
            Int2048::divide_bisect(&self.abs(), &rhs.abs()).mag
        };
        Ok(Int2048::from_limbs(mag, sign))
    }

    /// Remainder of truncating division; takes the sign of the dividend.
    pub fn checked_rem(&self, rhs: &Int2048) -> Result<Int2048, Int2048Error> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Both results of truncating division, so that `q * rhs + r == self`.
    pub fn div_rem(&self, rhs: &Int2048) -> Result<(Int2048, Int2048), Int2048Error> {
        let quotient = self.checked_div(rhs)?;
        let remainder = self - &(&quotient * rhs);
        Ok((quotient, remainder))
    }

    /// Short division of a magnitude by a single limb, most significant limb first.
    fn divide_one_limb(mag: &[u32], divisor: u32) -> (Vec<u32>, u32) {
        let mut quotient = vec![0; mag.len()];
        let mut r = 0_u64;
        for i in (0..mag.len()).rev() {
            let cur = r * LIMB_BASE as u64 + mag[i] as u64;
            quotient[i] = (cur / divisor as u64) as u32;
            r = cur % divisor as u64;
        }
        (quotient, r as u32)
    }

    /// Largest `q` with `q * divisor <= dividend`, for non-negative operands
    /// where `divisor >= LIMB_BASE` and `dividend >= divisor`.
    fn divide_bisect(dividend: &Int2048, divisor: &Int2048) -> Int2048 {
        let one = &POS_CACHE[1];
        let mut lo = Int2048::zero();
        // divisor >= LIMB_BASE bounds the quotient by dividend / LIMB_BASE
        let mut hi = Int2048::from_limbs(dividend.mag[1..].to_vec(), true);
        trace!("bisecting quotient over {} limbs", hi.mag.len());

        let mut steps = 0_usize;
        while lo < hi {
            let sum = &lo + &hi + one;
            let mid = Int2048::from_limbs(Int2048::divide_one_limb(&sum.mag, 2).0, true);
            if (&mid * divisor).compare_mag(dividend).is_gt() {
                hi = &mid - one;
            } else {
                lo = mid;
            }
            steps += 1;
        }
        trace!("bisection finished after {} steps", steps);

        lo
    }
}

// 实现求余
impl Rem<&Int2048> for &Int2048 {
    type Output = Int2048;

    fn rem(self, rhs: &Int2048) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
fn big(val: &str) -> Int2048 {
    val.parse().unwrap()
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big: Int2048 = num.into();
    assert_eq!(big.mag, vec![12]);
    assert!(big.sign);

    let num: i16 = -100;
    let big: Int2048 = num.into();
    assert_eq!(big.mag, vec![100]);
    assert!(!big.sign);

    let big = Int2048::from(-10000_isize);
    assert_eq!(big.mag, vec![0, 1]);

    let big = Int2048::from(i64::MIN);
    assert_eq!(big.to_string(), "-9223372036854775808");
    assert_eq!(big.to_i64(), Some(i64::MIN));

    let big = Int2048::from(u64::MAX);
    assert_eq!(big.mag.len(), MAX_NATIVE_LIMBS);
    assert_eq!(big.to_string(), "18446744073709551615");
    assert_eq!(big.to_i64(), None);

    assert_eq!(Int2048::from(0_u8), Int2048::zero());
    assert_eq!(Int2048::default(), Int2048::zero());
}

#[test]
fn test_normalize() {
    let mut a = Int2048 { sign: false, mag: vec![0, 0, 0] };
    a.normalize();
    assert_eq!(a.mag, vec![0]);
    assert!(a.sign);

    let mut b = Int2048 { sign: false, mag: vec![5, 0, 7, 0, 0] };
    b.normalize();
    assert_eq!(b.mag, vec![5, 0, 7]);
    let once = b.clone();
    b.normalize();
    assert_eq!(b.mag, once.mag);
    assert_eq!(b.sign, once.sign);
}

#[test]
fn test_parse() {
    assert_eq!(big("123456789").mag, vec![6789, 2345, 1]);
    assert_eq!(big("-0000"), Int2048::zero());
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("000120").to_string(), "120");
    assert_eq!(big("-10000").mag, vec![0, 1]);

    let kind = |s: &str| s.parse::<Int2048>().unwrap_err().parse_kind();
    assert_eq!(kind(""), Some(ParseErrorKind::Empty));
    assert_eq!(kind("-"), Some(ParseErrorKind::MissingDigits));
    assert_eq!(kind("+5"), Some(ParseErrorKind::InvalidDigit { ch: '+', index: 0 }));
    assert_eq!(kind("-12a4"), Some(ParseErrorKind::InvalidDigit { ch: 'a', index: 3 }));
    assert_eq!(kind("1 2"), Some(ParseErrorKind::InvalidDigit { ch: ' ', index: 1 }));
    assert_eq!(kind("--1"), Some(ParseErrorKind::InvalidDigit { ch: '-', index: 1 }));
    assert!(Int2048::try_from("12").is_ok());
}

#[test]
fn test_to_string() {
    let s = "-1000000020000300004";
    assert_eq!(big(s).to_string(), s);
    assert_eq!(big("100000000").to_string(), "100000000");
    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:+}", big("42")), "+42");
    assert_eq!(format!("{:05}", big("-42")), "-0042");
}

#[test]
fn test_queries() {
    assert_eq!(big("0").digit_len(), 1);
    assert_eq!(big("-9999").digit_len(), 4);
    assert_eq!(big("10000").digit_len(), 5);
    assert_eq!(big("123456789012").digit_len(), 12);
    assert_eq!(big("-5").signum(), -1);
    assert_eq!(big("0").signum(), 0);
    assert_eq!(big("-5").abs(), big("5"));
    assert!(big("-5").is_negative());
    assert!(!big("-0").is_negative());
}

#[test]
fn test_compare() {
    assert_eq!(big("12345").compare_mag(&big("-9999")), Ordering::Greater);
    assert_eq!(big("-12345").compare_mag(&big("12345")), Ordering::Equal);
    assert!(big("-3") < big("2"));
    assert!(big("-30000") < big("-29999"));
    assert!(big("30000") > big("29999"));
    assert!(big("0") == big("-0"));
    assert!(big("1") != big("-1"));
    assert!(big("7") >= big("7"));
    assert!(big("-7") <= big("-7"));
    assert_eq!(big("-1").max(big("-2")), big("-1"));
}

#[test]
fn test_add_sub() {
    let a = big("-40540403261018770859812117263782292077235318825033122274297327781036232");
    let b = big("52795355647846676860229953609448700736796461284858206682265310505567013");
    let c = big("12254952386827906000417836345666408659561142459825084407967982724530781");
    assert_eq!(&a + &b, c);
    assert_eq!(&b + &a, c);

    assert_eq!(big("321") - big("134"), big("187"));
    assert_eq!(big("134") - big("321"), big("-187"));
    assert_eq!(big("9999") + big("1"), big("10000"));
    assert_eq!(big("10000") - big("1"), big("9999"));
    assert_eq!(big("100000000") - big("99999999"), big("1"));
    assert_eq!(big("-5") + big("5"), Int2048::zero());
    assert_eq!(big("-5") - big("-5").neg(), big("-10"));
    assert_eq!(-big("0"), Int2048::zero());
    assert!((-big("0")).sign);

    let mut x = big("99999999");
    x += big("1");
    assert_eq!(x, big("100000000"));
    x -= &big("100000001");
    assert_eq!(x, big("-1"));
}

#[test]
fn test_mul() {
    assert_eq!(big("100001") * big("32"), big("3200032"));
    assert_eq!(big("-12345678901234567890123456789") * big("98765432109876543210"),
               big("-1219326311370217952249657064223746380111126352690"));
    assert_eq!(big("-5") * big("0"), Int2048::zero());
    assert!((big("-5") * big("0")).sign);
    assert_eq!(big("-5") * big("-5"), big("25"));
    assert_eq!(big("9999") * big("9999"), big("99980001"));

    let a = big(&"7".repeat(100));
    let b = big(&"3".repeat(99));
    let p = &a * &b;
    let digits = a.digit_len() + b.digit_len();
    assert!(p.digit_len() == digits || p.digit_len() == digits - 1);

    let mut m = big("-2");
    m *= &big("50000");
    assert_eq!(m, big("-100000"));
}

#[test]
fn test_div() {
    // single limb divisor
    assert_eq!(Int2048::from(10) / Int2048::from(3), Int2048::from(3));
    assert_eq!(Int2048::from(10) % Int2048::from(3), Int2048::from(1));
    assert_eq!(big("7") / big("2"), big("3"));
    assert_eq!(big("-7") / big("2"), big("-3"));
    assert_eq!(big("7") / big("-2"), big("-3"));
    assert_eq!(big("-7") / big("-2"), big("3"));
    assert_eq!(big("-7") % big("2"), big("-1"));
    assert_eq!(big("7") % big("-2"), big("1"));
    assert_eq!(big("3") / big("-7"), Int2048::zero());
    // limb base divisor
    let (q, r) = big("99999999999999999999").div_rem(&big("-10000")).unwrap();
    assert_eq!(q, big("-9999999999999999"));
    assert_eq!(r, big("9999"));
    // multi limb divisor
    let (q, r) = big("-123456789012345678901234567890").div_rem(&big("987654321987")).unwrap();
    assert_eq!(q, big("-124999998748520313"));
    assert_eq!(r, big("-645722545959"));
    let (q, r) = big("-1000000000000000000000000").div_rem(&big("99990001")).unwrap();
    assert_eq!(q, big("-10000999999989999"));
    assert_eq!(r, big("-1"));

    let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
    let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
    let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
    assert_eq!(&a / &b, c);

    let mut d = big("120");
    d /= big("13");
    assert_eq!(d, big("9"));
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), Int2048::zero());

    let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
    let b = big("526738495607659438721653478560954837265378495607");
    let r = big("393707270751296419349581795408095683999332705291");
    assert_eq!(&a % &b, r);
    assert_eq!(&(-&a) % &b, -&r);

    let mut m = big("-17");
    m %= &big("5");
    assert_eq!(m, big("-2"));
}

#[test]
fn test_divide_by_zero() {
    assert!(matches!(big("5").checked_div(&big("-0")), Err(Int2048Error::DivisionByZero)));
    assert!(matches!(big("5").checked_rem(&Int2048::zero()), Err(Int2048Error::DivisionByZero)));
    assert!(big("0").div_rem(&big("0")).is_err());
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = big("1") / big("0");
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_rem_operator_panics_on_zero() {
    let _ = big("1") % big("0");
}
