use crate::{MathError, MathResult};
use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// Float to rational conversion stops once the approximation is this close.
pub const RATIONAL_EPSILON: f64 = 1e-6;

/// Upper bound on float to rational refinement steps.
///
/// An approximation `round(x * d) / d` is always within `0.5 / d` of `x`, so
/// the loop converges before the denominator passes 500 000; the cap only
/// guards against inputs that break that assumption.
pub const RATIONAL_MAX_ITERATIONS: u32 = 1 << 21;

/// An exact fraction, always stored in lowest terms with a positive denominator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i32,
    denominator: u32,
}

/// Binary GCD: strip the shared factors of two by shifting, then reduce the
/// odd remainders by subtraction.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }
    let mut shift = 0;
    while (a | b) & 1 == 0 {
        a >>= 1;
        b >>= 1;
        shift += 1;
    }
    while a & 1 == 0 {
        a >>= 1;
    }
    loop {
        while b & 1 == 0 {
            b >>= 1;
        }
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }
    a << shift
}

#[inline]
pub fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

impl Rational {
    pub const ZERO: Rational = Rational {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Rational = Rational {
        numerator: 1,
        denominator: 1,
    };

    /// Build `numerator / denominator` in lowest terms.
    pub fn new(numerator: i32, denominator: u32) -> MathResult<Rational> {
        if denominator == 0 {
            return Err(MathError::DivideByZero);
        }
        Rational::reduced(i64::from(numerator), u64::from(denominator)).ok_or(MathError::Overflow)
    }

    /// Reduce a wide fraction and narrow it, or `None` if it does not fit.
    /// `denominator` must be non-zero.
    fn reduced(numerator: i64, denominator: u64) -> Option<Rational> {
        let divisor = gcd(numerator.unsigned_abs(), denominator);
        let numerator = numerator / i64::try_from(divisor).ok()?;
        let denominator = denominator / divisor;
        Some(Rational {
            numerator: i32::try_from(numerator).ok()?,
            denominator: u32::try_from(denominator).ok()?,
        })
    }

    #[inline]
    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    #[inline]
    pub fn signum(&self) -> i32 {
        self.numerator.signum()
    }

    #[inline]
    /// Panics for `i32::MIN` numerators, whose magnitude has no `i32` form.
    pub fn abs(&self) -> Rational {
        match self.checked_abs() {
            Some(absolute) => absolute,
            None => panic!("attempt to take absolute value of rational with overflow"),
        }
    }

    pub fn checked_abs(&self) -> Option<Rational> {
        Some(Rational {
            numerator: self.numerator.checked_abs()?,
            denominator: self.denominator,
        })
    }

    pub fn reciprocal(&self) -> MathResult<Rational> {
        Rational::ONE.checked_div(*self).ok_or(MathError::DivideByZero)
    }

    /// Sum over the least common denominator, or `None` on overflow.
    pub fn checked_add(self, rhs: Rational) -> Option<Rational> {
        let d1 = u64::from(self.denominator);
        let d2 = u64::from(rhs.denominator);
        let denominator = lcm(d1, d2);
        let left = i64::from(self.numerator).checked_mul(i64::try_from(denominator / d1).ok()?)?;
        let right = i64::from(rhs.numerator).checked_mul(i64::try_from(denominator / d2).ok()?)?;
        Rational::reduced(left.checked_add(right)?, denominator)
    }

    pub fn checked_sub(self, rhs: Rational) -> Option<Rational> {
        self.checked_add(rhs.checked_neg()?)
    }

    pub fn checked_mul(self, rhs: Rational) -> Option<Rational> {
        let numerator = i64::from(self.numerator) * i64::from(rhs.numerator);
        let denominator = u64::from(self.denominator) * u64::from(rhs.denominator);
        Rational::reduced(numerator, denominator)
    }

    /// `None` when `rhs` is zero or the quotient overflows.
    pub fn checked_div(self, rhs: Rational) -> Option<Rational> {
        if rhs.is_zero() {
            return None;
        }
        let numerator =
            i64::from(self.numerator) * i64::from(rhs.denominator) * i64::from(rhs.signum());
        let denominator = u64::from(self.denominator) * u64::from(rhs.numerator.unsigned_abs());
        Rational::reduced(numerator, denominator)
    }

    pub fn checked_neg(self) -> Option<Rational> {
        Some(Rational {
            numerator: self.numerator.checked_neg()?,
            denominator: self.denominator,
        })
    }

    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.numerator as f32 / self.denominator as f32
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    /// Closest rational found by walking the numerator and denominator up
    /// until `numerator / denominator` is within [`RATIONAL_EPSILON`] of `value`.
    pub fn from_f64(value: f64) -> MathResult<Rational> {
        if !value.is_finite() {
            return Err(MathError::NotFinite);
        }
        let target = value.abs();
        if target > f64::from(i32::MAX) {
            return Err(MathError::Overflow);
        }

        let mut numerator = target.round();
        let mut denominator = 1.0f64;
        let mut iterations = 0;
        while (numerator / denominator - target).abs() >= RATIONAL_EPSILON {
            if iterations == RATIONAL_MAX_ITERATIONS {
                log::warn!(
                    "Rational approximation of {} stopped after {} steps at {}/{}",
                    value,
                    iterations,
                    numerator,
                    denominator
                );
                break;
            }
            if numerator / denominator < target {
                numerator += 1.0;
            } else {
                denominator += 1.0;
                numerator = (target * denominator).round();
            }
            iterations += 1;
        }

        let numerator = if value < 0.0 { -numerator } else { numerator };
        if numerator.abs() > f64::from(i32::MAX) || denominator > f64::from(u32::MAX) {
            return Err(MathError::Overflow);
        }
        Rational::new(numerator as i32, denominator as u32)
    }
}

impl Default for Rational {
    #[inline]
    fn default() -> Rational {
        Rational::ZERO
    }
}

impl From<i32> for Rational {
    #[inline]
    fn from(value: i32) -> Rational {
        Rational {
            numerator: value,
            denominator: 1,
        }
    }
}

impl TryFrom<f64> for Rational {
    type Error = MathError;
    #[inline]
    fn try_from(value: f64) -> MathResult<Rational> {
        Rational::from_f64(value)
    }
}

impl TryFrom<f32> for Rational {
    type Error = MathError;
    #[inline]
    fn try_from(value: f32) -> MathResult<Rational> {
        Rational::from_f64(f64::from(value))
    }
}

impl From<Rational> for f32 {
    #[inline]
    fn from(value: Rational) -> f32 {
        value.to_f32()
    }
}

impl From<Rational> for f64 {
    #[inline]
    fn from(value: Rational) -> f64 {
        value.to_f64()
    }
}

/// Truncates toward zero.
impl From<Rational> for i32 {
    #[inline]
    fn from(value: Rational) -> i32 {
        if value.numerator.unsigned_abs() < value.denominator {
            return 0;
        }
        (i64::from(value.numerator) / i64::from(value.denominator)) as i32
    }
}

/// Truncates toward zero.
impl From<Rational> for i64 {
    #[inline]
    fn from(value: Rational) -> i64 {
        i64::from(i32::from(value))
    }
}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Opposite signs compare by sign alone, otherwise by cross multiplication.
    fn cmp(&self, other: &Rational) -> Ordering {
        let (a, b) = (self.signum(), other.signum());
        if a != b {
            return a.cmp(&b);
        }
        let left = i64::from(self.numerator) * i64::from(other.denominator);
        let right = i64::from(other.numerator) * i64::from(self.denominator);
        left.cmp(&right)
    }
}

impl Add for Rational {
    type Output = Rational;
    #[inline]
    fn add(self, rhs: Rational) -> Rational {
        match self.checked_add(rhs) {
            Some(sum) => sum,
            None => panic!("attempt to add rationals with overflow"),
        }
    }
}

impl Sub for Rational {
    type Output = Rational;
    #[inline]
    fn sub(self, rhs: Rational) -> Rational {
        match self.checked_sub(rhs) {
            Some(difference) => difference,
            None => panic!("attempt to subtract rationals with overflow"),
        }
    }
}

impl Mul for Rational {
    type Output = Rational;
    #[inline]
    fn mul(self, rhs: Rational) -> Rational {
        match self.checked_mul(rhs) {
            Some(product) => product,
            None => panic!("attempt to multiply rationals with overflow"),
        }
    }
}

/// Panics on a zero divisor, like integer division.
impl Div for Rational {
    type Output = Rational;
    #[inline]
    fn div(self, rhs: Rational) -> Rational {
        if rhs.is_zero() {
            panic!("attempt to divide by a zero rational");
        }
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => panic!("attempt to divide rationals with overflow"),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        match self.checked_neg() {
            Some(negated) => negated,
            None => panic!("attempt to negate rational with overflow"),
        }
    }
}

impl AddAssign for Rational {
    #[inline]
    fn add_assign(&mut self, rhs: Rational) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rational {
    #[inline]
    fn sub_assign(&mut self, rhs: Rational) {
        *self = *self - rhs;
    }
}

impl MulAssign for Rational {
    #[inline]
    fn mul_assign(&mut self, rhs: Rational) {
        *self = *self * rhs;
    }
}

impl DivAssign for Rational {
    #[inline]
    fn div_assign(&mut self, rhs: Rational) {
        *self = *self / rhs;
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Rational {
    type Err = MathError;

    /// Accepts `n/d` or a bare integer `n`.
    fn from_str(s: &str) -> MathResult<Rational> {
        let s = s.trim();
        let (numerator, denominator) = match s.find('/') {
            Some(split) => (&s[..split], Some(&s[split + 1..])),
            None => (s, None),
        };
        let numerator: i32 = numerator
            .trim()
            .parse()
            .map_err(|err| MathError::Parse(format!("bad numerator {:?}: {}", numerator, err)))?;
        let denominator: u32 = match denominator {
            Some(d) => d
                .trim()
                .parse()
                .map_err(|err| MathError::Parse(format!("bad denominator {:?}: {}", d, err)))?,
            None => 1,
        };
        Rational::new(numerator, denominator)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn r(n: i32, d: u32) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn binary_gcd() {
        assert_eq!(6, gcd(48, 18));
        assert_eq!(1, gcd(17, 5));
        assert_eq!(7, gcd(0, 7));
        assert_eq!(7, gcd(7, 0));
        assert_eq!(1 << 10, gcd(1 << 10, 1 << 20));
        assert_eq!(12, lcm(4, 6));
    }

    #[test]
    fn reduces_on_construction() {
        let half = r(6, 4);
        assert_eq!(3, half.numerator());
        assert_eq!(2, half.denominator());
        assert_eq!(r(-1, 3), r(-5, 15));
        assert_eq!(Rational::ZERO, r(0, 9));
        assert_eq!(1, r(0, 9).denominator());
    }

    #[test]
    fn zero_denominator_is_an_error() {
        assert_eq!(Err(MathError::DivideByZero), Rational::new(1, 0));
    }

    #[test]
    fn adds_over_least_common_denominator() {
        assert_eq!(r(5, 6), r(1, 2) + r(1, 3));
        let sum = r(1, 6) + r(1, 3);
        assert_eq!(1, sum.numerator());
        assert_eq!(2, sum.denominator());
        assert_eq!(r(-1, 6), r(1, 6) - r(1, 3));
        assert_eq!(Rational::ZERO, r(3, 7) - r(3, 7));
    }

    #[test]
    fn multiplies_and_divides() {
        assert_eq!(r(1, 4), r(1, 2) * r(1, 2));
        assert_eq!(r(-3, 2), r(3, 4) / r(-1, 2));
        assert_eq!(None, r(3, 4).checked_div(Rational::ZERO));
        assert_eq!(Err(MathError::DivideByZero), Rational::ZERO.reciprocal());
        assert_eq!(Ok(r(-4, 3)), r(-3, 4).reciprocal());
    }

    #[test]
    #[should_panic(expected = "zero rational")]
    fn division_by_zero_panics() {
        let _ = r(1, 2) / Rational::ZERO;
    }

    #[test]
    fn absolute_value() {
        assert_eq!(r(3, 4), r(-3, 4).abs());
        assert_eq!(Some(r(3, 4)), r(3, 4).checked_abs());
        assert_eq!(None, r(i32::MIN, 1).checked_abs());
        assert_eq!(Some(r(i32::MAX, 1)), r(i32::MIN + 1, 1).checked_abs());
    }

    #[test]
    #[should_panic(expected = "absolute value of rational with overflow")]
    fn absolute_value_of_min_panics() {
        let _ = r(i32::MIN, 1).abs();
    }

    #[test]
    fn overflow_is_detected() {
        let big = Rational::from(i32::MAX);
        assert_eq!(None, big.checked_add(Rational::ONE));
        assert_eq!(None, Rational::from(i32::MIN).checked_neg());
        assert_eq!(None, r(1, u32::MAX).checked_mul(r(1, 2)));
    }

    #[test]
    fn compares_by_sign_then_cross_multiplication() {
        assert!(r(-1, 2) < r(1, 1000));
        assert!(r(1, 3) < r(1, 2));
        assert!(r(-1, 3) > r(-1, 2));
        assert!(Rational::ZERO > r(-7, 3));
        assert!(r(2, 3) == r(4, 6));
        let mut values = vec![r(3, 4), r(-2, 5), r(1, 8), Rational::ZERO];
        values.sort();
        assert_eq!(vec![r(-2, 5), Rational::ZERO, r(1, 8), r(3, 4)], values);
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(r(3, 1), Rational::from(3));
        assert_eq!(2, i32::from(r(7, 3)));
        assert_eq!(-2, i32::from(r(-7, 3)));
        assert_eq!(0, i32::from(r(-2, 3)));
        assert_eq!(0, i64::from(r(1, 2)));
    }

    #[test]
    fn float_conversions() {
        assert_eq!(0.75, f32::from(r(3, 4)));
        assert_eq!(-0.2, f64::from(r(-1, 5)));

        assert_eq!(Ok(r(1, 2)), Rational::try_from(0.5f32));
        assert_eq!(Ok(r(1, 10)), Rational::try_from(0.1f32));
        assert_eq!(Ok(r(1, 3)), Rational::try_from(1.0f64 / 3.0));
        assert_eq!(Ok(r(-3, 4)), Rational::try_from(-0.75f64));
        assert_eq!(Ok(r(355, 113)), Rational::try_from(std::f64::consts::PI));
        assert_eq!(Ok(r(7, 1)), Rational::try_from(7.0f32));
        assert_eq!(Err(MathError::NotFinite), Rational::try_from(f32::NAN));
        assert_eq!(Err(MathError::NotFinite), Rational::try_from(f64::INFINITY));
        assert_eq!(Err(MathError::Overflow), Rational::try_from(1e12f64));
    }

    #[test]
    fn text() {
        assert_eq!("-3/2", r(-6, 4).to_string());
        assert_eq!(Ok(r(5, 6)), "10/12".parse());
        assert_eq!(Ok(r(4, 1)), " 4 ".parse());
        assert_eq!(Err(MathError::DivideByZero), "1/0".parse::<Rational>());
        assert!(matches!("1/x".parse::<Rational>(), Err(MathError::Parse(_))));
        assert!(matches!("1/-2".parse::<Rational>(), Err(MathError::Parse(_))));
    }
}
