//! Element-wise transcendental functions over slices.
//!
//! Elements are independent, so a slice may be split across threads by the
//! caller. In-place and allocating forms accept `None` or an empty slice and
//! do nothing with it.

use crate::{MathError, MathResult};

/// One-argument functions applied to every element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Ln,
    Log10,
    Log2,
    Exp,
    Exp2,
    Sqrt,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 18] = [
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Tan,
        UnaryOp::Asin,
        UnaryOp::Acos,
        UnaryOp::Atan,
        UnaryOp::Sinh,
        UnaryOp::Cosh,
        UnaryOp::Tanh,
        UnaryOp::Asinh,
        UnaryOp::Acosh,
        UnaryOp::Atanh,
        UnaryOp::Ln,
        UnaryOp::Log10,
        UnaryOp::Log2,
        UnaryOp::Exp,
        UnaryOp::Exp2,
        UnaryOp::Sqrt,
    ];
}

/// Functions over `[a, b, c]` triples. Each reads its inputs from the triple
/// and writes its outputs back into it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TernaryOp {
    /// `[base, exponent, out]`
    Power,
    /// `[value, base, out]`
    LogBase,
    /// `[angle, sin_out, cos_out]`
    SinCos,
    /// `[y, x, out]`
    Atan2,
}

/// Float widths the batch functions run over.
pub trait BatchFloat: Copy + Send + Sync + 'static {
    fn unary(self, op: UnaryOp) -> Self;

    fn ternary(op: TernaryOp, triple: &mut [Self; 3]);
}

macro_rules! impl_batch_float {
    ($($t:ty),*) => {
        $(
            impl BatchFloat for $t {
                #[inline]
                fn unary(self, op: UnaryOp) -> $t {
                    match op {
                        UnaryOp::Sin => self.sin(),
                        UnaryOp::Cos => self.cos(),
                        UnaryOp::Tan => self.tan(),
                        UnaryOp::Asin => self.asin(),
                        UnaryOp::Acos => self.acos(),
                        UnaryOp::Atan => self.atan(),
                        UnaryOp::Sinh => self.sinh(),
                        UnaryOp::Cosh => self.cosh(),
                        UnaryOp::Tanh => self.tanh(),
                        UnaryOp::Asinh => self.asinh(),
                        UnaryOp::Acosh => self.acosh(),
                        UnaryOp::Atanh => self.atanh(),
                        UnaryOp::Ln => self.ln(),
                        UnaryOp::Log10 => self.log10(),
                        UnaryOp::Log2 => self.log2(),
                        UnaryOp::Exp => self.exp(),
                        UnaryOp::Exp2 => self.exp2(),
                        UnaryOp::Sqrt => self.sqrt(),
                    }
                }

                #[inline]
                fn ternary(op: TernaryOp, triple: &mut [$t; 3]) {
                    let [a, b, _] = *triple;
                    match op {
                        TernaryOp::Power => triple[2] = a.powf(b),
                        TernaryOp::LogBase => triple[2] = a.log(b),
                        TernaryOp::SinCos => {
                            let (s, c) = a.sin_cos();
                            triple[1] = s;
                            triple[2] = c;
                        }
                        TernaryOp::Atan2 => triple[2] = a.atan2(b),
                    }
                }
            }
        )*
    };
}

impl_batch_float!(f32, f64);

/// Replace every element with `op(element)`.
pub fn apply<'a, T: BatchFloat>(op: UnaryOp, values: impl Into<Option<&'a mut [T]>>) {
    if let Some(values) = values.into() {
        for value in values.iter_mut() {
            *value = value.unary(op);
        }
    }
}

/// Run `op` over every triple in place.
pub fn apply_ternary<'a, T: BatchFloat>(op: TernaryOp, triples: impl Into<Option<&'a mut [[T; 3]]>>) {
    if let Some(triples) = triples.into() {
        for triple in triples.iter_mut() {
            T::ternary(op, triple);
        }
    }
}

/// Write `op(source[i])` into `results[i]`. Nothing is written unless both
/// slices have the same length.
pub fn apply_from<T: BatchFloat>(op: UnaryOp, source: &[T], results: &mut [T]) -> MathResult<()> {
    if source.len() != results.len() {
        return Err(MathError::LengthMismatch {
            expected: source.len(),
            actual: results.len(),
        });
    }
    results.copy_from_slice(source);
    apply(op, results);
    Ok(())
}

/// A fresh vector of `op(source[i])`; empty for `None`.
pub fn applied<'a, T: BatchFloat>(op: UnaryOp, source: impl Into<Option<&'a [T]>>) -> Vec<T> {
    match source.into() {
        Some(source) => source.iter().map(|value| value.unary(op)).collect(),
        None => Vec::new(),
    }
}

/// Copy every triple of `source` into `results`, then run `op` over
/// `results`. Nothing is written unless both slices have the same length.
pub fn apply_ternary_from<T: BatchFloat>(
    op: TernaryOp,
    source: &[[T; 3]],
    results: &mut [[T; 3]],
) -> MathResult<()> {
    if source.len() != results.len() {
        return Err(MathError::LengthMismatch {
            expected: source.len(),
            actual: results.len(),
        });
    }
    results.copy_from_slice(source);
    apply_ternary(op, results);
    Ok(())
}

/// A fresh vector holding each triple after `op`; empty for `None`.
pub fn applied_ternary<'a, T: BatchFloat>(
    op: TernaryOp,
    source: impl Into<Option<&'a [[T; 3]]>>,
) -> Vec<[T; 3]> {
    match source.into() {
        Some(source) => source
            .iter()
            .map(|triple| {
                let mut triple = *triple;
                T::ternary(op, &mut triple);
                triple
            })
            .collect(),
        None => Vec::new(),
    }
}

macro_rules! named_unary {
    ($($name:ident => $op:ident,)*) => {
        $(
            #[inline]
            pub fn $name<'a, T: BatchFloat>(values: impl Into<Option<&'a mut [T]>>) {
                apply(UnaryOp::$op, values)
            }
        )*
    };
}

macro_rules! named_ternary {
    ($($name:ident => $op:ident,)*) => {
        $(
            #[inline]
            pub fn $name<'a, T: BatchFloat>(triples: impl Into<Option<&'a mut [[T; 3]]>>) {
                apply_ternary(TernaryOp::$op, triples)
            }
        )*
    };
}

named_unary! {
    sine => Sin,
    cosine => Cos,
    tangent => Tan,
    arc_sine => Asin,
    arc_cosine => Acos,
    arc_tangent => Atan,
    hyperbolic_sine => Sinh,
    hyperbolic_cosine => Cosh,
    hyperbolic_tangent => Tanh,
    inverse_hyperbolic_sine => Asinh,
    inverse_hyperbolic_cosine => Acosh,
    inverse_hyperbolic_tangent => Atanh,
    natural_log => Ln,
    log10 => Log10,
    log2 => Log2,
    exp => Exp,
    exp2 => Exp2,
    square_root => Sqrt,
}

named_ternary! {
    power => Power,
    log_base => LogBase,
    sin_cos => SinCos,
    arc_tangent2 => Atan2,
}
