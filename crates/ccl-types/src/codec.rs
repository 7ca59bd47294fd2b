// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Exact conversion between non-negative decimals and field elements.
//!
//! A value `v` at scale `10^k` is carried as the integer `v * 10^k`. Encoding
//! never rounds: a decimal with more fractional digits than the scale allows
//! is rejected with [`CodecError::PrecisionLoss`], and an integer that would
//! wrap the field is rejected with [`CodecError::Overflow`].

use std::fmt;
use std::str::FromStr;

use ark_bn254::Fr;
use ark_ff::PrimeField;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Decimal exponent of the score public signal.
pub const SCORE_SCALE_EXP: u32 = 40;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("not a decimal number: {0:?}")]
    Parse(String),
    #[error("negative values are not representable: {0}")]
    Negative(String),
    #[error("{value} has more than {decimals} fractional digits")]
    PrecisionLoss { value: String, decimals: u32 },
    #[error("{value} scaled by 10^{decimals} does not fit the field")]
    Overflow { value: String, decimals: u32 },
}

/// Fixed-point scale `10^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Scale(u32);

impl Scale {
    /// Integral inputs: counts and whole-unit amounts.
    pub const UNIT: Scale = Scale(0);
    /// The score public signal.
    pub const SCORE: Scale = Scale(SCORE_SCALE_EXP);

    pub const fn new(exponent: u32) -> Self {
        Scale(exponent)
    }

    pub const fn exponent(self) -> u32 {
        self.0
    }

    pub fn factor(self) -> BigUint {
        BigUint::from(10u32).pow(self.0)
    }
}

/// A non-negative decimal `mantissa / 10^exponent`, kept normalized so that
/// equal values compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DecimalRepr", into = "String")]
pub struct Decimal {
    mantissa: BigUint,
    exponent: u32,
}

impl Decimal {
    pub fn new(mantissa: BigUint, exponent: u32) -> Self {
        let ten = BigUint::from(10u32);
        let zero = BigUint::from(0u32);
        let mut mantissa = mantissa;
        let mut exponent = exponent;
        while exponent > 0 && &mantissa % &ten == zero {
            mantissa /= &ten;
            exponent -= 1;
        }
        if mantissa == zero {
            exponent = 0;
        }
        Self { mantissa, exponent }
    }

    pub fn zero() -> Self {
        Self::from(0u64)
    }

    pub fn mantissa(&self) -> &BigUint {
        &self.mantissa
    }

    /// Number of fractional digits after normalization.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn is_integer(&self) -> bool {
        self.exponent == 0
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self {
            mantissa: BigUint::from(value),
            exponent: 0,
        }
    }
}

impl FromStr for Decimal {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(CodecError::Negative(s.to_string()));
        }
        let (int, frac) = s.split_once('.').unwrap_or((s, ""));
        let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int.is_empty() && frac.is_empty()) || !digits_only(int) || !digits_only(frac) {
            return Err(CodecError::Parse(s.to_string()));
        }
        let digits = format!("{int}{frac}");
        let mantissa = BigUint::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| CodecError::Parse(s.to_string()))?;
        let exponent =
            u32::try_from(frac.len()).map_err(|_| CodecError::Parse(s.to_string()))?;
        Ok(Self::new(mantissa, exponent))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.to_string();
        let exp = self.exponent as usize;
        if exp == 0 {
            return f.write_str(&digits);
        }
        let padded = if digits.len() <= exp {
            format!("{}{}", "0".repeat(exp + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (int, frac) = padded.split_at(padded.len() - exp);
        write!(f, "{int}.{frac}")
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}

/// JSON inputs may carry amounts as strings or plain integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Text(String),
    Integer(u64),
}

impl TryFrom<DecimalRepr> for Decimal {
    type Error = CodecError;

    fn try_from(repr: DecimalRepr) -> Result<Self, Self::Error> {
        match repr {
            DecimalRepr::Text(s) => s.parse(),
            DecimalRepr::Integer(n) => Ok(Decimal::from(n)),
        }
    }
}

/// `value * 10^scale` as a field element.
pub fn encode(value: &Decimal, scale: Scale) -> Result<Fr, CodecError> {
    if value.exponent > scale.exponent() {
        return Err(CodecError::PrecisionLoss {
            value: value.to_string(),
            decimals: scale.exponent(),
        });
    }
    let shift = Scale::new(scale.exponent() - value.exponent).factor();
    let scaled = &value.mantissa * shift;
    let modulus: BigUint = Fr::MODULUS.into();
    if scaled >= modulus {
        return Err(CodecError::Overflow {
            value: value.to_string(),
            decimals: scale.exponent(),
        });
    }
    Ok(Fr::from(scaled))
}

/// Inverse of [`encode`]: the canonical integer of `fe`, divided by `10^scale`.
pub fn decode(fe: &Fr, scale: Scale) -> Decimal {
    let integer: BigUint = (*fe).into();
    Decimal::new(integer, scale.exponent())
}
