//! # 価格（値オブジェクト）
//!
//! 金額は 2 進浮動小数点を経由せず、`rust_decimal::Decimal` で正確に扱う。

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::ValidationError;

/// 保存時の小数点以下桁数
pub const PRICE_SCALE: u32 = 2;

/// 丸め前に許容する最大桁数
pub const MAX_PRICE_DIGITS: u32 = 10;

/// 価格（値オブジェクト）
///
/// # 不変条件
///
/// - 0 より大きい
/// - 小数点以下はちょうど 2 桁
///
/// # 使用例
///
/// ```rust
/// use coopmarket_domain::product::Price;
///
/// assert_eq!(Price::parse("10.005").unwrap().to_string(), "10.01");
/// assert_eq!(Price::parse("10.004").unwrap().to_string(), "10.00");
/// assert_eq!(Price::parse("7").unwrap().to_string(), "7.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// 文字列表現から価格を作成する
    ///
    /// 通常表記（`"5.999"`）と指数表記（`"1.5e2"`）を受け付ける。
    ///
    /// 1. 10 進数として解釈できること
    /// 2. 0 より大きいこと
    /// 3. 丸め前の有効桁数が 10 桁以下であること
    /// 4. 整数部が 8 桁以下であること（小数部 2 桁と合わせて 10 桁に収まる）
    /// 5. 小数点以下 2 桁に四捨五入（0.5 は絶対値が大きい側へ）
    /// 6. 丸めた結果が 0.00 にならないこと
    ///
    /// 3 と 4 を満たす値は丸めても整数部が 9 桁に繰り上がらない。
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let text = raw.trim();
        let value = Decimal::from_str_exact(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| ValidationError::PriceNotANumber {
                raw: raw.to_string(),
            })?;

        Self::from_decimal(value)
    }

    /// 10 進数値から価格を作成する
    ///
    /// 検証と丸めの規則は [`Price::parse`] と同じ。
    pub fn from_decimal(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::PriceNotPositive);
        }

        let digits = significant_digits(value);
        if digits > MAX_PRICE_DIGITS {
            return Err(ValidationError::PriceTooManyDigits {
                max:    MAX_PRICE_DIGITS,
                actual: digits,
            });
        }
        check_integer_digits(value)?;

        let mut rounded =
            value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            return Err(ValidationError::PriceNotPositive);
        }
        // round_dp は桁数を増やさないため、整数や 1 桁小数もここで 2 桁に揃える
        rounded.rescale(PRICE_SCALE);

        Ok(Self(rounded))
    }

    /// 内部の 10 進数値を取得する
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 整数部の桁数が保存形式（小数部 2 桁込みで 10 桁）に収まるか検査する
fn check_integer_digits(value: Decimal) -> Result<(), ValidationError> {
    let integer_digits = integer_digits(value);
    if integer_digits > MAX_PRICE_DIGITS - PRICE_SCALE {
        return Err(ValidationError::PriceTooManyDigits {
            max:    MAX_PRICE_DIGITS,
            actual: integer_digits + PRICE_SCALE,
        });
    }
    Ok(())
}

/// 整数部の桁数（0.xx は 0 桁）
fn integer_digits(value: Decimal) -> u32 {
    let integer = value.trunc().mantissa().unsigned_abs();
    integer.checked_ilog10().map_or(0, |log| log + 1)
}

/// 有効桁数を数える
///
/// 小数部末尾の 0 は数えない。整数部の先頭の 0 も数えないが、
/// `0.005` のような値は小数点以下の桁数（3）を桁数とする。
fn significant_digits(value: Decimal) -> u32 {
    let normalized = value.normalize();
    let mantissa = normalized.mantissa().unsigned_abs();
    let mantissa_digits = mantissa.checked_ilog10().map_or(1, |log| log + 1);
    mantissa_digits.max(normalized.scale())
}
