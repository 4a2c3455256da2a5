//! # ドメイン層エラー定義
//!
//! 商品入力の検証で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **閉じた列挙型**: 検証ルールごとにバリアントを分け、パターンマッチで処理可能にする
//! - **フィールドと理由コード**: [`ValidationError::field`] と [`ValidationError::code`]
//!   で、呼び出し元が診断情報を組み立てられるようにする
//! - **フィールド単位の収集**: [`ValidationErrors`] はフィールドごとに最初の違反を 1 件ずつ保持する
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `ValidationErrors` | 422 Unprocessable Entity | 入力値の検証失敗 |
//!
//! 存在しない商品の参照（404）はストアの責務であり、インフラ層で表現する。

use std::fmt;

use strum::IntoStaticStr;
use thiserror::Error;

/// 商品名フィールド名（API の JSON キーと一致させる）
pub const FIELD_NAME: &str = "nombre";
/// 価格フィールド名
pub const FIELD_PRICE: &str = "precio";
/// カテゴリフィールド名
pub const FIELD_CATEGORIES: &str = "categorias";

/// 検証ルール違反
///
/// メッセージは API 利用者（組合員）向けにスペイン語で記述する。
/// 理由コードはバリアント名の kebab-case（例: `name-too-short`）。
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ValidationError {
    /// 前後の空白を除くと空になる
    #[error("El nombre no puede estar vacío")]
    NameBlank,

    #[error("El nombre debe tener al menos {min} caracteres (tiene {actual})")]
    NameTooShort { min: usize, actual: usize },

    #[error("El nombre debe tener como máximo {max} caracteres (tiene {actual})")]
    NameTooLong { max: usize, actual: usize },

    /// 10 進数として解釈できない
    #[error("El precio '{raw}' no es un número decimal válido")]
    PriceNotANumber { raw: String },

    /// 0 以下、または丸めた結果が 0.00 になる
    #[error("El precio debe ser mayor que cero")]
    PriceNotPositive,

    #[error("El precio no puede tener más de {max} dígitos (tiene {actual})")]
    PriceTooManyDigits { max: u32, actual: u32 },

    /// 正規化前のリスト長が範囲外
    #[error("Debe indicar entre {min} y {max} categorías (se recibieron {actual})")]
    CategoryCountOutOfRange {
        min:    usize,
        max:    usize,
        actual: usize,
    },

    /// 空白のみのエントリを除外した結果、何も残らない
    #[error("Debe incluir al menos una categoría válida")]
    NoValidCategory,

    #[error("Las categorías no deben repetirse: '{label}'")]
    DuplicatedCategory { label: String },

    /// カタログにないラベル（正規化後の値をすべて列挙する）
    #[error("Categorías no permitidas: {}", .labels.join(", "))]
    UnknownCategories { labels: Vec<String> },
}

impl ValidationError {
    /// 違反したフィールド名
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameBlank | Self::NameTooShort { .. } | Self::NameTooLong { .. } => FIELD_NAME,
            Self::PriceNotANumber { .. }
            | Self::PriceNotPositive
            | Self::PriceTooManyDigits { .. } => FIELD_PRICE,
            Self::CategoryCountOutOfRange { .. }
            | Self::NoValidCategory
            | Self::DuplicatedCategory { .. }
            | Self::UnknownCategories { .. } => FIELD_CATEGORIES,
        }
    }

    /// 機械可読な理由コード
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// 違反の原因となった値
    ///
    /// カタログ外カテゴリと重複カテゴリの場合のみ値を返す。
    pub fn offending_values(&self) -> Option<Vec<String>> {
        match self {
            Self::UnknownCategories { labels } => Some(labels.clone()),
            Self::DuplicatedCategory { label } => Some(vec![label.clone()]),
            _ => None,
        }
    }
}

/// 商品入力の検証エラー集合
///
/// 1 件以上の [`ValidationError`] を保持する。
/// 各フィールドにつき最初に違反したルールのみが含まれ、
/// 並び順は 名前 → 価格 → カテゴリ で固定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// 検証エラー集合を作成する
    ///
    /// 空の場合は `None` を返す（エラーのない「エラー集合」は存在しない）。
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// 最初のエラー
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    /// 指定フィールドのエラーを取得する
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {error}", error.field())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}
