//! # カテゴリカタログ
//!
//! 商品に付与できるカテゴリの固定集合（カタログ）と、
//! 商品ごとのカテゴリリスト（値オブジェクト）を定義する。
//!
//! カタログはビルド時に固定され、プロセスの生存期間中は変更されない。
//!
//! ## 使用例
//!
//! ```rust
//! use coopmarket_domain::category::{Categories, Category};
//!
//! let categories = Categories::new(&[" Granos ".to_string(), "FRUTAS".to_string()]).unwrap();
//! assert_eq!(categories.as_slice(), &[Category::Granos, Category::Frutas]);
//!
//! assert_eq!(Category::catalog()[0], "bebidas");
//! ```

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::ValidationError;

/// 1 商品あたりの最小カテゴリ数（正規化前のリスト長で判定）
pub const MIN_CATEGORIES: usize = 1;

/// 1 商品あたりの最大カテゴリ数（正規化前のリスト長で判定）
pub const MAX_CATEGORIES: usize = 10;

// =========================================================================
// Category（カタログ）
// =========================================================================

/// カタログに登録されたカテゴリ
///
/// 文字列表現は小文字のラベル（例: `"granos"`）。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Granos,
    Frutas,
    Hortalizas,
    Lacteos,
    Carnes,
    Procesados,
    Organicos,
    Ofertas,
    Semillas,
    Bebidas,
}

impl Category {
    /// ラベル文字列を取得する
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// 正規化済みラベルからカテゴリを引く
    ///
    /// 大文字小文字や前後の空白は正規化しない。呼び出し側で正規化すること。
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// カタログ全体をアルファベット順で返す
    pub fn catalog() -> Vec<&'static str> {
        Self::iter().map(|c| c.as_str()).sorted_unstable().collect()
    }
}

// =========================================================================
// Categories（商品のカテゴリリスト）
// =========================================================================

/// 商品に付与されたカテゴリのリスト（値オブジェクト）
///
/// # 不変条件
///
/// - 1 件以上
/// - 重複なし
/// - すべてカタログに含まれる
/// - 入力で最初に現れた順序を保持する
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Categories(Vec<Category>);

impl Categories {
    /// 生のラベル列を検証・正規化してカテゴリリストを作成する
    ///
    /// 1. 正規化前のリスト長が 1〜10 件であること
    /// 2. 各ラベルを trim + 小文字化し、空になったものは除外
    /// 3. 1 件以上残ること
    /// 4. 重複がないこと
    /// 5. すべてカタログに含まれること（含まれないラベルはすべて報告する）
    pub fn new(raw: &[String]) -> Result<Self, ValidationError> {
        if !(MIN_CATEGORIES..=MAX_CATEGORIES).contains(&raw.len()) {
            return Err(ValidationError::CategoryCountOutOfRange {
                min:    MIN_CATEGORIES,
                max:    MAX_CATEGORIES,
                actual: raw.len(),
            });
        }

        let normalized: Vec<String> = raw
            .iter()
            .map(|label| label.trim().to_lowercase())
            .filter(|label| !label.is_empty())
            .collect();

        if normalized.is_empty() {
            return Err(ValidationError::NoValidCategory);
        }

        if let Some(label) = normalized.iter().duplicates().next() {
            return Err(ValidationError::DuplicatedCategory {
                label: label.clone(),
            });
        }

        let (known, unknown): (Vec<_>, Vec<_>) = normalized
            .into_iter()
            .map(|label| Category::from_label(&label).ok_or(label))
            .partition_result();

        if !unknown.is_empty() {
            return Err(ValidationError::UnknownCategories { labels: unknown });
        }

        Ok(Self(known))
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }

    /// ラベル文字列のリストに変換する
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_string()).collect()
    }
}
