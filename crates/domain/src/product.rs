//! # 商品
//!
//! 協同組合の商品カタログに登録される商品エンティティと、その入力検証を定義する。
//!
//! ## 検証の流れ
//!
//! ```text
//! ProductInput（未検証） ──validate──▶ ProductDraft（検証済み、ID なし）
//!                                           │
//!                                ストアで ID を採番
//!                                           ▼
//!                                     Product（ID あり）
//! ```
//!
//! 検証はフィールドごとに行い、違反したフィールドそれぞれについて
//! 最初に違反したルールを [`ValidationErrors`] にまとめて返す。
//!
//! ## 使用例
//!
//! ```rust
//! use coopmarket_domain::product::{Product, ProductId, ProductInput, validate};
//!
//! let draft = validate(ProductInput {
//!     name:       "  Arroz integral ".to_string(),
//!     price:      "10.005".to_string(),
//!     categories: vec!["Granos".to_string()],
//! })
//! .unwrap();
//!
//! let product = Product::new(ProductId::new(), draft);
//! assert_eq!(product.name().as_str(), "Arroz integral");
//! assert_eq!(product.price().to_string(), "10.01");
//! ```

mod price;

pub use price::{MAX_PRICE_DIGITS, PRICE_SCALE, Price};
use serde::Serialize;

use crate::{ValidationError, ValidationErrors, category::Categories};

define_uuid_id! {
    /// 商品の一意識別子
    ///
    /// 作成時にシステムが採番し、以後変更されない。呼び出し元が指定することはない。
    pub struct ProductId;
}

// =========================================================================
// ProductName（商品名）
// =========================================================================

/// 商品名の最小文字数
pub const NAME_MIN_LENGTH: usize = 3;

/// 商品名の最大文字数
pub const NAME_MAX_LENGTH: usize = 60;

/// 商品名（値オブジェクト）
///
/// 前後の空白を除いた 3〜60 文字。文字数は `chars().count()` で数える。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into().trim().to_string();
        let length = value.chars().count();

        if value.is_empty() {
            return Err(ValidationError::NameBlank);
        }

        if length < NAME_MIN_LENGTH {
            return Err(ValidationError::NameTooShort {
                min:    NAME_MIN_LENGTH,
                actual: length,
            });
        }

        if length > NAME_MAX_LENGTH {
            return Err(ValidationError::NameTooLong {
                max:    NAME_MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// ProductInput / ProductDraft（入力と検証済みフィールド）
// =========================================================================

/// 未検証の商品入力
///
/// 価格はテキスト表現で受け取る。JSON の数値は HTTP 層で
/// 浮動小数点演算を経由せずに文字列化してから渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub name:       String,
    pub price:      String,
    pub categories: Vec<String>,
}

/// 検証済みの商品フィールド一式（ID なし）
///
/// [`validate`] を通してのみ作成できる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    name:       ProductName,
    price:      Price,
    categories: Categories,
}

impl ProductDraft {
    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }
}

/// 未検証の入力を検証し、正規化されたフィールド一式を返す
///
/// 副作用はない。カタログ以外の外部状態を参照しない。
pub fn validate(input: ProductInput) -> Result<ProductDraft, ValidationErrors> {
    let name = ProductName::new(input.name);
    let price = Price::parse(&input.price);
    let categories = Categories::new(&input.categories);

    match (name, price, categories) {
        (Ok(name), Ok(price), Ok(categories)) => Ok(ProductDraft {
            name,
            price,
            categories,
        }),
        (name, price, categories) => {
            let errors = [name.err(), price.err(), categories.err()]
                .into_iter()
                .flatten()
                .collect();
            Err(ValidationErrors::from_vec(errors)
                .expect("少なくとも 1 つのフィールドが Err であるべき"))
        }
    }
}

// =========================================================================
// Product（商品エンティティ）
// =========================================================================

/// 商品エンティティ
///
/// # 不変条件
///
/// - `id` はストア内で一意
/// - `price` は正で、小数点以下ちょうど 2 桁
/// - `categories` は 1 件以上、重複なし、すべてカタログに含まれる
/// - `name` は trim 後に空でない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id:         ProductId,
    name:       ProductName,
    price:      Price,
    categories: Categories,
}

impl Product {
    /// ID と検証済みフィールドから商品を組み立てる
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            categories: draft.categories,
        }
    }

    /// フィールド一式を置き換えた新しい商品を返す（ID は維持）
    pub fn replaced_with(self, draft: ProductDraft) -> Self {
        Self::new(self.id, draft)
    }

    // Getter メソッド

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::{
        category::Category,
        error::{FIELD_CATEGORIES, FIELD_NAME, FIELD_PRICE},
    };

    #[fixture]
    fn valid_input() -> ProductInput {
        ProductInput {
            name:       "Miel de abeja".to_string(),
            price:      "5.999".to_string(),
            categories: vec!["Organicos".to_string(), "OFERTAS".to_string()],
        }
    }

    // =========================================================================
    // ProductName のテスト
    // =========================================================================

    #[test]
    fn test_商品名は3文字を受け入れる() {
        assert_eq!(ProductName::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_商品名は2文字を拒否する() {
        assert_eq!(
            ProductName::new("ab"),
            Err(ValidationError::NameTooShort { min: 3, actual: 2 })
        );
    }

    #[test]
    fn test_商品名は前後の空白をトリミングしてから数える() {
        assert_eq!(
            ProductName::new("  ab  "),
            Err(ValidationError::NameTooShort { min: 3, actual: 2 })
        );
        assert_eq!(ProductName::new("  café  ").unwrap().as_str(), "café");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_商品名は空白のみを拒否する(#[case] raw: &str) {
        assert_eq!(ProductName::new(raw), Err(ValidationError::NameBlank));
    }

    #[test]
    fn test_商品名は60文字以内を受け入れる() {
        assert!(ProductName::new("ñ".repeat(60)).is_ok());
    }

    #[test]
    fn test_商品名は60文字超を拒否する() {
        assert_eq!(
            ProductName::new("a".repeat(61)),
            Err(ValidationError::NameTooLong {
                max:    60,
                actual: 61,
            })
        );
    }

    // =========================================================================
    // validate のテスト
    // =========================================================================

    #[rstest]
    fn test_正常な入力を正規化する(valid_input: ProductInput) {
        let draft = validate(valid_input).unwrap();

        assert_eq!(draft.name().as_str(), "Miel de abeja");
        assert_eq!(draft.price().to_string(), "6.00");
        assert_eq!(
            draft.categories().as_slice(),
            &[Category::Organicos, Category::Ofertas]
        );
    }

    #[rstest]
    fn test_違反したフィールドごとにエラーを1件ずつ返す(valid_input: ProductInput) {
        let input = ProductInput {
            name: "ab".to_string(),
            price: "-3".to_string(),
            ..valid_input
        };

        let errors = validate(input).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.for_field(FIELD_NAME),
            Some(&ValidationError::NameTooShort { min: 3, actual: 2 })
        );
        assert_eq!(
            errors.for_field(FIELD_PRICE),
            Some(&ValidationError::PriceNotPositive)
        );
        assert_eq!(errors.for_field(FIELD_CATEGORIES), None);
    }

    #[test]
    fn test_エラーは名前_価格_カテゴリの順に並ぶ() {
        let input = ProductInput {
            name:       "".to_string(),
            price:      "abc".to_string(),
            categories: vec!["marcianos".to_string()],
        };

        let fields: Vec<&str> = validate(input).unwrap_err().iter().map(|e| e.field()).collect();

        assert_eq!(fields, vec!["nombre", "precio", "categorias"]);
    }

    #[rstest]
    fn test_カタログ外カテゴリは違反値を列挙する(valid_input: ProductInput) {
        let input = ProductInput {
            categories: vec!["granos".to_string(), "marcianos".to_string()],
            ..valid_input
        };

        let errors = validate(input).unwrap_err();

        assert_eq!(
            errors.first(),
            &ValidationError::UnknownCategories {
                labels: vec!["marcianos".to_string()],
            }
        );
    }

    // =========================================================================
    // Product のテスト
    // =========================================================================

    #[rstest]
    fn test_置き換え後もidは変わらない(valid_input: ProductInput) {
        let id = ProductId::new();
        let product = Product::new(id, validate(valid_input).unwrap());

        let replacement = validate(ProductInput {
            name:       "Queso fresco".to_string(),
            price:      "3.2".to_string(),
            categories: vec!["lacteos".to_string()],
        })
        .unwrap();
        let replaced = product.replaced_with(replacement);

        assert_eq!(replaced.id(), &id);
        assert_eq!(replaced.name().as_str(), "Queso fresco");
        assert_eq!(replaced.price().to_string(), "3.20");
    }

    #[test]
    fn test_idは文字列表現から復元できる() {
        let id = ProductId::new();

        let parsed: ProductId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
        assert!("no-es-un-uuid".parse::<ProductId>().is_err());
    }
}
