//! # カテゴリハンドラ
//!
//! 受け付けるカテゴリの一覧を返す。
//!
//! ## エンドポイント
//!
//! - `GET /categorias-permitidas` - 許可カテゴリ（昇順）

use axum::Json;
use coopmarket_domain::category::Category;

/// GET /categorias-permitidas
///
/// 許可カテゴリを昇順で返す。
pub async fn list_allowed_categories() -> Json<Vec<&'static str>> {
    Json(Category::catalog())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_許可カテゴリは昇順で10件() {
        let Json(labels) = list_allowed_categories().await;

        assert_eq!(labels.len(), 10);
        assert_eq!(labels.first(), Some(&"bebidas"));
        assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
