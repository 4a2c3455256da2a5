//! 商品管理ユースケース

use std::sync::Arc;

use coopmarket_domain::product::{Product, ProductId, ProductInput, validate};
use coopmarket_infra::repository::ProductRepository;

use crate::error::CoreError;

/// 商品管理ユースケース
pub struct ProductUseCaseImpl {
    product_repository: Arc<dyn ProductRepository>,
}

impl ProductUseCaseImpl {
    pub fn new(product_repository: Arc<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// 商品を登録する
    ///
    /// 1. 入力を検証・正規化
    /// 2. ストアで ID を採番して保存
    pub async fn create_product(&self, input: ProductInput) -> Result<Product, CoreError> {
        let draft = validate(input).inspect_err(|errors| {
            tracing::info!(action = "create", %errors, "商品入力の検証に失敗しました");
        })?;

        let product = self.product_repository.insert(draft).await?;

        tracing::info!(product_id = %product.id(), action = "create", "商品を登録しました");
        Ok(product)
    }

    /// 全商品を取得する
    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.product_repository.find_all().await?)
    }

    /// 商品を取得する
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, CoreError> {
        Ok(self.product_repository.find_by_id(id).await?)
    }

    /// 商品のフィールド一式を置き換える
    ///
    /// 入力の検証を先に行うため、不正な入力は ID の存在に関係なく検証エラーになる。
    pub async fn update_product(
        &self,
        id: &ProductId,
        input: ProductInput,
    ) -> Result<Product, CoreError> {
        let draft = validate(input).inspect_err(|errors| {
            tracing::info!(product_id = %id, action = "update", %errors, "商品入力の検証に失敗しました");
        })?;

        let product = self.product_repository.replace(id, draft).await?;

        tracing::info!(product_id = %id, action = "update", "商品を更新しました");
        Ok(product)
    }

    /// 商品を削除する
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), CoreError> {
        self.product_repository.delete(id).await?;

        tracing::info!(product_id = %id, action = "delete", "商品を削除しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use coopmarket_domain::ValidationError;
    use coopmarket_infra::repository::InMemoryProductRepository;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn sut() -> ProductUseCaseImpl {
        ProductUseCaseImpl::new(Arc::new(InMemoryProductRepository::new()))
    }

    fn input(name: &str, price: &str, categories: &[&str]) -> ProductInput {
        ProductInput {
            name:       name.to_string(),
            price:      price.to_string(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_登録した商品を再取得すると同じ値になる(sut: ProductUseCaseImpl) {
        let created = sut
            .create_product(input("Miel de abeja", "5.999", &["Organicos", "OFERTAS"]))
            .await
            .unwrap();

        let fetched = sut.get_product(created.id()).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(created.price().to_string(), "6.00");
        assert_eq!(created.categories().labels(), vec!["organicos", "ofertas"]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_不正な入力は保存されない(sut: ProductUseCaseImpl) {
        let result = sut
            .create_product(input("Miel", "1", &["granos", "Granos "]))
            .await;

        let Err(CoreError::Validation(errors)) = result else {
            panic!("検証エラーになるはず: {result:?}");
        };
        assert_eq!(
            errors.first(),
            &ValidationError::DuplicatedCategory {
                label: "granos".to_string(),
            }
        );
        assert!(sut.list_products().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しない商品の更新はnot_found(sut: ProductUseCaseImpl) {
        let result = sut
            .update_product(&ProductId::new(), input("Queso", "2", &["lacteos"]))
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_更新の検証エラーは存在確認より優先される(sut: ProductUseCaseImpl) {
        let result = sut
            .update_product(&ProductId::new(), input("ab", "2", &["lacteos"]))
            .await;

        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_削除した商品は取得できない(sut: ProductUseCaseImpl) {
        let created = sut
            .create_product(input("Leche", "1.5", &["lacteos"]))
            .await
            .unwrap();

        sut.delete_product(created.id()).await.unwrap();

        assert!(matches!(
            sut.get_product(created.id()).await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            sut.delete_product(created.id()).await,
            Err(CoreError::NotFound(_))
        ));
    }
}
