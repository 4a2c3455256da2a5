//! # ProductRepository
//!
//! 商品の保持を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: 呼び出し元は検証済みフィールド一式（[`ProductDraft`]）のみを渡す
//! - **存在しない ID は NotFound**: 置き換え・取得・削除で [`InfraError::not_found`] を返す
//! - **挿入順の保持**: 一覧は挿入順で返す（ただし呼び出し元は順序に意味を持たせないこと）
//!
//! ## 並行性
//!
//! [`InMemoryProductRepository`] は単一の `RwLock` で内部状態を保護する。
//! 挿入・置き換え・削除は書き込みロックで直列化され、更新の消失は起きない。
//! 取得・一覧は読み取りロック下で複製を返すため、書き込み途中の状態は観測されない。

use std::collections::HashMap;

use async_trait::async_trait;
use coopmarket_domain::product::{Product, ProductDraft, ProductId};
use tokio::sync::RwLock;

use crate::error::InfraError;

/// エラーメッセージ用のエンティティ名
const ENTITY: &str = "Product";

/// 商品リポジトリトレイト
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 新しい ID を採番して商品を保存し、保存した値を返す
    async fn insert(&self, draft: ProductDraft) -> Result<Product, InfraError>;

    /// 既存商品のフィールド一式を置き換える（ID は変わらない）
    async fn replace(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, InfraError>;

    /// ID で商品を取得する
    async fn find_by_id(&self, id: &ProductId) -> Result<Product, InfraError>;

    /// すべての商品を取得する
    async fn find_all(&self) -> Result<Vec<Product>, InfraError>;

    /// 商品を削除する
    async fn delete(&self, id: &ProductId) -> Result<(), InfraError>;
}

/// ストアの内部状態
#[derive(Debug, Default)]
struct ProductTable {
    products: HashMap<ProductId, Product>,
    /// 挿入順
    order:    Vec<ProductId>,
}

impl ProductTable {
    /// 既存の ID と衝突しない ID を採番する
    ///
    /// UUID v4 の衝突確率は無視できるが、万一衝突した場合は採番し直す。
    fn next_id(&self) -> ProductId {
        loop {
            let id = ProductId::new();
            if !self.products.contains_key(&id) {
                return id;
            }
        }
    }
}

/// プロセス内メモリ実装の ProductRepository
///
/// 永続化はしない。プロセス終了とともに内容は失われる。
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: RwLock<ProductTable>,
}

impl InMemoryProductRepository {
    /// 空のリポジトリを作成する
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, draft: ProductDraft) -> Result<Product, InfraError> {
        let mut table = self.table.write().await;

        let id = table.next_id();
        let product = Product::new(id, draft);
        table.products.insert(id, product.clone());
        table.order.push(id);

        tracing::debug!(product_id = %id, "商品を挿入しました");
        Ok(product)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn replace(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, InfraError> {
        let mut table = self.table.write().await;

        let Some(current) = table.products.remove(id) else {
            return Err(InfraError::not_found(ENTITY, id.to_string()));
        };
        let replaced = current.replaced_with(draft);
        table.products.insert(*id, replaced.clone());

        Ok(replaced)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &ProductId) -> Result<Product, InfraError> {
        self.table
            .read()
            .await
            .products
            .get(id)
            .cloned()
            .ok_or_else(|| InfraError::not_found(ENTITY, id.to_string()))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Product>, InfraError> {
        let table = self.table.read().await;

        Ok(table
            .order
            .iter()
            .filter_map(|id| table.products.get(id))
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &ProductId) -> Result<(), InfraError> {
        let mut table = self.table.write().await;

        if table.products.remove(id).is_none() {
            return Err(InfraError::not_found(ENTITY, id.to_string()));
        }
        table.order.retain(|existing| existing != id);

        Ok(())
    }
}
