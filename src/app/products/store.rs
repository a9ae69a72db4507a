//! 产品内存存储
//!
//! 按插入顺序保存产品，所有查找都是线性扫描。存储本身不加锁，
//! 并发访问由上层 `ProductService` 的互斥锁保证。

use serde::{Deserialize, Serialize};

use super::model::{Product, ProductId};

/// 新建产品时的 ID 分配策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdAssignment {
    /// `id = 当前数量 + 1`，删除后再创建可能与现有 ID 重复
    #[default]
    CountPlusOne,
    /// 已分配过的最大 ID + 1，永不复用
    Monotonic,
}

#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    id_assignment: IdAssignment,
    last_issued: ProductId,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_assignment(id_assignment: IdAssignment) -> Self {
        Self {
            id_assignment,
            ..Self::default()
        }
    }

    pub fn id_assignment(&self) -> IdAssignment {
        self.id_assignment
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// 分配 ID 后追加到末尾，返回存入的记录
    pub fn insert(&mut self, mut product: Product) -> Product {
        product.id = self.next_id();
        self.last_issued = self.last_issued.max(product.id);
        self.products.push(product.clone());
        product
    }

    /// 删除第一条匹配的记录，其余记录及其 ID 不变
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// 原地修改第一条匹配的记录，返回修改后的副本
    pub fn update<F>(&mut self, id: ProductId, apply: F) -> Option<Product>
    where
        F: FnOnce(&mut Product),
    {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        apply(product);
        Some(product.clone())
    }

    pub fn all(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// 名称包含子串（忽略大小写）的记录，空串匹配全部
    pub fn filter_by_name_contains(&self, substring: &str) -> Vec<Product> {
        let needle = substring.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn next_id(&self) -> ProductId {
        match self.id_assignment {
            IdAssignment::CountPlusOne => self.products.len() as ProductId + 1,
            IdAssignment::Monotonic => self.last_issued + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(name: &str, price: i64) -> Product {
        Product {
            id: 0,
            name: name.to_string(),
            price: Decimal::from(price),
        }
    }

    #[test]
    fn test_insert_assigns_count_plus_one() {
        let mut store = ProductStore::new();
        assert_eq!(store.insert(product("Pen", 1)).id, 1);
        assert_eq!(store.insert(product("Cup", 3)).id, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(2).map(|p| p.name.as_str()), Some("Cup"));
    }

    #[test]
    fn test_count_plus_one_reuses_id_after_delete() {
        let mut store = ProductStore::new();
        store.insert(product("Pen", 1));
        store.insert(product("Cup", 3));
        assert!(store.remove(1).is_some());

        let bowl = store.insert(product("Bowl", 2));
        assert_eq!(bowl.id, 2);

        // 两条记录共享 ID 2，查找返回最先插入的那条
        let ids: Vec<_> = store.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 2]);
        assert_eq!(store.find_by_id(2).map(|p| p.name.as_str()), Some("Cup"));
    }

    #[test]
    fn test_monotonic_never_reuses_ids() {
        let mut store = ProductStore::with_id_assignment(IdAssignment::Monotonic);
        store.insert(product("Pen", 1));
        store.insert(product("Cup", 3));
        store.remove(1);
        store.remove(2);
        assert!(store.is_empty());

        assert_eq!(store.insert(product("Bowl", 2)).id, 3);
    }

    #[test]
    fn test_remove_keeps_other_records() {
        let mut store = ProductStore::new();
        for name in ["a", "b", "c"] {
            store.insert(product(name, 1));
        }

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name, "b");
        assert!(store.remove(2).is_none());

        let remaining: Vec<_> = store.all().into_iter().map(|p| (p.id, p.name)).collect();
        assert_eq!(remaining, vec![(1, "a".to_string()), (3, "c".to_string())]);
    }

    #[test]
    fn test_update_missing_id_is_none() {
        let mut store = ProductStore::new();
        store.insert(product("Pen", 1));
        assert!(store.update(5, |p| p.name = "x".into()).is_none());
        assert_eq!(store.find_by_id(1).unwrap().name, "Pen");

        let updated = store.update(1, |p| p.price = Decimal::from(9)).unwrap();
        assert_eq!(updated.price, Decimal::from(9));
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive() {
        let mut store = ProductStore::new();
        store.insert(product("abcdef", 1));
        store.insert(product("Other", 1));

        let hits = store.filter_by_name_contains("ABC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "abcdef");

        assert_eq!(store.filter_by_name_contains("").len(), 2);
        assert!(store.filter_by_name_contains("zzz").is_empty());
    }
}
