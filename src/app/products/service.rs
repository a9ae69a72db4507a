//! 产品业务服务
//!
//! 每个操作只获取一次锁，在锁内完成一次完整的读-改-写。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use validator::Validate;

use super::model::{Product, ProductId, ProductPayload};
use super::store::ProductStore;
use crate::common::{ActionResult, CoreError};

/// 新建产品后返回给调用方的资源地址
pub fn product_location(id: ProductId) -> String {
    format!("/api/products/GetProductById/{}", id)
}

#[derive(Clone, Default)]
pub struct ProductService {
    store: Arc<Mutex<ProductStore>>,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    // 存储里只有普通数据，持锁线程 panic 后继续使用不会破坏任何不变量
    fn store(&self) -> MutexGuard<'_, ProductStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn count(&self) -> usize {
        self.store().len()
    }

    pub fn list_all(&self) -> ActionResult<Vec<Product>> {
        ActionResult::Ok(self.store().all())
    }

    pub fn get_by_id(&self, id: ProductId) -> ActionResult<Product> {
        match self.store().find_by_id(id) {
            Some(product) => ActionResult::Ok(product.clone()),
            None => {
                debug!("产品 {} 不存在", id);
                CoreError::product_not_found(id).into()
            }
        }
    }

    pub fn create(&self, payload: ProductPayload) -> ActionResult<Product> {
        if let Err(errors) = payload.validate() {
            warn!("创建产品校验失败: {}", errors);
            return CoreError::from(errors).into();
        }

        let product = Product {
            id: 0,
            name: payload.name.unwrap_or_default(),
            price: payload.price,
        };
        let created = self.store().insert(product);
        info!("创建产品: {} ({})", created.name, created.id);

        let location = product_location(created.id);
        ActionResult::Created(created, location)
    }

    /// 全量更新：无条件覆盖 name 和 price
    pub fn update(&self, id: ProductId, payload: ProductPayload) -> ActionResult<Product> {
        if let Err(errors) = payload.validate() {
            warn!("更新产品 {} 校验失败: {}", id, errors);
            return CoreError::from(errors).into();
        }

        let name = payload.name.unwrap_or_default();
        let price = payload.price;
        let updated = self.store().update(id, |product| {
            product.name = name;
            product.price = price;
        });

        match updated {
            Some(product) => {
                info!("更新产品: {}", id);
                ActionResult::Ok(product)
            }
            None => CoreError::product_not_found(id).into(),
        }
    }

    /// 部分更新：name 非空才覆盖，price 非零才覆盖，不做校验
    pub fn patch(&self, id: ProductId, payload: ProductPayload) -> ActionResult<Product> {
        let updated = self.store().update(id, |product| {
            if let Some(name) = payload.name.filter(|name| !name.is_empty()) {
                product.name = name;
            }
            if payload.price != Decimal::ZERO {
                product.price = payload.price;
            }
        });

        match updated {
            Some(product) => {
                info!("部分更新产品: {}", id);
                ActionResult::Ok(product)
            }
            None => CoreError::product_not_found(id).into(),
        }
    }

    pub fn delete(&self, id: ProductId) -> ActionResult<()> {
        match self.store().remove(id) {
            Some(product) => {
                info!("删除产品: {} ({})", product.name, id);
                ActionResult::NoContent
            }
            None => CoreError::product_not_found(id).into(),
        }
    }

    pub fn list_by_name(&self, name: &str) -> ActionResult<Vec<Product>> {
        ActionResult::Ok(self.store().filter_by_name_contains(name))
    }
}
