//! 인메모리 저장소
//!
//! 사용자/상품 테이블을 프로세스 메모리에 보관합니다. 테스트와 로컬 개발용이며
//! `STORE_BACKEND=memory` 로 선택합니다.
//!
//! 트랜잭션은 비동기 뮤텍스로 서비스 호출을 직렬화하고, 시작 시점의 테이블
//! 스냅샷을 잡아 두었다가 rollback 시 복원합니다.
//!
//! 스냅샷은 조회를 포함한 모든 서비스 호출마다 두 테이블 전체를 복제하므로
//! 호출당 비용이 O(레코드 수)이고, 모든 요청이 하나의 뮤텍스 뒤에서 순서대로
//! 처리됩니다. 데이터가 많거나 동시 요청이 많은 운영 환경에서는 MongoDB 백엔드를 사용합니다.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{Transaction, TransactionManager};
use crate::domain::entities::products::product::Product;
use crate::domain::entities::users::user::User;

/// 저장소가 소유하는 테이블과 ID 시퀀스
#[derive(Debug, Clone, Default)]
pub struct MemoryTables {
    pub users: BTreeMap<i64, User>,
    pub products: BTreeMap<i64, Product>,
    user_sequence: i64,
    product_sequence: i64,
}

impl MemoryTables {
    pub fn next_user_id(&mut self) -> i64 {
        self.user_sequence += 1;
        self.user_sequence
    }

    pub fn next_product_id(&mut self) -> i64 {
        self.product_sequence += 1;
        self.product_sequence
    }
}

/// 여러 리포지토리가 공유하는 인메모리 저장소 핸들
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<MemoryTables>>,
    tx_lock: Arc<Mutex<()>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> AppResult<RwLockReadGuard<'_, MemoryTables>> {
        self.tables
            .read()
            .map_err(|e| AppError::DatabaseError(format!("저장소 잠금 실패: {}", e)))
    }

    pub fn write(&self) -> AppResult<RwLockWriteGuard<'_, MemoryTables>> {
        self.tables
            .write()
            .map_err(|e| AppError::DatabaseError(format!("저장소 잠금 실패: {}", e)))
    }
}

/// 진행 중인 인메모리 트랜잭션
///
/// `snapshot`이 남아 있는 채로 drop 되면 테이블을 스냅샷으로 되돌립니다.
pub struct MemoryTransaction {
    tables: Arc<RwLock<MemoryTables>>,
    snapshot: Option<MemoryTables>,
    _guard: OwnedMutexGuard<()>,
}

impl MemoryTransaction {
    fn restore(&mut self) -> AppResult<()> {
        if let Some(snapshot) = self.snapshot.take() {
            let mut tables = self
                .tables
                .write()
                .map_err(|e| AppError::DatabaseError(format!("저장소 잠금 실패: {}", e)))?;
            *tables = snapshot;
        }
        Ok(())
    }
}

#[async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        let mut tx = self;
        tx.snapshot = None;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let mut tx = self;
        tx.restore()
    }
}

impl Drop for MemoryTransaction {
    fn drop(&mut self) {
        if self.snapshot.is_some() {
            log::warn!("완료되지 않은 트랜잭션을 롤백합니다");
            if let Err(e) = self.restore() {
                log::error!("트랜잭션 롤백 실패: {}", e);
            }
        }
    }
}

#[async_trait]
impl TransactionManager for MemoryStore {
    async fn begin(&self) -> AppResult<Box<dyn Transaction>> {
        let guard = self.tx_lock.clone().lock_owned().await;
        let snapshot = self.read()?.clone();

        Ok(Box::new(MemoryTransaction {
            tables: self.tables.clone(),
            snapshot: Some(snapshot),
            _guard: guard,
        }))
    }
}
