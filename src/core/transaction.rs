//! # 트랜잭션 경계
//!
//! 서비스 진입점마다 begin/commit/rollback 범위를 씌우는 스코프 자원입니다.
//! 저장소 구현체가 [`TransactionManager`]를 제공하고, 서비스는
//! [`run_in_transaction`]으로 자신의 작업을 감쌉니다.
//!
//! ```text
//! begin ──▶ work.await ──┬─ Ok  ──▶ commit
//!                        └─ Err ──▶ rollback
//! (drop without either)  ──────────▶ rollback (Drop)
//! ```

use std::future::Future;

use async_trait::async_trait;

use crate::core::errors::AppResult;

/// 진행 중인 하나의 트랜잭션
///
/// 구현체는 commit/rollback 어느 쪽도 호출되지 않은 채 drop 되면
/// rollback 과 동일하게 동작해야 합니다.
#[async_trait]
pub trait Transaction: Send {
    async fn commit(self: Box<Self>) -> AppResult<()>;

    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// 트랜잭션을 시작하는 저장소 측 구성 요소
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> AppResult<Box<dyn Transaction>>;
}

/// `work`를 하나의 트랜잭션 안에서 실행합니다.
///
/// `work`가 `Ok`를 반환하면 commit, `Err`를 반환하면 rollback 후
/// 원래 에러를 그대로 돌려줍니다. rollback 자체의 실패는 로그로만 남깁니다.
///
/// # Examples
///
/// ```rust,ignore
/// pub async fn get_product(&self, id: i64) -> AppResult<Product> {
///     run_in_transaction(self.tx.as_ref(), self.find_product(id)).await
/// }
/// ```
pub async fn run_in_transaction<T, F>(manager: &dyn TransactionManager, work: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    let tx = manager.begin().await?;

    match work.await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                log::error!("트랜잭션 롤백 실패: {}", rollback_err);
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counters {
        begun: AtomicUsize,
        committed: AtomicUsize,
        rolled_back: AtomicUsize,
    }

    struct CountingManager(Arc<Counters>);

    struct CountingTransaction(Arc<Counters>);

    #[async_trait]
    impl Transaction for CountingTransaction {
        async fn commit(self: Box<Self>) -> AppResult<()> {
            self.0.committed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> AppResult<()> {
            self.0.rolled_back.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[async_trait]
    impl TransactionManager for CountingManager {
        async fn begin(&self) -> AppResult<Box<dyn Transaction>> {
            self.0.begun.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(CountingTransaction(self.0.clone())))
        }
    }

    #[actix_web::test]
    async fn test_commit_on_success() {
        let counters = Arc::new(Counters::default());
        let manager = CountingManager(counters.clone());

        let value = run_in_transaction(&manager, async { Ok::<_, AppError>(42) })
            .await
            .unwrap();

        assert_eq!(value, 42);
        assert_eq!(counters.begun.load(Ordering::SeqCst), 1);
        assert_eq!(counters.committed.load(Ordering::SeqCst), 1);
        assert_eq!(counters.rolled_back.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_rollback_on_error_keeps_original_error() {
        let counters = Arc::new(Counters::default());
        let manager = CountingManager(counters.clone());

        let result: AppResult<()> =
            run_in_transaction(&manager, async { Err(AppError::ProductNotFound(7)) }).await;

        assert!(matches!(result, Err(AppError::ProductNotFound(7))));
        assert_eq!(counters.committed.load(Ordering::SeqCst), 0);
        assert_eq!(counters.rolled_back.load(Ordering::SeqCst), 1);
    }
}
