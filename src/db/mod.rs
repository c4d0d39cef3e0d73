//! 저장소 백엔드
//!
//! - [`Database`] - MongoDB 연결 핸들 (운영 기본값)
//! - [`memory::MemoryStore`] - 프로세스 내부 테이블 (테스트, `STORE_BACKEND=memory`)
//!
//! 두 백엔드 모두 [`TransactionManager`]를 구현하여
//! 서비스 진입점의 트랜잭션 경계를 제공합니다.

pub mod memory;

use async_trait::async_trait;
use log::info;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Client;

use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::{Transaction, TransactionManager};

/// ID 시퀀스를 보관하는 컬렉션
const COUNTERS_COLLECTION: &str = "counters";

/// MongoDB 데이터베이스 핸들
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로 MongoDB 에 연결하고 ping 으로 연결을 확인합니다.
    ///
    /// # Errors
    ///
    /// * URI 파싱 실패, 연결 실패, ping 실패 시 `AppError::DatabaseError`
    pub async fn new() -> AppResult<Self> {
        let mongodb_uri = DatabaseConfig::mongodb_uri();
        let database_name = DatabaseConfig::database_name();

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some("shop_service".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// `name` 시퀀스의 다음 값을 원자적으로 발급합니다.
    ///
    /// `counters` 컬렉션의 `{ _id: name, seq }` 문서를 `$inc` 로 증가시키며,
    /// 문서가 없으면 upsert 로 만들어 1 부터 시작합니다.
    pub async fn next_sequence(&self, name: &str) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .get_database()
            .collection::<Document>(COUNTERS_COLLECTION)
            .find_one_and_update(doc! { "_id": name }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError(format!("시퀀스 발급 실패: {}", name)))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("시퀀스 값 형식 오류: {}", e)))
    }
}

/// MongoDB 트랜잭션 범위
///
/// 이 범위는 로그로 경계만 표시하며 쓰기를 되돌리지 않습니다. 수정/삭제는 문서
/// 한 건에 대한 단일 쓰기라 원자적으로 적용됩니다. 생성은 `next_sequence` 증가 후
/// `insert_one`을 수행하므로, 삽입이 실패하면 증가한 시퀀스는 그대로 남고 ID 에
/// 빈 번호가 생길 수 있습니다. 레코드 자체는 부분적으로 저장되지 않습니다.
pub struct MongoTransaction {
    database_name: String,
}

#[async_trait]
impl Transaction for MongoTransaction {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        log::debug!("트랜잭션 커밋: {}", self.database_name);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        log::debug!("트랜잭션 롤백: {}", self.database_name);
        Ok(())
    }
}

#[async_trait]
impl TransactionManager for Database {
    async fn begin(&self) -> AppResult<Box<dyn Transaction>> {
        log::debug!("트랜잭션 시작: {}", self.database_name);
        Ok(Box::new(MongoTransaction {
            database_name: self.database_name.clone(),
        }))
    }
}
