//! # Service Registry
//!
//! 저장소 백엔드를 고르고 리포지토리와 서비스를 한 번에 조립하는 컨테이너입니다.
//! 조립된 서비스는 `Arc`로 공유되며 [`ServiceRegistry::configure`]가 actix 앱
//! 데이터(`web::Data`)로 등록합니다.
//!
//! ## 조립 순서
//!
//! ```text
//! 1. 저장소 (MongoDB Database | MemoryStore)
//!    └─ TransactionManager 역할 겸임
//! 2. 리포지토리
//!    ├─ UserRepository
//!    └─ ProductRepository
//! 3. 서비스
//!    ├─ UserService            (user_repo, tx, bcrypt cost)
//!    ├─ ProductService         (product_repo, tx)
//!    └─ AuthenticationService  (user_repo, TokenCodec(secret), tx)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::mongo(Arc::new(Database::new().await?), &JwtConfig::secret(), 12).await?;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .configure(|cfg| registry.configure(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::core::errors::{AppError, AppResult};
use crate::core::transaction::TransactionManager;
use crate::db::memory::MemoryStore;
use crate::db::Database;
use crate::repositories::products::{MemoryProductRepository, MongoProductRepository, ProductRepository};
use crate::repositories::users::{MemoryUserRepository, MongoUserRepository, UserRepository};
use crate::services::auth::{AuthenticationService, TokenCodec};
use crate::services::products::ProductService;
use crate::services::users::UserService;
use crate::utils::display_terminal::WiringReport;

/// 조립이 끝난 서비스 묶음
#[derive(Clone)]
pub struct ServiceRegistry {
    users: Arc<UserService>,
    products: Arc<ProductService>,
    authentication: Arc<AuthenticationService>,
}

impl ServiceRegistry {
    /// 리포지토리와 트랜잭션 관리자로 서비스를 조립하고 조립 결과를 출력합니다.
    fn wire(
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        tx: Arc<dyn TransactionManager>,
        jwt_secret: &str,
        bcrypt_cost: u32,
        mut report: WiringReport,
    ) -> Self {
        let users = Arc::new(UserService::new(user_repo.clone(), tx.clone(), bcrypt_cost));
        report.service("UserService");

        let products = Arc::new(ProductService::new(product_repo, tx.clone()));
        report.service("ProductService");

        let authentication = Arc::new(AuthenticationService::new(
            user_repo,
            TokenCodec::new(jwt_secret),
            tx,
        ));
        report.service("AuthenticationService");

        log::info!(
            "서비스 레지스트리 조립 완료 - 저장소: {}, 컴포넌트: {}개",
            report.store(),
            report.component_count()
        );
        report.print();

        Self {
            users,
            products,
            authentication,
        }
    }

    /// 프로세스 메모리 저장소로 조립합니다. 테스트와 로컬 개발용입니다.
    pub fn in_memory(jwt_secret: &str, bcrypt_cost: u32) -> Self {
        let mut report = WiringReport::new("memory");

        let store = MemoryStore::new();
        let user_repo = Arc::new(MemoryUserRepository::new(store.clone()));
        report.repository("MemoryUserRepository", "OK");
        let product_repo = Arc::new(MemoryProductRepository::new(store.clone()));
        report.repository("MemoryProductRepository", "OK");

        Self::wire(user_repo, product_repo, Arc::new(store), jwt_secret, bcrypt_cost, report)
    }

    /// MongoDB 저장소로 조립합니다. 컬렉션 인덱스를 먼저 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - `users` 인덱스 생성 실패
    pub async fn mongo(db: Arc<Database>, jwt_secret: &str, bcrypt_cost: u32) -> AppResult<Self> {
        let mut report = WiringReport::new(format!("mongodb ({})", db.database_name()));

        let user_repo = Arc::new(MongoUserRepository::new(db.clone()));
        user_repo.create_indexes().await?;
        report.repository("MongoUserRepository", "email_unique index ready");

        let product_repo = Arc::new(MongoProductRepository::new(db.clone()));
        report.repository("MongoProductRepository", "OK");

        Ok(Self::wire(user_repo, product_repo, db, jwt_secret, bcrypt_cost, report))
    }

    pub fn users(&self) -> Arc<UserService> {
        self.users.clone()
    }

    pub fn products(&self) -> Arc<ProductService> {
        self.products.clone()
    }

    pub fn authentication(&self) -> Arc<AuthenticationService> {
        self.authentication.clone()
    }

    /// 서비스를 앱 데이터로 등록하고 JSON 본문 파싱 실패를 400 으로 매핑합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.users.clone()))
            .app_data(web::Data::from(self.products.clone()))
            .app_data(web::Data::from(self.authentication.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                log::debug!("요청 본문 파싱 실패: {}", err);
                AppError::ValidationError(err.to_string()).into()
            }));
    }
}
