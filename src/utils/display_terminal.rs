//! 서비스 레지스트리 조립 결과 출력
//!
//! [`WiringReport`]가 선택된 저장소와 조립된 리포지토리/서비스를 기록해 두었다가
//! 조립이 끝나면 한 번에 터미널로 출력합니다.
//!
//! ```text
//! ╔══════════════════════════════════════════════════╗
//! ║               🛒 SHOP SERVICES READY              ║
//! ╚══════════════════════════════════════════════════╝
//!    💾 Store: mongodb (shop_dev)
//!    📦 Repositories (2)
//!       ├─ MongoUserRepository: email_unique index ready
//!       └─ MongoProductRepository: OK
//!    🔧 Services (3)
//!       ├─ UserService
//!       ├─ ProductService
//!       └─ AuthenticationService
//! ```

const BOX_WIDTH: usize = 50;

/// 레지스트리 조립 기록
#[derive(Debug, Clone, Default)]
pub struct WiringReport {
    store: String,
    repositories: Vec<(&'static str, String)>,
    services: Vec<&'static str>,
}

impl WiringReport {
    pub fn new(store: impl Into<String>) -> Self {
        Self {
            store: store.into(),
            ..Self::default()
        }
    }

    pub fn repository(&mut self, name: &'static str, status: impl Into<String>) -> &mut Self {
        self.repositories.push((name, status.into()));
        self
    }

    pub fn service(&mut self, name: &'static str) -> &mut Self {
        self.services.push(name);
        self
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn component_count(&self) -> usize {
        self.repositories.len() + self.services.len()
    }

    /// 출력할 문자열을 만듭니다.
    pub fn render(&self) -> String {
        let border = "═".repeat(BOX_WIDTH);
        let mut lines = vec![
            format!("╔{}╗", border),
            format!("║{:^49}║", "🛒 SHOP SERVICES READY"),
            format!("╚{}╝", border),
            format!("   💾 Store: {}", self.store),
            format!("   📦 Repositories ({})", self.repositories.len()),
        ];

        let last = self.repositories.len().saturating_sub(1);
        lines.extend(self.repositories.iter().enumerate().map(|(i, (name, status))| {
            format!("      {} {}: {}", branch(i == last), name, status)
        }));

        lines.push(format!("   🔧 Services ({})", self.services.len()));
        let last = self.services.len().saturating_sub(1);
        lines.extend(
            self.services
                .iter()
                .enumerate()
                .map(|(i, name)| format!("      {} {}", branch(i == last), name)),
        );

        lines.join("\n")
    }

    pub fn print(&self) {
        println!();
        println!("{}", self.render());
        println!();
    }
}

fn branch(is_last: bool) -> &'static str {
    if is_last { "└─" } else { "├─" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_store_and_components() {
        let mut report = WiringReport::new("memory");
        report
            .repository("MemoryUserRepository", "OK")
            .repository("MemoryProductRepository", "OK")
            .service("UserService")
            .service("ProductService");

        let output = report.render();

        assert!(output.contains("Store: memory"));
        assert!(output.contains("Repositories (2)"));
        assert!(output.contains("├─ MemoryUserRepository: OK"));
        assert!(output.contains("└─ MemoryProductRepository: OK"));
        assert!(output.contains("Services (2)"));
        assert!(output.contains("└─ ProductService"));
        assert_eq!(report.component_count(), 4);
    }

    #[test]
    fn test_render_without_components() {
        let report = WiringReport::new("mongodb (shop_test)");
        let output = report.render();

        assert!(output.contains("Store: mongodb (shop_test)"));
        assert!(output.contains("Repositories (0)"));
        assert_eq!(report.component_count(), 0);
    }
}
