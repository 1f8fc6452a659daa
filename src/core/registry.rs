//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! `#[service]`, `#[repository]` 매크로가 생성하는 등록 정보를 모아
//! 타입별 싱글톤 인스턴스를 지연 생성하고 공유합니다.
//!
//! ## 주요 구성 요소
//!
//! - **ServiceLocator**: 전역 DI 컨테이너. `TypeId` 별로 `Arc<T>`를 하나씩 보관합니다.
//! - **자동 레지스트리**: `inventory`로 컴파일 타임에 모든 등록 정보를 수집합니다.
//! - **인프라 등록**: `Database`, `RedisClient`처럼 매크로로 관리되지 않는 컴포넌트는
//!   시작 시점에 `ServiceLocator::set()`으로 직접 등록합니다.
//!
//! ## 동작 원리
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[service(name = "cart")]        → ServiceRegistration { "cart_service" }
//!    ├─ #[repository(name = "product")]  → RepositoryRegistration { "product_repository" }
//!    └─ inventory::collect!              → 전역 레지스트리
//!
//! 2. 런타임
//!    ├─ ServiceLocator::set(Arc<Database>), set(Arc<RedisClient>)
//!    ├─ ServiceLocator::initialize_all()  → 리포지토리, 서비스 순서로 생성
//!    └─ Arc<T> 필드 → ServiceLocator::get::<T>() → 캐시 또는 생성자 호출
//! ```
//!
//! ## 이름 규칙
//!
//! 타입 이름에서 `Service` / `Repository` 접미사를 떼고 소문자로 바꾼 값이
//! 등록 이름과 매칭됩니다. `ProductItemService`처럼 여러 단어로 된 타입은
//! `#[service(name = "productitem")]` 처럼 이름을 명시해야 합니다.
//!
//! ```rust,ignore
//! #[service(name = "cart")]
//! pub struct CartService {
//!     cart_repo: Arc<CartRepository>,
//!     product_repo: Arc<ProductRepository>,
//! }
//!
//! #[repository(name = "product", collection = "products")]
//! pub struct ProductRepository {
//!     db: Arc<Database>,
//! }
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 모든 `#[service]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름 (`{name}_service`)
    fn name(&self) -> &str;

    /// 서비스가 처음 생성된 후 호출되는 초기화 훅
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 모든 `#[repository]` 매크로가 적용된 구조체가 이 trait을 자동 구현합니다.
/// 매크로가 생성하는 캐시 키 헬퍼가 `name()`을 사용하므로
/// 리포지토리 파일에서는 이 trait을 import 해야 합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름 (`{name}_repository`)
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 데이터 액세스 초기화
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
///
/// `#[service]` 매크로에 의해 자동 생성되며 `inventory`로 수집됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수. `Box<Arc<T>>`를 반환합니다.
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용)
    pub name: &'static str,
    /// 인스턴스 생성 함수. `Box<Arc<T>>`를 반환합니다.
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 정규화된 서비스 이름 → 등록 정보
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (strip_registration_suffix(registration.name), registration))
        .collect();

    debug!("Service 이름 캐시 구성: {}개", cache.len());
    cache
});

/// 정규화된 리포지토리 이름 → 등록 정보
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (strip_registration_suffix(registration.name), registration))
        .collect();

    debug!("Repository 이름 캐시 구성: {}개", cache.len());
    cache
});

/// `cart_service`, `product_repository` 같은 등록 이름을 `cart`, `product`로 정규화합니다.
fn strip_registration_suffix(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// `commerce_backend::services::cart::CartService` → `CartService`
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 요청된 타입 이름이 어떤 레지스트리에서 찾아져야 하는지
#[derive(Debug, PartialEq)]
enum Lookup {
    Repository(String),
    Service(String),
}

impl Lookup {
    fn from_type_name(type_name: &str) -> Option<Self> {
        let short = short_type_name(type_name);

        if let Some(entity) = short.strip_suffix("Repository") {
            return Some(Lookup::Repository(entity.to_lowercase()));
        }
        if let Some(entity) = short.strip_suffix("Service") {
            return Some(Lookup::Service(entity.to_lowercase()));
        }
        None
    }
}

/// 싱글톤 의존성 주입 컨테이너
///
/// - **싱글톤 보장**: 각 타입당 하나의 인스턴스
/// - **지연 초기화**: 첫 요청 시점에 생성
/// - **순환 참조 감지**: 생성 중인 타입을 추적합니다
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    fn cached<T: 'static + Send + Sync>(&self) -> Option<Arc<T>> {
        let instances = self.instances.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 생성자는 잠금을 잡지 않은 상태에서 호출되므로, 생성자 안에서 다시
    /// `get()`으로 하위 의존성을 해결해도 교착 상태가 생기지 않습니다.
    ///
    /// # Panics
    ///
    /// - 순환 참조 (A → B → A)
    /// - 레지스트리에도 `set()`으로도 등록되지 않은 타입
    /// - 등록 이름은 같지만 타입이 다른 경우
    ///
    /// 모두 애플리케이션 조립 단계의 프로그래밍 오류이므로 시작 시점에 드러납니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = LOCATOR.cached::<T>() {
            return instance;
        }

        {
            let mut initializing = LOCATOR
                .initializing
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if !initializing.insert(type_id) {
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let created = Self::construct::<T>(type_name);

        let instance = {
            let mut instances = LOCATOR.instances.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            instances
                .entry(type_id)
                .or_insert_with(|| created.clone() as Arc<dyn Any + Send + Sync>)
                .clone()
        };

        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&type_id);

        match instance.downcast::<T>() {
            Ok(instance) => instance,
            Err(_) => panic!("Type mismatch in ServiceLocator for {}", type_name),
        }
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let (registration_name, boxed) = match Lookup::from_type_name(type_name) {
            Some(Lookup::Repository(entity)) => match REPOSITORY_NAME_CACHE.get(&entity) {
                Some(registration) => (registration.name, (registration.constructor)()),
                None => panic!("No repository found for entity: {}", entity),
            },
            Some(Lookup::Service(entity)) => match SERVICE_NAME_CACHE.get(&entity) {
                Some(registration) => (registration.name, (registration.constructor)()),
                None => panic!("No service found for entity: {}", entity),
            },
            None => panic!(
                "Service not found: {}. Register it with #[service] / #[repository] or ServiceLocator::set()",
                type_name
            ),
        };

        match boxed.downcast::<Arc<T>>() {
            Ok(instance) => {
                debug!("생성됨: {} ({})", short_type_name(type_name), registration_name);
                *instance
            }
            Err(_) => panic!("Type mismatch for registration: {}", registration_name),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 관리되지 않는 인프라 컴포넌트(Database, RedisClient)를
    /// 서비스 초기화 전에 등록할 때 사용합니다.
    ///
    /// ```rust,ignore
    /// ServiceLocator::set(Arc::new(Database::new().await?));
    /// ServiceLocator::set(Arc::new(RedisClient::new().await?));
    /// ServiceLocator::initialize_all().await?;
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        info!("📦 Registering: {}", short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 만들고 서비스를 나중에 만듭니다.
    /// 인프라 컴포넌트는 이 호출 전에 `set()`으로 등록되어 있어야 합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        info!("🔄 서비스 레지스트리 초기화");

        let mut repo_count = 0;
        for registration in inventory::iter::<RepositoryRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ {}", registration.name);
            repo_count += 1;
        }

        let mut service_count = 0;
        for registration in inventory::iter::<ServiceRegistration>() {
            let _instance = (registration.constructor)();
            debug!("  ✓ {}", registration.name);
            service_count += 1;
        }

        info!("✅ 리포지토리 {}개, 서비스 {}개 준비 완료", repo_count, service_count);
        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct ManualComponent {
        value: u32,
    }

    #[test]
    fn test_strip_registration_suffix() {
        assert_eq!(strip_registration_suffix("cart_service"), "cart");
        assert_eq!(strip_registration_suffix("product_repository"), "product");
        assert_eq!(strip_registration_suffix("plain"), "plain");
    }

    #[test]
    fn test_lookup_from_type_name() {
        assert_eq!(
            Lookup::from_type_name("commerce_backend::services::cart::CartService"),
            Some(Lookup::Service("cart".to_string()))
        );
        assert_eq!(
            Lookup::from_type_name("commerce_backend::repositories::ProductRepository"),
            Some(Lookup::Repository("product".to_string()))
        );
        assert_eq!(
            Lookup::from_type_name("ProductItemService"),
            Some(Lookup::Service("productitem".to_string()))
        );
        assert_eq!(Lookup::from_type_name("commerce_backend::db::Database"), None);
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(ManualComponent { value: 7 }));

        let first = ServiceLocator::get::<ManualComponent>();
        let second = ServiceLocator::get::<ManualComponent>();

        assert_eq!(first.value, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
