pub mod product_service;
pub mod product_item_service;
pub mod product_search_service;

pub use product_service::ProductService;
pub use product_item_service::ProductItemService;
pub use product_search_service::ProductSearchService;
