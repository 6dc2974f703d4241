pub mod cart;
pub mod catalog;
pub mod session;

pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use session::SessionStore;
