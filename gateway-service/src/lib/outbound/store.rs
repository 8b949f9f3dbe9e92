pub mod client;
pub mod products;
pub mod users;

pub use client::StoreClient;
pub use products::HttpProductStore;
pub use users::HttpUserStore;
