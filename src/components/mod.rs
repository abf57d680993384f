//! UI Components
//!
//! Reusable Leptos components.

mod contact_page;
mod footer;
mod loader;
mod navbar;
mod pagination;
mod product_card;

pub use contact_page::ContactPage;
pub use footer::Footer;
pub use loader::Loader;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use product_card::ProductCard;
