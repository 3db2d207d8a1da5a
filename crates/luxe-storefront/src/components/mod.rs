//! Shared layout and product components.

mod footer;
mod header;
mod newsletter;
mod product_card;
mod product_grid;
mod toaster;

pub use footer::Footer;
pub use header::Header;
pub use newsletter::NewsletterForm;
pub use product_card::ProductCard;
pub use product_grid::{ProductGrid, ProductSection};
pub use toaster::Toaster;
