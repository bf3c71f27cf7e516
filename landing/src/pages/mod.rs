// Routed pages

mod home;
mod not_found;
mod portal;
mod service;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use portal::PortalPage;
pub use service::{ServiceDetailPage, ServicesPage};
