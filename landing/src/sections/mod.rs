// Landing page sections

mod footer;
mod hero;
mod icons;
mod nav;
mod services;

pub use footer::Footer;
pub use hero::Hero;
pub use icons::{Icon, glyph_path};
pub use nav::Nav;
pub use services::Services;
