mod about;
mod contact;
mod footer;
mod hero;
mod home;
mod mobile_menu;
mod navbar;
mod not_found;
mod services;
mod testimonials;
mod work;

pub use about::About;
pub use contact::Contact;
pub use footer::{ copyright_line, Footer };
pub use hero::Hero;
pub use home::Home;
pub use mobile_menu::{ follow_menu_link, MobileMenu };
pub use navbar::Navbar;
pub use not_found::PageNotFound;
pub use services::Services;
pub use testimonials::Testimonials;
pub use work::Work;
