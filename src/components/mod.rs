mod icon;
mod pill;
mod scene;
mod section_heading;
mod theme_root;

pub use icon::{ Icon, IconKind };
pub use pill::Pill;
pub use scene::{ SceneBackdrop, SceneMode };
pub use section_heading::SectionHeading;
pub use theme_root::ThemeRoot;
