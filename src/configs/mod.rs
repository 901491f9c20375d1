mod site;

pub use site::{ ConfigIssue, SceneConfig, SiteConfig };
