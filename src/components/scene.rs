use dioxus::prelude::*;
use crate::configs::{ SceneConfig, SiteConfig };

/// What the hero background shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneMode {
    /// Remote scene over the static backdrop.
    Embedded { url: String, viewer_script: String },
    /// Static backdrop only.
    Backdrop,
}

impl SceneMode {
    pub fn from_config(scene: &SceneConfig) -> Self {
        match scene.active_url() {
            Some(url) => SceneMode::Embedded {
                url: url.to_string(),
                viewer_script: scene.viewer_script.clone(),
            },
            None => SceneMode::Backdrop,
        }
    }
}

/// Fills its parent with the interactive 3D scene.
///
/// The gradient backdrop is painted by the container itself, so a scene that
/// never loads leaves a finished-looking hero behind. Nothing here waits on
/// the viewer script.
#[component]
pub fn SceneBackdrop() -> Element {
    let config = use_context::<SiteConfig>();
    let mode = SceneMode::from_config(&config.scene);

    use_hook(|| {
        match &mode {
            SceneMode::Embedded { url, .. } => log::info!("Embedding hero scene {}", url),
            SceneMode::Backdrop => log::info!("Hero scene disabled, showing backdrop"),
        }
    });

    rsx! {
        div {
            class: "scene-backdrop absolute inset-0",
            if let SceneMode::Embedded { url, viewer_script } = mode {
                document::Script { r#type: "module", src: viewer_script }
                spline-viewer {
                    "class": "block w-full h-full",
                    "url": url,
                    "loading-anim-type": "none",
                }
            }
        }
    }
}
