use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::store::Namespaced;
use crate::templates::registry::{ColorTheme, TemplateType};

pub const TEMPLATE_KEY: &str = "resumeBuilderTemplate";
pub const COLOR_KEY: &str = "resumeBuilderColor";

/// Selected template and accent color. Stored as two bare identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub template: TemplateType,
    pub color: ColorTheme,
}

/// Unknown or missing identifiers read back as the defaults.
pub async fn load_preferences(ns: &Namespaced) -> Result<Preferences, AppError> {
    let template = ns
        .get(TEMPLATE_KEY)
        .await?
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    let color = ns
        .get(COLOR_KEY)
        .await?
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();
    Ok(Preferences { template, color })
}

pub async fn save_preferences(ns: &Namespaced, prefs: Preferences) -> Result<(), AppError> {
    ns.set(TEMPLATE_KEY, prefs.template.id()).await?;
    ns.set(COLOR_KEY, prefs.color.id()).await?;
    debug!(
        "Saved preferences template={} color={}",
        prefs.template.id(),
        prefs.color.id()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};
    use std::sync::Arc;
    use uuid::Uuid;

    fn namespace() -> Namespaced {
        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        Namespaced::for_user(kv, Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_defaults_when_nothing_stored() {
        let prefs = load_preferences(&namespace()).await.unwrap();
        assert_eq!(prefs.template, TemplateType::Classic);
        assert_eq!(prefs.color, ColorTheme::Teal);
    }

    #[tokio::test]
    async fn test_saved_as_bare_identifiers() {
        let ns = namespace();
        let prefs = Preferences {
            template: TemplateType::Minimal,
            color: ColorTheme::Forest,
        };
        save_preferences(&ns, prefs).await.unwrap();
        assert_eq!(ns.get(TEMPLATE_KEY).await.unwrap().as_deref(), Some("minimal"));
        assert_eq!(ns.get(COLOR_KEY).await.unwrap().as_deref(), Some("forest"));
        assert_eq!(load_preferences(&ns).await.unwrap(), prefs);
    }

    #[tokio::test]
    async fn test_unknown_values_fall_back() {
        let ns = namespace();
        ns.set(TEMPLATE_KEY, "\"modern\"").await.unwrap();
        ns.set(COLOR_KEY, "magenta").await.unwrap();
        assert_eq!(load_preferences(&ns).await.unwrap(), Preferences::default());
    }
}
