use std::collections::HashSet;

/// Which host modules are active for this deployment. Injected wherever a
/// module-gated decision is made; never a global lookup.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    active: HashSet<String>,
}

impl ModuleRegistry {
    pub fn with_modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads the comma-separated NEWSDESK_MODULES variable, empty when unset.
    pub fn from_env() -> Self {
        let raw = std::env::var("NEWSDESK_MODULES").unwrap_or_default();
        Self::with_modules(
            raw.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string),
        )
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        let registry = ModuleRegistry::with_modules(["comments", "archive"]);

        assert!(registry.is_active("comments"));
        assert!(registry.is_active("archive"));
        assert!(!registry.is_active("comment"));
        assert!(!registry.is_active("rss"));
    }

    #[test]
    fn empty_registry_reports_nothing_active() {
        let registry = ModuleRegistry::default();
        assert!(!registry.is_active("comments"));
    }
}
