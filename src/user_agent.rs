//! Shared User-Agent string for provider and cover HTTP clients.
//!
//! Single source for project URL and UA format so search and download
//! traffic stay consistent and easy to update (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce/mangafetch";

/// Default User-Agent for all outbound requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("mangafetch/{version} (library-enrichment-tool; +{PROJECT_UA_URL})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_identifies_tool_and_version() {
        let ua = default_user_agent();
        assert!(ua.contains("mangafetch/"), "UA must identify the tool");
        assert!(
            ua.contains(env!("CARGO_PKG_VERSION")),
            "UA must carry the crate version"
        );
        assert!(ua.contains(PROJECT_UA_URL), "UA must contain project URL");
    }
}
