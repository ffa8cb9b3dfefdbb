//! Central constants for the langstats application

/// Default values for GitHub operations
pub mod github {
    /// Account reported on when none is configured
    pub const DEFAULT_ACCOUNT: &str = "KhaineVulpana";

    /// Entries requested per listing page
    pub const PAGE_SIZE: u32 = 100;

    /// Upper bound on listing pages fetched per run
    pub const MAX_PAGES: u32 = 2;

    /// Repositories never counted, whatever the account
    pub const DEFAULT_EXCLUDED: &[&str] = &[".github"];
}

/// Credential sources and persistence
pub mod credentials {
    /// Key under which the persisted token is stored
    pub const TOKEN_KEY: &str = "gh_token";

    /// Environment variable consulted before `GITHUB_TOKEN`
    pub const TOKEN_ENV: &str = "LANGSTATS_TOKEN";

    /// Environment variable shared with other GitHub tooling
    pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

    /// Overrides the directory holding the credential store
    pub const HOME_ENV: &str = "LANGSTATS_HOME";

    /// Store directory under `$HOME`
    pub const STORE_DIR: &str = ".langstats";

    /// Store file name
    pub const STORE_FILE: &str = "credentials.json";
}

/// Presentation defaults
pub mod report {
    /// Repositories shown in the gallery
    pub const GALLERY_SIZE: usize = 24;

    /// Topics shown per gallery entry
    pub const GALLERY_TOPICS: usize = 4;

    /// Label of the synthetic bucket collecting the long tail
    pub const OTHER_LABEL: &str = "Other";

    /// Compact view: at most this many ranked entries before bucketing
    pub const COMPACT_MAX: usize = 8;

    /// Compact view: share that keeps an entry past the cutoff
    pub const COMPACT_MIN_SHARE: f64 = 0.05;

    /// Detailed view: at most this many ranked entries before bucketing
    pub const DETAILED_MAX: usize = 12;

    /// Detailed view: share that keeps an entry past the cutoff
    pub const DETAILED_MIN_SHARE: f64 = 0.01;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "langstats.yaml";
}
