/// Per-dialect knobs consulted when values are produced on the application
/// side, before a statement reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// When true, the database stores timestamps with sub-second precision.
    /// Generated timestamps are truncated to whole seconds otherwise.
    pub fractional_seconds: bool,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        fractional_seconds: true,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self { ..Self::SQLITE };

    /// MySQL capabilities. `DATETIME` columns default to a precision of zero.
    pub const MYSQL: Self = Self {
        fractional_seconds: false,
    };

    /// SQL Server capabilities
    pub const MSSQL: Self = Self { ..Self::MYSQL };

    /// Used when no dialect is specified.
    pub const DEFAULT: Self = Self::POSTGRESQL;
}

impl Default for Capability {
    fn default() -> Self {
        Self::DEFAULT
    }
}
