use thiserror::Error;

/// A cell whose text matches a known verdict shape but carries an unusable number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellParseError {
    #[error("numeric fragment '{fragment}' in cell '{raw}' does not fit")]
    Overflow { raw: String, fragment: String },

    #[error("{field} value {value} out of range in cell '{raw}'")]
    OutOfRange {
        raw: String,
        field: &'static str,
        value: u64,
    },
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("CSV text is empty")]
    EmptyCsv,

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("insufficient headers: found {found}, expected at least {expected}")]
    InsufficientHeaders { found: usize, expected: usize },

    #[error("no data rows found in rank sheet")]
    NoRows,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("retriable HTTP status {status} for {url}")]
    RetriableStatus { url: String, status: u16 },

    #[error("request for {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {url} after {attempts} attempts: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Whether another attempt could succeed.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            FetchError::RetriableStatus { .. } | FetchError::Transport { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid contest start time format: {0}")]
    InvalidStartTime(String),

    #[error("contest duration out of range: {0}")]
    DurationOutOfRange(String),
}

#[derive(Error, Debug)]
pub enum SiteError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("contest '{0}' not found")]
    UnknownContest(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
