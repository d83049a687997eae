use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed forecast: {0}")]
    MalformedForecast(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

impl From<ureq::Error> for DashboardError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(status, resp) => DashboardError::Http {
                status,
                url: resp.get_url().to_string(),
            },
            ureq::Error::Transport(t) => DashboardError::Transport(t.to_string()),
        }
    }
}
