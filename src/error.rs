use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("unparseable date '{value}': {source}")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("zero opening price on {0}")]
    ZeroOpen(NaiveDate),

    #[error("price series is empty")]
    EmptySeries,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
