use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unparseable hand header: {line}")]
    UnparseableHeader { line: String },
    #[error("Hand segment contains no lines")]
    EmptySegment,
    #[error("Malformed amount '{amount}' in line: {line}")]
    MalformedAmount { amount: String, line: String },
}
