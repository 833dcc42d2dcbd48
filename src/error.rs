use thiserror::Error;

/// Errors raised while building a graph or reading one from text.
///
/// Analyses themselves never fail on a graph that was built successfully; only
/// construction validates its input.
#[derive(Error, Debug)]
pub enum Error {
    /// Edge weight is negative or does not fit into [`crate::types::Weight`].
    #[error("invalid edge weight {weight}, expected an integer in 0..={}", u32::MAX)]
    InvalidWeight {
        /// The rejected weight as it was given
        weight: i64,
    },

    /// Both endpoints of an edge name the same vertex.
    #[error("self loop on vertex '{vertex}' is not supported")]
    SelfLoop {
        /// Name of the vertex
        vertex: String,
    },

    /// Growing an internal buffer failed.
    #[error("allocation failed while growing {what}")]
    Allocation {
        /// The structure that could not grow
        what: &'static str,
    },

    /// Petgraph's 32-bit index space is exhausted.
    #[error("graph index space exhausted")]
    CapacityExhausted,

    /// Reading the input source failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A validation error raised by a specific input line.
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based line number
        line: usize,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn at_line(self, line: usize) -> Self {
        Error::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
