use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures of the eavesdropping service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The TCP connection could not be established.
    #[error("failed to connect to {endpoint}")]
    Connect {
        /// The endpoint we tried to reach
        endpoint: String,
        #[source]
        source: io::Error,
    },

    /// The UDP socket could not be bound or could not join its group.
    #[error("failed to listen on {endpoint}")]
    Bind {
        /// The endpoint we tried to listen on
        endpoint: String,
        #[source]
        source: io::Error,
    },

    /// Reading from the transport failed.
    #[error("failed to receive from {endpoint}")]
    Receive {
        /// The endpoint being read
        endpoint: String,
        #[source]
        source: io::Error,
    },

    /// The peer closed the TCP connection.
    #[error("connection to {endpoint} lost")]
    ConnectionLost {
        /// The endpoint that went away
        endpoint: String,
    },

    /// The directory for the sentence log could not be created.
    #[error("failed to prepare sentence log at {}", path.display())]
    OpenLog {
        /// The configured log path
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Assembling or writing a sentence failed.
    #[error(transparent)]
    Assembler(#[from] crate::Error<io::Error>),
}
