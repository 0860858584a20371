/*
[INPUT]:  Client configuration, credentials, composed GraphQL operations
[OUTPUT]: Typed API results or classified errors
[POS]:    HTTP layer - GraphQL API communication
[UPDATE]: When adding new operations or changing client behavior
*/

pub mod client;
pub mod dispatch;
pub mod error;
pub mod mutations;
pub mod queries;
pub mod transport;

pub use error::{BuycoinsError, Result};

pub use client::{BuycoinsClient, ClientConfig, Credentials, DEFAULT_ENDPOINT};
pub use transport::{HttpTransport, MockTransport, RecordedRequest, Transport};
