mod dispatch;
mod error;
mod forecast;
mod request;
mod response;

pub use error::ForecastError;
pub use forecast::*;

pub use dispatch::cache::ResponseCache;
pub use dispatch::dispatcher::DispatchMode;
pub use dispatch::error::TransportFailure;
pub use dispatch::transport::{BlockingTransport, HttpTransport, Transport};

pub use request::query::*;

pub use response::alert::Alert;
pub use response::data_point::{DataBlock, DataPoint};
pub use response::error::FetchFailure;
pub use response::flags::Flags;
pub use response::payload::ForecastPayload;
pub use response::report::ForecastReport;
