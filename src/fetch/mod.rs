use crate::error::Result;

pub mod connectivity;
pub mod logo;
pub mod quote;

pub use connectivity::{ConnectivityProbe, TcpProbe};
pub use logo::{fetch_logo, LogoImage};
pub use quote::{fetch_quote, Quote};

pub type FetchResult<T> = Result<T>;
