//! URL normalization for crawlers, deduplication and cache keys.
//!
//! Two URLs that differ only in scheme/host case, default port, trailing
//! root dot, dot segments or needless percent-escapes normalize to the same
//! string. Query parameter order is left alone since sites may depend on it.

pub mod authority;
pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod parts;
pub mod path;
pub mod schemes;
pub mod unquote;

pub use authority::{dword_to_ipv4, normalize_authority};
pub use error::{InvalidUrl, InvalidUrlKind};
pub use normalize::{normalize, normalize_parts, urls_equivalent};
pub use parts::UrlParts;
pub use path::normalize_path;
pub use unquote::{unquote_fragment, unquote_params, unquote_path, unquote_qs, unquote_safe};
