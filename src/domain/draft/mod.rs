//! Draft - session keys and the stored snapshot format.

mod draft;
mod key;

pub use draft::{fingerprint, Draft};
pub use key::{DraftKey, SessionMode};
