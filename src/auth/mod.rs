//! Authorization types.
//!
//! Token acquisition and refresh are out of scope; this module only
//! holds the access token an engine instance was constructed with.

mod token;

pub use token::AccessToken;
