//! Build, sign, parse and validate compact-serialization JSON Web Tokens
//! (RFC 7519 claims, RFC 7515 JWS compact serialization, RFC 4648 §5
//! base64url). JWE, JWK/JWKS, and the flattened/general JWS JSON
//! serializations are out of scope — see [`token`] and [`validator`] for
//! the two halves of the public surface.

pub mod claims;
pub mod error;
pub mod jws;
pub mod token;
pub mod util;
pub mod validator;

pub use claims::{ClaimSet, ClaimValue};
pub use error::JwtError;
pub use jws::Algorithm;
pub use token::Token;
pub use validator::Validator;
