pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::Claims;
pub use claims::TOKEN_TTL_HOURS;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
