//! Authentication adapters.
//!
//! Implementations of the `AuthVerifier` port. The platform terminates real
//! authentication upstream and hands this service an opaque user identifier,
//! so the production adapter is a pass-through; the mock is for tests.

mod mock;
mod opaque;

pub use mock::MockAuthVerifier;
pub use opaque::OpaqueTokenVerifier;
