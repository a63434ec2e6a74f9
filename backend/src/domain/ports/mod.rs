//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are called by inbound adapters and
//! implemented by domain services. Driven ports (repositories, identity
//! provider, upload signer) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod identity_provider;
mod upload_signer;
mod user_profile_command;
mod user_profile_query;
mod user_repository;
mod work_of_art_command;
mod work_of_art_query;
mod work_of_art_repository;

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
pub use identity_provider::{FixtureIdentityProvider, IdentityProvider};
#[cfg(test)]
pub use upload_signer::MockUploadSigner;
pub use upload_signer::{DisabledUploadSigner, UploadSigner};
#[cfg(test)]
pub use user_profile_command::MockUserProfileCommand;
pub use user_profile_command::UserProfileCommand;
#[cfg(test)]
pub use user_profile_query::MockUserProfileQuery;
pub use user_profile_query::UserProfileQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use work_of_art_command::MockWorkOfArtCommand;
pub use work_of_art_command::WorkOfArtCommand;
#[cfg(test)]
pub use work_of_art_query::MockWorkOfArtQuery;
pub use work_of_art_query::WorkOfArtQuery;
#[cfg(test)]
pub use work_of_art_repository::MockWorkOfArtRepository;
pub use work_of_art_repository::{WorkOfArtPersistenceError, WorkOfArtRepository};
