//! User profile domain service.
//!
//! Implements the profile driving ports over a [`UserRepository`]. First
//! logins provision an empty profile; later edits are restricted to the
//! profile's owner.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    UserPersistenceError, UserProfileCommand, UserProfileQuery, UserRepository,
};
use crate::domain::{Error, ProfileUpdate, User, UserId, UserName};

/// User profile service implementing the profile driving ports.
#[derive(Clone)]
pub struct UserProfileService<R> {
    users: Arc<R>,
}

impl<R> UserProfileService<R> {
    /// Create a new service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> UserProfileService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateName { name } => {
                Error::internal(format!("unexpected user name conflict: {name}"))
            }
        }
    }

    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, Error> {
        self.users
            .find_by_name(name)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn provision(&self, login: &UserName) -> Result<User, Error> {
        let user = User::new(UserId::random(), login.clone());
        match self.users.insert(&user).await {
            Ok(()) => {
                info!(user_id = %user.id(), login = %login, "provisioned user on first login");
                Ok(user)
            }
            Err(UserPersistenceError::DuplicateName { .. }) => {
                // Lost a concurrent first-login race; return the winner's record.
                self.find_by_name(login).await?.ok_or_else(|| {
                    Error::internal(format!("user {login} vanished after name conflict"))
                })
            }
            Err(err) => Err(Self::map_persistence_error(err)),
        }
    }
}

#[async_trait]
impl<R> UserProfileQuery for UserProfileService<R>
where
    R: UserRepository,
{
    async fn fetch_by_id(&self, id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }

    async fn fetch_by_name(&self, name: &UserName) -> Result<User, Error> {
        self.find_by_name(name)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {name} not found")))
    }
}

#[async_trait]
impl<R> UserProfileCommand for UserProfileService<R>
where
    R: UserRepository,
{
    async fn find_or_create(&self, login: &UserName) -> Result<User, Error> {
        match self.find_by_name(login).await? {
            Some(user) => Ok(user),
            None => self.provision(login).await,
        }
    }

    async fn update_profile(
        &self,
        id: &UserId,
        update: ProfileUpdate,
        acting: &UserName,
    ) -> Result<User, Error> {
        let mut user = self.fetch_by_id(id).await?;
        if !user.is_owned_by(acting) {
            debug!(user_id = %id, acting = %acting, "profile update denied");
            return Err(Error::forbidden("you can update only your own profile"));
        }

        user.apply_profile(update);
        self.users
            .update(&user)
            .await
            .map_err(Self::map_persistence_error)?;
        Ok(user)
    }
}

#[cfg(test)]
#[path = "user_profile_service_tests.rs"]
mod tests;
