use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

const DEFAULT_ROLE: &str = "user";

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            role: DEFAULT_ROLE.to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }

    async fn change_password(
        &self,
        user: User,
        command: ChangePasswordCommand,
    ) -> Result<User, UserError> {
        if !self
            .password_hasher
            .verify(&command.old_password, &user.password_hash)
        {
            return Err(UserError::PasswordIncorrect);
        }

        if command.new_password != command.confirm_new_password {
            return Err(UserError::PasswordMismatch);
        }

        let mut user = user;
        user.password_hash = self.password_hasher.hash(&command.new_password)?;
        user.updated_at = Utc::now();

        self.repository.update(user).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
        }
    }

    fn create_command() -> CreateUserCommand {
        CreateUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            password: "password123".to_string(),
        }
    }

    fn existing_user(password_hash: String) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role: "user".to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.role == "user"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repository));

        let user = service.create_user(create_command()).await.unwrap();
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let result = service.create_user(create_command()).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::UsernameAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("nonexistent".to_string()).unwrap();
        let result = service.get_user_by_username(&username).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::NotFoundByUsername(_)
        ));
    }

    #[tokio::test]
    async fn test_change_password_success() {
        let hasher = auth::PasswordHasher::new();
        let old_hash = hasher.hash("old_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_update()
            .withf(move |user| {
                // Old plaintext no longer verifies, new one does
                let hasher = auth::PasswordHasher::new();
                !hasher.verify("old_password", &user.password_hash)
                    && hasher.verify("new_password", &user.password_hash)
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repository));

        let command = ChangePasswordCommand {
            old_password: "old_password".to_string(),
            new_password: "new_password".to_string(),
            confirm_new_password: "new_password".to_string(),
        };

        let result = service.change_password(existing_user(old_hash), command).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_change_password_wrong_old_password() {
        let hasher = auth::PasswordHasher::new();
        let old_hash = hasher.hash("old_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository.expect_update().times(0);

        let service = UserService::new(Arc::new(repository));

        let command = ChangePasswordCommand {
            old_password: "not_the_old_password".to_string(),
            new_password: "new_password".to_string(),
            confirm_new_password: "new_password".to_string(),
        };

        let result = service.change_password(existing_user(old_hash), command).await;
        assert!(matches!(result.unwrap_err(), UserError::PasswordIncorrect));
    }

    #[tokio::test]
    async fn test_change_password_confirmation_mismatch() {
        let hasher = auth::PasswordHasher::new();
        let old_hash = hasher.hash("old_password").unwrap();

        let mut repository = MockTestUserRepository::new();
        repository.expect_update().times(0);

        let service = UserService::new(Arc::new(repository));

        let command = ChangePasswordCommand {
            old_password: "old_password".to_string(),
            new_password: "new_password".to_string(),
            confirm_new_password: "different_password".to_string(),
        };

        let result = service.change_password(existing_user(old_hash), command).await;
        assert!(matches!(result.unwrap_err(), UserError::PasswordMismatch));
    }
}
