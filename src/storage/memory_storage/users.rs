//! 用户存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::{
    entities::User,
    requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
};
use tracing::debug;

impl MemoryStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users.insert_with(|id| User {
            id,
            username: req.username,
            password_hash: req.password,
            full_name: req.full_name,
            email: req.email,
            role: req.role,
            department_id: req.department_id,
        });
        debug!("Created user {} ({})", user.id, user.username);
        Ok(user)
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.read().await.get(id))
    }

    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .find_first(|u| u.username == username))
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.find_first(|u| u.email == email))
    }

    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .find_first(|u| u.username == identifier || u.email == identifier))
    }

    /// 列出用户，可按角色和院系过滤
    pub async fn list_users_impl(&self, query: UserListQuery) -> Result<Vec<User>> {
        Ok(self.users.read().await.filter(|u| {
            query.role.is_none_or(|role| u.role == role)
                && query
                    .department_id
                    .is_none_or(|dept| u.department_id == Some(dept))
        }))
    }

    /// 更新用户信息，未提供的字段保持不变
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let updated = self.users.write().await.update_with(id, |user| {
            if let Some(username) = update.username {
                user.username = username;
            }
            if let Some(password) = update.password {
                user.password_hash = password;
            }
            if let Some(full_name) = update.full_name {
                user.full_name = full_name;
            }
            if let Some(email) = update.email {
                user.email = email;
            }
            if let Some(role) = update.role {
                user.role = role;
            }
            if let Some(department_id) = update.department_id {
                user.department_id = department_id;
            }
        });
        if updated.is_some() {
            debug!("Updated user {}", id);
        }
        Ok(updated)
    }

    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let removed = self.users.write().await.remove(id);
        debug!("Delete user {}: {}", id, removed);
        Ok(removed)
    }

    pub async fn count_users_impl(&self) -> Result<i64> {
        Ok(self.users.read().await.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListQuery};
    use crate::storage::{MemoryStorage, Storage};

    fn new_user(username: &str, role: UserRole, department_id: Option<i64>) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: "hashed".to_string(),
            full_name: format!("{username} Full"),
            email: format!("{username}@example.edu"),
            role,
            department_id,
        }
    }

    #[tokio::test]
    async fn test_update_preserves_untouched_fields() {
        let storage = MemoryStorage::new();
        let created = storage
            .create_user(new_user("alice", UserRole::Teacher, Some(2)))
            .await
            .unwrap();

        let updated = storage
            .update_user(
                created.id,
                UpdateUserRequest {
                    full_name: Some("Alice Martin".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.full_name, "Alice Martin");
        assert_eq!(
            updated,
            crate::models::users::entities::User {
                full_name: "Alice Martin".into(),
                ..created
            }
        );
    }

    #[tokio::test]
    async fn test_update_can_clear_department() {
        let storage = MemoryStorage::new();
        let created = storage
            .create_user(new_user("bob", UserRole::DepartmentHead, Some(1)))
            .await
            .unwrap();

        let updated = storage
            .update_user(
                created.id,
                UpdateUserRequest {
                    department_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.department_id, None);
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_stored() {
        let storage = MemoryStorage::new();
        let first = storage
            .create_user(new_user("carol", UserRole::Teacher, None))
            .await
            .unwrap();
        let second = storage
            .create_user(new_user("carol", UserRole::Teacher, None))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(storage.count_users().await.unwrap(), 2);
        // 按用户名查找返回最早的一条
        let found = storage.get_user_by_username("carol").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_list_users_by_role() {
        let storage = MemoryStorage::new();
        storage
            .create_user(new_user("admin1", UserRole::Admin, None))
            .await
            .unwrap();
        storage
            .create_user(new_user("teach1", UserRole::Teacher, Some(1)))
            .await
            .unwrap();
        storage
            .create_user(new_user("teach2", UserRole::Teacher, Some(2)))
            .await
            .unwrap();

        let teachers = storage
            .list_users(UserListQuery {
                role: Some(UserRole::Teacher),
                department_id: None,
            })
            .await
            .unwrap();
        let names: Vec<_> = teachers.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["teach1", "teach2"]);

        let dept_two = storage
            .list_users(UserListQuery {
                role: None,
                department_id: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(dept_two.len(), 1);
        assert_eq!(dept_two[0].username, "teach2");
    }

    #[tokio::test]
    async fn test_lookup_by_username_or_email() {
        let storage = MemoryStorage::new();
        storage
            .create_user(new_user("dave", UserRole::Teacher, None))
            .await
            .unwrap();

        assert!(
            storage
                .get_user_by_username_or_email("dave@example.edu")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            storage
                .get_user_by_username_or_email("dave")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            storage
                .get_user_by_username_or_email("nobody")
                .await
                .unwrap()
                .is_none()
        );
    }
}
