use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

// 演示账号：用户名、姓名、角色
const DEMO_USERS: [(&str, &str, UserRole); 3] = [
    ("admin", "System Administrator", UserRole::Admin),
    ("dept_head", "Department Head", UserRole::DepartmentHead),
    ("teacher", "Demo Teacher", UserRole::Teacher),
];

/// 生成随机密码，保证同时包含字母和数字
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    const DIGITS: &[u8] = b"0123456789";
    let mut rng = rand::rng();
    let mut password: String = (0..length.saturating_sub(2))
        .map(|_| {
            let pool = if rng.random_bool(0.5) { LETTERS } else { DIGITS };
            pool[rng.random_range(0..pool.len())] as char
        })
        .collect();
    password.push(LETTERS[rng.random_range(0..LETTERS.len())] as char);
    password.push(DIGITS[rng.random_range(0..DIGITS.len())] as char);
    password
}

/// 用户集合为空时写入三个演示账号，返回新建的数量
///
/// 三个账号共用同一个密码，只哈希一次。
pub async fn seed_demo_users(storage: &Arc<dyn Storage>, password: &str) -> Result<usize> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("Storage already has {} user(s), skipping demo seed", count);
        return Ok(0);
    }

    let password_hash = hash_password(password)?;
    let mut created = 0;
    for (username, full_name, role) in DEMO_USERS {
        let user = storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                password: password_hash.clone(),
                full_name: full_name.to_string(),
                email: format!("{username}@attendance.local"),
                role,
                department_id: None,
            })
            .await?;
        info!("Demo {} account created (ID: {}, username: {})", role, user.id, user.username);
        created += 1;
    }
    Ok(created)
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend '{}' initialized", config.storage.backend);

    if config.storage.seed_demo_users {
        let password = if config.storage.demo_password.is_empty() {
            let pwd = generate_random_password(16);
            warn!("==========================================================");
            warn!("  DEMO PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated demo password: {}", pwd);
            warn!("  Set storage.demo_password or DEMO_PASSWORD to fix it");
            warn!("==========================================================");
            pwd
        } else {
            config.storage.demo_password.clone()
        };

        let created = seed_demo_users(&storage, &password).await?;
        if created > 0 {
            info!("{} demo accounts seeded", created);
        }
    }

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::requests::UserListQuery;
    use crate::storage::MemoryStorage;
    use crate::utils::password::verify_password;

    #[test]
    fn test_generated_password_has_letter_and_digit() {
        for _ in 0..20 {
            let pwd = generate_random_password(16);
            assert_eq!(pwd.len(), 16);
            assert!(pwd.chars().any(|c| c.is_ascii_alphabetic()));
            assert!(pwd.chars().any(|c| c.is_ascii_digit()));
        }
    }

    #[tokio::test]
    async fn test_seed_creates_one_user_per_role() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let created = seed_demo_users(&storage, "demo1234").await.unwrap();
        assert_eq!(created, 3);

        let users = storage.list_users(UserListQuery::default()).await.unwrap();
        let roles: Vec<UserRole> = users.iter().map(|u| u.role).collect();
        assert_eq!(
            roles,
            vec![UserRole::Admin, UserRole::DepartmentHead, UserRole::Teacher]
        );
        assert!(verify_password("demo1234", &users[0].password_hash));
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        seed_demo_users(&storage, "demo1234").await.unwrap();
        let created = seed_demo_users(&storage, "other5678").await.unwrap();
        assert_eq!(created, 0);
        assert_eq!(storage.count_users().await.unwrap(), 3);
    }
}
