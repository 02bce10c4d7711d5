use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

// 代码类字段（课程代码、学号等）只允许字母数字和少量分隔符
static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_./-]+$").expect("Invalid code regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 名称类字段不能为空白
pub fn validate_name(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if value.chars().count() > 200 {
        return Err(format!("{field} must be at most 200 characters"));
    }
    Ok(())
}

pub fn validate_code(field: &str, value: &str) -> Result<(), String> {
    if value.is_empty() || value.len() > 32 {
        return Err(format!("{field} length must be between 1 and 32 characters"));
    }
    if !CODE_RE.is_match(value) {
        return Err(format!(
            "{field} must contain only letters, numbers, dots, slashes, underscores or hyphens"
        ));
    }
    Ok(())
}

pub fn validate_absence_threshold(threshold: i64) -> Result<(), &'static str> {
    if threshold < 0 {
        return Err("Absence threshold must not be negative");
    }
    Ok(())
}

/// 密码策略：至少 8 个字符，同时包含字母和数字
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("j.doe-2").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("head@univ.edu").is_ok());
        assert!(validate_email("no-at-sign.edu").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(validate_name("Name", "Sciences").is_ok());
        assert!(validate_name("Name", "   ").is_err());
    }

    #[test]
    fn test_code_rules() {
        assert!(validate_code("Code", "INF-101").is_ok());
        assert!(validate_code("Code", "").is_err());
        assert!(validate_code("Code", "INF 101").is_err());
    }

    #[test]
    fn test_threshold_must_not_be_negative() {
        assert!(validate_absence_threshold(0).is_ok());
        assert!(validate_absence_threshold(-1).is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(validate_password("Attendance2024").is_ok());
        assert!(validate_password("short1").is_err());
        assert!(validate_password("onlyletters").is_err());
        assert!(validate_password("1234567890").is_err());
    }
}
