//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_attendance_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AttendanceError {
            $($variant(String),)*
        }

        impl AttendanceError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AttendanceError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AttendanceError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AttendanceError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_attendance_errors! {
    StorageOperation("E002", "Storage Operation Error"),
    StoragePluginNotFound("E003", "Storage Plugin Not Found"),
    PasswordHash("E011", "Password Hash Error"),
}

impl AttendanceError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AttendanceError {}

pub type Result<T> = std::result::Result<T, AttendanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AttendanceError::storage_operation("test").code(), "E002");
        assert_eq!(AttendanceError::storage_plugin_not_found("test").code(), "E003");
        assert_eq!(AttendanceError::password_hash("test").code(), "E011");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AttendanceError::storage_plugin_not_found("test").error_type(),
            "Storage Plugin Not Found"
        );
        assert_eq!(
            AttendanceError::password_hash("test").error_type(),
            "Password Hash Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AttendanceError::storage_operation("Course table unavailable");
        assert_eq!(err.message(), "Course table unavailable");
    }

    #[test]
    fn test_format_simple() {
        let err = AttendanceError::password_hash("Invalid salt");
        let formatted = err.format_simple();
        assert!(formatted.contains("Password Hash Error"));
        assert!(formatted.contains("Invalid salt"));
    }
}
