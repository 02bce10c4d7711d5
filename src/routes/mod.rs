pub mod absences;

pub mod auth;

pub mod courses;

pub mod departments;

pub mod module_elements;

pub mod modules;

pub mod sessions;

pub mod statistics;

pub mod student_groups;

pub mod students;

pub mod users;

pub use absences::configure_absences_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use departments::configure_departments_routes;
pub use module_elements::configure_module_elements_routes;
pub use modules::configure_modules_routes;
pub use sessions::configure_sessions_routes;
pub use statistics::configure_statistics_routes;
pub use student_groups::configure_student_groups_routes;
pub use students::configure_students_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_departments_routes)
        .configure(configure_courses_routes)
        .configure(configure_modules_routes)
        .configure(configure_module_elements_routes)
        .configure(configure_students_routes)
        .configure(configure_student_groups_routes)
        .configure(configure_sessions_routes)
        .configure(configure_absences_routes)
        .configure(configure_statistics_routes);
}
