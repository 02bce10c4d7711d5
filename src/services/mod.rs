pub mod absences;
pub mod auth;
pub mod courses;
pub mod departments;
pub mod module_elements;
pub mod modules;
pub(crate) mod references;
pub mod sessions;
pub mod statistics;
pub mod student_groups;
pub mod students;
pub mod users;

pub use absences::AbsenceService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use departments::DepartmentService;
pub use module_elements::ModuleElementService;
pub use modules::ModuleService;
pub use sessions::SessionService;
pub use statistics::StatisticsService;
pub use student_groups::StudentGroupService;
pub use students::StudentService;
pub use users::UserService;
