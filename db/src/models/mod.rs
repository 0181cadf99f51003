pub mod company;
pub mod interview_type;
pub mod employment_type;
pub mod location;
pub mod application_status;
pub mod interview_result;
pub mod position_status;
pub mod interview_flow;
pub mod interview_step;
pub mod employee;
pub mod position;
pub mod application;
pub mod interview;

pub use company::Entity as Company;
pub use interview_type::Entity as InterviewType;
pub use employment_type::Entity as EmploymentType;
pub use location::Entity as Location;
pub use application_status::Entity as ApplicationStatus;
pub use interview_result::Entity as InterviewResult;
pub use position_status::Entity as PositionStatus;
pub use interview_flow::Entity as InterviewFlow;
pub use interview_step::Entity as InterviewStep;
pub use employee::Entity as Employee;
pub use position::Entity as Position;
pub use application::Entity as Application;
pub use interview::Entity as Interview;
