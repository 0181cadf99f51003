pub mod cleanup;
pub mod employment_type;
pub mod location;
pub mod application_status;
pub mod interview_result;
pub mod position_status;
pub mod company;
pub mod interview_type;
pub mod interview_flow;
pub mod interview_step;
pub mod employee;
pub mod position;
