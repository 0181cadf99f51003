pub mod m202608270001_create_companies;
pub mod m202608270002_create_interview_types;
pub mod m202608270003_create_employment_types;
pub mod m202608270004_create_locations;
pub mod m202608270005_create_application_statuses;
pub mod m202608270006_create_interview_results;
pub mod m202608270007_create_position_statuses;
pub mod m202608270008_create_interview_flows;
pub mod m202608270009_create_interview_steps;
pub mod m202608270010_create_employees;
pub mod m202608270011_create_positions;
pub mod m202608270012_create_applications;
pub mod m202608270013_create_interviews;
