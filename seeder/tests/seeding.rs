use db::models::{
    company, interview_flow, location, position, Application, ApplicationStatus,
    Company, Employee, EmploymentType, Interview, InterviewFlow, InterviewResult, InterviewStep,
    InterviewType, Location, PositionStatus,
};
use db::test_utils::setup_test_db;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use seeder::seed::{seed_all, SeedError, Seeder};
use seeder::seeds::company::CompanySeeder;

#[tokio::test]
async fn seeding_produces_expected_counts() {
    let db = setup_test_db().await;

    let summary = seed_all(&db).await.unwrap();

    assert_eq!(summary.employment_types, 4);
    assert_eq!(summary.locations, 3);
    assert_eq!(summary.application_statuses, 5);
    assert_eq!(summary.interview_results, 4);
    assert_eq!(summary.position_statuses, 4);
    assert_eq!(summary.companies, 3);
    assert_eq!(summary.interview_types, 4);
    assert_eq!(summary.interview_flows, 3);
    assert_eq!(summary.interview_steps, 4);
    assert_eq!(summary.employees, 2);
    assert_eq!(summary.positions, 1);
}

#[tokio::test]
async fn steps_read_back_in_interview_order() {
    let db = setup_test_db().await;
    seed_all(&db).await.unwrap();

    let flow = interview_flow::Model::find_by_name(&db, "Standard Engineering Position")
        .await
        .unwrap()
        .unwrap();

    let steps = InterviewStep::find()
        .filter(db::models::interview_step::Column::InterviewFlowId.eq(flow.id))
        .order_by_asc(db::models::interview_step::Column::OrderIndex)
        .all(&db)
        .await
        .unwrap();

    let ordered: Vec<(i32, &str)> = steps
        .iter()
        .map(|s| (s.order_index, s.name.as_str()))
        .collect();
    assert_eq!(
        ordered,
        vec![
            (1, "Initial Phone Screening"),
            (2, "Technical Assessment"),
            (3, "Behavioral Interview"),
            (4, "Final Interview"),
        ]
    );
}

#[tokio::test]
async fn reseeding_reproduces_the_same_state() {
    let db = setup_test_db().await;

    let first = seed_all(&db).await.unwrap();
    let second = seed_all(&db).await.unwrap();
    assert_eq!(first, second);

    let mut names: Vec<String> = Company::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Digital Solutions", "InnovateSoft", "TechCorp"]);
}

#[tokio::test]
async fn cleanup_purges_preexisting_rows() {
    let db = setup_test_db().await;

    // Rows from a previous, different state of the database.
    company::Model::create(&db, "Stray Corp").await.unwrap();
    interview_flow::Model::create(&db, "Stray Flow", "Leftover process")
        .await
        .unwrap();

    seed_all(&db).await.unwrap();

    assert!(company::Model::find_by_name(&db, "Stray Corp")
        .await
        .unwrap()
        .is_none());
    assert_eq!(Company::find().count(&db).await.unwrap(), 3);
    assert_eq!(InterviewFlow::find().count(&db).await.unwrap(), 3);

    // Tables the seeder never populates end up empty as well.
    assert_eq!(Application::find().count(&db).await.unwrap(), 0);
    assert_eq!(Interview::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn position_foreign_keys_resolve() {
    let db = setup_test_db().await;
    seed_all(&db).await.unwrap();

    let pos = position::Model::find_by_title(&db, "Senior Software Engineer")
        .await
        .unwrap()
        .unwrap();

    let employer = Company::find_by_id(pos.company_id).one(&db).await.unwrap();
    assert_eq!(employer.unwrap().name, "TechCorp");

    let flow = InterviewFlow::find_by_id(pos.interview_flow_id)
        .one(&db)
        .await
        .unwrap();
    assert_eq!(flow.unwrap().name, "Standard Engineering Position");

    let status = PositionStatus::find_by_id(pos.position_status_id.unwrap())
        .one(&db)
        .await
        .unwrap();
    assert_eq!(status.unwrap().name, "Active");

    let loc = Location::find_by_id(pos.location_id.unwrap())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loc.city, "Barcelona");
    assert_eq!(loc.state.as_deref(), Some("Catalonia"));

    let employment = EmploymentType::find_by_id(pos.employment_type_id.unwrap())
        .one(&db)
        .await
        .unwrap();
    assert_eq!(employment.unwrap().name, "Full-time");

    let min = pos.salary_min.unwrap();
    let max = pos.salary_max.unwrap();
    assert_eq!(min, 60000.00);
    assert_eq!(max, 80000.00);
    assert!(min <= max);

    assert_eq!(
        pos.application_deadline,
        chrono::NaiveDate::from_ymd_opt(2024, 12, 31)
    );
}

#[tokio::test]
async fn employees_belong_to_first_company() {
    let db = setup_test_db().await;
    seed_all(&db).await.unwrap();

    let techcorp = company::Model::find_by_name(&db, "TechCorp")
        .await
        .unwrap()
        .unwrap();

    let employees = Employee::find()
        .filter(db::models::employee::Column::CompanyId.eq(techcorp.id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(employees.len(), 2);

    let mut emails: Vec<&str> = employees.iter().map(|e| e.email.as_str()).collect();
    emails.sort();
    assert_eq!(
        emails,
        vec!["jane.smith@techcorp.com", "john.doe@techcorp.com"]
    );
}

#[tokio::test]
async fn duplicate_company_insert_surfaces_as_error() {
    let db = setup_test_db().await;
    seed_all(&db).await.unwrap();

    // Re-running the company stage without a cleanup hits the unique
    // constraint on companies.name.
    let result = CompanySeeder.seed(&db).await;
    assert!(matches!(result, Err(SeedError::Db(_))));
}

#[tokio::test]
async fn lookup_rows_match_fixture_values() {
    let db = setup_test_db().await;
    seed_all(&db).await.unwrap();

    let remote = location::Model::find_by_city(&db, "Remote")
        .await
        .unwrap()
        .unwrap();
    assert!(remote.state.is_none());
    assert_eq!(remote.country, "Global");

    let mut statuses: Vec<(String, Option<String>)> = ApplicationStatus::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|s| (s.name, s.color))
        .collect();
    statuses.sort();
    assert_eq!(
        statuses,
        vec![
            ("Accepted".to_string(), Some("#32CD32".to_string())),
            ("Pending".to_string(), Some("#FFA500".to_string())),
            ("Rejected".to_string(), Some("#DC143C".to_string())),
            ("Reviewing".to_string(), Some("#4169E1".to_string())),
            ("Withdrawn".to_string(), Some("#808080".to_string())),
        ]
    );

    let mut results: Vec<String> = InterviewResult::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    results.sort();
    assert_eq!(results, vec!["Failed", "Passed", "Pending", "Rescheduled"]);

    let mut types: Vec<String> = InterviewType::find()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    types.sort();
    assert_eq!(
        types,
        vec![
            "Behavioral Interview",
            "Final Interview",
            "Phone Screening",
            "Technical Interview",
        ]
    );
}
