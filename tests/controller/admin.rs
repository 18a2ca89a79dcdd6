use super::*;
use chrono::{Duration, Utc};
use tarecruit::{
    model::{
        module::{CreateModuleDto, ModuleDto},
        recruitment::{CreateRecruitmentSeriesDto, RecruitmentSeriesDto},
        user::{CreateUserDto, UserDto},
    },
    server::controller::admin::{
        advertise_module, archive_series, close_module, create_module, create_series,
        create_user, get_series,
    },
};

fn series_request(name: &str) -> CreateRecruitmentSeriesDto {
    CreateRecruitmentSeriesDto {
        name: name.to_string(),
        application_due_date: (Utc::now() + Duration::days(30)).naive_utc(),
        undergrad_hour_limit: None,
        postgrad_hour_limit: Some(12.0),
    }
}

/// Expect 201 with the stored user
#[tokio::test]
async fn admin_can_create_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let admin = test.workflow().insert_user(UserRole::Admin).await?;
    login(&test.session, admin.id).await;

    let resp = create_user(
        State(app_state(&test)),
        test.session.clone(),
        Json(CreateUserDto {
            email: "New.Lecturer@Example.ac.uk".to_string(),
            name: "New Lecturer".to_string(),
            role: UserRole::Lecturer,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: UserDto = body_json(resp).await;
    assert_eq!(user.email, "new.lecturer@example.ac.uk");
    assert_eq!(user.role, UserRole::Lecturer);

    Ok(())
}

/// Expect 403 for a non-admin session user
#[tokio::test]
async fn non_admin_cannot_create_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let lecturer = test.workflow().insert_user(UserRole::Lecturer).await?;
    login(&test.session, lecturer.id).await;

    let resp = create_user(
        State(app_state(&test)),
        test.session.clone(),
        Json(CreateUserDto {
            email: "someone@example.ac.uk".to_string(),
            name: "Someone".to_string(),
            role: UserRole::Admin,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect a created series with default and explicit hour limits, listed afterwards
#[tokio::test]
async fn creates_and_lists_series() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let admin = test.workflow().insert_user(UserRole::Admin).await?;
    login(&test.session, admin.id).await;

    let created = create_series(
        State(app_state(&test)),
        test.session.clone(),
        Json(series_request("Autumn 2026")),
    )
    .await
    .into_response();
    let listed = get_series(State(app_state(&test)), test.session.clone())
        .await
        .into_response();

    assert_eq!(created.status(), StatusCode::CREATED);
    let series: RecruitmentSeriesDto = body_json(created).await;
    assert_eq!(series.undergrad_hour_limit, 6.0);
    assert_eq!(series.postgrad_hour_limit, 12.0);

    assert_eq!(listed.status(), StatusCode::OK);
    let listed: Vec<RecruitmentSeriesDto> = body_json(listed).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, series.id);

    Ok(())
}

/// Expect a pending module that becomes advertised
#[tokio::test]
async fn creates_and_advertises_module() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let admin = test.workflow().insert_user(UserRole::Admin).await?;
    let lecturer = test.workflow().insert_user(UserRole::Lecturer).await?;
    let series = test.workflow().insert_series().await?;
    login(&test.session, admin.id).await;

    let created = create_module(
        State(app_state(&test)),
        test.session.clone(),
        Json(CreateModuleDto {
            recruitment_series_id: series.id,
            code: "COMP1010".to_string(),
            name: "Programming Fundamentals".to_string(),
            semester: "Autumn".to_string(),
            required_ta_hours: 3.0,
            required_undergraduate_ta_count: 2,
            required_postgraduate_ta_count: 1,
            coordinator_ids: vec![lecturer.id],
        }),
    )
    .await
    .into_response();

    assert_eq!(created.status(), StatusCode::CREATED);
    let module: ModuleDto = body_json(created).await;
    assert_eq!(module.module_status, ModuleStatus::Pending);
    assert_eq!(module.undergraduate_counts.remaining, 2);

    let advertised = advertise_module(
        State(app_state(&test)),
        test.session.clone(),
        Path(module.id),
    )
    .await
    .into_response();

    assert_eq!(advertised.status(), StatusCode::OK);
    let module: ModuleDto = body_json(advertised).await;
    assert_eq!(module.module_status, ModuleStatus::Advertised);

    Ok(())
}

/// Expect 404 creating a module in a series that does not exist
#[tokio::test]
async fn create_module_for_unknown_series_returns_not_found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let admin = test.workflow().insert_user(UserRole::Admin).await?;
    login(&test.session, admin.id).await;

    let resp = create_module(
        State(app_state(&test)),
        test.session.clone(),
        Json(CreateModuleDto {
            recruitment_series_id: 77,
            code: "COMP2020".to_string(),
            name: "Algorithms".to_string(),
            semester: "Spring".to_string(),
            required_ta_hours: 2.0,
            required_undergraduate_ta_count: 1,
            required_postgraduate_ta_count: 1,
            coordinator_ids: vec![],
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect an archived series and a closed module in the responses
#[tokio::test]
async fn archives_series_and_closes_module() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let admin = test.workflow().insert_user(UserRole::Admin).await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    login(&test.session, admin.id).await;

    let closed = close_module(
        State(app_state(&test)),
        test.session.clone(),
        Path(module.id),
    )
    .await
    .into_response();
    let archived = archive_series(
        State(app_state(&test)),
        test.session.clone(),
        Path(series.id),
    )
    .await
    .into_response();

    assert_eq!(closed.status(), StatusCode::OK);
    let module: ModuleDto = body_json(closed).await;
    assert_eq!(module.module_status, ModuleStatus::Closed);
    assert_eq!(archived.status(), StatusCode::OK);
    let series: RecruitmentSeriesDto = body_json(archived).await;
    assert_eq!(series.status, entity::recruitment_series::SeriesStatus::Archived);

    Ok(())
}

/// Expect 403 archiving a series as a lecturer
#[tokio::test]
async fn lecturer_cannot_archive_series() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let lecturer = test.workflow().insert_user(UserRole::Lecturer).await?;
    let series = test.workflow().insert_series().await?;
    login(&test.session, lecturer.id).await;

    let resp = archive_series(
        State(app_state(&test)),
        test.session.clone(),
        Path(series.id),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
