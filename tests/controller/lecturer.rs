use super::*;
use tarecruit::{
    model::{
        application::{ApplicationDto, ModuleApplicationDto, RejectApplicationDto},
        module::{ModuleDto, UpdateRequirementsDto},
    },
    server::controller::lecturer::{
        accept_application, get_module_applications, get_modules, reject_application,
        update_requirements,
    },
};

/// Expect 200 with the accepted application for the module's coordinator
#[tokio::test]
async fn coordinator_can_accept() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let application = test
        .workflow()
        .insert_application(student.id, module.id, ApplicationStatus::Pending)
        .await?;
    login(&test.session, lecturer.id).await;

    let resp = accept_application(
        State(app_state(&test)),
        test.session.clone(),
        Path(application.id),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let application: ApplicationDto = body_json(resp).await;
    assert_eq!(application.status, ApplicationStatus::Accepted);

    Ok(())
}

/// Expect 409 accepting an application that was already decided
#[tokio::test]
async fn accept_processed_application_returns_conflict() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let application = test
        .workflow()
        .insert_application(student.id, module.id, ApplicationStatus::Rejected)
        .await?;
    login(&test.session, lecturer.id).await;

    let resp = accept_application(
        State(app_state(&test)),
        test.session.clone(),
        Path(application.id),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 403 for a lecturer who doesn't coordinate the module
#[tokio::test]
async fn non_coordinator_cannot_reject() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, _) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default())
        .await?;
    let other = test.workflow().insert_user(UserRole::Lecturer).await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let application = test
        .workflow()
        .insert_application(student.id, module.id, ApplicationStatus::Pending)
        .await?;
    login(&test.session, other.id).await;

    let resp = reject_application(
        State(app_state(&test)),
        test.session.clone(),
        Path(application.id),
        None,
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect the rejection reason to be stored
#[tokio::test]
async fn coordinator_can_reject_with_reason() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Postgraduate).await?;
    let application = test
        .workflow()
        .insert_application(student.id, module.id, ApplicationStatus::Pending)
        .await?;
    login(&test.session, lecturer.id).await;

    let resp = reject_application(
        State(app_state(&test)),
        test.session.clone(),
        Path(application.id),
        Some(Json(RejectApplicationDto {
            reason: Some("Positions reserved for returning TAs".to_string()),
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let application: ApplicationDto = body_json(resp).await;
    assert_eq!(application.status, ApplicationStatus::Rejected);
    assert_eq!(
        application.rejection_reason.as_deref(),
        Some("Positions reserved for returning TAs")
    );

    Ok(())
}

/// Expect the lecturer's coordinated modules and their applications
#[tokio::test]
async fn lists_coordinated_modules_and_applications() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default())
        .await?;
    test.workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    test.workflow()
        .insert_application(student.id, module.id, ApplicationStatus::Pending)
        .await?;
    login(&test.session, lecturer.id).await;

    let modules = get_modules(State(app_state(&test)), test.session.clone())
        .await
        .into_response();
    let applications = get_module_applications(
        State(app_state(&test)),
        test.session.clone(),
        Path(module.id),
    )
    .await
    .into_response();

    assert_eq!(modules.status(), StatusCode::OK);
    let modules: Vec<ModuleDto> = body_json(modules).await;
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].id, module.id);

    assert_eq!(applications.status(), StatusCode::OK);
    let applications: Vec<ModuleApplicationDto> = body_json(applications).await;
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].applicant.id, student.id);

    Ok(())
}

/// Expect 400 when lowering a headcount below the positions already taken
#[tokio::test]
async fn update_requirements_below_taken_returns_bad_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default().positions(2, 2))
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let other = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let state = app_state(&test);
    for user in [&student, &other] {
        tarecruit::server::controller::ta::apply(
            State(state.clone()),
            Json(tarecruit::model::application::ApplyRequestDto {
                user_id: user.id,
                user_role: user.role,
                module_id: module.id,
                rec_series_id: series.id,
                ta_hours: Some(module.required_ta_hours),
            }),
        )
        .await
        .into_response();
    }
    login(&test.session, lecturer.id).await;

    let resp = update_requirements(
        State(state),
        test.session.clone(),
        Path(module.id),
        Json(UpdateRequirementsDto {
            required_undergraduate_ta_count: 1,
            required_postgraduate_ta_count: 2,
            required_ta_hours: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
