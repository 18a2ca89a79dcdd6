use super::*;
use tarecruit::{
    model::{
        application::{ApplicationDto, ApplyRequestDto, AppliedModuleDto, UserIdQuery},
        module::ModuleDto,
    },
    server::controller::ta::{
        apply, delete_application, get_accepted_modules, get_applied_modules, get_requests,
    },
};

fn request(user: &entity::user::Model, module: &entity::module::Model) -> ApplyRequestDto {
    ApplyRequestDto {
        user_id: user.id,
        user_role: user.role,
        module_id: module.id,
        rec_series_id: module.recruitment_series_id,
        ta_hours: Some(module.required_ta_hours),
    }
}

/// Expect 201 with the pending application
#[tokio::test]
async fn apply_returns_created() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let resp = apply(State(app_state(&test)), Json(request(&student, &module)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let application: ApplicationDto = body_json(resp).await;
    assert_eq!(application.user_id, student.id);
    assert_eq!(application.status, ApplicationStatus::Pending);

    Ok(())
}

/// Expect 409 with an error body when applying twice
#[tokio::test]
async fn apply_twice_returns_conflict() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let first = apply(State(app_state(&test)), Json(request(&student, &module)))
        .await
        .into_response();
    let second = apply(State(app_state(&test)), Json(request(&student, &module)))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body: ErrorDto = body_json(second).await;
    assert_eq!(body.error, "You have already applied for this module");

    Ok(())
}

/// Expect 400 when the requested hours disagree with the module
#[tokio::test]
async fn apply_with_wrong_hours_returns_bad_request() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default().hours(4.0))
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let mut body = request(&student, &module);
    body.ta_hours = Some(1.0);
    let resp = apply(State(app_state(&test)), Json(body))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect advertised modules for the user's role, minus those already applied for
#[tokio::test]
async fn requests_exclude_applied_modules() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let applied = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default().hours(2.0))
        .await?;
    let open = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default().hours(2.0))
        .await?;
    test.workflow()
        .insert_module(series.id, ModuleSpec::default().status(ModuleStatus::Pending))
        .await?;
    let student = test.workflow().insert_user(UserRole::Postgraduate).await?;

    apply(State(app_state(&test)), Json(request(&student, &applied)))
        .await
        .into_response();
    let resp = get_requests(
        State(app_state(&test)),
        Query(UserIdQuery {
            user_id: student.id,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let modules: Vec<ModuleDto> = body_json(resp).await;
    let ids: Vec<i32> = modules.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![open.id]);

    Ok(())
}

/// Expect 404 listing applications for an unknown user
#[tokio::test]
async fn applied_modules_for_unknown_user_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_workflow_tables().build().await?;

    let resp = get_applied_modules(State(app_state(&test)), Query(UserIdQuery { user_id: 9 }))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect applied and accepted listings to reflect the application
#[tokio::test]
async fn lists_applied_and_accepted_modules() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    apply(State(app_state(&test)), Json(request(&student, &module)))
        .await
        .into_response();

    let applied = get_applied_modules(
        State(app_state(&test)),
        Query(UserIdQuery {
            user_id: student.id,
        }),
    )
    .await
    .into_response();
    let accepted = get_accepted_modules(
        State(app_state(&test)),
        Query(UserIdQuery {
            user_id: student.id,
        }),
    )
    .await
    .into_response();

    assert_eq!(applied.status(), StatusCode::OK);
    let applied: Vec<AppliedModuleDto> = body_json(applied).await;
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].module.id, module.id);

    assert_eq!(accepted.status(), StatusCode::OK);
    let accepted: Vec<serde_json::Value> = body_json(accepted).await;
    assert!(accepted.is_empty());

    Ok(())
}

/// Expect 200 when the applicant withdraws their own application
#[tokio::test]
async fn applicant_can_delete_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let created = apply(State(app_state(&test)), Json(request(&student, &module)))
        .await
        .into_response();
    let application: ApplicationDto = body_json(created).await;
    login(&test.session, student.id).await;

    let resp = delete_application(
        State(app_state(&test)),
        test.session.clone(),
        Path(application.id),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 deleting without a session user
#[tokio::test]
async fn delete_without_session_returns_unauthorized() -> Result<(), TestError> {
    let test = TestBuilder::new().with_workflow_tables().build().await?;

    let resp = delete_application(State(app_state(&test)), test.session.clone(), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 when another student tries to delete the application
#[tokio::test]
async fn other_student_cannot_delete_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let other = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let application = test
        .workflow()
        .insert_application(student.id, module.id, ApplicationStatus::Pending)
        .await?;
    login(&test.session, other.id).await;

    let resp = delete_application(
        State(app_state(&test)),
        test.session.clone(),
        Path(application.id),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
