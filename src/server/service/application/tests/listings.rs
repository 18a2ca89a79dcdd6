use super::*;

/// Expect every application with its module and coordinators
#[tokio::test]
async fn lists_applied_modules_with_coordinators() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (first, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default().hours(2.0))
        .await?;
    let second = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default().hours(2.0))
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let application_service = service(&test.db);
    application_service
        .apply(request(&student, &first))
        .await
        .unwrap();
    application_service
        .apply(request(&student, &second))
        .await
        .unwrap();

    let result = application_service
        .applied_modules(student.id)
        .await
        .unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].module.id, first.id);
    assert_eq!(result[0].coordinators.len(), 1);
    assert_eq!(result[0].coordinators[0].id, lecturer.id);
    assert_eq!(result[1].module.id, second.id);
    assert!(result[1].coordinators.is_empty());

    Ok(())
}

/// Expect only accepted applications
#[tokio::test]
async fn lists_accepted_modules() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (accepted_module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default().hours(2.0))
        .await?;
    let pending_module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default().hours(2.0))
        .await?;
    let student = test.workflow().insert_user(UserRole::Postgraduate).await?;

    let application_service = service(&test.db);
    let application = application_service
        .apply(request(&student, &accepted_module))
        .await
        .unwrap();
    application_service
        .apply(request(&student, &pending_module))
        .await
        .unwrap();
    application_service
        .accept(application.id, lecturer.id)
        .await
        .unwrap();

    let result = application_service
        .accepted_modules(student.id)
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].module.id, accepted_module.id);
    assert_eq!(result[0].application.status, ApplicationStatus::Accepted);

    Ok(())
}

/// Expect UserNotFound for a user ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_workflow_tables().build().await?;

    let application_service = service(&test.db);
    let applied = application_service.applied_modules(4).await;
    let accepted = application_service.accepted_modules(4).await;

    assert!(matches!(
        applied,
        Err(Error::WorkflowError(WorkflowError::UserNotFound(4)))
    ));
    assert!(matches!(
        accepted,
        Err(Error::WorkflowError(WorkflowError::UserNotFound(4)))
    ));

    Ok(())
}
