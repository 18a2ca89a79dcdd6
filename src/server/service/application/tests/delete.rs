use super::*;

/// Expect apply then delete of a pending application to restore hours, list and counters
#[tokio::test]
async fn pending_round_trip_restores_state() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default().hours(3.0))
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let existing = test.workflow().insert_ledger(student.id, series.id, 5.0).await?;

    let application_service = service(&test.db);
    let application = application_service
        .apply(request(&student, &module))
        .await
        .unwrap();

    let result = application_service
        .delete(application.id, student.id, student.role)
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let ledger = ledger(&test.db, student.id, series.id).await.unwrap();
    assert_eq!(ledger.available_hours_per_week, 5.0);
    assert!(ledger_application_ids(&test.db, existing.id).await.is_empty());
    let module_after = reload_module(&test.db, module.id).await;
    assert_eq!(module_after.applied_undergraduate_count, 0);
    assert_eq!(
        module_after.undergraduate_remaining,
        module.undergraduate_remaining
    );
    assert_eq!(application_count(&test.db).await, 0);

    Ok(())
}

/// Expect deleting an accepted application to reverse the review as well as the apply
#[tokio::test]
async fn reverses_accepted_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default().hours(4.0))
        .await?;
    let student = test.workflow().insert_user(UserRole::Postgraduate).await?;

    let application_service = service(&test.db);
    let application = application_service
        .apply(request(&student, &module))
        .await
        .unwrap();
    application_service
        .accept(application.id, lecturer.id)
        .await
        .unwrap();
    let accepted = reload_module(&test.db, module.id).await;

    application_service
        .delete(application.id, student.id, student.role)
        .await
        .unwrap();

    let module_after = reload_module(&test.db, module.id).await;
    assert_eq!(module_after.postgraduate_accepted, accepted.postgraduate_accepted - 1);
    assert_eq!(module_after.postgraduate_reviewed, accepted.postgraduate_reviewed - 1);
    assert_eq!(
        module_after.postgraduate_remaining,
        accepted.postgraduate_remaining + 1
    );
    assert_eq!(module_after.applied_postgraduate_count, 0);

    let ledger = ledger(&test.db, student.id, series.id).await.unwrap();
    assert_eq!(ledger.available_hours_per_week, 10.0);
    assert!(ledger_application_ids(&test.db, ledger.id).await.is_empty());

    Ok(())
}

/// Expect a rejected application's deletion to undo the review without refunding twice
#[tokio::test]
async fn reverses_rejected_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let (module, lecturer) = test
        .workflow()
        .insert_coordinated_module(series.id, ModuleSpec::default().hours(4.0))
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let application_service = service(&test.db);
    let application = application_service
        .apply(request(&student, &module))
        .await
        .unwrap();
    application_service
        .reject(application.id, lecturer.id, None)
        .await
        .unwrap();

    application_service
        .delete(application.id, student.id, student.role)
        .await
        .unwrap();

    let module_after = reload_module(&test.db, module.id).await;
    assert_eq!(module_after.applied_undergraduate_count, 0);
    assert_eq!(module_after.undergraduate_reviewed, 0);
    assert_eq!(
        module_after.undergraduate_remaining,
        module.undergraduate_remaining
    );
    let ledger = ledger(&test.db, student.id, series.id).await.unwrap();
    assert_eq!(ledger.available_hours_per_week, 6.0);

    Ok(())
}

/// Expect an admin to be able to delete another user's application
#[tokio::test]
async fn admin_can_delete() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let admin = test.workflow().insert_user(UserRole::Admin).await?;

    let application_service = service(&test.db);
    let application = application_service
        .apply(request(&student, &module))
        .await
        .unwrap();

    let result = application_service
        .delete(application.id, admin.id, admin.role)
        .await;

    assert!(result.is_ok());
    assert_eq!(application_count(&test.db).await, 0);

    Ok(())
}

/// Expect Forbidden when another student tries to delete the application
#[tokio::test]
async fn fails_for_other_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let other = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let application_service = service(&test.db);
    let application = application_service
        .apply(request(&student, &module))
        .await
        .unwrap();

    let result = application_service
        .delete(application.id, other.id, other.role)
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::Forbidden(_)))
    ));
    assert_eq!(application_count(&test.db).await, 1);

    Ok(())
}

/// Expect only the application to be removed when the applicant has no ledger
#[tokio::test]
async fn deletes_without_ledger() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;
    let application = test
        .workflow()
        .insert_application(student.id, module.id, ApplicationStatus::Pending)
        .await?;

    let result = service(&test.db)
        .delete(application.id, student.id, student.role)
        .await;

    assert!(result.is_ok());
    assert_eq!(application_count(&test.db).await, 0);
    let module_after = reload_module(&test.db, module.id).await;
    assert_eq!(
        module_after.undergraduate_remaining,
        module.undergraduate_remaining
    );

    Ok(())
}

/// Expect ApplicationNotFound for an application ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let result = service(&test.db)
        .delete(8, student.id, student.role)
        .await;

    assert!(matches!(
        result,
        Err(Error::WorkflowError(WorkflowError::ApplicationNotFound(8)))
    ));

    Ok(())
}
