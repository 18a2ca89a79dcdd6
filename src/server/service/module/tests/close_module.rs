use super::*;

/// Expect an advertised module to close and drop out of open requests
#[tokio::test]
async fn closes_advertised_module() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default())
        .await?;
    let student = test.workflow().insert_user(UserRole::Undergraduate).await?;

    let module_service = ModuleService::new(&test.db);
    let result = module_service.close_module(module.id).await.unwrap();
    let requests = module_service.list_requests(student.id).await.unwrap();

    assert_eq!(result.module_status, ModuleStatus::Closed);
    assert!(requests.is_empty());

    Ok(())
}

/// Expect a closed module to stay closed and refuse advertising
#[tokio::test]
async fn closing_is_final() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_workflow_tables().build().await?;
    let series = test.workflow().insert_series().await?;
    let module = test
        .workflow()
        .insert_module(series.id, ModuleSpec::default().status(ModuleStatus::Pending))
        .await?;

    let module_service = ModuleService::new(&test.db);
    module_service.close_module(module.id).await.unwrap();
    let again = module_service.close_module(module.id).await.unwrap();
    let advertised = module_service.advertise_module(module.id).await;

    assert_eq!(again.module_status, ModuleStatus::Closed);
    assert!(matches!(
        advertised,
        Err(Error::WorkflowError(WorkflowError::ModuleClosed(_)))
    ));

    Ok(())
}

/// Expect ModuleNotFound for a module ID that does not exist
#[tokio::test]
async fn fails_for_nonexistent_module() -> Result<(), TestError> {
    let test = TestBuilder::new().with_workflow_tables().build().await?;

    let module_service = ModuleService::new(&test.db);
    let result = module_service.close_module(5).await;

    assert!(matches!(
        result,
        Err(Error::WorkflowError(WorkflowError::ModuleNotFound(5)))
    ));

    Ok(())
}
