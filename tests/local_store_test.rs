use career_compass::{CareerRecord, CompassError, JobRecord, LocalStore, RecordStore};

#[tokio::test]
async fn test_fixtures_load_and_list() {
    let careers = LocalStore::<CareerRecord>::careers(false).unwrap();
    let all = careers.get_all().await.unwrap();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].title, "Software Engineer");

    let jobs = LocalStore::<JobRecord>::jobs(false).unwrap();
    assert_eq!(jobs.get_all().await.unwrap().len(), 6);

    let learning = career_compass::LocalStore::learning(false).unwrap();
    assert_eq!(learning.get_all().await.unwrap().len(), 12);
}

#[tokio::test]
async fn test_get_by_id_and_not_found() {
    let store = LocalStore::<CareerRecord>::careers(false).unwrap();

    let career = store.get_by_id(3).await.unwrap();
    assert_eq!(career.title, "UX Designer");

    let err = store.get_by_id(99).await.unwrap_err();
    match err {
        CompassError::NotFound { entity, id } => {
            assert_eq!(entity, "Career");
            assert_eq!(id, 99);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_assigns_next_id() {
    let store = LocalStore::<CareerRecord>::careers(false).unwrap();

    let new_career = CareerRecord {
        title: "Site Reliability Engineer".to_string(),
        match_score: 87,
        ..Default::default()
    };
    let created = store.create(new_career).await.unwrap();
    assert_eq!(created.id, 7);

    let fetched = store.get_by_id(7).await.unwrap();
    assert_eq!(fetched.title, "Site Reliability Engineer");
}

#[tokio::test]
async fn test_update_replaces_record_and_keeps_id() {
    let store = LocalStore::<CareerRecord>::careers(false).unwrap();

    let mut career = store.get_by_id(5).await.unwrap();
    career.match_score = 99;
    career.id = 42; // the path id wins over whatever the payload says

    let updated = store.update(5, career).await.unwrap();
    assert_eq!(updated.id, 5);
    assert_eq!(updated.match_score, 99);

    assert_eq!(store.get_by_id(5).await.unwrap().match_score, 99);
}

#[tokio::test]
async fn test_delete_removes_and_returns_record() {
    let store = LocalStore::<JobRecord>::jobs(false).unwrap();

    let deleted = store.delete(2).await.unwrap();
    assert_eq!(deleted.company, "Northfield Health");

    assert!(matches!(
        store.delete(2).await.unwrap_err(),
        CompassError::NotFound { .. }
    ));
    assert_eq!(store.get_all().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_missing_optional_fields_default() {
    let fixture = r#"[{ "Id": 1, "title": "Minimal Career" }]"#;
    let store = LocalStore::<CareerRecord>::from_json(fixture, false).unwrap();

    let career = store.get_by_id(1).await.unwrap();
    assert_eq!(career.match_score, 0);
    assert!(career.required_skills.is_empty());
    assert!(career.pros.is_empty());
    assert!(career.growth_projection.is_none());
}
