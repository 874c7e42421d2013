#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use taskboard::libs::task::{parse_due_date, NewTask, Status, Task, TaskError, TaskFilter, TaskPatch, TaskStatus};

    #[test]
    fn test_status_parsing() {
        assert_eq!("pending".parse::<Status>().unwrap(), Status::Pending);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("completed".parse::<Status>().unwrap(), Status::Completed);
        assert_eq!(
            "done".parse::<Status>(),
            Err(TaskError::InvalidStatus("done".to_string()))
        );
        assert_eq!(Status::default(), Status::Pending);
        assert_eq!(Status::InProgress.to_string(), "in-progress");
        assert_eq!(Status::InProgress.title(), "In Progress");
    }

    #[test]
    fn test_task_decodes_api_record() {
        let json = r#"{
            "id": "9b2f",
            "title": "Ship it",
            "description": null,
            "status": "in-progress",
            "due_date": "2024-01-20T00:00:00+00:00",
            "created_at": "2024-01-10T08:30:00.123456",
            "user_id": "u1"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.status, TaskStatus::Known(Status::InProgress));
        assert_eq!(task.due_date, Some(Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap()));
        assert!(task.created_at.is_some());
        assert_eq!(task.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_task_keeps_unknown_status() {
        let json = r#"{"id": "1", "title": "Old", "status": "archived"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.status, TaskStatus::Unrecognized("archived".to_string()));
        assert_eq!(task.status.column(), None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_new_task_validation() {
        assert_eq!(NewTask::new("   ").validate(), Err(TaskError::EmptyTitle));

        let draft = NewTask {
            title: "  Plan sprint ".to_string(),
            description: Some("   ".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(draft.title, "Plan sprint");
        assert_eq!(draft.description, None);
        assert_eq!(draft.status, Status::Pending);
    }

    #[test]
    fn test_new_task_body() {
        let draft = NewTask {
            due_date: Some(Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap()),
            ..NewTask::new("Plan")
        };
        let body = serde_json::to_value(&draft).unwrap();

        assert_eq!(body["title"], "Plan");
        assert_eq!(body["status"], "pending");
        assert_eq!(body["due_date"], "2024-01-20T00:00:00+00:00");
    }

    #[test]
    fn test_patch_validation() {
        assert_eq!(TaskPatch::default().validate(), Err(TaskError::NoFieldsToUpdate));

        let blank_title = TaskPatch {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank_title.validate(), Err(TaskError::EmptyTitle));

        let clear_description = TaskPatch {
            description: Some(Some("".to_string())),
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(clear_description.description, Some(None));
    }

    #[test]
    fn test_patch_body_only_carries_set_fields() {
        let body = serde_json::to_value(TaskPatch::status(Status::Completed)).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "completed" }));

        let clear_due = TaskPatch {
            due_date: Some(None),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(clear_due).unwrap(), serde_json::json!({ "due_date": null }));
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2024-01-20").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_due_date("2024-01-20T10:30:00Z").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 20, 10, 30, 0).unwrap()
        );
        assert!(parse_due_date("2024-01-20T10:30").is_ok());
        assert_eq!(
            parse_due_date("next week"),
            Err(TaskError::InvalidDueDate("next week".to_string()))
        );
    }

    #[test]
    fn test_filter_from_option() {
        assert_eq!(TaskFilter::from(None), TaskFilter::All);
        assert_eq!(TaskFilter::from(Some(Status::Completed)), TaskFilter::ByStatus(Status::Completed));
        assert_eq!(TaskFilter::ByStatus(Status::Pending).status(), Some(Status::Pending));
        assert_eq!(TaskFilter::All.status(), None);
    }
}
