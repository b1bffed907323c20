#[cfg(test)]
mod model_tests {
    use jiff::{
        Timestamp,
        civil::date,
        tz::{self, TimeZone},
    };
    use serde_json::json;

    use crate::{
        models::{
            AUTO_CLEANUP_REASON, LogAction, LogEntry, LogFilter, Priority, Task, clamp_percentage,
        },
        store::Document,
    };

    fn create_test_task() -> Task {
        Task {
            id: 7,
            text: "Water the plants".to_string(),
            description: Some("Balcony and kitchen".to_string()),
            link: Some("https://example.com/plants".to_string()),
            completed: false,
            priority: Some(Priority::High),
            percentage: Some(40),
            created_at: Timestamp::from_second(1_760_000_000).unwrap(),
        }
    }

    #[test]
    fn test_priority_parse_and_rank() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());

        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_task_serializes_camel_case_without_id() {
        let record = create_test_task().to_record().unwrap();

        assert!(record.get("id").is_none());
        assert_eq!(record["text"], "Water the plants");
        assert_eq!(record["priority"], "high");
        assert_eq!(record["percentage"], 40);
        assert!(record.get("createdAt").is_some());
        assert!(record.get("created_at").is_none());
    }

    #[test]
    fn test_task_missing_fields_use_defaults() {
        let document = Document {
            id: 3,
            data: json!({
                "text": "Old task",
                "createdAt": "2026-10-12T08:00:00Z"
            }),
        };
        let task = Task::from_document(document).unwrap();

        assert_eq!(task.id, 3);
        assert!(!task.completed);
        assert_eq!(task.priority, None);
        assert_eq!(task.priority(), Priority::Medium);
        assert_eq!(task.percentage(), 0);
        assert!(!task.has_details());
    }

    #[test]
    fn test_task_unset_optionals_are_not_serialized() {
        let mut task = create_test_task();
        task.priority = None;
        task.percentage = None;
        let record = task.to_record().unwrap();

        assert!(record.get("priority").is_none());
        assert!(record.get("percentage").is_none());
    }

    #[test]
    fn test_clamp_percentage_bounds() {
        assert_eq!(clamp_percentage(i64::MIN), 0);
        assert_eq!(clamp_percentage(0), 0);
        assert_eq!(clamp_percentage(100), 100);
        assert_eq!(clamp_percentage(i64::MAX), 100);
    }

    #[test]
    fn test_log_entry_snapshots_task_and_week() {
        let task = create_test_task();
        // Friday of ISO week 42
        let at = date(2026, 10, 16)
            .at(15, 30, 0, 0)
            .to_zoned(TimeZone::fixed(tz::offset(2)))
            .unwrap();

        let entry = LogEntry::new(LogAction::Completed, &task, &at).unwrap();

        assert_eq!(entry.action, LogAction::Completed);
        assert_eq!(entry.task_title, "Water the plants");
        assert_eq!(entry.task_description.as_deref(), Some("Balcony and kitchen"));
        assert_eq!(entry.task_link.as_deref(), Some("https://example.com/plants"));
        assert_eq!(entry.timestamp, at.timestamp());
        assert_eq!(entry.week_number, 42);
        assert_eq!(entry.year, 2026);
        assert_eq!(
            entry.week_start,
            "2026-10-11T22:00:00Z".parse::<Timestamp>().unwrap()
        );
        assert!(!entry.is_auto_deleted());
    }

    #[test]
    fn test_log_entry_auto_deleted_round_trip() {
        let at = date(2026, 10, 19)
            .at(9, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        let entry = LogEntry::new(LogAction::Deleted, &create_test_task(), &at)
            .unwrap()
            .auto_deleted(AUTO_CLEANUP_REASON);

        let record = entry.to_record().unwrap();
        assert_eq!(record["autoDeleted"], true);
        assert_eq!(record["reason"], AUTO_CLEANUP_REASON);
        assert_eq!(record["weekNumber"], 43);

        let decoded = LogEntry::from_document(Document { id: 11, data: record }).unwrap();
        assert_eq!(decoded.id, 11);
        assert!(decoded.is_auto_deleted());
        assert_eq!(decoded.reason.as_deref(), Some(AUTO_CLEANUP_REASON));
    }

    #[test]
    fn test_log_filter_matches_actions() {
        assert!(LogFilter::All.matches(LogAction::Added));
        assert!(LogFilter::All.matches(LogAction::Deleted));
        assert!(LogFilter::Completed.matches(LogAction::Completed));
        assert!(!LogFilter::Completed.matches(LogAction::Added));
        assert!(!LogFilter::Deleted.matches(LogAction::Completed));
    }

    #[test]
    fn test_log_action_labels() {
        assert_eq!(LogAction::Added.label(), "+ Added");
        assert_eq!(LogAction::Completed.label(), "✓ Completed");
        assert_eq!(LogAction::Deleted.label(), "✗ Deleted");
        assert_eq!("Deleted".parse::<LogAction>().unwrap(), LogAction::Deleted);
    }
}
