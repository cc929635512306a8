#[cfg(test)]
mod model_tests {
    use std::str::FromStr;

    use serde_json::json;

    use crate::models::{DayPlan, TodoItem, TodoStatus};

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            TodoStatus::from_str("NOT_STARTED").unwrap(),
            TodoStatus::NotStarted
        );
        assert_eq!(
            TodoStatus::from_str("in_progress").unwrap(),
            TodoStatus::InProgress
        );
        assert_eq!(TodoStatus::from_str("done").unwrap(), TodoStatus::Done);
        assert!(TodoStatus::from_str("finished").is_err());
    }

    #[test]
    fn test_status_wire_representation() {
        assert_eq!(
            serde_json::to_value(TodoStatus::NotStarted).unwrap(),
            json!("NOT_STARTED")
        );
        assert_eq!(TodoStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(TodoStatus::default(), TodoStatus::NotStarted);
    }

    #[test]
    fn test_todo_serializes_with_wire_keys() {
        let todo = TodoItem {
            title: "리스트 컴프리헨션".to_string(),
            content: "예제 5개 작성".to_string(),
            status: TodoStatus::NotStarted,
            end_time: "2026-10-19 23:59".to_string(),
            accumulated_time: 0,
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "리스트 컴프리헨션",
                "content": "예제 5개 작성",
                "status_id": "NOT_STARTED",
                "end_time": "2026-10-19 23:59",
                "accumulated_time": 0
            })
        );
    }

    #[test]
    fn test_todo_missing_fields_use_defaults() {
        let todo: TodoItem = serde_json::from_value(json!({ "title": "복습" })).unwrap();
        assert_eq!(todo.title, "복습");
        assert_eq!(todo.content, "");
        assert_eq!(todo.status, TodoStatus::NotStarted);
        assert_eq!(todo.accumulated_time, 0);
    }

    #[test]
    fn test_accumulated_time_accepts_any_counter_number() {
        let todo: TodoItem =
            serde_json::from_value(json!({ "title": "a", "accumulated_time": 0.0 })).unwrap();
        assert_eq!(todo.accumulated_time, 0);

        let todo: TodoItem =
            serde_json::from_value(json!({ "title": "a", "accumulated_time": 90 })).unwrap();
        assert_eq!(todo.accumulated_time, 90);

        let todo: TodoItem =
            serde_json::from_value(json!({ "title": "a", "accumulated_time": 12.6 })).unwrap();
        assert_eq!(todo.accumulated_time, 13);

        assert!(serde_json::from_value::<TodoItem>(json!({ "accumulated_time": -1 })).is_err());
        assert!(serde_json::from_value::<TodoItem>(json!({ "accumulated_time": "0" })).is_err());
    }

    #[test]
    fn test_day_plan_requires_day_and_todos() {
        assert!(serde_json::from_value::<DayPlan>(json!({ "todos": [] })).is_err());
        assert!(serde_json::from_value::<DayPlan>(json!({ "day": 1 })).is_err());

        let day: DayPlan = serde_json::from_value(json!({
            "day": 2,
            "todos": [{ "title": "a" }, { "title": "b" }]
        }))
        .unwrap();
        assert_eq!(day.day, 2);
        assert_eq!(day.todo_count(), 2);
    }
}
