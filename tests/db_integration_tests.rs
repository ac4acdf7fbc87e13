//! Integration tests for the database layer.
//!
//! These tests verify the task operations using an in-memory SQLite
//! database.

use todo_web::db::Database;

/// Helper to create a fresh in-memory database for testing.
fn setup_db() -> Database {
    Database::open_in_memory().expect("Failed to create in-memory database")
}

mod create_tests {
    use super::*;

    #[test]
    fn create_task_stores_description_uncompleted() {
        let db = setup_db();

        let task = db.create_task("Buy milk").expect("Failed to create task");

        assert_eq!(task.description, "Buy milk");
        assert!(!task.completed);
        assert!(task.created_at > 0);

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Buy milk");
    }

    #[test]
    fn created_ids_are_unique_and_never_reused() {
        let db = setup_db();

        let first = db.create_task("first").unwrap();
        let second = db.create_task("second").unwrap();
        assert_ne!(first.id, second.id);

        db.delete_task(second.id).unwrap();
        let third = db.create_task("third").unwrap();
        assert!(third.id > second.id);
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn delete_removes_the_row() {
        let db = setup_db();
        let task = db.create_task("ephemeral").unwrap();

        let deleted = db.delete_task(task.id).unwrap();

        assert!(deleted);
        assert!(db.list_tasks().unwrap().is_empty());
    }

    #[test]
    fn delete_nonexistent_id_is_a_noop() {
        let db = setup_db();
        db.create_task("keep me").unwrap();

        let deleted = db.delete_task(99_999).unwrap();

        assert!(!deleted);
        assert_eq!(db.list_tasks().unwrap().len(), 1);
    }
}

mod toggle_tests {
    use super::*;

    #[test]
    fn get_completed_returns_none_for_absent_id() {
        let db = setup_db();

        assert_eq!(db.get_completed(42).unwrap(), None);
    }

    #[test]
    fn set_completed_flips_the_flag() {
        let db = setup_db();
        let task = db.create_task("flip me").unwrap();

        db.set_completed(task.id, true).unwrap();
        assert_eq!(db.get_completed(task.id).unwrap(), Some(true));

        db.set_completed(task.id, false).unwrap();
        assert_eq!(db.get_completed(task.id).unwrap(), Some(false));
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let db = setup_db();
        let task = db.create_task("there and back").unwrap();
        let original = db.get_completed(task.id).unwrap().unwrap();

        for _ in 0..2 {
            let current = db.get_completed(task.id).unwrap().unwrap_or(false);
            db.set_completed(task.id, !current).unwrap();
        }

        assert_eq!(db.get_completed(task.id).unwrap(), Some(original));
    }

    #[test]
    fn set_completed_on_absent_id_creates_no_row() {
        let db = setup_db();

        db.set_completed(42, true).unwrap();

        assert!(db.list_tasks().unwrap().is_empty());
    }
}

mod ordering_tests {
    use super::*;

    #[test]
    fn incomplete_tasks_sort_before_completed_newest_first() {
        let db = setup_db();

        let a = db.create_task("A").unwrap();
        let b = db.create_task("B").unwrap();
        let c = db.create_task("C").unwrap();
        db.set_completed(b.id, true).unwrap();

        let tasks = db.list_tasks().unwrap();
        let order: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();

        assert_eq!(order, vec!["C", "A", "B"]);
        assert_eq!(tasks[0].id, c.id);
        assert_eq!(tasks[1].id, a.id);
        assert_eq!(tasks[2].id, b.id);
    }

    #[test]
    fn completed_group_is_also_newest_first() {
        let db = setup_db();

        let a = db.create_task("old done").unwrap();
        let b = db.create_task("new done").unwrap();
        db.set_completed(a.id, true).unwrap();
        db.set_completed(b.id, true).unwrap();

        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks[0].id, b.id);
        assert_eq!(tasks[1].id, a.id);
    }
}

mod open_tests {
    use super::*;

    #[test]
    fn open_creates_database_file_and_persists_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.db");

        {
            let db = Database::open(&path).expect("Failed to open database");
            db.create_task("persisted").unwrap();
        }

        let db = Database::open(&path).expect("Failed to reopen database");
        let tasks = db.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "persisted");
    }
}
