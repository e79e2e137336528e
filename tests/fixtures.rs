#[cfg(test)]
mod tests {
    use pmdash::db::fixtures::{FixtureError, Fixtures, ENTRIES_FILE, NOTES_FILE, PROJECTS_FILE, TASKS_FILE, TODOS_FILE};
    use pmdash::libs::task::LegacyProjectFallback;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FixturesTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for FixturesTestContext {
        fn setup() -> Self {
            FixturesTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl FixturesTestContext {
        fn write(&self, file: &str, content: &str) {
            fs::write(self.temp_dir.path().join(file), content).unwrap();
        }
    }

    #[test_context(FixturesTestContext)]
    #[test]
    fn test_load_full_data_set(ctx: &mut FixturesTestContext) {
        ctx.write(
            TASKS_FILE,
            r#"[
                {"id": 1, "title": "Mockups", "projectId": "web", "phase": "Diseño", "status": "En curso", "startDate": "10/01/2024"},
                {"id": 2, "title": "API", "projectId": "web", "status": "Completada"}
            ]"#,
        );
        ctx.write(PROJECTS_FILE, r#"[{"id": "web", "name": "Portal web", "order": 1}]"#);
        ctx.write(
            ENTRIES_FILE,
            r#"[{"id": 1, "taskId": 1, "date": "10/01/2024", "hours": 3}, {"id": 2, "taskId": 1, "date": "11/01/2024", "hours": 5}]"#,
        );
        ctx.write(NOTES_FILE, r#"[{"id": 1, "taskId": 2, "date": "12/01/2024", "note": "Deployed"}]"#);
        ctx.write(TODOS_FILE, r#"[{"id": 1, "projectId": "web", "title": "Review", "dueDate": "2024-01-20"}]"#);

        let fixtures = Fixtures::load(ctx.temp_dir.path()).unwrap();
        assert_eq!(fixtures.todos.len(), 1);
        assert!(fixtures.milestones.is_empty());
        assert_eq!(fixtures.project("web").map(|p| p.name.as_str()), Some("Portal web"));
        assert!(fixtures.project("app").is_none());

        let tasks = fixtures.tasks(&LegacyProjectFallback::default());
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].project.as_deref(), Some("Portal web"));
        assert_eq!(tasks[0].hours(), 8.0);
        assert_eq!(tasks[1].notes, "(12/01/2024) Deployed");
    }

    #[test_context(FixturesTestContext)]
    #[test]
    fn test_only_tasks_file_is_required(ctx: &mut FixturesTestContext) {
        ctx.write(TASKS_FILE, "[]");
        let fixtures = Fixtures::load(ctx.temp_dir.path()).unwrap();
        assert!(fixtures.tasks.is_empty());
        assert!(fixtures.projects.is_empty());

        let missing = tempfile::tempdir().unwrap();
        let error = Fixtures::load(missing.path()).unwrap_err();
        assert!(matches!(error, FixtureError::Io { .. }));
    }

    #[test_context(FixturesTestContext)]
    #[test]
    fn test_malformed_fixture_is_a_parse_error(ctx: &mut FixturesTestContext) {
        ctx.write(TASKS_FILE, "[]");
        ctx.write(PROJECTS_FILE, r#"{"id": "web"}"#);
        match Fixtures::load(ctx.temp_dir.path()) {
            Err(FixtureError::Parse { path, .. }) => assert!(path.ends_with(PROJECTS_FILE)),
            other => panic!("expected a parse error, got {:?}", other.map(|f| f.tasks.len())),
        }
    }
}
