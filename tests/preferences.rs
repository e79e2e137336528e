#[cfg(test)]
mod tests {
    use pmdash::commands::args::{show_completed, FilterArgs};
    use pmdash::db::preferences::Preferences;
    use pmdash::libs::dashboard::{todos_show_completed_key, DASHBOARD_FILTERS_KEY};
    use pmdash::libs::filter::SavedFilters;
    use pmdash::libs::sort::{SortDir, SortKey};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PreferencesTestContext {
        _temp_dir: TempDir,
        prefs: Preferences,
    }

    impl TestContext for PreferencesTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let prefs = Preferences::open(&temp_dir.path().join("prefs.db")).unwrap();
            PreferencesTestContext {
                _temp_dir: temp_dir,
                prefs,
            }
        }
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_set_get_remove(ctx: &mut PreferencesTestContext) {
        assert_eq!(ctx.prefs.get("missing").unwrap(), None);

        ctx.prefs.set("pm-ticktick-project", "abc").unwrap();
        ctx.prefs.set("pm-ticktick-project", "def").unwrap();
        assert_eq!(ctx.prefs.get("pm-ticktick-project").unwrap().as_deref(), Some("def"));

        assert!(ctx.prefs.remove("pm-ticktick-project").unwrap());
        assert!(!ctx.prefs.remove("pm-ticktick-project").unwrap());
        assert_eq!(ctx.prefs.load_value("pm-ticktick-project"), None);
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_json_values(ctx: &mut PreferencesTestContext) {
        ctx.prefs.save_json("flag", &true);
        assert_eq!(ctx.prefs.load_json::<bool>("flag"), Some(true));

        ctx.prefs.save_value("broken", "{not json");
        assert_eq!(ctx.prefs.load_json::<SavedFilters>("broken"), None);
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_filters_saved_and_restored(ctx: &mut PreferencesTestContext) {
        let args = FilterArgs {
            status: vec!["En curso".to_string()],
            search: Some("  Deploy ".to_string()),
            save: true,
            ..Default::default()
        };
        let view = args.resolve(Some(&ctx.prefs), DASHBOARD_FILTERS_KEY);
        args.persist(Some(&ctx.prefs), DASHBOARD_FILTERS_KEY, &view);

        let restored = FilterArgs::default().resolve(Some(&ctx.prefs), DASHBOARD_FILTERS_KEY);
        assert_eq!(restored.filters.status, vec!["En curso"]);
        assert_eq!(restored.filters.search, "deploy");
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_flags_override_saved_filters(ctx: &mut PreferencesTestContext) {
        let saved = SavedFilters {
            status: Some(vec!["En curso".to_string()]),
            owner: Some(vec!["Ana".to_string()]),
            ..Default::default()
        };
        ctx.prefs.save_json(DASHBOARD_FILTERS_KEY, &saved);

        let args = FilterArgs {
            owner: vec!["Luis".to_string()],
            sort: Some(SortKey::Title),
            ..Default::default()
        };
        let view = args.resolve(Some(&ctx.prefs), DASHBOARD_FILTERS_KEY);
        assert_eq!(view.filters.status, vec!["En curso"]);
        assert_eq!(view.filters.owner, vec!["Luis"]);
        assert_eq!(view.sort.key, SortKey::Title);
        assert_eq!(view.sort.dir, SortDir::Asc);
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_reset_removes_saved_filters(ctx: &mut PreferencesTestContext) {
        ctx.prefs.save_json(
            DASHBOARD_FILTERS_KEY,
            &SavedFilters {
                search: Some("deploy".to_string()),
                ..Default::default()
            },
        );

        let args = FilterArgs {
            reset: true,
            ..Default::default()
        };
        let view = args.resolve(Some(&ctx.prefs), DASHBOARD_FILTERS_KEY);
        assert!(view.filters.is_empty());

        args.persist(Some(&ctx.prefs), DASHBOARD_FILTERS_KEY, &view);
        assert_eq!(ctx.prefs.get(DASHBOARD_FILTERS_KEY).unwrap(), None);
    }

    #[test_context(PreferencesTestContext)]
    #[test]
    fn test_show_completed_is_remembered(ctx: &mut PreferencesTestContext) {
        let key = todos_show_completed_key("web");
        assert!(!show_completed(Some(&ctx.prefs), Some(key.as_str()), None));
        assert!(show_completed(Some(&ctx.prefs), Some(key.as_str()), Some(true)));
        assert!(show_completed(Some(&ctx.prefs), Some(key.as_str()), None));
        assert!(!show_completed(None, None, None));
    }
}
