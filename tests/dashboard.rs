#[cfg(test)]
mod tests {
    use pmdash::commands::args::describe_filters;
    use pmdash::libs::dashboard::{
        encode_uri_component, milestones_show_completed_key, project_filters_key, project_ticktick_key,
        todos_show_completed_key, DashboardView, DASHBOARD_FILTERS_KEY, TICKTICK_KEY,
    };
    use pmdash::libs::filter::FilterSpec;
    use pmdash::libs::sort::{SortDir, SortKey, SortState};
    use pmdash::libs::task::Task;

    fn task(id: u64, status: &str, start: &str) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            status: Some(status.into()),
            start_date: Some(start.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(DASHBOARD_FILTERS_KEY, "pm-dashboard-filters");
        assert_eq!(TICKTICK_KEY, "pm-ticktick-project");
        assert_eq!(project_filters_key("p 1"), "pm-project-filters:p%201");
        assert_eq!(project_ticktick_key("p/1"), "pm-ticktick-project-p%2F1");
        assert_eq!(todos_show_completed_key("web"), "pm-project-todos:show-completed:web");
        assert_eq!(milestones_show_completed_key("web"), "pm-project-milestones:show-completed:web");
        assert_eq!(encode_uri_component("it's (ok)!*~"), "it's%20(ok)!*~");
    }

    #[test]
    fn test_view_filters_then_sorts() {
        let tasks = vec![
            task(1, "En curso", "10/01/2024"),
            task(2, "Completada", "11/01/2024"),
            task(3, "En curso", "12/01/2024"),
        ];
        let view = DashboardView::new(
            SortState::default(),
            FilterSpec {
                status: vec!["En curso".into()],
                ..Default::default()
            },
        );
        let ids: Vec<u64> = view.apply(&tasks).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_clear_dates_keeps_other_filters() {
        let mut view = DashboardView::new(
            SortState::default(),
            FilterSpec {
                owner: vec!["Ana".into()],
                date_start: "2024-01-01".into(),
                date_end: "2024-01-31".into(),
                ..Default::default()
            },
        );
        view.clear_dates();
        assert!(view.filters.date_start.is_empty());
        assert!(view.filters.date_end.is_empty());
        assert_eq!(view.filters.owner, vec!["Ana"]);
    }

    #[test]
    fn test_toggle_sort() {
        let mut view = DashboardView::default();
        view.toggle_sort(SortKey::Hours);
        assert_eq!(view.sort, SortState::new(SortKey::Hours, SortDir::Asc));
        view.toggle_sort(SortKey::Hours);
        assert_eq!(view.sort.dir, SortDir::Desc);
    }

    #[test]
    fn test_describe_filters() {
        let spec = FilterSpec {
            search: " deploy ".into(),
            status: vec!["En curso".into(), "Bloqueada".into()],
            date_start: "2024-01-01".into(),
            ..Default::default()
        };
        assert_eq!(describe_filters(&spec), "search=deploy, status=En curso|Bloqueada, dates=2024-01-01..");
        assert_eq!(describe_filters(&FilterSpec::default()), "");
    }
}
