#[cfg(test)]
mod tests {
    use pmdash::libs::stats::{
        aggregate, build_filter_options, build_project_phase_totals, build_project_summaries, get_dashboard_stats,
        recent_tasks, GroupKey, StatCards, MISSING, NO_PROJECT,
    };
    use pmdash::libs::task::{HourEntry, Project, Task};

    fn task(id: u64, project: Option<&str>, phase: Option<&str>, status: Option<&str>, hours: &[f64]) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            project_id: project.map(|p| p.to_lowercase()),
            project: project.map(str::to_string),
            phase: phase.map(str::to_string),
            status: status.map(str::to_string),
            entries: hours
                .iter()
                .map(|h| HourEntry {
                    task_id: id,
                    hours: Some(*h),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, Some("Web"), Some("Diseño"), Some("Completada"), &[3.0]),
            task(2, Some("Web"), Some("Desarrollo"), Some("En curso"), &[5.0]),
            task(3, None, None, None, &[]),
        ]
    }

    #[test]
    fn test_dashboard_stats_totals() {
        let stats = get_dashboard_stats(&sample(), 50.0);
        assert_eq!(stats.total_hours, 8.0);
        assert_eq!(stats.total_cost, 400.0);
        assert_eq!(stats.count("Completada"), 1);
        assert_eq!(stats.count("En curso"), 1);
        assert_eq!(stats.count(""), 1);
        assert_eq!(stats.count("Bloqueada"), 0);
    }

    #[test]
    fn test_empty_collection() {
        let stats = get_dashboard_stats(&[], 50.0);
        assert_eq!(stats.total_hours, 0.0);
        assert!(stats.status_counts.is_empty());
        assert!(build_project_phase_totals(&[]).projects.is_empty());
    }

    #[test]
    fn test_stat_cards() {
        let tasks = sample();
        let cards = StatCards::from_stats(tasks.len(), &get_dashboard_stats(&tasks, 50.0));
        assert_eq!(cards.total_tasks, 3);
        assert_eq!(cards.completed_tasks, 1);
        assert_eq!(cards.in_progress_tasks, 1);
        assert_eq!(cards.blocked_tasks, 0);
        assert_eq!(cards.total_cost, 400.0);
    }

    #[test]
    fn test_project_phase_totals() {
        let mut tasks = sample();
        tasks.push(task(4, Some("App"), Some("Diseño"), None, &[1.0]));
        let totals = build_project_phase_totals(&tasks);

        assert_eq!(totals.projects["Web"], 8.0);
        assert_eq!(totals.projects[NO_PROJECT], 0.0);
        assert_eq!(totals.phases["Web::Diseño"], 3.0);
        assert_eq!(totals.phases["App::Diseño"], 1.0);
        assert_eq!(totals.phases[&format!("{}::{}", NO_PROJECT, MISSING)], 0.0);

        let ranked = totals.ranked();
        assert_eq!(ranked[0].project, "Web");
        assert_eq!(ranked[0].phases[0].phase, "Desarrollo");
        assert_eq!(ranked[1].project, "App");
    }

    #[test]
    fn test_phase_breakdown_ignores_projects_sharing_a_prefix() {
        let tasks = vec![
            task(1, Some("A"), Some("X"), None, &[1.0]),
            task(2, Some("A::B"), Some("C"), None, &[5.0]),
        ];
        let ranked = build_project_phase_totals(&tasks).ranked();

        for project in &ranked {
            let phase_hours: f64 = project.phases.iter().map(|p| p.hours).sum();
            assert_eq!(phase_hours, project.hours, "project {}", project.project);
        }
        let a = ranked.iter().find(|p| p.project == "A").unwrap();
        assert_eq!(a.phases.len(), 1);
        assert_eq!(a.phases[0].phase, "X");
        let nested = ranked.iter().find(|p| p.project == "A::B").unwrap();
        assert_eq!(nested.phases[0].phase, "C");
    }

    #[test]
    fn test_filter_options_sorted_distinct() {
        let options = build_filter_options(&sample());
        assert_eq!(options.statuses, vec!["Completada", "En curso"]);
        assert_eq!(options.phases, vec!["Desarrollo", "Diseño"]);
        assert_eq!(options.projects, vec!["Web"]);
        assert!(options.owners.is_empty());
    }

    #[test]
    fn test_aggregate_by_status() {
        let groups = aggregate(&sample(), GroupKey::Status);
        assert_eq!(groups["En curso"].hours, 5.0);
        assert_eq!(groups["Completada"].count, 1);
        assert_eq!(groups[MISSING].count, 1);
    }

    #[test]
    fn test_project_summaries_follow_project_order() {
        let projects = vec![
            Project {
                id: "app".into(),
                name: "App".into(),
                order: Some(2.0),
                ..Default::default()
            },
            Project {
                id: "web".into(),
                name: "Web".into(),
                order: Some(1.0),
                ..Default::default()
            },
        ];
        let summaries = build_project_summaries(&sample(), &projects);
        assert_eq!(summaries[0].project_id, "web");
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[0].in_progress, 1);
        assert_eq!(summaries[0].hours, 8.0);
        assert_eq!(summaries[1].count, 0);
    }

    #[test]
    fn test_recent_tasks() {
        let mut tasks = sample();
        tasks[0].start_date = Some("01/03/2024".into());
        tasks[1].start_date = Some("01/01/2024".into());
        let recent = recent_tasks(&tasks, 2);
        assert_eq!(recent.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
