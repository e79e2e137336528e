#[cfg(test)]
mod tests {
    use clap::Parser;
    use pmdash::commands::Cli;

    fn parses(args: &[&str]) -> bool {
        Cli::try_parse_from(std::iter::once("pmdash").chain(args.iter().copied())).is_ok()
    }

    #[test]
    fn test_ticktick_projects_takes_only_project() {
        assert!(parses(&["ticktick", "projects"]));
        assert!(parses(&["ticktick", "projects", "-p", "portal"]));
        assert!(!parses(&["ticktick", "projects", "--id", "tt-1"]));
        assert!(!parses(&["ticktick", "projects", "--refresh"]));
        assert!(!parses(&["ticktick", "projects", "--column", "c1"]));
    }

    #[test]
    fn test_ticktick_tasks_panel_flags() {
        assert!(parses(&["ticktick", "tasks", "-p", "portal", "--id", "tt-1", "--column", "c1", "--refresh", "--save"]));
        assert!(parses(&["ticktick", "clear-cache"]));
    }

    #[test]
    fn test_hours_requires_task_id() {
        assert!(parses(&["hours", "1"]));
        assert!(!parses(&["hours"]));
    }
}
