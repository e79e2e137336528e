#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDashboard,
    ConfigModuleTickTick,
    ConfigModuleLegacy,
    PromptSelectModules,
    PromptDataDir,
    PromptHourlyRate,
    PromptTickTickApiUrl,
    PromptTickTickToken,
    PromptTickTickCacheTtl,
    PromptLegacyPhases,
    PromptLegacyProject,

    // === FIXTURE MESSAGES ===
    FixturesLoaded(usize, String), // task count, directory
    FixtureMissing(String),        // file name
    DataDirNotFound(String),

    // === DASHBOARD MESSAGES ===
    DashboardHeader,
    ProjectPhaseHeader,
    ProjectSummariesHeader,
    RecentTasksHeader,
    FilterOptionsHeader,
    GroupTotalsHeader(String), // group key
    ActiveFilters(String),
    TasksHeader(usize, usize), // shown, total
    TasksNotFound,
    FiltersSaved(String), // preference key
    FiltersCleared(String),

    // === PROJECT MESSAGES ===
    ProjectHeader(String),
    ProjectNotFound(String),

    // === HOURS MESSAGES ===
    TaskNotFoundWithId(u64),
    HoursHeader(u64, String),
    HoursNotFound,

    // === TODO AND MILESTONE MESSAGES ===
    TodosHeader,
    TodosNotFound,
    MilestonesHeader,
    MilestonesNotFound,
    ShowCompletedSaved(bool),

    // === TICKTICK MESSAGES ===
    TickTickProjectsHeader,
    TickTickTasksHeader(String),
    TickTickNoProjects,
    TickTickNoTasks,
    TickTickMissingToken,
    TickTickRequestFailed,
    TickTickProjectSaved(String),
    TickTickCacheHit(String),
    TickTickCacheCleared(usize),

    // === PREFERENCE MESSAGES ===
    PreferenceReadFailed(String, String),  // key, error
    PreferenceWriteFailed(String, String), // key, error

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportNoTasks,
}
