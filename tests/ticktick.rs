#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use parking_lot::Mutex;
    use pmdash::api::ticktick::{bucket_tasks, preferred_project, select_default_project, TickTickProject, TickTickTask};
    use pmdash::api::{ProxyStatus, TickTick, TickTickConfig};
    use pmdash::db::ticktick_cache::TickTickCache;
    use pmdash::libs::task::Project;
    use pmdash::libs::todo::DueBucket;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const PROJECT_DATA: &str = r#"{"tasks": [
        {"id": "1", "title": "Call", "status": 0},
        {"id": "2", "title": "Done", "status": 2}
    ]}"#;

    /// Answers every request with `body` and records the request paths.
    async fn serve(body: &'static str) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let paths = Arc::new(Mutex::new(Vec::new()));
        let seen = paths.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&request).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or_default().to_string();
                seen.lock().push(path);

                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (url, paths)
    }

    fn config(url: &str, ttl: u64) -> TickTickConfig {
        TickTickConfig {
            api_url: url.to_string(),
            access_token: "token".to_string(),
            cache_ttl_secs: ttl,
        }
    }

    fn project(id: &str) -> TickTickProject {
        TickTickProject {
            id: id.into(),
            name: id.to_uppercase(),
            closed: None,
        }
    }

    fn task(id: &str, status: i64, due: Option<&str>, column: Option<&str>) -> TickTickTask {
        TickTickTask {
            id: id.into(),
            title: id.into(),
            status,
            due_date: due.map(str::to_string),
            column_id: column.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_select_default_project() {
        let projects = vec![project("a"), project("b"), project("c")];
        let pick = |saved, preferred| select_default_project(&projects, saved, preferred).map(|p| p.id.clone());

        assert_eq!(pick(Some("c"), Some("b")), Some("c".to_string()));
        assert_eq!(pick(Some("gone"), Some("b")), Some("b".to_string()));
        assert_eq!(pick(Some("gone"), Some("gone")), Some("a".to_string()));
        assert_eq!(pick(None, None), Some("a".to_string()));
        assert!(select_default_project(&[], Some("a"), None).is_none());
    }

    #[test]
    fn test_preferred_project_from_dashboard_project() {
        let linked = Project {
            id: "web".into(),
            ticktick_project_id: Some("tt-1".into()),
            ..Default::default()
        };
        assert_eq!(preferred_project(Some(&linked)), Some("tt-1"));
        assert_eq!(preferred_project(None), None);
    }

    #[test]
    fn test_bucket_tasks() {
        let now = Local::now();
        let yesterday = (now - Duration::days(1)).format("%d/%m/%Y").to_string();
        let later = (now + Duration::days(3)).format("%d/%m/%Y").to_string();
        let tasks = vec![
            task("undated", 0, None, Some("todo")),
            task("later", 0, Some(&later), Some("todo")),
            task("done", 2, Some(&yesterday), Some("todo")),
            task("late", 0, Some(&yesterday), Some("doing")),
        ];

        let open = bucket_tasks(&tasks, None, now);
        let ids: Vec<&str> = open.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "later", "undated"]);
        assert_eq!(open[0].ticktick_status, Some(DueBucket::Overdue));
        assert_eq!(open[1].ticktick_status, Some(DueBucket::Upcoming));
        assert_eq!(open[2].ticktick_status, Some(DueBucket::NoDate));

        let column = bucket_tasks(&tasks, Some("todo"), now);
        assert_eq!(column.len(), 2);
        assert_eq!(bucket_tasks(&tasks, Some(""), now).len(), 3);
    }

    #[test]
    fn test_task_payload_ignores_bucket_field() {
        let json = r#"{"id": "1", "projectId": "p", "title": "Call", "status": 0, "dueDate": "2024-01-15T09:00:00.000+0000", "ticktickStatus": "today"}"#;
        let task: TickTickTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.ticktick_status, None);
        assert_eq!(task.due_date.as_deref(), Some("2024-01-15T09:00:00.000+0000"));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&ProxyStatus::MissingToken).unwrap(), "\"missing-token\"");
        assert_eq!(serde_json::to_string(&DueBucket::NoDate).unwrap(), "\"nodate\"");
    }

    #[tokio::test]
    async fn test_missing_token_skips_requests() {
        let client = TickTick::new(&TickTickConfig::default());
        assert_eq!(client.projects().await.status, ProxyStatus::MissingToken);
        let tasks = client.tasks("p", None, false).await;
        assert_eq!(tasks.status, ProxyStatus::MissingToken);
        assert!(tasks.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_reports_error() {
        let client = TickTick::new(&TickTickConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            access_token: "token".to_string(),
            ..Default::default()
        });
        assert_eq!(client.projects().await.status, ProxyStatus::Error);
        assert_eq!(client.tasks("p", None, true).await.status, ProxyStatus::Error);
    }

    #[tokio::test]
    async fn test_tasks_cached_until_refresh() {
        let (url, paths) = serve(PROJECT_DATA).await;
        let client = TickTick::new(&config(&url, 60));

        let first = client.tasks("p", None, false).await;
        assert_eq!(first.status, ProxyStatus::Ready);
        assert_eq!(first.tasks.len(), 1);
        let second = client.tasks("p", None, false).await;
        assert_eq!(second.tasks, first.tasks);
        assert_eq!(paths.lock().len(), 1);

        client.tasks("p", None, true).await;
        assert_eq!(paths.lock().len(), 2);
        client.tasks("other", None, false).await;
        assert_eq!(paths.lock().len(), 3);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_fetches() {
        let (url, paths) = serve(PROJECT_DATA).await;
        let client = TickTick::new(&config(&url, 0));

        client.tasks("p", None, false).await;
        client.tasks("p", None, false).await;
        assert_eq!(paths.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_stored_tasks_reused_by_next_client() {
        let (url, paths) = serve(PROJECT_DATA).await;
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("pmdash.db");

        let first = TickTick::new(&config(&url, 60)).with_store(TickTickCache::open(&db).unwrap());
        assert_eq!(first.tasks("p", None, false).await.tasks.len(), 1);

        let second = TickTick::new(&config(&url, 60)).with_store(TickTickCache::open(&db).unwrap());
        let cached = second.tasks("p", None, false).await;
        assert_eq!(cached.status, ProxyStatus::Ready);
        assert_eq!(cached.tasks.len(), 1);
        assert_eq!(cached.tasks[0].ticktick_status, Some(DueBucket::NoDate));
        assert_eq!(paths.lock().len(), 1);

        let stale = TickTick::new(&config(&url, 0)).with_store(TickTickCache::open(&db).unwrap());
        stale.tasks("p", None, false).await;
        assert_eq!(paths.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_cache_forgets_stored_tasks() {
        let (url, paths) = serve(PROJECT_DATA).await;
        let dir = TempDir::new().unwrap();
        let db = dir.path().join("pmdash.db");

        let client = TickTick::new(&config(&url, 60)).with_store(TickTickCache::open(&db).unwrap());
        client.tasks("p", None, false).await;
        assert_eq!(client.clear_cache().unwrap(), 1);
        assert!(TickTickCache::open(&db).unwrap().get("p").unwrap().is_none());

        client.tasks("p", None, false).await;
        assert_eq!(paths.lock().len(), 2);
    }

    #[tokio::test]
    async fn test_project_id_escaped_in_path() {
        let (url, paths) = serve(PROJECT_DATA).await;
        let client = TickTick::new(&config(&url, 60));

        client.tasks("a b/c", None, false).await;
        assert_eq!(*paths.lock(), vec!["/project/a%20b%2Fc/data".to_string()]);
    }
}
