use std::time::Duration;

use tokio::time::{interval, Interval};
use tracing::{error, info, warn};

use infra::pagination::LimitOffset;
use infra::repos::ProfileRepo;
use infra::username::{is_valid_username, validate_username};

use crate::AppState;

const PAGE_SIZE: i64 = 500;

/// Background sweep that rewrites stored usernames no longer matching the
/// current rules (legacy imports, old sanitizer versions).
pub struct UsernameRepairService {
    state: AppState,
    interval: Interval,
}

impl UsernameRepairService {
    pub fn new(state: AppState) -> Self {
        // One sweep per hour is plenty; repairs are rare after the first run.
        let interval = interval(Duration::from_secs(60 * 60));

        Self { state, interval }
    }

    pub async fn run(&mut self) {
        info!("Starting username repair service");

        loop {
            self.interval.tick().await;

            if let Err(e) = self.sweep().await {
                error!("Error sweeping usernames: {}", e);
            }
        }
    }

    async fn sweep(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = ProfileRepo::new(self.state.db.clone());

        let mut offset = 0;
        loop {
            let page = repo
                .list_page(LimitOffset {
                    limit: PAGE_SIZE,
                    offset,
                })
                .await?;
            if page.is_empty() {
                break;
            }

            for profile in &page {
                let Some(current) = profile.username.as_deref() else {
                    continue;
                };
                if is_valid_username(current) {
                    continue;
                }

                match validate_username(current) {
                    Ok(fixed) => {
                        if repo.username_taken(&fixed, profile.id).await? {
                            warn!(
                                "Username {} for profile {} repairs to taken name {}",
                                current, profile.id, fixed
                            );
                            continue;
                        }
                        repo.set_username(profile.id, &fixed).await?;
                        info!("Repaired username {} -> {}", current, fixed);
                    }
                    Err(e) => {
                        warn!("Cannot repair username for profile {}: {}", profile.id, e);
                    }
                }
            }

            if (page.len() as i64) < PAGE_SIZE {
                break;
            }
            offset += PAGE_SIZE;
        }

        Ok(())
    }
}

/// Spawn the repair sweep as a background task.
pub fn spawn_username_repair(state: AppState) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut service = UsernameRepairService::new(state);
        service.run().await;
    })
}
