use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::models::profile::Profile;
use crate::domain::ports::ProfileRepository;
use crate::error::AppError;

/// A freshly provisioned profile may not be immediately visible to a
/// subsequent lookup, so the first misses are retried on an increasing
/// schedule before the caller is told to recover manually.
const RETRY_DELAYS_MS: [u64; 4] = [250, 500, 1000, 2000];

#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Retrying(u32),
    Loaded,
    Failed,
}

#[derive(Debug)]
pub struct ProfileLoadOutcome {
    pub profile: Option<Profile>,
    pub attempts: u32,
    pub states: Vec<LoadState>,
}

/// Explicit state machine replacing a recursive retry loader: every
/// transition is observable, the schedule is bounded, and the future is
/// cancellable at any await point by dropping it.
pub struct ProfileLoader {
    repo: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
}

impl ProfileLoader {
    pub fn new(repo: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn load(&self, user_id: &str) -> Result<ProfileLoadOutcome, AppError> {
        let mut states = vec![LoadState::Pending];
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;
            if let Some(profile) = self.repo.find_by_id(user_id).await? {
                states.push(LoadState::Loaded);
                return Ok(ProfileLoadOutcome { profile: Some(profile), attempts, states });
            }

            let retry = attempts as usize;
            if retry > RETRY_DELAYS_MS.len() {
                states.push(LoadState::Failed);
                return Ok(ProfileLoadOutcome { profile: None, attempts, states });
            }

            let delay = Duration::from_millis(RETRY_DELAYS_MS[retry - 1]);
            debug!("Profile {} not visible yet, retry {} in {:?}", user_id, retry, delay);
            states.push(LoadState::Retrying(retry as u32));
            self.clock.sleep(delay).await;
        }
    }
}
