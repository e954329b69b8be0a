use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use timetable_core::{GenerationRequest, GenerationResult, Generator};
use tokio::sync::Mutex;
use tracing::error;
use uuid::Uuid;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RunId(pub String);

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
pub enum RunStatus {
    Queued,
    Running,
    Completed { result: GenerationResult },
    Failed { message: String },
}

#[derive(Clone)]
pub struct InMemRuns<G: Generator> {
    statuses: Arc<RwLock<HashMap<String, RunStatus>>>,
    school_locks: Arc<RwLock<HashMap<String, Arc<Mutex<()>>>>>,
    generator: Arc<G>,
}

impl<G: Generator> InMemRuns<G> {
    pub fn new(generator: G) -> Self {
        Self {
            statuses: Default::default(),
            school_locks: Default::default(),
            generator: Arc::new(generator),
        }
    }

    // one run per school at a time; later runs for the same school queue
    // behind its lock
    fn lock_for(&self, school: &str) -> Arc<Mutex<()>> {
        self.school_locks
            .write()
            .entry(school.to_string())
            .or_default()
            .clone()
    }

    pub fn enqueue(&self, req: GenerationRequest) -> RunId {
        let id = Uuid::new_v4().to_string();
        self.statuses.write().insert(id.clone(), RunStatus::Queued);

        let statuses = self.statuses.clone();
        let generator = self.generator.clone();
        let school_lock = self.lock_for(req.school_id.0.as_str());
        let id_for_task = id.clone();

        tokio::spawn(async move {
            let _guard = school_lock.lock().await;
            {
                let mut w = statuses.write();
                w.insert(id_for_task.clone(), RunStatus::Running);
            }
            match generator.generate(req).await {
                Ok(result) => {
                    statuses
                        .write()
                        .insert(id_for_task, RunStatus::Completed { result });
                }
                Err(e) => {
                    error!(?e, "generation run failed");
                    statuses.write().insert(
                        id_for_task,
                        RunStatus::Failed {
                            message: e.to_string(),
                        },
                    );
                }
            }
        });

        RunId(id)
    }

    pub fn get(&self, id: &str) -> Option<RunStatus> {
        self.statuses.read().get(id).cloned()
    }
}
