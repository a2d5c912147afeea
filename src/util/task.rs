use std::collections::HashMap;
use tokio::task::JoinHandle;
use tracing::debug;

/// Background tasks keyed by purpose; spawning under a busy key aborts the
/// previous task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(key, task) {
            if !previous.is_finished() {
                debug!("Replacing running task '{}'", key);
            }
            previous.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}
