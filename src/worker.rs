//! Runs assemblies on one dedicated thread.
//!
//! The host session lives on the worker thread for its whole life, so every
//! deck mutation happens there and one at a time. Callers only exchange plans
//! and results with it over channels.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::assembler::{AssemblyReport, DeckAssembler};
use crate::errors::{FillError, Result};
use crate::host::{DeckStore, HostSession};
use crate::plan::ContentPlan;

struct Job {
    plan: ContentPlan,
    reply: Sender<Result<AssemblyReport>>,
}

pub struct AssemblyWorker {
    jobs: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl AssemblyWorker {
    /// Starts the worker thread. It takes ownership of `store` and releases
    /// it when the worker shuts down.
    pub fn spawn<S>(store: S, mut assembler: DeckAssembler) -> Result<Self>
    where
        S: DeckStore + Send + 'static,
    {
        let (jobs, queue) = mpsc::channel::<Job>();
        let handle = thread::Builder::new()
            .name("slidefill-worker".into())
            .spawn(move || {
                let mut session = HostSession::new(store);
                for job in queue {
                    let result = assembler.assemble(&mut session, &job.plan);
                    if let Err(e) = &result {
                        log::error!("Assembly failed: {}", e);
                    }
                    if job.reply.send(result).is_err() {
                        log::debug!("Assembly result dropped: requester went away");
                    }
                }
                if let Err(e) = session.close() {
                    log::warn!("{}", e);
                }
            })?;
        Ok(Self {
            jobs: Some(jobs),
            handle: Some(handle),
        })
    }

    /// Queues `plan` and returns the channel its result will arrive on.
    pub fn submit(&self, plan: ContentPlan) -> Result<Receiver<Result<AssemblyReport>>> {
        let (reply, result) = mpsc::channel();
        self.jobs
            .as_ref()
            .ok_or_else(|| FillError::Worker("queue closed".into()))?
            .send(Job { plan, reply })
            .map_err(|_| FillError::Worker("worker thread has stopped".into()))?;
        Ok(result)
    }

    /// Queues `plan` and waits for its result.
    pub fn assemble(&self, plan: ContentPlan) -> Result<AssemblyReport> {
        self.submit(plan)?
            .recv()
            .map_err(|_| FillError::Worker("worker stopped before replying".into()))?
    }

    /// Closes the queue, lets pending jobs finish and waits for the thread.
    pub fn shutdown(mut self) -> Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> Result<()> {
        self.jobs.take();
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| FillError::Worker("worker thread panicked".into())),
            None => Ok(()),
        }
    }
}

impl Drop for AssemblyWorker {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::error!("{}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Dispatcher;
    use crate::host::MemoryStore;
    use crate::models::presentation::Presentation;

    fn library() -> Presentation {
        let slides: Vec<_> = (1..=8)
            .map(|i| serde_json::json!({"objectId": format!("s{i}"), "pageElements": []}))
            .collect();
        serde_json::from_value(serde_json::json!({"slides": slides})).unwrap()
    }

    fn worker(store: &MemoryStore) -> AssemblyWorker {
        store.insert("lib.json", library());
        let assembler = DeckAssembler::new(Dispatcher::default(), "lib.json", "out.json");
        AssemblyWorker::spawn(store.clone(), assembler).unwrap()
    }

    #[test]
    fn jobs_run_in_order_and_report_back() {
        let store = MemoryStore::new();
        let worker = worker(&store);

        let first = worker
            .submit(ContentPlan::from_json(r#"{"presentation_title": "A", "slides": []}"#).unwrap())
            .unwrap();
        let second = worker
            .submit(
                ContentPlan::from_json(
                    r#"{"presentation_title": "B", "slides": [{"slide_index": 7, "slide_title": "x"}]}"#,
                )
                .unwrap(),
            )
            .unwrap();

        assert_eq!(first.recv().unwrap().unwrap().slide_count, 1);
        assert_eq!(second.recv().unwrap().unwrap().slide_count, 2);
        worker.shutdown().unwrap();
        assert_eq!(store.release_count(), 1);
    }

    #[test]
    fn failures_come_back_on_the_reply_channel() {
        let store = MemoryStore::new();
        let worker = worker(&store);
        let plan = ContentPlan::from_json(
            r#"{"presentation_title": "A", "slides": [{"slide_index": 9999, "slide_title": "x"}]}"#,
        )
        .unwrap();
        assert!(matches!(worker.assemble(plan), Err(FillError::UnknownTemplate(9999))));

        drop(worker);
        assert_eq!(store.release_count(), 1);
    }
}
