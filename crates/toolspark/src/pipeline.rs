//! The tool invocation pipeline.
//!
//! Every tool run goes through the same steps: wait out the pre-roll, compute,
//! record the output, count the use and, when the usage threshold is crossed,
//! fire the redirect notifier without holding back the result.

use futures::FutureExt;
use std::any::Any;
use std::fmt::Display;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use toolspark_core::catalog::ToolKind;
use toolspark_core::output::ToolOutput;
use toolspark_core::usage::UsageCounter;

use crate::ads::RedirectNotifier;

/// Where a single invocation is. Each invocation walks through these in
/// order on its own; concurrent invocations do not share a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    Idle,
    Delaying,
    Computing,
    Completed,
}

/// What an invocation hands back to its caller.
#[derive(Debug)]
pub struct Completion {
    pub tool: ToolKind,
    pub output: ToolOutput,
    /// The compute step failed and `output` holds the tool's failure message.
    pub failed: bool,
    /// Usage count produced by this invocation's own increment.
    pub usage_count: u64,
    /// Every state this invocation went through, starting at `Idle`.
    pub states: Vec<InvocationState>,
    /// The redirect notification, when this invocation crossed the threshold.
    /// Await it to wait for the side effect or drop it to let it run detached.
    pub redirect: Option<JoinHandle<()>>,
}

pub struct Pipeline {
    preroll: Duration,
    counter: Arc<UsageCounter>,
    notifier: Arc<dyn RedirectNotifier>,
    last_result: Mutex<Option<ToolOutput>>,
}

impl Pipeline {
    pub fn new(
        preroll: Duration,
        counter: Arc<UsageCounter>,
        notifier: Arc<dyn RedirectNotifier>,
    ) -> Self {
        Self {
            preroll,
            counter,
            notifier,
            last_result: Mutex::new(None),
        }
    }

    pub fn counter(&self) -> &UsageCounter {
        &self.counter
    }

    /// Output recorded by the most recently completed invocation.
    pub async fn last_result(&self) -> Option<ToolOutput> {
        self.last_result.lock().await.clone()
    }

    /// Runs `compute` for `tool` through the pipeline.
    ///
    /// Errors and panics raised by `compute` are logged and replaced by the
    /// tool's failure message, so this never fails.
    pub async fn invoke<F, Fut, E>(&self, tool: ToolKind, compute: F) -> Completion
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ToolOutput, E>>,
        E: Display,
    {
        let mut states = vec![InvocationState::Idle];

        transition(tool, &mut states, InvocationState::Delaying);
        tokio::time::sleep(self.preroll).await;

        transition(tool, &mut states, InvocationState::Computing);
        let outcome = AssertUnwindSafe(async move { compute().await })
            .catch_unwind()
            .await;

        let (output, failed) = match outcome {
            Ok(Ok(output)) => (output, false),
            Ok(Err(err)) => {
                log::error!("{} failed: {}", tool.id(), err);
                (ToolOutput::text(tool.failure_message()), true)
            }
            Err(panic) => {
                log::error!("{} panicked: {}", tool.id(), panic_message(panic.as_ref()));
                (ToolOutput::text(tool.failure_message()), true)
            }
        };

        *self.last_result.lock().await = Some(output.clone());

        transition(tool, &mut states, InvocationState::Completed);
        let (usage_count, triggered) = self.counter.record();

        let redirect = triggered.then(|| {
            let notifier = Arc::clone(&self.notifier);
            tokio::task::spawn_blocking(move || notifier.notify(usage_count))
        });

        Completion {
            tool,
            output,
            failed,
            usage_count,
            states,
            redirect,
        }
    }
}

fn transition(tool: ToolKind, states: &mut Vec<InvocationState>, state: InvocationState) {
    log::debug!("{}: {:?}", tool.id(), state);
    states.push(state);
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
