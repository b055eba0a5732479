//! The single owning context
//!
//! `BookController` owns every piece of UI-visible state. The presentation
//! layer calls its `on_*` entry points on user gestures, renders
//! [`list`](BookController::list) and [`form`](BookController::form), and
//! pumps completions (`drain_completions` from a UI tick, or
//! `next_completion` from async code). No other task touches the state.

use std::sync::Arc;

use bookdesk_gateway::{BookGateway, BookId};
use tokio::sync::mpsc;

use super::mutation_coordinator::{MutationCoordinator, MutationKind, MutationPhase};
use super::query_trigger::QueryTrigger;
use super::selection_reconciler::SelectionReconciler;
use super::{Completion, RequestKind, ServiceContext, Settled};
use crate::error::CoreError;
use crate::types::{FormState, ListViewState, Notification, Notifier, SortColumn};

pub struct BookController {
    ctx: ServiceContext,
    completions: mpsc::UnboundedReceiver<Completion>,
    list: ListViewState,
    form: FormState,
    query: QueryTrigger,
    selection: SelectionReconciler,
    mutation: MutationCoordinator,
}

impl BookController {
    /// Entry points spawn tasks, so they must be called within a tokio runtime.
    #[must_use]
    pub fn new(gateway: Arc<dyn BookGateway>, notifier: Notifier) -> Self {
        let (tx, completions) = mpsc::unbounded_channel();
        Self {
            ctx: ServiceContext::new(gateway, tx, notifier),
            completions,
            list: ListViewState::new(),
            form: FormState::new(),
            query: QueryTrigger::new(),
            selection: SelectionReconciler::new(),
            mutation: MutationCoordinator::new(),
        }
    }

    // ===== 状态 =====

    pub fn list(&self) -> &ListViewState {
        &self.list
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn query(&self) -> &QueryTrigger {
        &self.query
    }

    pub fn selection(&self) -> &SelectionReconciler {
        &self.selection
    }

    pub fn search_text(&self) -> &str {
        self.query.text()
    }

    /// A list or search request is outstanding.
    pub fn is_loading(&self) -> bool {
        !self.query.is_idle()
    }

    pub fn mutation_phase(&self) -> MutationPhase {
        self.mutation.phase()
    }

    // ===== 入口 =====

    /// Startup: empty form, everything listed.
    pub fn on_load(&mut self) {
        self.form.clear();
        self.query.list_all(&self.ctx);
    }

    pub fn on_search_text_changed(&mut self, text: &str) {
        self.query.on_text_changed(&self.ctx, text);
    }

    pub fn on_row_selected(&mut self, id: BookId) {
        self.selection.select(&self.ctx, &mut self.list, id);
    }

    pub fn on_selection_cleared(&mut self) {
        self.list.clear_selection();
        self.selection.cancel();
    }

    pub fn on_submit_create(&mut self) {
        let result = self.mutation.submit_create(&self.ctx, &self.form);
        self.report_rejection(result);
    }

    pub fn on_submit_update(&mut self) {
        let result = self
            .mutation
            .submit_update(&self.ctx, &self.list, &self.form);
        self.report_rejection(result);
    }

    pub fn on_submit_delete(&mut self) {
        let result = self.mutation.submit_delete(&self.ctx, &self.list);
        self.report_rejection(result);
    }

    /// Re-run the current query and start over with an empty form.
    pub fn on_refresh(&mut self) {
        self.query.refresh(&self.ctx);
        self.form.clear();
        self.on_selection_cleared();
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.list.toggle_sort(column);
    }

    fn report_rejection(&self, result: Result<(), CoreError>) {
        let Err(e) = result else {
            return;
        };
        if e.is_expected() {
            log::warn!("Submission rejected: {e}");
        } else {
            log::error!("Submission rejected: {e}");
        }
        self.ctx
            .notify(Notification::new(e.severity(), e.title(), e.user_message()));
    }

    // ===== 完成 =====

    /// Apply every completion that has already arrived. Never blocks.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it.
    ///
    /// Waits indefinitely if no request is in flight.
    pub async fn next_completion(&mut self) -> Option<Settled> {
        let completion = self.completions.recv().await?;
        Some(self.apply(completion))
    }

    fn apply(&mut self, completion: Completion) -> Settled {
        match completion {
            Completion::Query { seq, outcome } => {
                let had_selection = self.list.selected().is_some();
                let current = self
                    .query
                    .complete(&self.ctx, &mut self.list, seq, outcome);
                // The new rows dropped the selected book
                if had_selection && self.list.selected().is_none() {
                    self.selection.cancel();
                }
                settled(RequestKind::Query, current)
            }
            Completion::Detail { seq, outcome } => {
                let current = self.selection.complete(
                    &self.ctx,
                    &mut self.list,
                    &mut self.form,
                    seq,
                    outcome,
                );
                settled(RequestKind::Detail, current)
            }
            Completion::Mutation { seq, outcome } => {
                let Some((kind, succeeded)) =
                    self.mutation
                        .complete(&self.ctx, &mut self.list, &mut self.form, seq, outcome)
                else {
                    return Settled::Discarded(RequestKind::Mutation);
                };
                // The selection is gone, so is any detail fetch for it
                if succeeded && matches!(kind, MutationKind::Update | MutationKind::Delete) {
                    self.selection.cancel();
                }
                Settled::Applied(RequestKind::Mutation)
            }
        }
    }
}

fn settled(kind: RequestKind, current: bool) -> Settled {
    if current {
        Settled::Applied(kind)
    } else {
        Settled::Discarded(kind)
    }
}
