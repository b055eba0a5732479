//! Create / update / delete submission
//!
//! Each submission runs Validating → Submitting → Settled. Local state is
//! changed only after the server confirms (pessimistic); on failure the form,
//! list and selection stay exactly as they were so the user can retry.

use bookdesk_gateway::Book;
use serde::Serialize;

use super::pending::{PendingRequest, RequestSeq};
use super::{Completion, MutationOutcome, ServiceContext};
use crate::error::{failure_reason, log_failure, CoreError, CoreResult};
use crate::types::{FormState, ListViewState, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Create => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Observable phase. Validation is synchronous, so only submission is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    Idle,
    Submitting(MutationKind),
}

/// Submits at most one mutation at a time.
#[derive(Debug, Default)]
pub struct MutationCoordinator {
    pending: PendingRequest<MutationKind>,
}

impl MutationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MutationPhase {
        match self.pending.outstanding() {
            Some(kind) => MutationPhase::Submitting(*kind),
            None => MutationPhase::Idle,
        }
    }

    fn ensure_idle(&self, kind: MutationKind) -> CoreResult<()> {
        if self.pending.is_pending() {
            return Err(CoreError::Busy(kind));
        }
        Ok(())
    }

    pub(crate) fn submit_create(&mut self, ctx: &ServiceContext, form: &FormState) -> CoreResult<()> {
        self.ensure_idle(MutationKind::Create)?;
        let draft = form.validate().map_err(CoreError::Validation)?;

        let seq = self.pending.issue(MutationKind::Create);
        log::info!("Mutation {seq}: create {:?}", draft.title);

        let gateway = ctx.gateway();
        ctx.dispatch(
            async move { gateway.create(&draft).await },
            move |outcome| Completion::Mutation {
                seq,
                outcome: MutationOutcome::Created(outcome),
            },
        );
        Ok(())
    }

    pub(crate) fn submit_update(
        &mut self,
        ctx: &ServiceContext,
        list: &ListViewState,
        form: &FormState,
    ) -> CoreResult<()> {
        self.ensure_idle(MutationKind::Update)?;
        let id = list
            .selected()
            .ok_or(CoreError::NothingSelected(MutationKind::Update))?;
        if form.editing() != Some(id) {
            return Err(CoreError::SelectionNotLoaded(id));
        }
        let book = form.validate().map_err(CoreError::Validation)?.with_id(id);

        let seq = self.pending.issue(MutationKind::Update);
        log::info!("Mutation {seq}: update book {id}");

        let gateway = ctx.gateway();
        ctx.dispatch(
            async move { gateway.update(&book).await },
            move |outcome| Completion::Mutation {
                seq,
                outcome: MutationOutcome::Updated(outcome),
            },
        );
        Ok(())
    }

    pub(crate) fn submit_delete(&mut self, ctx: &ServiceContext, list: &ListViewState) -> CoreResult<()> {
        self.ensure_idle(MutationKind::Delete)?;
        let id = list
            .selected()
            .ok_or(CoreError::NothingSelected(MutationKind::Delete))?;

        let seq = self.pending.issue(MutationKind::Delete);
        log::info!("Mutation {seq}: delete book {id}");

        let gateway = ctx.gateway();
        ctx.dispatch(
            async move { gateway.delete(id).await },
            move |outcome| Completion::Mutation {
                seq,
                outcome: MutationOutcome::Deleted { id, outcome },
            },
        );
        Ok(())
    }

    /// Settle a mutation. Returns its kind and whether it succeeded, or `None`
    /// if it was not the outstanding one.
    pub(crate) fn complete(
        &mut self,
        ctx: &ServiceContext,
        list: &mut ListViewState,
        form: &mut FormState,
        seq: RequestSeq,
        outcome: MutationOutcome,
    ) -> Option<(MutationKind, bool)> {
        let Some(kind) = self.pending.settle(seq) else {
            log::warn!("Mutation {seq} is not outstanding, result discarded");
            return None;
        };

        let result = match outcome {
            MutationOutcome::Created(outcome) => outcome.map(|created: Book| {
                log::info!("Created book {}", created.id);
                list.apply_insert(created);
                form.clear();
            }),
            MutationOutcome::Updated(outcome) => outcome.map(|updated: Book| {
                log::info!("Updated book {}", updated.id);
                list.apply_replace(updated);
                form.clear();
                list.clear_selection();
            }),
            MutationOutcome::Deleted { id, outcome } => outcome.map(|()| {
                log::info!("Deleted book {id}");
                list.apply_remove(id);
                form.clear();
                list.clear_selection();
            }),
        };

        match result {
            Ok(()) => {
                ctx.notify(Notification::info("Success", success_message(kind)));
                Some((kind, true))
            }
            Err(e) => {
                log_failure(&format!("Book {}", kind.verb()), &e);
                ctx.notify(Notification::error(
                    "Error",
                    format!("Failed to {} book. {}", kind.verb(), failure_reason(&e)),
                ));
                Some((kind, false))
            }
        }
    }
}

fn success_message(kind: MutationKind) -> &'static str {
    match kind {
        MutationKind::Create => "Book added successfully!",
        MutationKind::Update => "Book updated successfully!",
        MutationKind::Delete => "Book deleted successfully!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{book, create_test_controller, date, Call, Op};
    use crate::types::Severity;
    use bookdesk_gateway::{BookDraft, BookId, GatewayError};

    fn fill_dune(form: &mut FormState) {
        form.title = "Dune".to_string();
        form.author = "Herbert".to_string();
        form.isbn = "123".to_string();
        form.published_date = Some(date(2024, 1, 1));
    }

    // ---- create ----

    #[tokio::test]
    async fn create_appends_server_record_and_clears_form() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        gateway.seed(vec![book(1, "Emma", "Austen")]).await;
        controller.on_load();
        controller.next_completion().await;

        fill_dune(controller.form_mut());
        controller.on_submit_create();
        assert_eq!(
            controller.mutation_phase(),
            MutationPhase::Submitting(MutationKind::Create)
        );
        controller.next_completion().await;

        let created: Vec<_> = controller
            .list()
            .records()
            .iter()
            .filter(|b| b.title == "Dune")
            .collect();
        assert_eq!(created.len(), 1);
        let created = created[0];
        assert_eq!(created.id, BookId::new(2));
        assert_eq!(created.author, "Herbert");
        assert_eq!(created.isbn, "123");
        assert_eq!(created.published_date, date(2024, 1, 1));
        assert_eq!(controller.list().len(), 2);

        assert_eq!(*controller.form(), FormState::new());
        assert_eq!(controller.mutation_phase(), MutationPhase::Idle);
        let note = notes.try_recv().unwrap();
        assert_eq!(note.severity, Severity::Info);
        assert_eq!(note.body, "Book added successfully!");
    }

    #[tokio::test]
    async fn create_failure_changes_nothing() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        gateway.seed(vec![book(1, "Emma", "Austen")]).await;
        controller.on_load();
        controller.next_completion().await;
        gateway
            .fail_next(
                Op::Create,
                GatewayError::Server {
                    status: 500,
                    body: Some("constraint violation".to_string()),
                },
            )
            .await;

        fill_dune(controller.form_mut());
        let before = controller.form().clone();
        controller.on_submit_create();
        controller.next_completion().await;

        assert_eq!(controller.list().len(), 1);
        assert_eq!(*controller.form(), before);
        let note = notes.try_recv().unwrap();
        assert!(note.is_error());
        assert_eq!(
            note.body,
            "Failed to add book. The server rejected the request (status 500)."
        );
    }

    #[tokio::test]
    async fn invalid_create_reports_all_fields_without_network() {
        let (mut controller, gateway, mut notes) = create_test_controller();

        fill_dune(controller.form_mut());
        controller.form_mut().title = "  ".to_string();
        controller.form_mut().published_date = None;
        controller.on_submit_create();

        assert_eq!(controller.mutation_phase(), MutationPhase::Idle);
        let note = notes.try_recv().unwrap();
        assert_eq!(note.title, "Invalid Fields");
        assert_eq!(note.body, "Title is required!\nPublished date is required!");
        assert!(notes.try_recv().is_err());
        assert!(gateway.calls().await.is_empty());
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_rejected() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        let draft = BookDraft {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "123".to_string(),
            published_date: date(2024, 1, 1),
        };
        let release = gateway.hold(Call::Create(draft)).await;

        fill_dune(controller.form_mut());
        controller.on_submit_create();
        controller.on_submit_create();

        let note = notes.try_recv().unwrap();
        assert_eq!(note.title, "Please Wait");
        assert_eq!(note.severity, Severity::Info);

        release.release();
        controller.next_completion().await;
        assert_eq!(controller.list().len(), 1);
        assert_eq!(gateway.calls().await.len(), 1);
    }

    // ---- update ----

    #[tokio::test]
    async fn update_without_selection_issues_no_call() {
        let (mut controller, gateway, mut notes) = create_test_controller();

        fill_dune(controller.form_mut());
        controller.on_submit_update();

        let note = notes.try_recv().unwrap();
        assert_eq!(note.title, "No Selection");
        assert_eq!(note.body, "Please select a book to update.");
        assert_eq!(controller.mutation_phase(), MutationPhase::Idle);
        tokio::task::yield_now().await;
        assert!(gateway.calls().await.is_empty());
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_clears() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        gateway
            .seed(vec![book(1, "Emma", "Austen"), book(2, "Dune", "Herbert"), book(3, "Ulysses", "Joyce")])
            .await;
        controller.on_load();
        controller.next_completion().await;
        controller.on_row_selected(BookId::new(2));
        controller.next_completion().await;

        controller.form_mut().title = "Dune Messiah".to_string();
        controller.on_submit_update();
        controller.next_completion().await;

        assert_eq!(controller.list().position_of(BookId::new(2)), Some(1));
        assert_eq!(
            controller.list().get(BookId::new(2)).unwrap().title,
            "Dune Messiah"
        );
        assert_eq!(controller.list().selected(), None);
        assert!(controller.form().is_create_mode());
        assert_eq!(notes.try_recv().unwrap().body, "Book updated successfully!");
    }

    #[tokio::test]
    async fn update_failure_keeps_form_and_selection() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        gateway.seed(vec![book(2, "Dune", "Herbert")]).await;
        controller.on_load();
        controller.next_completion().await;
        controller.on_row_selected(BookId::new(2));
        controller.next_completion().await;
        gateway
            .fail_next(
                Op::Update,
                GatewayError::Network {
                    detail: "broken pipe".to_string(),
                },
            )
            .await;

        controller.form_mut().title = "Dune Messiah".to_string();
        controller.on_submit_update();
        controller.next_completion().await;

        assert_eq!(controller.list().selected(), Some(BookId::new(2)));
        assert_eq!(controller.form().title, "Dune Messiah");
        assert_eq!(controller.list().get(BookId::new(2)).unwrap().title, "Dune");
        assert_eq!(
            notes.try_recv().unwrap().body,
            "Failed to update book. Could not reach the library server."
        );
    }

    #[tokio::test]
    async fn update_requires_form_bound_to_selection() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        gateway.seed(vec![book(1, "Emma", "Austen"), book(2, "Dune", "Herbert")]).await;
        controller.on_row_selected(BookId::new(1));
        controller.next_completion().await;
        gateway
            .fail_next(
                Op::GetById,
                GatewayError::Network {
                    detail: "timeout".to_string(),
                },
            )
            .await;
        controller.on_row_selected(BookId::new(2));
        controller.next_completion().await;
        let _fetch_failed = notes.try_recv().unwrap();

        controller.on_submit_update();

        assert_eq!(notes.try_recv().unwrap().title, "No Selection");
        assert_eq!(controller.mutation_phase(), MutationPhase::Idle);
        tokio::task::yield_now().await;
        assert!(!gateway
            .calls()
            .await
            .iter()
            .any(|c| matches!(c, Call::Update(_))));
    }

    // ---- delete ----

    #[tokio::test]
    async fn delete_removes_and_clears() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        gateway.seed(vec![book(1, "Emma", "Austen"), book(2, "Dune", "Herbert")]).await;
        controller.on_load();
        controller.next_completion().await;
        controller.on_row_selected(BookId::new(1));
        controller.next_completion().await;

        controller.on_submit_delete();
        controller.next_completion().await;

        assert!(controller.list().get(BookId::new(1)).is_none());
        assert_eq!(controller.list().selected(), None);
        assert!(controller.form().is_create_mode());
        assert_eq!(notes.try_recv().unwrap().body, "Book deleted successfully!");
    }

    #[tokio::test]
    async fn failed_delete_can_be_retried() {
        let (mut controller, gateway, mut notes) = create_test_controller();
        gateway.seed(vec![book(1, "Emma", "Austen")]).await;
        controller.on_load();
        controller.next_completion().await;
        controller.on_row_selected(BookId::new(1));
        controller.next_completion().await;
        gateway
            .fail_next(
                Op::Delete,
                GatewayError::Network {
                    detail: "connection reset".to_string(),
                },
            )
            .await;

        controller.on_submit_delete();
        controller.next_completion().await;

        assert_eq!(controller.list().selected(), Some(BookId::new(1)));
        assert!(controller.list().get(BookId::new(1)).is_some());
        assert_eq!(controller.form().editing(), Some(BookId::new(1)));
        assert_eq!(
            notes.try_recv().unwrap().body,
            "Failed to delete book. Could not reach the library server."
        );

        controller.on_submit_delete();
        controller.next_completion().await;
        assert!(controller.list().is_empty());
        assert_eq!(
            gateway.calls().await.iter().filter(|c| matches!(c, Call::Delete(_))).count(),
            2
        );
    }

    #[tokio::test]
    async fn delete_without_selection_is_reported() {
        let (mut controller, _gateway, mut notes) = create_test_controller();
        controller.on_submit_delete();
        let note = notes.try_recv().unwrap();
        assert_eq!(note.title, "No Selection");
        assert_eq!(note.body, "Please select a book to delete.");
    }
}
