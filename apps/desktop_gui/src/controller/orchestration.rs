//! Command orchestration helpers from UI actions to the backend queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the backend worker. Returns whether the command
/// was accepted so the caller can roll back any optimistic state change
/// (e.g. a submit guard) when the queue is full or the worker is gone.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = match &cmd {
        BackendCommand::SubmitCase { .. } => "submit_case",
        BackendCommand::AutofillDraft { .. } => "autofill_draft",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "Hàng đợi xử lý đang đầy; vui lòng thử lại".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Bộ xử lý nền đã dừng; vui lòng khởi động lại ứng dụng".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::CaseDraft;

    use super::*;

    #[test]
    fn accepted_command_leaves_status_untouched() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(4);
        let mut status = String::new();
        let accepted = dispatch_backend_command(
            &cmd_tx,
            BackendCommand::SubmitCase {
                draft: CaseDraft::default(),
            },
            &mut status,
        );
        assert!(accepted);
        assert!(status.is_empty());
    }

    #[test]
    fn full_queue_is_reported_and_rejected() {
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(0);
        let mut status = String::new();
        let accepted = dispatch_backend_command(
            &cmd_tx,
            BackendCommand::AutofillDraft {
                description: "mô tả".to_string(),
            },
            &mut status,
        );
        assert!(!accepted);
        assert!(status.contains("đầy"));
    }

    #[test]
    fn disconnected_worker_is_reported_and_rejected() {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(4);
        drop(cmd_rx);
        let mut status = String::new();
        let accepted = dispatch_backend_command(
            &cmd_tx,
            BackendCommand::SubmitCase {
                draft: CaseDraft::default(),
            },
            &mut status,
        );
        assert!(!accepted);
        assert!(status.contains("khởi động lại"));
    }
}
