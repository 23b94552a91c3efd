//! Worker thread bridging the UI command queue to the external sinks.
//! Owns its own tokio runtime; results flow back as [`UiEvent`]s.

use crossbeam_channel::{Receiver, Sender};
use report_core::{load_settings, AutofillClient};
use tracing::{debug, error};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let settings = load_settings();
            let autofill = AutofillClient::new(&settings);
            if !autofill.has_api_key() {
                debug!("no Gemini API key configured; autofill requests will report it");
            }
            let _ = ui_tx.try_send(UiEvent::Info("Sẵn sàng".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitCase { draft } => {
                        // Stands in for a real persistence call; the
                        // in-memory list itself is owned by the UI thread.
                        debug!(file_code = %draft.file_code, "case submission round trip");
                        let _ = ui_tx.try_send(UiEvent::CaseSubmitted { draft });
                    }
                    BackendCommand::AutofillDraft { description } => {
                        match autofill.draft_from_description(&description).await {
                            Ok(fields) => {
                                let _ = ui_tx.try_send(UiEvent::AutofillCompleted(fields));
                            }
                            Err(err) => {
                                error!("autofill request failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::AutofillFailed(err.to_string()));
                            }
                        }
                    }
                }
            }
        });
    });
}
