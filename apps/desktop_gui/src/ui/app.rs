//! Main egui application: form panel on the left, searchable case list in
//! the center, status bar at the bottom. All state transitions happen on
//! discrete UI events or on events queued by the backend worker.

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use report_core::{
    export_file_name, filter_cases, write_csv, AutofillRejection, CaseStore, FormController,
    SubmitPhase, SubmitRejection,
};
use shared::domain::{Case, CaseId, CaseQuality};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

/// How long the "added successfully" confirmation stays on the submit
/// button before the form reverts to its editable state.
const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
const GOOD_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const FAIR_YELLOW: egui::Color32 = egui::Color32::from_rgb(202, 138, 4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

impl StatusBanner {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Info,
            message: message.into(),
        }
    }
}

pub struct CaseReportApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    store: CaseStore,
    form: FormController,

    search_query: String,
    /// Per-case "notes expanded" toggle; default collapsed, not persisted.
    expanded_notes: HashSet<CaseId>,

    autofill_description: String,
    autofill_error: Option<String>,

    status: String,
    status_banner: Option<StatusBanner>,
    success_shown_at: Option<Instant>,
}

impl CaseReportApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            store: CaseStore::new(),
            form: FormController::new(),
            search_query: String::new(),
            expanded_notes: HashSet::new(),
            autofill_description: String::new(),
            autofill_error: None,
            status: "Đang khởi động...".to_string(),
            status_banner: None,
            success_shown_at: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::CaseSubmitted { draft } => {
                    self.form.complete_submit();
                    let case = self.store.add(draft);
                    self.success_shown_at = Some(Instant::now());
                    self.status = format!("Đã thêm báo cáo {}", case.file_code);
                }
                UiEvent::AutofillCompleted(fields) => {
                    self.form.apply_autofill(fields);
                    self.autofill_error = None;
                    self.status = "Đã điền biểu mẫu từ mô tả".to_string();
                }
                UiEvent::AutofillFailed(message) => {
                    self.form.fail_autofill();
                    self.autofill_error = Some(message);
                }
                UiEvent::Error(err) => {
                    match err.context() {
                        UiErrorContext::SubmitCase => self.form.abort_submit(),
                        UiErrorContext::Autofill => {
                            self.form.fail_autofill();
                            self.autofill_error = Some(err.message().to_string());
                        }
                        _ => {}
                    }
                    self.status_banner = Some(StatusBanner::error(err.message()));
                }
            }
        }
    }

    fn maybe_clear_success(&mut self) {
        if self.form.phase() == SubmitPhase::Success {
            let elapsed_enough = self
                .success_shown_at
                .map_or(true, |shown| shown.elapsed() >= SUCCESS_DISPLAY);
            if elapsed_enough {
                self.form.acknowledge_success();
                self.success_shown_at = None;
            }
        }
    }

    fn submit_clicked(&mut self) {
        match self.form.begin_submit() {
            Ok(draft) => {
                let accepted = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitCase { draft },
                    &mut self.status,
                );
                if !accepted {
                    self.form.abort_submit();
                    self.status_banner = Some(StatusBanner::error(self.status.clone()));
                }
            }
            Err(SubmitRejection::Invalid(err)) => {
                self.status_banner = Some(StatusBanner::error(format!(
                    "Vui lòng điền đầy đủ các trường bắt buộc: {}.",
                    err.field.form_label()
                )));
            }
            // Submit trigger is disabled while a round trip is outstanding.
            Err(SubmitRejection::InFlight) => {}
        }
    }

    fn autofill_clicked(&mut self) {
        match self.form.begin_autofill(&self.autofill_description) {
            Ok(description) => {
                self.autofill_error = None;
                let accepted = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::AutofillDraft { description },
                    &mut self.status,
                );
                if !accepted {
                    self.form.fail_autofill();
                    self.autofill_error = Some(self.status.clone());
                }
            }
            Err(AutofillRejection::EmptyDescription) => {
                self.autofill_error =
                    Some("Nhập mô tả vụ việc trước khi dùng trợ lý AI.".to_string());
            }
            Err(AutofillRejection::InFlight) => {}
        }
    }

    fn export_clicked(&mut self) {
        let filtered: Vec<Case> = filter_cases(self.store.all(), &self.search_query)
            .into_iter()
            .cloned()
            .collect();
        if filtered.is_empty() {
            self.status_banner = Some(StatusBanner::error("Không có dữ liệu để xuất."));
            return;
        }

        let file_name = export_file_name(Local::now().date_naive());
        let Some(path) = rfd::FileDialog::new().set_file_name(&file_name).save_file() else {
            return;
        };

        let rows: Vec<&Case> = filtered.iter().collect();
        match write_csv(&path, &rows) {
            Ok(()) => {
                self.status = format!("Đã xuất {} vụ việc ra {}", rows.len(), path.display());
                self.status_banner = Some(StatusBanner::info(self.status.clone()));
            }
            Err(err) => {
                self.status_banner =
                    Some(StatusBanner::error(format!("Xuất báo cáo thất bại: {err}")));
            }
        }
    }

    fn show_form_panel(&mut self, ui: &mut egui::Ui) {
        let mut submit_requested = false;
        let mut autofill_requested = false;

        ui.add_space(4.0);
        ui.heading("Thêm Vụ việc Thành công Mới");
        ui.separator();

        let editing = self.form.phase() == SubmitPhase::Editing;
        let autofill_busy = self.form.autofill_in_flight();

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.add_enabled_ui(editing, |ui| {
                    ui.label("Mô tả tự do (trợ lý AI)");
                    ui.add(
                        egui::TextEdit::multiline(&mut self.autofill_description)
                            .desired_rows(3)
                            .desired_width(f32::INFINITY)
                            .hint_text("Dán mô tả vụ việc, AI sẽ điền các trường bên dưới..."),
                    );
                    let autofill_label = if autofill_busy {
                        "Đang phân tích..."
                    } else {
                        "Điền từ mô tả"
                    };
                    if ui
                        .add_enabled(!autofill_busy, egui::Button::new(autofill_label))
                        .clicked()
                    {
                        autofill_requested = true;
                    }
                    if let Some(message) = &self.autofill_error {
                        ui.colored_label(ERROR_RED, message);
                    }

                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);

                    let draft = self.form.draft_mut();
                    ui.label("Tên vụ việc");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.case_name)
                            .desired_width(f32::INFINITY)
                            .hint_text("VD: Vụ án tranh chấp đất đai ABC"),
                    );
                    ui.label("Mã hồ sơ vụ việc");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.file_code)
                            .desired_width(f32::INFINITY)
                            .hint_text("VD: HS-2024-123"),
                    );
                    ui.label("TGV thực hiện");
                    ui.add(
                        egui::TextEdit::singleline(&mut draft.legal_aid_provider)
                            .desired_width(f32::INFINITY)
                            .hint_text("VD: Nguyễn Văn A"),
                    );
                    ui.label("Tiêu chí thành công");
                    ui.add(
                        egui::TextEdit::multiline(&mut draft.success_criterion)
                            .desired_rows(3)
                            .desired_width(f32::INFINITY)
                            .hint_text("Mô tả chi tiết tiêu chí thành công của vụ việc..."),
                    );
                    ui.label("Ghi chú chi tiết (Tùy chọn)");
                    ui.add(
                        egui::TextEdit::multiline(&mut draft.notes)
                            .desired_rows(4)
                            .desired_width(f32::INFINITY)
                            .hint_text("Thêm thông tin, diễn biến chính..."),
                    );

                    ui.add_space(4.0);
                    ui.label("Chất lượng vụ việc");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut draft.quality, CaseQuality::Good, "Tốt");
                        ui.radio_value(&mut draft.quality, CaseQuality::Fair, "Khá");
                    });
                });

                ui.add_space(10.0);
                let (submit_label, submit_enabled) = match self.form.phase() {
                    SubmitPhase::Editing => ("Thêm Báo cáo", true),
                    SubmitPhase::Submitting => ("Đang gửi...", false),
                    SubmitPhase::Success => ("Đã thêm thành công!", false),
                };
                let submit_btn = egui::Button::new(submit_label)
                    .min_size(egui::vec2(ui.available_width(), 32.0));
                if ui.add_enabled(submit_enabled, submit_btn).clicked() {
                    submit_requested = true;
                }
                if let Some(err) = self.form.validation_error() {
                    ui.colored_label(ERROR_RED, err.to_string());
                }
            });

        if submit_requested {
            self.submit_clicked();
        }
        if autofill_requested {
            self.autofill_clicked();
        }
    }

    fn show_list_panel(&mut self, ui: &mut egui::Ui) {
        let mut export_requested = false;

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Danh sách Vụ việc");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let has_rows = !filter_cases(self.store.all(), &self.search_query).is_empty();
                if ui
                    .add_enabled(has_rows, egui::Button::new("Xuất báo cáo"))
                    .clicked()
                {
                    export_requested = true;
                }
            });
        });
        ui.separator();

        ui.add(
            egui::TextEdit::singleline(&mut self.search_query)
                .desired_width(f32::INFINITY)
                .hint_text("Tìm kiếm theo tên vụ việc, mã hồ sơ, TGV..."),
        );
        ui.add_space(6.0);

        if self.store.is_empty() && self.search_query.is_empty() {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Chưa có báo cáo nào").strong());
                ui.label("Hãy bắt đầu bằng cách thêm một vụ việc mới từ biểu mẫu bên cạnh.");
            });
            return;
        }

        let filtered = filter_cases(self.store.all(), &self.search_query);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if filtered.is_empty() {
                    ui.add_space(32.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("Không tìm thấy kết quả nào").strong());
                        ui.label("Vui lòng thử lại với từ khóa khác.");
                    });
                    return;
                }

                for case in &filtered {
                    let expanded = self.expanded_notes.contains(&case.id);
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&case.case_name).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| quality_badge(ui, case.quality),
                            );
                        });
                        ui.label(
                            egui::RichText::new(format!("Mã HS: {}", case.file_code)).weak(),
                        );
                        ui.add_space(4.0);
                        ui.label(format!("TGV thực hiện: {}", case.legal_aid_provider));
                        ui.label(format!("Tiêu chí: {}", case.success_criterion));

                        if let Some(notes) = &case.notes {
                            let toggle_label =
                                if expanded { "Ẩn chi tiết" } else { "Xem chi tiết" };
                            if ui.link(toggle_label).clicked() {
                                if expanded {
                                    self.expanded_notes.remove(&case.id);
                                } else {
                                    self.expanded_notes.insert(case.id);
                                }
                            }
                            if expanded {
                                ui.label(format!("Ghi chú: {notes}"));
                            }
                        }

                        ui.label(
                            egui::RichText::new(format!(
                                "Ngày báo cáo: {}",
                                case.submission_date
                                    .with_timezone(&Local)
                                    .format("%d/%m/%Y")
                            ))
                            .weak()
                            .small(),
                        );
                    });
                    ui.add_space(4.0);
                }
            });

        if export_requested {
            self.export_clicked();
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let mut dismiss_banner = false;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if let Some(banner) = &self.status_banner {
                let color = match banner.severity {
                    StatusBannerSeverity::Info => GOOD_GREEN,
                    StatusBannerSeverity::Error => ERROR_RED,
                };
                ui.horizontal(|ui| {
                    ui.colored_label(color, &banner.message);
                    if ui.small_button("✕").clicked() {
                        dismiss_banner = true;
                    }
                });
            }
            ui.horizontal_wrapped(|ui| {
                ui.small("Trạng thái:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
        if dismiss_banner {
            self.status_banner = None;
        }
    }
}

fn quality_badge(ui: &mut egui::Ui, quality: CaseQuality) {
    let color = match quality {
        CaseQuality::Good => GOOD_GREEN,
        CaseQuality::Fair => FAIR_YELLOW,
    };
    ui.label(egui::RichText::new(quality.label()).color(color).strong());
}

impl eframe::App for CaseReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.maybe_clear_success();

        self.show_status_bar(ctx);
        egui::SidePanel::left("case_form_panel")
            .resizable(true)
            .default_width(380.0)
            .min_width(320.0)
            .show(ctx, |ui| self.show_form_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.show_list_panel(ui));

        // Keep polling the worker queue while something is outstanding so
        // its events (and the success timer) are picked up promptly.
        let busy =
            self.form.phase() != SubmitPhase::Editing || self.form.autofill_in_flight();
        if busy {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
