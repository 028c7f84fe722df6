//! Main application: state, controls, and the export capture state machine.

use chrono::Local;
use egui::{Rect, RichText, UserData, ViewportCommand};

use crate::models::selection::SelectionStore;
use crate::models::settings::{Settings, TimeFormat};
use crate::models::slot::IntervalType;
use crate::models::week::WeekNavigator;
use crate::services::export::JpegExportService;
use crate::services::timezone::{zone_label, TimezoneService, TIMEZONE_OPTIONS};
use crate::ui_egui::views::grid::{render_grid, GridContext};
use crate::ui_egui::views::GridPalette;

/// Exports are captured at 2x density regardless of the display scale.
const EXPORT_PIXELS_PER_POINT: f32 = 2.0;

/// Export runs across frames: the frame after the request re-renders the
/// calendar without local-time decorations at export density, then the
/// framebuffer capture is requested and the result lands one frame later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ExportPhase {
    #[default]
    Idle,
    Requested,
    Preparing,
    AwaitingCapture,
}

pub struct AvailabilityApp {
    settings: Settings,
    selection: SelectionStore,
    week: WeekNavigator,
    /// IANA name of the host zone, detected once at startup
    local_zone: String,
    palette: GridPalette,
    export_phase: ExportPhase,
    /// Screen rect of the calendar panel from the last rendered frame
    capture_rect: Option<Rect>,
    /// Pixel density to restore once the capture lands
    restore_pixels_per_point: Option<f32>,
}

impl AvailabilityApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let local_zone = TimezoneService::detect_local();
        log::info!("Detected local timezone: {local_zone}");

        Self {
            settings: Settings::default(),
            selection: SelectionStore::new(),
            week: WeekNavigator::new(),
            local_zone,
            palette: GridPalette::light(),
            export_phase: ExportPhase::Idle,
            capture_rect: None,
            restore_pixels_per_point: None,
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        self.handle_capture_events(ctx);

        let exporting = self.export_phase != ExportPhase::Idle;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.render_controls(ui, exporting);
        });

        let palette = self.palette;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let frame = egui::Frame::none()
                        .fill(palette.panel_bg)
                        .rounding(egui::Rounding::same(10.0))
                        .inner_margin(egui::Margin::same(10.0));
                    let response = frame.show(ui, |ui| {
                        self.render_week_header(ui);
                        ui.add_space(4.0);

                        let grid_ctx = GridContext {
                            days: self.week.days(Local::now().date_naive()),
                            now: Local::now(),
                            settings: &self.settings,
                            exporting,
                        };
                        // Gray backdrop shows through the cell gaps as the
                        // grid lines.
                        egui::Frame::none()
                            .fill(palette.grid_bg)
                            .rounding(egui::Rounding::same(8.0))
                            .inner_margin(egui::Margin::same(6.0))
                            .show(ui, |ui| {
                                render_grid(ui, &grid_ctx, &mut self.selection, &palette);
                            });

                        if !exporting {
                            ui.add_space(6.0);
                            ui.vertical_centered(|ui| {
                                ui.label("Click and drag to select your available time slots");
                            });
                        }
                    });
                    self.capture_rect = Some(response.response.rect);
                });
        });

        match self.export_phase {
            // The request frame still shows the click; capture the next one.
            ExportPhase::Requested => {
                self.export_phase = ExportPhase::Preparing;
                ctx.request_repaint();
            }
            ExportPhase::Preparing => {
                ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::default()));
                self.export_phase = ExportPhase::AwaitingCapture;
                ctx.request_repaint();
            }
            ExportPhase::AwaitingCapture | ExportPhase::Idle => {}
        }
    }

    fn handle_capture_events(&mut self, ctx: &egui::Context) {
        let image = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });

        if let Some(image) = image {
            if self.export_phase == ExportPhase::AwaitingCapture {
                self.finish_export(ctx, &image);
            }
            self.export_phase = ExportPhase::Idle;
        }
    }

    fn finish_export(&mut self, ctx: &egui::Context, image: &egui::ColorImage) {
        let pixels_per_point = ctx.pixels_per_point();
        let cropped = match self.capture_rect {
            Some(rect) => image.region(&rect.intersect(ctx.screen_rect()), Some(pixels_per_point)),
            None => image.clone(),
        };

        if let Some(ppp) = self.restore_pixels_per_point.take() {
            ctx.set_pixels_per_point(ppp);
        }

        let today = Local::now().date_naive();
        let Some(path) = JpegExportService::prompt_save_path(today) else {
            log::info!("Export cancelled");
            return;
        };
        match JpegExportService::write_jpeg(&cropped, &path) {
            Ok(()) => log::info!("Exported availability grid to {}", path.display()),
            Err(err) => log::error!("Export failed: {err:#}"),
        }
    }

    fn start_export(&mut self, ctx: &egui::Context) {
        if self.export_phase != ExportPhase::Idle || self.selection.is_empty() {
            return;
        }
        log::info!(
            "Exporting availability grid ({} slots selected)",
            self.selection.len()
        );
        self.restore_pixels_per_point = Some(ctx.pixels_per_point());
        ctx.set_pixels_per_point(EXPORT_PIXELS_PER_POINT);
        self.export_phase = ExportPhase::Requested;
        ctx.request_repaint();
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, exporting: bool) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Your Timezone").small());
                ui.strong(&self.local_zone);
            });
            ui.separator();

            ui.vertical(|ui| {
                ui.label(RichText::new("Target Timezone").small());
                egui::ComboBox::from_id_source("target-timezone")
                    .width(230.0)
                    .selected_text(zone_label(self.settings.target_timezone))
                    .show_ui(ui, |ui| {
                        for option in &TIMEZONE_OPTIONS {
                            ui.selectable_value(
                                &mut self.settings.target_timezone,
                                option.zone,
                                option.label,
                            );
                        }
                    });
            });
            ui.separator();

            ui.selectable_value(&mut self.settings.time_format, TimeFormat::TwelveHour, "12h");
            ui.selectable_value(
                &mut self.settings.time_format,
                TimeFormat::TwentyFourHour,
                "24h",
            );
            ui.separator();

            ui.label("Interval:");
            for interval in IntervalType::ALL {
                ui.radio_value(&mut self.settings.interval, interval, interval.label());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if exporting { "Exporting..." } else { "Export as JPEG" };
                let enabled = !exporting && !self.selection.is_empty();
                if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                    let ctx = ui.ctx().clone();
                    self.start_export(&ctx);
                }
            });
        });
        ui.add_space(6.0);
    }

    fn render_week_header(&mut self, ui: &mut egui::Ui) {
        let today = Local::now().date_naive();
        ui.horizontal(|ui| {
            let prev = ui.add_enabled(self.week.can_go_previous(), egui::Button::new("◀"));
            if prev.clicked() {
                self.week.previous();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶").clicked() {
                    self.week.next();
                }
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.heading(format!(
                        "Availability for {}",
                        zone_label(self.settings.target_timezone)
                    ));
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            self.week.range_label(today),
                            self.week.offset_label()
                        ))
                        .small(),
                    );
                });
            });
        });
    }
}

impl eframe::App for AvailabilityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}
