//! The 24-hour x 7-day slot grid.
//!
//! Contains the outer grid loop that iterates over hours x day columns and
//! the pointer handling for toggle and drag-fill. While an export capture
//! is in flight the hour gutter and live-time decorations are suppressed.

use chrono::{DateTime, Local, Timelike};
use egui::{Align2, FontId, Rounding, Sense, Stroke, Vec2};

use super::palette::GridPalette;
use crate::models::selection::SelectionStore;
use crate::models::settings::Settings;
use crate::models::slot::SelectedSlot;
use crate::services::timezone::TimezoneService;

/// Constants for grid layout
pub const TIME_LABEL_WIDTH: f32 = 72.0;
pub const HEADER_HEIGHT: f32 = 44.0;
pub const SLOT_HEIGHT: f32 = 28.0;
pub const CELL_SPACING: f32 = 1.0;
const CELL_ROUNDING: f32 = 3.0;

/// Per-frame inputs the grid renders from.
pub struct GridContext<'a> {
    pub days: [chrono::NaiveDate; 7],
    pub now: DateTime<Local>,
    pub settings: &'a Settings,
    /// Hide the local-time gutter and live-time decorations.
    pub exporting: bool,
}

/// Render the grid and apply pointer interactions to the selection store.
pub fn render_grid(
    ui: &mut egui::Ui,
    ctx: &GridContext<'_>,
    selection: &mut SelectionStore,
    palette: &GridPalette,
) {
    ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);

    let gutter_width = if ctx.exporting {
        0.0
    } else {
        TIME_LABEL_WIDTH + CELL_SPACING
    };
    let col_width = (ui.available_width() - gutter_width - CELL_SPACING * 6.0) / 7.0;

    render_header_row(ui, ctx, palette, col_width);

    let minutes = ctx.settings.interval.minutes();
    // The live-time ring follows the current quarter hour, same as the
    // minute steps of the finest interval.
    let current_quarter = (ctx.now.minute() / 15) * 15;

    for hour in 0..24u8 {
        for (row, &minute) in minutes.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);

                if !ctx.exporting {
                    render_gutter_cell(ui, ctx, palette, hour, row == 0);
                }

                for (day_idx, date) in ctx.days.iter().enumerate() {
                    let slot = SelectedSlot::new(day_idx as u8, hour, minute);
                    render_slot_cell(
                        ui,
                        ctx,
                        selection,
                        palette,
                        *date,
                        slot,
                        col_width,
                        current_quarter,
                    );
                }
            });
        }
    }

    // The gesture ends on release anywhere, including outside the grid.
    if selection.is_dragging() {
        let released = ui.input(|i| i.pointer.any_released() || !i.pointer.any_down());
        if released {
            selection.end_drag();
        }
    }
}

fn render_header_row(
    ui: &mut egui::Ui,
    ctx: &GridContext<'_>,
    palette: &GridPalette,
    col_width: f32,
) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);

        if !ctx.exporting {
            let (rect, _) = ui.allocate_exact_size(
                Vec2::new(TIME_LABEL_WIDTH, HEADER_HEIGHT),
                Sense::hover(),
            );
            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(CELL_ROUNDING), palette.gutter_header_bg);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Your time",
                FontId::proportional(13.0),
                palette.day_header_text,
            );
        }

        for date in &ctx.days {
            let (rect, _) =
                ui.allocate_exact_size(Vec2::new(col_width, HEADER_HEIGHT), Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, Rounding::same(CELL_ROUNDING), palette.day_header_bg);
            painter.text(
                rect.center() - Vec2::new(0.0, 8.0),
                Align2::CENTER_CENTER,
                date.format("%a").to_string(),
                FontId::proportional(14.0),
                palette.day_header_text,
            );
            painter.text(
                rect.center() + Vec2::new(0.0, 9.0),
                Align2::CENTER_CENTER,
                date.format("%b %-d").to_string(),
                FontId::proportional(11.0),
                palette.day_header_subtext,
            );
        }
    });
}

fn render_gutter_cell(
    ui: &mut egui::Ui,
    ctx: &GridContext<'_>,
    palette: &GridPalette,
    hour: u8,
    is_hour_start: bool,
) {
    let (rect, _) =
        ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, Rounding::ZERO, palette.gutter_bg);

    if is_hour_start {
        let label = TimezoneService::hour_label(hour, ctx.settings.time_format);
        painter.text(
            rect.right_center() - Vec2::new(6.0, 0.0),
            Align2::RIGHT_CENTER,
            label,
            FontId::proportional(12.0),
            palette.gutter_text,
        );
    }

    // Marker bar on the current hour
    if u32::from(hour) == ctx.now.hour() {
        let bar = egui::Rect::from_min_size(rect.left_top(), Vec2::new(3.0, rect.height()));
        painter.rect_filled(bar, Rounding::ZERO, palette.hour_marker);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_slot_cell(
    ui: &mut egui::Ui,
    ctx: &GridContext<'_>,
    selection: &mut SelectionStore,
    palette: &GridPalette,
    date: chrono::NaiveDate,
    slot: SelectedSlot,
    col_width: f32,
    current_quarter: u32,
) {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(col_width, SLOT_HEIGHT), Sense::click_and_drag());

    // Pointer down starts the gesture and toggles the pressed cell; while
    // the button stays down, the hovered cell drives the box fill.
    if !selection.is_dragging() && response.is_pointer_button_down_on() {
        selection.begin_drag(slot);
    }
    if selection.is_dragging() && ui.rect_contains_pointer(rect) {
        selection.update_drag(slot, ctx.settings.interval);
    }

    let is_selected = selection.is_selected(slot);
    let is_current = !ctx.exporting
        && ctx.now.hour() == u32::from(slot.hour)
        && current_quarter == u32::from(slot.minute);

    let fill = if is_selected {
        palette.selected_bg
    } else if is_current {
        palette.current_cell_bg
    } else if response.hovered() && !selection.is_dragging() {
        palette.cell_hover_bg
    } else {
        palette.cell_bg
    };

    let painter = ui.painter();
    painter.rect_filled(rect, Rounding::same(CELL_ROUNDING), fill);
    if is_current {
        painter.rect_stroke(
            rect.shrink(1.0),
            Rounding::same(CELL_ROUNDING),
            Stroke::new(2.0, palette.current_ring),
        );
    }

    let text_color = if is_selected {
        palette.selected_text
    } else if is_current {
        palette.current_text
    } else {
        palette.cell_text
    };
    let display = TimezoneService::slot_display(
        date,
        slot.hour,
        slot.minute,
        ctx.settings.target_timezone,
        ctx.settings.time_format,
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        display,
        FontId::proportional(12.0),
        text_color,
    );

    if !ctx.exporting {
        response.on_hover_text(TimezoneService::slot_tooltip(
            date,
            slot.hour,
            slot.minute,
            ctx.settings.target_timezone,
            ctx.settings.time_format,
        ));
    }
}
