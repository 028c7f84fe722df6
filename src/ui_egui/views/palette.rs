use egui::Color32;

/// Colors for the availability grid, matching the light theme the export
/// is rendered with.
#[derive(Clone, Copy)]
pub struct GridPalette {
    pub panel_bg: Color32,
    pub grid_bg: Color32,
    pub day_header_bg: Color32,
    pub day_header_text: Color32,
    pub day_header_subtext: Color32,
    pub gutter_header_bg: Color32,
    pub gutter_bg: Color32,
    pub gutter_text: Color32,
    pub cell_bg: Color32,
    pub cell_hover_bg: Color32,
    pub cell_text: Color32,
    pub selected_bg: Color32,
    pub selected_text: Color32,
    pub current_cell_bg: Color32,
    pub current_text: Color32,
    pub current_ring: Color32,
    pub hour_marker: Color32,
}

impl GridPalette {
    pub fn light() -> Self {
        Self {
            panel_bg: Color32::WHITE,
            grid_bg: Color32::from_rgb(209, 213, 219),
            day_header_bg: Color32::from_rgb(31, 41, 55),
            day_header_text: Color32::WHITE,
            day_header_subtext: Color32::from_rgb(209, 213, 219),
            gutter_header_bg: Color32::from_rgb(37, 99, 235),
            gutter_bg: Color32::from_rgb(249, 250, 251),
            gutter_text: Color32::from_rgb(17, 24, 39),
            cell_bg: Color32::WHITE,
            cell_hover_bg: Color32::from_rgb(239, 246, 255),
            cell_text: Color32::from_rgb(31, 41, 55),
            selected_bg: Color32::from_rgb(59, 130, 246),
            selected_text: Color32::WHITE,
            current_cell_bg: Color32::from_rgb(239, 246, 255),
            current_text: Color32::from_rgb(29, 78, 216),
            current_ring: Color32::from_rgb(96, 165, 250),
            hour_marker: Color32::from_rgb(37, 99, 235),
        }
    }
}
