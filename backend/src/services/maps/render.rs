//! Builds the map figure for one selected attribute column.
//!
//! Points are grouped by their value in the selected column. Every distinct value
//! becomes one trace (one legend entry) with its own color, in the order values
//! first appear in the table. Each marker carries its record number as a
//! permanent label. Hover popups show the record number, the resolved place
//! name and the value; coordinates are never part of the popup.

use crate::dataset::PointTable;
use common::model::figure::{
    HoverField, LegendLayout, MapCenter, MapFigure, MapMarker, MapTrace,
};
use std::collections::HashMap;

pub const ZOOM: u8 = 7;
pub const MARKER_SIZE: u32 = 10;
pub const TILE_STYLE: &str = "carto-positron";
/// Hover label of the resolved place name.
pub const DISPLAY_NAME_LABEL: &str = "Nazwa Miejscowości";

/// Used only when the table has no rows to average.
const FALLBACK_CENTER: MapCenter = MapCenter {
    lat: 53.94,
    lon: 18.0,
};

/// Qualitative palette assigned to categories in order, wrapping around.
const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Renders `selected` from `points`.
///
/// A missing selection, or one that is not in `selectable`, yields the empty shell:
/// same center, zoom and styling, no traces.
pub fn render_figure(points: &PointTable, selectable: &[String], selected: Option<&str>) -> MapFigure {
    let center = points
        .centroid()
        .map(|(lat, lon)| MapCenter { lat, lon })
        .unwrap_or(FALLBACK_CENTER);

    let selected = selected.filter(|id| selectable.iter().any(|s| s == id));
    let traces = match selected {
        Some(column) => build_traces(points, column),
        None => Vec::new(),
    };

    MapFigure {
        center,
        zoom: ZOOM,
        style: TILE_STYLE.to_string(),
        marker_size: MARKER_SIZE,
        legend: legend_layout(selected),
        traces,
    }
}

fn build_traces(points: &PointTable, column: &str) -> Vec<MapTrace> {
    let mut traces: Vec<MapTrace> = Vec::new();
    let mut index_by_value: HashMap<&str, usize> = HashMap::new();

    for record in points.records() {
        let value = record.value(column).unwrap_or_default();
        let idx = *index_by_value.entry(value).or_insert_with(|| {
            traces.push(MapTrace {
                name: value.to_string(),
                color: PALETTE[traces.len() % PALETTE.len()].to_string(),
                markers: Vec::new(),
            });
            traces.len() - 1
        });

        traces[idx].markers.push(MapMarker {
            lat: record.lat,
            lon: record.lon,
            label: record.nr.clone(),
            hover_name: record.nr.clone(),
            hover_fields: vec![
                HoverField {
                    label: DISPLAY_NAME_LABEL.to_string(),
                    value: record.display_name.clone(),
                },
                HoverField {
                    label: column.to_string(),
                    value: value.to_string(),
                },
            ],
        });
    }

    traces
}

/// Semi-transparent legend pinned to the top-left corner of the map.
fn legend_layout(title: Option<&str>) -> LegendLayout {
    LegendLayout {
        title: title.map(str::to_string),
        x: 0.01,
        y: 0.99,
        x_anchor: "left".to_string(),
        y_anchor: "top".to_string(),
        background: "rgba(255,255,255,0.7)".to_string(),
        border_color: "black".to_string(),
        border_width: 1,
        font_size: 12,
    }
}
