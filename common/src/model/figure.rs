//! Map figure sent from the backend to the browser client.
//!
//! The backend computes everything that depends on the data (center, categories,
//! colors, hover rows); the client only draws what it receives. A figure with no
//! traces is a valid "shell": it positions the map but shows no markers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

/// Placement and look of the legend overlay.
///
/// `x`/`y` are fractions of the map panel, anchored with `x_anchor`/`y_anchor`
/// (e.g. `left` + `top` pins the legend's top-left corner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub title: Option<String>,
    pub x: f64,
    pub y: f64,
    pub x_anchor: String,
    pub y_anchor: String,
    pub background: String,
    pub border_color: String,
    pub border_width: u32,
    pub font_size: u32,
}

/// One labelled line in a marker's hover popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    /// Always-visible text drawn next to the marker (the record's `Nr`).
    pub label: String,
    /// Bold heading of the popup (the record's `Nr`).
    pub hover_name: String,
    pub hover_fields: Vec<HoverField>,
}

/// All markers sharing one attribute value. Each trace is one legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapTrace {
    pub name: String,
    pub color: String,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFigure {
    pub center: MapCenter,
    pub zoom: u8,
    /// Base tile style, e.g. `carto-positron`.
    pub style: String,
    pub marker_size: u32,
    pub legend: LegendLayout,
    pub traces: Vec<MapTrace>,
}

impl MapFigure {
    pub fn marker_count(&self) -> usize {
        self.traces.iter().map(|t| t.markers.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
