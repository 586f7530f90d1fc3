use serde::Serialize;

/// Declarative description of the trend chart, serialized for whatever
/// front end renders it. The payload either carries a complete figure or a
/// message explaining why there is nothing to draw.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartSpec {
    NoData { message: String },
    Ready { figure: Figure },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One plotted series. `x` holds `YYYY-MM-DD` date strings, `y` the summed
/// headcounts, and `text` the per-point labels drawn above the markers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    pub name: String,
    pub mode: String,
    pub x: Vec<String>,
    pub y: Vec<u64>,
    pub text: Vec<String>,
    pub textposition: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: String,
    pub showgrid: bool,
}

/// A shaded vertical band marking one holiday. The band is anchored to the
/// x axis in data coordinates and spans the full plot height in paper
/// coordinates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
    pub xref: String,
    pub yref: String,
    pub x0: String,
    pub x1: String,
    pub y0: f64,
    pub y1: f64,
    pub fillcolor: String,
    pub opacity: f64,
    pub layer: String,
    pub line_width: u32,
}
