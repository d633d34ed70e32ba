// src/chart.rs

//! Chart payload in the `{chartType, data, options}` shape consumed by
//! react-google-charts.

use serde::Serialize;

use crate::models::CountRecord;
use crate::pivot::{build_pivot, PivotError, PivotTable};

pub const CHART_TYPE: &str = "ColumnChart";
const TITLE_PREFIX: &str = "Attribute Distribution for";
const DEFAULT_TITLE_CONTEXT: &str = "All Teachers";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub chart_type: &'static str,
    pub data: PivotTable,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: String,
    pub chart_area: ChartArea,
    pub h_axis: HAxis,
    pub v_axis: VAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArea {
    pub top: u32,
    pub left: u32,
    pub width: &'static str,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HAxis {
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VAxis {
    pub gridlines: Gridlines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gridlines {
    pub multiple: u32,
}

impl ChartOptions {
    /// Static styling; only the title varies.
    pub fn with_title(title: String) -> Self {
        Self {
            title,
            chart_area: ChartArea {
                top: 80,
                left: 50,
                width: "65%",
                height: 350,
            },
            h_axis: HAxis {
                text_style: TextStyle { font_size: 9 },
            },
            v_axis: VAxis {
                gridlines: Gridlines { multiple: 1 },
            },
        }
    }
}

pub fn chart_title(context: Option<&str>) -> String {
    format!("{TITLE_PREFIX} {}", context.unwrap_or(DEFAULT_TITLE_CONTEXT))
}

/// Pivot the counts and wrap them with title and styling.
pub fn assemble_chart(
    columns: &[String],
    counts: &[CountRecord],
    teachers: &[String],
    title_context: Option<&str>,
) -> Result<ChartPayload, PivotError> {
    let data = build_pivot(columns, counts, teachers)?;
    Ok(ChartPayload {
        chart_type: CHART_TYPE,
        data,
        options: ChartOptions::with_title(chart_title(title_context)),
    })
}
