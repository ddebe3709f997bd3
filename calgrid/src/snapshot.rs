use std::fs;

use anyhow::Context;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::{
    data::Rect,
    page::{CellHandle, FragmentHandle, Page},
};

/// A captured calendar page: what a browser saw after the grid finished rendering.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub cells: Vec<CellSnapshot>,
    #[serde(default)]
    pub fragments: Vec<FragmentSnapshot>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CellSnapshot {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub rect: Option<Rect>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FragmentSnapshot {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    /// Full text of the event's button, if it has one.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rect: Option<Rect>,
}

impl PageSnapshot {
    pub fn from_file(path: &Utf8Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path.as_std_path())
            .with_context(|| format!("couldn't read page snapshot `{path}`"))?;
        Self::from_json(&data)
            .with_context(|| format!("malformed page snapshot `{path}`"))
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

impl Page for PageSnapshot {
    fn month_indicator(&self) -> Option<String> {
        self.month.clone()
    }

    fn day_cells(&self) -> Vec<&dyn CellHandle> {
        self.cells.iter().map(|cell| cell as &dyn CellHandle).collect()
    }

    fn event_fragments(&self) -> Vec<&dyn FragmentHandle> {
        self.fragments
            .iter()
            .map(|fragment| fragment as &dyn FragmentHandle)
            .collect()
    }
}

impl CellHandle for CellSnapshot {
    fn day_text(&self) -> Option<String> {
        self.day.clone()
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.rect
    }
}

impl FragmentHandle for FragmentSnapshot {
    fn title_text(&self) -> Option<String> {
        self.title.clone()
    }

    fn time_text(&self) -> Option<String> {
        self.time.clone()
    }

    fn control_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn bounding_box(&self) -> Option<Rect> {
        self.rect
    }
}
