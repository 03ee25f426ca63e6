// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Printing resolved add-ons, one row per add-on.

use crate::addons::Addon;
use crate::config::OutputFormat;
use crate::error::{AddonError, Result};

const HEADER: [&str; 4] = ["NAME", "STATUS", "MESSAGE", "LAUNCH LINK"];
const COLUMN_GAP: &str = "   ";
const EMPTY_CELL: &str = "-";

pub fn render(addons: &[Addon], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(addons)),
        OutputFormat::Json => serde_json::to_string_pretty(addons)
            .map(|mut out| {
                out.push('\n');
                out
            })
            .map_err(|e| AddonError::RenderError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(addons).map_err(|e| AddonError::RenderError(e.to_string()))
        }
    }
}

fn render_table(addons: &[Addon]) -> String {
    let rows: Vec<[String; 4]> = addons.iter().map(table_row).collect();

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADER.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn table_row(addon: &Addon) -> [String; 4] {
    let message = addon
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(EMPTY_CELL)
        .to_string();
    let link = addon
        .launch_link
        .as_ref()
        .map(|l| format!("{} ({})", l.display_text, l.href))
        .unwrap_or_else(|| EMPTY_CELL.to_string());

    [addon.name.clone(), addon.status.to_string(), message, link]
}

fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}
