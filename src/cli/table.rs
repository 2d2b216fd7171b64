//! Line formatting for console listings
//!
//! Every listing goes through [`Styler`] so coloring can be switched off for
//! pipes, tests and `--no-color`.

use chrono::{DateTime, Local};
use console::style;
use std::fmt::Write;

use crate::cli::helpers::{join_ids, truncate_str};
use crate::core::config::DEFAULT_DATE_FORMAT;
use crate::core::identity::EntityId;
use crate::core::models::{PartSpecificationModel, RequestModel, SupplierModel};

/// Maximum description width in the inventory listing
const DESCRIPTION_WIDTH: usize = 60;

/// Applies terminal styling when enabled
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Styler that never emits escape codes
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Entity id, cyan; "?" for an unsaved entity
    pub fn id(&self, id: Option<EntityId>) -> String {
        let text = id.map_or_else(|| "?".to_string(), |id| id.to_string());
        style(text).cyan().force_styling(self.color).to_string()
    }

    pub fn heading(&self, text: &str) -> String {
        style(text).bold().force_styling(self.color).to_string()
    }

    pub fn success(&self, text: &str) -> String {
        style(text).green().force_styling(self.color).to_string()
    }

    pub fn error(&self, text: &str) -> String {
        style(text).red().force_styling(self.color).to_string()
    }

    pub fn dim(&self, text: &str) -> String {
        style(text).dim().force_styling(self.color).to_string()
    }
}

/// Format an optional request date, "-" when unset
///
/// A format chrono cannot render falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_date(date: Option<DateTime<Local>>, format: &str) -> String {
    let Some(date) = date else {
        return "-".to_string();
    };
    let mut text = String::new();
    match write!(text, "{}", date.format(format)) {
        Ok(()) => text,
        Err(_) => date.format(DEFAULT_DATE_FORMAT).to_string(),
    }
}

/// `<id>) <name>: <description>`
pub fn part_specification_line(styler: &Styler, model: &PartSpecificationModel) -> String {
    format!(
        "{}) {}: {}",
        styler.id(model.id),
        model.name,
        model.description
    )
}

/// `<name>: <description>`, used before an id is relevant
pub fn part_specification_summary(model: &PartSpecificationModel) -> String {
    format!("{}: {}", model.name, model.description)
}

pub fn supplier_line(styler: &Styler, model: &SupplierModel) -> String {
    styler.id(model.id)
}

/// One requisition request with its details
pub fn request_line(styler: &Styler, model: &RequestModel, date_format: &str) -> String {
    let engineer = if model.engineer_name.is_empty() {
        "-"
    } else {
        model.engineer_name.as_str()
    };
    format!(
        "id: {}  quantity: {}  engineer: {}  date: {}  suppliers: {}",
        styler.id(model.id),
        model.quantity,
        engineer,
        styler.dim(&format_date(model.request_date, date_format)),
        join_ids(&model.suppliers)
    )
}

/// Inventory listing block for one part specification
pub fn inventory_block(
    styler: &Styler,
    model: &PartSpecificationModel,
    suppliers: &[SupplierModel],
    requests: &[RequestModel],
    date_format: &str,
) -> Vec<String> {
    let supplier_ids: Vec<EntityId> = suppliers.iter().filter_map(|s| s.id).collect();
    let mut lines = vec![
        format!(
            "{}) {}: {}",
            styler.id(model.id),
            styler.heading(&model.name),
            truncate_str(&model.description, DESCRIPTION_WIDTH)
        ),
        format!("    suppliers: {}", join_ids(&supplier_ids)),
    ];
    if requests.is_empty() {
        lines.push("    requests: -".to_string());
    } else {
        lines.push("    requests:".to_string());
        lines.extend(
            requests
                .iter()
                .map(|r| format!("      {}", request_line(styler, r, date_format))),
        );
    }
    lines
}
