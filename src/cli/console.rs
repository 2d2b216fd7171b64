//! Console user interface for the create part specification use case
//!
//! A read-eval loop over line input: print the main menu, read a selection,
//! run the matching flow, repeat until quit or end of input. Input and output
//! are generic so the loop can be driven from tests.

use chrono::Local;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::cli::helpers::{is_no, or_keep, parse_id, parse_quantity};
use crate::cli::menu::MenuResponse;
use crate::cli::table::{
    inventory_block, part_specification_line, part_specification_summary, request_line,
    supplier_line, Styler,
};
use crate::core::config::Config;
use crate::core::error::{InventoryError, Result};
use crate::core::identity::EntityId;
use crate::core::models::{PartSpecificationModel, RequestModel, SupplierModel};
use crate::core::usecase::CreatePartSpecification;

const NO_PART_SPECIFICATIONS: &str = "No part specifications, create one first";
const NO_SUPPLIERS: &str = "No suppliers, create one first";

pub struct Console<R, W> {
    use_case: CreatePartSpecification,
    input: R,
    output: W,
    styler: Styler,
    config: Config,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        use_case: CreatePartSpecification,
        input: R,
        output: W,
        styler: Styler,
        config: Config,
    ) -> Self {
        Self {
            use_case,
            input,
            output,
            styler,
            config,
        }
    }

    /// Give back the use case, e.g. to inspect it after a scripted session
    pub fn into_use_case(self) -> CreatePartSpecification {
        self.use_case
    }

    /// Execute the main loop
    ///
    /// Returns normally on quit or end of input. Lookup and parse failures are
    /// reported and the loop continues; only I/O failures end it with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display_main_menu()?;
            let selection = match self.menu_response() {
                Ok(selection) => selection,
                Err(InventoryError::EndOfInput) => {
                    debug!("input closed at main menu");
                    self.blank()?;
                    break;
                }
                Err(e) => return Err(e),
            };
            if selection == MenuResponse::Quit {
                break;
            }

            match self.handle_menu_selection(selection) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, ?selection, "menu action failed");
                    let message = self.styler.error(&format!("Error: {e}"));
                    self.line(message)?;
                }
                Err(InventoryError::EndOfInput) => {
                    debug!(?selection, "input closed during menu action");
                    self.blank()?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn handle_menu_selection(&mut self, selection: MenuResponse) -> Result<()> {
        match selection {
            MenuResponse::CreatePartSpecification => self.create_part_specification(),
            MenuResponse::AssignSupplier => self.assign_supplier(),
            MenuResponse::CreateSupplier => self.create_supplier(),
            MenuResponse::EditPartSpecification => self.edit_part_specification(),
            MenuResponse::PartRequisitionRequest => self.part_requisition_request(),
            MenuResponse::ListInventory => self.list_inventory(),
            MenuResponse::Quit => Ok(()),
            MenuResponse::Invalid => self.line("Invalid menu selection"),
        }
    }

    fn create_part_specification(&mut self) -> Result<()> {
        self.line("Create part specification")?;
        self.blank()?;
        self.line("Existing part specifications: ")?;
        for model in self.use_case.list_part_specifications() {
            self.line(part_specification_summary(&model))?;
        }
        let response = self.prompt_line("Are you sure you want to create a new one? (Enter n for no) ")?;
        if is_no(&response) {
            return Ok(());
        }

        let name = self.prompt_line("Enter part specification name: ")?;
        let description = self.prompt_line("Enter part specification description: ")?;
        let id = self
            .use_case
            .create_part_specification(&PartSpecificationModel::new(name, description))?;
        let message = self.styler.success(&format!("Created part specification {id}"));
        self.line(message)
    }

    fn assign_supplier(&mut self) -> Result<()> {
        if self.use_case.list_suppliers().is_empty() {
            return self.line(NO_SUPPLIERS);
        }
        if self.use_case.list_part_specifications().is_empty() {
            return self.line(NO_PART_SPECIFICATIONS);
        }

        self.show_part_specifications()?;
        let part_specification_id =
            self.prompt_id("Enter id of the part specification to modify: ")?;
        self.use_case
            .part_specification_repository()
            .get(part_specification_id)?;

        let suppliers = self.use_case.list_suppliers();
        self.show_suppliers(&suppliers, "Suppliers: ")?;
        let supplier_id = self.prompt_id("Enter id of the supplier to add: ")?;

        self.use_case
            .add_supplier_to_part_specification(part_specification_id, supplier_id)?;
        let message = self.styler.success(&format!(
            "Assigned supplier {supplier_id} to part specification {part_specification_id}"
        ));
        self.line(message)
    }

    fn create_supplier(&mut self) -> Result<()> {
        let id = self.use_case.create_supplier(&SupplierModel::default())?;
        let message = self.styler.success(&format!("Created supplier {id}"));
        self.line(message)
    }

    fn edit_part_specification(&mut self) -> Result<()> {
        if self.use_case.list_part_specifications().is_empty() {
            return self.line(NO_PART_SPECIFICATIONS);
        }

        self.show_part_specifications()?;
        self.blank()?;
        let part_specification_id =
            self.prompt_id("Enter id of the part specification to modify: ")?;
        let current = PartSpecificationModel::from(
            self.use_case
                .part_specification_repository()
                .get(part_specification_id)?,
        );

        self.blank()?;
        self.line("The part specification selected:")?;
        let selected = part_specification_line(&self.styler, &current);
        self.line(selected)?;
        self.blank()?;

        let name = self.prompt_line(
            "Enter part specification's new name. (To keep current value press enter): ",
        )?;
        let name = or_keep(name, &current.name);
        let description = self.prompt_line(
            "Enter part specification's new description. (To keep current value press enter): ",
        )?;
        let description = or_keep(description, &current.description);
        self.use_case
            .edit_part_specification(part_specification_id, &name, &description)?;

        self.blank()?;
        let response = self.prompt_line("Do you want to modify the supplier? (Enter n for no) ")?;
        if is_no(&response) {
            return Ok(());
        }

        let suppliers = self.use_case.list_suppliers();
        if suppliers.is_empty() {
            return self.line(NO_SUPPLIERS);
        }
        self.show_suppliers(&suppliers, "Suppliers: ")?;
        let supplier_id = self.prompt_id(
            "Enter id of the supplier to add. All previously assigned suppliers will be removed: ",
        )?;
        // Resolve first so a bad id does not leave the part without suppliers
        self.use_case.supplier_repository().get(supplier_id)?;
        self.use_case.remove_all_suppliers(part_specification_id)?;
        self.use_case
            .add_supplier_to_part_specification(part_specification_id, supplier_id)?;
        let message = self.styler.success(&format!(
            "Suppliers of part specification {part_specification_id} replaced by {supplier_id}"
        ));
        self.line(message)
    }

    fn part_requisition_request(&mut self) -> Result<()> {
        if self.use_case.list_part_specifications().is_empty() {
            return self.line(NO_PART_SPECIFICATIONS);
        }

        self.show_part_specifications()?;
        self.blank()?;
        self.line("To see a list of all requisition requests for a part specification")?;
        let part_specification_id = self.prompt_id("Enter id of the part specification: ")?;

        let existing = self
            .use_case
            .list_requisition_requests_of_part_specification(part_specification_id)?;
        self.line("Requisition requests for that part specification: ")?;
        if existing.is_empty() {
            self.blank()?;
            self.line("No requisition requests for that part specification.")?;
        }
        for model in &existing {
            let line = request_line(&self.styler, model, self.config.date_format());
            self.line(line)?;
        }

        self.blank()?;
        let response = self.prompt_line(
            "Do you want to create a new requisition request for that part specification? (Enter n for no) ",
        )?;
        if is_no(&response) {
            return Ok(());
        }
        let created = self
            .use_case
            .create_requisition_request(&RequestModel::default())?;

        self.line("Requisition requests: ")?;
        for model in self.use_case.list_requisition_requests() {
            let line = format!("id: {}", self.styler.id(model.id));
            self.line(line)?;
        }
        let requisition_request_id = self.prompt_id_or(
            &format!("Enter the id of the new requisition request created [{created}]: "),
            created,
        )?;
        let quantity = parse_quantity(
            &self.prompt_line("Enter the quantity for the new requisition request: ")?,
        )?;
        let engineer_name = self.prompt_engineer()?;

        let supplier_id = match self.prompt_supplier_for(part_specification_id)? {
            Some(id) => id,
            None => return Ok(()),
        };

        self.use_case.add_requisition_request_to_part_specification(
            part_specification_id,
            requisition_request_id,
            quantity,
            &engineer_name,
            Local::now(),
            supplier_id,
        )?;
        let message = self.styler.success(&format!(
            "Added requisition request {requisition_request_id} to part specification {part_specification_id}"
        ));
        self.line(message)
    }

    fn prompt_engineer(&mut self) -> Result<String> {
        match self.config.engineer.clone() {
            Some(default) => {
                let name = self.prompt_line(&format!(
                    "Enter the name of the requesting engineer [{default}]: "
                ))?;
                Ok(or_keep(name, &default))
            }
            None => self.prompt_line("Enter the name of the requesting engineer: "),
        }
    }

    /// Offer the part's suppliers, or every supplier when it has none
    fn prompt_supplier_for(&mut self, part_specification_id: EntityId) -> Result<Option<EntityId>> {
        self.line("Select a supplier for the requisition request.")?;
        self.blank()?;

        let assigned = self
            .use_case
            .list_suppliers_of_part_specification(part_specification_id)?;
        if assigned.is_empty() {
            let all = self.use_case.list_suppliers();
            if all.is_empty() {
                self.line(NO_SUPPLIERS)?;
                return Ok(None);
            }
            self.show_suppliers(&all, "List of all suppliers: ")?;
        } else {
            self.show_suppliers(&assigned, "List of suppliers assigned to the part specification: ")?;
        }

        self.prompt_id("Enter id of the supplier to add: ").map(Some)
    }

    fn list_inventory(&mut self) -> Result<()> {
        let part_specifications = self.use_case.list_part_specifications();
        let heading = self.styler.heading("Part specifications:");
        self.line(heading)?;
        if part_specifications.is_empty() {
            self.line("  none")?;
        }
        for model in &part_specifications {
            let Some(id) = model.id else { continue };
            let suppliers = self.use_case.list_suppliers_of_part_specification(id)?;
            let requests = self
                .use_case
                .list_requisition_requests_of_part_specification(id)?;
            let block = inventory_block(
                &self.styler,
                model,
                &suppliers,
                &requests,
                self.config.date_format(),
            );
            for line in block {
                self.line(line)?;
            }
        }

        let supplier_count = self.use_case.list_suppliers().len();
        let request_count = self.use_case.list_requisition_requests().len();
        let summary = self.styler.dim(&format!(
            "{} part specification(s), {} supplier(s), {} requisition request(s)",
            part_specifications.len(),
            supplier_count,
            request_count
        ));
        self.line(summary)
    }

    fn show_part_specifications(&mut self) -> Result<()> {
        self.line("Existing part specifications: ")?;
        for model in self.use_case.list_part_specifications() {
            let line = part_specification_line(&self.styler, &model);
            self.line(line)?;
        }
        Ok(())
    }

    fn show_suppliers(&mut self, suppliers: &[SupplierModel], heading: &str) -> Result<()> {
        self.line(heading)?;
        for model in suppliers {
            let line = supplier_line(&self.styler, model);
            self.line(line)?;
        }
        Ok(())
    }

    fn display_main_menu(&mut self) -> Result<()> {
        self.blank()?;
        self.blank()?;
        let heading = self.styler.heading("Main menu");
        self.line(heading)?;
        for response in MenuResponse::all() {
            self.line(response.to_string())?;
        }
        Ok(())
    }

    fn menu_response(&mut self) -> Result<MenuResponse> {
        let line = self.prompt_line("Enter selection> ")?;
        Ok(MenuResponse::from_input(&line))
    }

    fn prompt_id(&mut self, prompt: &str) -> Result<EntityId> {
        let line = self.prompt_line(prompt)?;
        parse_id(&line)
    }

    fn prompt_id_or(&mut self, prompt: &str, default: EntityId) -> Result<EntityId> {
        let line = self.prompt_line(prompt)?;
        if line.trim().is_empty() {
            Ok(default)
        } else {
            parse_id(&line)
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InventoryError::EndOfInput);
        }
        Ok(line.trim_end_matches(|c| c == '\n' || c == '\r').to_string())
    }

    fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }
}
