use serde::Serialize;

/// A top-level group of the research folder structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Display name, also used verbatim in the section folder name
    pub name: &'static str,
    /// Subfolder labels in display order
    pub subfolders: &'static [&'static str],
}

impl Section {
    /// Position of a subfolder label within this section
    pub fn subfolder_index(&self, subfolder: &str) -> Option<usize> {
        self.subfolders.iter().position(|s| *s == subfolder)
    }
}

/// Fixed extra children created below a specific subfolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubSubfolderRule {
    pub section: &'static str,
    pub subfolder: &'static str,
    pub children: &'static [&'static str],
}

static SECTIONS: [Section; 6] = [
    Section {
        name: "Intro & Documentation",
        subfolders: &[
            "General Info",
            "Project Proposal",
            "Go-to Person",
            "Fieldwork Site",
            "Sample list 4 Lab-Team",
            "Material List",
            "Fieldwork Protocol-Planning-Permission",
            "Images",
            "Meetings",
        ],
    },
    Section {
        name: "Lab Measurements",
        subfolders: &[
            "TOC",
            "pH",
            "CN",
            "ICP-MS",
            "CFA",
            "Aqualog",
            "Raw Data Preparation",
            "Misc-Lab Data",
        ],
    },
    Section {
        name: "Field Measurements",
        subfolders: &["Meteorology", "Hydrology", "Vegetation", "Soil"],
    },
    Section {
        name: "Geodata",
        subfolders: &["Coordinates", "Maps", "Satellite Images"],
    },
    Section {
        name: "Finance & Administration",
        subfolders: &[
            "Approvals & Guidelines",
            "Expenditure Reports",
            "Account Overview",
            "Bank Statements",
            "Personnel-Assistants & Staff",
            "Contracts - Service & Transfer",
            "Travel Expense Reports",
            "Reimbursement Claims",
            "Purchase Orders",
        ],
    },
    Section {
        name: "Outcome",
        subfolders: &[
            "Master Files",
            "Presentations",
            "Publications",
            "Reports",
            "Logo",
            "Other Outputs",
        ],
    },
];

static SUB_SUBFOLDER_RULES: [SubSubfolderRule; 6] = [
    SubSubfolderRule {
        section: "Finance & Administration",
        subfolder: "Personnel-Assistants & Staff",
        children: &["Personnel-Assistants", "Personnel-Staff"],
    },
    SubSubfolderRule {
        section: "Finance & Administration",
        subfolder: "Contracts - Service & Transfer",
        children: &["Contracts-Service", "Contracts-Transfer"],
    },
    SubSubfolderRule {
        section: "Field Measurements",
        subfolder: "Meteorology",
        children: &["Meteorology Manual", "Meteorology Instrument"],
    },
    SubSubfolderRule {
        section: "Field Measurements",
        subfolder: "Hydrology",
        children: &["Hydrology Manual", "Hydrology Instrument"],
    },
    SubSubfolderRule {
        section: "Field Measurements",
        subfolder: "Vegetation",
        children: &["Vegetation Manual", "Vegetation Instrument"],
    },
    SubSubfolderRule {
        section: "Field Measurements",
        subfolder: "Soil",
        children: &["Soil Manual", "Soil Instrument"],
    },
];

/// All sections in display and creation order
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

pub fn find_section(name: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.name == name)
}

/// Extra child labels for a (section, subfolder) pair; empty when no rule exists
pub fn extra_children(section: &str, subfolder: &str) -> &'static [&'static str] {
    SUB_SUBFOLDER_RULES
        .iter()
        .find(|rule| rule.section == section && rule.subfolder == subfolder)
        .map(|rule| rule.children)
        .unwrap_or_default()
}

/// `{projectCode}-{acronym}-{year}-{person}`
pub fn build_main_folder_name(
    project_code: &str,
    acronym: &str,
    year: &str,
    person: &str,
) -> String {
    format!("{project_code}-{acronym}-{year}-{person}")
}

/// `{projectCode}-{acronym} {sectionName}`
pub fn build_section_folder_name(project_code: &str, acronym: &str, section_name: &str) -> String {
    format!("{project_code}-{acronym} {section_name}")
}

/// Same pattern as sections; used for subfolders and their extra children
pub fn build_subfolder_name(project_code: &str, acronym: &str, sub_name: &str) -> String {
    format!("{project_code}-{acronym} {sub_name}")
}
